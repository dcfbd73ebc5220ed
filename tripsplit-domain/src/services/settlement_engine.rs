use crate::{
    model::{Money, ParticipantId, ParticipantRow, Roster, SettlementResult, TripConfig},
    services::{FuelSharePolicy, RowCalculator, SettlementMatrixCalculator},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SettlementError {
    #[error("driver {index} is outside the roster (size {len})")]
    DriverOutOfRange { index: usize, len: usize },
}

/// Computes per-person totals and the settlement matrix for a trip.
///
/// Stateless; borrows its inputs and returns a fresh [`SettlementResult`].
pub struct SettlementEngine;

impl SettlementEngine {
    /// Runs a full settlement.
    ///
    /// # Arguments
    /// * `roster` - Participants and what each paid per category
    /// * `trip` - Trip metadata; only the transport method is used
    /// * `driver` - Designated driver, ignored unless the trip is self-driven
    ///
    /// # Errors
    /// Returns [`SettlementError::DriverOutOfRange`] when `driver` does not point into
    /// `roster`.
    pub fn compute(
        roster: &Roster,
        trip: &TripConfig,
        driver: Option<ParticipantId>,
    ) -> Result<SettlementResult, SettlementError> {
        if let Some(id) = driver.filter(|&id| !roster.contains(id)) {
            return Err(SettlementError::DriverOutOfRange {
                index: id.index(),
                len: roster.len(),
            });
        }

        let method = trip.transport_method;
        let driver = driver.filter(|_| method.is_self_driven());

        let fuel = FuelSharePolicy::compute(roster, method, driver);

        let rows: Vec<ParticipantRow> = roster
            .ids()
            .zip(roster.participants())
            .map(|(id, person)| {
                RowCalculator::compute(
                    id,
                    person,
                    Some(id) == driver,
                    fuel.share_of(id),
                    method,
                )
            })
            .collect();

        let total_cost: Money = rows.iter().map(|row| row.total).sum();
        let average_cost_per_person = total_cost.split(rows.len());

        let matrix = SettlementMatrixCalculator::compute(roster, trip, driver);

        let driver_name = driver
            .and_then(|id| roster.get(id))
            .map(|person| person.name.clone());

        tracing::debug!(
            participant_count = roster.len(),
            transport_method = method.key(),
            driver = ?driver,
            total_fuel = %fuel.total_fuel,
            total_cost = %total_cost,
            average_cost = %average_cost_per_person,
            "Settlement computed"
        );

        Ok(SettlementResult {
            driver,
            driver_name,
            total_fuel: fuel.total_fuel,
            rows,
            average_cost_per_person,
            matrix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExpenseCategory, Participant, TransportMethod};
    use rstest::{fixture, rstest};

    fn trip(method: TransportMethod) -> TripConfig {
        TripConfig {
            start_date: "2024-07-01".to_string(),
            end_date: "2024-07-03".to_string(),
            destination: "Gangneung".to_string(),
            accommodation: "Seaside Inn".to_string(),
            transport_method: method,
        }
    }

    #[fixture]
    fn food_pair() -> Roster {
        Roster::try_new(vec![
            Participant::new("A").with_amount(ExpenseCategory::Food, Money::from_i64(100)),
            Participant::new("B"),
        ])
        .unwrap()
    }

    #[fixture]
    fn fuel_trio() -> Roster {
        Roster::try_new(vec![
            Participant::new("Driver"),
            Participant::new("Filler").with_amount(ExpenseCategory::Fuel, Money::from_i64(90)),
            Participant::new("Rider"),
        ])
        .unwrap()
    }

    #[rstest]
    fn two_people_public_transit_food(food_pair: Roster) {
        let result =
            SettlementEngine::compute(&food_pair, &trip(TransportMethod::PublicTransit), None)
                .unwrap();

        assert_eq!(result.matrix.get(ParticipantId(1), ParticipantId(0)), 50);
        assert_eq!(result.matrix.get(ParticipantId(0), ParticipantId(1)), 0);
        assert_eq!(result.rows[0].total, Money::from_i64(100));
        assert_eq!(result.rows[1].total, Money::ZERO);
        assert_eq!(result.average_cost_per_person, Money::from_i64(50));
        assert_eq!(result.driver_name, None);
        assert_eq!(result.total_fuel, Money::ZERO);
    }

    #[rstest]
    fn three_people_self_driven_fuel(fuel_trio: Roster) {
        let result = SettlementEngine::compute(
            &fuel_trio,
            &trip(TransportMethod::SelfDriven),
            Some(ParticipantId(0)),
        )
        .unwrap();

        assert_eq!(result.total_fuel, Money::from_i64(90));
        assert_eq!(result.driver_name.as_deref(), Some("Driver"));
        let shares: Vec<Money> = result.rows.iter().map(|row| row.fuel_share).collect();
        assert_eq!(
            shares,
            vec![Money::ZERO, Money::from_i64(45), Money::from_i64(45)]
        );
        assert_eq!(result.rows[1].total, Money::from_i64(45));
        assert_eq!(result.rows[2].total, Money::from_i64(-45));
        assert_eq!(result.matrix.get(ParticipantId(2), ParticipantId(1)), 45);
        assert_eq!(result.matrix.owed_to(ParticipantId(0)), 0);
        assert_eq!(result.matrix.owed_by(ParticipantId(0)), 0);
    }

    #[rstest]
    fn driver_ignored_under_public_transit(fuel_trio: Roster) {
        let result = SettlementEngine::compute(
            &fuel_trio,
            &trip(TransportMethod::PublicTransit),
            Some(ParticipantId(0)),
        )
        .unwrap();

        assert_eq!(result.driver, None);
        assert_eq!(result.driver_name, None);
        assert!(result.rows.iter().all(|row| row.fuel_share.is_zero()));
        assert!(result.rows.iter().all(|row| row.fuel.is_zero()));
    }

    #[rstest]
    fn rejects_driver_outside_roster(food_pair: Roster) {
        let result = SettlementEngine::compute(
            &food_pair,
            &trip(TransportMethod::SelfDriven),
            Some(ParticipantId(2)),
        );
        assert_eq!(
            result,
            Err(SettlementError::DriverOutOfRange { index: 2, len: 2 })
        );
    }

    #[rstest]
    #[case::public_transit(TransportMethod::PublicTransit, None)]
    #[case::self_driven_no_driver(TransportMethod::SelfDriven, None)]
    #[case::self_driven_driver(TransportMethod::SelfDriven, Some(ParticipantId(0)))]
    fn single_participant_keeps_everything(
        #[case] method: TransportMethod,
        #[case] driver: Option<ParticipantId>,
    ) {
        let solo = Participant::new("Solo")
            .with_amount(ExpenseCategory::Food, Money::from_i64(10))
            .with_amount(ExpenseCategory::Transport, Money::from_i64(20))
            .with_amount(ExpenseCategory::Stay, Money::from_i64(30))
            .with_amount(ExpenseCategory::Etc, Money::from_i64(40));
        let solo = if method.is_self_driven() {
            solo.with_amount(ExpenseCategory::Fuel, Money::from_i64(50))
        } else {
            solo
        };
        let expected_total = if method.is_self_driven() { 150 } else { 100 };
        let roster = Roster::try_new(vec![solo]).unwrap();

        let result = SettlementEngine::compute(&roster, &trip(method), driver).unwrap();

        assert_eq!(result.matrix.to_vecs(), vec![vec![0]]);
        assert_eq!(result.rows[0].fuel_share, Money::ZERO);
        assert_eq!(result.rows[0].total, Money::from_i64(expected_total));
        assert_eq!(
            result.average_cost_per_person,
            Money::from_i64(expected_total)
        );
    }

    #[rstest]
    fn does_not_mutate_inputs(fuel_trio: Roster) {
        let before = fuel_trio.clone();
        let trip = trip(TransportMethod::SelfDriven);
        let first = SettlementEngine::compute(&fuel_trio, &trip, Some(ParticipantId(0))).unwrap();
        let second = SettlementEngine::compute(&fuel_trio, &trip, Some(ParticipantId(0))).unwrap();

        assert_eq!(fuel_trio, before);
        assert_eq!(first, second);
    }

    #[rstest]
    fn extreme_amounts_do_not_overflow() {
        let huge = Money::from_decimal(rust_decimal::Decimal::MAX);
        let roster = Roster::try_new(vec![
            Participant::new("A")
                .with_amount(ExpenseCategory::Food, huge)
                .with_amount(ExpenseCategory::Stay, huge),
            Participant::new("B").with_amount(ExpenseCategory::Food, huge),
        ])
        .unwrap();

        let result =
            SettlementEngine::compute(&roster, &trip(TransportMethod::PublicTransit), None)
                .unwrap();

        assert_eq!(result.total_cost(), huge);
        assert!(result.matrix.get(ParticipantId(1), ParticipantId(0)) > 0);
    }
}
