use crate::{
    model::{ExpenseCategory, Money, ParticipantId, Roster, SettlementMatrix, TripConfig},
    services::FuelSharePolicy,
};
use rust_decimal::Decimal;

/// Accumulates exact per-cell debts across categories; rounds once on `build`.
pub struct SettlementMatrixBuilder {
    size: usize,
    cells: Vec<Decimal>,
}

impl SettlementMatrixBuilder {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Decimal::ZERO; size * size],
        }
    }

    /// Spreads each payer's amount over every participant with a nonzero share base.
    ///
    /// The payer's own slot counts toward the divisor but is never charged, so a payer
    /// keeps their share and the others owe them the rest.
    pub fn distribute(&mut self, paid: &[Money], share_bases: &[Money]) -> &mut Self {
        debug_assert_eq!(paid.len(), self.size);
        debug_assert_eq!(share_bases.len(), self.size);

        let receiver_count = share_bases.iter().filter(|share| !share.is_zero()).count();

        for (payer, &amount) in paid.iter().enumerate() {
            if amount.is_zero() {
                continue;
            }
            let portion = amount.split(receiver_count);
            if portion.is_zero() {
                continue;
            }
            for (receiver, share) in share_bases.iter().enumerate() {
                if receiver == payer || share.is_zero() {
                    continue;
                }
                let cell = &mut self.cells[receiver * self.size + payer];
                *cell = cell.saturating_add(portion.as_decimal());
            }
        }

        self
    }

    pub fn build(self) -> SettlementMatrix {
        let cells = self
            .cells
            .into_iter()
            .map(|cell| Money::from_decimal(cell).round_half_up())
            .collect();
        SettlementMatrix::from_cells(self.size, cells)
    }
}

pub struct SettlementMatrixCalculator;

impl SettlementMatrixCalculator {
    /// Builds the who-owes-whom grid. `driver` must already be validated against
    /// `roster`.
    pub fn compute(
        roster: &Roster,
        trip: &TripConfig,
        driver: Option<ParticipantId>,
    ) -> SettlementMatrix {
        let n = roster.len();
        let mut builder = SettlementMatrixBuilder::new(n);

        for category in ExpenseCategory::SHARED {
            let paid: Vec<Money> = roster
                .participants()
                .iter()
                .map(|p| p.amount(category))
                .collect();
            let even_share = roster.category_total(category).split(n);
            builder.distribute(&paid, &vec![even_share; n]);
        }

        if trip.transport_method.is_self_driven() && driver.is_some() {
            let paid: Vec<Money> = roster.participants().iter().map(|p| p.fuel).collect();
            let fuel = FuelSharePolicy::compute(roster, trip.transport_method, driver);
            builder.distribute(&paid, &fuel.shares);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Participant, TransportMethod};
    use rstest::rstest;

    fn money(values: &[i64]) -> Vec<Money> {
        values.iter().copied().map(Money::from_i64).collect()
    }

    #[rstest]
    #[case::half_to_other(&[100, 0], &[50, 50], vec![vec![0, 0], vec![50, 0]])]
    #[case::both_paid(&[60, 30], &[45, 45], vec![vec![0, 15], vec![30, 0]])]
    #[case::driver_never_charged(&[0, 90, 0], &[0, 45, 45], vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 45, 0]])]
    #[case::nothing_paid(&[0, 0, 0], &[0, 0, 0], vec![vec![0; 3]; 3])]
    #[case::no_receivers(&[10, 0], &[0, 0], vec![vec![0; 2]; 2])]
    fn distribute_cases(
        #[case] paid: &[i64],
        #[case] shares: &[i64],
        #[case] expected: Vec<Vec<i64>>,
    ) {
        let mut builder = SettlementMatrixBuilder::new(paid.len());
        builder.distribute(&money(paid), &money(shares));
        assert_eq!(builder.build().to_vecs(), expected);
    }

    #[rstest]
    fn rounds_after_accumulating_categories() {
        // 1/3 + 1/3 from two categories is 0.67 and rounds to 1; rounding each pass
        // separately would give 0.
        let mut builder = SettlementMatrixBuilder::new(3);
        builder
            .distribute(&money(&[1, 0, 0]), &money(&[1, 1, 1]))
            .distribute(&money(&[1, 0, 0]), &money(&[1, 1, 1]));
        let matrix = builder.build();
        assert_eq!(matrix.get(ParticipantId(1), ParticipantId(0)), 1);
        assert_eq!(matrix.get(ParticipantId(2), ParticipantId(0)), 1);
    }

    #[rstest]
    fn fuel_pass_requires_driver() {
        let roster = Roster::try_new(vec![
            Participant::new("A").with_amount(ExpenseCategory::Fuel, Money::from_i64(90)),
            Participant::new("B"),
        ])
        .unwrap();
        let trip = TripConfig {
            transport_method: TransportMethod::SelfDriven,
            ..TripConfig::default()
        };

        let without_driver = SettlementMatrixCalculator::compute(&roster, &trip, None);
        assert_eq!(without_driver.to_vecs(), vec![vec![0, 0], vec![0, 0]]);

        let with_driver =
            SettlementMatrixCalculator::compute(&roster, &trip, Some(ParticipantId(0)));
        assert_eq!(with_driver.to_vecs(), vec![vec![0, 0], vec![90, 0]]);
    }

    #[rstest]
    fn single_participant_matrix_is_zero() {
        let roster = Roster::try_new(vec![
            Participant::new("Solo").with_amount(ExpenseCategory::Food, Money::from_i64(500)),
        ])
        .unwrap();
        let matrix = SettlementMatrixCalculator::compute(&roster, &TripConfig::default(), None);
        assert_eq!(matrix.to_vecs(), vec![vec![0]]);
    }
}
