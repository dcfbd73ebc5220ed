use crate::model::{Money, ParticipantId, Roster, TransportMethod};

/// Pooled fuel cost and the portion charged to each participant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuelShares {
    pub total_fuel: Money,
    pub shares: Vec<Money>,
}

impl FuelShares {
    pub fn share_of(&self, id: ParticipantId) -> Money {
        self.shares.get(id.index()).copied().unwrap_or(Money::ZERO)
    }

    fn none(len: usize, total_fuel: Money) -> Self {
        Self {
            total_fuel,
            shares: vec![Money::ZERO; len],
        }
    }
}

/// Splits pooled fuel evenly among everyone except the driver.
pub struct FuelSharePolicy;

impl FuelSharePolicy {
    /// `driver` must already be validated against `roster`.
    pub fn compute(
        roster: &Roster,
        transport_method: TransportMethod,
        driver: Option<ParticipantId>,
    ) -> FuelShares {
        if !transport_method.is_self_driven() {
            return FuelShares::none(roster.len(), Money::ZERO);
        }

        let total_fuel: Money = roster.participants().iter().map(|p| p.fuel).sum();

        // Nobody to share with on a solo trip.
        if roster.len() < 2 {
            return FuelShares::none(roster.len(), total_fuel);
        }

        let payer_count = roster.ids().filter(|&id| Some(id) != driver).count();
        let per_payer = total_fuel.split(payer_count);

        let shares = roster
            .ids()
            .map(|id| {
                if Some(id) == driver {
                    Money::ZERO
                } else {
                    per_payer
                }
            })
            .collect();

        FuelShares { total_fuel, shares }
    }
}
