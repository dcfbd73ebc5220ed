use crate::model::{Money, Participant, ParticipantId, ParticipantRow, TransportMethod};

pub struct RowCalculator;

impl RowCalculator {
    /// Net liability of one participant: everything paid minus the fuel share reassigned
    /// to them. Fuel only counts under self-driven transport.
    pub fn compute(
        id: ParticipantId,
        person: &Participant,
        is_driver: bool,
        fuel_share: Money,
        transport_method: TransportMethod,
    ) -> ParticipantRow {
        let fuel = if transport_method.is_self_driven() {
            person.fuel
        } else {
            Money::ZERO
        };
        let fuel_share = if is_driver { Money::ZERO } else { fuel_share };

        let total =
            person.food + person.transport + person.stay + person.etc + fuel - fuel_share;

        ParticipantRow {
            id,
            name: person.name.clone(),
            food: person.food,
            transport: person.transport,
            stay: person.stay,
            fuel,
            etc: person.etc,
            fuel_share,
            total,
        }
    }
}
