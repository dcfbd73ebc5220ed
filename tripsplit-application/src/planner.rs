use crate::{
    amount::coerce_amount,
    error::PlannerError,
    model::{ParticipantField, PlannerCommand, TripField},
};
use tripsplit_domain::{
    Participant, ParticipantId, Roster, RosterError, SettlementEngine, SettlementResult,
    TransportMethod, TripConfig,
};

/// Editable trip state: roster, trip metadata and driver selection.
///
/// Keeps the driver consistent with the transport method and roster on every edit, so
/// `calculate` always hands the engine a valid selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripPlanner {
    roster: Roster,
    trip: TripConfig,
    driver: Option<ParticipantId>,
}

impl Default for TripPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TripPlanner {
    /// One blank participant, public transit, no driver.
    pub fn new() -> Self {
        Self {
            roster: Roster::single_blank(),
            trip: TripConfig::default(),
            driver: None,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn trip(&self) -> &TripConfig {
        &self.trip
    }

    pub fn driver(&self) -> Option<ParticipantId> {
        self.driver
    }

    pub fn add_participant(&mut self) -> ParticipantId {
        self.roster.push(Participant::default())
    }

    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<(), PlannerError> {
        self.roster.remove(id)?;

        self.driver = match self.driver {
            Some(driver) if driver == id => None,
            Some(driver) if driver > id => Some(ParticipantId(driver.index() - 1)),
            other => other,
        };
        Ok(())
    }

    pub fn edit_participant(
        &mut self,
        id: ParticipantId,
        field: ParticipantField,
        value: &str,
    ) -> Result<(), PlannerError> {
        let person = self.roster.get_mut(id)?;
        match field {
            ParticipantField::Name => person.name = value.to_string(),
            ParticipantField::Amount(category) => {
                person.set_amount(category, coerce_amount(value));
            }
        }
        Ok(())
    }

    pub fn edit_trip(&mut self, field: TripField, value: &str) -> Result<(), PlannerError> {
        match field {
            TripField::StartDate => self.trip.start_date = value.to_string(),
            TripField::EndDate => self.trip.end_date = value.to_string(),
            TripField::Destination => self.trip.destination = value.to_string(),
            TripField::Accommodation => self.trip.accommodation = value.to_string(),
            TripField::TransportMethod => {
                let method: TransportMethod = value.parse()?;
                self.set_transport_method(method);
            }
        }
        Ok(())
    }

    pub fn set_transport_method(&mut self, method: TransportMethod) {
        self.trip.transport_method = method;
        match method {
            TransportMethod::PublicTransit => self.driver = None,
            TransportMethod::SelfDriven => {
                if self.driver.is_none() {
                    self.driver = Some(ParticipantId(0));
                }
            }
        }
    }

    pub fn select_driver(&mut self, driver: Option<ParticipantId>) -> Result<(), PlannerError> {
        let Some(id) = driver else {
            self.driver = None;
            return Ok(());
        };
        if !self.trip.transport_method.is_self_driven() {
            return Err(PlannerError::DriverRequiresSelfDriven);
        }
        if !self.roster.contains(id) {
            return Err(RosterError::OutOfRange {
                index: id.index(),
                len: self.roster.len(),
            }
            .into());
        }
        self.driver = Some(id);
        Ok(())
    }

    pub fn calculate(&self) -> Result<SettlementResult, PlannerError> {
        SettlementEngine::compute(&self.roster, &self.trip, self.driver).map_err(Into::into)
    }

    /// Applies one command; `Calculate` returns the settlement, everything else `None`.
    pub fn apply(
        &mut self,
        command: &PlannerCommand<'_>,
    ) -> Result<Option<SettlementResult>, PlannerError> {
        match *command {
            PlannerCommand::AddParticipant => {
                self.add_participant();
            }
            PlannerCommand::RemoveParticipant(id) => self.remove_participant(id)?,
            PlannerCommand::EditParticipant { id, field, value } => {
                self.edit_participant(id, field, value)?;
            }
            PlannerCommand::EditTrip { field, value } => self.edit_trip(field, value)?,
            PlannerCommand::SelectDriver(driver) => self.select_driver(driver)?,
            PlannerCommand::Calculate => return self.calculate().map(Some),
        }
        Ok(None)
    }
}
