use tripsplit_domain::{ExpenseCategory, ParticipantId};

/// Editable field of a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantField {
    Name,
    Amount(ExpenseCategory),
}

/// Editable field of the trip metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripField {
    StartDate,
    EndDate,
    Destination,
    Accommodation,
    TransportMethod,
}

/// One user action against the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerCommand<'a> {
    AddParticipant,
    RemoveParticipant(ParticipantId),
    EditParticipant {
        id: ParticipantId,
        field: ParticipantField,
        value: &'a str,
    },
    EditTrip {
        field: TripField,
        value: &'a str,
    },
    SelectDriver(Option<ParticipantId>),
    Calculate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCommandWithLine<'a> {
    pub line: usize,
    pub command: PlannerCommand<'a>,
}

/// Ordered planner commands read from a script.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script<'a> {
    commands: Vec<ScriptCommandWithLine<'a>>,
}

impl<'a> Script<'a> {
    pub fn new(commands: Vec<ScriptCommandWithLine<'a>>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[ScriptCommandWithLine<'a>] {
        &self.commands
    }

    pub fn has_calculate(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c.command, PlannerCommand::Calculate))
    }
}
