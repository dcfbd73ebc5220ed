use tripsplit_application::{
    ParticipantField, PlannerCommand, Script, ScriptCommandWithLine, ScriptParseError,
    ScriptParser, TripField,
};
use tripsplit_domain::{ExpenseCategory, ParticipantId};
use tripsplit_parser::{ParseError, PersonField, Statement, TripKey, parse_program};

#[derive(Default)]
pub struct TripScriptParser;

impl ScriptParser for TripScriptParser {
    fn parse<'a>(&self, content: &'a str) -> Result<Script<'a>, ScriptParseError> {
        let program = parse_program(content).map_err(|err| match err {
            ParseError::SyntaxError { line, detail } => {
                ScriptParseError::SyntaxError { line, detail }
            }
        })?;

        let commands = program
            .statements
            .into_iter()
            .map(|stmt| ScriptCommandWithLine {
                line: stmt.line,
                command: to_command(stmt.statement),
            })
            .collect();

        Ok(Script::new(commands))
    }
}

fn to_command(statement: Statement<'_>) -> PlannerCommand<'_> {
    match statement {
        Statement::Add => PlannerCommand::AddParticipant,
        Statement::Remove(index) => PlannerCommand::RemoveParticipant(ParticipantId(index)),
        Statement::Set {
            index,
            field,
            value,
        } => PlannerCommand::EditParticipant {
            id: ParticipantId(index),
            field: to_participant_field(field),
            value,
        },
        Statement::Trip { key, value } => PlannerCommand::EditTrip {
            field: to_trip_field(key),
            value,
        },
        Statement::Driver(index) => PlannerCommand::SelectDriver(index.map(ParticipantId)),
        Statement::Calculate => PlannerCommand::Calculate,
    }
}

fn to_participant_field(field: PersonField) -> ParticipantField {
    match field {
        PersonField::Name => ParticipantField::Name,
        PersonField::Food => ParticipantField::Amount(ExpenseCategory::Food),
        PersonField::Transport => ParticipantField::Amount(ExpenseCategory::Transport),
        PersonField::Stay => ParticipantField::Amount(ExpenseCategory::Stay),
        PersonField::Fuel => ParticipantField::Amount(ExpenseCategory::Fuel),
        PersonField::Etc => ParticipantField::Amount(ExpenseCategory::Etc),
    }
}

fn to_trip_field(key: TripKey) -> TripField {
    match key {
        TripKey::Start => TripField::StartDate,
        TripKey::End => TripField::EndDate,
        TripKey::Destination => TripField::Destination,
        TripKey::Accommodation => TripField::Accommodation,
        TripKey::Transport => TripField::TransportMethod,
    }
}
