#![warn(clippy::uninlined_format_args)]

pub mod amount;
pub mod error;
pub mod model;
pub mod planner;
pub mod ports;
pub mod script_processor;

pub use amount::coerce_amount;
pub use error::{PlannerError, ScriptParseError};
pub use model::{ParticipantField, PlannerCommand, Script, ScriptCommandWithLine, TripField};
pub use planner::TripPlanner;
pub use ports::ScriptParser;
pub use script_processor::{
    CalculationSnapshot, ProcessingOutcome, RejectedCommand, ScriptProcessor,
};
