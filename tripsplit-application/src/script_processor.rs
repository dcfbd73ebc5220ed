use crate::{
    error::{PlannerError, ScriptParseError},
    model::{PlannerCommand, Script},
    planner::TripPlanner,
    ports::ScriptParser,
};
use tripsplit_domain::{SettlementResult, TripConfig};

/// Settlement taken at one `calculate` in a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationSnapshot {
    /// Script line of the `calculate`, or `None` for the implicit final calculation.
    pub line: Option<usize>,
    pub trip: TripConfig,
    pub result: SettlementResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedCommand {
    pub line: usize,
    pub error: PlannerError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingOutcome {
    Success {
        snapshots: Vec<CalculationSnapshot>,
        rejected: Vec<RejectedCommand>,
    },
    SyntaxError {
        line: usize,
        detail: String,
    },
}

/// Replays planner scripts against a fresh [`TripPlanner`].
#[derive(Clone, Copy)]
pub struct ScriptProcessor<'a> {
    parser: &'a dyn ScriptParser,
}

impl<'a> ScriptProcessor<'a> {
    pub fn new(parser: &'a dyn ScriptParser) -> Self {
        Self { parser }
    }

    pub fn parse_script<'b>(&self, content: &'b str) -> Result<Script<'b>, ScriptParseError> {
        self.parser.parse(content)
    }

    pub fn process(&self, content: &str) -> ProcessingOutcome {
        match self.parse_script(content) {
            Ok(script) => self.replay(&script),
            Err(ScriptParseError::SyntaxError { line, detail }) => {
                ProcessingOutcome::SyntaxError { line, detail }
            }
        }
    }

    /// Rejected mutations are skipped, mirroring a form that ignores invalid edits.
    /// A script without `calculate` is calculated once after the last command.
    pub fn replay(&self, script: &Script<'_>) -> ProcessingOutcome {
        let mut planner = TripPlanner::new();
        let mut snapshots = Vec::new();
        let mut rejected = Vec::new();

        for entry in script.commands() {
            match planner.apply(&entry.command) {
                Ok(Some(result)) => snapshots.push(CalculationSnapshot {
                    line: Some(entry.line),
                    trip: planner.trip().clone(),
                    result,
                }),
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(
                        line = entry.line,
                        command = ?entry.command,
                        %error,
                        "Planner command rejected"
                    );
                    rejected.push(RejectedCommand {
                        line: entry.line,
                        error,
                    });
                }
            }
        }

        if !script.has_calculate() {
            match planner.apply(&PlannerCommand::Calculate) {
                Ok(Some(result)) => snapshots.push(CalculationSnapshot {
                    line: None,
                    trip: planner.trip().clone(),
                    result,
                }),
                Ok(None) => {}
                Err(error) => {
                    tracing::error!(%error, "Final calculation failed");
                }
            }
        }

        tracing::debug!(
            command_count = script.commands().len(),
            snapshot_count = snapshots.len(),
            rejected_count = rejected.len(),
            "Script replayed"
        );

        ProcessingOutcome::Success {
            snapshots,
            rejected,
        }
    }
}
