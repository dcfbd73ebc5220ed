use tripsplit_domain::{RosterError, SettlementError, UnknownTransportMethod};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlannerError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Settlement(#[from] SettlementError),
    #[error(transparent)]
    TransportMethod(#[from] UnknownTransportMethod),
    #[error("a driver can only be selected for self-driven trips")]
    DriverRequiresSelfDriven,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptParseError {
    #[error("syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}
