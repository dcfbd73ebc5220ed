#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    ExpenseCategory, Money, Participant, ParticipantId, ParticipantRow, Roster, RosterError,
    SettlementMatrix, SettlementResult, TransportMethod, TripConfig, UnknownExpenseCategory,
    UnknownTransportMethod,
};
pub use services::{
    FuelSharePolicy, FuelShares, RowCalculator, SettlementEngine, SettlementError,
    SettlementMatrixBuilder, SettlementMatrixCalculator,
};
