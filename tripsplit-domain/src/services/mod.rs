pub mod fuel_share;
pub mod row_calculator;
pub mod settlement_engine;
pub mod settlement_matrix;

pub use fuel_share::{FuelSharePolicy, FuelShares};
pub use row_calculator::RowCalculator;
pub use settlement_engine::{SettlementEngine, SettlementError};
pub use settlement_matrix::{SettlementMatrixBuilder, SettlementMatrixCalculator};
