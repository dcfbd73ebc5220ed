#![warn(clippy::uninlined_format_args)]

pub mod format;
pub mod settlement_presenter;
pub mod svg_table;
pub mod table;

pub use format::{format_amount, format_currency, group_thousands, transport_label};
pub use settlement_presenter::{SettlementPresenter, SettlementView};
pub use svg_table::{render_svg, stack_svgs};
pub use table::{Alignment, Table, render_text};
