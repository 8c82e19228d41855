#![no_std]

pub mod types;
pub mod error;
pub mod manager;
pub mod fees;

pub use types::{Position, PositionInfo, PositionKey};
pub use error::PositionError;
pub use manager::{credit_owed, has_liquidity, update_position, validate_position_params};
pub use fees::{calculate_pending_fees, collect_owed};
