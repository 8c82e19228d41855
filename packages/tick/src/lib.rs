#![no_std]

pub mod types;
pub mod error;
pub mod store;
pub mod update;
pub mod fee_growth;
pub mod bitmap;

pub use types::TickInfo;
pub use error::TickError;
pub use store::{TickReader, TickStore};
pub use update::{cross_tick, liquidity_net_at, update_tick};
pub use fee_growth::{get_fee_growth_inside, initial_outside};
pub use bitmap::{compress, flip_tick, is_flipped, next_initialized_tick_within_one_word};

// Re-export from math
pub use eddy_math::{is_aligned_tick, is_valid_tick, max_liquidity_per_tick};
