#![no_std]

pub mod error;
pub mod types;
pub mod engine;

pub use error::SwapError;
pub use types::{SwapComputation, SwapParams, SwapResult, SwapState, TickCrossing};
pub use engine::{compute_swap, engine_swap, quote_swap, resolve_price_limit};
