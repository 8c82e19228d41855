// Engine-wide constants.
//
// Prices are Q64.96 square roots held in u128, so the tick domain is the
// largest symmetric range whose sqrt price still fits in 128 bits.

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Minimum valid tick value (price ≈ 2^-128)
pub const MIN_TICK: i32 = -443636;

/// Maximum valid tick value (price ≈ 2^128)
pub const MAX_TICK: i32 = 443636;

/// Smallest tick spacing a pool may be configured with
pub const MIN_TICK_SPACING: i32 = 1;

/// Largest tick spacing a pool may be configured with
pub const MAX_TICK_SPACING: i32 = 16384;

// ============================================================
// SQRT PRICE CONSTANTS (Q64.96 format)
// ============================================================

/// Number of fractional bits in a sqrt price
pub const RESOLUTION: u32 = 96;

/// 1.0 in Q64.96
pub const Q96: u128 = 1 << RESOLUTION;

/// sqrt_price_at_tick(MIN_TICK)
pub const MIN_SQRT_RATIO: u128 = 18447090764788882728;

/// sqrt_price_at_tick(MAX_TICK)
pub const MAX_SQRT_RATIO: u128 = 340275971719517849884101479065584693834;

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Fees are expressed in basis points of this denominator
pub const FEE_DENOMINATOR: u32 = 10_000;

/// Highest fee a pool accepts (the fee must leave some input to trade)
pub const MAX_FEE_BPS: u32 = FEE_DENOMINATOR - 1;

// ============================================================
// SWAP CONSTANTS
// ============================================================

/// Maximum initialized ticks a single swap may cross.
/// Steps over empty bitmap words do not count; a swap past the cap fails.
pub const MAX_SWAP_ITERATIONS: u32 = 1024;
