// Eddy Math Package
//
// Pure fixed-point arithmetic for the pool engine: Q64.96 sqrt prices,
// tick conversion, liquidity/amount conversion and the single swap step.

#![no_std]

pub mod constants;
pub mod error;
pub mod full_math;
pub mod tick_math;
pub mod sqrt_price;
pub mod liquidity;
pub mod swap_step;

pub use constants::*;
pub use error::MathError;

pub use full_math::{
    div_rounding_up,
    fee_growth_delta,
    mul_div,
    mul_div_q128,
    mul_div_rounding_up,
    mul_shift_128,
    wrapping_add_u256,
    wrapping_sub_u256,
};

pub use tick_math::{get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, is_valid_tick};

pub use sqrt_price::{
    get_next_sqrt_price_from_amount0_rounding_up,
    get_next_sqrt_price_from_amount1_rounding_down,
    get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
};

pub use liquidity::{
    add_delta,
    get_amount_0_delta,
    get_amount_1_delta,
    get_amounts_for_liquidity,
    get_liquidity_for_amount0,
    get_liquidity_for_amount1,
    get_liquidity_for_amounts,
};

pub use swap_step::{compute_swap_step, SwapStep};

/// Whether `tick` is usable as a position boundary for `tick_spacing`
#[inline]
pub fn is_aligned_tick(tick: i32, tick_spacing: i32) -> bool {
    tick_spacing > 0 && is_valid_tick(tick) && tick.rem_euclid(tick_spacing) == 0
}

/// Largest `liquidity_gross` any single tick may carry for a spacing
///
/// Splits u128::MAX evenly over every usable tick so the global
/// liquidity sum can never overflow.
pub fn max_liquidity_per_tick(tick_spacing: i32) -> u128 {
    let spacing = tick_spacing.max(1);
    let min_tick = (MIN_TICK / spacing) * spacing;
    let max_tick = (MAX_TICK / spacing) * spacing;
    let num_ticks = ((max_tick - min_tick) / spacing) as u128 + 1;
    u128::MAX / num_ticks
}
