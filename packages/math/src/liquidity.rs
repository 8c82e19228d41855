// SPDX-License-Identifier: MIT
// Liquidity Calculations

use soroban_sdk::{Env, U256};
use crate::constants::Q96;
use crate::error::MathError;
use crate::full_math::{mul_div, mul_div_rounding_up, u256_to_u128};

#[inline]
fn sort_prices(sqrt_price_a: u128, sqrt_price_b: u128) -> (u128, u128) {
    if sqrt_price_a < sqrt_price_b {
        (sqrt_price_a, sqrt_price_b)
    } else {
        (sqrt_price_b, sqrt_price_a)
    }
}

/// Token0 amount between two prices: L * (upper - lower) / (upper * lower)
///
/// L * (upper - lower) * 2^96 can reach 352 bits, so the division by `upper`
/// is split into quotient and remainder to stay inside 256 bits.
pub fn get_amount_0_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);
    if sqrt_lower == 0 {
        return Err(MathError::DivisionByZero);
    }

    let zero = U256::from_u32(env, 0);
    let one = U256::from_u32(env, 1);
    let q96 = U256::from_u128(env, Q96);
    let upper = U256::from_u128(env, sqrt_upper);
    let lower = U256::from_u128(env, sqrt_lower);

    let numerator = U256::from_u128(env, liquidity).mul(&U256::from_u128(env, sqrt_upper - sqrt_lower));
    let quotient = numerator.div(&upper);
    let remainder_scaled = numerator.rem_euclid(&upper).mul(&q96);

    // numerator * 2^96 / upper
    let mut scaled = quotient.mul(&q96).add(&remainder_scaled.div(&upper));
    if round_up && remainder_scaled.rem_euclid(&upper) > zero {
        scaled = scaled.add(&one);
    }

    let mut amount = scaled.div(&lower);
    if round_up && scaled.rem_euclid(&lower) > zero {
        amount = amount.add(&one);
    }

    u256_to_u128(&amount)
}

/// Token1 amount between two prices: L * (upper - lower) / 2^96
pub fn get_amount_1_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);

    if round_up {
        mul_div_rounding_up(env, liquidity, sqrt_upper - sqrt_lower, Q96)
    } else {
        mul_div(env, liquidity, sqrt_upper - sqrt_lower, Q96)
    }
}

/// Calculate liquidity from token0 amount
pub fn get_liquidity_for_amount0(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    amount0: u128,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);
    let intermediate = mul_div(env, sqrt_lower, sqrt_upper, Q96)?;
    mul_div(env, amount0, intermediate, sqrt_upper - sqrt_lower)
}

/// Calculate liquidity from token1 amount
pub fn get_liquidity_for_amount1(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    amount1: u128,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);
    mul_div(env, amount1, Q96, sqrt_upper - sqrt_lower)
}

/// Largest liquidity that both amounts can back at the current price
pub fn get_liquidity_for_amounts(
    env: &Env,
    sqrt_price_current: u128,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    amount0: u128,
    amount1: u128,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);

    if sqrt_price_current <= sqrt_lower {
        get_liquidity_for_amount0(env, sqrt_lower, sqrt_upper, amount0)
    } else if sqrt_price_current < sqrt_upper {
        let liquidity0 = get_liquidity_for_amount0(env, sqrt_price_current, sqrt_upper, amount0)?;
        let liquidity1 = get_liquidity_for_amount1(env, sqrt_lower, sqrt_price_current, amount1)?;
        Ok(liquidity0.min(liquidity1))
    } else {
        get_liquidity_for_amount1(env, sqrt_lower, sqrt_upper, amount1)
    }
}

/// Token amounts represented by `liquidity` over a range at the current price
///
/// Below the range only token0 is held, above it only token1, inside it both.
/// Mint rounds up so the pool never under-collects; burn rounds down.
pub fn get_amounts_for_liquidity(
    env: &Env,
    sqrt_price_current: u128,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<(u128, u128), MathError> {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);

    if sqrt_price_current <= sqrt_lower {
        let amount0 = get_amount_0_delta(env, sqrt_lower, sqrt_upper, liquidity, round_up)?;
        Ok((amount0, 0))
    } else if sqrt_price_current < sqrt_upper {
        let amount0 = get_amount_0_delta(env, sqrt_price_current, sqrt_upper, liquidity, round_up)?;
        let amount1 = get_amount_1_delta(env, sqrt_lower, sqrt_price_current, liquidity, round_up)?;
        Ok((amount0, amount1))
    } else {
        let amount1 = get_amount_1_delta(env, sqrt_lower, sqrt_upper, liquidity, round_up)?;
        Ok((0, amount1))
    }
}

/// Apply a signed delta to liquidity, failing instead of saturating
#[inline]
pub fn add_delta(liquidity: u128, delta: i128) -> Result<u128, MathError> {
    if delta < 0 {
        liquidity
            .checked_sub(delta.unsigned_abs())
            .ok_or(MathError::LiquiditySub)
    } else {
        liquidity
            .checked_add(delta as u128)
            .ok_or(MathError::LiquidityAdd)
    }
}
