// SPDX-License-Identifier: MIT
// Sqrt price stepping

use soroban_sdk::{Env, U256};
use crate::constants::Q96;
use crate::error::MathError;
use crate::full_math::{mul_div, mul_div_rounding_up, u256_max, u256_to_u128};

/// L * sqrt_price must stay below this for the exact token0 formula to fit in 256 bits
const EXACT_PRODUCT_BOUND: u128 = 1 << 96;

/// Next sqrt price after adding or removing `amount` of token0, rounded up
///
/// Exact form: L * P / (L ± amount * P).
/// When L * 2^96 * P would not fit in 256 bits, falls back to
/// L / (L / P ± amount), which also rounds the price up.
pub fn get_next_sqrt_price_from_amount0_rounding_up(
    env: &Env,
    sqrt_price_x96: u128,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> Result<u128, MathError> {
    if amount == 0 {
        return Ok(sqrt_price_x96);
    }

    let zero = U256::from_u32(env, 0);
    let price = U256::from_u128(env, sqrt_price_x96);
    let numerator = U256::from_u128(env, liquidity).mul(&U256::from_u128(env, Q96));
    let product = U256::from_u128(env, amount).mul(&price);

    // L * P < 2^160 keeps numerator * P below 2^256
    let fits = U256::from_u128(env, liquidity)
        .mul(&price)
        .div(&U256::from_u128(env, EXACT_PRODUCT_BOUND))
        < U256::from_u128(env, 1u128 << 64);

    if fits {
        let denominator = if add {
            let headroom = u256_max(env).sub(&numerator);
            if product > headroom {
                return fallback_amount0(env, sqrt_price_x96, &numerator, amount, add);
            }
            numerator.add(&product)
        } else {
            if product >= numerator {
                return Err(MathError::PriceOverflow);
            }
            numerator.sub(&product)
        };

        let full = numerator.mul(&price);
        let next = u256_to_u128(&full.div(&denominator)).map_err(|_| MathError::PriceOverflow)?;
        return if full.rem_euclid(&denominator) > zero {
            next.checked_add(1).ok_or(MathError::PriceOverflow)
        } else {
            Ok(next)
        };
    }

    fallback_amount0(env, sqrt_price_x96, &numerator, amount, add)
}

fn fallback_amount0(
    env: &Env,
    sqrt_price_x96: u128,
    numerator: &U256,
    amount: u128,
    add: bool,
) -> Result<u128, MathError> {
    let base = numerator.div(&U256::from_u128(env, sqrt_price_x96));
    let amount_256 = U256::from_u128(env, amount);

    let denominator = if add {
        base.add(&amount_256)
    } else {
        if base <= amount_256 {
            return Err(MathError::PriceOverflow);
        }
        base.sub(&amount_256)
    };

    let next = numerator.div(&denominator);
    let rounded = if numerator.rem_euclid(&denominator) > U256::from_u32(env, 0) {
        next.add(&U256::from_u32(env, 1))
    } else {
        next
    };
    u256_to_u128(&rounded).map_err(|_| MathError::PriceOverflow)
}

/// Next sqrt price after adding or removing `amount` of token1, rounded down
pub fn get_next_sqrt_price_from_amount1_rounding_down(
    env: &Env,
    sqrt_price_x96: u128,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> Result<u128, MathError> {
    if add {
        let quotient = mul_div(env, amount, Q96, liquidity).map_err(|_| MathError::PriceOverflow)?;
        sqrt_price_x96
            .checked_add(quotient)
            .ok_or(MathError::PriceOverflow)
    } else {
        let quotient = mul_div_rounding_up(env, amount, Q96, liquidity)
            .map_err(|_| MathError::PriceOverflow)?;
        if sqrt_price_x96 <= quotient {
            return Err(MathError::PriceOverflow);
        }
        Ok(sqrt_price_x96 - quotient)
    }
}

/// Next sqrt price given an input amount of the token being sold
pub fn get_next_sqrt_price_from_input(
    env: &Env,
    sqrt_price_x96: u128,
    liquidity: u128,
    amount_in: u128,
    zero_for_one: bool,
) -> Result<u128, MathError> {
    if sqrt_price_x96 == 0 {
        return Err(MathError::SqrtPriceOutOfRange);
    }
    if liquidity == 0 {
        return Err(MathError::ZeroLiquidity);
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount0_rounding_up(env, sqrt_price_x96, liquidity, amount_in, true)
    } else {
        get_next_sqrt_price_from_amount1_rounding_down(env, sqrt_price_x96, liquidity, amount_in, true)
    }
}

/// Next sqrt price given an output amount of the token being bought
pub fn get_next_sqrt_price_from_output(
    env: &Env,
    sqrt_price_x96: u128,
    liquidity: u128,
    amount_out: u128,
    zero_for_one: bool,
) -> Result<u128, MathError> {
    if sqrt_price_x96 == 0 {
        return Err(MathError::SqrtPriceOutOfRange);
    }
    if liquidity == 0 {
        return Err(MathError::ZeroLiquidity);
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount1_rounding_down(env, sqrt_price_x96, liquidity, amount_out, false)
    } else {
        get_next_sqrt_price_from_amount0_rounding_up(env, sqrt_price_x96, liquidity, amount_out, false)
    }
}
