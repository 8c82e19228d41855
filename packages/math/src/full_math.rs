// SPDX-License-Identifier: MIT
// Full-precision integer arithmetic

use soroban_sdk::{Env, U256};
use crate::error::MathError;

const LOW_64: u128 = 0xFFFF_FFFF_FFFF_FFFF;

/// Converts a U256 back to u128, failing if it does not fit
#[inline]
pub fn u256_to_u128(value: &U256) -> Result<u128, MathError> {
    value.to_u128().ok_or(MathError::Overflow)
}

/// 2^128 as a U256
#[inline]
pub fn q128(env: &Env) -> U256 {
    U256::from_u128(env, u128::MAX).add(&U256::from_u32(env, 1))
}

/// 2^256 - 1
#[inline]
pub fn u256_max(env: &Env) -> U256 {
    U256::from_u128(env, u128::MAX)
        .mul(&U256::from_u128(env, u128::MAX))
        .add(&U256::from_u128(env, u128::MAX))
        .add(&U256::from_u128(env, u128::MAX))
}

/// floor(a * b / denominator) with a 256-bit intermediate product
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = product.div(&U256::from_u128(env, denominator));

    u256_to_u128(&result)
}

/// ceil(a * b / denominator) with a 256-bit intermediate product
pub fn mul_div_rounding_up(
    env: &Env,
    a: u128,
    b: u128,
    denominator: u128,
) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let den_256 = U256::from_u128(env, denominator);
    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = u256_to_u128(&product.div(&den_256))?;

    if product.rem_euclid(&den_256) > U256::from_u32(env, 0) {
        result.checked_add(1).ok_or(MathError::Overflow)
    } else {
        Ok(result)
    }
}

/// ceil(numerator / denominator)
#[inline]
pub fn div_rounding_up(numerator: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }
    let result = numerator / denominator;
    if numerator % denominator != 0 {
        Ok(result + 1)
    } else {
        Ok(result)
    }
}

/// floor(a * b / 2^128), computed on 64-bit limbs without a wide type
#[inline]
pub fn mul_shift_128(a: u128, b: u128) -> u128 {
    let a_hi = a >> 64;
    let a_lo = a & LOW_64;
    let b_hi = b >> 64;
    let b_lo = b & LOW_64;

    let term_hh = a_hi * b_hi;
    let term_hl = a_hi * b_lo;
    let term_lh = a_lo * b_hi;
    let term_ll = a_lo * b_lo;

    // carry out of the low 128 bits; each addend is below 2^64
    let carry = ((term_ll >> 64) + (term_hl & LOW_64) + (term_lh & LOW_64)) >> 64;

    term_hh + (term_hl >> 64) + (term_lh >> 64) + carry
}

/// floor(amount * 2^128 / liquidity) as a Q128 growth increment
///
/// amount < 2^128 so the quotient always fits in 256 bits; nothing is
/// reduced, a fee at or above the liquidity keeps its whole-unit part.
pub fn fee_growth_delta(env: &Env, amount: u128, liquidity: u128) -> Result<U256, MathError> {
    if liquidity == 0 {
        return Err(MathError::ZeroLiquidity);
    }

    let scaled = U256::from_u128(env, amount).shl(128);
    Ok(scaled.div(&U256::from_u128(env, liquidity)))
}

/// a + b mod 2^256
pub fn wrapping_add_u256(env: &Env, a: &U256, b: &U256) -> U256 {
    let headroom = u256_max(env).sub(b);
    if *a > headroom {
        // a + b - 2^256 == a - (headroom + 1)
        a.sub(&headroom).sub(&U256::from_u32(env, 1))
    } else {
        a.add(b)
    }
}

/// a - b mod 2^256
pub fn wrapping_sub_u256(env: &Env, a: &U256, b: &U256) -> U256 {
    if a >= b {
        a.sub(b)
    } else {
        u256_max(env).sub(&b.sub(a)).add(&U256::from_u32(env, 1))
    }
}

/// floor(liquidity * growth / 2^128) for a Q128 growth of up to 256 bits
///
/// The growth is split at bit 128 so neither partial product leaves U256.
pub fn mul_div_q128(env: &Env, liquidity: u128, growth: &U256) -> Result<u128, MathError> {
    let liquidity_256 = U256::from_u128(env, liquidity);
    let high = growth.shr(128);
    let low = growth.rem_euclid(&q128(env));

    let whole = liquidity_256.mul(&high);
    let fraction = liquidity_256.mul(&low).shr(128);

    u256_to_u128(&whole.add(&fraction))
}
