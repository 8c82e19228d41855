// SPDX-License-Identifier: MIT
// Tick <-> sqrt price conversion

use soroban_sdk::{Env, U256};
use crate::constants::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, Q96};
use crate::error::MathError;
use crate::full_math::{mul_shift_128, u256_max, u256_to_u128};

/// Q128 factors: entry i is 1 / sqrt(1.0001^(2^i)).
/// Bit 19 is never set because |MAX_TICK| < 2^19.
const RATIO_FACTORS: [u128; 19] = [
    0xfffcb933bd6fad37aa2d162d1a594001,
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x9aa508b5b7a84e1c677de54f3e99bc9,
    0x5d6af8dedb81196699c329225ee604,
    0x2216e584f5fa1ea926041bedfe98,
];

/// Calculate sqrt(1.0001^tick) as a Q64.96 value
///
/// The product of the factors selected by |tick| is 1/sqrt(price) in Q128.
/// Positive ticks invert it in 256 bits; the final shift to Q96 rounds up so
/// that `get_tick_at_sqrt_ratio` is an exact left inverse.
pub fn get_sqrt_ratio_at_tick(env: &Env, tick: i32) -> Result<u128, MathError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfRange);
    }

    let abs_tick = tick.unsigned_abs();

    // None stands for exactly 1.0 (2^128 does not fit in u128)
    let mut ratio: Option<u128> = None;
    for (bit, factor) in RATIO_FACTORS.iter().enumerate() {
        if abs_tick & (1 << bit) != 0 {
            ratio = Some(match ratio {
                None => *factor,
                Some(r) => mul_shift_128(r, *factor),
            });
        }
    }

    let Some(ratio) = ratio else {
        return Ok(Q96);
    };

    if tick < 0 {
        let rounding = if ratio & 0xFFFF_FFFF != 0 { 1 } else { 0 };
        return Ok((ratio >> 32) + rounding);
    }

    // (2^256 - 1) / ratio, then Q128 -> Q96
    let inverted = u256_max(env).div(&U256::from_u128(env, ratio));

    let shift = U256::from_u128(env, 1u128 << 32);
    let whole = u256_to_u128(&inverted.div(&shift))?;
    if inverted.rem_euclid(&shift) > U256::from_u32(env, 0) {
        whole.checked_add(1).ok_or(MathError::Overflow)
    } else {
        Ok(whole)
    }
}

/// Greatest tick whose sqrt price is <= `sqrt_price_x96`
///
/// Accepts MIN_SQRT_RATIO <= sqrt_price_x96 < MAX_SQRT_RATIO.
pub fn get_tick_at_sqrt_ratio(env: &Env, sqrt_price_x96: u128) -> Result<i32, MathError> {
    if !(MIN_SQRT_RATIO..MAX_SQRT_RATIO).contains(&sqrt_price_x96) {
        return Err(MathError::SqrtPriceOutOfRange);
    }

    let mut low = MIN_TICK;
    let mut high = MAX_TICK;

    while low < high {
        let mid = low + (high - low + 1) / 2;
        if get_sqrt_ratio_at_tick(env, mid)? <= sqrt_price_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

/// Check if a tick is within the valid range
#[inline]
pub fn is_valid_tick(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}
