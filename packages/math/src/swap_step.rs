// Single swap step within one initialized-tick interval

use soroban_sdk::Env;
use crate::constants::FEE_DENOMINATOR;
use crate::error::MathError;
use crate::full_math::{mul_div, mul_div_rounding_up};
use crate::liquidity::{get_amount_0_delta, get_amount_1_delta};
use crate::sqrt_price::{get_next_sqrt_price_from_input, get_next_sqrt_price_from_output};

/// Outcome of one step of the swap loop
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SwapStep {
    pub sqrt_price_next_x96: u128,
    pub amount_in: u128,
    pub amount_out: u128,
    pub fee_amount: u128,
}

/// Compute one swap step from `sqrt_price_current` toward `sqrt_price_target`
///
/// # Arguments
/// * `liquidity` - Active liquidity for the whole step
/// * `amount_remaining` - Positive for exact input, negative for exact output
/// * `fee_bps` - Fee in basis points, charged on the input leg
///
/// The direction is implied by the target: a lower target sells token0.
pub fn compute_swap_step(
    env: &Env,
    sqrt_price_current: u128,
    sqrt_price_target: u128,
    liquidity: u128,
    amount_remaining: i128,
    fee_bps: u32,
) -> Result<SwapStep, MathError> {
    let zero_for_one = sqrt_price_current >= sqrt_price_target;
    let exact_in = amount_remaining >= 0;
    let remaining = amount_remaining.unsigned_abs();
    let fee = fee_bps as u128;
    let denominator = FEE_DENOMINATOR as u128;

    let mut amount_in = 0;
    let mut amount_out = 0;
    let mut remaining_less_fee = 0;

    let sqrt_price_next = if exact_in {
        remaining_less_fee = mul_div(env, remaining, denominator - fee, denominator)?;
        amount_in = if zero_for_one {
            get_amount_0_delta(env, sqrt_price_target, sqrt_price_current, liquidity, true)?
        } else {
            get_amount_1_delta(env, sqrt_price_current, sqrt_price_target, liquidity, true)?
        };
        if remaining_less_fee >= amount_in {
            sqrt_price_target
        } else {
            get_next_sqrt_price_from_input(env, sqrt_price_current, liquidity, remaining_less_fee, zero_for_one)?
        }
    } else {
        amount_out = if zero_for_one {
            get_amount_1_delta(env, sqrt_price_target, sqrt_price_current, liquidity, false)?
        } else {
            get_amount_0_delta(env, sqrt_price_current, sqrt_price_target, liquidity, false)?
        };
        if remaining >= amount_out {
            sqrt_price_target
        } else {
            get_next_sqrt_price_from_output(env, sqrt_price_current, liquidity, remaining, zero_for_one)?
        }
    };

    let reached_target = sqrt_price_next == sqrt_price_target;

    // Recompute the legs that the target shortcut did not already settle
    if zero_for_one {
        if !reached_target || !exact_in {
            amount_in = get_amount_0_delta(env, sqrt_price_next, sqrt_price_current, liquidity, true)?;
        }
        if !reached_target || exact_in {
            amount_out = get_amount_1_delta(env, sqrt_price_next, sqrt_price_current, liquidity, false)?;
        }
    } else {
        if !reached_target || !exact_in {
            amount_in = get_amount_1_delta(env, sqrt_price_current, sqrt_price_next, liquidity, true)?;
        }
        if !reached_target || exact_in {
            amount_out = get_amount_0_delta(env, sqrt_price_current, sqrt_price_next, liquidity, false)?;
        }
    }

    if exact_in && !reached_target {
        amount_in = amount_in.min(remaining_less_fee);
    }

    if !exact_in && amount_out > remaining {
        amount_out = remaining;
    }

    let fee_amount = if exact_in && !reached_target {
        // the price stopped short, so the whole remainder is consumed
        remaining - amount_in
    } else {
        mul_div_rounding_up(env, amount_in, fee, denominator - fee)?
    };

    Ok(SwapStep {
        sqrt_price_next_x96: sqrt_price_next,
        amount_in,
        amount_out,
        fee_amount,
    })
}
