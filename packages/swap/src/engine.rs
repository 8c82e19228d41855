// Swap engine
//
// The swap runs in two phases. `compute_swap` walks the price across
// initialized ticks against a read-only view and records every boundary it
// crosses; `engine_swap` then applies those crossings and commits the new
// state. A failure in the first phase therefore leaves storage untouched.

use soroban_sdk::{log, Env, Vec};
use eddy_math::{
    add_delta, compute_swap_step, fee_growth_delta, get_sqrt_ratio_at_tick,
    get_tick_at_sqrt_ratio, wrapping_add_u256, MAX_SQRT_RATIO, MAX_SWAP_ITERATIONS, MAX_TICK,
    MIN_SQRT_RATIO, MIN_TICK,
};
use eddy_tick::{cross_tick, liquidity_net_at, next_initialized_tick_within_one_word, TickReader, TickStore};

use crate::error::SwapError;
use crate::types::{SwapComputation, SwapParams, SwapResult, SwapState, TickCrossing};

// ============================================================
// PRICE LIMIT
// ============================================================

/// Resolve the caller's price limit, substituting the domain edge for 0
///
/// A non-zero limit must lie strictly between the current price and the
/// domain edge in the direction of travel.
pub fn resolve_price_limit(
    sqrt_price_x96: u128,
    sqrt_price_limit_x96: u128,
    zero_for_one: bool,
) -> Result<u128, SwapError> {
    if sqrt_price_limit_x96 == 0 {
        return Ok(if zero_for_one {
            MIN_SQRT_RATIO + 1
        } else {
            MAX_SQRT_RATIO - 1
        });
    }

    let valid = if zero_for_one {
        sqrt_price_limit_x96 > MIN_SQRT_RATIO && sqrt_price_limit_x96 < sqrt_price_x96
    } else {
        sqrt_price_limit_x96 < MAX_SQRT_RATIO && sqrt_price_limit_x96 > sqrt_price_x96
    };

    if !valid {
        return Err(SwapError::InvalidPriceLimit);
    }

    Ok(sqrt_price_limit_x96)
}

// ============================================================
// SWAP LOOP
// ============================================================

/// Simulate a swap against `reader` without writing anything
///
/// Each iteration trades up to the next initialized tick (or the end of the
/// current bitmap word, or the price limit), accrues the fee into global
/// fee growth while liquidity is active, and applies `liquidity_net` when a
/// boundary is reached. The loop only stops once the amount is used up or
/// the limit is reached.
///
/// Hops over empty bitmap words are not counted; crossing more than
/// `MAX_SWAP_ITERATIONS` initialized ticks fails the whole swap.
pub fn compute_swap<R: TickReader>(
    env: &Env,
    reader: &R,
    state: &SwapState,
    params: &SwapParams,
    fee_bps: u32,
    tick_spacing: i32,
) -> Result<SwapComputation, SwapError> {
    if params.amount_specified == 0 {
        return Err(SwapError::InvalidAmount);
    }

    let zero_for_one = params.zero_for_one;
    let exact_in = params.amount_specified > 0;
    let sqrt_price_limit =
        resolve_price_limit(state.sqrt_price_x96, params.sqrt_price_limit_x96, zero_for_one)?;

    let mut current = state.clone();
    let mut remaining = params.amount_specified;
    // output for exact input, input (with fee) for exact output
    let mut calculated: u128 = 0;
    let mut fee_total: u128 = 0;
    let mut crossings: Vec<TickCrossing> = Vec::new(env);

    while remaining != 0 && current.sqrt_price_x96 != sqrt_price_limit {
        let sqrt_price_start = current.sqrt_price_x96;

        let (tick_next, initialized) =
            next_initialized_tick_within_one_word(reader, current.tick, tick_spacing, zero_for_one);
        let tick_next = tick_next.clamp(MIN_TICK, MAX_TICK);
        let sqrt_price_next = get_sqrt_ratio_at_tick(env, tick_next)?;

        let sqrt_price_target = if zero_for_one {
            sqrt_price_next.max(sqrt_price_limit)
        } else {
            sqrt_price_next.min(sqrt_price_limit)
        };

        let step = compute_swap_step(
            env,
            current.sqrt_price_x96,
            sqrt_price_target,
            current.liquidity,
            remaining,
            fee_bps,
        )?;

        current.sqrt_price_x96 = step.sqrt_price_next_x96;

        let consumed = step
            .amount_in
            .checked_add(step.fee_amount)
            .ok_or(SwapError::Overflow)?;

        if exact_in {
            remaining -= to_i128(consumed)?;
            calculated = calculated.checked_add(step.amount_out).ok_or(SwapError::Overflow)?;
        } else {
            remaining += to_i128(step.amount_out)?;
            calculated = calculated.checked_add(consumed).ok_or(SwapError::Overflow)?;
        }
        fee_total = fee_total.checked_add(step.fee_amount).ok_or(SwapError::Overflow)?;

        if current.liquidity > 0 && step.fee_amount > 0 {
            let growth = fee_growth_delta(env, step.fee_amount, current.liquidity)?;
            if zero_for_one {
                current.fee_growth_global_0_x128 =
                    wrapping_add_u256(env, &current.fee_growth_global_0_x128, &growth);
            } else {
                current.fee_growth_global_1_x128 =
                    wrapping_add_u256(env, &current.fee_growth_global_1_x128, &growth);
            }
        }

        if current.sqrt_price_x96 == sqrt_price_next {
            if initialized {
                if crossings.len() >= MAX_SWAP_ITERATIONS {
                    log!(env, "swap exceeds crossing cap", tick_next, remaining);
                    return Err(SwapError::IterationLimit);
                }
                crossings.push_back(TickCrossing {
                    tick: tick_next,
                    fee_growth_global_0_x128: current.fee_growth_global_0_x128.clone(),
                    fee_growth_global_1_x128: current.fee_growth_global_1_x128.clone(),
                });

                let liquidity_net = liquidity_net_at(reader, tick_next);
                // leaving a range from above removes what entering it from below added
                let liquidity_net = if zero_for_one {
                    liquidity_net.checked_neg().ok_or(SwapError::Overflow)?
                } else {
                    liquidity_net
                };
                current.liquidity = add_delta(current.liquidity, liquidity_net)?;
            }

            current.tick = if zero_for_one { tick_next - 1 } else { tick_next };
        } else if current.sqrt_price_x96 != sqrt_price_start {
            current.tick = get_tick_at_sqrt_ratio(env, current.sqrt_price_x96)?;
        }
    }

    let (amount_in, amount_out) = if exact_in {
        ((params.amount_specified - remaining) as u128, calculated)
    } else {
        (calculated, (remaining - params.amount_specified) as u128)
    };

    Ok(SwapComputation {
        state: current,
        amount_in,
        amount_out,
        fee_amount: fee_total,
        crossings,
    })
}

/// Execute a swap: compute it, then write every crossed tick
///
/// `state` is only replaced once the computation has succeeded.
pub fn engine_swap<S: TickStore>(
    env: &Env,
    store: &mut S,
    state: &mut SwapState,
    params: &SwapParams,
    fee_bps: u32,
    tick_spacing: i32,
) -> Result<SwapComputation, SwapError> {
    let computation = compute_swap(env, &*store, state, params, fee_bps, tick_spacing)?;

    for crossing in computation.crossings.iter() {
        cross_tick(
            env,
            store,
            crossing.tick,
            &crossing.fee_growth_global_0_x128,
            &crossing.fee_growth_global_1_x128,
        );
    }

    *state = computation.state.clone();

    Ok(computation)
}

/// Read-only preview of a swap with the same rules as [`engine_swap`]
pub fn quote_swap<R: TickReader>(
    env: &Env,
    reader: &R,
    state: &SwapState,
    params: &SwapParams,
    fee_bps: u32,
    tick_spacing: i32,
) -> Result<SwapResult, SwapError> {
    compute_swap(env, reader, state, params, fee_bps, tick_spacing)?.to_result()
}

impl SwapComputation {
    /// Caller-facing summary of the computation
    pub fn to_result(&self) -> Result<SwapResult, SwapError> {
        Ok(SwapResult {
            amount_in: to_i128(self.amount_in)?,
            amount_out: to_i128(self.amount_out)?,
            fee_amount: to_i128(self.fee_amount)?,
            sqrt_price_x96: self.state.sqrt_price_x96,
            current_tick: self.state.tick,
            liquidity: self.state.liquidity,
            ticks_crossed: self.crossings.len(),
        })
    }
}

#[inline]
fn to_i128(value: u128) -> Result<i128, SwapError> {
    i128::try_from(value).map_err(|_| SwapError::Overflow)
}
