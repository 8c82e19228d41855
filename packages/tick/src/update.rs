// Tick Update and Crossing Logic

use soroban_sdk::{Env, U256};
use eddy_math::{add_delta, wrapping_sub_u256};
use crate::error::TickError;
use crate::fee_growth::initial_outside;
use crate::store::{TickReader, TickStore};

/// Update a tick when liquidity is added or removed
///
/// On first reference the fee growth outside is snapshotted (see
/// [`initial_outside`]). Returns `true` when the tick flipped between
/// initialized and uninitialized; the caller keeps the bitmap in sync.
pub fn update_tick<S: TickStore>(
    env: &Env,
    store: &mut S,
    tick: i32,
    current_tick: i32,
    liquidity_delta: i128,
    fee_growth_global_0_x128: &U256,
    fee_growth_global_1_x128: &U256,
    upper: bool,
    max_liquidity: u128,
) -> Result<bool, TickError> {
    let mut info = store.tick(tick);

    let liquidity_gross_before = info.liquidity_gross;
    let liquidity_gross_after = add_delta(liquidity_gross_before, liquidity_delta)?;

    if liquidity_gross_after > max_liquidity {
        return Err(TickError::LiquidityOverflow);
    }

    let flipped = (liquidity_gross_after == 0) != (liquidity_gross_before == 0);

    if liquidity_gross_before == 0 {
        let (outside_0, outside_1) = initial_outside(
            env,
            tick,
            current_tick,
            fee_growth_global_0_x128,
            fee_growth_global_1_x128,
        );
        info.fee_growth_outside_0_x128 = outside_0;
        info.fee_growth_outside_1_x128 = outside_1;
    }

    info.liquidity_gross = liquidity_gross_after;

    // upper boundaries remove liquidity when crossed left-to-right
    info.liquidity_net = if upper {
        info.liquidity_net.checked_sub(liquidity_delta)
    } else {
        info.liquidity_net.checked_add(liquidity_delta)
    }
    .ok_or(TickError::LiquidityNetOverflow)?;

    // the entry stays in storage at zero so it can be reused
    info.initialized = liquidity_gross_after > 0;

    store.set_tick(tick, &info);

    Ok(flipped)
}

/// Cross a tick boundary during a swap
///
/// Flips the outside snapshots to the other side and returns `liquidity_net`
/// for the caller to apply (negated when moving right-to-left).
pub fn cross_tick<S: TickStore>(
    env: &Env,
    store: &mut S,
    tick: i32,
    fee_growth_global_0_x128: &U256,
    fee_growth_global_1_x128: &U256,
) -> i128 {
    let mut info = store.tick(tick);

    info.fee_growth_outside_0_x128 =
        wrapping_sub_u256(env, fee_growth_global_0_x128, &info.fee_growth_outside_0_x128);
    info.fee_growth_outside_1_x128 =
        wrapping_sub_u256(env, fee_growth_global_1_x128, &info.fee_growth_outside_1_x128);

    store.set_tick(tick, &info);

    info.liquidity_net
}

/// Net liquidity that would be applied on crossing, without mutating
#[inline]
pub fn liquidity_net_at<R: TickReader>(reader: &R, tick: i32) -> i128 {
    reader.tick(tick).liquidity_net
}
