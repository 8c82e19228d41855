// Range bookkeeping shared by mint, burn and collect

use soroban_sdk::{Address, Env};
use eddy_math::{add_delta, get_amounts_for_liquidity, get_sqrt_ratio_at_tick};
use eddy_position::{calculate_pending_fees, credit_owed, update_position, validate_position_params};
use eddy_tick::{flip_tick, get_fee_growth_inside, update_tick};

use crate::error::PoolError;
use crate::storage::{read_position, PoolTicks};
use crate::types::{PoolConfig, PoolSlot, PoolState, Position, PositionInfo, PositionKey};

/// A position after a liquidity change, with the token amounts it moved
pub struct ModifiedPosition {
    pub key: PositionKey,
    pub position: Position,
    pub amount0: u128,
    pub amount1: u128,
}

/// Apply `liquidity_delta` to a range and its boundary ticks
///
/// Updates both ticks (flipping their bitmap bits when they change
/// initialized state), accrues fees into the position, and adjusts active
/// liquidity when the range contains the current tick. Amounts round up on
/// deposit and down on withdrawal. The position is returned unwritten.
pub fn modify_position(
    env: &Env,
    config: &PoolConfig,
    slot: &PoolSlot,
    state: &mut PoolState,
    owner: &Address,
    tick_lower: i32,
    tick_upper: i32,
    liquidity_delta: i128,
) -> Result<ModifiedPosition, PoolError> {
    validate_position_params(tick_lower, tick_upper, config.tick_spacing)?;

    let key = PositionKey::new(owner, tick_lower, tick_upper);
    let mut position = read_position(env, &key);

    // checked before the ticks so an over-burn is reported as such
    if liquidity_delta < 0 && liquidity_delta.unsigned_abs() > position.liquidity {
        return Err(PoolError::InsufficientLiquidity);
    }

    let mut ticks = PoolTicks::new(env);

    if liquidity_delta != 0 {
        for (tick, upper) in [(tick_lower, false), (tick_upper, true)] {
            let flipped = update_tick(
                env,
                &mut ticks,
                tick,
                slot.tick,
                liquidity_delta,
                &state.fee_growth_global_0_x128,
                &state.fee_growth_global_1_x128,
                upper,
                config.max_liquidity_per_tick,
            )?;
            if flipped {
                flip_tick(&mut ticks, tick, config.tick_spacing)?;
            }
        }
    }

    let (inside_0, inside_1) = get_fee_growth_inside(
        env,
        &ticks,
        tick_lower,
        tick_upper,
        slot.tick,
        &state.fee_growth_global_0_x128,
        &state.fee_growth_global_1_x128,
    );

    update_position(env, &mut position, liquidity_delta, &inside_0, &inside_1)?;

    let (amount0, amount1) = if liquidity_delta == 0 {
        (0, 0)
    } else {
        get_amounts_for_liquidity(
            env,
            slot.sqrt_price_x96,
            get_sqrt_ratio_at_tick(env, tick_lower)?,
            get_sqrt_ratio_at_tick(env, tick_upper)?,
            liquidity_delta.unsigned_abs(),
            liquidity_delta > 0,
        )?
    };

    if slot.tick >= tick_lower && slot.tick < tick_upper {
        state.liquidity = add_delta(state.liquidity, liquidity_delta)?;
    }

    Ok(ModifiedPosition {
        key,
        position,
        amount0,
        amount1,
    })
}

/// Current token amounts and owed-plus-pending fees of a position
pub fn position_info(
    env: &Env,
    slot: &PoolSlot,
    state: &PoolState,
    key: &PositionKey,
) -> Result<PositionInfo, PoolError> {
    let position = read_position(env, key);
    let ticks = PoolTicks::new(env);

    let (amount0, amount1) = get_amounts_for_liquidity(
        env,
        slot.sqrt_price_x96,
        get_sqrt_ratio_at_tick(env, key.tick_lower)?,
        get_sqrt_ratio_at_tick(env, key.tick_upper)?,
        position.liquidity,
        false,
    )?;

    let (inside_0, inside_1) = get_fee_growth_inside(
        env,
        &ticks,
        key.tick_lower,
        key.tick_upper,
        slot.tick,
        &state.fee_growth_global_0_x128,
        &state.fee_growth_global_1_x128,
    );
    let (pending_0, pending_1) = calculate_pending_fees(env, &position, &inside_0, &inside_1)?;

    Ok(PositionInfo {
        liquidity: position.liquidity,
        amount0,
        amount1,
        fees_owed_0: credit_owed(position.tokens_owed_0, pending_0)?,
        fees_owed_1: credit_owed(position.tokens_owed_1, pending_1)?,
    })
}
