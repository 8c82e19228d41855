// Fee Growth Calculations

use soroban_sdk::{Env, U256};
use eddy_math::wrapping_sub_u256;
use crate::store::TickReader;

/// Fee growth per unit of liquidity accumulated inside [lower_tick, upper_tick)
///
/// inside = global - below(lower) - above(upper), all modulo 2^256.
/// Only differences between two readings are meaningful.
pub fn get_fee_growth_inside<R: TickReader>(
    env: &Env,
    reader: &R,
    lower_tick: i32,
    upper_tick: i32,
    current_tick: i32,
    fee_growth_global_0_x128: &U256,
    fee_growth_global_1_x128: &U256,
) -> (U256, U256) {
    let lower = reader.tick(lower_tick);
    let upper = reader.tick(upper_tick);

    let below_lower = current_tick >= lower_tick;
    let above_upper = current_tick < upper_tick;

    let inside_0 = growth_between(
        env,
        fee_growth_global_0_x128,
        &lower.fee_growth_outside_0_x128,
        below_lower,
        &upper.fee_growth_outside_0_x128,
        above_upper,
    );
    let inside_1 = growth_between(
        env,
        fee_growth_global_1_x128,
        &lower.fee_growth_outside_1_x128,
        below_lower,
        &upper.fee_growth_outside_1_x128,
        above_upper,
    );

    (inside_0, inside_1)
}

/// Fee growth of one token between two boundaries
///
/// An outside value already is the growth below (lower) or above (upper)
/// when the price sits on the range side of that tick; otherwise it is
/// the complement against global.
fn growth_between(
    env: &Env,
    global: &U256,
    lower_outside: &U256,
    lower_is_below: bool,
    upper_outside: &U256,
    upper_is_above: bool,
) -> U256 {
    let below = if lower_is_below {
        lower_outside.clone()
    } else {
        wrapping_sub_u256(env, global, lower_outside)
    };
    let above = if upper_is_above {
        upper_outside.clone()
    } else {
        wrapping_sub_u256(env, global, upper_outside)
    };

    wrapping_sub_u256(env, &wrapping_sub_u256(env, global, &below), &above)
}

/// Growth snapshot a freshly referenced tick should start from
///
/// All growth so far is assumed to have happened below the tick when
/// `tick <= current_tick`.
pub fn initial_outside(
    env: &Env,
    tick: i32,
    current_tick: i32,
    fee_growth_global_0_x128: &U256,
    fee_growth_global_1_x128: &U256,
) -> (U256, U256) {
    if tick <= current_tick {
        (fee_growth_global_0_x128.clone(), fee_growth_global_1_x128.clone())
    } else {
        (U256::from_u32(env, 0), U256::from_u32(env, 0))
    }
}
