use soroban_sdk::{Env, U256};
use eddy_math::{mul_div_q128, wrapping_sub_u256, MathError};
use crate::types::Position;

/// Fees earned since the position's last snapshot
///
/// owed = liquidity * (inside - last) / 2^128, the growth difference taken
/// modulo 2^256. An amount that does not fit in u128 is an overflow.
pub fn calculate_pending_fees(
    env: &Env,
    pos: &Position,
    fee_growth_inside_0_x128: &U256,
    fee_growth_inside_1_x128: &U256,
) -> Result<(u128, u128), MathError> {
    if pos.liquidity == 0 {
        return Ok((0, 0));
    }

    let delta_0 = wrapping_sub_u256(env, fee_growth_inside_0_x128, &pos.fee_growth_inside_0_last_x128);
    let delta_1 = wrapping_sub_u256(env, fee_growth_inside_1_x128, &pos.fee_growth_inside_1_last_x128);

    Ok((
        mul_div_q128(env, pos.liquidity, &delta_0)?,
        mul_div_q128(env, pos.liquidity, &delta_1)?,
    ))
}

/// Pay out min(requested, owed) per token and return the paid amounts
pub fn collect_owed(pos: &mut Position, requested_0: u128, requested_1: u128) -> (u128, u128) {
    let paid_0 = requested_0.min(pos.tokens_owed_0);
    let paid_1 = requested_1.min(pos.tokens_owed_1);

    pos.tokens_owed_0 -= paid_0;
    pos.tokens_owed_1 -= paid_1;

    (paid_0, paid_1)
}
