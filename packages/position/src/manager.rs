// Position Management Logic

use soroban_sdk::{Env, U256};
use eddy_math::{add_delta, is_aligned_tick, MathError};
use crate::error::PositionError;
use crate::fees::calculate_pending_fees;
use crate::types::Position;

/// Accrue fees into `tokens_owed` and apply a liquidity delta
///
/// Fees are settled against the old liquidity before the delta lands, then
/// the snapshot moves to the current inside growth. A zero delta on an empty
/// position is rejected since it could only ever accrue nothing.
/// The position is left untouched on error.
pub fn update_position(
    env: &Env,
    pos: &mut Position,
    liquidity_delta: i128,
    fee_growth_inside_0_x128: &U256,
    fee_growth_inside_1_x128: &U256,
) -> Result<(), PositionError> {
    if liquidity_delta == 0 && pos.liquidity == 0 {
        return Err(PositionError::NoLiquidity);
    }

    if liquidity_delta < 0 && liquidity_delta.unsigned_abs() > pos.liquidity {
        return Err(PositionError::InsufficientLiquidity);
    }

    let liquidity_next = add_delta(pos.liquidity, liquidity_delta)?;

    let (owed_0, owed_1) =
        calculate_pending_fees(env, pos, fee_growth_inside_0_x128, fee_growth_inside_1_x128)?;
    let tokens_owed_0 = credit_owed(pos.tokens_owed_0, owed_0)?;
    let tokens_owed_1 = credit_owed(pos.tokens_owed_1, owed_1)?;

    pos.liquidity = liquidity_next;
    pos.fee_growth_inside_0_last_x128 = fee_growth_inside_0_x128.clone();
    pos.fee_growth_inside_1_last_x128 = fee_growth_inside_1_x128.clone();
    pos.tokens_owed_0 = tokens_owed_0;
    pos.tokens_owed_1 = tokens_owed_1;

    Ok(())
}

/// Add to an owed balance; an owed balance never saturates
#[inline]
pub fn credit_owed(owed: u128, amount: u128) -> Result<u128, MathError> {
    owed.checked_add(amount).ok_or(MathError::Overflow)
}

// ============================================================
// POSITION VALIDATION
// ============================================================

/// Validate position parameters
///
/// # Arguments
/// * `lower` - Lower tick boundary
/// * `upper` - Upper tick boundary
/// * `tick_spacing` - Pool's tick spacing
pub fn validate_position_params(
    lower: i32,
    upper: i32,
    tick_spacing: i32,
) -> Result<(), PositionError> {
    if lower >= upper {
        return Err(PositionError::InvalidTickRange);
    }

    if !is_aligned_tick(lower, tick_spacing) || !is_aligned_tick(upper, tick_spacing) {
        return Err(PositionError::InvalidTick);
    }

    Ok(())
}

/// Check if a position has any liquidity
#[inline]
pub fn has_liquidity(pos: &Position) -> bool {
    pos.liquidity > 0
}
