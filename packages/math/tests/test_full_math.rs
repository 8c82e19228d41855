use eddy_math::*;
use eddy_math::full_math::{q128, u256_max};
use soroban_sdk::{Env, U256};

#[test]
fn test_mul_div_basic() {
    let env = Env::default();
    assert_eq!(mul_div(&env, 10, 20, 5), Ok(40));
    assert_eq!(mul_div(&env, 7, 3, 2), Ok(10));
}

#[test]
fn test_mul_div_wide_intermediate() {
    let env = Env::default();
    // (2^127 * 4) / 8 overflows u128 in the middle but not at the end
    let a = 1u128 << 127;
    assert_eq!(mul_div(&env, a, 4, 8), Ok(a / 2));
    assert_eq!(mul_div(&env, u128::MAX, u128::MAX, u128::MAX), Ok(u128::MAX));
}

#[test]
fn test_mul_div_zero_denominator() {
    let env = Env::default();
    assert_eq!(mul_div(&env, 1, 1, 0), Err(MathError::DivisionByZero));
    assert_eq!(mul_div_rounding_up(&env, 1, 1, 0), Err(MathError::DivisionByZero));
}

#[test]
fn test_mul_div_result_overflow() {
    let env = Env::default();
    assert_eq!(mul_div(&env, u128::MAX, 2, 1), Err(MathError::Overflow));
}

#[test]
fn test_mul_div_rounding_up() {
    let env = Env::default();
    assert_eq!(mul_div_rounding_up(&env, 7, 3, 2), Ok(11));
    assert_eq!(mul_div_rounding_up(&env, 6, 3, 2), Ok(9));
    assert_eq!(
        mul_div_rounding_up(&env, u128::MAX, u128::MAX, u128::MAX),
        Ok(u128::MAX)
    );
}

#[test]
fn test_mul_div_rounding_up_overflow_on_increment() {
    let env = Env::default();
    // MAX^2 / (MAX - 1) is just above u128::MAX
    let result = mul_div_rounding_up(&env, u128::MAX, u128::MAX, u128::MAX - 1);
    assert_eq!(result, Err(MathError::Overflow));
}

#[test]
fn test_div_rounding_up() {
    assert_eq!(div_rounding_up(10, 3), Ok(4));
    assert_eq!(div_rounding_up(9, 3), Ok(3));
    assert_eq!(div_rounding_up(0, 3), Ok(0));
    assert_eq!(div_rounding_up(1, 0), Err(MathError::DivisionByZero));
}

#[test]
fn test_mul_shift_128() {
    assert_eq!(mul_shift_128(0, u128::MAX), 0);
    assert_eq!(mul_shift_128(1u128 << 127, 4), 2);
    assert_eq!(mul_shift_128(u128::MAX, u128::MAX), u128::MAX - 1);
    assert_eq!(mul_shift_128(1u128 << 64, 1u128 << 64), 1);
    assert_eq!(mul_shift_128((1u128 << 64) - 1, (1u128 << 64) + 1), 0);
}

fn u256(env: &Env, v: u128) -> U256 {
    U256::from_u128(env, v)
}

#[test]
fn test_fee_growth_delta() {
    let env = Env::default();
    // 30 * 2^128 / 1_000_000, floored
    assert_eq!(
        fee_growth_delta(&env, 30, 1_000_000),
        Ok(u256(&env, 10208471007628153903901238222953046))
    );
    assert_eq!(fee_growth_delta(&env, 0, 1_000_000), Ok(u256(&env, 0)));
}

#[test]
fn test_fee_growth_delta_keeps_whole_units() {
    let env = Env::default();
    // amount == liquidity is exactly one unit of growth
    assert_eq!(fee_growth_delta(&env, 5, 5), Ok(q128(&env)));
    // 3 / 2 => 1.5 * 2^128
    assert_eq!(
        fee_growth_delta(&env, 3, 2),
        Ok(q128(&env).add(&u256(&env, 1u128 << 127)))
    );
    // 3_000_000 fee on 1_000_000 liquidity is three whole units
    assert_eq!(
        fee_growth_delta(&env, 3_000_000, 1_000_000),
        Ok(q128(&env).mul(&u256(&env, 3)))
    );
}

#[test]
fn test_fee_growth_delta_zero_liquidity() {
    let env = Env::default();
    assert_eq!(fee_growth_delta(&env, 1, 0), Err(MathError::ZeroLiquidity));
}

#[test]
fn test_wrapping_add_and_sub_u256() {
    let env = Env::default();
    let max = u256_max(&env);
    let one = u256(&env, 1);
    let zero = u256(&env, 0);

    assert_eq!(wrapping_add_u256(&env, &u256(&env, 2), &u256(&env, 3)), u256(&env, 5));
    assert_eq!(wrapping_add_u256(&env, &max, &one), zero);
    assert_eq!(wrapping_add_u256(&env, &max, &max), max.sub(&one));

    assert_eq!(wrapping_sub_u256(&env, &u256(&env, 5), &u256(&env, 3)), u256(&env, 2));
    assert_eq!(wrapping_sub_u256(&env, &zero, &one), max);
    assert_eq!(wrapping_sub_u256(&env, &u256(&env, 3), &u256(&env, 5)), max.sub(&one));

    // a difference taken across the wrap is still the true difference
    let before = max.sub(&u256(&env, 9));
    let after = wrapping_add_u256(&env, &before, &u256(&env, 25));
    assert_eq!(wrapping_sub_u256(&env, &after, &before), u256(&env, 25));
}

#[test]
fn test_mul_div_q128() {
    let env = Env::default();
    // half a unit of growth on 7 liquidity
    assert_eq!(mul_div_q128(&env, 7, &u256(&env, 1u128 << 127)), Ok(3));
    // three whole units
    let three_units = q128(&env).mul(&u256(&env, 3));
    assert_eq!(mul_div_q128(&env, 1_000_000, &three_units), Ok(3_000_000));
    // whole and fractional parts together: 2.5 units on 10
    let two_and_half = q128(&env).mul(&u256(&env, 2)).add(&u256(&env, 1u128 << 127));
    assert_eq!(mul_div_q128(&env, 10, &two_and_half), Ok(25));
    assert_eq!(mul_div_q128(&env, 0, &three_units), Ok(0));
}

#[test]
fn test_mul_div_q128_overflow() {
    let env = Env::default();
    let huge = q128(&env).mul(&u256(&env, 2));
    assert_eq!(mul_div_q128(&env, u128::MAX, &huge), Err(MathError::Overflow));
}
