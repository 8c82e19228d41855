mod common;

use common::*;
use eddy_math::{get_sqrt_ratio_at_tick, MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, Q96};
use eddy_swap::*;
use eddy_tick::TickReader;
use soroban_sdk::Env;

fn params(zero_for_one: bool, amount_specified: i128, limit: u128) -> SwapParams {
    SwapParams {
        zero_for_one,
        amount_specified,
        sqrt_price_limit_x96: limit,
    }
}

// ============================================================
// SINGLE RANGE
// ============================================================

#[test]
fn test_exact_in_zero_for_one_inside_range() {
    let env = Env::default();
    let mut store = MemoryTicks::new(&env);
    let mut state = state_at_par(&env);
    add_range(&env, &mut store, &mut state, -600, 600, 1_000_000, SPACING);

    let out = engine_swap(&env, &mut store, &mut state, &params(true, 10_000, 0), FEE_BPS, SPACING).unwrap();

    assert_eq!(out.amount_in, 10_000);
    assert_eq!(out.amount_out, 9_871);
    assert_eq!(out.fee_amount, 30);
    assert_eq!(out.crossings.len(), 0);

    assert_eq!(state.sqrt_price_x96, 78446055342499616417857907004);
    assert_eq!(state.tick, -199);
    assert_eq!(state.liquidity, 1_000_000);
    assert_eq!(state.fee_growth_global_0_x128, u256(&env, 10208471007628153903901238222953046));
    assert_eq!(state.fee_growth_global_1_x128, u256(&env, 0));
}

#[test]
fn test_exact_in_one_for_zero_inside_range() {
    let env = Env::default();
    let mut store = MemoryTicks::new(&env);
    let mut state = state_at_par(&env);
    add_range(&env, &mut store, &mut state, -600, 600, 1_000_000, SPACING);

    let out = engine_swap(&env, &mut store, &mut state, &params(false, 10_000, 0), FEE_BPS, SPACING).unwrap();

    assert_eq!(out.amount_in, 10_000);
    assert_eq!(out.amount_out, 9_871);
    assert_eq!(state.sqrt_price_x96, 80018067294531553039351583520);
    assert_eq!(state.tick, 198);
    assert_eq!(state.fee_growth_global_0_x128, u256(&env, 0));
    assert_eq!(state.fee_growth_global_1_x128, u256(&env, 10208471007628153903901238222953046));
}

#[test]
fn test_output_never_exceeds_input_at_par() {
    let env = Env::default();
    let (mut store, mut state) = two_ranges(&env);

    for amount in [1_i128, 7, 1_000, 25_000] {
        let out = engine_swap(&env, &mut store, &mut state, &params(true, amount, 0), FEE_BPS, SPACING).unwrap();
        assert!(out.amount_out <= out.amount_in);
        assert!(out.fee_amount <= out.amount_in);
    }
}

// ============================================================
// TICK CROSSING
// ============================================================

#[test]
fn test_crossing_picks_up_next_range() {
    let env = Env::default();
    let (mut store, mut state) = two_ranges(&env);

    let out = engine_swap(&env, &mut store, &mut state, &params(true, 50_000, 0), FEE_BPS, SPACING).unwrap();

    assert_eq!(out.amount_in, 50_000);
    assert_eq!(out.amount_out, 47_649);
    assert_eq!(out.fee_amount, 151);
    assert_eq!(out.crossings.len(), 1);
    assert_eq!(state.tick, -788);
    assert_eq!(state.sqrt_price_x96, 76169867067059991920848609108);
    assert_eq!(state.liquidity, 2_000_000);
    assert_eq!(state.fee_growth_global_0_x128, u256(&env, 41344307580894023310800014802959837));

    // the crossed tick now holds the growth that had accrued above it
    let crossing = out.crossings.get(0).unwrap();
    assert_eq!(crossing.tick, -600);
    let info = store.tick(-600);
    assert_eq!(info.fee_growth_outside_0_x128, crossing.fee_growth_global_0_x128);
    assert!(crossing.fee_growth_global_0_x128 > u256(&env, 0));
    assert!(crossing.fee_growth_global_0_x128 < state.fee_growth_global_0_x128);
}

#[test]
fn test_exact_out_across_boundary() {
    let env = Env::default();
    let (mut store, mut state) = two_ranges(&env);

    let out = engine_swap(&env, &mut store, &mut state, &params(true, -40_000, 0), FEE_BPS, SPACING).unwrap();

    assert_eq!(out.amount_out, 40_000);
    assert_eq!(out.amount_in, 41_733);
    assert_eq!(out.fee_amount, 126);
    assert_eq!(out.crossings.len(), 1);
    assert_eq!(state.tick, -708);
    assert_eq!(state.liquidity, 2_000_000);
}

#[test]
fn test_runs_out_of_liquidity_and_stops_at_domain_edge() {
    let env = Env::default();
    let (mut store, mut state) = two_ranges(&env);

    let out = engine_swap(&env, &mut store, &mut state, &params(true, 1_000_000_000, 0), FEE_BPS, SPACING).unwrap();

    // only what the two ranges could absorb is taken
    assert_eq!(out.amount_in, 93_495);
    assert_eq!(out.amount_out, 86_912);
    assert_eq!(out.fee_amount, 281);
    assert_eq!(out.crossings.len(), 2);
    assert_eq!(state.liquidity, 0);
    assert_eq!(state.sqrt_price_x96, MIN_SQRT_RATIO + 1);
    assert_eq!(state.tick, MIN_TICK);
}

#[test]
fn test_one_for_zero_to_upper_edge() {
    let env = Env::default();
    let mut store = MemoryTicks::new(&env);
    let mut state = state_at_par(&env);
    add_range(&env, &mut store, &mut state, -600, 600, 1_000_000, SPACING);

    let out = engine_swap(&env, &mut store, &mut state, &params(false, 1_000_000_000, 0), FEE_BPS, SPACING).unwrap();

    assert_eq!(out.amount_in, 30_545);
    assert_eq!(out.amount_out, 29_553);
    assert_eq!(out.crossings.len(), 1);
    assert_eq!(state.liquidity, 0);
    assert_eq!(state.sqrt_price_x96, MAX_SQRT_RATIO - 1);
    assert_eq!(state.tick, MAX_TICK - 1);
}

#[test]
fn test_swap_back_restores_liquidity() {
    let env = Env::default();
    let (mut store, mut state) = two_ranges(&env);

    engine_swap(&env, &mut store, &mut state, &params(true, 50_000, 0), FEE_BPS, SPACING).unwrap();
    assert_eq!(state.liquidity, 2_000_000);

    let out = engine_swap(&env, &mut store, &mut state, &params(false, 60_000, 0), FEE_BPS, SPACING).unwrap();
    assert_eq!(out.crossings.len(), 1);
    assert!(state.tick >= -600);
    assert_eq!(state.liquidity, 1_000_000);
}

// ============================================================
// PRICE LIMIT
// ============================================================

#[test]
fn test_price_limit_stops_swap() {
    let env = Env::default();
    let (mut store, mut state) = two_ranges(&env);
    let limit = get_sqrt_ratio_at_tick(&env, -900).unwrap();

    let out = engine_swap(&env, &mut store, &mut state, &params(true, 1_000_000_000, limit), FEE_BPS, SPACING).unwrap();

    assert_eq!(state.sqrt_price_x96, limit);
    assert_eq!(state.tick, -900);
    assert_eq!(out.amount_in, 61_785);
    assert_eq!(out.amount_out, 58_447);
    assert_eq!(out.fee_amount, 186);
}

#[test]
fn test_invalid_price_limits() {
    let env = Env::default();
    let (store, state) = two_ranges(&env);

    let cases = [
        (true, Q96),
        (true, Q96 + 1),
        (true, MIN_SQRT_RATIO),
        (false, Q96),
        (false, Q96 - 1),
        (false, MAX_SQRT_RATIO),
    ];
    for (zero_for_one, limit) in cases {
        let err = compute_swap(&env, &store, &state, &params(zero_for_one, 1_000, limit), FEE_BPS, SPACING).unwrap_err();
        assert_eq!(err, SwapError::InvalidPriceLimit);
    }
}

#[test]
fn test_zero_limit_resolves_to_domain_edge() {
    assert_eq!(resolve_price_limit(Q96, 0, true).unwrap(), MIN_SQRT_RATIO + 1);
    assert_eq!(resolve_price_limit(Q96, 0, false).unwrap(), MAX_SQRT_RATIO - 1);
}

#[test]
fn test_zero_amount_rejected() {
    let env = Env::default();
    let (store, state) = two_ranges(&env);

    let err = compute_swap(&env, &store, &state, &params(true, 0, 0), FEE_BPS, SPACING).unwrap_err();
    assert_eq!(err, SwapError::InvalidAmount);
}

// ============================================================
// QUOTE
// ============================================================

#[test]
fn test_quote_matches_execution_and_writes_nothing() {
    let env = Env::default();
    let (mut store, mut state) = two_ranges(&env);
    let before_store = store.clone();
    let before_state = state.clone();
    let p = params(true, 50_000, 0);

    let quote = quote_swap(&env, &store, &state, &p, FEE_BPS, SPACING).unwrap();
    assert_eq!(store.ticks, before_store.ticks);
    assert_eq!(store.words, before_store.words);
    assert_eq!(state, before_state);

    let out = engine_swap(&env, &mut store, &mut state, &p, FEE_BPS, SPACING).unwrap();
    assert_eq!(quote, out.to_result().unwrap());
    assert_eq!(quote.ticks_crossed, 1);
    assert_eq!(quote.current_tick, state.tick);
    assert_eq!(quote.sqrt_price_x96, state.sqrt_price_x96);
    assert_eq!(quote.liquidity, state.liquidity);
}

#[test]
fn test_failed_swap_leaves_state() {
    let env = Env::default();
    let (mut store, mut state) = two_ranges(&env);
    let before = state.clone();

    let err = engine_swap(&env, &mut store, &mut state, &params(true, 1_000, Q96 + 1), FEE_BPS, SPACING);
    assert!(err.is_err());
    assert_eq!(state, before);
}

// ============================================================
// CROSSING CAP
// ============================================================

#[test]
fn test_empty_words_do_not_count_against_cap() {
    let env = Env::default();
    env.cost_estimate().budget().reset_unlimited();
    let mut store = MemoryTicks::new(&env);
    let mut state = state_at_par(&env);
    // spacing 1 puts the range some 1_500 empty bitmap words away
    add_range(&env, &mut store, &mut state, 200_000, 200_100, 1_000_000_000, 1);

    let out = compute_swap(&env, &store, &state, &params(false, 10_000_000_000, 0), FEE_BPS, 1).unwrap();

    assert_eq!(out.amount_in, 10_000_000_000);
    assert!(out.amount_out > 0);
    assert_eq!(out.crossings.len(), 1);
    assert!(out.state.tick >= 200_000 && out.state.tick < 200_100);
    assert_eq!(out.state.liquidity, 1_000_000_000);
}

#[test]
fn test_no_liquidity_walks_to_domain_edge() {
    let env = Env::default();
    env.cost_estimate().budget().reset_unlimited();
    let store = MemoryTicks::new(&env);
    let state = state_at_par(&env);

    let out = compute_swap(&env, &store, &state, &params(true, 1_000, 0), FEE_BPS, 1).unwrap();

    assert_eq!(out.amount_in, 0);
    assert_eq!(out.amount_out, 0);
    assert_eq!(out.state.sqrt_price_x96, MIN_SQRT_RATIO + 1);
    assert_eq!(out.state.tick, MIN_TICK);
}

#[test]
fn test_crossing_more_than_cap_fails_without_writes() {
    let env = Env::default();
    env.cost_estimate().budget().reset_unlimited();
    let mut store = MemoryTicks::new(&env);
    let mut state = state_at_par(&env);
    // one-tick ranges above the price: every tick from 1 to 1_030 is initialized
    for lower in 1..1_030 {
        add_range(&env, &mut store, &mut state, lower, lower + 1, 1_000, 1);
    }
    let before_ticks = store.ticks.clone();
    let before_state = state.clone();

    let result = engine_swap(&env, &mut store, &mut state, &params(false, 1_000_000_000, 0), FEE_BPS, 1);

    assert_eq!(result.unwrap_err(), SwapError::IterationLimit);
    assert_eq!(store.ticks, before_ticks);
    assert_eq!(state, before_state);
}

#[test]
fn test_crossing_up_to_cap_succeeds() {
    let env = Env::default();
    env.cost_estimate().budget().reset_unlimited();
    let mut store = MemoryTicks::new(&env);
    let mut state = state_at_par(&env);
    for lower in 1..1_030 {
        add_range(&env, &mut store, &mut state, lower, lower + 1, 1_000, 1);
    }
    // stop just below tick 1_025, after 1_024 boundaries
    let limit = get_sqrt_ratio_at_tick(&env, 1_024).unwrap() + 1;

    let out = compute_swap(&env, &store, &state, &params(false, 1_000_000_000, limit), FEE_BPS, 1).unwrap();

    assert_eq!(out.crossings.len(), 1_024);
    assert_eq!(out.state.sqrt_price_x96, limit);
    assert_eq!(out.state.tick, 1_024);
}
