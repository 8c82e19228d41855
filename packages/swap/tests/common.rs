#![allow(dead_code)]

use std::collections::BTreeMap;
use eddy_math::{max_liquidity_per_tick, Q96};
use eddy_swap::SwapState;
use eddy_tick::{flip_tick, update_tick, TickInfo, TickReader, TickStore};
use soroban_sdk::{Env, U256};

pub const FEE_BPS: u32 = 30;
pub const SPACING: i32 = 60;

/// In-memory tick registry standing in for contract storage
#[derive(Clone)]
pub struct MemoryTicks {
    pub env: Env,
    pub ticks: BTreeMap<i32, TickInfo>,
    pub words: BTreeMap<i32, u128>,
}

impl MemoryTicks {
    pub fn new(env: &Env) -> Self {
        Self {
            env: env.clone(),
            ticks: BTreeMap::new(),
            words: BTreeMap::new(),
        }
    }
}

impl TickReader for MemoryTicks {
    fn tick(&self, tick: i32) -> TickInfo {
        self.ticks
            .get(&tick)
            .cloned()
            .unwrap_or_else(|| TickInfo::empty(&self.env))
    }

    fn bitmap_word(&self, word_pos: i32) -> u128 {
        self.words.get(&word_pos).copied().unwrap_or(0)
    }
}

impl TickStore for MemoryTicks {
    fn set_tick(&mut self, tick: i32, info: &TickInfo) {
        self.ticks.insert(tick, info.clone());
    }

    fn set_bitmap_word(&mut self, word_pos: i32, word: u128) {
        self.words.insert(word_pos, word);
    }
}

pub fn u256(env: &Env, value: u128) -> U256 {
    U256::from_u128(env, value)
}

/// Fresh state at price 1.0
pub fn state_at_par(env: &Env) -> SwapState {
    SwapState {
        sqrt_price_x96: Q96,
        tick: 0,
        liquidity: 0,
        fee_growth_global_0_x128: u256(env, 0),
        fee_growth_global_1_x128: u256(env, 0),
    }
}

/// Register a range the way the pool does on mint
pub fn add_range(
    env: &Env,
    store: &mut MemoryTicks,
    state: &mut SwapState,
    lower: i32,
    upper: i32,
    liquidity: u128,
    spacing: i32,
) {
    let max = max_liquidity_per_tick(spacing);
    for (tick, is_upper) in [(lower, false), (upper, true)] {
        let flipped = update_tick(
            env,
            store,
            tick,
            state.tick,
            liquidity as i128,
            &state.fee_growth_global_0_x128,
            &state.fee_growth_global_1_x128,
            is_upper,
            max,
        )
        .unwrap();
        if flipped {
            flip_tick(store, tick, spacing).unwrap();
        }
    }
    if state.tick >= lower && state.tick < upper {
        state.liquidity += liquidity;
    }
}

/// 1e6 over [-600, 600] plus 2e6 over [-1200, -600], priced at 1.0
pub fn two_ranges(env: &Env) -> (MemoryTicks, SwapState) {
    let mut store = MemoryTicks::new(env);
    let mut state = state_at_par(env);
    add_range(env, &mut store, &mut state, -600, 600, 1_000_000, SPACING);
    add_range(env, &mut store, &mut state, -1200, -600, 2_000_000, SPACING);
    (store, state)
}
