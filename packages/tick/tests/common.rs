#![allow(dead_code)]

use std::collections::BTreeMap;
use eddy_tick::{TickInfo, TickReader, TickStore};
use soroban_sdk::{Env, U256};

/// In-memory tick registry for driving the package without a contract
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
