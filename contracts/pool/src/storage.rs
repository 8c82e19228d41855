// SPDX-License-Identifier: MIT
//
// Pool storage: one enum of keys, typed accessors, TTL bumped on every write.

use soroban_sdk::{contracttype, Env};
use eddy_tick::{TickReader, TickStore};

use crate::error::PoolError;
use crate::types::{PoolConfig, PoolSlot, PoolState, Position, PositionKey, TickInfo};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Immutable pool parameters
    Config,
    /// Price, tick and lock
    Slot,
    /// Active liquidity and fee growth
    State,
    /// Tick data by tick index
    Tick(i32),
    /// Initialized-tick bitmap word by word index
    TickBitmap(i32),
    /// Position by (owner, tick_lower, tick_upper)
    Position(PositionKey),
}

// ============================================================
// STORAGE CONFIGURATION
// ============================================================

pub mod storage_ttl {
    /// Bump when the remaining TTL drops below this (about 1 year at 5s per ledger)
    pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 6_307_200;
    /// TTL after a bump
    pub const PERSISTENT_BUMP_AMOUNT: u32 = 6_307_200;
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(
        key,
        storage_ttl::PERSISTENT_LIFETIME_THRESHOLD,
        storage_ttl::PERSISTENT_BUMP_AMOUNT,
    );
}

fn write<V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>>(env: &Env, key: DataKey, value: &V) {
    env.storage().persistent().set(&key, value);
    extend_persistent_ttl(env, &key);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &PoolConfig) {
    write(env, DataKey::Config, config);
}

/// Pool parameters; present from deployment on
pub fn read_config(env: &Env) -> Result<PoolConfig, PoolError> {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or(PoolError::NotInitialized)
}

// ============================================================
// SLOT AND STATE
// ============================================================

/// The slot exists exactly when the pool has been given a price
#[inline]
pub fn has_slot(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Slot)
}

pub fn read_slot(env: &Env) -> Result<PoolSlot, PoolError> {
    env.storage()
        .persistent()
        .get(&DataKey::Slot)
        .ok_or(PoolError::NotInitialized)
}

pub fn write_slot(env: &Env, slot: &PoolSlot) {
    write(env, DataKey::Slot, slot);
}

pub fn read_state(env: &Env) -> Result<PoolState, PoolError> {
    env.storage()
        .persistent()
        .get(&DataKey::State)
        .ok_or(PoolError::NotInitialized)
}

pub fn write_state(env: &Env, state: &PoolState) {
    write(env, DataKey::State, state);
}

// ============================================================
// TICK STORAGE
// ============================================================

/// Tick info; unreferenced ticks read as empty
pub fn read_tick(env: &Env, tick: i32) -> TickInfo {
    env.storage()
        .persistent()
        .get(&DataKey::Tick(tick))
        .unwrap_or_else(|| TickInfo::empty(env))
}

pub fn write_tick(env: &Env, tick: i32, info: &TickInfo) {
    write(env, DataKey::Tick(tick), info);
}

pub fn read_bitmap_word(env: &Env, word_pos: i32) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::TickBitmap(word_pos))
        .unwrap_or(0)
}

pub fn write_bitmap_word(env: &Env, word_pos: i32, word: u128) {
    write(env, DataKey::TickBitmap(word_pos), &word);
}

/// Tick registry backed by persistent storage
pub struct PoolTicks<'a> {
    env: &'a Env,
}

impl<'a> PoolTicks<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl TickReader for PoolTicks<'_> {
    fn tick(&self, tick: i32) -> TickInfo {
        read_tick(self.env, tick)
    }

    fn bitmap_word(&self, word_pos: i32) -> u128 {
        read_bitmap_word(self.env, word_pos)
    }
}

impl TickStore for PoolTicks<'_> {
    fn set_tick(&mut self, tick: i32, info: &TickInfo) {
        write_tick(self.env, tick, info);
    }

    fn set_bitmap_word(&mut self, word_pos: i32, word: u128) {
        write_bitmap_word(self.env, word_pos, word);
    }
}

// ============================================================
// POSITION STORAGE
// ============================================================

/// Position by key; unknown keys read as an empty position
pub fn read_position(env: &Env, key: &PositionKey) -> Position {
    env.storage()
        .persistent()
        .get(&DataKey::Position(key.clone()))
        .unwrap_or_else(|| Position::empty(env))
}

pub fn write_position(env: &Env, key: &PositionKey, position: &Position) {
    write(env, DataKey::Position(key.clone()), position);
}
