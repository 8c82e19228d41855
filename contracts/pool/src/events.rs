use soroban_sdk::{Address, Env, Symbol};

use eddy_swap::TickCrossing;

use crate::types::SwapResult;

// ============================================================
// EVENT NAMES
// ============================================================

pub struct EventName;

impl EventName {
    pub fn init(env: &Env) -> Symbol {
        Symbol::new(env, "init")
    }

    pub fn mint(env: &Env) -> Symbol {
        Symbol::new(env, "mint")
    }

    pub fn burn(env: &Env) -> Symbol {
        Symbol::new(env, "burn")
    }

    pub fn collect(env: &Env) -> Symbol {
        Symbol::new(env, "collect")
    }

    pub fn swap(env: &Env) -> Symbol {
        Symbol::new(env, "swap")
    }

    pub fn cross(env: &Env) -> Symbol {
        Symbol::new(env, "cross")
    }
}

// ============================================================
// EVENT EMITTERS
// ============================================================

/// Emit pool initialized event
pub fn emit_init(env: &Env, sqrt_price_x96: u128, tick: i32) {
    env.events()
        .publish((EventName::init(env),), (sqrt_price_x96, tick));
}

/// Emit mint event
pub fn emit_mint(
    env: &Env,
    owner: &Address,
    tick_lower: i32,
    tick_upper: i32,
    liquidity: u128,
    amount0: u128,
    amount1: u128,
) {
    env.events().publish(
        (EventName::mint(env), owner.clone()),
        (tick_lower, tick_upper, liquidity, amount0, amount1),
    );
}

/// Emit burn event
pub fn emit_burn(
    env: &Env,
    owner: &Address,
    tick_lower: i32,
    tick_upper: i32,
    liquidity: u128,
    amount0: u128,
    amount1: u128,
) {
    env.events().publish(
        (EventName::burn(env), owner.clone()),
        (tick_lower, tick_upper, liquidity, amount0, amount1),
    );
}

/// Emit collect event
pub fn emit_collect(env: &Env, owner: &Address, tick_lower: i32, tick_upper: i32, paid0: u128, paid1: u128) {
    env.events().publish(
        (EventName::collect(env), owner.clone()),
        (tick_lower, tick_upper, paid0, paid1),
    );
}

/// Emit swap event
pub fn emit_swap(env: &Env, recipient: &Address, zero_for_one: bool, result: &SwapResult) {
    env.events().publish(
        (EventName::swap(env), recipient.clone()),
        (
            zero_for_one,
            result.amount_in,
            result.amount_out,
            result.fee_amount,
            result.sqrt_price_x96,
            result.current_tick,
        ),
    );
}

/// Emit one event per tick crossed by a swap
pub fn emit_cross(env: &Env, crossing: &TickCrossing) {
    env.events().publish(
        (EventName::cross(env),),
        (
            crossing.tick,
            crossing.fee_growth_global_0_x128.clone(),
            crossing.fee_growth_global_1_x128.clone(),
        ),
    );
}
