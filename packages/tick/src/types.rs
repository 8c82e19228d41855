// Tick Types

use soroban_sdk::{contracttype, Env, U256};

/// Information stored for each referenced tick
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickInfo {
    /// Total liquidity referencing this tick
    pub liquidity_gross: u128,
    /// Net liquidity change when crossing left-to-right
    pub liquidity_net: i128,
    /// Fee growth on the other side of this tick for token0 (Q128, mod 2^256)
    pub fee_growth_outside_0_x128: U256,
    /// Fee growth on the other side of this tick for token1 (Q128, mod 2^256)
    pub fee_growth_outside_1_x128: U256,
    /// Whether any position currently references this tick
    pub initialized: bool,
}

impl TickInfo {
    /// A tick nothing has referenced yet
    pub fn empty(env: &Env) -> Self {
        Self {
            liquidity_gross: 0,
            liquidity_net: 0,
            fee_growth_outside_0_x128: U256::from_u32(env, 0),
            fee_growth_outside_1_x128: U256::from_u32(env, 0),
            initialized: false,
        }
    }
}
