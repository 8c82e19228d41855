use soroban_sdk::{contracttype, Address, Env, U256};

/// Composite key of a position: one owner, one range
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionKey {
    pub owner: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

impl PositionKey {
    pub fn new(owner: &Address, tick_lower: i32, tick_upper: i32) -> Self {
        Self {
            owner: owner.clone(),
            tick_lower,
            tick_upper,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub liquidity: u128,
    /// Inside growth at the last accrual (Q128, mod 2^256)
    pub fee_growth_inside_0_last_x128: U256,
    pub fee_growth_inside_1_last_x128: U256,
    pub tokens_owed_0: u128,
    pub tokens_owed_1: u128,
}

impl Position {
    /// A position that has never been minted
    pub fn empty(env: &Env) -> Self {
        Self {
            liquidity: 0,
            fee_growth_inside_0_last_x128: U256::from_u32(env, 0),
            fee_growth_inside_1_last_x128: U256::from_u32(env, 0),
            tokens_owed_0: 0,
            tokens_owed_1: 0,
        }
    }
}

/// Read-side summary of a position at the current price
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionInfo {
    pub liquidity: u128,
    /// Token0 the liquidity would withdraw right now
    pub amount0: u128,
    /// Token1 the liquidity would withdraw right now
    pub amount1: u128,
    /// Owed plus not-yet-accrued fees for token0
    pub fees_owed_0: u128,
    /// Owed plus not-yet-accrued fees for token1
    pub fees_owed_1: u128,
}

impl Default for PositionInfo {
    fn default() -> Self {
        Self {
            liquidity: 0,
            amount0: 0,
            amount1: 0,
            fees_owed_0: 0,
            fees_owed_1: 0,
        }
    }
}
