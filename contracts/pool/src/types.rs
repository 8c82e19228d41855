// Pool Types

use soroban_sdk::{contracttype, Address, Env, U256};

pub use eddy_position::{Position, PositionInfo, PositionKey};
pub use eddy_swap::SwapResult;
pub use eddy_tick::TickInfo;

/// Immutable pool parameters, fixed at deployment
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Deployer of this pool
    pub factory: Address,
    /// Sorted so that token0 < token1
    pub token0: Address,
    pub token1: Address,
    /// Swap fee in basis points of the input
    pub fee_bps: u32,
    pub tick_spacing: i32,
    /// Cap on liquidity_gross of any single tick
    pub max_liquidity_per_tick: u128,
}

/// Price, tick and lock; written once per mutating call
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolSlot {
    /// Current sqrt price (Q64.96)
    pub sqrt_price_x96: u128,
    /// floor(log_1.0001(price))
    pub tick: i32,
    pub locked: bool,
}

/// Active liquidity and the global fee accumulators
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Sum of the liquidity of every range containing the current tick
    pub liquidity: u128,
    /// Fees per unit of liquidity for token0 (Q128, mod 2^256)
    pub fee_growth_global_0_x128: U256,
    /// Fees per unit of liquidity for token1 (Q128, mod 2^256)
    pub fee_growth_global_1_x128: U256,
}

impl PoolState {
    /// No liquidity and no fees yet
    pub fn empty(env: &Env) -> Self {
        Self {
            liquidity: 0,
            fee_growth_global_0_x128: U256::from_u32(env, 0),
            fee_growth_global_1_x128: U256::from_u32(env, 0),
        }
    }
}
