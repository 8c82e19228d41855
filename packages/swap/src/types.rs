use soroban_sdk::{contracttype, Vec, U256};

/// Pool state the swap loop reads and advances
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapState {
    pub sqrt_price_x96: u128,
    pub tick: i32,
    pub liquidity: u128,
    pub fee_growth_global_0_x128: U256,
    pub fee_growth_global_1_x128: U256,
}

/// What the caller asked for
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapParams {
    /// true = sell token0 for token1 (price moves down)
    pub zero_for_one: bool,
    /// Positive for exact input, negative for exact output
    pub amount_specified: i128,
    /// Price the swap may not pass; 0 for no limit
    pub sqrt_price_limit_x96: u128,
}

/// A tick boundary crossed during the swap, with the global fee growth at that moment
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickCrossing {
    pub tick: i32,
    pub fee_growth_global_0_x128: U256,
    pub fee_growth_global_1_x128: U256,
}

/// Outcome of the read-only pass, before anything is written
#[derive(Clone, Debug)]
pub struct SwapComputation {
    pub state: SwapState,
    pub amount_in: u128,
    pub amount_out: u128,
    pub fee_amount: u128,
    pub crossings: Vec<TickCrossing>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapResult {
    pub amount_in: i128,
    pub amount_out: i128,
    pub fee_amount: i128,
    pub sqrt_price_x96: u128,
    pub current_tick: i32,
    pub liquidity: u128,
    pub ticks_crossed: u32,
}

impl Default for SwapResult {
    fn default() -> Self {
        Self {
            amount_in: 0,
            amount_out: 0,
            fee_amount: 0,
            sqrt_price_x96: 0,
            current_tick: 0,
            liquidity: 0,
            ticks_crossed: 0,
        }
    }
}
