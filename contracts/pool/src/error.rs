// Pool errors
//
// Codes are grouped by range so callers can classify a failure without a
// lookup table: 1xx state, 2xx configuration, 3xx input validation,
// 4xx insufficiency, 5xx swap parameters, 7xx arithmetic.

use soroban_sdk::contracterror;
use eddy_math::MathError;
use eddy_position::PositionError;
use eddy_swap::SwapError;
use eddy_tick::TickError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    // State errors (100-199)
    /// `initialize` was already called
    AlreadyInitialized = 100,
    /// The pool has no price yet
    NotInitialized = 101,
    /// Another mutating operation is in flight
    Locked = 102,

    // Configuration errors (200-299)
    /// Fee must be below 10000 bps
    InvalidFee = 200,
    /// Tick spacing must lie in 1..=16384
    InvalidTickSpacing = 201,
    /// Both sides of the pair are the same token
    IdenticalTokens = 202,

    // Validation errors (300-399)
    /// Lower tick must be below upper tick
    InvalidTickRange = 300,
    /// Tick out of domain or not a multiple of the spacing
    InvalidTick = 301,
    /// Initial sqrt price outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO)
    InvalidSqrtPrice = 302,
    /// Liquidity amount is zero or does not fit a signed delta
    InvalidLiquidityAmount = 303,

    // Insufficiency errors (400-499)
    /// Burn exceeds the position's liquidity
    InsufficientLiquidity = 400,
    /// Position holds no liquidity
    NoLiquidity = 401,

    // Swap errors (500-599)
    /// Price limit on the wrong side of the current price or out of domain
    InvalidPriceLimit = 500,
    /// Swap amount must be non-zero
    InvalidSwapAmount = 501,
    /// Swap would cross more initialized ticks than one call may
    SwapIterationLimit = 502,

    // Arithmetic errors (700-799)
    Overflow = 700,
    DivisionByZero = 701,
    TickOutOfRange = 702,
    SqrtPriceOutOfRange = 703,
    /// Requested output exceeds what the liquidity can provide
    PriceOverflow = 704,
    ZeroLiquidity = 705,
    LiquidityAdd = 706,
    LiquiditySub = 707,
    /// A tick would exceed the per-tick liquidity cap
    LiquidityOverflow = 708,
    LiquidityNetOverflow = 709,
}

impl From<MathError> for PoolError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::DivisionByZero => PoolError::DivisionByZero,
            MathError::Overflow => PoolError::Overflow,
            MathError::TickOutOfRange => PoolError::TickOutOfRange,
            MathError::SqrtPriceOutOfRange => PoolError::SqrtPriceOutOfRange,
            MathError::PriceOverflow => PoolError::PriceOverflow,
            MathError::ZeroLiquidity => PoolError::ZeroLiquidity,
            MathError::LiquidityAdd => PoolError::LiquidityAdd,
            MathError::LiquiditySub => PoolError::LiquiditySub,
        }
    }
}

impl From<TickError> for PoolError {
    fn from(err: TickError) -> Self {
        match err {
            TickError::Math(e) => e.into(),
            TickError::LiquidityOverflow => PoolError::LiquidityOverflow,
            TickError::LiquidityNetOverflow => PoolError::LiquidityNetOverflow,
            TickError::NotAligned => PoolError::InvalidTick,
        }
    }
}

impl From<PositionError> for PoolError {
    fn from(err: PositionError) -> Self {
        match err {
            PositionError::InvalidTickRange => PoolError::InvalidTickRange,
            PositionError::InvalidTick => PoolError::InvalidTick,
            PositionError::NoLiquidity => PoolError::NoLiquidity,
            PositionError::InsufficientLiquidity => PoolError::InsufficientLiquidity,
            PositionError::Math(e) => e.into(),
        }
    }
}

impl From<SwapError> for PoolError {
    fn from(err: SwapError) -> Self {
        match err {
            SwapError::InvalidAmount => PoolError::InvalidSwapAmount,
            SwapError::InvalidPriceLimit => PoolError::InvalidPriceLimit,
            SwapError::IterationLimit => PoolError::SwapIterationLimit,
            SwapError::Overflow => PoolError::Overflow,
            SwapError::Math(e) => e.into(),
        }
    }
}
