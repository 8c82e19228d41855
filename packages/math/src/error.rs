/// Failures of the pure math layer.
///
/// Every overflow is reported; nothing in this crate saturates silently.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MathError {
    /// Denominator was zero
    DivisionByZero,
    /// Result does not fit in the output width
    Overflow,
    /// Tick outside [MIN_TICK, MAX_TICK]
    TickOutOfRange,
    /// Sqrt price outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO)
    SqrtPriceOutOfRange,
    /// Price step leaves the representable range or exceeds the reserves implied by liquidity
    PriceOverflow,
    /// Liquidity must be non-zero for this computation
    ZeroLiquidity,
    /// Adding a liquidity delta overflowed
    LiquidityAdd,
    /// Removing a liquidity delta underflowed
    LiquiditySub,
}
