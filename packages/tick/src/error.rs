use eddy_math::MathError;

/// Failures while updating the tick registry
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickError {
    /// Liquidity arithmetic on the tick failed
    Math(MathError),
    /// liquidity_gross would exceed the per-tick cap
    LiquidityOverflow,
    /// liquidity_net left the i128 range
    LiquidityNetOverflow,
    /// Tick is not a multiple of the spacing
    NotAligned,
}

impl From<MathError> for TickError {
    fn from(err: MathError) -> Self {
        TickError::Math(err)
    }
}
