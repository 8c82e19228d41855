use eddy_math::MathError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PositionError {
    /// tick_lower >= tick_upper
    InvalidTickRange,
    /// Boundary outside the tick domain or off the spacing grid
    InvalidTick,
    /// Zero-delta update of a position holding no liquidity
    NoLiquidity,
    /// Removal exceeds the position's liquidity
    InsufficientLiquidity,
    Math(MathError),
}

impl From<MathError> for PositionError {
    fn from(err: MathError) -> Self {
        PositionError::Math(err)
    }
}
