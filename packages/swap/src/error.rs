use eddy_math::MathError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwapError {
    /// amount_specified was zero
    InvalidAmount,
    /// Price limit on the wrong side of the current price or outside the domain
    InvalidPriceLimit,
    /// The swap would cross more than `MAX_SWAP_ITERATIONS` initialized ticks
    IterationLimit,
    /// A swap total does not fit in i128
    Overflow,
    Math(MathError),
}

impl From<MathError> for SwapError {
    fn from(err: MathError) -> Self {
        SwapError::Math(err)
    }
}
