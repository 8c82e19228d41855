#![no_std]

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, U256};

// External packages
use eddy_math::{
    get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio,
    constants::{MAX_FEE_BPS, MAX_TICK_SPACING, MIN_TICK_SPACING},
};
use eddy_position::{collect_owed, credit_owed, validate_position_params};
use eddy_swap::{engine, engine_swap, SwapParams, SwapState};
use eddy_tick::get_fee_growth_inside;

// Local modules
mod error;
mod events;
mod liquidity;
mod lock;
mod storage;
pub mod types;

pub use error::PoolError;

use events::*;
use liquidity::{modify_position, position_info};
use lock::ReentrancyGuard;
use storage::*;
use types::{PoolConfig, PoolSlot, PoolState, Position, PositionInfo, PositionKey, SwapResult, TickInfo};

#[contract]
pub struct EddyPool;

#[contractimpl]
impl EddyPool {
    // ========================================================
    // CONSTRUCTION AND INITIALIZATION
    // ========================================================

    /// Fix the pool's immutable parameters at deployment
    ///
    /// # Arguments
    /// * `factory` - Deployer of the pool
    /// * `token_a`, `token_b` - The pair, in any order
    /// * `fee_bps` - Swap fee in basis points, below 10000
    /// * `tick_spacing` - Distance between usable ticks, 1..=16384
    pub fn __constructor(
        env: Env,
        factory: Address,
        token_a: Address,
        token_b: Address,
        fee_bps: u32,
        tick_spacing: i32,
    ) {
        if token_a == token_b {
            panic_with_error!(&env, PoolError::IdenticalTokens);
        }

        if fee_bps > MAX_FEE_BPS {
            panic_with_error!(&env, PoolError::InvalidFee);
        }

        if !(MIN_TICK_SPACING..=MAX_TICK_SPACING).contains(&tick_spacing) {
            panic_with_error!(&env, PoolError::InvalidTickSpacing);
        }

        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        write_config(
            &env,
            &PoolConfig {
                factory,
                token0,
                token1,
                fee_bps,
                tick_spacing,
                max_liquidity_per_tick: eddy_math::max_liquidity_per_tick(tick_spacing),
            },
        );
    }

    /// Set the starting price; callable once, by the factory
    ///
    /// Returns the tick of that price.
    pub fn initialize(env: Env, sqrt_price_x96: u128) -> Result<i32, PoolError> {
        read_config(&env)?.factory.require_auth();

        if has_slot(&env) {
            return Err(PoolError::AlreadyInitialized);
        }

        let tick = get_tick_at_sqrt_ratio(&env, sqrt_price_x96)
            .map_err(|_| PoolError::InvalidSqrtPrice)?;

        write_slot(
            &env,
            &PoolSlot {
                sqrt_price_x96,
                tick,
                locked: false,
            },
        );
        write_state(&env, &PoolState::empty(&env));

        emit_init(&env, sqrt_price_x96, tick);

        Ok(tick)
    }

    // ========================================================
    // LIQUIDITY FUNCTIONS
    // ========================================================

    /// Add `liquidity` to the owner's range
    ///
    /// Returns the token amounts the caller must settle into the pool.
    pub fn mint(
        env: Env,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
    ) -> Result<(u128, u128), PoolError> {
        let _guard = ReentrancyGuard::acquire(&env)?;

        if liquidity == 0 {
            return Err(PoolError::InvalidLiquidityAmount);
        }
        let delta = i128::try_from(liquidity).map_err(|_| PoolError::InvalidLiquidityAmount)?;

        let config = read_config(&env)?;
        let slot = read_slot(&env)?;
        let mut state = read_state(&env)?;

        let modified = modify_position(
            &env, &config, &slot, &mut state, &owner, tick_lower, tick_upper, delta,
        )?;

        write_position(&env, &modified.key, &modified.position);
        write_state(&env, &state);

        emit_mint(
            &env,
            &owner,
            tick_lower,
            tick_upper,
            liquidity,
            modified.amount0,
            modified.amount1,
        );

        Ok((modified.amount0, modified.amount1))
    }

    /// Remove `liquidity` from the owner's range
    ///
    /// The released amounts are credited to the position's owed balances
    /// and paid out by `collect`. Burning 0 accrues pending fees only.
    pub fn burn(
        env: Env,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
    ) -> Result<(u128, u128), PoolError> {
        owner.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;

        // no position can hold more than i128::MAX
        let delta = i128::try_from(liquidity).map_err(|_| PoolError::InsufficientLiquidity)?;

        let config = read_config(&env)?;
        let slot = read_slot(&env)?;
        let mut state = read_state(&env)?;

        let mut modified = modify_position(
            &env, &config, &slot, &mut state, &owner, tick_lower, tick_upper, -delta,
        )?;

        let position = &mut modified.position;
        position.tokens_owed_0 = credit_owed(position.tokens_owed_0, modified.amount0)?;
        position.tokens_owed_1 = credit_owed(position.tokens_owed_1, modified.amount1)?;

        write_position(&env, &modified.key, &modified.position);
        write_state(&env, &state);

        emit_burn(
            &env,
            &owner,
            tick_lower,
            tick_upper,
            liquidity,
            modified.amount0,
            modified.amount1,
        );

        Ok((modified.amount0, modified.amount1))
    }

    /// Pay out up to the requested amounts from the position's owed balances
    ///
    /// Never fails for lack of funds: pays min(requested, owed).
    pub fn collect(
        env: Env,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
        amount0_requested: u128,
        amount1_requested: u128,
    ) -> Result<(u128, u128), PoolError> {
        owner.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;

        let config = read_config(&env)?;
        validate_position_params(tick_lower, tick_upper, config.tick_spacing)?;

        let key = PositionKey::new(&owner, tick_lower, tick_upper);
        let stored = read_position(&env, &key);
        let mut position = stored.clone();

        if position.liquidity > 0 {
            let slot = read_slot(&env)?;
            let mut state = read_state(&env)?;
            position = modify_position(
                &env, &config, &slot, &mut state, &owner, tick_lower, tick_upper, 0,
            )?
            .position;
        }

        let (paid0, paid1) = collect_owed(&mut position, amount0_requested, amount1_requested);
        // an untouched (possibly never minted) key stays out of storage
        if position != stored {
            write_position(&env, &key, &position);
        }

        emit_collect(&env, &owner, tick_lower, tick_upper, paid0, paid1);

        Ok((paid0, paid1))
    }

    // ========================================================
    // SWAP FUNCTION
    // ========================================================

    /// Execute a swap
    ///
    /// # Arguments
    /// * `recipient` - Beneficiary of the output, recorded in the event
    /// * `zero_for_one` - true sells token0 for token1
    /// * `amount_specified` - Positive for exact input, negative for exact output
    /// * `sqrt_price_limit_x96` - Price the swap may not pass, 0 for none
    ///
    /// Returns the amounts for the caller to settle; no tokens move here.
    pub fn swap(
        env: Env,
        recipient: Address,
        zero_for_one: bool,
        amount_specified: i128,
        sqrt_price_limit_x96: u128,
    ) -> Result<SwapResult, PoolError> {
        let _guard = ReentrancyGuard::acquire(&env)?;

        let config = read_config(&env)?;
        let mut slot = read_slot(&env)?;
        let state = read_state(&env)?;

        let mut swap_state = to_swap_state(&slot, &state);
        let params = SwapParams {
            zero_for_one,
            amount_specified,
            sqrt_price_limit_x96,
        };

        let mut ticks = PoolTicks::new(&env);
        let computation = engine_swap(
            &env,
            &mut ticks,
            &mut swap_state,
            &params,
            config.fee_bps,
            config.tick_spacing,
        )?;
        let result = computation.to_result()?;

        slot.sqrt_price_x96 = swap_state.sqrt_price_x96;
        slot.tick = swap_state.tick;
        write_slot(&env, &slot);
        write_state(
            &env,
            &PoolState {
                liquidity: swap_state.liquidity,
                fee_growth_global_0_x128: swap_state.fee_growth_global_0_x128,
                fee_growth_global_1_x128: swap_state.fee_growth_global_1_x128,
            },
        );

        for crossing in computation.crossings.iter() {
            emit_cross(&env, &crossing);
        }
        emit_swap(&env, &recipient, zero_for_one, &result);

        Ok(result)
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    /// Whether the pool has a price
    pub fn is_initialized(env: Env) -> bool {
        has_slot(&env)
    }

    /// Immutable pool parameters
    pub fn get_config(env: Env) -> Result<PoolConfig, PoolError> {
        read_config(&env)
    }

    /// Current price, tick and lock flag
    pub fn get_slot(env: Env) -> Result<PoolSlot, PoolError> {
        read_slot(&env)
    }

    /// Active liquidity and global fee growth
    pub fn get_state(env: Env) -> Result<PoolState, PoolError> {
        read_state(&env)
    }

    pub fn get_tick(env: Env, tick: i32) -> TickInfo {
        read_tick(&env, tick)
    }

    /// Raw position record
    pub fn get_position(env: Env, owner: Address, tick_lower: i32, tick_upper: i32) -> Position {
        read_position(&env, &PositionKey::new(&owner, tick_lower, tick_upper))
    }

    /// Position with its current token amounts and owed plus pending fees
    pub fn get_position_info(
        env: Env,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Result<PositionInfo, PoolError> {
        let config = read_config(&env)?;
        validate_position_params(tick_lower, tick_upper, config.tick_spacing)?;

        let slot = read_slot(&env)?;
        let state = read_state(&env)?;

        position_info(&env, &slot, &state, &PositionKey::new(&owner, tick_lower, tick_upper))
    }

    /// Fee growth per unit of liquidity inside a range (Q128, mod 2^256)
    pub fn fee_growth_inside(
        env: Env,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Result<(U256, U256), PoolError> {
        let config = read_config(&env)?;
        validate_position_params(tick_lower, tick_upper, config.tick_spacing)?;

        let slot = read_slot(&env)?;
        let state = read_state(&env)?;

        Ok(get_fee_growth_inside(
            &env,
            &PoolTicks::new(&env),
            tick_lower,
            tick_upper,
            slot.tick,
            &state.fee_growth_global_0_x128,
            &state.fee_growth_global_1_x128,
        ))
    }

    /// Cap on the liquidity any single tick may reference
    pub fn max_liquidity_per_tick(env: Env) -> Result<u128, PoolError> {
        Ok(read_config(&env)?.max_liquidity_per_tick)
    }

    /// Largest liquidity the given amounts can back over a range at the current price
    pub fn get_liquidity_for_amounts(
        env: Env,
        tick_lower: i32,
        tick_upper: i32,
        amount0: u128,
        amount1: u128,
    ) -> Result<u128, PoolError> {
        let config = read_config(&env)?;
        validate_position_params(tick_lower, tick_upper, config.tick_spacing)?;

        let slot = read_slot(&env)?;

        Ok(eddy_math::liquidity::get_liquidity_for_amounts(
            &env,
            slot.sqrt_price_x96,
            get_sqrt_ratio_at_tick(&env, tick_lower)?,
            get_sqrt_ratio_at_tick(&env, tick_upper)?,
            amount0,
            amount1,
        )?)
    }

    /// Preview a swap without executing it
    pub fn quote_swap(
        env: Env,
        zero_for_one: bool,
        amount_specified: i128,
        sqrt_price_limit_x96: u128,
    ) -> Result<SwapResult, PoolError> {
        let config = read_config(&env)?;
        let slot = read_slot(&env)?;
        let state = read_state(&env)?;

        let params = SwapParams {
            zero_for_one,
            amount_specified,
            sqrt_price_limit_x96,
        };

        Ok(engine::quote_swap(
            &env,
            &PoolTicks::new(&env),
            &to_swap_state(&slot, &state),
            &params,
            config.fee_bps,
            config.tick_spacing,
        )?)
    }
}

fn to_swap_state(slot: &PoolSlot, state: &PoolState) -> SwapState {
    SwapState {
        sqrt_price_x96: slot.sqrt_price_x96,
        tick: slot.tick,
        liquidity: state.liquidity,
        fee_growth_global_0_x128: state.fee_growth_global_0_x128.clone(),
        fee_growth_global_1_x128: state.fee_growth_global_1_x128.clone(),
    }
}
