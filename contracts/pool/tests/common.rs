#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, Address, Env};
use eddy_math::Q96;
use eddy_pool::{EddyPool, EddyPoolClient};

// Test constants
pub const DEFAULT_FEE_BPS: u32 = 30; // 0.30%
pub const DEFAULT_TICK_SPACING: i32 = 60;
pub const DEFAULT_SQRT_PRICE_X96: u128 = Q96; // Price = 1.0

/// Deploy a pool without giving it a price
pub fn deploy_pool(env: &Env, fee_bps: u32, tick_spacing: i32) -> (EddyPoolClient<'_>, Address, Address, Address) {
    let factory = Address::generate(env);
    let token_a = Address::generate(env);
    let token_b = Address::generate(env);

    let pool_id = env.register(
        EddyPool,
        (factory.clone(), token_a.clone(), token_b.clone(), fee_bps, tick_spacing),
    );
    let client = EddyPoolClient::new(env, &pool_id);

    (client, factory, token_a, token_b)
}

/// Deploy and set the starting price as the factory
pub fn setup_pool_at(env: &Env, fee_bps: u32, tick_spacing: i32, sqrt_price_x96: u128) -> EddyPoolClient<'_> {
    let (client, _, _, _) = deploy_pool(env, fee_bps, tick_spacing);
    // authorization is mocked for this one call only
    client.mock_all_auths().initialize(&sqrt_price_x96);
    client
}

/// Deploy with default parameters and initialize at price 1.0
pub fn setup_pool(env: &Env) -> EddyPoolClient<'_> {
    setup_pool_at(env, DEFAULT_FEE_BPS, DEFAULT_TICK_SPACING, DEFAULT_SQRT_PRICE_X96)
}

/// Pool at price 1.0 with `liquidity` over [-600, 600] owned by the returned LP
pub fn setup_pool_with_liquidity(env: &Env, liquidity: u128) -> (EddyPoolClient<'_>, Address) {
    let client = setup_pool(env);
    let lp = Address::generate(env);
    client.mint(&lp, &-600, &600, &liquidity);
    (client, lp)
}
