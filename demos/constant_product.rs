//! Constant product pool walkthrough on the mainnet USDC/WETH pair.
//!
//! Derives the pair address, quotes swaps in both directions, and prices
//! a liquidity position with and without the protocol fee switch.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=cpmm_pool=trace cargo run --example constant_product
//! ```

use alloy_primitives::{address, U256};
use cpmm_pool::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Constant Product Pool (x · y = k) ===\n");

    // ── 1. Define tokens ────────────────────────────────────────────────
    let usdc = Token::new(
        1,
        address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
        Decimals::new(6)?,
    );
    let weth = Token::new(
        1,
        address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
        Decimals::new(18)?,
    );

    // ── 2. Snapshot reserves: 20 M USDC / 10 000 WETH ───────────────────
    let pool = Pool::new(
        TokenAmount::new(weth, Amount::from_u128(10_000 * 10u128.pow(18))),
        TokenAmount::new(usdc, Amount::from_u128(20_000_000 * 10u128.pow(6))),
    )?;
    println!("Pair address: {}", pool.address());
    println!("  token0:     {}", pool.token0().address());
    println!("  token1:     {}", pool.token1().address());
    println!("  reserve0:   {}", pool.reserve0());
    println!("  reserve1:   {}", pool.reserve1());
    println!("  fee:        {}", pool.fee());

    // ── 3. Mid price ────────────────────────────────────────────────────
    let weth_price = pool.price_of(&weth)?;
    let one_weth = TokenAmount::new(weth, Amount::from_u128(10u128.pow(18)));
    println!("\nMid price: 1 WETH = {} USDC", weth_price.quote(&one_weth)?);

    // ── 4. Exact-in: sell 50 WETH ───────────────────────────────────────
    let sell = TokenAmount::new(weth, Amount::from_u128(50 * 10u128.pow(18)));
    let (usdc_out, after_sell) = pool.get_output_amount(&sell)?;
    println!("\n--- Sell {sell} WETH ---");
    println!("  Received:    {usdc_out} USDC");
    println!("  New price:   1 WETH = {} USDC", after_sell.price_of(&weth)?.quote(&one_weth)?);
    println!("  k grew:      {}", after_sell.k() > pool.k());

    // ── 5. Exact-out: buy 100 000 USDC ──────────────────────────────────
    let want = TokenAmount::new(usdc, Amount::from_u128(100_000 * 10u128.pow(6)));
    let (cost, _) = pool.get_input_amount(&want)?;
    println!("\n--- Buy {want} USDC ---");
    println!("  Costs:       {cost} WETH");

    // ── 6. Liquidity ────────────────────────────────────────────────────
    let lp = pool.liquidity_token();
    let supply = TokenAmount::new(lp, Amount::from_u128(400_000 * 10u128.pow(18)));
    let deposit = pool.get_liquidity_minted(
        &supply,
        &TokenAmount::new(usdc, Amount::from_u128(20_000 * 10u128.pow(6))),
        &TokenAmount::new(weth, Amount::from_u128(10 * 10u128.pow(18))),
    )?;
    println!("\n--- Deposit 20 000 USDC + 10 WETH ---");
    println!("  Minted:      {deposit} LP");

    let value = pool.get_liquidity_value(&weth, &supply, &deposit, false, None)?;
    let k_last = U256::from(19_000_000u128 * 10u128.pow(6)) * U256::from(9_500u128 * 10u128.pow(18));
    let diluted = pool.get_liquidity_value(&weth, &supply, &deposit, true, Some(k_last))?;
    println!("  Redeems:     {value} WETH");
    println!("  Fee switch:  {diluted} WETH");

    // ── 7. Errors are values ────────────────────────────────────────────
    let drain = TokenAmount::new(usdc, pool.reserve0().raw());
    match pool.get_input_amount(&drain) {
        Err(PoolError::InsufficientReserves) => println!("\nDraining the pool is rejected"),
        other => println!("\nUnexpected: {other:?}"),
    }

    println!("\n=== Done ===");
    Ok(())
}
