//! Property-based tests for the pool invariants.
//!
//! 1. **Address symmetry** — derivation ignores argument order.
//! 2. **Canonical order** — `token0` sorts first and keeps its reserve.
//! 3. **Reciprocal prices** — `token0_price × token1_price == 1`, up to
//!    full 256-bit reserves.
//! 4. **k never decreases** — for exact-in and exact-out quotes, in both
//!    swap directions.
//! 5. **No draining** — output stays strictly below the output reserve.
//! 6. **Minimal input** — the exact-out quote of an exact-in output is the
//!    smallest input that buys it.
//! 7. **Bounded redemption** — liquidity value never exceeds the reserve.

use alloy_primitives::{Address, U256};
use proptest::prelude::*;

use super::Pool;
use crate::config::Deployment;
use crate::domain::{Amount, Decimals, Token, TokenAmount};
use crate::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn tok(address: Address) -> Token {
    let Ok(d) = Decimals::new(18) else {
        panic!("valid decimals");
    };
    Token::new(1, address, d)
}

fn tok_a() -> Token {
    tok(Address::repeat_byte(0xaa))
}

fn tok_b() -> Token {
    tok(Address::repeat_byte(0x0b))
}

fn make_pool(ra: u128, rb: u128) -> Pool {
    let Ok(pool) = Pool::new(
        TokenAmount::new(tok_a(), Amount::from_u128(ra)),
        TokenAmount::new(tok_b(), Amount::from_u128(rb)),
    ) else {
        panic!("valid pool");
    };
    pool
}

/// `(input token, output token)` for a swap in the given direction.
fn oriented_tokens(a_to_b: bool) -> (Token, Token) {
    if a_to_b {
        (tok_a(), tok_b())
    } else {
        (tok_b(), tok_a())
    }
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000_000_000_000_000_000u128
}

fn input_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000_000_000_000_000u128
}

/// Any non-zero 256-bit reserve.
fn wide_reserve_strategy() -> impl Strategy<Value = U256> {
    any::<[u64; 4]>().prop_map(|limbs| U256::from_limbs(limbs).max(U256::from(1u8)))
}

fn address_strategy() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_address_symmetric(a in address_strategy(), b in address_strategy()) {
        prop_assume!(a != b);
        let d = Deployment::UNISWAP_V2;
        prop_assert_eq!(
            Pool::address_of(&d, &tok(a), &tok(b)),
            Pool::address_of(&d, &tok(b), &tok(a))
        );
    }

    #[test]
    fn prop_canonical_order(
        a in address_strategy(),
        b in address_strategy(),
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        prop_assume!(a != b);
        let amount_a = TokenAmount::new(tok(a), Amount::from_u128(ra));
        let amount_b = TokenAmount::new(tok(b), Amount::from_u128(rb));
        let (Ok(pool), Ok(swapped)) = (Pool::new(amount_a, amount_b), Pool::new(amount_b, amount_a)) else {
            panic!("valid pool");
        };
        prop_assert_eq!(pool, swapped);
        prop_assert!(pool.token0().address() < pool.token1().address());
        prop_assert_eq!(pool.reserve_of(&tok(a)).map(|r| r.raw()), Ok(Amount::from_u128(ra)));
        prop_assert_eq!(pool.reserve_of(&tok(b)).map(|r| r.raw()), Ok(Amount::from_u128(rb)));
    }

    #[test]
    fn prop_prices_reciprocal(ra in reserve_strategy(), rb in reserve_strategy()) {
        let pool = make_pool(ra, rb);
        let (Ok(p0), Ok(p1)) = (pool.token0_price(), pool.token1_price()) else {
            panic!("non-empty reserves have prices");
        };
        let Ok(product) = p0.checked_mul(&p1) else {
            panic!("reciprocal prices reduce to one");
        };
        prop_assert!(product.is_one());
    }

    #[test]
    fn prop_wide_prices_reciprocal(ra in wide_reserve_strategy(), rb in wide_reserve_strategy()) {
        let Ok(pool) = Pool::new(
            TokenAmount::new(tok_a(), Amount::new(ra)),
            TokenAmount::new(tok_b(), Amount::new(rb)),
        ) else {
            panic!("valid pool");
        };
        let (Ok(p0), Ok(p1)) = (pool.token0_price(), pool.token1_price()) else {
            panic!("non-empty reserves have prices");
        };
        let Ok(product) = p0.checked_mul(&p1) else {
            panic!("reciprocal prices reduce to one");
        };
        prop_assert!(product.is_one());
    }
}

// ---------------------------------------------------------------------------
// Swaps
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_exact_in_k_non_decreasing(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        x in input_strategy(),
        a_to_b in any::<bool>(),
    ) {
        let pool = make_pool(ra, rb);
        let (token_in, token_out) = oriented_tokens(a_to_b);
        let Ok((out, next)) = pool.get_output_amount(&TokenAmount::new(token_in, Amount::from_u128(x))) else {
            return Ok(());
        };
        prop_assert!(next.k() >= pool.k());
        prop_assert_eq!(out.token(), token_out);
        let (Ok(reserve_in), Ok(reserve_out), Ok(next_in)) = (
            pool.reserve_of(&token_in),
            pool.reserve_of(&token_out),
            next.reserve_of(&token_in),
        ) else {
            panic!("pool token");
        };
        prop_assert!(out.raw() < reserve_out.raw());
        prop_assert_eq!(Some(next_in.raw()), reserve_in.raw().checked_add(&Amount::from_u128(x)));
    }

    #[test]
    fn prop_exact_out_k_non_decreasing(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        y in input_strategy(),
        a_to_b in any::<bool>(),
    ) {
        let pool = make_pool(ra, rb);
        let (token_in, token_out) = oriented_tokens(a_to_b);
        let y = if a_to_b { y % rb } else { y % ra };
        prop_assume!(y > 0);
        let Ok((cost, next)) = pool.get_input_amount(&TokenAmount::new(token_out, Amount::from_u128(y))) else {
            panic!("output below reserve is quotable");
        };
        prop_assert_eq!(cost.token(), token_in);
        prop_assert!(next.k() >= pool.k());
        let (Ok(before), Ok(after)) = (pool.reserve_of(&token_out), next.reserve_of(&token_out)) else {
            panic!("pool token");
        };
        prop_assert_eq!(Some(after.raw()), before.raw().checked_sub(&Amount::from_u128(y)));
    }

    #[test]
    fn prop_round_trip_input_is_minimal(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        x in input_strategy(),
    ) {
        let pool = make_pool(ra, rb);
        let input = TokenAmount::new(tok_a(), Amount::from_u128(x));
        let Ok((out, _)) = pool.get_output_amount(&input) else {
            return Ok(());
        };
        let Ok((needed, _)) = pool.get_input_amount(&out) else {
            panic!("quoted output is quotable in reverse");
        };
        prop_assert!(needed.raw() <= input.raw());

        let Ok((again, _)) = pool.get_output_amount(&needed) else {
            panic!("minimal input still buys the output");
        };
        prop_assert_eq!(again, out);

        let one = Amount::from_u128(1);
        if let Some(less) = needed.raw().checked_sub(&one) {
            let short = pool.get_output_amount(&TokenAmount::new(tok_a(), less));
            if let Ok((fewer, _)) = short {
                prop_assert!(fewer.raw() < out.raw());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Liquidity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_liquidity_value_bounded(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        supply in 1u128..=u128::MAX,
        share in 0u128..=u128::MAX,
        k_last in any::<u128>(),
        fee_on in any::<bool>(),
    ) {
        let pool = make_pool(ra, rb);
        let lp = |raw: u128| TokenAmount::new(pool.liquidity_token(), Amount::from_u128(raw));
        let liquidity = share % supply + 1;
        let Ok(value) = pool.get_liquidity_value(
            &tok_a(),
            &lp(supply),
            &lp(liquidity),
            fee_on,
            Some(U256::from(k_last)),
        ) else {
            panic!("valid redemption");
        };
        prop_assert!(value.raw() <= Amount::from_u128(ra));
    }

    #[test]
    fn prop_proportional_mint_never_dilutes(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        supply in 1u128..=1_000_000_000_000_000_000_000_000u128,
        da in input_strategy(),
        db in input_strategy(),
    ) {
        let pool = make_pool(ra, rb);
        let lp = |raw: u128| TokenAmount::new(pool.liquidity_token(), Amount::from_u128(raw));
        let Ok(minted) = pool.get_liquidity_minted(
            &lp(supply),
            &TokenAmount::new(tok_a(), Amount::from_u128(da)),
            &TokenAmount::new(tok_b(), Amount::from_u128(db)),
        ) else {
            return Ok(());
        };
        // minted / supply <= da / ra
        let lhs = U256::from(minted.raw().get()) * U256::from(ra);
        let rhs = U256::from(da) * U256::from(supply);
        prop_assert!(lhs <= rhs);
    }
}
