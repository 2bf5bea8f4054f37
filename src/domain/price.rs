//! Exact rational exchange rate between two tokens.

use core::fmt;

use alloy_primitives::U256;

use super::{Amount, Token, TokenAmount};
use crate::error::PoolError;
use crate::math::{full_mul, gcd_wide, mul_div, narrow, Rounding};

/// Exchange rate expressed as `numerator / denominator` units of `quote`
/// per unit of `base`.
///
/// Prices are never rounded: comparisons cross-multiply in 512 bits, and
/// only [`quote`](Self::quote) (which produces an integer amount) floors.
///
/// # Examples
///
/// ```
/// use alloy_primitives::{Address, U256};
/// use cpmm_pool::domain::{Decimals, Price, Token};
///
/// let a = Token::new(1, Address::repeat_byte(1), Decimals::new(18).expect("valid"));
/// let b = Token::new(1, Address::repeat_byte(2), Decimals::new(18).expect("valid"));
///
/// // 2 B per A
/// let p = Price::new(a, b, U256::from(1u8), U256::from(2u8)).expect("non-zero denominator");
/// assert_eq!(p.invert().expect("non-zero").numerator(), U256::from(1u8));
/// ```
#[derive(Debug, Clone, Copy, Eq)]
pub struct Price {
    base: Token,
    quote: Token,
    denominator: U256,
    numerator: U256,
}

impl Price {
    /// Creates a price of `numerator / denominator` quote per base.
    ///
    /// The argument order (denominator before numerator) follows the
    /// reserve order: `Price::new(base, quote, base_reserve, quote_reserve)`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::DivisionByZero`] if `denominator` is zero.
    pub fn new(
        base: Token,
        quote: Token,
        denominator: U256,
        numerator: U256,
    ) -> Result<Self, PoolError> {
        if denominator.is_zero() {
            return Err(PoolError::DivisionByZero);
        }
        Ok(Self {
            base,
            quote,
            denominator,
            numerator,
        })
    }

    /// Returns the base token.
    #[must_use]
    pub const fn base(&self) -> Token {
        self.base
    }

    /// Returns the quote token.
    #[must_use]
    pub const fn quote_token(&self) -> Token {
        self.quote
    }

    /// Returns the numerator (quote side).
    #[must_use]
    pub const fn numerator(&self) -> U256 {
        self.numerator
    }

    /// Returns the denominator (base side).
    #[must_use]
    pub const fn denominator(&self) -> U256 {
        self.denominator
    }

    /// Returns the price of `base` in terms of `quote` flipped: quote becomes base.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::DivisionByZero`] if the price is zero.
    pub fn invert(&self) -> Result<Self, PoolError> {
        Self::new(self.quote, self.base, self.numerator, self.denominator)
    }

    /// Chains two prices: `(B per A) * (C per B) = C per A`.
    ///
    /// Both products are formed in 512 bits and reduced to lowest terms
    /// before narrowing, so `p.checked_mul(&p.invert()?)` is exactly one
    /// for any 256-bit price.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidArgument`] if `other.base() != self.quote_token()`.
    /// - [`PoolError::Overflow`] if a reduced term exceeds 256 bits.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, PoolError> {
        if self.quote != other.base {
            return Err(PoolError::InvalidArgument(
                "price quote token must match the other price's base token",
            ));
        }
        let mut numerator = full_mul(self.numerator, other.numerator);
        let mut denominator = full_mul(self.denominator, other.denominator);
        let divisor = gcd_wide(numerator, denominator);
        if !divisor.is_zero() {
            numerator /= divisor;
            denominator /= divisor;
        }
        let numerator = narrow(numerator).ok_or(PoolError::Overflow("price numerator overflow"))?;
        let denominator =
            narrow(denominator).ok_or(PoolError::Overflow("price denominator overflow"))?;
        Self::new(self.base, other.quote, denominator, numerator)
    }

    /// Converts an amount of `base` into `quote` at this price, rounding down.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidArgument`] if `amount` is not denominated in `base`.
    /// - [`PoolError::Overflow`] if the result exceeds 256 bits.
    pub fn quote(&self, amount: &TokenAmount) -> Result<TokenAmount, PoolError> {
        if amount.token() != self.base {
            return Err(PoolError::InvalidArgument(
                "amount must be denominated in the price's base token",
            ));
        }
        let raw = mul_div(
            amount.raw().get(),
            self.numerator,
            self.denominator,
            Rounding::Down,
        )?;
        Ok(TokenAmount::new(self.quote, Amount::new(raw)))
    }

    /// Returns `true` if the ratio equals one exactly.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }
}

/// Equal tokens and an equal ratio, regardless of scaling
/// (`2/4 == 1/2`).
impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
            && self.quote == other.quote
            && full_mul(self.numerator, other.denominator)
                == full_mul(other.numerator, self.denominator)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Decimals;
    use alloy_primitives::Address;

    fn tok(byte: u8) -> Token {
        let Ok(d) = Decimals::new(18) else {
            panic!("valid decimals");
        };
        Token::new(1, Address::repeat_byte(byte), d)
    }

    fn price(base: u8, quote: u8, den: u64, num: u64) -> Price {
        let Ok(p) = Price::new(tok(base), tok(quote), U256::from(den), U256::from(num)) else {
            panic!("valid price");
        };
        p
    }

    #[test]
    fn zero_denominator_rejected() {
        assert_eq!(
            Price::new(tok(1), tok(2), U256::ZERO, U256::from(1u8)),
            Err(PoolError::DivisionByZero)
        );
    }

    #[test]
    fn equality_is_by_ratio() {
        assert_eq!(price(1, 2, 2, 4), price(1, 2, 1, 2));
        assert_ne!(price(1, 2, 1, 2), price(1, 2, 2, 1));
        assert_ne!(price(1, 2, 1, 2), price(1, 3, 1, 2));
    }

    #[test]
    fn invert_swaps_tokens_and_terms() {
        let Ok(inv) = price(1, 2, 3, 5).invert() else {
            panic!("expected Ok");
        };
        assert_eq!(inv.base(), tok(2));
        assert_eq!(inv.quote_token(), tok(1));
        assert_eq!(inv.numerator(), U256::from(3u8));
        assert_eq!(inv.denominator(), U256::from(5u8));
    }

    #[test]
    fn invert_zero_price_fails() {
        assert_eq!(price(1, 2, 3, 0).invert(), Err(PoolError::DivisionByZero));
    }

    #[test]
    fn chained_prices() {
        let Ok(ac) = price(1, 2, 1, 2).checked_mul(&price(2, 3, 1, 3)) else {
            panic!("expected Ok");
        };
        assert_eq!(ac, price(1, 3, 1, 6));
    }

    #[test]
    fn chained_wide_prices_reduce_to_lowest_terms() {
        let big = U256::from(1u8) << 130usize;
        let next = big + U256::from(1u8);
        let (Ok(p), Ok(q)) = (
            Price::new(tok(1), tok(2), big, next),
            Price::new(tok(2), tok(1), next, big),
        ) else {
            panic!("valid prices");
        };
        let Ok(product) = p.checked_mul(&q) else {
            panic!("expected Ok");
        };
        assert!(product.is_one());
        assert_eq!(product.numerator(), U256::from(1u8));
    }

    #[test]
    fn chained_irreducible_overflow_rejected() {
        let big = U256::MAX;
        let odd = U256::MAX - U256::from(1u8);
        let (Ok(p), Ok(q)) = (
            Price::new(tok(1), tok(2), U256::from(1u8), big),
            Price::new(tok(2), tok(3), U256::from(1u8), odd),
        ) else {
            panic!("valid prices");
        };
        assert!(matches!(p.checked_mul(&q), Err(PoolError::Overflow(_))));
    }

    #[test]
    fn chained_prices_require_matching_tokens() {
        assert!(matches!(
            price(1, 2, 1, 2).checked_mul(&price(3, 1, 1, 2)),
            Err(PoolError::InvalidArgument(_))
        ));
    }

    #[test]
    fn price_times_inverse_is_one() {
        let p = price(1, 2, 1_000, 2_000);
        let Ok(inv) = p.invert() else {
            panic!("expected Ok");
        };
        let Ok(product) = p.checked_mul(&inv) else {
            panic!("expected Ok");
        };
        assert!(product.is_one());
    }

    #[test]
    fn quote_rounds_down() {
        let p = price(1, 2, 3, 2);
        let Ok(out) = p.quote(&TokenAmount::new(tok(1), Amount::from_u128(10))) else {
            panic!("expected Ok");
        };
        // 10 * 2 / 3 = 6.67
        assert_eq!(out, TokenAmount::new(tok(2), Amount::from_u128(6)));
    }

    #[test]
    fn quote_wrong_token_rejected() {
        let p = price(1, 2, 1, 1);
        assert!(matches!(
            p.quote(&TokenAmount::new(tok(2), Amount::from_u128(1))),
            Err(PoolError::InvalidArgument(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(price(1, 2, 3, 5).to_string(), "5/3");
    }
}
