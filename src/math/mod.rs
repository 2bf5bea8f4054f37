//! Arithmetic utilities for pool calculations.
//!
//! - [`Rounding`] and [`div_round`] for explicit division rounding.
//! - [`mul_div`] for `a * b / c` without intermediate overflow.
//! - [`isqrt`] for the geometric-mean bootstrap of LP shares.
//! - [`CheckedArithmetic`] for `?`-friendly arithmetic on [`Amount`](crate::domain::Amount).

mod checked;
mod rounding;
mod sqrt;
mod wide;

pub use checked::CheckedArithmetic;
pub use rounding::{div_round, Rounding};
pub use sqrt::isqrt;
pub use wide::{div_wide, full_mul, gcd_wide, mul_div, narrow, widen};
