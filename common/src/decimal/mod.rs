//! Decimal type utilities for precise monetary values

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Account balance with exact fractional-cent precision
pub type Amount = Decimal;
