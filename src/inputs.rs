use rust_decimal::Decimal;
use std::str::FromStr;

use crate::types::ZakatError;

/// Conversion of loosely-typed numeric input into an exact `Decimal`.
///
/// Prices and balances may be given as integers, floats, strings or
/// `Decimal`. NaN and infinite floats are rejected.
pub trait IntoAmount {
    fn into_amount(self, field: &str) -> Result<Decimal, ZakatError>;
}

impl IntoAmount for Decimal {
    fn into_amount(self, _field: &str) -> Result<Decimal, ZakatError> {
        Ok(self)
    }
}

impl IntoAmount for &Decimal {
    fn into_amount(self, _field: &str) -> Result<Decimal, ZakatError> {
        Ok(*self)
    }
}

macro_rules! impl_into_amount_int {
    ($($t:ty),*) => {
        $(
            impl IntoAmount for $t {
                fn into_amount(self, _field: &str) -> Result<Decimal, ZakatError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_amount_int!(i32, u32, i64, u64, isize, usize);

macro_rules! impl_into_amount_float {
    ($($t:ty),*) => {
        $(
            impl IntoAmount for $t {
                fn into_amount(self, field: &str) -> Result<Decimal, ZakatError> {
                    if !self.is_finite() {
                        return Err(ZakatError::invalid_input(field, self, "value must be finite"));
                    }
                    // 0.1f64 must become exactly 0.1
                    Decimal::from_str(&self.to_string())
                        .or_else(|_| Decimal::from_scientific(&format!("{:e}", self)))
                        .map_err(|e| ZakatError::invalid_input(field, self, e.to_string()))
                }
            }
        )*
    };
}

impl_into_amount_float!(f32, f64);

impl IntoAmount for &str {
    fn into_amount(self, field: &str) -> Result<Decimal, ZakatError> {
        let trimmed = self.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|e| ZakatError::invalid_input(field, trimmed, e.to_string()))
    }
}

impl IntoAmount for String {
    fn into_amount(self, field: &str) -> Result<Decimal, ZakatError> {
        self.as_str().into_amount(field)
    }
}
