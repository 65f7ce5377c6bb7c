use rust_decimal::{Decimal, RoundingStrategy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::ZakatError;

/// ISO 4217 currencies whose minor unit is not two digits.
const MINOR_UNIT_EXCEPTIONS: &[(&str, u32)] = &[
    ("BHD", 3),
    ("IQD", 3),
    ("JOD", 3),
    ("KWD", 3),
    ("LYD", 3),
    ("OMR", 3),
    ("TND", 3),
    ("BIF", 0),
    ("CLP", 0),
    ("DJF", 0),
    ("GNF", 0),
    ("ISK", 0),
    ("JPY", 0),
    ("KMF", 0),
    ("KRW", 0),
    ("PYG", 0),
    ("RWF", 0),
    ("UGX", 0),
    ("VND", 0),
    ("VUV", 0),
    ("XAF", 0),
    ("XOF", 0),
    ("XPF", 0),
];

/// A currency code together with the number of digits in its minor unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency {
    code: String,
    minor_units: u32,
}

impl Currency {
    /// Parses a three-letter ISO 4217 code (case-insensitive).
    pub fn new(code: &str) -> Result<Self, ZakatError> {
        let code = code.trim().to_ascii_uppercase();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ZakatError::invalid_input(
                "currency",
                &code,
                "expected a three-letter ISO 4217 code",
            ));
        }
        let minor_units = MINOR_UNIT_EXCEPTIONS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, units)| *units)
            .unwrap_or(2);
        Ok(Self { code, minor_units })
    }

    pub fn usd() -> Self {
        Self {
            code: "USD".to_string(),
            minor_units: 2,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn minor_units(&self) -> u32 {
        self.minor_units
    }

    /// Rounds half-up (midpoint away from zero) to the minor unit.
    pub fn round_amount(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.minor_units, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Formats an amount with exactly `minor_units` fraction digits, e.g. `SAR 325.00`.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded = self.round_amount(amount);
        format!("{} {:.*}", self.code, self.minor_units as usize, rounded)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::usd()
    }
}

impl JsonSchema for Currency {
    fn schema_name() -> String {
        "Currency".to_string()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Currency {
    type Err = ZakatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = ZakatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.code
    }
}
