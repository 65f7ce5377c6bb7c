use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::ZakatError;

/// Which metal standard fixes the monetary Nisab.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum NisabStandard {
    /// 85 g of gold at the gold price.
    Gold,
    /// 595 g of silver at the silver price.
    Silver,
    /// Whichever of the two thresholds is lower.
    #[default]
    LowerOfTwo,
}

impl FromStr for NisabStandard {
    type Err = ZakatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "gold" => Ok(NisabStandard::Gold),
            "silver" => Ok(NisabStandard::Silver),
            "lower-of-two" | "lower" => Ok(NisabStandard::LowerOfTwo),
            other => Err(ZakatError::configuration(format!(
                "unknown Nisab standard '{}' (expected gold, silver or lower-of-two)",
                other
            ))),
        }
    }
}

/// Islamic school of thought, used only to pick a default Nisab standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Madhab {
    #[default]
    Hanafi,
    Shafi,
    Maliki,
    Hanbali,
}

impl Madhab {
    pub fn nisab_standard(&self) -> NisabStandard {
        match self {
            Madhab::Hanafi | Madhab::Hanbali => NisabStandard::LowerOfTwo,
            Madhab::Shafi | Madhab::Maliki => NisabStandard::Gold,
        }
    }
}

impl FromStr for Madhab {
    type Err = ZakatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hanafi" => Ok(Madhab::Hanafi),
            "shafi" | "shafii" | "shafi'i" => Ok(Madhab::Shafi),
            "maliki" => Ok(Madhab::Maliki),
            "hanbali" => Ok(Madhab::Hanbali),
            other => Err(ZakatError::configuration(format!("unknown madhab '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_madhab_standards() {
        assert_eq!(Madhab::Hanafi.nisab_standard(), NisabStandard::LowerOfTwo);
        assert_eq!(Madhab::Shafi.nisab_standard(), NisabStandard::Gold);
        assert_eq!(Madhab::Maliki.nisab_standard(), NisabStandard::Gold);
        assert_eq!(Madhab::Hanbali.nisab_standard(), NisabStandard::LowerOfTwo);
    }

    #[test]
    fn test_parse_standard() {
        assert_eq!("Lower_Of_Two".parse::<NisabStandard>().unwrap(), NisabStandard::LowerOfTwo);
        assert_eq!("gold".parse::<NisabStandard>().unwrap(), NisabStandard::Gold);
        assert!("platinum".parse::<NisabStandard>().is_err());
    }

    #[test]
    fn test_standard_serde_is_kebab_case() {
        let json = serde_json::to_string(&NisabStandard::LowerOfTwo).unwrap();
        assert_eq!(json, r#""lower-of-two""#);
    }
}
