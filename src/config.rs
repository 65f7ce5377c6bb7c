use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::builder::{AssetBuilder, Validate};
use crate::currency::Currency;
use crate::inputs::IntoAmount;
use crate::madhab::{Madhab, NisabStandard};
use crate::types::ZakatError;

/// Gold Nisab weight used unless configured otherwise.
pub const GOLD_NISAB_GRAMS: Decimal = dec!(85);

/// 20 mithqal at 4.374 g each; some references quote this instead of 85 g.
pub const GOLD_NISAB_GRAMS_TWENTY_MITHQAL: Decimal = dec!(87.48);

/// 200 dirham of silver.
pub const SILVER_NISAB_GRAMS: Decimal = dec!(595);

/// Rules that shape the Nisab threshold and the currency of the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ZakatConfig {
    pub madhab: Madhab,
    /// Standard for cash and savings. Derived from the madhab by `with_madhab`.
    pub nisab_standard: NisabStandard,
    /// Override for the gold weight (default 85 g).
    #[serde(default)]
    pub nisab_gold_grams: Option<Decimal>,
    /// Override for the silver weight (default 595 g).
    #[serde(default)]
    pub nisab_silver_grams: Option<Decimal>,
    #[serde(default)]
    pub currency: Currency,
}

impl Default for ZakatConfig {
    fn default() -> Self {
        let madhab = Madhab::default();
        Self {
            madhab,
            nisab_standard: madhab.nisab_standard(),
            nisab_gold_grams: None,
            nisab_silver_grams: None,
            currency: Currency::default(),
        }
    }
}

impl std::str::FromStr for ZakatConfig {
    type Err = ZakatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: ZakatConfig = serde_json::from_str(s)
            .map_err(|e| ZakatError::configuration(format!("failed to parse config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

impl ZakatConfig {
    pub fn builder() -> ZakatConfigBuilder {
        ZakatConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), ZakatError> {
        if let Some(grams) = self.nisab_gold_grams
            && grams <= Decimal::ZERO
        {
            return Err(ZakatError::configuration("gold Nisab weight must be positive"));
        }
        if let Some(grams) = self.nisab_silver_grams
            && grams <= Decimal::ZERO
        {
            return Err(ZakatError::configuration("silver Nisab weight must be positive"));
        }
        Ok(())
    }

    /// Reads `ZAKAT_MADHAB`, `ZAKAT_NISAB_STANDARD`, `ZAKAT_GOLD_NISAB_GRAMS`,
    /// `ZAKAT_SILVER_NISAB_GRAMS` and `ZAKAT_CURRENCY`; unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self, ZakatError> {
        let mut builder = Self::builder();

        if let Some(value) = read_env("ZAKAT_MADHAB") {
            builder = builder.madhab(value.parse()?);
        }
        if let Some(value) = read_env("ZAKAT_NISAB_STANDARD") {
            builder = builder.nisab_standard(value.parse()?);
        }
        if let Some(value) = read_env("ZAKAT_GOLD_NISAB_GRAMS") {
            builder = builder.nisab_gold_grams(parse_grams("ZAKAT_GOLD_NISAB_GRAMS", &value)?);
        }
        if let Some(value) = read_env("ZAKAT_SILVER_NISAB_GRAMS") {
            builder = builder.nisab_silver_grams(parse_grams("ZAKAT_SILVER_NISAB_GRAMS", &value)?);
        }
        if let Some(value) = read_env("ZAKAT_CURRENCY") {
            let currency = Currency::new(&value)
                .map_err(|e| ZakatError::configuration(format!("ZAKAT_CURRENCY: {}", e)))?;
            builder = builder.currency(currency);
        }

        builder.build()
    }

    pub fn try_from_json(path: impl AsRef<Path>) -> Result<Self, ZakatError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ZakatError::configuration(format!("failed to read config file {}: {}", path.display(), e))
        })?;
        let config: ZakatConfig = content.parse()?;
        debug!(path = %path.display(), "loaded zakat configuration");
        Ok(config)
    }

    pub fn with_madhab(mut self, madhab: Madhab) -> Self {
        self.madhab = madhab;
        self.nisab_standard = madhab.nisab_standard();
        self
    }

    pub fn with_nisab_standard(mut self, standard: NisabStandard) -> Self {
        self.nisab_standard = standard;
        self
    }

    pub fn with_gold_nisab(mut self, grams: impl IntoAmount) -> Result<Self, ZakatError> {
        self.nisab_gold_grams = Some(grams.into_amount("nisab_gold_grams")?);
        self.validate()?;
        Ok(self)
    }

    pub fn with_silver_nisab(mut self, grams: impl IntoAmount) -> Result<Self, ZakatError> {
        self.nisab_silver_grams = Some(grams.into_amount("nisab_silver_grams")?);
        self.validate()?;
        Ok(self)
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn gold_nisab_grams(&self) -> Decimal {
        self.nisab_gold_grams.unwrap_or(GOLD_NISAB_GRAMS)
    }

    pub fn silver_nisab_grams(&self) -> Decimal {
        self.nisab_silver_grams.unwrap_or(SILVER_NISAB_GRAMS)
    }
}

fn read_env(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        Ok(_) => {
            warn!(key, "empty environment variable ignored");
            None
        }
        Err(_) => None,
    }
}

fn parse_grams(key: &str, value: &str) -> Result<Decimal, ZakatError> {
    value
        .trim()
        .parse::<Decimal>()
        .map_err(|e| ZakatError::configuration(format!("invalid {}: {}", key, e)))
}

// ========== ZakatConfigBuilder ==========

#[derive(Debug, Default)]
pub struct ZakatConfigBuilder {
    madhab: Option<Madhab>,
    nisab_standard: Option<NisabStandard>,
    nisab_gold_grams: Option<Decimal>,
    nisab_silver_grams: Option<Decimal>,
    currency: Option<Currency>,
}

impl ZakatConfigBuilder {
    pub fn madhab(mut self, madhab: Madhab) -> Self {
        self.madhab = Some(madhab);
        self
    }

    /// Explicit standard; takes precedence over the madhab's default.
    pub fn nisab_standard(mut self, standard: NisabStandard) -> Self {
        self.nisab_standard = Some(standard);
        self
    }

    pub fn nisab_gold_grams(mut self, grams: Decimal) -> Self {
        self.nisab_gold_grams = Some(grams);
        self
    }

    pub fn nisab_silver_grams(mut self, grams: Decimal) -> Self {
        self.nisab_silver_grams = Some(grams);
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }
}

impl Validate for ZakatConfigBuilder {
    fn validate(&self) -> Result<(), ZakatError> {
        for (name, grams) in [("gold", self.nisab_gold_grams), ("silver", self.nisab_silver_grams)] {
            if let Some(g) = grams
                && g <= Decimal::ZERO
            {
                return Err(ZakatError::configuration(format!(
                    "{} Nisab weight must be positive, got {}",
                    name, g
                )));
            }
        }
        Ok(())
    }
}

impl AssetBuilder<ZakatConfig> for ZakatConfigBuilder {
    fn build(self) -> Result<ZakatConfig, ZakatError> {
        Validate::validate(&self)?;

        let madhab = self.madhab.unwrap_or_default();
        let config = ZakatConfig {
            madhab,
            nisab_standard: self.nisab_standard.unwrap_or_else(|| madhab.nisab_standard()),
            nisab_gold_grams: self.nisab_gold_grams,
            nisab_silver_grams: self.nisab_silver_grams,
            currency: self.currency.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}
