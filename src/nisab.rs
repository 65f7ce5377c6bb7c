//! Nisab: the minimum zakatable wealth, pegged to a weight of gold or silver.
//!
//! Thresholds are recomputed from the supplied prices on every call and are
//! exact products (`grams × price`); nothing is cached here.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ZakatConfig;
use crate::currency::Currency;
use crate::inputs::IntoAmount;
use crate::madhab::NisabStandard;
use crate::pricing::PriceQuote;
use crate::types::ZakatError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NisabSnapshot {
    pub gold_price_per_gram: Decimal,
    pub silver_price_per_gram: Decimal,
    pub gold_based_threshold: Decimal,
    pub silver_based_threshold: Decimal,
    pub currency: Currency,
    pub as_of_date: NaiveDate,
    /// Standard that [`NisabSnapshot::threshold`] applies.
    pub standard: NisabStandard,
}

impl NisabSnapshot {
    pub fn from_quote(quote: &PriceQuote, config: &ZakatConfig) -> Result<Self, ZakatError> {
        quote.validate()?;
        config.validate()?;
        if quote.currency != config.currency {
            return Err(ZakatError::invalid_input(
                "currency",
                &quote.currency,
                format!("price quote is not in the configured currency {}", config.currency),
            ));
        }

        let gold_based_threshold = config
            .gold_nisab_grams()
            .checked_mul(quote.gold_per_gram)
            .ok_or_else(|| ZakatError::overflow("gold nisab threshold"))?;
        let silver_based_threshold = config
            .silver_nisab_grams()
            .checked_mul(quote.silver_per_gram)
            .ok_or_else(|| ZakatError::overflow("silver nisab threshold"))?;

        let snapshot = Self {
            gold_price_per_gram: quote.gold_per_gram,
            silver_price_per_gram: quote.silver_per_gram,
            gold_based_threshold,
            silver_based_threshold,
            currency: quote.currency.clone(),
            as_of_date: quote.as_of,
            standard: config.nisab_standard,
        };
        debug!(
            gold = %snapshot.gold_based_threshold,
            silver = %snapshot.silver_based_threshold,
            standard = %snapshot.standard,
            currency = %snapshot.currency,
            "computed nisab thresholds"
        );
        Ok(snapshot)
    }

    #[cfg(feature = "async")]
    pub async fn from_provider<P: crate::pricing::PriceProvider + ?Sized>(
        provider: &P,
        config: &ZakatConfig,
    ) -> Result<Self, ZakatError> {
        let quote = provider.get_quote().await?;
        Self::from_quote(&quote, config)
    }

    /// The threshold selected by this snapshot's standard.
    pub fn threshold(&self) -> Decimal {
        self.threshold_for(self.standard)
    }

    pub fn threshold_for(&self, standard: NisabStandard) -> Decimal {
        match standard {
            NisabStandard::Gold => self.gold_based_threshold,
            NisabStandard::Silver => self.silver_based_threshold,
            NisabStandard::LowerOfTwo => self.gold_based_threshold.min(self.silver_based_threshold),
        }
    }

    /// Same prices, different standard.
    pub fn with_standard(mut self, standard: NisabStandard) -> Self {
        self.standard = standard;
        self
    }
}

/// Computes both thresholds under the default configuration, dated today.
///
/// Fails with `InvalidInput` when either price is zero, negative or
/// non-finite.
pub fn compute_nisab(
    gold_price_per_gram: impl IntoAmount,
    silver_price_per_gram: impl IntoAmount,
    currency: Currency,
) -> Result<NisabSnapshot, ZakatError> {
    let quote = PriceQuote::new(
        gold_price_per_gram,
        silver_price_per_gram,
        currency.clone(),
        Local::now().date_naive(),
    )?;
    let config = ZakatConfig::default().with_currency(currency);
    NisabSnapshot::from_quote(&quote, &config)
}
