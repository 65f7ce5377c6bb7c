//! Metal prices as supplied by an external feed.
//!
//! The crate performs no network I/O: a `PriceQuote` is handed in by the
//! caller, or pulled through the `PriceProvider` seam (feature `async`) whose
//! implementation, cache lifetime and refresh cadence belong to the caller.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::inputs::IntoAmount;
use crate::types::ZakatError;

/// Gold and silver price per gram in one currency on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PriceQuote {
    pub gold_per_gram: Decimal,
    pub silver_per_gram: Decimal,
    pub currency: Currency,
    pub as_of: NaiveDate,
}

impl PriceQuote {
    pub fn new(
        gold_per_gram: impl IntoAmount,
        silver_per_gram: impl IntoAmount,
        currency: Currency,
        as_of: NaiveDate,
    ) -> Result<Self, ZakatError> {
        let quote = Self {
            gold_per_gram: gold_per_gram.into_amount("gold_price_per_gram")?,
            silver_per_gram: silver_per_gram.into_amount("silver_price_per_gram")?,
            currency,
            as_of,
        };
        quote.validate()?;
        Ok(quote)
    }

    /// Both prices must be strictly positive.
    pub fn validate(&self) -> Result<(), ZakatError> {
        if self.gold_per_gram <= Decimal::ZERO {
            return Err(ZakatError::invalid_input(
                "gold_price_per_gram",
                self.gold_per_gram,
                "price must be greater than zero",
            ));
        }
        if self.silver_per_gram <= Decimal::ZERO {
            return Err(ZakatError::invalid_input(
                "silver_price_per_gram",
                self.silver_per_gram,
                "price must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Source of the current price quote.
#[cfg(feature = "async")]
#[async_trait::async_trait]
pub trait PriceProvider: Send + Sync {
    async fn get_quote(&self) -> Result<PriceQuote, ZakatError>;
}

/// Serves one fixed quote; for tests and for callers that already hold prices.
#[derive(Debug, Clone)]
pub struct StaticPriceProvider {
    quote: PriceQuote,
}

impl StaticPriceProvider {
    pub fn new(quote: PriceQuote) -> Result<Self, ZakatError> {
        quote.validate()?;
        Ok(Self { quote })
    }

    pub fn quote(&self) -> &PriceQuote {
        &self.quote
    }
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl PriceProvider for StaticPriceProvider {
    async fn get_quote(&self) -> Result<PriceQuote, ZakatError> {
        Ok(self.quote.clone())
    }
}
