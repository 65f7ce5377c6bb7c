#![cfg(feature = "async")]

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicUsize, Ordering};
use zakat_hawl::prelude::*;

/// Provider that counts how often it is asked.
struct CountingProvider {
    calls: AtomicUsize,
    quote: PriceQuote,
}

#[async_trait]
impl PriceProvider for CountingProvider {
    async fn get_quote(&self) -> Result<PriceQuote, ZakatError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.quote.clone())
    }
}

struct FailingProvider;

#[async_trait]
impl PriceProvider for FailingProvider {
    async fn get_quote(&self) -> Result<PriceQuote, ZakatError> {
        Err(ZakatError::InvalidInput {
            field: "price_feed".to_string(),
            value: "unavailable".to_string(),
            reason: "feed offline".to_string(),
        })
    }
}

fn quote() -> PriceQuote {
    PriceQuote::new(
        dec!(100),
        dec!(1),
        Currency::usd(),
        NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_snapshot_from_provider() {
    let provider = CountingProvider { calls: AtomicUsize::new(0), quote: quote() };
    let snapshot = NisabSnapshot::from_provider(&provider, &ZakatConfig::default())
        .await
        .unwrap();
    assert_eq!(snapshot.threshold(), dec!(595));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_evaluator_with_provider() {
    let provider = StaticPriceProvider::new(quote()).unwrap();
    let wealth = ZakatableWealth::new().cash(13_000).unwrap();
    let result = ZakatEvaluator::default()
        .evaluate_with_provider(
            &provider,
            &wealth,
            Some(HijriDate::new(1444, 10, 1).unwrap()),
            NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(result.zakat_amount_due, dec!(325.00));
}

#[tokio::test]
async fn test_provider_error_propagates() {
    let boxed: Box<dyn PriceProvider> = Box::new(FailingProvider);
    let err = NisabSnapshot::from_provider(boxed.as_ref(), &ZakatConfig::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
