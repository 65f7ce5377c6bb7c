//! # Zakat Eligibility
//!
//! Combines zakatable wealth, a Nisab snapshot and the Hawl state into a
//! verdict and the amount due. Falling below Nisab is a valid outcome, not
//! an error.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::HijriDate;
use crate::config::ZakatConfig;
use crate::currency::Currency;
use crate::hawl::{HawlState, HawlTracker};
use crate::inputs::IntoAmount;
use crate::madhab::NisabStandard;
use crate::nisab::NisabSnapshot;
use crate::pricing::PriceQuote;
use crate::types::{CalculationStep, CalculationTrace, ZakatError};
use crate::wealth::ZakatableWealth;

/// 2.5% of zakatable wealth.
pub const ZAKAT_RATE: Decimal = dec!(0.025);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, strum::Display)]
#[serde(rename_all = "camelCase")]
pub enum ZakatStatus {
    /// At or above Nisab with a completed Hawl.
    Obligatory,
    /// At or above Nisab, Hawl not yet complete.
    HawlPending,
    BelowNisab,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ZakatEligibilityResult {
    pub annual_savings: Decimal,
    pub nisab_threshold: Decimal,
    pub is_obligatory: bool,
    /// Rounded half-up to the currency's minor unit; zero unless obligatory.
    pub zakat_amount_due: Decimal,
    pub next_zakat_date_hijri: Option<HijriDate>,
    pub next_zakat_date_gregorian: Option<NaiveDate>,
    pub days_until_zakat_date: Option<i64>,
    pub status: ZakatStatus,
    /// Wealth below Nisab: the holder may receive Zakat.
    pub eligible_to_receive: bool,
    pub currency: Currency,
    pub nisab_standard: NisabStandard,
    pub calculation_trace: CalculationTrace,
}

impl ZakatEligibilityResult {
    pub fn format_amount(&self) -> String {
        self.currency.format_amount(self.zakat_amount_due)
    }

    /// One-line status, e.g. `Obligatory - Due: USD 325.00`.
    pub fn summary(&self) -> String {
        let mut line = format!("{} - Due: {}", self.status, self.format_amount());
        if let Some(date) = self.next_zakat_date_hijri {
            line.push_str(&format!(" (next: {})", date));
        }
        line
    }

    /// Step-by-step account of the verdict.
    pub fn explain(&self) -> String {
        format!(
            "Zakat eligibility ({}):\n{:-<50}\n{}",
            self.nisab_standard,
            "",
            self.calculation_trace.explain()
        )
    }
}

/// Decides whether Zakat is obligatory on `wealth`.
///
/// Obligatory iff `wealth >= nisab.threshold()` (inclusive) and the Hawl is
/// complete. Negative or non-finite wealth is rejected, never clamped.
pub fn evaluate(
    wealth: impl IntoAmount,
    nisab: &NisabSnapshot,
    hawl: &HawlState,
) -> Result<ZakatEligibilityResult, ZakatError> {
    let annual_savings = wealth.into_amount("annual_savings")?;
    let mut trace = CalculationTrace::default();
    trace.push(CalculationStep::initial("Annual Savings", annual_savings));
    assess(annual_savings, nisab, hawl, trace)
}

fn assess(
    annual_savings: Decimal,
    nisab: &NisabSnapshot,
    hawl: &HawlState,
    mut trace: CalculationTrace,
) -> Result<ZakatEligibilityResult, ZakatError> {
    if annual_savings < Decimal::ZERO {
        return Err(ZakatError::invalid_input(
            "annual_savings",
            annual_savings,
            "wealth must be non-negative",
        ));
    }

    let nisab_threshold = nisab.threshold();
    let meets_nisab = annual_savings >= nisab_threshold;
    let is_obligatory = meets_nisab && hawl.hawl_complete;

    trace.push(CalculationStep::compare(
        format!("Nisab Threshold ({})", nisab.standard),
        nisab_threshold,
    ));

    let status = if !meets_nisab {
        trace.push(CalculationStep::info("Wealth below Nisab; eligible to receive Zakat"));
        ZakatStatus::BelowNisab
    } else if !hawl.hawl_complete {
        trace.push(CalculationStep::info(match hawl.anchor_date {
            Some(anchor) => format!("Hawl running since {}", anchor),
            None => "No Hawl anchor recorded".to_string(),
        }));
        ZakatStatus::HawlPending
    } else {
        trace.push(CalculationStep::info("Hawl complete"));
        ZakatStatus::Obligatory
    };

    let zakat_amount_due = if is_obligatory {
        let raw = annual_savings
            .checked_mul(ZAKAT_RATE)
            .ok_or_else(|| ZakatError::overflow("zakat amount"))?;
        trace.push(CalculationStep::rate("Rate (2.5%)", ZAKAT_RATE));
        nisab.currency.round_amount(raw)
    } else {
        Decimal::ZERO
    };
    trace.push(CalculationStep::result("Zakat Due", zakat_amount_due));

    let result = ZakatEligibilityResult {
        annual_savings,
        nisab_threshold,
        is_obligatory,
        zakat_amount_due,
        next_zakat_date_hijri: hawl.next_due_date_hijri,
        next_zakat_date_gregorian: hawl.next_due_date_gregorian,
        days_until_zakat_date: hawl.days_until_due,
        status,
        eligible_to_receive: !meets_nisab,
        currency: nisab.currency.clone(),
        nisab_standard: nisab.standard,
        calculation_trace: trace,
    };

    debug!(
        savings = %result.annual_savings,
        threshold = %result.nisab_threshold,
        status = %result.status,
        due = %result.zakat_amount_due,
        "evaluated zakat eligibility"
    );
    Ok(result)
}

/// Runs the whole pipeline from raw inputs under one configuration.
#[derive(Debug, Clone, Default)]
pub struct ZakatEvaluator {
    config: ZakatConfig,
}

impl ZakatEvaluator {
    pub fn new(config: ZakatConfig) -> Result<Self, ZakatError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ZakatConfig {
        &self.config
    }

    /// `anchor` is the stored date wealth reached Nisab; `today` is the
    /// calculation date in the Gregorian calendar.
    pub fn evaluate(
        &self,
        quote: &PriceQuote,
        wealth: &ZakatableWealth,
        anchor: Option<HijriDate>,
        today: NaiveDate,
    ) -> Result<ZakatEligibilityResult, ZakatError> {
        let nisab = NisabSnapshot::from_quote(quote, &self.config)?;
        self.evaluate_with_nisab(&nisab, wealth, anchor, today)
    }

    #[cfg(feature = "async")]
    pub async fn evaluate_with_provider<P: crate::pricing::PriceProvider + ?Sized>(
        &self,
        provider: &P,
        wealth: &ZakatableWealth,
        anchor: Option<HijriDate>,
        today: NaiveDate,
    ) -> Result<ZakatEligibilityResult, ZakatError> {
        let nisab = NisabSnapshot::from_provider(provider, &self.config).await?;
        self.evaluate_with_nisab(&nisab, wealth, anchor, today)
    }

    fn evaluate_with_nisab(
        &self,
        nisab: &NisabSnapshot,
        wealth: &ZakatableWealth,
        anchor: Option<HijriDate>,
        today: NaiveDate,
    ) -> Result<ZakatEligibilityResult, ZakatError> {
        let mut tracker = HawlTracker::on_gregorian(today)?;
        if let Some(anchor) = anchor {
            tracker = tracker.anchored_on(anchor);
        }
        let hawl = tracker.state()?;
        assess(wealth.net()?, nisab, &hawl, wealth.trace()?)
    }
}
