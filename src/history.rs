//! Anchor validation from a balance history.
//!
//! The Hawl restarts whenever wealth falls below Nisab. The evaluator trusts
//! the anchor it is given; callers holding a balance history use
//! [`analyze_continuity`] to find the anchor that history supports.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::{gregorian_to_hijri, HijriDate};
use crate::hawl::HawlTracker;
use crate::inputs::IntoAmount;
use crate::types::ZakatError;

/// Balance on one day with the Nisab in force that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BalanceSnapshot {
    pub date: NaiveDate,
    pub balance: Decimal,
    pub nisab_threshold: Decimal,
}

impl BalanceSnapshot {
    pub fn new(
        date: NaiveDate,
        balance: impl IntoAmount,
        nisab_threshold: impl IntoAmount,
    ) -> Result<Self, ZakatError> {
        let snapshot = Self {
            date,
            balance: balance.into_amount("balance")?,
            nisab_threshold: nisab_threshold.into_amount("nisab_threshold")?,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> Result<(), ZakatError> {
        if self.balance < Decimal::ZERO {
            return Err(ZakatError::invalid_input(
                "balance",
                self.balance,
                format!("negative balance on {}", self.date),
            ));
        }
        if self.nisab_threshold < Decimal::ZERO {
            return Err(ZakatError::invalid_input(
                "nisab_threshold",
                self.nisab_threshold,
                format!("negative Nisab on {}", self.date),
            ));
        }
        Ok(())
    }

    pub fn is_above_nisab(&self) -> bool {
        self.balance >= self.nisab_threshold
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ContinuityReport {
    /// Most recent day the balance was below Nisab.
    pub last_breach: Option<NaiveDate>,
    /// First day of the current unbroken streak at or above Nisab.
    pub anchor: Option<NaiveDate>,
    pub anchor_hijri: Option<HijriDate>,
    /// Whether the latest snapshot is at or above Nisab.
    pub currently_above_nisab: bool,
}

impl ContinuityReport {
    /// Tracker for `today` anchored where the history allows, if anywhere.
    pub fn tracker_on(&self, today: NaiveDate) -> Result<HawlTracker, ZakatError> {
        let tracker = HawlTracker::on_gregorian(today)?;
        Ok(match self.anchor_hijri {
            Some(anchor) => tracker.anchored_on(anchor),
            None => tracker,
        })
    }
}

/// Walks the snapshots in date order and reports where the current
/// above-Nisab streak began.
///
/// Input order does not matter. Any negative balance fails the whole call.
pub fn analyze_continuity(snapshots: &[BalanceSnapshot]) -> Result<ContinuityReport, ZakatError> {
    for snapshot in snapshots {
        snapshot.validate()?;
    }

    let mut sorted: Vec<&BalanceSnapshot> = snapshots.iter().collect();
    sorted.sort_by_key(|s| s.date);

    let mut report = ContinuityReport::default();
    for snapshot in sorted {
        if snapshot.is_above_nisab() {
            report.anchor.get_or_insert(snapshot.date);
            report.currently_above_nisab = true;
        } else {
            report.last_breach = Some(snapshot.date);
            report.anchor = None;
            report.currently_above_nisab = false;
        }
    }

    report.anchor_hijri = report.anchor.map(gregorian_to_hijri).transpose()?;
    debug!(
        anchor = ?report.anchor,
        last_breach = ?report.last_breach,
        snapshots = snapshots.len(),
        "analyzed nisab continuity"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snap(date: NaiveDate, balance: Decimal) -> BalanceSnapshot {
        BalanceSnapshot::new(date, balance, dec!(595)).unwrap()
    }

    #[test]
    fn test_dip_resets_anchor() {
        let report = analyze_continuity(&[
            snap(day(2024, 1, 1), dec!(2000)),
            snap(day(2023, 4, 22), dec!(1000)),
            snap(day(2023, 8, 1), dec!(100)),
            snap(day(2023, 9, 1), dec!(900)),
        ])
        .unwrap();
        assert_eq!(report.last_breach, Some(day(2023, 8, 1)));
        assert_eq!(report.anchor, Some(day(2023, 9, 1)));
        assert_eq!(report.anchor_hijri, Some(HijriDate::new(1445, 2, 15).unwrap()));
        assert!(report.currently_above_nisab);
    }

    #[test]
    fn test_unbroken_history_keeps_first_day() {
        let report = analyze_continuity(&[
            snap(day(2023, 4, 22), dec!(595)),
            snap(day(2023, 10, 1), dec!(5000)),
        ])
        .unwrap();
        assert_eq!(report.last_breach, None);
        assert_eq!(report.anchor_hijri, Some(HijriDate::new(1444, 10, 1).unwrap()));
    }

    #[test]
    fn test_currently_below_nisab_has_no_anchor() {
        let report = analyze_continuity(&[
            snap(day(2023, 4, 22), dec!(1000)),
            snap(day(2023, 5, 1), dec!(594.99)),
        ])
        .unwrap();
        assert_eq!(report.anchor, None);
        assert!(!report.currently_above_nisab);
        let tracker = report.tracker_on(day(2024, 5, 1)).unwrap();
        assert_eq!(tracker.anchor(), None);
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(analyze_continuity(&[]).unwrap(), ContinuityReport::default());
    }

    #[test]
    fn test_negative_balance_rejected() {
        assert!(BalanceSnapshot::new(day(2024, 1, 1), -1, 595).is_err());
        let tampered = BalanceSnapshot {
            date: day(2024, 1, 1),
            balance: dec!(-1),
            nisab_threshold: dec!(595),
        };
        assert!(analyze_continuity(&[tampered]).is_err());
    }
}
