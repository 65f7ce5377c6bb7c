//! # Hawl (Lunar Year) Tracker
//!
//! Wealth must stay at or above Nisab for one full Hijri year (Hawl) before
//! Zakat becomes obligatory. Hijri years are 354 or 355 days long, so
//! completion is decided by counting days from the anchor to the anchor's
//! anniversary, never by subtracting year numbers.
//!
//! The anchor (the date wealth first reached Nisab) is chosen by the user and
//! only ever moves through [`HawlTracker::record_payment`]; nothing here
//! advances it on its own, so an unpaid year is never silently dropped.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calendar::{days_between, gregorian_to_hijri, HijriDate};
use crate::types::ZakatError;

/// Where the user stands in the yearly cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum HawlStatus {
    NoAnchor,
    /// Hawl running; `due_date` not reached yet.
    Pending { anchor: HijriDate, due_date: HijriDate },
    /// `due_date` reached or passed and no payment recorded.
    Due { anchor: HijriDate, due_date: HijriDate },
}

impl HawlStatus {
    pub fn anchor(&self) -> Option<HijriDate> {
        match self {
            HawlStatus::NoAnchor => None,
            HawlStatus::Pending { anchor, .. } | HawlStatus::Due { anchor, .. } => Some(*anchor),
        }
    }

    pub fn due_date(&self) -> Option<HijriDate> {
        match self {
            HawlStatus::NoAnchor => None,
            HawlStatus::Pending { due_date, .. } | HawlStatus::Due { due_date, .. } => Some(*due_date),
        }
    }

    pub fn is_due(&self) -> bool {
        matches!(self, HawlStatus::Due { .. })
    }
}

/// Snapshot of the Hawl as seen on one day; everything but the anchor is derived.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct HawlState {
    pub anchor_date: Option<HijriDate>,
    pub hawl_complete: bool,
    pub next_due_date_hijri: Option<HijriDate>,
    pub next_due_date_gregorian: Option<NaiveDate>,
    /// Negative once the due date has passed.
    pub days_until_due: Option<i64>,
}

/// Tracks the Hawl of one anchor relative to a calculation date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HawlTracker {
    anchor: Option<HijriDate>,
    current: HijriDate,
}

impl HawlTracker {
    pub fn new(current: HijriDate) -> Self {
        Self { anchor: None, current }
    }

    pub fn on_gregorian(current: NaiveDate) -> Result<Self, ZakatError> {
        Ok(Self::new(gregorian_to_hijri(current)?))
    }

    /// Sets the date wealth reached Nisab.
    pub fn anchored_on(mut self, anchor: HijriDate) -> Self {
        if anchor > self.current {
            warn!(%anchor, current = %self.current, "hawl anchor lies in the future");
        }
        self.anchor = Some(anchor);
        self
    }

    pub fn anchor(&self) -> Option<HijriDate> {
        self.anchor
    }

    pub fn current(&self) -> HijriDate {
        self.current
    }

    pub fn status(&self) -> Result<HawlStatus, ZakatError> {
        let Some(anchor) = self.anchor else {
            return Ok(HawlStatus::NoAnchor);
        };
        let due_date = next_due_date(&anchor)?;
        Ok(if self.current >= due_date {
            HawlStatus::Due { anchor, due_date }
        } else {
            HawlStatus::Pending { anchor, due_date }
        })
    }

    pub fn is_complete(&self) -> bool {
        self.anchor
            .is_some_and(|anchor| is_hawl_complete(&anchor, &self.current))
    }

    pub fn state(&self) -> Result<HawlState, ZakatError> {
        let status = self.status()?;
        let Some(due) = status.due_date() else {
            return Ok(HawlState::default());
        };
        Ok(HawlState {
            anchor_date: status.anchor(),
            hawl_complete: status.is_due(),
            next_due_date_hijri: Some(due),
            next_due_date_gregorian: Some(due.to_gregorian()?),
            days_until_due: Some(days_until(&due, &self.current)),
        })
    }

    /// Records that the Zakat for the completed Hawl was paid, starting the
    /// next Hawl at the old due date.
    ///
    /// Only legal while [`HawlStatus::Due`]. If several years were missed the
    /// tracker stays `Due` after one call, once per outstanding year.
    pub fn record_payment(self) -> Result<Self, ZakatError> {
        match self.status()? {
            HawlStatus::Due { anchor, due_date } => {
                debug!(%anchor, next_anchor = %due_date, "hawl anchor advanced after payment");
                Ok(Self {
                    anchor: Some(due_date),
                    current: self.current,
                })
            }
            HawlStatus::Pending { due_date, .. } => Err(ZakatError::invalid_input(
                "hawl",
                due_date,
                "payment recorded before the Hawl completed",
            )),
            HawlStatus::NoAnchor => Err(ZakatError::invalid_input(
                "hawl",
                "none",
                "payment recorded without an anchor date",
            )),
        }
    }
}

/// Number of days in the Hawl that starts on `anchor` (354 or 355).
pub fn hawl_length_days(anchor: &HijriDate) -> Result<i64, ZakatError> {
    Ok(days_between(anchor, &next_due_date(anchor)?))
}

/// True once at least one full Hawl of days has elapsed since `anchor`.
pub fn is_hawl_complete(anchor: &HijriDate, current: &HijriDate) -> bool {
    match hawl_length_days(anchor) {
        Ok(required) => days_between(anchor, current) >= required,
        // The anniversary falls past the supported calendar range.
        Err(_) => false,
    }
}

/// The anchor's anniversary one Hijri year later (day clamped to the month).
pub fn next_due_date(anchor: &HijriDate) -> Result<HijriDate, ZakatError> {
    anchor.add_years_clamped(1)
}

/// Days from `current` to `target`; negative when `target` is past.
pub fn days_until(target: &HijriDate, current: &HijriDate) -> i64 {
    days_between(current, target)
}
