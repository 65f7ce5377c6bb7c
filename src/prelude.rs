//! Commonly used types and functions.
//!
//! ```rust
//! use zakat_hawl::prelude::*;
//! ```

pub use crate::builder::{AssetBuilder, Validate};
pub use crate::calendar::{
    days_between, days_in_hijri_month, format_gregorian_date, format_hijri_date, gregorian_to_hijri,
    hijri_month_name, hijri_to_gregorian, is_hijri_leap_year, is_islamic_holiday, DualDate, HijriDate,
    HijriMonth, HolidayStatus, IslamicHoliday,
};
pub use crate::comparison::{chronological, YearlyComparisonEntry};
pub use crate::config::{ZakatConfig, GOLD_NISAB_GRAMS, SILVER_NISAB_GRAMS};
pub use crate::currency::Currency;
pub use crate::evaluator::{evaluate, ZakatEligibilityResult, ZakatEvaluator, ZakatStatus, ZAKAT_RATE};
pub use crate::hawl::{days_until, is_hawl_complete, next_due_date, HawlState, HawlStatus, HawlTracker};
pub use crate::history::{analyze_continuity, BalanceSnapshot, ContinuityReport};
pub use crate::inputs::IntoAmount;
pub use crate::madhab::{Madhab, NisabStandard};
pub use crate::nisab::{compute_nisab, NisabSnapshot};
#[cfg(feature = "async")]
pub use crate::pricing::PriceProvider;
pub use crate::pricing::{PriceQuote, StaticPriceProvider};
pub use crate::types::{CalculationStep, CalculationTrace, ErrorKind, ZakatError};
pub use crate::wealth::ZakatableWealth;
