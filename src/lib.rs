//! # zakat-hawl
//!
//! Zakat eligibility on savings, tracked over the Hijri (lunar) year.
//!
//! - [`calendar`]: tabular Hijri calendar, Gregorian conversion, month names,
//!   observances and dual-calendar display.
//! - [`nisab`]: gold/silver Nisab thresholds from a [`pricing::PriceQuote`].
//! - [`hawl`]: the one-lunar-year holding period and its due dates.
//! - [`evaluator`]: the obligation verdict and the amount due.
//! - [`comparison`] and [`history`]: year-over-year series and anchor checks.
//!
//! ```rust
//! use zakat_hawl::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let nisab = compute_nisab(dec!(100), dec!(1), Currency::usd()).unwrap();
//! let hawl = HawlTracker::new(HijriDate::new(1445, 10, 1).unwrap())
//!     .anchored_on(HijriDate::new(1444, 10, 1).unwrap())
//!     .state()
//!     .unwrap();
//!
//! let result = evaluate(dec!(13000.00), &nisab, &hawl).unwrap();
//! assert!(result.is_obligatory);
//! assert_eq!(result.zakat_amount_due, dec!(325.00));
//! ```

pub mod builder;
pub mod calendar;
pub mod comparison;
pub mod config;
pub mod currency;
pub mod evaluator;
pub mod hawl;
pub mod history;
pub mod inputs;
pub mod madhab;
pub mod nisab;
pub mod prelude;
pub mod pricing;
pub mod types;
pub mod wealth;

pub use calendar::{DualDate, HijriDate, HijriMonth};
pub use config::ZakatConfig;
pub use currency::Currency;
pub use evaluator::{evaluate, ZakatEligibilityResult, ZakatEvaluator, ZakatStatus};
pub use hawl::{HawlState, HawlStatus, HawlTracker};
pub use madhab::{Madhab, NisabStandard};
pub use nisab::{compute_nisab, NisabSnapshot};
pub use types::{ErrorKind, ZakatError};
