//! Tabular (civil) Islamic calendar arithmetic.
//!
//! Months alternate 30/29 days, and Dhu al-Hijjah gains a 30th day in the 11
//! leap years of each 30-year cycle (years where `(11y + 14) mod 30 < 11`).
//! Conversions go through the fixed day number (Rata Die, 1 January 1 CE
//! Gregorian = day 1), which is also what `chrono` counts with
//! `num_days_from_ce`. The result is deterministic and needs no ephemeris,
//! though it can differ by a day or two from sighting-based calendars.

use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use super::month::HijriMonth;
use crate::types::ZakatError;

/// Fixed day number of 1 Muharram 1 AH (Friday, 16 July 622 Julian).
const HIJRI_EPOCH: i64 = 227_015;

/// A validated date in the tabular Hijri calendar.
///
/// The day never exceeds the length of the month in that year; the only
/// ways in are [`HijriDate::new`] (rejects) and [`HijriDate::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct HijriDate {
    year: i32,
    month: u32,
    day: u32,
}

impl HijriDate {
    /// Last Hijri year accepted anywhere in the crate.
    pub const MAX_YEAR: i32 = 9999;

    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ZakatError> {
        validate_year_month(year, month)?;
        let len = month_length(year, month);
        if day == 0 || day > len {
            return Err(ZakatError::hijri_date(format!(
                "day {} is outside 1..={} for {} {}",
                day,
                len,
                month_label(month),
                year
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date, pulling an over-long day back to the month's last day.
    ///
    /// Year and month are still validated; day 0 is still rejected.
    pub fn clamped(year: i32, month: u32, day: u32) -> Result<Self, ZakatError> {
        validate_year_month(year, month)?;
        if day == 0 {
            return Err(ZakatError::hijri_date("day must be at least 1"));
        }
        Ok(Self {
            year,
            month,
            day: day.min(month_length(year, month)),
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hijri_month(&self) -> HijriMonth {
        // month is validated on construction
        HijriMonth::from_repr(self.month as u8).unwrap_or(HijriMonth::Muharram)
    }

    /// Fixed day number (Rata Die) of this date.
    pub fn day_number(&self) -> i64 {
        fixed_from_hijri(self.year, self.month, self.day)
    }

    /// Inverse of [`HijriDate::day_number`].
    pub fn from_day_number(rd: i64) -> Result<Self, ZakatError> {
        let last = fixed_from_hijri(Self::MAX_YEAR, 12, month_length(Self::MAX_YEAR, 12));
        if !(HIJRI_EPOCH..=last).contains(&rd) {
            return Err(ZakatError::hijri_date(format!(
                "day number {} falls outside Hijri years 1..={}",
                rd,
                Self::MAX_YEAR
            )));
        }
        let year = (30 * (rd - HIJRI_EPOCH) + 10646).div_euclid(10631) as i32;
        let prior_days = rd - fixed_from_hijri(year, 1, 1);
        let month = (11 * prior_days + 330).div_euclid(325) as u32;
        let day = (rd - fixed_from_hijri(year, month, 1) + 1) as u32;
        Ok(Self { year, month, day })
    }

    /// Same month and day `years` later, with the day clamped when the target
    /// month is shorter (30 Dhu al-Hijjah of a leap year lands on the 29th).
    pub fn add_years_clamped(&self, years: i32) -> Result<Self, ZakatError> {
        let year = self
            .year
            .checked_add(years)
            .ok_or_else(|| ZakatError::overflow("hijri year addition"))?;
        Self::clamped(year, self.month, self.day)
    }

    pub fn to_gregorian(&self) -> Result<NaiveDate, ZakatError> {
        naive_from_day_number(self.day_number())
    }
}

impl PartialOrd for HijriDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HijriDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl<'de> Deserialize<'de> for HijriDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: u32,
            day: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        HijriDate::new(raw.year, raw.month, raw.day).map_err(serde::de::Error::custom)
    }
}

/// `1444-10-01`
impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parses either the numeric form (`1444-10-01`) or the long form produced
/// by [`super::format_hijri_date`] (`1 Shawwal 1444 AH`).
impl FromStr for HijriDate {
    type Err = ZakatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || ZakatError::hijri_date(format!("cannot parse '{}'", s));

        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() == 3 && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) {
            let year = parts[0].parse().map_err(|_| bad())?;
            let month = parts[1].parse().map_err(|_| bad())?;
            let day = parts[2].parse().map_err(|_| bad())?;
            return HijriDate::new(year, month, day);
        }

        let body = s.strip_suffix("AH").unwrap_or(s).trim_end();
        let (day, rest) = body.split_once(' ').ok_or_else(bad)?;
        let (month_name, year) = rest.rsplit_once(' ').ok_or_else(bad)?;
        let month: HijriMonth = month_name.trim().parse().map_err(|_| bad())?;
        HijriDate::new(
            year.parse().map_err(|_| bad())?,
            month.number(),
            day.parse().map_err(|_| bad())?,
        )
    }
}

fn validate_year_month(year: i32, month: u32) -> Result<(), ZakatError> {
    if !(1..=HijriDate::MAX_YEAR).contains(&year) {
        return Err(ZakatError::hijri_date(format!(
            "year {} is outside 1..={}",
            year,
            HijriDate::MAX_YEAR
        )));
    }
    if !(1..=12).contains(&month) {
        return Err(ZakatError::hijri_date(format!("month {} is outside 1..=12", month)));
    }
    Ok(())
}

fn month_label(month: u32) -> &'static str {
    HijriMonth::from_number(month).map(HijriMonth::name).unwrap_or("?")
}

fn fixed_from_hijri(year: i32, month: u32, day: u32) -> i64 {
    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    HIJRI_EPOCH - 1 + (y - 1) * 354 + (3 + 11 * y).div_euclid(30) + 29 * (m - 1) + m / 2 + d
}

fn month_length(year: i32, month: u32) -> u32 {
    if month % 2 == 1 || (month == 12 && is_hijri_leap_year(year)) {
        30
    } else {
        29
    }
}

fn naive_from_day_number(rd: i64) -> Result<NaiveDate, ZakatError> {
    i32::try_from(rd)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or_else(|| ZakatError::gregorian_date(format!("day number {} is not representable", rd)))
}

/// Leap years of the 30-year cycle: 2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29.
pub fn is_hijri_leap_year(year: i32) -> bool {
    (11 * i64::from(year) + 14).rem_euclid(30) < 11
}

pub fn days_in_hijri_month(year: i32, month: u32) -> Result<u32, ZakatError> {
    validate_year_month(year, month)?;
    Ok(month_length(year, month))
}

/// 354, or 355 in a leap year.
pub fn days_in_hijri_year(year: i32) -> Result<u32, ZakatError> {
    validate_year_month(year, 1)?;
    Ok(if is_hijri_leap_year(year) { 355 } else { 354 })
}

pub fn hijri_to_gregorian(year: i32, month: u32, day: u32) -> Result<NaiveDate, ZakatError> {
    let date = HijriDate::new(year, month, day)?;
    let gregorian = date.to_gregorian()?;
    trace!(hijri = %date, %gregorian, "hijri -> gregorian");
    Ok(gregorian)
}

pub fn gregorian_to_hijri(date: NaiveDate) -> Result<HijriDate, ZakatError> {
    let hijri = HijriDate::from_day_number(i64::from(date.num_days_from_ce()))?;
    trace!(gregorian = %date, %hijri, "gregorian -> hijri");
    Ok(hijri)
}

/// Like [`gregorian_to_hijri`] but validates raw proleptic Gregorian components.
pub fn gregorian_ymd_to_hijri(year: i32, month: u32, day: u32) -> Result<HijriDate, ZakatError> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ZakatError::gregorian_date(format!("{:04}-{:02}-{:02} does not exist", year, month, day))
    })?;
    gregorian_to_hijri(date)
}

/// Signed number of days from `from` to `to`.
pub fn days_between(from: &HijriDate, to: &HijriDate) -> i64 {
    to.day_number() - from.day_number()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        let first = hijri_to_gregorian(1, 1, 1).unwrap();
        // 16 July 622 Julian is 19 July 622 proleptic Gregorian
        assert_eq!(first, ymd(622, 7, 19));
        assert_eq!(gregorian_to_hijri(first).unwrap(), HijriDate::new(1, 1, 1).unwrap());
    }

    #[test]
    fn test_known_conversions() {
        assert_eq!(hijri_to_gregorian(1444, 9, 1).unwrap(), ymd(2023, 3, 23));
        assert_eq!(hijri_to_gregorian(1445, 9, 1).unwrap(), ymd(2024, 3, 11));
        assert_eq!(hijri_to_gregorian(1444, 10, 1).unwrap(), ymd(2023, 4, 22));
        assert_eq!(hijri_to_gregorian(1445, 1, 1).unwrap(), ymd(2023, 7, 19));
        assert_eq!(
            gregorian_to_hijri(ymd(2025, 1, 1)).unwrap(),
            HijriDate::new(1446, 7, 1).unwrap()
        );
    }

    #[test]
    fn test_leap_cycle() {
        let leaps: Vec<i32> = (1..=30).filter(|y| is_hijri_leap_year(*y)).collect();
        assert_eq!(leaps, vec![2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29]);
        assert!(is_hijri_leap_year(1445));
        assert!(!is_hijri_leap_year(1444));
        assert_eq!(days_in_hijri_year(1445).unwrap(), 355);
        assert_eq!(days_in_hijri_year(1444).unwrap(), 354);
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(days_in_hijri_month(1444, 1).unwrap(), 30);
        assert_eq!(days_in_hijri_month(1444, 2).unwrap(), 29);
        assert_eq!(days_in_hijri_month(1444, 12).unwrap(), 29);
        assert_eq!(days_in_hijri_month(1445, 12).unwrap(), 30);
        assert!(days_in_hijri_month(1445, 13).is_err());
    }

    #[test]
    fn test_invalid_components_rejected() {
        for (y, m, d) in [(0, 1, 1), (-5, 1, 1), (1444, 0, 1), (1444, 13, 1), (1444, 1, 0), (1444, 2, 30)] {
            let err = hijri_to_gregorian(y, m, d).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidDate, "{}-{}-{}", y, m, d);
        }
        assert!(HijriDate::new(HijriDate::MAX_YEAR + 1, 1, 1).is_err());
    }

    #[test]
    fn test_dates_before_epoch_rejected() {
        let err = gregorian_to_hijri(ymd(600, 1, 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
    }

    #[test]
    fn test_gregorian_components_validated() {
        let err = gregorian_ymd_to_hijri(2023, 2, 29).unwrap_err();
        assert!(matches!(
            err,
            ZakatError::InvalidDate { calendar: crate::types::CalendarSystem::Gregorian, .. }
        ));
        assert!(gregorian_ymd_to_hijri(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_clamped_constructor() {
        let d = HijriDate::clamped(1444, 12, 30).unwrap();
        assert_eq!(d.day(), 29);
        let d = HijriDate::clamped(1445, 12, 30).unwrap();
        assert_eq!(d.day(), 30);
        assert!(HijriDate::clamped(1445, 12, 0).is_err());
    }

    #[test]
    fn test_add_years_clamped() {
        let leap_end = HijriDate::new(1445, 12, 30).unwrap();
        assert_eq!(leap_end.add_years_clamped(1).unwrap(), HijriDate::new(1446, 12, 29).unwrap());
        let shawwal = HijriDate::new(1444, 10, 1).unwrap();
        assert_eq!(shawwal.add_years_clamped(1).unwrap(), HijriDate::new(1445, 10, 1).unwrap());
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = HijriDate::new(1444, 12, 29).unwrap();
        let b = HijriDate::new(1445, 1, 1).unwrap();
        assert!(a < b);
        assert_eq!(days_between(&a, &b), 1);
        assert_eq!(days_between(&b, &a), -1);
    }

    #[test]
    fn test_display_and_parse() {
        let d = HijriDate::new(1444, 10, 1).unwrap();
        assert_eq!(d.to_string(), "1444-10-01");
        assert_eq!("1444-10-01".parse::<HijriDate>().unwrap(), d);
        assert_eq!("1 Shawwal 1444 AH".parse::<HijriDate>().unwrap(), d);
        assert_eq!(
            "12 Rabi' al-Awwal 1446 AH".parse::<HijriDate>().unwrap(),
            HijriDate::new(1446, 3, 12).unwrap()
        );
        assert!("1444-02-30".parse::<HijriDate>().is_err());
        assert!("yesterday".parse::<HijriDate>().is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: HijriDate = serde_json::from_str(r#"{"year":1444,"month":10,"day":1}"#).unwrap();
        assert_eq!(ok, HijriDate::new(1444, 10, 1).unwrap());
        assert!(serde_json::from_str::<HijriDate>(r#"{"year":1444,"month":2,"day":30}"#).is_err());
    }
}
