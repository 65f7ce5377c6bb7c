//! Compares the tabular conversion against ICU4X's Islamic civil calendar.

use chrono::{Datelike, Duration, NaiveDate};
use icu_calendar::{islamic::IslamicCivil, Date};
use zakat_hawl::calendar::gregorian_to_hijri;

fn icu_hijri(date: NaiveDate) -> (i32, u32, u32) {
    let iso = Date::try_new_iso_date(date.year(), date.month() as u8, date.day() as u8).unwrap();
    let hijri = iso.to_calendar(IslamicCivil::new());
    (hijri.year().number, hijri.month().ordinal, hijri.day_of_month().0)
}

#[test]
fn test_matches_icu_islamic_civil() {
    let mut date = NaiveDate::from_ymd_opt(1800, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2200, 12, 31).unwrap();
    while date <= end {
        let ours = gregorian_to_hijri(date).unwrap();
        assert_eq!(
            (ours.year(), ours.month(), ours.day()),
            icu_hijri(date),
            "mismatch on {}",
            date
        );
        date += Duration::days(3);
    }
}

#[test]
fn test_matches_icu_every_day_around_recent_ramadans() {
    let mut date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
    while date <= end {
        let ours = gregorian_to_hijri(date).unwrap();
        assert_eq!((ours.year(), ours.month(), ours.day()), icu_hijri(date), "mismatch on {}", date);
        date += Duration::days(1);
    }
}
