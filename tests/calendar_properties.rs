use chrono::{Datelike, Duration, NaiveDate};
use zakat_hawl::calendar::{
    days_in_hijri_month, days_in_hijri_year, gregorian_to_hijri, hijri_to_gregorian, is_hijri_leap_year,
    HijriDate,
};
use zakat_hawl::ErrorKind;

#[test]
fn test_gregorian_round_trip_every_day() {
    let mut date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2100, 12, 31).unwrap();
    while date <= end {
        let hijri = gregorian_to_hijri(date).unwrap();
        let back = hijri_to_gregorian(hijri.year(), hijri.month(), hijri.day()).unwrap();
        assert_eq!(back, date, "round trip failed via {}", hijri);
        date += Duration::days(1);
    }
}

#[test]
fn test_hijri_round_trip_every_day_of_sample_years() {
    for year in [1, 2, 29, 30, 622, 1000, 1399, 1444, 1445, 1446, 2000, 9999] {
        for month in 1..=12 {
            for day in 1..=days_in_hijri_month(year, month).unwrap() {
                let hijri = HijriDate::new(year, month, day).unwrap();
                let gregorian = hijri.to_gregorian().unwrap();
                assert_eq!(gregorian_to_hijri(gregorian).unwrap(), hijri);
            }
        }
    }
}

#[test]
fn test_month_length_boundary() {
    for year in 1440..=1470 {
        for month in 1..=12 {
            let last = days_in_hijri_month(year, month).unwrap();
            assert!(hijri_to_gregorian(year, month, last).is_ok());
            let err = hijri_to_gregorian(year, month, last + 1).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidDate, "{}-{}-{}", year, month, last + 1);
        }
    }
}

#[test]
fn test_year_lengths_match_leap_rule() {
    let leaps: Vec<i32> = (1440..=1470).filter(|y| is_hijri_leap_year(*y)).collect();
    assert_eq!(leaps, vec![1442, 1445, 1447, 1450, 1453, 1456, 1458, 1461, 1464, 1466, 1469]);
    for year in 1..=300 {
        let expected = if is_hijri_leap_year(year) { 355 } else { 354 };
        assert_eq!(days_in_hijri_year(year).unwrap(), expected);
    }
}

#[test]
fn test_conversion_is_monotonic() {
    let mut previous = gregorian_to_hijri(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()).unwrap();
    let mut date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    while date.year() < 2030 {
        let current = gregorian_to_hijri(date).unwrap();
        assert!(current > previous, "{} !> {}", current, previous);
        previous = current;
        date += Duration::days(1);
    }
}

#[test]
fn test_known_dates() {
    let cases = [
        ((2023, 3, 23), (1444, 9, 1)),
        ((2023, 4, 22), (1444, 10, 1)),
        ((2023, 7, 19), (1445, 1, 1)),
        ((2024, 3, 11), (1445, 9, 1)),
        ((2024, 4, 10), (1445, 10, 1)),
        ((2025, 1, 1), (1446, 7, 1)),
        ((2025, 3, 31), (1446, 10, 1)),
    ];
    for ((gy, gm, gd), (hy, hm, hd)) in cases {
        let gregorian = NaiveDate::from_ymd_opt(gy, gm, gd).unwrap();
        assert_eq!(gregorian_to_hijri(gregorian).unwrap(), HijriDate::new(hy, hm, hd).unwrap());
    }
}

#[test]
fn test_dates_before_epoch_rejected() {
    let err = gregorian_to_hijri(NaiveDate::from_ymd_opt(600, 1, 1).unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDate);
}
