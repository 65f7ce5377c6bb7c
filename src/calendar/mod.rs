//! Hijri calendar: conversion to and from Gregorian dates, month metadata,
//! observances and dual-calendar display values.

pub mod dual;
pub mod hijri;
pub mod holidays;
pub mod month;

pub use dual::{format_gregorian_date, format_hijri_date, DualDate};
pub use hijri::{
    days_between, days_in_hijri_month, days_in_hijri_year, gregorian_to_hijri, gregorian_ymd_to_hijri,
    hijri_to_gregorian, is_hijri_leap_year, HijriDate,
};
pub use holidays::{is_islamic_holiday, HolidayStatus, IslamicHoliday};
pub use month::{hijri_month_name, HijriMonth};
