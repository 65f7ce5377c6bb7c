use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::Serialize;

use super::hijri::{gregorian_to_hijri, HijriDate};
use crate::types::{CalendarSystem, ZakatError};

/// `1 Shawwal 1444 AH`
pub fn format_hijri_date(date: &HijriDate) -> String {
    format!("{} {} {} AH", date.day(), date.hijri_month(), date.year())
}

/// `22 April 2023`
pub fn format_gregorian_date(date: &NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// A date shown in both calendars.
///
/// Built from one side; the other is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DualDate {
    gregorian: NaiveDate,
    hijri: HijriDate,
    gregorian_display: String,
    hijri_display: String,
    source: CalendarSystem,
}

impl DualDate {
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, ZakatError> {
        let hijri = gregorian_to_hijri(date)?;
        Ok(Self::assemble(date, hijri, CalendarSystem::Gregorian))
    }

    pub fn from_hijri(date: HijriDate) -> Result<Self, ZakatError> {
        let gregorian = date.to_gregorian()?;
        Ok(Self::assemble(gregorian, date, CalendarSystem::Hijri))
    }

    fn assemble(gregorian: NaiveDate, hijri: HijriDate, source: CalendarSystem) -> Self {
        Self {
            gregorian,
            hijri,
            gregorian_display: format_gregorian_date(&gregorian),
            hijri_display: format_hijri_date(&hijri),
            source,
        }
    }

    pub fn gregorian(&self) -> NaiveDate {
        self.gregorian
    }

    pub fn hijri(&self) -> HijriDate {
        self.hijri
    }

    pub fn gregorian_display(&self) -> &str {
        &self.gregorian_display
    }

    pub fn hijri_display(&self) -> &str {
        &self.hijri_display
    }

    /// The calendar the caller picked the date in.
    pub fn source(&self) -> CalendarSystem {
        self.source
    }
}
