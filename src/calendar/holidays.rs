use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::hijri::HijriDate;
use super::month::HijriMonth;

/// Islamic observances recognised by [`is_islamic_holiday`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, strum::Display, strum::EnumIter)]
pub enum IslamicHoliday {
    #[strum(serialize = "Islamic New Year")]
    IslamicNewYear,
    #[strum(serialize = "Ashura")]
    Ashura,
    #[strum(serialize = "Mawlid al-Nabi")]
    Mawlid,
    #[strum(serialize = "Isra' and Mi'raj")]
    IsraMiraj,
    #[strum(serialize = "Mid-Sha'ban")]
    MidShaban,
    #[strum(serialize = "Start of Ramadan")]
    RamadanStart,
    #[strum(serialize = "Laylat al-Qadr")]
    LaylatAlQadr,
    #[strum(serialize = "Eid al-Fitr")]
    EidAlFitr,
    #[strum(serialize = "Day of Arafah")]
    DayOfArafah,
    #[strum(serialize = "Eid al-Adha")]
    EidAlAdha,
}

const HOLIDAYS: &[(HijriMonth, u32, IslamicHoliday)] = &[
    (HijriMonth::Muharram, 1, IslamicHoliday::IslamicNewYear),
    (HijriMonth::Muharram, 10, IslamicHoliday::Ashura),
    (HijriMonth::RabiAlAwwal, 12, IslamicHoliday::Mawlid),
    (HijriMonth::Rajab, 27, IslamicHoliday::IsraMiraj),
    (HijriMonth::Shaban, 15, IslamicHoliday::MidShaban),
    (HijriMonth::Ramadan, 1, IslamicHoliday::RamadanStart),
    (HijriMonth::Ramadan, 27, IslamicHoliday::LaylatAlQadr),
    (HijriMonth::Shawwal, 1, IslamicHoliday::EidAlFitr),
    (HijriMonth::DhuAlHijjah, 9, IslamicHoliday::DayOfArafah),
    (HijriMonth::DhuAlHijjah, 10, IslamicHoliday::EidAlAdha),
];

impl IslamicHoliday {
    /// Month and day on which the observance falls every year.
    pub fn date_in(self, year: i32) -> Option<HijriDate> {
        HOLIDAYS
            .iter()
            .find(|(_, _, h)| *h == self)
            .and_then(|(month, day, _)| HijriDate::new(year, month.number(), *day).ok())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HolidayStatus {
    pub is_holiday: bool,
    pub holiday: Option<IslamicHoliday>,
}

impl HolidayStatus {
    pub fn name(&self) -> Option<String> {
        self.holiday.map(|h| h.to_string())
    }
}

pub fn is_islamic_holiday(date: &HijriDate) -> HolidayStatus {
    let holiday = HOLIDAYS
        .iter()
        .find(|(month, day, _)| month.number() == date.month() && *day == date.day())
        .map(|(_, _, h)| *h);
    HolidayStatus {
        is_holiday: holiday.is_some(),
        holiday,
    }
}
