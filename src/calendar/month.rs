use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::types::ZakatError;

/// The twelve months of the Hijri year, numbered from 1.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
#[strum(ascii_case_insensitive)]
pub enum HijriMonth {
    #[strum(serialize = "Muharram")]
    Muharram = 1,
    #[strum(serialize = "Safar")]
    Safar = 2,
    #[strum(serialize = "Rabi' al-Awwal")]
    RabiAlAwwal = 3,
    #[strum(serialize = "Rabi' al-Thani")]
    RabiAlThani = 4,
    #[strum(serialize = "Jumada al-Awwal")]
    JumadaAlAwwal = 5,
    #[strum(serialize = "Jumada al-Thani")]
    JumadaAlThani = 6,
    #[strum(serialize = "Rajab")]
    Rajab = 7,
    #[strum(serialize = "Sha'ban")]
    Shaban = 8,
    #[strum(serialize = "Ramadan")]
    Ramadan = 9,
    #[strum(serialize = "Shawwal")]
    Shawwal = 10,
    #[strum(serialize = "Dhu al-Qi'dah")]
    DhuAlQidah = 11,
    #[strum(serialize = "Dhu al-Hijjah")]
    DhuAlHijjah = 12,
}

impl HijriMonth {
    /// Looks up a month by its 1-based number.
    pub fn from_number(month: u32) -> Result<Self, ZakatError> {
        u8::try_from(month)
            .ok()
            .and_then(HijriMonth::from_repr)
            .ok_or_else(|| ZakatError::OutOfRange {
                field: "month".to_string(),
                value: i64::from(month),
                expected: "1..=12".to_string(),
            })
    }

    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Canonical English transliteration of a Hijri month.
///
/// Fails with `OutOfRange` for anything outside 1..=12.
pub fn hijri_month_name(month: u32) -> Result<&'static str, ZakatError> {
    HijriMonth::from_number(month).map(HijriMonth::name)
}
