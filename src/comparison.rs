use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One year's figures for the year-over-year chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct YearlyComparisonEntry {
    /// Gregorian year.
    pub year: i32,
    pub hijri_year: i32,
    pub savings: Decimal,
    pub nisab_threshold: Decimal,
    pub zakat_paid: Decimal,
    pub zakat_due: Decimal,
}

impl YearlyComparisonEntry {
    /// Due but not yet paid; overpayment counts as zero.
    pub fn outstanding(&self) -> Decimal {
        (self.zakat_due - self.zakat_paid).max(Decimal::ZERO)
    }

    pub fn was_above_nisab(&self) -> bool {
        self.savings >= self.nisab_threshold
    }
}

/// Orders entries oldest to newest by `(year, hijri_year)`.
///
/// The sort is stable: entries sharing both keys keep their input order.
pub fn chronological(
    entries: impl IntoIterator<Item = YearlyComparisonEntry>,
) -> Vec<YearlyComparisonEntry> {
    let mut sorted: Vec<_> = entries.into_iter().collect();
    sorted.sort_by_key(|e| (e.year, e.hijri_year));
    sorted
}
