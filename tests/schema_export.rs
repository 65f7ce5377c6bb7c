use schemars::schema_for;
use zakat_hawl::prelude::*;

#[test]
fn test_result_schema_lists_fields() {
    let schema = schema_for!(ZakatEligibilityResult);
    let json = serde_json::to_string(&schema).unwrap();
    for field in [
        "annual_savings",
        "nisab_threshold",
        "is_obligatory",
        "zakat_amount_due",
        "next_zakat_date_hijri",
        "next_zakat_date_gregorian",
        "days_until_zakat_date",
        "calculation_trace",
    ] {
        assert!(json.contains(field), "schema is missing {}", field);
    }
}

#[test]
fn test_calendar_and_hawl_schemas() {
    let dual = serde_json::to_string(&schema_for!(DualDate)).unwrap();
    assert!(dual.contains("hijri_display"));

    let status = serde_json::to_string(&schema_for!(HawlStatus)).unwrap();
    assert!(status.contains("noAnchor"));
    assert!(status.contains("due_date"));

    let snapshot = serde_json::to_string(&schema_for!(NisabSnapshot)).unwrap();
    assert!(snapshot.contains("silver_based_threshold"));
}
