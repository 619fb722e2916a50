use super::*;
use chrono::TimeZone;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

fn now() -> DateTime<Utc> {
    at(0)
}

// =============================================================
// distance tiers
// =============================================================

#[test]
fn under_45_seconds_is_less_than_a_minute() {
    assert_eq!(format_relative(at(-30), now()), "less than a minute ago");
}

#[test]
fn one_minute_is_singular() {
    assert_eq!(format_relative(at(-60), now()), "1 minute ago");
}

#[test]
fn minutes_round_to_nearest() {
    assert_eq!(format_relative(at(-5 * 60), now()), "5 minutes ago");
    assert_eq!(format_relative(at(-5 * 60 - 40), now()), "6 minutes ago");
}

#[test]
fn ninety_minutes_becomes_hours() {
    assert_eq!(format_relative(at(-90 * 60), now()), "about 2 hours ago");
}

#[test]
fn hours_under_a_day() {
    assert_eq!(format_relative(at(-5 * 3600), now()), "about 5 hours ago");
}

#[test]
fn days_under_a_month() {
    assert_eq!(format_relative(at(-3 * 86_400), now()), "3 days ago");
}

#[test]
fn months_under_a_year() {
    assert_eq!(
        format_relative(at(-75 * 86_400), now()),
        "about 2 months ago"
    );
}

#[test]
fn years_beyond() {
    assert_eq!(format_relative(at(-800 * 86_400), now()), "2 years ago");
}

// =============================================================
// suffix direction
// =============================================================

#[test]
fn future_instants_use_in_prefix() {
    assert_eq!(format_relative(at(3 * 86_400), now()), "in 3 days");
}

// =============================================================
// absolute hover text
// =============================================================

#[test]
fn absolute_is_utc_and_sortable() {
    let t = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    assert_eq!(absolute(t), "2023-11-14 22:13:20 UTC");
}
