//! Human-readable relative durations for timestamp cells.
//!
//! Wording follows the usual "formatDistanceToNow with suffix" tiers:
//! "less than a minute ago", "3 minutes ago", "about 2 hours ago",
//! "5 days ago", "about 3 months ago", "2 years ago". Future instants
//! render as "in ...".

#[cfg(test)]
#[path = "relative_time_test.rs"]
mod relative_time_test;

use chrono::{DateTime, Utc};

/// Format `then` relative to the current instant.
pub fn from_now(then: DateTime<Utc>) -> String {
    format_relative(then, Utc::now())
}

/// Format `then` relative to an explicit `now`.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let future = delta.num_seconds() < 0;
    let distance = distance_words(delta.num_seconds().unsigned_abs());
    if future {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

/// Absolute form used as hover text next to the relative one.
pub fn absolute(then: DateTime<Utc>) -> String {
    then.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn distance_words(secs: u64) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;
    const MONTH: u64 = 30 * DAY;
    const YEAR: u64 = 365 * DAY;

    if secs < 45 {
        return "less than a minute".to_owned();
    }
    if secs < 90 * MINUTE {
        // 45s..90m reads as minutes, rounded.
        let minutes = (secs + MINUTE / 2) / MINUTE;
        return plural(minutes.max(1), "minute");
    }
    if secs < DAY {
        let hours = (secs + HOUR / 2) / HOUR;
        return format!("about {}", plural(hours, "hour"));
    }
    if secs < MONTH {
        let days = secs / DAY;
        return plural(days, "day");
    }
    if secs < YEAR {
        let months = secs / MONTH;
        return format!("about {}", plural(months, "month"));
    }
    plural(secs / YEAR, "year")
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
