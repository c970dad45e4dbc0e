//! Relative time formatting across the public API
//!
//! Reference pairs are (event, reference) in epoch ms; the date comments are
//! Pacific time (PDT, -0700).

use chrono::{Duration, TimeZone, Utc};
use quakewatch_core::application::RelativeTimeFormatter;
use quakewatch_core::domain::{format_relative, parse_date};
use quakewatch_core::port::FixedTimeProvider;
use std::sync::Arc;

const REFERENCE: i64 = 1494005400000; // 5/5/2017, 10:30:00 AM

#[test]
fn test_just_now() {
    // 5/5/2017, 10:29:30 AM
    assert_eq!(format_relative(1494005370000, REFERENCE), "Just Now");
}

#[test]
fn test_minutes() {
    // 5/5/2017, 10:29:00 AM
    assert_eq!(format_relative(1494005340000, REFERENCE), "1 minute ago");
    // 5/4/2017, 10:20:00 PM -> 10:30:00 PM
    assert_eq!(format_relative(1493961600000, 1493962200000), "10 minutes ago");
}

#[test]
fn test_hours() {
    // 5/5/2017, 9:30:00 AM
    assert_eq!(format_relative(1494001800000, REFERENCE), "1 hour ago");
    // 5/5/2017, 1:30:00 AM
    assert_eq!(format_relative(1493973000000, REFERENCE), "9 hours ago");
}

#[test]
fn test_days() {
    // 5/4/2017, 10:30:00 AM
    assert_eq!(format_relative(1493919000000, REFERENCE), "1 day ago");
    // 4/24/2017, 10:30:00 AM
    assert_eq!(format_relative(1493055000000, REFERENCE), "11 days ago");
}

#[test]
fn test_months() {
    // 4/5/2017, 10:30:00 AM
    assert_eq!(format_relative(1491413400000, REFERENCE), "1 month ago");
    // 8/4/2016, 10:30:00 AM
    assert_eq!(format_relative(1470331800000, REFERENCE), "9 months ago");
}

#[test]
fn test_years() {
    // 5/5/2016, 10:30:00 AM
    assert_eq!(format_relative(1462469400000, REFERENCE), "1 year ago");
    // 8/1/2006, 10:30:00 AM
    assert_eq!(format_relative(1154453400000, REFERENCE), "10 years ago");
}

#[test]
fn test_months_are_thirty_day_buckets() {
    // February is not special: 30 days is always one month
    let reference = Utc.with_ymd_and_hms(2017, 3, 1, 0, 0, 0).unwrap();
    let event = reference - Duration::days(30);
    assert_eq!(
        format_relative(event.timestamp_millis(), reference.timestamp_millis()),
        "1 month ago"
    );

    // 28 days back lands on Feb 1st, a calendar month, but is still days
    let event = reference - Duration::days(28);
    assert_eq!(
        format_relative(event.timestamp_millis(), reference.timestamp_millis()),
        "28 days ago"
    );
}

#[test]
fn test_parse_and_format_with_fixed_clock() {
    let formatter = RelativeTimeFormatter::new(Arc::new(FixedTimeProvider(REFERENCE)));

    let cases = [
        ("2017-05-05 10:29:30 -0700", "Just Now"),
        ("2017-05-05 17:29:00 +0000", "1 minute ago"),
        ("2016-08-09 10:30:00 -0700", "8 months ago"),
        ("2006-08-01 10:30:00 -0700", "10 years ago"),
    ];

    for (input, expected) in cases {
        assert_eq!(formatter.format_date_str(input).unwrap(), expected, "{}", input);
    }
}

#[test]
fn test_parse_rejects_feed_format_without_offset() {
    let err = parse_date("2011-03-11 04:46:23").unwrap_err();
    assert_eq!(err.input, "2011-03-11 04:46:23");
}
