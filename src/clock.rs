//! Status-bar clock formatting.
//!
//! Matches the original prototype's locale strings: "3:24 PM" for the
//! time and "Monday, June 5" for the date. Pure functions over a naive
//! timestamp so they test without a wall clock; the effects layer feeds
//! in `Local::now().naive_local()` and refreshes once a minute.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// "3:24 PM": 12-hour clock, no leading zero on the hour.
pub fn format_time(now: NaiveDateTime) -> String {
    let (is_pm, hour) = now.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, now.minute(), meridiem)
}

/// "Monday, June 5": full weekday and month, unpadded day.
pub fn format_date(now: NaiveDateTime) -> String {
    format!(
        "{}, {} {}",
        weekday_name(now),
        month_name(now),
        now.day()
    )
}

fn weekday_name(now: NaiveDateTime) -> &'static str {
    match now.weekday() {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
}

fn month_name(now: NaiveDateTime) -> &'static str {
    match now.month() {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

// ============================================================================
// TESTS
// ============================================================================
