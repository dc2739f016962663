use crate::models::Habit;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use tracing::warn;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Timestamp string in the shape the data file uses, e.g. `2024-01-02T10:00:00.000Z`.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a stored timestamp. Values with an offset are taken as-is, naive
/// date-times as local time and bare dates as UTC midnight.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            if let Some(local) = Local.from_local_datetime(&naive).earliest() {
                return Some(local.with_timezone(&Utc));
            }
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Some(midnight.and_utc());
        }
    }

    warn!("invalid date format found: {value:?}");
    None
}

pub fn days_since(value: &str) -> Option<i64> {
    days_since_at(value, Utc::now())
}

/// Whole days between `value` and `now`, truncated from the millisecond gap.
/// A 23 hour gap across midnight is still 0.
pub fn days_since_at(value: &str, now: DateTime<Utc>) -> Option<i64> {
    let then = parse_date(value)?;
    let millis = (now - then).num_milliseconds();
    Some(millis.div_euclid(MILLIS_PER_DAY))
}

pub fn describe(days: Option<i64>, completed: bool) -> String {
    let verb = if completed { "Completed" } else { "Added" };
    match days {
        None => format!("{verb} at an unknown date"),
        Some(0) => format!("{verb} today"),
        Some(1) => format!("{verb} yesterday"),
        Some(days) => format!("{verb} {days} days ago"),
    }
}

/// Row text for a habit; completed habits count from their completion date.
pub fn habit_message(habit: &Habit, now: DateTime<Utc>) -> String {
    let source = if habit.completed {
        &habit.completion_date
    } else {
        &habit.added_date
    };
    describe(days_since_at(source, now), habit.completed)
}
