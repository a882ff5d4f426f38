//! Day-boundary computation: start of day, end of day, and timezone-anchored
//! variants.
//!
//! [`start_of_day`] and [`end_of_day`] stay in the timezone of their input.
//! The `*_in_timezone` functions resolve an IANA timezone name, compute the
//! boundary on the calendar date active in that zone, and hand back a UTC
//! instant so results from different zones compare directly.
//!
//! # DST Transitions
//!
//! A constructed wall-clock time can be ambiguous (clocks fell back across
//! it) or nonexistent (clocks jumped over it) in zones that shift exactly at
//! a day boundary. Ambiguous times resolve to the earlier of the two
//! instants; nonexistent times resolve to the first valid wall time after
//! the gap, which is what a wall clock in that zone actually shows.
//!
//! # Wall-Clock Anchoring
//!
//! The `*_today_*` functions sample `chrono::Utc::now()` exactly once and
//! delegate to their instant-taking counterparts. Callers that need
//! deterministic results (tests included) use the instant-taking forms and
//! supply the anchor themselves.

use chrono::{DateTime, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::ZeroHourError;

// ── Same-zone boundaries ────────────────────────────────────────────────────

/// Returns the very first moment (00:00:00.000000000) of the calendar day
/// containing `t`, in the same timezone as `t`.
///
/// Total function: every instant has a start of day, and applying it twice
/// yields the same result as applying it once.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use zero_hour::start_of_day;
///
/// let t: DateTime<FixedOffset> = "2026-03-15T14:30:59.250-07:00".parse().unwrap();
/// assert_eq!(start_of_day(t).to_rfc3339(), "2026-03-15T00:00:00-07:00");
/// ```
pub fn start_of_day<Tz: TimeZone>(t: DateTime<Tz>) -> DateTime<Tz> {
    resolve_wall_time(&t.timezone(), t.date_naive().and_time(NaiveTime::MIN))
}

/// Returns the very last representable moment (23:59:59.999999999) of the
/// calendar day containing `t`, in the same timezone as `t`.
///
/// Together with [`start_of_day`] this brackets every instant of the day:
/// `start_of_day(t) <= t <= end_of_day(t)` whatever the sub-second component
/// of `t`.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use zero_hour::end_of_day;
///
/// let t: DateTime<FixedOffset> = "2026-03-15T14:30:59.999999999-07:00".parse().unwrap();
/// let end = end_of_day(t);
/// assert_eq!(end.to_rfc3339(), "2026-03-15T23:59:59.999999999-07:00");
/// assert!(t <= end);
/// ```
pub fn end_of_day<Tz: TimeZone>(t: DateTime<Tz>) -> DateTime<Tz> {
    resolve_wall_time(&t.timezone(), t.date_naive().and_time(last_wall_time()))
}

/// Whether `t` is exactly a zero hour: midnight with a zero sub-second
/// component, in its own timezone.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, Utc};
/// use zero_hour::is_zero_hour;
///
/// let midnight: DateTime<Utc> = "2026-05-04T00:00:00Z".parse().unwrap();
/// let just_past: DateTime<Utc> = "2026-05-04T00:00:00.000000001Z".parse().unwrap();
/// assert!(is_zero_hour(&midnight));
/// assert!(!is_zero_hour(&just_past));
/// ```
pub fn is_zero_hour<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    t.time() == NaiveTime::MIN
}

// ── Timezone-anchored boundaries ────────────────────────────────────────────

/// Computes the start of the day that `t` falls on in the timezone named by
/// `timezone`, returned as a UTC instant.
///
/// The calendar date is the one active in the target zone, not the one in
/// `t`'s own zone: 03:30 UTC on April 27 is already April 27 in Tokyo, so
/// the result is Tokyo's April 27 midnight, nine hours before the UTC one.
///
/// # Arguments
///
/// * `t`: the reference instant, in any timezone
/// * `timezone`: an IANA timezone name (e.g., `"Asia/Tokyo"`)
///
/// # Errors
///
/// Returns [`ZeroHourError::InvalidTimezone`] if `timezone` is not a valid
/// IANA timezone name.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, Utc};
/// use zero_hour::start_of_day_in_timezone;
///
/// let t: DateTime<Utc> = "2023-04-27T03:30:00Z".parse().unwrap();
/// let start = start_of_day_in_timezone(t, "Asia/Tokyo").unwrap();
/// assert_eq!(start, "2023-04-26T15:00:00Z".parse::<DateTime<Utc>>().unwrap());
/// ```
pub fn start_of_day_in_timezone<Tz: TimeZone>(
    t: DateTime<Tz>,
    timezone: &str,
) -> Result<DateTime<Utc>, ZeroHourError> {
    let tz = parse_timezone(timezone)?;
    Ok(start_of_day(t.with_timezone(&tz)).with_timezone(&Utc))
}

/// Computes the end of the day that `t` falls on in the timezone named by
/// `timezone`, returned as a UTC instant.
///
/// Counterpart of [`start_of_day_in_timezone`]: the same date selection
/// applies, and the boundary is the zone's 23:59:59.999999999.
///
/// # Errors
///
/// Returns [`ZeroHourError::InvalidTimezone`] if `timezone` is not a valid
/// IANA timezone name.
pub fn end_of_day_in_timezone<Tz: TimeZone>(
    t: DateTime<Tz>,
    timezone: &str,
) -> Result<DateTime<Utc>, ZeroHourError> {
    let tz = parse_timezone(timezone)?;
    Ok(end_of_day(t.with_timezone(&tz)).with_timezone(&Utc))
}

/// Computes the start, as a UTC instant, of the day currently underway in
/// the timezone named by `timezone`.
///
/// The current wall-clock time is sampled once; this is shorthand for
/// `start_of_day_in_timezone(Utc::now(), timezone)`.
///
/// # Errors
///
/// Returns [`ZeroHourError::InvalidTimezone`] if `timezone` is not a valid
/// IANA timezone name.
///
/// # Examples
///
/// ```no_run
/// let start = zero_hour::start_of_today_in_timezone("Australia/Melbourne").unwrap();
/// println!("the Melbourne day began at {start}");
/// ```
pub fn start_of_today_in_timezone(timezone: &str) -> Result<DateTime<Utc>, ZeroHourError> {
    start_of_day_in_timezone(Utc::now(), timezone)
}

/// Computes the end, as a UTC instant, of the day currently underway in the
/// timezone named by `timezone`.
///
/// Counterpart of [`start_of_today_in_timezone`]; the current wall-clock
/// time is sampled once.
///
/// # Errors
///
/// Returns [`ZeroHourError::InvalidTimezone`] if `timezone` is not a valid
/// IANA timezone name.
pub fn end_of_today_in_timezone(timezone: &str) -> Result<DateTime<Utc>, ZeroHourError> {
    end_of_day_in_timezone(Utc::now(), timezone)
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Parse an IANA timezone string into a [`chrono_tz::Tz`].
fn parse_timezone(s: &str) -> Result<chrono_tz::Tz, ZeroHourError> {
    s.parse::<chrono_tz::Tz>()
        .map_err(|_| ZeroHourError::InvalidTimezone(format!("'{}'", s)))
}

/// Wall-clock time of the last representable nanosecond of a day.
fn last_wall_time() -> NaiveTime {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
        .expect("23:59:59.999999999 is a valid wall-clock time")
}

/// Resolve a wall-clock time in `tz` to an instant, coping with DST shifts
/// that land exactly on a computed boundary.
///
/// Ambiguous wall times resolve to the earlier of the two instants. Wall
/// times inside a spring-forward gap resolve to the first valid wall time
/// after the gap (a zone that springs forward at midnight starts its day at
/// 01:00).
pub(crate) fn resolve_wall_time<Tz: TimeZone>(tz: &Tz, mut wall: NaiveDateTime) -> DateTime<Tz> {
    // Probe in half-hour steps, the smallest DST shift in the IANA database.
    for _ in 0..96 {
        match tz.from_local_datetime(&wall) {
            LocalResult::Single(t) => return t,
            LocalResult::Ambiguous(earliest, _) => return earliest,
            LocalResult::None => wall = wall + chrono::Duration::minutes(30),
        }
    }
    // No recorded gap is anywhere near 48 hours wide.
    tz.from_utc_datetime(&wall)
}

// ── Tests ───────────────────────────────────────────────────────────────────
