//! Previous zero hour (most recent midnight) lookups.
//!
//! "Previous" is strict here: an instant that is exactly a zero hour maps to
//! the zero hour one calendar day earlier, never to itself. The `*_utc`
//! variants do not relabel the local result; they recompute against UTC
//! midnights, which can land a full calendar day away from the local answer.

use chrono::{DateTime, Datelike, NaiveTime, TimeZone, Utc, Weekday};

use crate::boundary::{is_zero_hour, resolve_wall_time, start_of_day};

// ── previous ────────────────────────────────────────────────────────────────

/// Returns the most recently elapsed zero hour (00:00) relative to `t`, in
/// `t`'s own timezone.
///
/// The result is always strictly earlier than a zero-hour input: `t` is
/// stepped back by one nanosecond before flooring, so an exact midnight maps
/// to the midnight of the previous day rather than to itself.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use zero_hour::previous;
///
/// let t: DateTime<FixedOffset> = "2006-01-02T15:04:05-07:00".parse().unwrap();
/// assert_eq!(previous(t).to_rfc3339(), "2006-01-02T00:00:00-07:00");
///
/// let midnight: DateTime<FixedOffset> = "2006-01-02T00:00:00-07:00".parse().unwrap();
/// assert_eq!(previous(midnight).to_rfc3339(), "2006-01-01T00:00:00-07:00");
/// ```
pub fn previous<Tz: TimeZone>(t: DateTime<Tz>) -> DateTime<Tz> {
    if is_zero_hour(&t) {
        start_of_day(t - chrono::Duration::nanoseconds(1))
    } else {
        start_of_day(t)
    }
}

/// Returns the most recently elapsed UTC zero hour relative to `t`.
///
/// This is not a relabeling of [`previous`]'s result: `t` is converted to
/// UTC first, so the answer is the last UTC midnight as an instant. For a
/// caller at 06:00 in UTC+7 (23:00 UTC the previous day) that is one full
/// calendar day earlier than their local previous midnight. Convert the
/// result back with `with_timezone` if a local representation is needed.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use zero_hour::previous_utc;
///
/// let t: DateTime<FixedOffset> = "2006-01-02T06:00:00+07:00".parse().unwrap();
/// assert_eq!(previous_utc(t).to_rfc3339(), "2006-01-01T00:00:00+00:00");
/// ```
pub fn previous_utc<Tz: TimeZone>(t: DateTime<Tz>) -> DateTime<Utc> {
    previous(t.with_timezone(&Utc))
}

// ── previous_specific_day ───────────────────────────────────────────────────

/// Returns the zero hour of the most recent `target_day` at or before the
/// previous zero hour of `t`, in `t`'s own timezone.
///
/// The search starts from [`previous`]`(t)`, so the lookup never lands on
/// `t`'s own day when `t` is exactly midnight: a midnight-Sunday input asked
/// for Sunday yields the Sunday a week earlier. If the previous zero hour
/// already falls on `target_day` it is returned as is.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, Utc, Weekday};
/// use zero_hour::previous_specific_day;
///
/// let t: DateTime<Utc> = "2018-04-11T23:59:59Z".parse().unwrap();
/// let sunday = previous_specific_day(t, Weekday::Sun);
/// assert_eq!(sunday.to_rfc3339(), "2018-04-08T00:00:00+00:00");
/// ```
pub fn previous_specific_day<Tz: TimeZone>(t: DateTime<Tz>, target_day: Weekday) -> DateTime<Tz> {
    let zero_hour = previous(t);

    // Reduced modulo 7 so a target later in the week wraps to the previous
    // week instead of stepping forward.
    let days_back = (zero_hour.weekday().num_days_from_monday() + 7
        - target_day.num_days_from_monday())
        % 7;
    if days_back == 0 {
        return zero_hour;
    }

    let date = zero_hour.date_naive() - chrono::Duration::days(i64::from(days_back));
    resolve_wall_time(&zero_hour.timezone(), date.and_time(NaiveTime::MIN))
}

/// Returns the UTC zero hour of the most recent `target_day` at or before
/// the previous UTC zero hour of `t`.
///
/// UTC counterpart of [`previous_specific_day`]: the weekday is judged
/// against the UTC calendar, so a local Monday morning can still resolve
/// against a UTC Sunday.
pub fn previous_specific_day_utc<Tz: TimeZone>(
    t: DateTime<Tz>,
    target_day: Weekday,
) -> DateTime<Utc> {
    previous_specific_day(t.with_timezone(&Utc), target_day)
}

// ── Tests ───────────────────────────────────────────────────────────────────
