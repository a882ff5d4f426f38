//! Whole-day range widening and day-count differences.
//!
//! A date range supplied with arbitrary time-of-day components widens to the
//! full span of its boundary dates: everything from the first moment of the
//! `from` date through the last moment of the `to` date. Widening makes an
//! inclusive filter out of a pair of timestamps without the caller having to
//! zero fields by hand.

use chrono::{DateTime, Duration, TimeZone};

use crate::boundary::{end_of_day, start_of_day};

// ── from_to_ignore_time ─────────────────────────────────────────────────────

/// Widens `(from, to)` to whole-day boundaries, discarding the time-of-day
/// components: `(start_of_day(from), end_of_day(to))`.
///
/// Inputs are not reordered and no `from <= to` validation is performed.
/// Each boundary stays in its own input's timezone.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, Utc};
/// use zero_hour::from_to_ignore_time;
///
/// let from: DateTime<Utc> = "2020-01-02T09:24:31Z".parse().unwrap();
/// let to: DateTime<Utc> = "2020-01-04T17:05:00Z".parse().unwrap();
///
/// let (from, to) = from_to_ignore_time(from, to);
/// assert_eq!(from.to_rfc3339(), "2020-01-02T00:00:00+00:00");
/// assert_eq!(to.to_rfc3339(), "2020-01-04T23:59:59.999999999+00:00");
/// ```
pub fn from_to_ignore_time<Tz: TimeZone>(
    from: DateTime<Tz>,
    to: DateTime<Tz>,
) -> (DateTime<Tz>, DateTime<Tz>) {
    (start_of_day(from), end_of_day(to))
}

// ── days_diff_ignore_time ───────────────────────────────────────────────────

/// Number of 24-hour periods spanned by the widened `(from, to)` range, as a
/// duration rounded to the nearest whole hour.
///
/// Two instants on the same calendar day yield exactly one day (24 hours)
/// regardless of their order or time of day; a `to` date N calendar days
/// after `from` yields N+1 days. The hour rounding absorbs the nanosecond by
/// which [`end_of_day`] falls short of the next midnight.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, Duration, Utc};
/// use zero_hour::days_diff_ignore_time;
///
/// let from: DateTime<Utc> = "2020-01-02T09:24:31Z".parse().unwrap();
/// let to: DateTime<Utc> = "2020-01-04T17:05:00Z".parse().unwrap();
/// assert_eq!(days_diff_ignore_time(from, to), Duration::hours(72));
/// ```
pub fn days_diff_ignore_time<Tz: TimeZone>(from: DateTime<Tz>, to: DateTime<Tz>) -> Duration {
    let (from, to) = from_to_ignore_time(from, to);
    round_to_hour(to - from)
}

/// Round a duration to the nearest whole hour, ties away from zero.
fn round_to_hour(d: Duration) -> Duration {
    const NANOS_PER_HOUR: i64 = 3_600 * 1_000_000_000;

    let whole_hours = d.num_seconds() / 3_600;
    let remainder_nanos = (d.num_seconds() % 3_600) * 1_000_000_000 + i64::from(d.subsec_nanos());
    if remainder_nanos.abs() * 2 >= NANOS_PER_HOUR {
        Duration::hours(whole_hours + remainder_nanos.signum())
    } else {
        Duration::hours(whole_hours)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, NaiveTime, Utc};
    use proptest::prelude::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn instant(s: &str) -> DateTime<FixedOffset> {
        s.parse().unwrap()
    }

    // ── from_to_ignore_time tests ───────────────────────────────────────

    #[test]
    fn test_from_to_widens_to_the_enclosing_days() {
        let (from, to) =
            from_to_ignore_time(utc("2020-01-02T09:24:31Z"), utc("2020-01-04T17:05:00Z"));
        assert_eq!(from, utc("2020-01-02T00:00:00Z"));
        assert_eq!(to.to_rfc3339(), "2020-01-04T23:59:59.999999999+00:00");
    }

    #[test]
    fn test_from_to_keeps_each_input_offset() {
        let (from, to) = from_to_ignore_time(
            instant("2020-01-02T09:24:31+05:30"),
            instant("2020-01-04T17:05:00+05:30"),
        );
        assert_eq!(from.to_rfc3339(), "2020-01-02T00:00:00+05:30");
        assert_eq!(to.to_rfc3339(), "2020-01-04T23:59:59.999999999+05:30");
    }

    #[test]
    fn test_from_to_does_not_reorder_a_reversed_pair() {
        let (from, to) =
            from_to_ignore_time(utc("2020-01-04T09:00:00Z"), utc("2020-01-02T09:00:00Z"));
        assert_eq!(from, utc("2020-01-04T00:00:00Z"));
        assert_eq!(to.to_rfc3339(), "2020-01-02T23:59:59.999999999+00:00");
    }

    // ── days_diff_ignore_time tests ─────────────────────────────────────

    #[test]
    fn test_days_diff_of_an_instant_with_itself_is_one_day() {
        let t = utc("2020-01-02T09:24:31Z");
        assert_eq!(days_diff_ignore_time(t, t), Duration::hours(24));
    }

    #[test]
    fn test_days_diff_ignores_sub_second_components() {
        let from = utc("2020-01-02T09:24:31.000000075Z");
        let to = utc("2020-01-02T17:00:00.000000099Z");
        assert_eq!(days_diff_ignore_time(from, to), Duration::hours(24));
    }

    #[test]
    fn test_days_diff_same_day_reversed_is_still_one_day() {
        let from = utc("2020-01-02T17:00:00Z");
        let to = utc("2020-01-02T09:24:31Z");
        assert_eq!(days_diff_ignore_time(from, to), Duration::hours(24));
    }

    #[test]
    fn test_days_diff_counts_both_boundary_days() {
        let from = utc("2020-01-02T23:59:59Z");
        let to = utc("2020-01-03T00:00:01Z");
        assert_eq!(days_diff_ignore_time(from, to), Duration::hours(48));
    }

    #[test]
    fn test_days_diff_across_three_calendar_days() {
        let from = utc("2020-01-02T09:24:31Z");
        let to = utc("2020-01-04T17:05:00Z");
        assert_eq!(days_diff_ignore_time(from, to), Duration::hours(72));
    }

    #[test]
    fn test_days_diff_reversed_across_days_is_negative() {
        let from = utc("2020-01-04T09:00:00Z");
        let to = utc("2020-01-02T09:00:00Z");
        assert_eq!(days_diff_ignore_time(from, to), Duration::hours(-24));
    }

    // ── round_to_hour tests ─────────────────────────────────────────────

    #[test]
    fn test_round_to_hour_absorbs_the_end_of_day_shortfall() {
        let just_shy = Duration::hours(24) - Duration::nanoseconds(1);
        assert_eq!(round_to_hour(just_shy), Duration::hours(24));
    }

    #[test]
    fn test_round_to_hour_rounds_ties_away_from_zero() {
        assert_eq!(round_to_hour(Duration::minutes(90)), Duration::hours(2));
        assert_eq!(round_to_hour(Duration::minutes(-90)), Duration::hours(-2));
    }

    #[test]
    fn test_round_to_hour_rounds_below_half_toward_zero() {
        let d = Duration::hours(5) + Duration::minutes(29);
        assert_eq!(round_to_hour(d), Duration::hours(5));

        let d = Duration::hours(-5) - Duration::minutes(29);
        assert_eq!(round_to_hour(d), Duration::hours(-5));
    }

    #[test]
    fn test_round_to_hour_is_exact_on_whole_hours() {
        assert_eq!(round_to_hour(Duration::hours(48)), Duration::hours(48));
        assert_eq!(round_to_hour(Duration::zero()), Duration::zero());
    }

    // ── Properties ──────────────────────────────────────────────────────

    prop_compose! {
        fn arb_offset()(quarter_hours in -56i32..=56) -> FixedOffset {
            FixedOffset::east_opt(quarter_hours * 900).unwrap()
        }
    }

    prop_compose! {
        fn arb_instant()(
            secs in -2_208_988_800i64..4_102_444_800,
            nanos in 0u32..1_000_000_000,
            offset in arb_offset(),
        ) -> DateTime<FixedOffset> {
            DateTime::from_timestamp(secs, nanos).unwrap().with_timezone(&offset)
        }
    }

    prop_compose! {
        fn arb_same_day_pair()(
            days in -25_567i64..36_525,
            secs_a in 0u32..86_400,
            secs_b in 0u32..86_400,
            offset in arb_offset(),
        ) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
            let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Duration::days(days);
            let at = |secs| {
                let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap();
                offset.from_local_datetime(&date.and_time(time)).unwrap()
            };
            (at(secs_a), at(secs_b))
        }
    }

    proptest! {
        #[test]
        fn test_any_same_day_pair_spans_exactly_one_day((a, b) in arb_same_day_pair()) {
            prop_assert_eq!(days_diff_ignore_time(a, b), Duration::hours(24));
        }

        #[test]
        fn test_days_diff_counts_calendar_days_inclusively(
            t in arb_instant(),
            extra_days in 0i64..400,
        ) {
            let to = t + Duration::days(extra_days);
            prop_assert_eq!(
                days_diff_ignore_time(t, to),
                Duration::hours((extra_days + 1) * 24)
            );
        }

        #[test]
        fn test_the_widened_range_contains_both_inputs_in_order(
            t in arb_instant(),
            u in arb_instant(),
        ) {
            let (from, to) = from_to_ignore_time(t, u);
            prop_assert!(from <= t);
            prop_assert!(u <= to);
        }
    }
}
