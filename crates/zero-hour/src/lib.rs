//! # zero-hour
//!
//! Day-boundary arithmetic over timezone-aware instants.
//!
//! zero-hour computes starts and ends of calendar days, widens timestamp
//! pairs into whole-day ranges for inclusive queries, and finds "previous
//! zero hour" (most recent midnight) instants, optionally anchored to UTC or
//! to a named IANA timezone.
//!
//! Every function is a pure computation over `chrono` values. Nothing is
//! cached, nothing is mutated, and the only fallible operation is resolving
//! a timezone name. The two `*_today_*` conveniences sample the system clock
//! once; everything else takes its reference instant as an argument, so
//! callers and tests control time explicitly.
//!
//! ## Modules
//!
//! - [`boundary`]: start/end of day, zero-hour test, timezone-anchored variants
//! - [`range`]: whole-day range widening and day-count differences
//! - [`midnight`]: previous zero hour and previous-weekday lookups
//! - [`error`]: error types

pub mod boundary;
pub mod error;
pub mod midnight;
pub mod range;

pub use boundary::{
    end_of_day, end_of_day_in_timezone, end_of_today_in_timezone, is_zero_hour, start_of_day,
    start_of_day_in_timezone, start_of_today_in_timezone,
};
pub use error::ZeroHourError;
pub use midnight::{previous, previous_specific_day, previous_specific_day_utc, previous_utc};
pub use range::{days_diff_ignore_time, from_to_ignore_time};
