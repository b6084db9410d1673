//! Interval alignment for timezone-aware bucketing.
//!
//! Calendar buckets (`d`, `n`, `y`) are computed by the server relative to a UTC+8 day. When
//! a query carries a timezone, the interval gets an hour offset (`1d` → `1d,8h` for UTC) so
//! buckets start at the zone's local midnight.

use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

/// Reference zone offset of the server's calendar buckets, in hours.
pub const SERVER_BUCKET_OFFSET_HOURS: i32 = 8;

/// True when `interval` ends in a calendar unit: day (`d`), month (`n`) or year (`y`).
pub fn needs_offset(interval: &str) -> bool {
    interval.ends_with(['d', 'n', 'y'])
}

/// UTC offset of `tz` at `at`, in seconds. `None` when the zone name is unknown.
pub fn zone_offset_seconds(tz: &str, at: DateTime<Utc>) -> Option<i32> {
    let zone: Tz = tz.parse().ok()?;
    Some(zone.offset_from_utc_datetime(&at.naive_utc()).fix().local_minus_utc())
}

/// `8 - offset_hours`, with the zone offset truncated toward zero.
pub fn bucket_offset_hours(offset_seconds: i32) -> i32 {
    SERVER_BUCKET_OFFSET_HOURS - offset_seconds / 3600
}

/// The interval to send for `tz` at `at`, or `None` to keep it unchanged.
///
/// Only a positive bucket offset is applied. Zones east of UTC+8 yield a negative offset,
/// which leaves the interval as is.
pub fn adjust_interval(interval: &str, tz: &str, at: DateTime<Utc>) -> Option<String> {
    if tz.is_empty() || interval.is_empty() || !needs_offset(interval) {
        return None;
    }

    let Some(offset_seconds) = zone_offset_seconds(tz, at) else {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            target: "tsqb.sql",
            timezone = tz,
            interval,
            "unknown timezone, interval left unadjusted"
        );
        return None;
    };

    let hours = bucket_offset_hours(offset_seconds);
    if hours > 0 {
        return Some(format!("{interval},{hours}h"));
    }

    // TODO: the negative case (zones east of UTC+8) would need `24 + hours`; confirm the
    // server-side semantics before applying it.
    #[cfg(feature = "tracing")]
    {
        if hours < 0 {
            tracing::debug!(
                target: "tsqb.sql",
                timezone = tz,
                interval,
                offset_hours = hours,
                "negative bucket offset, interval left unadjusted"
            );
        }
    }

    None
}
