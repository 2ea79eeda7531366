//! Day/night and moon-phase display for Glance
//!
//! The day/night decision is a fixed local-hour heuristic, and the moon
//! phase is an offset from a reference new moon modulo the mean lunar
//! cycle. Both are deterministic approximations for decorative display,
//! not ephemeris-accurate astronomy.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

/// Marker shown during daytime hours.
pub const SUN_MARKER: &str = "☀ sun";

/// Moon phase symbols, index 0 = new moon.
pub const MOON_PHASES: [&str; 8] = [
    "○ new moon",
    "◑ waxing crescent",
    "◑ first quarter",
    "◑ waxing gibbous",
    "● full moon",
    "◐ waning gibbous",
    "◐ last quarter",
    "◐ waning crescent",
];

/// Reference new moon: 2025-10-21 19:54 Melbourne local (AEDT),
/// i.e. 2025-10-21T08:54:00Z, as epoch milliseconds.
const REFERENCE_NEW_MOON_MS: i64 = 1_761_036_840_000;

/// Mean lunar cycle length (29.53 days) in milliseconds.
const LUNAR_CYCLE_MS: i64 = 2_551_392_000;

/// The reference new-moon instant.
pub fn reference_new_moon() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(REFERENCE_NEW_MOON_MS).unwrap_or_default()
}

/// True iff the local hour in `tz` is in `[6, 18)`.
pub fn is_daytime(tz: Tz, instant: DateTime<Utc>) -> bool {
    let hour = instant.with_timezone(&tz).hour();
    (6..18).contains(&hour)
}

/// Position in the lunar cycle, in `[0, 1)`.
///
/// Instants before the reference new moon are normalized with the
/// Euclidean remainder, so the phase sequence extends backwards in time
/// rather than producing a negative position.
fn cycle_position(instant: DateTime<Utc>) -> f64 {
    let delta_ms = instant.timestamp_millis() - REFERENCE_NEW_MOON_MS;
    delta_ms.rem_euclid(LUNAR_CYCLE_MS) as f64 / LUNAR_CYCLE_MS as f64
}

/// Moon phase index for an instant, 0 (new moon) through 7.
pub fn moon_phase_index(instant: DateTime<Utc>) -> usize {
    ((cycle_position(instant) * 8.0).round() as usize) % 8
}

/// Moon phase symbol for an instant.
pub fn moon_phase_symbol(instant: DateTime<Utc>) -> &'static str {
    MOON_PHASES[moon_phase_index(instant)]
}

/// Symbol for the sky at an instant: the sun marker during daytime hours,
/// the moon phase otherwise.
pub fn sky_symbol(tz: Tz, instant: DateTime<Utc>) -> &'static str {
    if is_daytime(tz, instant) {
        SUN_MARKER
    } else {
        moon_phase_symbol(instant)
    }
}
