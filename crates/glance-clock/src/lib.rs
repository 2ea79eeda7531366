//! Wall-clock formatting for Glance
//!
//! Produces localized 12-hour `H:MM:SS am/pm` strings for a configured
//! IANA timezone. Formatting is a pure function of the instant, so the
//! clock widget can be re-invoked every second without accumulating state.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// How a locale writes the meridiem indicator.
///
/// All supported locales use a 12-hour clock here; they differ only in the
/// case of the am/pm marker. `en-AU`-family locales write lowercase
/// (`2:05:09 pm`), `en-US`-family uppercase (`2:05:09 PM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MeridiemStyle {
    Lower,
    Upper,
}

/// Locales whose conventional 12-hour format uses an uppercase meridiem.
const UPPERCASE_MERIDIEM_LOCALES: &[&str] = &["en-US", "en-CA", "en-PH"];

fn meridiem_style(locale: &str) -> MeridiemStyle {
    if UPPERCASE_MERIDIEM_LOCALES
        .iter()
        .any(|l| l.eq_ignore_ascii_case(locale))
    {
        MeridiemStyle::Upper
    } else {
        // Unknown locales fall back to the en-AU default style.
        MeridiemStyle::Lower
    }
}

/// Format an instant as localized 12-hour wall-clock time in a timezone.
///
/// # Example
///
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::Tz;
///
/// let tz: Tz = "Australia/Sydney".parse().unwrap();
/// let instant = chrono::Utc.with_ymd_and_hms(2025, 6, 10, 4, 5, 9).unwrap();
/// assert_eq!(glance_clock::format_time(instant, tz, "en-AU"), "2:05:09 pm");
/// ```
pub fn format_time(instant: DateTime<Utc>, tz: Tz, locale: &str) -> String {
    let local = instant.with_timezone(&tz);
    let pattern = match meridiem_style(locale) {
        MeridiemStyle::Lower => "%-I:%M:%S %P",
        MeridiemStyle::Upper => "%-I:%M:%S %p",
    };
    local.format(pattern).to_string()
}

/// Format the current wall-clock time in a timezone.
pub fn current_time(tz: Tz, locale: &str) -> String {
    format_time(Utc::now(), tz, locale)
}
