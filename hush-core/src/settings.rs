use std::env;

use anyhow::Context as _;
use chrono::{DateTime, FixedOffset};

use hush_time::{DEFAULT_MAX_UNITS, DurationFormatter, Locale};
use hush_utils::time::{now_at, offset_from_minutes};

/// Longest timeout the API accepts: 28 days.
pub const DEFAULT_MAX_MUTE_SECS: u64 = 28 * 24 * 60 * 60;

/// Runtime behavior of the moderation commands.
#[derive(Clone, Debug)]
pub struct Settings {
    pub locale: Locale,
    pub max_mute_secs: u64,
    pub format_units: usize,
    /// Offset used to read absolute times such as `25.12 18:00`.
    pub utc_offset: FixedOffset,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            max_mute_secs: DEFAULT_MAX_MUTE_SECS,
            format_units: DEFAULT_MAX_UNITS,
            utc_offset: offset_from_minutes(0),
        }
    }
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup. Unparseable numbers keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let locale = match lookup("HUSH_LOCALE").filter(|value| !value.trim().is_empty()) {
            Some(raw) => raw.parse::<Locale>().context("invalid HUSH_LOCALE")?,
            None => defaults.locale,
        };

        let max_mute_secs = lookup_parsed(&lookup, "HUSH_MAX_MUTE_SECONDS")
            .filter(|secs: &u64| *secs > 0)
            .unwrap_or(defaults.max_mute_secs);
        let format_units = lookup_parsed(&lookup, "HUSH_FORMAT_UNITS")
            .filter(|units: &usize| *units > 0)
            .unwrap_or(defaults.format_units);
        let utc_offset = lookup_parsed(&lookup, "HUSH_UTC_OFFSET_MINUTES")
            .map(offset_from_minutes)
            .unwrap_or(defaults.utc_offset);

        Ok(Self {
            locale,
            max_mute_secs,
            format_units,
            utc_offset,
        })
    }

    pub fn max_mute_ms(&self) -> i64 {
        i64::try_from(self.max_mute_secs.saturating_mul(1_000)).unwrap_or(i64::MAX)
    }

    pub fn formatter(&self) -> DurationFormatter {
        DurationFormatter::new(self.locale, self.format_units)
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        now_at(self.utc_offset)
    }
}

fn lookup_parsed<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    lookup(key).and_then(|value| value.trim().parse::<T>().ok())
}
