//! Duration parsing and formatting for the moderation commands.
//!
//! Free text such as `1h30m`, `1.5h`, `2 недели`, `25.12 18:00` or
//! `25.12 в 18:00` resolves to milliseconds from a caller-supplied `now`, and
//! millisecond durations render back as `1 час 30 минут` / `1 hour 30 minutes`.
//! Nothing here reads the clock or does I/O.

use std::sync::LazyLock;

use chrono::{DateTime, TimeZone};

/// Duration breakdown and rendering.
pub mod format;
/// Supported languages and their word tables.
pub mod locale;
/// Relative and absolute duration grammars.
pub mod parser;
/// Grammatical number selection.
pub mod plural;
/// Unit suffixes and millisecond constants.
pub mod units;

pub use format::{
    DEFAULT_MAX_UNITS, DurationBreakdown, DurationFormatter, TimeUnit, breakdown, format_duration,
};
pub use locale::Locale;
pub use parser::{AbsoluteTime, DurationParser, DurationToken, duration_tokens};
pub use plural::{PluralForms, PluralRule, pluralize};
pub use units::UnitTable;

static DEFAULT_PARSER: LazyLock<DurationParser> = LazyLock::new(DurationParser::default);

/// Parse a relative duration with the standard units and every locale's separators.
pub fn parse_relative(text: &str) -> Option<i64> {
    DEFAULT_PARSER.parse_relative(text)
}

/// Match `text` against the absolute date/time grammar of every locale.
pub fn parse_absolute(text: &str) -> Option<AbsoluteTime> {
    DEFAULT_PARSER.parse_absolute(text)
}

/// Resolve `text` to milliseconds from `now` with the default parser.
pub fn resolve_duration<Tz: TimeZone>(text: &str, now: &DateTime<Tz>) -> Option<i64> {
    DEFAULT_PARSER.resolve_duration(text, now)
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;

    #[test]
    fn resolves_through_default_parser() {
        let now = Local
            .with_ymd_and_hms(2024, 3, 10, 9, 0, 0)
            .earliest()
            .expect("valid local now");

        assert_eq!(resolve_duration("1h", &now), Some(3_600_000));
        assert_eq!(resolve_duration("", &now), None);
        assert_eq!(parse_relative("1d 12h"), Some(129_600_000));
        assert!(parse_absolute("25.12 в 18:00").is_some());
    }

    #[test]
    fn parsed_duration_formats_back() {
        let ms = parse_relative("1ч 30м").unwrap_or_default();
        assert_eq!(format_duration(ms, DEFAULT_MAX_UNITS, Locale::Russian), "1 час 30 минут");
    }
}
