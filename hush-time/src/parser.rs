use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeDelta, TimeZone};
use regex::Regex;
use tracing::trace;

use crate::locale::Locale;
use crate::units::UnitTable;

static RELATIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((?:[0-9]+\.)?[0-9]+) ?([^0-9\s.]+)").expect("relative duration pattern is valid")
});

/// One `<number><unit>` pair found in free text, e.g. `1.5h` or `10 минут`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DurationToken<'a> {
    pub amount: f64,
    pub unit_text: &'a str,
}

/// Every `<number><unit>` pair in `text`, including ones with unknown units.
pub fn duration_tokens(text: &str) -> impl Iterator<Item = DurationToken<'_>> {
    RELATIVE_PATTERN.captures_iter(text).filter_map(|caps| {
        let amount = caps.get(1)?.as_str().parse::<f64>().ok()?;
        let unit_text = caps.get(2)?.as_str();
        Some(DurationToken { amount, unit_text })
    })
}

/// Fields captured from `day.month[.year] [sep] hour:minute[:second]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AbsoluteTime {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
}

impl AbsoluteTime {
    /// Place the fields on `now`'s calendar.
    ///
    /// Missing (or zero) date fields come from `now`; a missing time means
    /// midnight. Out-of-range fields roll over into the next unit, so `31.06`
    /// is July 1 and `24:00` is midnight tomorrow. Returns `None` only for
    /// local times skipped by a DST transition or years chrono cannot hold.
    pub fn resolve<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let year = self.year.filter(|year| *year != 0).unwrap_or_else(|| now.year());
        let month = self.month.filter(|month| *month != 0).unwrap_or_else(|| now.month());
        let day = self.day.filter(|day| *day != 0).unwrap_or_else(|| now.day());

        let (hour, minute, second) = match self.hour {
            Some(hour) => (hour, self.minute.unwrap_or(0), self.second.unwrap_or(0)),
            None => (0, 0, 0),
        };

        let date = NaiveDate::from_ymd_opt(year, 1, 1)?
            .checked_add_months(Months::new(month - 1))?
            .checked_add_days(Days::new(u64::from(day - 1)))?;
        let offset = TimeDelta::seconds(
            i64::from(hour) * 3_600 + i64::from(minute) * 60 + i64::from(second),
        );
        let local = date.and_hms_opt(0, 0, 0)?.checked_add_signed(offset)?;

        now.timezone().from_local_datetime(&local).earliest()
    }
}

/// Duration grammar: relative durations first, then absolute date/time.
#[derive(Clone, Debug)]
pub struct DurationParser {
    units: UnitTable,
    absolute: Regex,
}

impl DurationParser {
    pub fn new(units: UnitTable, locales: &[Locale]) -> Self {
        Self {
            units,
            absolute: absolute_pattern(locales),
        }
    }

    /// Standard units, date separators of the given locales only.
    pub fn for_locales(locales: &[Locale]) -> Self {
        Self::new(UnitTable::standard().clone(), locales)
    }

    /// Sum of every recognised `<number><unit>` pair in `text`, in milliseconds.
    ///
    /// Tokens with unknown units are skipped. A total of zero is reported as
    /// `None`, so `0h` is indistinguishable from text with no durations at all.
    pub fn parse_relative(&self, text: &str) -> Option<i64> {
        let total: f64 = duration_tokens(text)
            .filter_map(|token| {
                self.units
                    .lookup(token.unit_text)
                    .map(|multiplier| token.amount * multiplier as f64)
            })
            .sum();

        let total = total.round();
        if total == 0.0 || !total.is_finite() {
            return None;
        }

        Some(total as i64)
    }

    /// Match the whole of `text` against the absolute date/time grammar.
    pub fn parse_absolute(&self, text: &str) -> Option<AbsoluteTime> {
        let caps = self.absolute.captures(text)?;
        let field = |index: usize| caps.get(index).and_then(|m| m.as_str().parse::<u32>().ok());

        let parsed = AbsoluteTime {
            day: field(1),
            month: field(2),
            year: caps.get(3).and_then(|m| m.as_str().parse::<i32>().ok()),
            hour: field(4),
            minute: field(5),
            second: field(6),
        };

        if parsed.day.is_none() && parsed.hour.is_none() {
            return None;
        }

        Some(parsed)
    }

    /// Milliseconds from `now` described by `text`.
    ///
    /// Relative durations are returned as-is. Absolute times resolve to
    /// `instant - now` and are negative when the time has already passed.
    pub fn resolve_duration<Tz: TimeZone>(&self, text: &str, now: &DateTime<Tz>) -> Option<i64> {
        if let Some(ms) = self.parse_relative(text) {
            trace!(input = text, ms, "resolved relative duration");
            return Some(ms);
        }

        let instant = self.parse_absolute(text)?.resolve(now)?;
        let ms = instant.timestamp_millis() - now.timestamp_millis();
        trace!(input = text, ms, "resolved absolute time");
        Some(ms)
    }
}

impl Default for DurationParser {
    fn default() -> Self {
        Self::for_locales(&Locale::ALL)
    }
}

fn absolute_pattern(locales: &[Locale]) -> Regex {
    let mut separators = vec![r"\s".to_owned(), "-".to_owned()];
    for word in locales.iter().flat_map(|locale| locale.date_separators()) {
        let separator = format!(" {} ", regex::escape(word));
        if !separators.contains(&separator) {
            separators.push(separator);
        }
    }

    let pattern = format!(
        r"^(?:([0-9]{{1,2}})\.([0-9]{{1,2}})(?:\.([0-9]{{1,4}}))?)?(?:(?:{})?([0-9]{{1,2}}):([0-9]{{1,2}})(?::([0-9]{{1,2}}))?)?$",
        separators.join("|")
    );

    Regex::new(&pattern).expect("absolute time pattern is valid")
}
