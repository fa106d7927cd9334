use crate::locale::Locale;
use crate::plural::pluralize;
use crate::units::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, MS_PER_YEAR};

pub const DEFAULT_MAX_UNITS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Years,
    Days,
    Hours,
    Minutes,
    Seconds,
}

/// A duration split into calendar-ish units.
///
/// Each field is computed independently by truncating division toward zero and
/// then taking the remainder within its window (365 days, 24 hours, 60 minutes,
/// 60 seconds). There is no month field and years are always 365 days, so
/// re-assembling the fields does not always give back the original duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DurationBreakdown {
    pub years: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl DurationBreakdown {
    pub fn from_millis(ms: i64) -> Self {
        Self {
            years: ms / MS_PER_YEAR,
            days: (ms / MS_PER_DAY) % 365,
            hours: (ms / MS_PER_HOUR) % 24,
            minutes: (ms / MS_PER_MINUTE) % 60,
            seconds: (ms / MS_PER_SECOND) % 60,
        }
    }

    /// Units from largest to smallest.
    pub fn units(&self) -> [(TimeUnit, i64); 5] {
        [
            (TimeUnit::Years, self.years),
            (TimeUnit::Days, self.days),
            (TimeUnit::Hours, self.hours),
            (TimeUnit::Minutes, self.minutes),
            (TimeUnit::Seconds, self.seconds),
        ]
    }

    pub fn is_zero(&self) -> bool {
        self.units().iter().all(|(_, value)| *value == 0)
    }
}

pub fn breakdown(ms: i64) -> DurationBreakdown {
    DurationBreakdown::from_millis(ms)
}

/// Render `ms` as at most `max_units` non-zero units, largest first.
///
/// Returns an empty string for durations below one second.
pub fn format_duration(ms: i64, max_units: usize, locale: Locale) -> String {
    let rule = locale.plural_rule();

    breakdown(ms)
        .units()
        .into_iter()
        .filter(|(_, value)| *value != 0)
        .take(max_units)
        .map(|(unit, value)| pluralize(locale.unit_forms(unit), value, rule))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurationFormatter {
    pub locale: Locale,
    pub max_units: usize,
}

impl DurationFormatter {
    pub fn new(locale: Locale, max_units: usize) -> Self {
        Self { locale, max_units }
    }

    pub fn format(&self, ms: i64) -> String {
        format_duration(ms, self.max_units, self.locale)
    }
}

impl Default for DurationFormatter {
    fn default() -> Self {
        Self::new(Locale::default(), DEFAULT_MAX_UNITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn breaks_down_mixed_duration() {
        let ms = MS_PER_YEAR + 2 * MS_PER_DAY + 3 * MS_PER_HOUR + 4 * MS_PER_MINUTE + 5_999;
        assert_eq!(
            breakdown(ms),
            DurationBreakdown {
                years: 1,
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5,
            }
        );
    }

    #[test]
    fn negative_durations_truncate_toward_zero() {
        let ms = -(MS_PER_HOUR + 30 * MS_PER_MINUTE + 500);
        assert_eq!(
            breakdown(ms),
            DurationBreakdown {
                years: 0,
                days: 0,
                hours: -1,
                minutes: -30,
                seconds: 0,
            }
        );
    }

    #[test]
    fn sub_second_breakdown_is_zero() {
        assert!(breakdown(999).is_zero());
        assert!(breakdown(-999).is_zero());
    }

    #[test]
    fn thirty_day_month_shows_as_days() {
        assert_eq!(format_duration(30 * MS_PER_DAY, 2, Locale::English), "30 days");
    }

    #[test]
    fn formats_hour_and_a_half_in_russian() {
        assert_eq!(format_duration(5_400_000, 2, Locale::Russian), "1 час 30 минут");
    }

    #[test]
    fn formats_hour_and_a_half_in_english() {
        assert_eq!(
            format_duration(5_400_000, 2, Locale::English),
            "1 hour 30 minutes"
        );
    }

    #[test]
    fn zero_and_sub_second_durations_format_empty() {
        assert_eq!(format_duration(0, 2, Locale::Russian), "");
        assert_eq!(format_duration(999, 2, Locale::English), "");
    }

    #[test]
    fn unit_limit_keeps_largest_non_zero_units() {
        let ms = 2 * MS_PER_DAY + 5 * MS_PER_MINUTE + 7 * MS_PER_SECOND;
        assert_eq!(format_duration(ms, 2, Locale::Russian), "2 дня 5 минут");
        assert_eq!(format_duration(ms, 1, Locale::Russian), "2 дня");
        assert_eq!(
            format_duration(ms, 5, Locale::Russian),
            "2 дня 5 минут 7 секунд"
        );
        assert_eq!(format_duration(ms, 0, Locale::Russian), "");
    }

    #[test]
    fn teen_and_twenties_pluralize_per_slavic_rule() {
        assert_eq!(format_duration(11 * MS_PER_MINUTE, 2, Locale::Russian), "11 минут");
        assert_eq!(format_duration(21 * MS_PER_MINUTE, 2, Locale::Russian), "21 минуту");
        assert_eq!(format_duration(22 * MS_PER_SECOND, 2, Locale::Russian), "22 секунды");
    }

    #[test]
    fn years_past_365_days() {
        assert_eq!(
            format_duration(400 * MS_PER_DAY, 2, Locale::English),
            "1 year 35 days"
        );
        assert_eq!(format_duration(5 * MS_PER_YEAR, 2, Locale::Russian), "5 лет");
    }

    #[test]
    fn negative_durations_keep_sign() {
        assert_eq!(
            format_duration(-5_400_000, 2, Locale::English),
            "-1 hour -30 minutes"
        );
    }

    #[test]
    fn default_formatter_is_russian_with_two_units() {
        let formatter = DurationFormatter::default();
        assert_eq!(formatter.locale, Locale::Russian);
        assert_eq!(formatter.max_units, DEFAULT_MAX_UNITS);
        assert_eq!(formatter.format(90_061_000), "1 день 1 час");
    }

    proptest! {
        #[test]
        fn breakdown_fields_stay_within_windows(ms in any::<i64>()) {
            let parts = breakdown(ms);
            prop_assert!(parts.days.abs() < 365);
            prop_assert!(parts.hours.abs() < 24);
            prop_assert!(parts.minutes.abs() < 60);
            prop_assert!(parts.seconds.abs() < 60);
        }

        #[test]
        fn breakdown_fields_follow_sign(ms in any::<i64>()) {
            for (_, value) in breakdown(ms).units() {
                prop_assert!(value == 0 || value.signum() == ms.signum());
            }
        }

        #[test]
        fn unit_limit_is_respected(ms in any::<i64>(), max_units in 0_usize..6) {
            let rendered = format_duration(ms, max_units, Locale::English);
            let words = rendered.split_whitespace().count();
            prop_assert!(words <= max_units * 2);
            prop_assert_eq!(words % 2, 0);
        }
    }
}
