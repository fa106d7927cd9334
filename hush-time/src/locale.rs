use std::fmt;
use std::str::FromStr;

use crate::format::TimeUnit;
use crate::plural::{PluralForms, PluralRule};

/// Languages the formatter and the absolute-date grammar understand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Russian,
    English,
}

const RUSSIAN_YEARS: PluralForms = PluralForms::new("год", "года", "лет");
const RUSSIAN_DAYS: PluralForms = PluralForms::new("день", "дня", "дней");
const RUSSIAN_HOURS: PluralForms = PluralForms::new("час", "часа", "часов");
const RUSSIAN_MINUTES: PluralForms = PluralForms::new("минуту", "минуты", "минут");
const RUSSIAN_SECONDS: PluralForms = PluralForms::new("секунду", "секунды", "секунд");

const ENGLISH_YEARS: PluralForms = PluralForms::new("year", "years", "years");
const ENGLISH_DAYS: PluralForms = PluralForms::new("day", "days", "days");
const ENGLISH_HOURS: PluralForms = PluralForms::new("hour", "hours", "hours");
const ENGLISH_MINUTES: PluralForms = PluralForms::new("minute", "minutes", "minutes");
const ENGLISH_SECONDS: PluralForms = PluralForms::new("second", "seconds", "seconds");

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Russian, Locale::English];

    pub fn code(self) -> &'static str {
        match self {
            Self::Russian => "ru",
            Self::English => "en",
        }
    }

    pub fn plural_rule(self) -> PluralRule {
        match self {
            Self::Russian => PluralRule::Slavic,
            Self::English => PluralRule::English,
        }
    }

    pub fn unit_forms(self, unit: TimeUnit) -> &'static PluralForms {
        match (self, unit) {
            (Self::Russian, TimeUnit::Years) => &RUSSIAN_YEARS,
            (Self::Russian, TimeUnit::Days) => &RUSSIAN_DAYS,
            (Self::Russian, TimeUnit::Hours) => &RUSSIAN_HOURS,
            (Self::Russian, TimeUnit::Minutes) => &RUSSIAN_MINUTES,
            (Self::Russian, TimeUnit::Seconds) => &RUSSIAN_SECONDS,
            (Self::English, TimeUnit::Years) => &ENGLISH_YEARS,
            (Self::English, TimeUnit::Days) => &ENGLISH_DAYS,
            (Self::English, TimeUnit::Hours) => &ENGLISH_HOURS,
            (Self::English, TimeUnit::Minutes) => &ENGLISH_MINUTES,
            (Self::English, TimeUnit::Seconds) => &ENGLISH_SECONDS,
        }
    }

    /// Words allowed between the date and the time of an absolute time,
    /// as in `25.12 в 18:00` or `25.12 at 18:00`.
    pub fn date_separators(self) -> &'static [&'static str] {
        match self {
            Self::Russian => &["в"],
            Self::English => &["in", "at"],
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ru" | "russian" => Ok(Self::Russian),
            "en" | "english" => Ok(Self::English),
            other => anyhow::bail!("unsupported locale `{other}` (expected `ru` or `en`)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_codes() {
        assert_eq!("ru".parse::<Locale>().ok(), Some(Locale::Russian));
        assert_eq!(" EN ".parse::<Locale>().ok(), Some(Locale::English));
        assert_eq!("English".parse::<Locale>().ok(), Some(Locale::English));
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn display_round_trips_through_code() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string().parse::<Locale>().ok(), Some(locale));
        }
    }

    #[test]
    fn every_locale_has_separators() {
        for locale in Locale::ALL {
            assert!(!locale.date_separators().is_empty());
        }
    }

    #[test]
    fn russian_minutes_use_accusative_forms() {
        let forms = Locale::Russian.unit_forms(TimeUnit::Minutes);
        assert_eq!(forms.get(0), "минуту");
        assert_eq!(forms.get(1), "минуты");
        assert_eq!(forms.get(2), "минут");
    }
}
