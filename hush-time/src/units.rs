use std::cmp::Reverse;
use std::sync::LazyLock;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
pub const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;
/// Months are a flat 30 days.
pub const MS_PER_MONTH: i64 = 30 * MS_PER_DAY;
/// Years are a flat 365 days, leap years are ignored.
pub const MS_PER_YEAR: i64 = 365 * MS_PER_DAY;

const STANDARD_UNITS: &[(&str, i64)] = &[
    ("с", MS_PER_SECOND),
    ("м", MS_PER_MINUTE),
    ("ч", MS_PER_HOUR),
    ("д", MS_PER_DAY),
    ("н", MS_PER_WEEK),
    ("мес", MS_PER_MONTH),
    ("s", MS_PER_SECOND),
    ("m", MS_PER_MINUTE),
    ("h", MS_PER_HOUR),
    ("d", MS_PER_DAY),
    ("w", MS_PER_WEEK),
    ("mo", MS_PER_MONTH),
];

static STANDARD: LazyLock<UnitTable> = LazyLock::new(|| UnitTable::new(STANDARD_UNITS.iter().copied()));

/// Ordered `(prefix, milliseconds)` pairs used to resolve unit suffixes such as
/// `h`, `hours`, `мин` or `месяц`.
///
/// Entries are sorted by descending prefix length when the table is built, so
/// `mo` is always tried before `m` regardless of declaration order. Entries of
/// equal length keep their declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitTable {
    entries: Vec<(&'static str, i64)>,
}

impl UnitTable {
    pub fn new(entries: impl IntoIterator<Item = (&'static str, i64)>) -> Self {
        let mut entries: Vec<_> = entries
            .into_iter()
            .filter(|(prefix, _)| !prefix.is_empty())
            .collect();
        entries.sort_by_key(|(prefix, _)| Reverse(prefix.chars().count()));

        Self { entries }
    }

    /// The Russian and English suffixes accepted by the moderation commands.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Milliseconds per unit for the first prefix `unit_text` starts with.
    pub fn lookup(&self, unit_text: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(prefix, _)| unit_text.starts_with(prefix))
            .map(|(_, multiplier)| *multiplier)
    }

    pub fn entries(&self) -> &[(&'static str, i64)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_english_suffixes() {
        let table = UnitTable::standard();
        assert_eq!(table.lookup("s"), Some(MS_PER_SECOND));
        assert_eq!(table.lookup("sec"), Some(MS_PER_SECOND));
        assert_eq!(table.lookup("min"), Some(MS_PER_MINUTE));
        assert_eq!(table.lookup("hours"), Some(MS_PER_HOUR));
        assert_eq!(table.lookup("days"), Some(MS_PER_DAY));
        assert_eq!(table.lookup("weeks"), Some(MS_PER_WEEK));
        assert_eq!(table.lookup("months"), Some(MS_PER_MONTH));
    }

    #[test]
    fn resolves_russian_suffixes() {
        let table = UnitTable::standard();
        assert_eq!(table.lookup("сек"), Some(MS_PER_SECOND));
        assert_eq!(table.lookup("минут"), Some(MS_PER_MINUTE));
        assert_eq!(table.lookup("часа"), Some(MS_PER_HOUR));
        assert_eq!(table.lookup("дней"), Some(MS_PER_DAY));
        assert_eq!(table.lookup("недели"), Some(MS_PER_WEEK));
        assert_eq!(table.lookup("месяц"), Some(MS_PER_MONTH));
    }

    #[test]
    fn unknown_suffixes_do_not_resolve() {
        let table = UnitTable::standard();
        assert_eq!(table.lookup("x"), None);
        assert_eq!(table.lookup("Hours"), None);
        assert_eq!(table.lookup(":"), None);
    }

    #[test]
    fn longer_prefix_wins_over_shadowing_single_char() {
        let table = UnitTable::new([("m", MS_PER_MINUTE), ("mo", MS_PER_MONTH)]);
        assert_eq!(table.lookup("mo"), Some(MS_PER_MONTH));
        assert_eq!(table.lookup("month"), Some(MS_PER_MONTH));
        assert_eq!(table.lookup("m"), Some(MS_PER_MINUTE));
        assert_eq!(table.lookup("min"), Some(MS_PER_MINUTE));

        let table = UnitTable::new([("м", MS_PER_MINUTE), ("мес", MS_PER_MONTH)]);
        assert_eq!(table.lookup("мес"), Some(MS_PER_MONTH));
        assert_eq!(table.lookup("мин"), Some(MS_PER_MINUTE));
    }

    #[test]
    fn entries_are_sorted_by_descending_char_count() {
        let lengths: Vec<usize> = UnitTable::standard()
            .entries()
            .iter()
            .map(|(prefix, _)| prefix.chars().count())
            .collect();

        assert!(lengths.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(UnitTable::standard().entries()[0], ("мес", MS_PER_MONTH));
    }

    #[test]
    fn empty_prefixes_are_dropped() {
        let table = UnitTable::new([("", MS_PER_DAY), ("h", MS_PER_HOUR)]);
        assert_eq!(table.entries().len(), 1);
        assert_eq!(table.lookup("x"), None);
    }
}
