/// Word forms for one unit: singular, "few" plural, "many" plural.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PluralForms(pub [&'static str; 3]);

impl PluralForms {
    pub const fn new(singular: &'static str, few: &'static str, many: &'static str) -> Self {
        Self([singular, few, many])
    }

    pub fn get(&self, index: usize) -> &'static str {
        self.0[index.min(2)]
    }
}

/// Grammatical number selection for a language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PluralRule {
    /// Three-way split used by Russian: 1, 21, 31... / 2-4, 22-24... / everything else.
    Slavic,
    /// One form for exactly one, the "many" form otherwise.
    English,
}

impl PluralRule {
    /// Index into [`PluralForms`] for `n`.
    ///
    /// Only the magnitude of `n` is considered, so `-1` takes the singular
    /// form. A sign-sensitive remainder (`-1 % 10 == -1`) would pick the
    /// "many" form instead; negative counts deliberately read as `-1 час`.
    pub fn form_index(self, n: i64) -> usize {
        let n = n.unsigned_abs();

        match self {
            Self::Slavic => {
                let (last_digit, last_two) = (n % 10, n % 100);
                if last_digit == 1 && last_two != 11 {
                    0
                } else if (2..=4).contains(&last_digit) && !(10..=19).contains(&last_two) {
                    1
                } else {
                    2
                }
            }
            Self::English => {
                if n == 1 {
                    0
                } else {
                    2
                }
            }
        }
    }
}

/// Render `"<n> <word>"` with the form `rule` selects for `n`.
pub fn pluralize(forms: &PluralForms, n: i64, rule: PluralRule) -> String {
    format!("{} {}", n, forms.get(rule.form_index(n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HOURS: PluralForms = PluralForms::new("час", "часа", "часов");

    #[test]
    fn slavic_singular_forms() {
        assert_eq!(pluralize(&HOURS, 1, PluralRule::Slavic), "1 час");
        assert_eq!(pluralize(&HOURS, 21, PluralRule::Slavic), "21 час");
        assert_eq!(pluralize(&HOURS, 101, PluralRule::Slavic), "101 час");
    }

    #[test]
    fn slavic_few_forms() {
        assert_eq!(pluralize(&HOURS, 2, PluralRule::Slavic), "2 часа");
        assert_eq!(pluralize(&HOURS, 4, PluralRule::Slavic), "4 часа");
        assert_eq!(pluralize(&HOURS, 23, PluralRule::Slavic), "23 часа");
    }

    #[test]
    fn slavic_teens_take_many_form() {
        assert_eq!(PluralRule::Slavic.form_index(11), 2);
        assert_eq!(PluralRule::Slavic.form_index(12), 2);
        assert_eq!(PluralRule::Slavic.form_index(14), 2);
        assert_eq!(PluralRule::Slavic.form_index(111), 2);
        assert_eq!(pluralize(&HOURS, 11, PluralRule::Slavic), "11 часов");
    }

    #[test]
    fn slavic_many_forms() {
        assert_eq!(pluralize(&HOURS, 0, PluralRule::Slavic), "0 часов");
        assert_eq!(pluralize(&HOURS, 5, PluralRule::Slavic), "5 часов");
        assert_eq!(pluralize(&HOURS, 20, PluralRule::Slavic), "20 часов");
    }

    #[test]
    fn negative_numbers_use_magnitude_for_form() {
        assert_eq!(pluralize(&HOURS, -1, PluralRule::Slavic), "-1 час");
        assert_eq!(pluralize(&HOURS, -3, PluralRule::Slavic), "-3 часа");
    }

    #[test]
    fn english_rule() {
        let hours = PluralForms::new("hour", "hours", "hours");
        assert_eq!(pluralize(&hours, 1, PluralRule::English), "1 hour");
        assert_eq!(pluralize(&hours, 2, PluralRule::English), "2 hours");
        assert_eq!(pluralize(&hours, 21, PluralRule::English), "21 hours");
        assert_eq!(pluralize(&hours, -1, PluralRule::English), "-1 hour");
    }

    proptest! {
        #[test]
        fn slavic_index_repeats_every_hundred(n in 0_i64..1_000_000) {
            prop_assert_eq!(
                PluralRule::Slavic.form_index(n),
                PluralRule::Slavic.form_index(n + 100)
            );
        }

        #[test]
        fn index_is_always_in_range(n in any::<i64>()) {
            prop_assert!(PluralRule::Slavic.form_index(n) < 3);
            prop_assert!(PluralRule::English.form_index(n) < 3);
        }
    }
}
