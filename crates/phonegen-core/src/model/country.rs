// ── Country record ──
//
// One row of the compiled-in catalog. Records are `'static` and never
// mutated; the catalog hands out `&'static CountryRecord` everywhere.

use std::fmt;

use serde::Serialize;

/// Placeholder character in a pattern, replaced by one random digit.
pub const PLACEHOLDER: char = 'X';

/// Characters a pattern may carry verbatim besides digits.
const SEPARATORS: [char; 2] = [' ', '-'];

/// A country the generator knows how to format numbers for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CountryRecord {
    /// Stable lowercase ISO 3166-1 alpha-2 identifier (e.g. `"cn"`).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// International dialing code including the leading `+`.
    pub dial_code: &'static str,
    /// National number template: `X` = random digit, digits and
    /// separators (space, `-`) are copied as-is.
    pub pattern: &'static str,
}

impl CountryRecord {
    /// Length in bytes of every number generated for this country:
    /// dial code, one space, then the pattern.
    pub fn formatted_len(&self) -> usize {
        self.dial_code.len() + 1 + self.pattern.len()
    }

    /// Number of random digits in each generated number.
    pub fn placeholder_count(&self) -> usize {
        self.pattern.chars().filter(|&c| c == PLACEHOLDER).count()
    }

    /// Whether `number` has this country's shape: dial-code prefix,
    /// total length, fixed positions, and a digit at every placeholder.
    pub fn matches(&self, number: &str) -> bool {
        let Some(national) = number
            .strip_prefix(self.dial_code)
            .and_then(|rest| rest.strip_prefix(' '))
        else {
            return false;
        };

        national.len() == self.pattern.len()
            && national
                .chars()
                .zip(self.pattern.chars())
                .all(|(c, p)| if p == PLACEHOLDER { c.is_ascii_digit() } else { c == p })
    }

    /// Structural sanity check used by the catalog tests.
    pub fn is_well_formed(&self) -> bool {
        let id_ok = self.id.len() == 2 && self.id.bytes().all(|b| b.is_ascii_lowercase());
        let code_ok = self
            .dial_code
            .strip_prefix('+')
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
        let pattern_ok = self.placeholder_count() > 0
            && self
                .pattern
                .chars()
                .all(|c| c == PLACEHOLDER || c.is_ascii_digit() || SEPARATORS.contains(&c));

        id_ok && code_ok && pattern_ok && !self.name.is_empty()
    }
}

impl fmt::Display for CountryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.dial_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: CountryRecord = CountryRecord {
        id: "zz",
        name: "Sample",
        dial_code: "+99",
        pattern: "7X-XXX",
    };

    #[test]
    fn formatted_len_counts_prefix_and_space() {
        assert_eq!(SAMPLE.formatted_len(), "+99 7X-XXX".len());
    }

    #[test]
    fn placeholder_count_ignores_fixed_digits() {
        assert_eq!(SAMPLE.placeholder_count(), 4);
    }

    #[test]
    fn matches_accepts_filled_pattern() {
        assert!(SAMPLE.matches("+99 71-234"));
        assert!(SAMPLE.matches("+99 70-000"));
    }

    #[test]
    fn matches_rejects_wrong_shape() {
        assert!(!SAMPLE.matches("+98 71-234"), "wrong dial code");
        assert!(!SAMPLE.matches("+9971-234"), "missing space");
        assert!(!SAMPLE.matches("+99 81-234"), "fixed digit changed");
        assert!(!SAMPLE.matches("+99 71 234"), "separator changed");
        assert!(!SAMPLE.matches("+99 7a-234"), "non-digit fill");
        assert!(!SAMPLE.matches("+99 71-2345"), "too long");
        assert!(!SAMPLE.matches("+99 71-23"), "too short");
    }

    #[test]
    fn well_formed_rejects_bad_records() {
        assert!(SAMPLE.is_well_formed());

        let no_placeholder = CountryRecord {
            pattern: "123",
            ..SAMPLE
        };
        assert!(!no_placeholder.is_well_formed());

        let bad_code = CountryRecord {
            dial_code: "99",
            ..SAMPLE
        };
        assert!(!bad_code.is_well_formed());

        let bad_char = CountryRecord {
            pattern: "X(X)",
            ..SAMPLE
        };
        assert!(!bad_char.is_well_formed());
    }

    #[test]
    fn display_shows_name_and_code() {
        assert_eq!(SAMPLE.to_string(), "Sample (+99)");
    }
}
