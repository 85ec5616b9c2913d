// crates/reservemate-core/src/parser/tokenizer.rs - Split argument strings on flag prefixes
//
// Arguments look like `n/John Doe p/98765432 t/2030-12-25 1800 o/vip`.
// A prefix only counts when it starts the string or follows whitespace, so
// an email such as `a/b@example.com` inside a value is not mistaken for one.
// Each value runs until the next recognised prefix and is trimmed.

use indexmap::IndexMap;
use std::fmt;

use super::ParseError;

/// A flag such as `n/` introducing one argument value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_DINERS: Prefix = Prefix::new("d/");
pub const PREFIX_DATE_TIME: Prefix = Prefix::new("t/");
pub const PREFIX_OCCASION: Prefix = Prefix::new("o/");

/// Prefixes that may appear at most once per command
pub const SINGLE_VALUED_PREFIXES: [Prefix; 5] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_DINERS,
    PREFIX_DATE_TIME,
];

/// Tokenized arguments: the preamble plus every value seen for each prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: IndexMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first prefix, trimmed
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .get(&prefix)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Fail if any of `prefixes` was given more than once
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<Prefix> = prefixes
            .iter()
            .copied()
            .filter(|prefix| self.values.get(prefix).is_some_and(|v| v.len() > 1))
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }
}

/// Split `args` into a preamble and per-prefix values
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for prefix in prefixes {
        positions.extend(
            find_prefix_positions(args, prefix.as_str())
                .into_iter()
                .map(|start| (start, *prefix)),
        );
    }
    positions.sort_by_key(|(start, _)| *start);

    let mut map = ArgumentMultimap::default();
    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    map.preamble = args[..preamble_end].trim().to_string();

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        let value = args[value_start..value_end].trim().to_string();
        map.values.entry(*prefix).or_default().push(value);
    }

    map
}

fn find_prefix_positions(args: &str, prefix: &str) -> Vec<usize> {
    args.match_indices(prefix)
        .map(|(start, _)| start)
        .filter(|&start| {
            args[..start]
                .chars()
                .next_back()
                .is_none_or(char::is_whitespace)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Prefix; 6] = [
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_DINERS,
        PREFIX_DATE_TIME,
        PREFIX_OCCASION,
    ];

    #[test]
    fn test_tokenize_empty() {
        let map = tokenize("  ", &ALL);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.value(PREFIX_NAME), None);
    }

    #[test]
    fn test_tokenize_preamble_only() {
        let map = tokenize(" 1 confirm ", &ALL);
        assert_eq!(map.preamble(), "1 confirm");
        assert!(!map.contains(PREFIX_NAME));
    }

    #[test]
    fn test_tokenize_values_with_spaces() {
        let map = tokenize(" n/Amy Bee  t/2030-12-25 1800 o/vip o/birthday", &ALL);

        assert_eq!(map.preamble(), "");
        assert_eq!(map.value(PREFIX_NAME), Some("Amy Bee"));
        assert_eq!(map.value(PREFIX_DATE_TIME), Some("2030-12-25 1800"));
        assert_eq!(map.all_values(PREFIX_OCCASION), vec!["vip", "birthday"]);
    }

    #[test]
    fn test_prefix_must_follow_whitespace() {
        let map = tokenize("n/Amy e/amy@ex.com p/123xn/ignored", &ALL);

        assert_eq!(map.value(PREFIX_NAME), Some("Amy"));
        assert_eq!(map.value(PREFIX_PHONE), Some("123xn/ignored"));
    }

    #[test]
    fn test_empty_value_is_kept() {
        let map = tokenize("1 o/", &ALL);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.all_values(PREFIX_OCCASION), vec![""]);
    }

    #[test]
    fn test_duplicate_detection() {
        let map = tokenize("n/A n/B p/1 p/2 e/x o/a o/b", &ALL);

        assert_eq!(map.value(PREFIX_NAME), Some("B"));
        assert_eq!(
            map.verify_no_duplicate_prefixes_for(&SINGLE_VALUED_PREFIXES),
            Err(ParseError::DuplicatePrefixes(vec![PREFIX_NAME, PREFIX_PHONE]))
        );
        assert!(map.verify_no_duplicate_prefixes_for(&[PREFIX_EMAIL]).is_ok());
    }
}
