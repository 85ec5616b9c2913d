// crates/reservemate-core/src/parser/util.rs - Helpers shared by the argument parsers

use indexmap::IndexSet;

use super::{ParseError, ParseResult};
use crate::field::{FieldResult, Tag};
use crate::index::Index;

/// Parse a one-based index; anything but a positive integer is rejected
pub fn parse_index(raw: &str) -> Option<Index> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse::<usize>().ok().and_then(Index::from_one_based)
}

/// Attach the command usage to a field validation failure
pub fn field<T>(result: FieldResult<T>, usage: &'static str) -> ParseResult<T> {
    result.map_err(|e| ParseError::InvalidField {
        message: e.to_string(),
        usage,
    })
}

/// Parse every occasion value, dropping repeats
pub fn parse_tags(raw: &[&str], usage: &'static str) -> ParseResult<IndexSet<Tag>> {
    raw.iter()
        .map(|value| field(Tag::parse(value), usage))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::TAG_CONSTRAINTS;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("1"), Index::from_one_based(1));
        assert_eq!(parse_index(" 12 "), Index::from_one_based(12));
        assert_eq!(parse_index("0"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index("a"), None);
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("99999999999999999999999"), None);
    }

    #[test]
    fn test_parse_tags_deduplicates() {
        let tags = parse_tags(&["vip", "birthday", "vip"], "usage").unwrap();
        let names: Vec<&str> = tags.iter().map(Tag::as_str).collect();
        assert_eq!(names, vec!["vip", "birthday"]);
    }

    #[test]
    fn test_parse_tags_rejects_invalid() {
        assert_eq!(
            parse_tags(&["vip", "#friend"], "usage"),
            Err(ParseError::InvalidField {
                message: TAG_CONSTRAINTS.to_string(),
                usage: "usage",
            })
        );
    }
}
