// crates/reservemate-core/src/parser/delete.rs - Arguments for `delete`

use super::util::parse_index;
use super::{ParseError, ParseResult};
use crate::commands::DeleteCommand;
use crate::commands::delete::{CONFIRM_TOKEN, MESSAGE_USAGE};

/// Accepts `INDEX` or `INDEX confirm`
pub(super) fn parse(args: &str) -> ParseResult<DeleteCommand> {
    let invalid = || ParseError::InvalidFormat {
        usage: MESSAGE_USAGE,
    };

    let tokens: Vec<&str> = args.split_whitespace().collect();
    let (raw_index, confirmed) = match tokens.as_slice() {
        [index] => (*index, false),
        [index, token] if token.eq_ignore_ascii_case(CONFIRM_TOKEN) => (*index, true),
        _ => return Err(invalid()),
    };

    let index = parse_index(raw_index).ok_or_else(invalid)?;
    Ok(DeleteCommand::new(index, confirmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    #[test]
    fn test_plain_index() {
        assert_eq!(parse(" 1").unwrap(), DeleteCommand::new(first(), false));
    }

    #[test]
    fn test_confirm_token_any_case() {
        assert_eq!(parse(" 1 confirm").unwrap(), DeleteCommand::new(first(), true));
        assert_eq!(parse(" 1 CONFIRM ").unwrap(), DeleteCommand::new(first(), true));
    }

    #[test]
    fn test_invalid_arguments() {
        let expected = Err(ParseError::InvalidFormat {
            usage: MESSAGE_USAGE,
        });
        assert_eq!(parse(""), expected);
        assert_eq!(parse(" a"), expected);
        assert_eq!(parse(" 0"), expected);
        assert_eq!(parse(" -3"), expected);
        assert_eq!(parse(" 1 yes"), expected);
        assert_eq!(parse(" 1 confirm extra"), expected);
        assert_eq!(parse(" confirm 1"), expected);
    }
}
