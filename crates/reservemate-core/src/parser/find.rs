// crates/reservemate-core/src/parser/find.rs - Arguments for `find`

use super::{ParseError, ParseResult};
use crate::commands::FindCommand;
use crate::commands::find::MESSAGE_USAGE;
use crate::model::ReservationFilter;

pub(super) fn parse(args: &str) -> ParseResult<FindCommand> {
    let keywords: Vec<&str> = args.split_whitespace().collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: MESSAGE_USAGE,
        });
    }

    Ok(FindCommand::new(ReservationFilter::name_contains_keywords(
        keywords,
    )))
}
