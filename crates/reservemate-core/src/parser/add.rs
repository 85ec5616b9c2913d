// crates/reservemate-core/src/parser/add.rs - Arguments for `add`

use super::ParseError;
use super::ParseResult;
use super::tokenizer::{
    PREFIX_DATE_TIME, PREFIX_DINERS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_OCCASION, PREFIX_PHONE,
    SINGLE_VALUED_PREFIXES, tokenize,
};
use super::util::{field, parse_tags};
use crate::commands::AddCommand;
use crate::commands::add::MESSAGE_USAGE;
use crate::field::{DateTime, Diners, Email, Name, Phone};
use crate::reservation::Reservation;

pub(super) fn parse(args: &str) -> ParseResult<AddCommand> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_DINERS,
            PREFIX_DATE_TIME,
            PREFIX_OCCASION,
        ],
    );

    let all_required = SINGLE_VALUED_PREFIXES
        .iter()
        .all(|prefix| map.contains(*prefix));
    if !all_required || !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: MESSAGE_USAGE,
        });
    }

    map.verify_no_duplicate_prefixes_for(&SINGLE_VALUED_PREFIXES)?;

    // Presence was checked above
    let value = |prefix| map.value(prefix).unwrap_or_default();

    let name = field(Name::parse(value(PREFIX_NAME)), MESSAGE_USAGE)?;
    let phone = field(Phone::parse(value(PREFIX_PHONE)), MESSAGE_USAGE)?;
    let email = field(Email::parse(value(PREFIX_EMAIL)), MESSAGE_USAGE)?;
    let diners = field(Diners::parse(value(PREFIX_DINERS)), MESSAGE_USAGE)?;
    let date_time = field(DateTime::parse(value(PREFIX_DATE_TIME)), MESSAGE_USAGE)?;
    let tags = parse_tags(&map.all_values(PREFIX_OCCASION), MESSAGE_USAGE)?;

    Ok(AddCommand::new(Reservation::new(
        name, phone, email, diners, date_time, tags,
    )))
}
