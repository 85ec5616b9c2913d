// crates/reservemate-core/src/parser/edit.rs - Arguments for `edit`

use indexmap::IndexSet;

use super::tokenizer::{
    ArgumentMultimap, PREFIX_DATE_TIME, PREFIX_DINERS, PREFIX_EMAIL, PREFIX_NAME,
    PREFIX_OCCASION, PREFIX_PHONE, SINGLE_VALUED_PREFIXES, tokenize,
};
use super::util::{field, parse_index, parse_tags};
use super::{ParseError, ParseResult};
use crate::commands::edit::MESSAGE_USAGE;
use crate::commands::{EditCommand, EditReservationDescriptor};
use crate::field::{DateTime, Diners, Email, Name, Phone, Tag};

pub(super) fn parse(args: &str) -> ParseResult<EditCommand> {
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

    let index = parse_index(map.preamble()).ok_or(ParseError::InvalidFormat {
        usage: MESSAGE_USAGE,
    })?;

    map.verify_no_duplicate_prefixes_for(&SINGLE_VALUED_PREFIXES)?;

    let descriptor = EditReservationDescriptor {
        name: map
            .value(PREFIX_NAME)
            .map(|raw| field(Name::parse(raw), MESSAGE_USAGE))
            .transpose()?,
        phone: map
            .value(PREFIX_PHONE)
            .map(|raw| field(Phone::parse(raw), MESSAGE_USAGE))
            .transpose()?,
        email: map
            .value(PREFIX_EMAIL)
            .map(|raw| field(Email::parse(raw), MESSAGE_USAGE))
            .transpose()?,
        diners: map
            .value(PREFIX_DINERS)
            .map(|raw| field(Diners::parse(raw), MESSAGE_USAGE))
            .transpose()?,
        date_time: map
            .value(PREFIX_DATE_TIME)
            .map(|raw| field(DateTime::parse(raw), MESSAGE_USAGE))
            .transpose()?,
        tags: parse_tags_for_edit(&map)?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldsToEdit);
    }

    Ok(EditCommand::new(index, descriptor))
}

/// `None` when no `o/` was given; a single empty `o/` clears the occasions
fn parse_tags_for_edit(map: &ArgumentMultimap) -> ParseResult<Option<IndexSet<Tag>>> {
    if !map.contains(PREFIX_OCCASION) {
        return Ok(None);
    }

    let values = map.all_values(PREFIX_OCCASION);
    if let [only] = values.as_slice() {
        if only.is_empty() {
            return Ok(Some(IndexSet::new()));
        }
    }

    parse_tags(&values, MESSAGE_USAGE).map(Some)
}
