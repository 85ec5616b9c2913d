// crates/reservemate-core/src/field.rs - Validated field values for reservations
//
// Every value a reservation carries goes through one of these wrappers. Each
// wrapper has a single validating constructor (`parse`, also reachable via
// `FromStr`), a static `is_valid` check, and a canonical string form.
//
// VALIDATION RULES:
// - Name:     alphanumerics and spaces, must not start with a space, at most 50 chars
// - Phone:    digits only, at least 3 of them
// - Email:    local-part@domain, domain has at least one period
// - Diners:   integer between 1 and MAX_DINERS
// - DateTime: exactly "yyyy-MM-dd HHmm"
// - Tag:      a single alphanumeric token
//
// Constructors never trim. Whitespace handling is the argument parser's job.

use chrono::NaiveDateTime;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Largest party a single reservation may seat
pub const MAX_DINERS: u8 = 10;

/// Longest accepted customer name, in characters
pub const MAX_NAME_LENGTH: usize = 50;

/// chrono format string matching `yyyy-MM-dd HHmm`
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H%M";

pub const NAME_CONSTRAINTS: &str = "Names should only contain alphanumeric characters and spaces, \
should not be blank, and should be at most 50 characters long";
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
pub const EMAIL_CONSTRAINTS: &str =
    "Emails should be of the format local-part@domain, where the domain contains at least one period";
pub const DINERS_CONSTRAINTS: &str =
    "Number of diners should be a positive integer between 1 and 10";
pub const DATE_TIME_CONSTRAINTS: &str =
    "Date-time should be a valid date and time in the format yyyy-MM-dd HHmm";
pub const TAG_CONSTRAINTS: &str = "Occasion names should be alphanumeric";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("name pattern is valid"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,}$").expect("phone pattern is valid"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+([+_.\-][A-Za-z0-9]+)*@([A-Za-z0-9]+(-[A-Za-z0-9]+)*\.)+[A-Za-z0-9]{2,}$",
    )
    .expect("email pattern is valid")
});
static DINERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("diners pattern is valid"));
static DATE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{4}$").expect("date-time pattern is valid")
});
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("tag pattern is valid"));

/// Errors produced when raw input does not satisfy a field's format
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldFormatError {
    #[error("{}", NAME_CONSTRAINTS)]
    Name,

    #[error("{}", PHONE_CONSTRAINTS)]
    Phone,

    #[error("{}", EMAIL_CONSTRAINTS)]
    Email,

    #[error("{}", DINERS_CONSTRAINTS)]
    Diners,

    #[error("{}", DATE_TIME_CONSTRAINTS)]
    DateTime,

    #[error("{}", TAG_CONSTRAINTS)]
    Tag,
}

/// Result type for field construction
pub type FieldResult<T> = Result<T, FieldFormatError>;

/// Customer name as typed, case and trailing spaces preserved
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn parse<S: AsRef<str>>(raw: S) -> FieldResult<Self> {
        let raw = raw.as_ref();
        if Self::is_valid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(FieldFormatError::Name)
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        NAME_RE.is_match(raw) && raw.chars().count() <= MAX_NAME_LENGTH
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Contact number, digits only
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone(String);

impl Phone {
    pub fn parse<S: AsRef<str>>(raw: S) -> FieldResult<Self> {
        let raw = raw.as_ref();
        if Self::is_valid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(FieldFormatError::Phone)
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        PHONE_RE.is_match(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Contact email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
    pub fn parse<S: AsRef<str>>(raw: S) -> FieldResult<Self> {
        let raw = raw.as_ref();
        if Self::is_valid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(FieldFormatError::Email)
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        EMAIL_RE.is_match(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Party size for a reservation
///
/// Stored as an integer; the canonical rendering drops leading zeros, so
/// "04" and "4" both become `Diners(4)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Diners(u8);

impl Diners {
    pub fn parse<S: AsRef<str>>(raw: S) -> FieldResult<Self> {
        let raw = raw.as_ref();
        if !DINERS_RE.is_match(raw) {
            return Err(FieldFormatError::Diners);
        }

        match raw.parse::<u8>() {
            Ok(count) if (1..=MAX_DINERS).contains(&count) => Ok(Self(count)),
            _ => Err(FieldFormatError::Diners),
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    pub fn count(&self) -> u8 {
        self.0
    }
}

/// Date and time of the booking, minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime(NaiveDateTime);

impl DateTime {
    pub fn parse<S: AsRef<str>>(raw: S) -> FieldResult<Self> {
        let raw = raw.as_ref();
        if !DATE_TIME_RE.is_match(raw) {
            return Err(FieldFormatError::DateTime);
        }

        NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT)
            .map(Self)
            .map_err(|_| FieldFormatError::DateTime)
    }

    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    pub fn value(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for DateTime {
    /// Truncates seconds so the value survives a round trip through the text format
    fn from(value: NaiveDateTime) -> Self {
        let text = value.format(DATE_TIME_FORMAT).to_string();
        match NaiveDateTime::parse_from_str(&text, DATE_TIME_FORMAT) {
            Ok(truncated) => Self(truncated),
            Err(_) => Self(value),
        }
    }
}

/// Occasion tag attached to a reservation (e.g. "birthday")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn parse<S: AsRef<str>>(raw: S) -> FieldResult<Self> {
        let raw = raw.as_ref();
        if Self::is_valid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(FieldFormatError::Tag)
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        TAG_RE.is_match(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Diners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_TIME_FORMAT))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = FieldFormatError;

    fn from_str(s: &str) -> FieldResult<Self> {
        Self::parse(s)
    }
}

impl FromStr for Phone {
    type Err = FieldFormatError;

    fn from_str(s: &str) -> FieldResult<Self> {
        Self::parse(s)
    }
}

impl FromStr for Email {
    type Err = FieldFormatError;

    fn from_str(s: &str) -> FieldResult<Self> {
        Self::parse(s)
    }
}

impl FromStr for Diners {
    type Err = FieldFormatError;

    fn from_str(s: &str) -> FieldResult<Self> {
        Self::parse(s)
    }
}

impl FromStr for DateTime {
    type Err = FieldFormatError;

    fn from_str(s: &str) -> FieldResult<Self> {
        Self::parse(s)
    }
}

impl FromStr for Tag {
    type Err = FieldFormatError;

    fn from_str(s: &str) -> FieldResult<Self> {
        Self::parse(s)
    }
}
