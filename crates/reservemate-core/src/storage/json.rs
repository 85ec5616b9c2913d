// crates/reservemate-core/src/storage/json.rs - Reservation book <-> JSON
//
// FILE FORMAT:
// {
//   "reservations": [
//     { "name": "Amy", "phone": "12345", "email": "amy@example.com",
//       "diners": "4", "dateTime": "2030-12-25 1800", "tags": ["birthday"] }
//   ]
// }
//
// Every field is a string. Fields are declared optional here so a missing
// one produces a named error instead of serde's generic message.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

use super::file::{read_json, write_json};
use super::{DataLoadingError, ReserveMateStorage, StorageResult};
use crate::field::{DateTime, Diners, Email, FieldFormatError, Name, Phone, Tag};
use crate::model::ReserveMate;
use crate::reservation::Reservation;

pub const MESSAGE_DUPLICATE_RESERVATION: &str =
    "Reservations list contains duplicate reservation(s).";

fn missing_field(field: &str) -> String {
    format!("Reservation's {field} field is missing!")
}

/// One reservation as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedReservation {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    diners: Option<String>,
    date_time: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<&Reservation> for JsonAdaptedReservation {
    fn from(reservation: &Reservation) -> Self {
        Self {
            name: Some(reservation.name().to_string()),
            phone: Some(reservation.phone().to_string()),
            email: Some(reservation.email().to_string()),
            diners: Some(reservation.diners().to_string()),
            date_time: Some(reservation.date_time().to_string()),
            tags: reservation
                .tags()
                .iter()
                .map(|tag| tag.as_str().to_string())
                .collect(),
        }
    }
}

impl JsonAdaptedReservation {
    /// Validate every field and build the model reservation
    ///
    /// The error is the message for the first offending field.
    pub fn to_model(&self) -> Result<Reservation, String> {
        fn required<T>(
            raw: &Option<String>,
            field: &str,
            parse: fn(&str) -> Result<T, FieldFormatError>,
        ) -> Result<T, String> {
            let raw = raw.as_deref().ok_or_else(|| missing_field(field))?;
            parse(raw).map_err(|e| e.to_string())
        }

        let tags = self
            .tags
            .iter()
            .map(|raw| Tag::parse(raw).map_err(|e| e.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        let name = required(&self.name, "Name", |raw| Name::parse(raw))?;
        let phone = required(&self.phone, "Phone", |raw| Phone::parse(raw))?;
        let email = required(&self.email, "Email", |raw| Email::parse(raw))?;
        let diners = required(&self.diners, "Diners", |raw| Diners::parse(raw))?;
        let date_time = required(&self.date_time, "DateTime", |raw| DateTime::parse(raw))?;

        Ok(Reservation::new(name, phone, email, diners, date_time, tags))
    }
}

/// The whole data file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableReserveMate {
    #[serde(default)]
    reservations: Vec<JsonAdaptedReservation>,
}

impl From<&ReserveMate> for JsonSerializableReserveMate {
    fn from(reserve_mate: &ReserveMate) -> Self {
        Self {
            reservations: reserve_mate
                .reservations()
                .iter()
                .map(JsonAdaptedReservation::from)
                .collect(),
        }
    }
}

impl JsonSerializableReserveMate {
    /// Build the book, failing on the first bad record or on duplicates
    pub fn to_model(&self) -> Result<ReserveMate, String> {
        let reservations = self
            .reservations
            .iter()
            .map(JsonAdaptedReservation::to_model)
            .collect::<Result<Vec<_>, _>>()?;

        ReserveMate::from_reservations(reservations)
            .map_err(|_| MESSAGE_DUPLICATE_RESERVATION.to_string())
    }
}

/// Stores the reservation book as a JSON file
#[derive(Debug, Clone)]
pub struct JsonReserveMateStorage {
    file_path: PathBuf,
}

impl JsonReserveMateStorage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ReserveMateStorage for JsonReserveMateStorage {
    fn reserve_mate_file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_reserve_mate_from(&self, path: &Path) -> StorageResult<Option<ReserveMate>> {
        let Some(stored) = read_json::<JsonSerializableReserveMate>(path)? else {
            return Ok(None);
        };

        stored
            .to_model()
            .map(Some)
            .map_err(|message| DataLoadingError::IllegalValue {
                path: path.to_path_buf(),
                message,
            })
    }

    fn save_reserve_mate_to(&self, reserve_mate: &ReserveMate, path: &Path) -> io::Result<()> {
        write_json(&JsonSerializableReserveMate::from(reserve_mate), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{DATE_TIME_CONSTRAINTS, PHONE_CONSTRAINTS, TAG_CONSTRAINTS};
    use crate::test_support::{alice, bob, typical_reserve_mate};

    fn adapted(reservation: &Reservation) -> JsonAdaptedReservation {
        JsonAdaptedReservation::from(reservation)
    }

    #[test]
    fn test_valid_reservation_details() {
        assert_eq!(adapted(&bob()).to_model(), Ok(bob()));
    }

    #[test]
    fn test_missing_fields_are_named() {
        let mut record = adapted(&alice());
        record.name = None;
        assert_eq!(record.to_model(), Err(missing_field("Name")));

        let mut record = adapted(&alice());
        record.date_time = None;
        assert_eq!(
            record.to_model(),
            Err("Reservation's DateTime field is missing!".to_string())
        );
    }

    #[test]
    fn test_invalid_fields() {
        let mut record = adapted(&alice());
        record.phone = Some("+651234".to_string());
        assert_eq!(record.to_model(), Err(PHONE_CONSTRAINTS.to_string()));

        let mut record = adapted(&alice());
        record.date_time = Some("2030-13-01 1800".to_string());
        assert_eq!(record.to_model(), Err(DATE_TIME_CONSTRAINTS.to_string()));

        let mut record = adapted(&alice());
        record.tags.push("#friend".to_string());
        assert_eq!(record.to_model(), Err(TAG_CONSTRAINTS.to_string()));
    }

    #[test]
    fn test_schema_uses_camel_case_strings() {
        let json = serde_json::to_value(adapted(&alice())).unwrap();
        assert_eq!(json["name"], "Alice Pauline");
        assert_eq!(json["diners"], "2");
        assert_eq!(json["dateTime"], "2030-01-15 1900");
        assert_eq!(json["tags"], serde_json::json!(["anniversary"]));
    }

    #[test]
    fn test_duplicate_reservations_rejected() {
        let stored = JsonSerializableReserveMate {
            reservations: vec![adapted(&alice()), adapted(&alice())],
        };
        assert_eq!(
            stored.to_model(),
            Err(MESSAGE_DUPLICATE_RESERVATION.to_string())
        );
    }

    #[test]
    fn test_typical_book_round_trip_preserves_order() {
        let book = typical_reserve_mate();
        let stored = JsonSerializableReserveMate::from(&book);
        assert_eq!(stored.to_model(), Ok(book));
    }
}
