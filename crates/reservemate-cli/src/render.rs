// crates/reservemate-cli/src/render.rs - Terminal output for reservations and feedback
use console::style;
use serde_json::{Value, json};

use reservemate_core::Reservation;

/// Two-line card for one reservation at its displayed index
pub fn reservation_card(index: usize, reservation: &Reservation) -> String {
    let occasions: Vec<String> = reservation
        .sorted_tags()
        .iter()
        .map(|tag| style(tag.as_str()).cyan().to_string())
        .collect();

    let mut header = format!("{}. {}", index, style(reservation.name()).bold());
    if !occasions.is_empty() {
        header.push_str("  ");
        header.push_str(&occasions.join(" "));
    }

    format!(
        "{header}\n   {} | {} | {} diners | {}",
        reservation.phone(),
        reservation.email(),
        reservation.diners(),
        reservation.date_time()
    )
}

/// Cards for every reservation, numbered from 1
pub fn reservation_list<'a>(reservations: impl IntoIterator<Item = &'a Reservation>) -> String {
    let cards: Vec<String> = reservations
        .into_iter()
        .enumerate()
        .map(|(i, reservation)| reservation_card(i + 1, reservation))
        .collect();

    if cards.is_empty() {
        style("(no reservations)").dim().to_string()
    } else {
        cards.join("\n")
    }
}

/// Machine-readable form, matching the data file field names
pub fn reservation_json(index: usize, reservation: &Reservation) -> Value {
    json!({
        "index": index,
        "name": reservation.name().as_str(),
        "phone": reservation.phone().as_str(),
        "email": reservation.email().as_str(),
        "diners": reservation.diners().count(),
        "dateTime": reservation.date_time().to_string(),
        "tags": reservation
            .sorted_tags()
            .iter()
            .map(|tag| tag.as_str())
            .collect::<Vec<_>>(),
    })
}

pub fn success(message: &str) -> String {
    style(message).green().to_string()
}

pub fn failure(message: &str) -> String {
    style(message).red().to_string()
}
