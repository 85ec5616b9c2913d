// crates/reservemate-core/src/model/filter.rs - Display filters over the reservation list

use crate::reservation::Reservation;

/// Predicate deciding which reservations are currently shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReservationFilter {
    #[default]
    ShowAll,

    /// Any keyword equals (ignoring case) a whole word of the customer name.
    /// An empty keyword list matches nothing.
    NameContainsKeywords(Vec<String>),
}

impl ReservationFilter {
    pub fn name_contains_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NameContainsKeywords(keywords.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, reservation: &Reservation) -> bool {
        match self {
            Self::ShowAll => true,
            Self::NameContainsKeywords(keywords) => keywords
                .iter()
                .any(|keyword| contains_word_ignore_case(reservation.name().as_str(), keyword)),
        }
    }
}

fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim();
    if word.is_empty() {
        return false;
    }

    let word = word.to_lowercase();
    sentence
        .split_whitespace()
        .any(|candidate| candidate.to_lowercase() == word)
}

/// Read-only window onto the reservations matching the active filter
///
/// Holds positions into the backing slice rather than copies, so it always
/// reflects the book it was taken from and preserves its order. Indices
/// accepted by `get` are zero-based.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    source: &'a [Reservation],
    positions: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub(crate) fn new(source: &'a [Reservation], filter: &ReservationFilter) -> Self {
        let positions = source
            .iter()
            .enumerate()
            .filter(|(_, reservation)| filter.matches(reservation))
            .map(|(i, _)| i)
            .collect();

        Self { source, positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, zero_based: usize) -> Option<&'a Reservation> {
        self.positions
            .get(zero_based)
            .map(|&position| &self.source[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Reservation> + '_ {
        self.positions.iter().map(|&position| &self.source[position])
    }

    pub fn to_vec(&self) -> Vec<Reservation> {
        self.iter().cloned().collect()
    }
}
