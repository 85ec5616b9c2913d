// crates/reservemate-core/src/index.rs - Positions into the displayed list

use std::fmt;

/// A position in the filtered reservation list
///
/// Users type one-based indices; internal lookups are zero-based. Keeping
/// both behind one type avoids off-by-one slips at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    /// `None` for 0, which is not a valid one-based index
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(|zero_based| Self { zero_based })
    }

    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Index::from_one_based(0), None);

        let first = Index::from_one_based(1).unwrap();
        assert_eq!(first.zero_based(), 0);
        assert_eq!(first, Index::from_zero_based(0));
        assert_eq!(Index::from_zero_based(4).one_based(), 5);
        assert_eq!(Index::from_zero_based(4).to_string(), "5");
    }
}
