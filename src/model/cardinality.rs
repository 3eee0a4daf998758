//! Normalized cardinalities.

use std::fmt;

/// One end of a cardinality range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Finite(u64),
    /// Written `*`
    Unbounded,
}

impl Bound {
    pub fn is_unbounded(self) -> bool {
        matches!(self, Bound::Unbounded)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Finite(n) => write!(f, "{n}"),
            Bound::Unbounded => f.write_str("*"),
        }
    }
}

/// A `(lower, upper)` pair.
///
/// The four surface forms normalize as:
///
/// | source    | lower      | upper      |
/// |-----------|------------|------------|
/// | `[n]`     | n          | n          |
/// | `[n..m]`  | n          | m          |
/// | `[n..*]`  | n          | unbounded  |
/// | `[*]`     | unbounded  | unbounded  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cardinality {
    pub lower: Bound,
    pub upper: Bound,
}

impl Cardinality {
    /// `[n]`
    pub fn exactly(n: u64) -> Self {
        Self {
            lower: Bound::Finite(n),
            upper: Bound::Finite(n),
        }
    }

    /// `[n..m]`
    pub fn range(lower: u64, upper: u64) -> Self {
        Self {
            lower: Bound::Finite(lower),
            upper: Bound::Finite(upper),
        }
    }

    /// `[n..*]`
    pub fn at_least(lower: u64) -> Self {
        Self {
            lower: Bound::Finite(lower),
            upper: Bound::Unbounded,
        }
    }

    /// `[*]`
    pub fn many() -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }

    /// False for `[n..m]` with `m < n`, and for an unbounded lower bound
    /// under a finite upper one.
    pub fn is_well_ordered(&self) -> bool {
        match (self.lower, self.upper) {
            (Bound::Finite(lower), Bound::Finite(upper)) => lower <= upper,
            (Bound::Unbounded, Bound::Finite(_)) => false,
            _ => true,
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lower == self.upper {
            write!(f, "[{}]", self.lower)
        } else {
            write!(f, "[{}..{}]", self.lower, self.upper)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        assert_eq!(Cardinality::exactly(3).to_string(), "[3]");
        assert_eq!(Cardinality::range(0, 1).to_string(), "[0..1]");
        assert_eq!(Cardinality::at_least(2).to_string(), "[2..*]");
        assert_eq!(Cardinality::many().to_string(), "[*]");
    }

    #[test]
    fn test_well_ordered() {
        assert!(Cardinality::range(1, 5).is_well_ordered());
        assert!(!Cardinality::range(5, 1).is_well_ordered());
        assert!(Cardinality::at_least(7).is_well_ordered());
        assert!(Cardinality::many().is_well_ordered());
        let inverted = Cardinality {
            lower: Bound::Unbounded,
            upper: Bound::Finite(3),
        };
        assert!(!inverted.is_well_ordered());
    }
}
