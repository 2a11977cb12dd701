//! Literals are propositions paired with a (boolean) polarity.
//!
//! The polarity of a literal is `true` when the proposition is asserted and `false` when the proposition is negated.
//!
//! An example:
//!
//! ```rust
//! # use maze_logic::structures::literal::MazeLiteral;
//! # use maze_logic::structures::proposition::Proposition;
//! let literal = MazeLiteral::fresh(("X", (1, 1)), true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.proposition(), &Proposition::new("X", (1, 1)));
//!
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.negate().negate(), literal);
//! ```
//!
//! Literals are ordered by proposition and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.

use crate::structures::proposition::Proposition;

/// The representation of a literal as a proposition paired with a boolean.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MazeLiteral {
    /// The proposition of a literal.
    proposition: Proposition,

    /// The polarity of a literal.
    polarity: bool,
}

impl MazeLiteral {
    /// A fresh literal, specified by pairing a proposition with a boolean.
    pub fn fresh(proposition: impl Into<Proposition>, polarity: bool) -> Self {
        Self {
            proposition: proposition.into(),
            polarity,
        }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            proposition: self.proposition.clone(),
            polarity: !self.polarity,
        }
    }

    /// The proposition of the literal.
    pub fn proposition(&self) -> &Proposition {
        &self.proposition
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The literal as a (proposition, polarity) pair.
    pub fn into_parts(self) -> (Proposition, bool) {
        (self.proposition, self.polarity)
    }
}

impl PartialOrd for MazeLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MazeLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.proposition == other.proposition {
            self.polarity.cmp(&other.polarity)
        } else {
            self.proposition.cmp(&other.proposition)
        }
    }
}

impl std::fmt::Display for MazeLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.proposition),
            false => write!(f, "-{}", self.proposition),
        }
    }
}

impl<P: Into<Proposition>> From<(P, bool)> for MazeLiteral {
    fn from((proposition, polarity): (P, bool)) -> Self {
        MazeLiteral::fresh(proposition, polarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_precedes_assertion() {
        let positive = MazeLiteral::fresh(("X", (1, 1)), true);
        assert!(positive.negate() < positive);

        let other = MazeLiteral::fresh(("Y", (1, 1)), false);
        assert!(positive < other);
    }

    #[test]
    fn display() {
        let literal = MazeLiteral::fresh(("P", (2, 3)), false);
        assert_eq!(literal.to_string(), "-P(2,3)");
        assert_eq!(literal.negate().to_string(), "P(2,3)");
    }

    #[test]
    fn from_pair() {
        let literal = MazeLiteral::from((("S", (0, 4)), true));
        assert_eq!(literal, MazeLiteral::fresh(("S", (0, 4)), true));
    }
}
