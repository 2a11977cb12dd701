//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! A clause is stored as a map from propositions to polarities, and so each proposition appears (at most) once in a clause.
//!
//! ```rust
//! # use maze_logic::structures::clause::MazeClause;
//! # use maze_logic::structures::literal::MazeLiteral;
//! # use maze_logic::structures::proposition::Proposition;
//! let clause = MazeClause::new([
//!     MazeLiteral::fresh(("X", (1, 1)), true),
//!     MazeLiteral::fresh(("X", (2, 1)), true),
//!     MazeLiteral::fresh(("Y", (1, 2)), false),
//! ]);
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.get_prop(&Proposition::new("X", (1, 1))), Some(true));
//! assert_eq!(clause.get_prop(&Proposition::new("Y", (1, 2))), Some(false));
//! assert_eq!(clause.get_prop(&Proposition::new("X", (2, 2))), None);
//! assert!(!clause.is_empty());
//! ```
//!
//! Clauses are canonical on construction:
//! - Repeated literals are kept once.
//! - If some proposition occurs with both polarities the clause is always true, and collapses to *the* valid clause, which contains no literals.
//!
//! ```rust
//! # use maze_logic::structures::clause::MazeClause;
//! # use maze_logic::structures::literal::MazeLiteral;
//! let clause = MazeClause::new([
//!     MazeLiteral::fresh(("X", (1, 1)), true),
//!     MazeLiteral::fresh(("Y", (2, 1)), true),
//!     MazeLiteral::fresh(("X", (1, 1)), false),
//! ]);
//!
//! assert!(clause.is_valid());
//! assert_eq!(clause.size(), 0);
//! assert_eq!(clause, MazeClause::valid());
//! ```
//!
//! - The empty clause is always false (never true), and represents a contradiction.
//! - The valid clause is not empty, even though it contains no literals.

use std::{
    collections::{hash_map::DefaultHasher, HashMap, HashSet},
    hash::{Hash, Hasher},
};

use crate::{
    misc::log::targets::{self},
    procedures::resolution,
    structures::{literal::MazeLiteral, proposition::Proposition},
};

/// A disjunction of literals, with propositions mapped to their polarity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MazeClause {
    /// The polarity of each proposition in the clause.
    props: HashMap<Proposition, bool>,

    /// Whether the clause is (logically equivalent to) true.
    valid: bool,
}

impl MazeClause {
    /// A clause containing each of the given literals.
    ///
    /// Literals are read in order.
    /// Repeated literals are skipped, and on reading a literal whose negation has already been read the valid clause is returned.
    pub fn new<L: Into<MazeLiteral>>(literals: impl IntoIterator<Item = L>) -> Self {
        let mut props: HashMap<Proposition, bool> = HashMap::default();

        for literal in literals {
            let (proposition, polarity) = literal.into().into_parts();
            match props.get(&proposition) {
                None => {
                    props.insert(proposition, polarity);
                }

                Some(stored) if *stored == polarity => {}

                Some(_) => {
                    log::trace!(target: targets::CLAUSE, "{proposition} occurs with both polarities");
                    return MazeClause::valid();
                }
            }
        }

        MazeClause {
            props,
            valid: false,
        }
    }

    /// The empty clause, aka. a contradiction.
    pub fn empty() -> Self {
        MazeClause {
            props: HashMap::default(),
            valid: false,
        }
    }

    /// The valid clause, aka. a tautology.
    pub fn valid() -> Self {
        MazeClause {
            props: HashMap::default(),
            valid: true,
        }
    }

    /// Returns:
    /// - None, if the proposition is not in the clause.
    /// - Some(true), if the proposition is positive in the clause.
    /// - Some(false), if the proposition is negated in the clause.
    pub fn get_prop(&self, proposition: &Proposition) -> Option<bool> {
        self.props.get(proposition).copied()
    }

    /// Whether the clause is logically equivalent to true.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether the clause is the empty clause.
    ///
    /// The valid clause is not empty.
    pub fn is_empty(&self) -> bool {
        !self.valid && self.props.is_empty()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.props.len()
    }

    /// Whether the clause contains the given literal.
    pub fn contains(&self, literal: &MazeLiteral) -> bool {
        self.get_prop(literal.proposition()) == Some(literal.polarity())
    }

    /// An iterator over all literals in the clause, order is not guaranteed.
    pub fn literals(&self) -> impl Iterator<Item = MazeLiteral> + '_ {
        self.props
            .iter()
            .map(|(proposition, polarity)| MazeLiteral::fresh(proposition, *polarity))
    }

    /// An iterator over all propositions in the clause, order is not guaranteed.
    pub fn propositions(&self) -> impl Iterator<Item = &Proposition> {
        self.props.keys()
    }

    /// The literals of the clause, sorted.
    fn sorted_literals(&self) -> Vec<MazeLiteral> {
        let mut literals = self.literals().collect::<Vec<_>>();
        literals.sort_unstable();
        literals
    }

    /// The [resolution](crate::procedures::resolution) of two clauses, on the default configuration.
    pub fn resolve(c1: &MazeClause, c2: &MazeClause) -> HashSet<MazeClause> {
        resolution::resolve(c1, c2)
    }
}

impl Hash for MazeClause {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Map iteration order is arbitrary, so combine per-literal digests with a commutative sum.
        let digest = self
            .props
            .iter()
            .map(|literal| {
                let mut hasher = DefaultHasher::new();
                literal.hash(&mut hasher);
                hasher.finish()
            })
            .fold(0_u64, u64::wrapping_add);

        state.write_usize(self.props.len());
        state.write_u64(digest);
    }
}

impl std::fmt::Display for MazeClause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.valid {
            return write!(f, "⊤");
        }
        if self.props.is_empty() {
            return write!(f, "⊥");
        }

        let literals = self
            .sorted_literals()
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", literals.join(" ∨ "))
    }
}

impl FromIterator<MazeLiteral> for MazeClause {
    fn from_iter<I: IntoIterator<Item = MazeLiteral>>(iter: I) -> Self {
        MazeClause::new(iter)
    }
}

impl From<Vec<MazeLiteral>> for MazeClause {
    fn from(literals: Vec<MazeLiteral>) -> Self {
        MazeClause::new(literals)
    }
}

impl From<MazeLiteral> for MazeClause {
    fn from(literal: MazeLiteral) -> Self {
        MazeClause::new([literal])
    }
}
