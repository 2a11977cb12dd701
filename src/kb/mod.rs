/*!
A knowledge base, aka. a set of clauses which answers queries by refutation.

Clauses are [told](KnowledgeBase::tell) to a knowledge base, and a knowledge base may be [asked](KnowledgeBase::ask) whether some literal follows from the clauses it has been told.

To answer whether a literal *l* follows from a set of clauses 𝐅, the unit clause -*l* is added to (a copy of) 𝐅 and [resolution](crate::procedures::resolution) is applied to every pair of clauses, with each resolvent added to the set, until either:
- The empty clause is derived, in which case 𝐅 and -*l* are inconsistent, and so *l* follows from 𝐅.
- No clause is derived which is not already in the set, in which case *l* does not follow from 𝐅.

Valid clauses carry no information, and so are never stored or kept as resolvents.

As the number of clauses derived may grow quickly, the number of (distinct) clauses derived when answering a query is bounded by the [derivation limit](crate::config::Config::derivation_limit).

```rust
# use maze_logic::kb::{KnowledgeBase, TellOk};
# use maze_logic::structures::clause::MazeClause;
# use maze_logic::structures::literal::MazeLiteral;
let mut kb = KnowledgeBase::default();

let wumpus = MazeLiteral::fresh(("W", (2, 2)), true);
let stench = MazeLiteral::fresh(("S", (2, 1)), true);

// A wumpus at (2, 2) means a stench at (2, 1).
assert_eq!(kb.tell(MazeClause::new([wumpus.negate(), stench.clone()])), TellOk::Added);
assert_eq!(kb.tell(MazeClause::new([wumpus.negate(), stench.clone()])), TellOk::Duplicate);

// No stench at (2, 1).
assert_eq!(kb.tell(MazeClause::from(stench.negate())), TellOk::Added);

assert_eq!(kb.ask(&wumpus.negate()), Ok(true));
assert_eq!(kb.ask(&wumpus), Ok(false));
```
*/

use std::collections::HashSet;

use crate::{
    config::{Config, DerivationCount, PivotPolicy},
    misc::log::targets::{self},
    procedures::resolution::resolve_with,
    structures::{clause::MazeClause, literal::MazeLiteral},
    types::err::{self},
};

/// Ok results of telling a clause to a knowledge base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TellOk {
    /// The clause was added.
    Added,

    /// The clause was already present.
    Duplicate,

    /// The clause is valid, and so was not added.
    Tautology,
}

/// A set of clauses, together with a configuration.
#[derive(Clone, Debug, Default)]
pub struct KnowledgeBase {
    /// The clauses told to the knowledge base.
    clauses: HashSet<MazeClause>,

    /// The configuration used when answering queries.
    pub config: Config,
}

impl KnowledgeBase {
    /// A knowledge base without any clauses.
    pub fn from_config(config: Config) -> Self {
        KnowledgeBase {
            clauses: HashSet::default(),
            config,
        }
    }

    /// Adds a clause to the knowledge base, unless the clause is valid.
    pub fn tell(&mut self, clause: MazeClause) -> TellOk {
        if clause.is_valid() {
            log::trace!(target: targets::KNOWLEDGE_BASE, "Skipped tautology");
            return TellOk::Tautology;
        }

        log::trace!(target: targets::KNOWLEDGE_BASE, "Told: {clause}");
        match self.clauses.insert(clause) {
            true => TellOk::Added,
            false => TellOk::Duplicate,
        }
    }

    /// Whether the literal follows from the clauses of the knowledge base.
    ///
    /// The clauses of the knowledge base are unchanged, and in particular no derived clause is kept.
    ///
    /// Clause pairs with multiple pivots are never resolved, whatever the configured [pivot policy](PivotPolicy).
    pub fn ask(&self, query: &MazeLiteral) -> Result<bool, err::ErrorKind> {
        if self.clauses.contains(&MazeClause::empty()) {
            log::info!(target: targets::KNOWLEDGE_BASE, "{query} follows from the empty clause");
            return Ok(true);
        }

        let mut clauses = self.clauses.clone();
        clauses.insert(MazeClause::from(query.negate()));

        // Pairs of clauses from before the frontier have already been resolved.
        let mut frontier = clauses.iter().cloned().collect::<Vec<_>>();

        // Cancelling multiple pivots derives clauses which do not follow.
        let mut resolution_config = self.config.clone();
        resolution_config.multiple_pivots.value = PivotPolicy::Reject;

        let limit = self.config.derivation_limit.value;
        let mut derivations: DerivationCount = 0;
        let mut round = 0;

        loop {
            round += 1;
            log::debug!(target: targets::KNOWLEDGE_BASE, "Round {round} with {} clauses, {} fresh", clauses.len(), frontier.len());

            let mut fresh: HashSet<MazeClause> = HashSet::default();

            for c1 in &frontier {
                for c2 in &clauses {
                    for resolvent in resolve_with(&resolution_config, c1, c2) {
                        if resolvent.is_empty() {
                            log::info!(target: targets::KNOWLEDGE_BASE, "{query} follows, after {derivations} derivations");
                            return Ok(true);
                        }

                        if resolvent.is_valid() || clauses.contains(&resolvent) {
                            continue;
                        }

                        if fresh.insert(resolvent) {
                            derivations += 1;
                            if derivations > limit {
                                log::info!(target: targets::KNOWLEDGE_BASE, "Derivation limit reached when asking {query}");
                                return Err(err::KnowledgeBaseError::DerivationLimit(limit).into());
                            }
                        }
                    }
                }
            }

            if fresh.is_empty() {
                log::info!(target: targets::KNOWLEDGE_BASE, "{query} does not follow, after {derivations} derivations");
                return Ok(false);
            }

            frontier = fresh.iter().cloned().collect();
            clauses.extend(fresh);
        }
    }

    /// The number of clauses in the knowledge base.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the knowledge base has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether the knowledge base contains the clause.
    pub fn contains(&self, clause: &MazeClause) -> bool {
        self.clauses.contains(clause)
    }

    /// An iterator over all clauses in the knowledge base, order is not guaranteed.
    pub fn clauses(&self) -> impl Iterator<Item = &MazeClause> {
        self.clauses.iter()
    }
}

impl Extend<MazeClause> for KnowledgeBase {
    fn extend<I: IntoIterator<Item = MazeClause>>(&mut self, iter: I) {
        for clause in iter {
            self.tell(clause);
        }
    }
}
