/*!
Binary resolution of clauses.

- The *resolution* of two formulas φ ∨ *p* and ψ ∨ *-p* is the formula φ ∨ ψ.
  + Here:
    - φ and ψ stand for arbitrary disjunctions, such as *q ∨ r ∨ s* and *t*, etc.
    - *p* is called the 'pivot' for the instance of resolution.
      More generally:
      * A *pivot* for a pair of clauses *c₁* and *c₂* is some proposition *p* with one polarity in *c₁* and the other polarity in *c₂*.

The resolution of two clauses is given as a set of clauses, which contains at most one clause:
- If the clauses have no pivot, resolution does not apply, and the set is empty.
- If the clauses have exactly one pivot, the set contains the clause made of every literal of either clause other than those on the pivot.
  If there are no such literals, the clause is the empty clause.
- If the clauses have more than one pivot the set is determined by the [pivot policy](crate::config::PivotPolicy) of the configuration.
  By default, the set is empty.

Note, an empty set of clauses is different to a set containing the empty clause.

```rust
# use maze_logic::procedures::resolution::resolve;
# use maze_logic::structures::clause::MazeClause;
# use maze_logic::structures::literal::MazeLiteral;
let x = MazeLiteral::fresh(("X", (1, 1)), true);

let resolvents = resolve(&MazeClause::from(x.clone()), &MazeClause::from(x.negate()));
assert!(resolvents.contains(&MazeClause::empty()));

let resolvents = resolve(&MazeClause::from(x.clone()), &MazeClause::from(x.clone()));
assert!(resolvents.is_empty());
```
*/

use std::collections::HashSet;

use crate::{
    config::{Config, PivotPolicy},
    misc::log::targets::{self},
    structures::{clause::MazeClause, proposition::Proposition},
};

/// The resolution of two clauses, on the default configuration.
pub fn resolve(c1: &MazeClause, c2: &MazeClause) -> HashSet<MazeClause> {
    resolve_with(&Config::default(), c1, c2)
}

/// The resolution of two clauses, with multiple pivots handled as configured.
pub fn resolve_with(config: &Config, c1: &MazeClause, c2: &MazeClause) -> HashSet<MazeClause> {
    let mut results = HashSet::default();

    let pivots = pivots(c1, c2);
    match pivots.len() {
        0 => {
            log::trace!(target: targets::RESOLUTION, "No pivot for {c1} and {c2}");
            return results;
        }

        1 => {}

        count => match config.multiple_pivots.value {
            PivotPolicy::Reject => {
                log::trace!(target: targets::RESOLUTION, "{count} pivots for {c1} and {c2}");
                return results;
            }

            PivotPolicy::CancelAll => {}
        },
    }

    let resolvent = c1
        .literals()
        .chain(c2.literals())
        .filter(|literal| !pivots.contains(literal.proposition()))
        .collect::<MazeClause>();

    log::trace!(target: targets::RESOLUTION, "{c1} and {c2} resolve to {resolvent}");
    results.insert(resolvent);
    results
}

/// Each proposition with one polarity in `c1` and the other polarity in `c2`.
pub fn pivots<'c>(c1: &'c MazeClause, c2: &MazeClause) -> HashSet<&'c Proposition> {
    c1.propositions()
        .filter(
            |proposition| match (c1.get_prop(proposition), c2.get_prop(proposition)) {
                (Some(polarity), Some(other)) => polarity != other,
                _ => false,
            },
        )
        .collect()
}
