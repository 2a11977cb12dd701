/*!
What to do when resolving a pair of clauses which have more than one pivot.

A *pivot* for a pair of clauses *c₁* and *c₂* is some proposition *p* such that *p* has one polarity in *c₁* and the other polarity in *c₂*.
For example, both *p* and *q* are pivots for *p ∨ -q* and *-p ∨ q*.

Resolving on any single pivot of such a pair gives a clause which contains some other pivot with both polarities, and so a clause which is valid.
Cancelling every pivot at once gives a clause, though a clause which does not follow from the pair.
*/

use std::str::FromStr;

/// Policies for clause pairs with multiple pivots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PivotPolicy {
    /// Resolution of the pair gives no clause.
    Reject = 0,

    /// Every pivot is cancelled, and the remaining literals of the pair form a clause.
    CancelAll,
}

impl std::fmt::Display for PivotPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "Reject"),
            Self::CancelAll => write!(f, "CancelAll"),
        }
    }
}

impl PivotPolicy {
    /// The minimum PivotPolicy type.
    pub const MIN: PivotPolicy = PivotPolicy::Reject;

    /// The maximum PivotPolicy type.
    pub const MAX: PivotPolicy = PivotPolicy::CancelAll;
}

impl FromStr for PivotPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Reject" => Ok(Self::Reject),

            "CancelAll" => Ok(Self::CancelAll),

            _unknown_string => Err(()),
        }
    }
}
