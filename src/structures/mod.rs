//! Key structures: propositions, literals, and clauses.
//!
//! # Other structures without an implementation.
//!
//! ## Formulas
//!
//! A formula is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//! The clauses stored in a [knowledge base](crate::kb) are a formula, and so a formula is given no dedicated representation.
//!
//! ## Grids
//!
//! Each proposition is about some [location](proposition::Location) on a grid.
//! The bounds of the grid, and which symbols are meaningful, are up to whatever tells clauses to a knowledge base.

pub mod clause;
pub mod literal;
pub mod proposition;
