//! Propositional clauses over grid-located symbols, and binary resolution between them.
//!
//! maze_logic is a small library for reasoning about grid worlds (mazes, caves, etc.) with propositional logic.
//! Facts such as 'there is a pit at (2, 3)' are [propositions](structures::proposition), which are paired with a polarity to form [literals](structures::literal), which are in turn collected into [clauses](structures::clause).
//!
//! # Orientation
//!
//! - The [structures] give the representation of propositions, literals, and clauses.
//!   Of note, clauses are canonical on construction: duplicate literals are merged, and a clause containing some proposition with both polarities collapses to the (unique) valid clause.
//! - The [resolution procedure](procedures::resolution) derives new clauses from pairs of clauses.
//! - A [knowledge base](kb) stores clauses and answers queries by refutation, repeatedly applying resolution until either the empty clause is derived or nothing new follows.
//! - The [configuration](config) has options for how resolution treats clause pairs with multiple pivots, and a bound on the work done by a knowledge base.
//!
//! # Examples
//!
//! + Resolve two clauses.
//!
//! ```rust
//! # use maze_logic::procedures::resolution::resolve;
//! # use maze_logic::structures::clause::MazeClause;
//! # use maze_logic::structures::literal::MazeLiteral;
//! let pit_or_wumpus = MazeClause::new([
//!     MazeLiteral::fresh(("P", (1, 1)), true),
//!     MazeLiteral::fresh(("W", (1, 1)), true),
//! ]);
//! let no_pit = MazeClause::new([MazeLiteral::fresh(("P", (1, 1)), false)]);
//!
//! let resolvents = resolve(&pit_or_wumpus, &no_pit);
//! assert_eq!(resolvents.len(), 1);
//! assert!(resolvents.contains(&MazeClause::new([MazeLiteral::fresh(("W", (1, 1)), true)])));
//! ```
//!
//! + Ask a knowledge base whether a cell is safe.
//!
//! ```rust
//! # use maze_logic::kb::KnowledgeBase;
//! # use maze_logic::structures::clause::MazeClause;
//! # use maze_logic::structures::literal::MazeLiteral;
//! let mut kb = KnowledgeBase::default();
//!
//! // No breeze at (1, 1), so no pit at (1, 2).
//! kb.tell(MazeClause::new([
//!     MazeLiteral::fresh(("B", (1, 1)), true),
//!     MazeLiteral::fresh(("P", (1, 2)), false),
//! ]));
//! kb.tell(MazeClause::new([MazeLiteral::fresh(("B", (1, 1)), false)]));
//!
//! assert_eq!(kb.ask(&MazeLiteral::fresh(("P", (1, 2)), false)), Ok(true));
//! assert_eq!(kb.ask(&MazeLiteral::fresh(("P", (2, 1)), false)), Ok(false));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made during clause construction, resolution, and when answering queries.
//! The targets are listed in [misc::log], and so, for example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/) logs from resolution alone can be found with `RUST_LOG=resolution=trace …`.

pub mod config;
pub mod kb;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
