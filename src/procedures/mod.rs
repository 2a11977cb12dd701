//! Procedures which derive clauses from clauses.
//!
//! At present the only procedure is [resolution], which is used by a [knowledge base](crate::kb) to answer queries.

pub mod resolution;
