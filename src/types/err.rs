//! Error types used in the library.
//!
//! - Construction of clauses and resolution never fail: a clause collapsing to the valid clause or to the empty clause are both expected outcomes, and are noted through the state of the clause.
//! - Errors arise only from configuration and from a knowledge base when the work needed to answer a query exceeds the configured bound.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::config::DerivationCount;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    KnowledgeBase(KnowledgeBaseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::KnowledgeBase(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors when setting configuration options.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of the named option.
    OutOfBounds(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds(name) => write!(f, "Value for {name} out of bounds"),
        }
    }
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Noted errors when answering a query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KnowledgeBaseError {
    /// Saturation derived more clauses than permitted, and so the query was abandoned.
    DerivationLimit(DerivationCount),
}

impl std::fmt::Display for KnowledgeBaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DerivationLimit(limit) => {
                write!(f, "Derivation limit of {limit} reached before saturation")
            }
        }
    }
}

impl From<KnowledgeBaseError> for ErrorKind {
    fn from(e: KnowledgeBaseError) -> Self {
        ErrorKind::KnowledgeBase(e)
    }
}
