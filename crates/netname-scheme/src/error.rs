//! Error types for scheme and capability lookups.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown interface naming scheme '{0}'")]
    UnknownScheme(String),

    #[error("unknown naming scheme capability '{0}'")]
    UnknownFlag(String),
}

pub type Result<T> = std::result::Result<T, Error>;
