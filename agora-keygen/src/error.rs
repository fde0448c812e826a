use crate::suite::SuiteError;
use thiserror::Error;

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Private,
    Public,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private => write!(f, "private"),
            Self::Public => write!(f, "public"),
        }
    }
}

#[derive(Error, Debug)]
pub enum KeyError {
    #[error("cannot create {0} key from an empty byte array")]
    InvalidInput(KeyKind),
    #[error("failed to decode {kind} key: {source}")]
    Decoding {
        kind: KeyKind,
        #[source]
        source: SuiteError,
    },
    #[error("failed to derive key pair: {0}")]
    KeyDerivation(#[source] SuiteError),
}
