#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]
//! Key pair generation over pluggable groups.
//!
//! A [`Suite`] describes the group: its scalars, its points, the base point
//! and where randomness comes from. [`KeyGenerator`] binds one suite and
//! hands out [`PrivateKey`] / [`PublicKey`] handles, either freshly generated
//! or parsed back from their byte encoding.
//!
//! ```ignore
//! let keygen = KeyGenerator::from(Secp256k1Suite);
//! let (private, public) = keygen.generate_pair()?;
//! let restored = keygen.public_key_from_bytes(&public.to_bytes())?;
//! assert_eq!(restored, public);
//! ```

#[cfg(test)]
mod macros;

#[cfg(any(test, feature = "bls-suite"))]
mod bls_suite;
#[cfg(any(test, feature = "ed25519-suite"))]
mod ed25519_suite;
#[cfg(any(test, feature = "k256-suite"))]
mod k256_suite;

mod error;
mod keygen;
mod keys;
mod pair;
pub mod suite;

pub use error::{KeyError, KeyKind};
pub use keygen::KeyGenerator;
pub use keys::{PrivateKey, PublicKey};
pub use pair::{key_pair_from_stream, new_key_pair, Pair};
pub use suite::{Generator, Point, RandomStream, Scalar, Suite, SuiteError};

#[cfg(any(test, feature = "bls-suite"))]
pub use bls_suite::Bls12381G1Suite;
#[cfg(any(test, feature = "ed25519-suite"))]
pub use ed25519_suite::Ed25519Suite;
#[cfg(any(test, feature = "k256-suite"))]
pub use k256_suite::Secp256k1Suite;
