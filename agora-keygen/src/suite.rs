//! Capabilities a group has to provide before keys can be built over it.
//!
//! The arithmetic itself lives in the curve crates; a [`Suite`] only glues a
//! scalar type, a point type and a source of randomness together.

use rand_core::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use thiserror::Error;
use zeroize::Zeroize;

use std::fmt::Debug;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("random stream failure: {0}")]
    Rng(#[from] rand_core::Error),
    #[error("invalid encoding length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid encoding")]
    InvalidEncoding,
    #[error("value out of range")]
    OutOfRange,
    #[error("arithmetic failure: {0}")]
    Arithmetic(&'static str),
}

/// A cryptographically secure source of random bytes.
pub trait RandomStream: RngCore + CryptoRng {}

impl<R: RngCore + CryptoRng + ?Sized> RandomStream for R {}

/// Element of the private key domain.
pub trait Scalar: Clone + PartialEq + ConstantTimeEq + Debug + Zeroize + Send + Sync {
    /// Samples a scalar uniformly from the whole domain.
    ///
    /// The receiver only selects the domain, its value is ignored.
    fn pick(&self, stream: &mut dyn RandomStream) -> Result<Self, SuiteError>;
    fn marshal_binary(&self) -> Vec<u8>;
    /// Overwrites `self` with the decoded value. On error `self` is left
    /// untouched.
    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<(), SuiteError>;
}

/// Element of the public key domain.
pub trait Point: Clone + PartialEq + Debug + Send + Sync {
    type Scalar: Scalar;

    fn mul(&self, scalar: &Self::Scalar) -> Result<Self, SuiteError>;
    fn marshal_binary(&self) -> Vec<u8>;
    /// Overwrites `self` with the decoded value. Implementations must reject
    /// encodings that do not describe an element of the group.
    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<(), SuiteError>;
}

/// Optional, suite specific derivation of private scalars.
pub trait Generator<S> {
    /// Derives a fresh private scalar from `stream`.
    ///
    /// # Panics
    ///
    /// This is infallible by contract. An implementation that cannot produce
    /// a scalar (e.g. because `stream` fails) has no valid fallback and
    /// panics; that indicates a broken suite, never bad caller input.
    fn create_key(&self, stream: &mut dyn RandomStream) -> S;
}

pub trait Suite: Send + Sync {
    type Scalar: Scalar;
    type Point: Point<Scalar = Self::Scalar>;
    type Stream: RandomStream + 'static;

    fn name(&self) -> &'static str;
    /// Zero scalar of this domain.
    fn create_scalar(&self) -> Self::Scalar;
    /// Identity point of this domain.
    fn create_point(&self) -> Self::Point;
    fn base_point(&self) -> Self::Point;
    fn random_stream(&self) -> Self::Stream;

    /// Returns the accelerated key derivation if this suite has one.
    fn generator(&self) -> Option<&dyn Generator<Self::Scalar>> {
        None
    }
}
