use crate::error::KeyError;
use crate::suite::{Point, Scalar, Suite};

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use std::fmt;
use std::sync::Arc;

/// Private scalar bound to the suite it was created under.
///
/// The scalar never leaves the handle except through [`to_bytes`], and it is
/// wiped when the handle is dropped.
///
/// [`to_bytes`]: PrivateKey::to_bytes
pub struct PrivateKey<S: Suite> {
    suite: Arc<S>,
    value: S::Scalar,
}

impl<S: Suite> PrivateKey<S> {
    pub(crate) fn new(suite: Arc<S>, value: S::Scalar) -> Self {
        Self { suite, value }
    }

    pub fn suite(&self) -> &Arc<S> {
        &self.suite
    }

    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.value.marshal_binary())
    }

    /// Derives the public key belonging to this private key.
    pub fn public_key(&self) -> Result<PublicKey<S>, KeyError> {
        let point = self
            .suite
            .base_point()
            .mul(&self.value)
            .map_err(KeyError::KeyDerivation)?;
        Ok(PublicKey::new(Arc::clone(&self.suite), point))
    }
}

impl<S: Suite> Clone for PrivateKey<S> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.suite), self.value.clone())
    }
}

impl<S: Suite> PartialEq for PrivateKey<S> {
    fn eq(&self, other: &Self) -> bool {
        self.value.ct_eq(&other.value).into()
    }
}

impl<S: Suite> Eq for PrivateKey<S> {}

impl<S: Suite> fmt::Debug for PrivateKey<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("suite", &self.suite.name())
            .finish_non_exhaustive()
    }
}

impl<S: Suite> Drop for PrivateKey<S> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Public point bound to the suite it was created under.
pub struct PublicKey<S: Suite> {
    suite: Arc<S>,
    value: S::Point,
}

impl<S: Suite> PublicKey<S> {
    pub(crate) fn new(suite: Arc<S>, value: S::Point) -> Self {
        Self { suite, value }
    }

    pub fn suite(&self) -> &Arc<S> {
        &self.suite
    }

    pub fn point(&self) -> &S::Point {
        &self.value
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.value.marshal_binary()
    }
}

impl<S: Suite> Clone for PublicKey<S> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.suite), self.value.clone())
    }
}

impl<S: Suite> PartialEq for PublicKey<S> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<S: Suite> fmt::Debug for PublicKey<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("suite", &self.suite.name())
            .field("value", &self.value)
            .finish()
    }
}
