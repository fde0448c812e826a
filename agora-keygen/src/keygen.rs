use crate::error::{KeyError, KeyKind};
use crate::keys::{PrivateKey, PublicKey};
use crate::pair::{key_pair_from_stream, new_key_pair, Pair};
use crate::suite::{Point, RandomStream, Scalar, Suite};

use log::debug;

use std::sync::Arc;

/// Builds key handles over a single suite.
///
/// The generator keeps no state besides the suite, so it can be shared freely
/// between threads.
pub struct KeyGenerator<S> {
    suite: Arc<S>,
}

impl<S: Suite> KeyGenerator<S> {
    pub fn new(suite: Arc<S>) -> Self {
        Self { suite }
    }

    pub fn suite(&self) -> &Arc<S> {
        &self.suite
    }

    /// Generates a fresh key pair with the suite's default stream.
    ///
    /// # Panics
    ///
    /// Panics if the suite's [`Generator`](crate::Generator) cannot read
    /// from the stream; see [`key_pair_from_stream`].
    pub fn generate_pair(&self) -> Result<(PrivateKey<S>, PublicKey<S>), KeyError> {
        let pair = new_key_pair(self.suite.as_ref())?;
        Ok(self.wrap(pair))
    }

    /// Same as [`generate_pair`](Self::generate_pair) but draws entropy from
    /// `stream` instead of the suite's default stream.
    ///
    /// # Panics
    ///
    /// Panics if the suite has a [`Generator`](crate::Generator) and `stream`
    /// fails. Suites without one report the failure as
    /// [`KeyError::KeyDerivation`].
    pub fn generate_pair_with_stream(
        &self,
        stream: &mut dyn RandomStream,
    ) -> Result<(PrivateKey<S>, PublicKey<S>), KeyError> {
        let pair = key_pair_from_stream(self.suite.as_ref(), stream)?;
        Ok(self.wrap(pair))
    }

    pub fn private_key_from_bytes(&self, bytes: &[u8]) -> Result<PrivateKey<S>, KeyError> {
        if bytes.is_empty() {
            return Err(KeyError::InvalidInput(KeyKind::Private));
        }
        let mut scalar = self.suite.create_scalar();
        scalar.unmarshal_binary(bytes).map_err(|source| {
            debug!("{}: rejected private key bytes: {}", self.suite.name(), source);
            KeyError::Decoding {
                kind: KeyKind::Private,
                source,
            }
        })?;
        Ok(PrivateKey::new(Arc::clone(&self.suite), scalar))
    }

    pub fn public_key_from_bytes(&self, bytes: &[u8]) -> Result<PublicKey<S>, KeyError> {
        if bytes.is_empty() {
            return Err(KeyError::InvalidInput(KeyKind::Public));
        }
        let mut point = self.suite.create_point();
        point.unmarshal_binary(bytes).map_err(|source| {
            debug!("{}: rejected public key bytes: {}", self.suite.name(), source);
            KeyError::Decoding {
                kind: KeyKind::Public,
                source,
            }
        })?;
        Ok(PublicKey::new(Arc::clone(&self.suite), point))
    }

    fn wrap(&self, pair: Pair<S>) -> (PrivateKey<S>, PublicKey<S>) {
        (
            PrivateKey::new(Arc::clone(&self.suite), pair.private().clone()),
            PublicKey::new(Arc::clone(&self.suite), pair.public().clone()),
        )
    }
}

impl<S: Suite> From<S> for KeyGenerator<S> {
    fn from(suite: S) -> Self {
        Self::new(Arc::new(suite))
    }
}

impl<S> Clone for KeyGenerator<S> {
    fn clone(&self) -> Self {
        Self {
            suite: Arc::clone(&self.suite),
        }
    }
}
