use crate::error::KeyError;
use crate::suite::{Point, RandomStream, Scalar, Suite};

use log::trace;
use zeroize::Zeroize;

use std::fmt;

/// A private scalar together with the public point it was derived from.
///
/// The private scalar is wiped when the pair is dropped.
pub struct Pair<S: Suite> {
    private: S::Scalar,
    public: S::Point,
}

impl<S: Suite> Clone for Pair<S> {
    fn clone(&self) -> Self {
        Self {
            private: self.private.clone(),
            public: self.public.clone(),
        }
    }
}

impl<S: Suite> fmt::Debug for Pair<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pair")
            .field("private", &"<redacted>")
            .field("public", &self.public)
            .finish()
    }
}

impl<S: Suite> Pair<S> {
    pub fn private(&self) -> &S::Scalar {
        &self.private
    }

    pub fn public(&self) -> &S::Point {
        &self.public
    }
}

impl<S: Suite> Drop for Pair<S> {
    fn drop(&mut self) {
        self.private.zeroize();
    }
}

/// Creates a fresh key pair using the suite's own random stream.
///
/// # Panics
///
/// Panics if the suite offers a [`Generator`](crate::Generator) and that
/// generator cannot read from the stream. See [`key_pair_from_stream`].
pub fn new_key_pair<S: Suite>(suite: &S) -> Result<Pair<S>, KeyError> {
    let mut stream = suite.random_stream();
    key_pair_from_stream(suite, &mut stream)
}

/// Creates a fresh key pair, drawing entropy from `stream`.
///
/// If the suite offers an accelerated [`Generator`](crate::Generator) it is
/// used for the private scalar, otherwise the scalar is picked uniformly.
/// A stream failure while picking is returned as
/// [`KeyError::KeyDerivation`].
///
/// # Panics
///
/// [`Generator::create_key`](crate::Generator::create_key) is infallible, so
/// a suite generator panics when `stream` fails (the ed25519 suite does).
/// Pass only working streams to suites that have a generator.
pub fn key_pair_from_stream<S: Suite>(
    suite: &S,
    stream: &mut dyn RandomStream,
) -> Result<Pair<S>, KeyError> {
    let mut private = match suite.generator() {
        Some(generator) => {
            trace!("{}: deriving private scalar with suite generator", suite.name());
            generator.create_key(stream)
        }
        None => {
            trace!("{}: picking uniform private scalar", suite.name());
            suite
                .create_scalar()
                .pick(stream)
                .map_err(KeyError::KeyDerivation)?
        }
    };

    let public = match suite.base_point().mul(&private) {
        Ok(public) => public,
        Err(err) => {
            private.zeroize();
            return Err(KeyError::KeyDerivation(err));
        }
    };

    Ok(Pair { private, public })
}
