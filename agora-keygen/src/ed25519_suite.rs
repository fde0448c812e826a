use crate::suite::{self, Generator, RandomStream, Suite, SuiteError};
use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::{clamp_integer, Scalar};
use curve25519_dalek::traits::Identity;
use rand_core::OsRng;
use sha2::{Digest, Sha512};
use zeroize::{Zeroize, Zeroizing};

pub const SCALAR_SIZE: usize = 32;
pub const POINT_SIZE: usize = 32;

/// Edwards25519 with Ed25519 style private scalar derivation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519Suite;

impl Suite for Ed25519Suite {
    type Scalar = Scalar;
    type Point = EdwardsPoint;
    type Stream = OsRng;

    fn name(&self) -> &'static str {
        "ed25519"
    }

    fn create_scalar(&self) -> Scalar {
        Scalar::ZERO
    }

    fn create_point(&self) -> EdwardsPoint {
        EdwardsPoint::identity()
    }

    fn base_point(&self) -> EdwardsPoint {
        ED25519_BASEPOINT_POINT
    }

    fn random_stream(&self) -> OsRng {
        OsRng
    }

    fn generator(&self) -> Option<&dyn Generator<Scalar>> {
        Some(self)
    }
}

impl Generator<Scalar> for Ed25519Suite {
    /// Hashes a 32 byte seed with SHA-512 and clamps the lower half, exactly
    /// like an Ed25519 secret key is expanded.
    ///
    /// # Panics
    ///
    /// Panics if `stream` cannot deliver the seed.
    fn create_key(&self, stream: &mut dyn RandomStream) -> Scalar {
        let mut seed = Zeroizing::new([0u8; 32]);
        stream.fill_bytes(&mut *seed);

        let mut digest = Sha512::digest(seed.as_slice());
        let mut lower = [0u8; 32];
        lower.copy_from_slice(&digest[..32]);
        let scalar = Scalar::from_bytes_mod_order(clamp_integer(lower));

        lower.zeroize();
        digest.as_mut_slice().zeroize();
        scalar
    }
}

impl suite::Scalar for Scalar {
    fn pick(&self, stream: &mut dyn RandomStream) -> Result<Self, SuiteError> {
        let mut wide = Zeroizing::new([0u8; 64]);
        stream.try_fill_bytes(&mut *wide)?;
        Ok(Scalar::from_bytes_mod_order_wide(&wide))
    }

    fn marshal_binary(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<(), SuiteError> {
        let repr = <[u8; SCALAR_SIZE]>::try_from(bytes).map_err(|_| SuiteError::InvalidLength {
            expected: SCALAR_SIZE,
            actual: bytes.len(),
        })?;
        let maybe_scalar: Option<Scalar> = Scalar::from_canonical_bytes(repr).into();
        *self = maybe_scalar.ok_or(SuiteError::OutOfRange)?;
        Ok(())
    }
}

impl suite::Point for EdwardsPoint {
    type Scalar = Scalar;

    fn mul(&self, scalar: &Scalar) -> Result<Self, SuiteError> {
        Ok(self * scalar)
    }

    fn marshal_binary(&self) -> Vec<u8> {
        self.compress().to_bytes().to_vec()
    }

    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<(), SuiteError> {
        let compressed = CompressedEdwardsY::from_slice(bytes).map_err(|_| {
            SuiteError::InvalidLength {
                expected: POINT_SIZE,
                actual: bytes.len(),
            }
        })?;
        let point = compressed.decompress().ok_or(SuiteError::InvalidEncoding)?;
        // non-canonical y, low order points and mixed order points are all refused
        if point.compress() != compressed || point.is_small_order() || !point.is_torsion_free() {
            return Err(SuiteError::InvalidEncoding);
        }
        *self = point;
        Ok(())
    }
}

#[cfg(test)]
crate::macros::test_suite!(Ed25519Suite, SCALAR_SIZE, POINT_SIZE);
