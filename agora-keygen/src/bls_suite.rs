use crate::suite::{self, RandomStream, Suite, SuiteError};
use bls::{G1Affine, G1Projective, Scalar};
use rand_core::OsRng;

pub const SCALAR_SIZE: usize = 32;
/// Compressed G1 encoding.
pub const POINT_SIZE: usize = 48;

/// BLS12-381 with public keys in G1.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bls12381G1Suite;

impl Suite for Bls12381G1Suite {
    type Scalar = Scalar;
    type Point = G1Projective;
    type Stream = OsRng;

    fn name(&self) -> &'static str {
        "bls12-381-g1"
    }

    fn create_scalar(&self) -> Scalar {
        Scalar::zero()
    }

    fn create_point(&self) -> G1Projective {
        G1Projective::identity()
    }

    fn base_point(&self) -> G1Projective {
        G1Projective::generator()
    }

    fn random_stream(&self) -> OsRng {
        OsRng
    }
}

impl suite::Scalar for Scalar {
    fn pick(&self, stream: &mut dyn RandomStream) -> Result<Self, SuiteError> {
        let mut wide = [0u8; 64];
        stream.try_fill_bytes(&mut wide)?;
        Ok(Scalar::from_bytes_wide(&wide))
    }

    fn marshal_binary(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<(), SuiteError> {
        let repr = <[u8; SCALAR_SIZE]>::try_from(bytes).map_err(|_| SuiteError::InvalidLength {
            expected: SCALAR_SIZE,
            actual: bytes.len(),
        })?;
        let maybe_scalar: Option<Scalar> = Scalar::from_bytes(&repr).into();
        *self = maybe_scalar.ok_or(SuiteError::OutOfRange)?;
        Ok(())
    }
}

impl suite::Point for G1Projective {
    type Scalar = Scalar;

    fn mul(&self, scalar: &Scalar) -> Result<Self, SuiteError> {
        Ok(self * scalar)
    }

    fn marshal_binary(&self) -> Vec<u8> {
        G1Affine::from(self).to_compressed().to_vec()
    }

    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<(), SuiteError> {
        let compressed =
            <[u8; POINT_SIZE]>::try_from(bytes).map_err(|_| SuiteError::InvalidLength {
                expected: POINT_SIZE,
                actual: bytes.len(),
            })?;
        // from_compressed also checks subgroup membership
        let maybe_affine: Option<G1Affine> = G1Affine::from_compressed(&compressed).into();
        let affine = maybe_affine.ok_or(SuiteError::InvalidEncoding)?;
        if bool::from(affine.is_identity()) {
            return Err(SuiteError::InvalidEncoding);
        }
        *self = G1Projective::from(affine);
        Ok(())
    }
}

#[cfg(test)]
crate::macros::test_suite!(Bls12381G1Suite, SCALAR_SIZE, POINT_SIZE);
