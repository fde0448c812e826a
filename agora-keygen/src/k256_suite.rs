use crate::suite::{self, RandomStream, Suite, SuiteError};
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::elliptic_curve::PrimeField;
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar};
use rand_core::OsRng;

pub const SCALAR_SIZE: usize = 32;
/// SEC1 compressed encoding.
pub const POINT_SIZE: usize = 33;

#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256k1Suite;

impl Suite for Secp256k1Suite {
    type Scalar = Scalar;
    type Point = ProjectivePoint;
    type Stream = OsRng;

    fn name(&self) -> &'static str {
        "secp256k1"
    }

    fn create_scalar(&self) -> Scalar {
        Scalar::ZERO
    }

    fn create_point(&self) -> ProjectivePoint {
        ProjectivePoint::IDENTITY
    }

    fn base_point(&self) -> ProjectivePoint {
        ProjectivePoint::GENERATOR
    }

    fn random_stream(&self) -> OsRng {
        OsRng
    }
}

impl suite::Scalar for Scalar {
    fn pick(&self, stream: &mut dyn RandomStream) -> Result<Self, SuiteError> {
        // rejection sampling keeps the distribution uniform below the order
        loop {
            let mut repr = FieldBytes::default();
            stream.try_fill_bytes(repr.as_mut_slice())?;
            let candidate: Option<Scalar> = Scalar::from_repr(repr).into();
            match candidate {
                Some(scalar) if scalar != Scalar::ZERO => return Ok(scalar),
                _ => continue,
            }
        }
    }

    fn marshal_binary(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<(), SuiteError> {
        if bytes.len() != SCALAR_SIZE {
            return Err(SuiteError::InvalidLength {
                expected: SCALAR_SIZE,
                actual: bytes.len(),
            });
        }
        let maybe_scalar: Option<Scalar> =
            Scalar::from_repr(FieldBytes::clone_from_slice(bytes)).into();
        *self = maybe_scalar.ok_or(SuiteError::OutOfRange)?;
        Ok(())
    }
}

impl suite::Point for ProjectivePoint {
    type Scalar = Scalar;

    fn mul(&self, scalar: &Scalar) -> Result<Self, SuiteError> {
        Ok(*self * scalar)
    }

    fn marshal_binary(&self) -> Vec<u8> {
        self.to_affine().to_encoded_point(true).as_bytes().to_vec()
    }

    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<(), SuiteError> {
        if bytes.len() != POINT_SIZE {
            return Err(SuiteError::InvalidLength {
                expected: POINT_SIZE,
                actual: bytes.len(),
            });
        }
        let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| SuiteError::InvalidEncoding)?;
        let maybe_affine: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
        *self = ProjectivePoint::from(maybe_affine.ok_or(SuiteError::InvalidEncoding)?);
        Ok(())
    }
}

#[cfg(test)]
crate::macros::test_suite!(Secp256k1Suite, SCALAR_SIZE, POINT_SIZE);
