macro_rules! test_suite {
    ($suite: expr, $scalar_size: expr, $point_size: expr) => {
        #[cfg(test)]
        mod test {
            use super::*;
            use crate::suite::{Point, Scalar};
            use crate::{new_key_pair, KeyError, KeyGenerator, KeyKind};
            use std::sync::Arc;

            fn keygen() -> KeyGenerator<impl Suite> {
                KeyGenerator::from($suite)
            }

            #[test]
            fn public_is_base_point_times_private() {
                let pair = new_key_pair(&$suite).unwrap();
                let expected = Point::mul(&$suite.base_point(), pair.private()).unwrap();
                assert_eq!(pair.public(), &expected);
                assert_ne!(pair.public(), &$suite.create_point());

                let keygen = keygen();
                let (private, public) = keygen.generate_pair().unwrap();
                assert_eq!(private.public_key().unwrap(), public);
            }

            #[test]
            fn keys_round_trip_through_bytes() {
                let keygen = keygen();
                let (private, public) = keygen.generate_pair().unwrap();

                let private_bytes = private.to_bytes();
                let public_bytes = public.to_bytes();
                assert_eq!(private_bytes.len(), $scalar_size);
                assert_eq!(public_bytes.len(), $point_size);

                let decoded_private = keygen.private_key_from_bytes(&private_bytes).unwrap();
                let decoded_public = keygen.public_key_from_bytes(&public_bytes).unwrap();
                assert_eq!(decoded_private, private);
                assert_eq!(decoded_public, public);
                assert_eq!(decoded_private.public_key().unwrap(), public);
            }

            #[test]
            fn empty_bytes_are_invalid_input() {
                let keygen = keygen();
                assert!(matches!(
                    keygen.private_key_from_bytes(&[]),
                    Err(KeyError::InvalidInput(KeyKind::Private))
                ));
                assert!(matches!(
                    keygen.public_key_from_bytes(&[]),
                    Err(KeyError::InvalidInput(KeyKind::Public))
                ));
            }

            #[test]
            fn wrong_lengths_are_decoding_errors() {
                let keygen = keygen();
                let (private, public) = keygen.generate_pair().unwrap();

                let mut long_private = private.to_bytes().to_vec();
                long_private.push(0);
                for bytes in [&private.to_bytes()[1..], long_private.as_slice()] {
                    assert!(matches!(
                        keygen.private_key_from_bytes(bytes),
                        Err(KeyError::Decoding {
                            kind: KeyKind::Private,
                            ..
                        })
                    ));
                }

                let mut long_public = public.to_bytes();
                long_public.push(0);
                for bytes in [&public.to_bytes()[1..], long_public.as_slice()] {
                    assert!(matches!(
                        keygen.public_key_from_bytes(bytes),
                        Err(KeyError::Decoding {
                            kind: KeyKind::Public,
                            ..
                        })
                    ));
                }
            }

            #[test]
            fn out_of_range_scalar_is_not_defaulted() {
                let keygen = keygen();
                let all_ones = [0xff_u8; $scalar_size];
                assert!(matches!(
                    keygen.private_key_from_bytes(&all_ones),
                    Err(KeyError::Decoding {
                        kind: KeyKind::Private,
                        ..
                    })
                ));

                let mut zero = $suite.create_scalar();
                assert!(Scalar::unmarshal_binary(&mut zero, &all_ones).is_err());
                assert_eq!(zero, $suite.create_scalar());
            }

            #[test]
            fn independent_pairs_differ() {
                let keygen = keygen();
                let (first_private, first_public) = keygen.generate_pair().unwrap();
                let (second_private, second_public) = keygen.generate_pair().unwrap();
                assert_ne!(first_private, second_private);
                assert_ne!(first_public, second_public);
                assert_ne!(*first_private.to_bytes(), *second_private.to_bytes());
            }

            #[test]
            fn suite_is_the_bound_instance() {
                let suite = Arc::new($suite);
                let keygen = KeyGenerator::new(Arc::clone(&suite));
                assert!(Arc::ptr_eq(keygen.suite(), &suite));

                let (private, public) = keygen.generate_pair().unwrap();
                assert!(Arc::ptr_eq(private.suite(), &suite));
                assert!(Arc::ptr_eq(public.suite(), &suite));
            }
        }
    };
}

pub(crate) use test_suite;
