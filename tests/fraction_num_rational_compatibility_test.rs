// fraction_num_rational_compatibility_test.rs
//
// Test suite checking Fraction<T> against num-rational's Ratio<BigInt>.
// The suite is instantiated for every supported element type using a macro.
//
// What is covered:
// 1. Canonical form after construction (lowest terms, positive denominator, 0/1)
// 2. The fixed string fixtures for +, -, *, / and comparisons
// 3. Agreement with num-rational on a grid of small operands
// 4. Error kinds for zero denominators and zero divisors

#[cfg(test)]
mod compatibility_tests {
    use int_fraction::{Fraction, FractionError};
    use num_bigint::BigInt;
    use num_rational::Ratio as NumRatio;
    use std::cmp::Ordering;

    type NumRational = NumRatio<BigInt>;

    /// Operand pairs small enough for every element type, i8 included.
    const SAMPLES: [(i8, i8); 12] = [
        (0, 1),
        (0, -5),
        (1, 3),
        (-1, 3),
        (2, 6),
        (5, 3),
        (-7, 4),
        (3, -9),
        (4, 1),
        (-1, -2),
        (6, 10),
        (-10, 1),
    ];

    /// Macro to generate the complete test suite for a given element type
    macro_rules! generate_fraction_tests {
        ($mod_name:ident, $int_type:ty) => {
            mod $mod_name {
                use super::*;

                type TestInt = $int_type;
                type TestFraction = Fraction<TestInt>;

                fn frac(n: i8, d: i8) -> TestFraction {
                    TestFraction::new(n as TestInt, d as TestInt).unwrap()
                }

                /// Convert Fraction to num-rational for compatibility testing
                fn fraction_to_num(r: &TestFraction) -> NumRational {
                    NumRational::new(BigInt::from(*r.numer()), BigInt::from(*r.denom()))
                }

                fn num(n: i8, d: i8) -> NumRational {
                    NumRational::new(BigInt::from(n), BigInt::from(d))
                }

                /// The fields must already be the reduced form num-rational would pick.
                fn assert_canonical(r: &TestFraction, expected: &NumRational) {
                    assert_eq!(BigInt::from(*r.numer()), *expected.numer(), "numer of {}", r);
                    assert_eq!(BigInt::from(*r.denom()), *expected.denom(), "denom of {}", r);
                }

                // ====================================================================
                // CONSTRUCTION
                // ====================================================================

                #[test]
                fn test_construction_fixtures() {
                    assert_eq!(frac(1, 3).to_string(), "Fraction(1, 3)");
                    assert_eq!(frac(2, 6).to_string(), "Fraction(1, 3)");
                    assert_eq!(frac(-1, -3).to_string(), "Fraction(1, 3)");
                    assert_eq!(frac(1, -3).to_string(), "Fraction(-1, 3)");
                }

                #[test]
                fn test_canonical_zero() {
                    for d in [1i8, -1, 3, -3, 100, -100] {
                        assert_eq!(frac(0, d).to_string(), "Fraction(0, 1)");
                    }
                }

                #[test]
                fn test_zero_denominator_rejected() {
                    for n in [0i8, 1, -1, 42] {
                        assert_eq!(
                            TestFraction::new(n as TestInt, 0),
                            Err(FractionError::InvalidDenominator)
                        );
                    }
                }

                #[test]
                fn test_construction_matches_num_rational() {
                    for &(n, d) in SAMPLES.iter() {
                        assert_canonical(&frac(n, d), &num(n, d));
                    }
                }

                // ====================================================================
                // ARITHMETIC FIXTURES
                // ====================================================================

                #[test]
                fn test_add_fixtures() {
                    assert_eq!((frac(1, 3) + frac(1, 3)).to_string(), "Fraction(2, 3)");
                    assert_eq!((frac(1, 3) + frac(-1, 3)).to_string(), "Fraction(0, 1)");
                    assert_eq!((frac(1, 3) + frac(2, 3)).to_string(), "Fraction(1, 1)");
                    assert_eq!((frac(1, 3) + frac(5, 3)).to_string(), "Fraction(2, 1)");
                }

                #[test]
                fn test_subtract_fixtures() {
                    assert_eq!((frac(1, 3) - frac(1, 3)).to_string(), "Fraction(0, 1)");
                    assert_eq!((frac(1, 3) - frac(-1, 3)).to_string(), "Fraction(2, 3)");
                    assert_eq!((frac(1, 3) - frac(2, 3)).to_string(), "Fraction(-1, 3)");
                    assert_eq!((frac(-1, 3) - frac(5, 3)).to_string(), "Fraction(-2, 1)");
                }

                #[test]
                fn test_multiply_fixtures() {
                    assert_eq!((frac(0, -3) * frac(1, 3)).to_string(), "Fraction(0, 1)");
                    assert_eq!((frac(1, 3) * frac(0, 3)).to_string(), "Fraction(0, 1)");
                    assert_eq!((frac(1, 3) * frac(1, 3)).to_string(), "Fraction(1, 9)");
                    assert_eq!((frac(1, 3) * frac(-1, 3)).to_string(), "Fraction(-1, 9)");
                    assert_eq!((frac(2, 6) * frac(3, 6)).to_string(), "Fraction(1, 6)");
                }

                #[test]
                fn test_divide_fixtures() {
                    assert_eq!((frac(0, -3) / frac(1, 3)).to_string(), "Fraction(0, 1)");
                    assert_eq!((frac(1, 3) / frac(3, 3)).to_string(), "Fraction(1, 3)");
                    assert_eq!((frac(1, 3) / frac(-1, 3)).to_string(), "Fraction(-1, 1)");
                    assert_eq!((frac(-1, 3) / frac(1, 3)).to_string(), "Fraction(-1, 1)");
                    assert_eq!((frac(1, 3) / frac(1, 3)).to_string(), "Fraction(1, 1)");
                    assert_eq!((frac(1, 3) / frac(3, 1)).to_string(), "Fraction(1, 9)");
                }

                #[test]
                fn test_divide_by_zero_fraction() {
                    for &(n, d) in SAMPLES.iter() {
                        for k in [1i8, -2, 7] {
                            assert_eq!(
                                frac(n, d).divide(frac(0, k)),
                                Err(FractionError::UndefinedInverse)
                            );
                        }
                    }
                }

                // ====================================================================
                // COMPARISON FIXTURES
                // ====================================================================

                #[test]
                fn test_comparison_fixtures() {
                    assert!(frac(-10, 1) < frac(1, 3));
                    assert!(frac(-1, 5) < frac(1, 3));
                    assert!(frac(1, 5) < frac(1, 3));
                    assert!(frac(1, 3) == frac(1, 3));
                    assert!(frac(1, 3) == frac(-1, -3));
                    assert!(frac(-1, 3) == frac(1, -3));
                    assert!(frac(1, 3) == frac(2, 6));
                    assert!(frac(1, 3) > frac(1, 5));
                    assert!(frac(1, 3) > frac(-1, 5));
                    assert!(frac(1, 3) > frac(-10, 1));
                }

                // ====================================================================
                // AGREEMENT WITH NUM-RATIONAL
                // ====================================================================

                #[test]
                fn test_add_sub_match_num_rational() {
                    for &(n1, d1) in SAMPLES.iter() {
                        for &(n2, d2) in SAMPLES.iter() {
                            let a = frac(n1, d1);
                            let b = frac(n2, d2);
                            assert_canonical(&a.add(b), &(num(n1, d1) + num(n2, d2)));
                            assert_canonical(&a.subtract(b), &(num(n1, d1) - num(n2, d2)));
                        }
                    }
                }

                #[test]
                fn test_mul_div_match_num_rational() {
                    for &(n1, d1) in SAMPLES.iter() {
                        for &(n2, d2) in SAMPLES.iter() {
                            let a = frac(n1, d1);
                            let b = frac(n2, d2);
                            assert_canonical(&a.multiply(b), &(num(n1, d1) * num(n2, d2)));
                            if n2 != 0 {
                                let q = a.divide(b).unwrap();
                                assert_canonical(&q, &(num(n1, d1) / num(n2, d2)));
                            }
                        }
                    }
                }

                #[test]
                fn test_ordering_matches_num_rational() {
                    for &(n1, d1) in SAMPLES.iter() {
                        for &(n2, d2) in SAMPLES.iter() {
                            let a = frac(n1, d1);
                            let b = frac(n2, d2);
                            let expected = num(n1, d1).cmp(&num(n2, d2));
                            assert_eq!(a.cmp(&b), expected, "{} vs {}", a, b);
                            assert_eq!(a.less_than(&b), expected == Ordering::Less);
                            assert_eq!(a.equals(&b), expected == Ordering::Equal);
                            assert_eq!(a.greater_than(&b), expected == Ordering::Greater);
                        }
                    }
                }

                #[test]
                fn test_round_trip_through_num_rational() {
                    for &(n, d) in SAMPLES.iter() {
                        let r = frac(n, d);
                        assert_eq!(fraction_to_num(&r), num(n, d));
                    }
                }

                // ====================================================================
                // IN-PLACE OPERATIONS
                // ====================================================================

                #[test]
                fn test_assign_operators() {
                    let mut r = frac(1, 2);
                    r += frac(1, 3);
                    assert_eq!(r.to_string(), "Fraction(5, 6)");
                    r -= frac(1, 2);
                    assert_eq!(r.to_string(), "Fraction(1, 3)");
                    r *= frac(-3, 2);
                    assert_eq!(r.to_string(), "Fraction(-1, 2)");
                    r /= frac(1, 4);
                    assert_eq!(r.to_string(), "Fraction(-2, 1)");
                }

                #[test]
                fn test_divide_assign_error_leaves_value() {
                    let mut r = frac(-7, 4);
                    assert_eq!(r.divide_assign(frac(0, 3)), Err(FractionError::UndefinedInverse));
                    assert_eq!(r, frac(-7, 4));
                }
            }
        };
    }

    // ============================================================================
    // INSTANTIATE TEST SUITE FOR EACH ELEMENT TYPE
    // ============================================================================

    generate_fraction_tests!(i8_tests, i8);
    generate_fraction_tests!(i16_tests, i16);
    generate_fraction_tests!(i32_tests, i32);
    generate_fraction_tests!(i64_tests, i64);
    generate_fraction_tests!(i128_tests, i128);
    generate_fraction_tests!(isize_tests, isize);
}
