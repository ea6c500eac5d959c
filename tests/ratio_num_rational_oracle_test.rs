// ratio_num_rational_oracle_test.rs
//
// Checks Ratio against num-rational's arbitrary-precision Ratio<BigInt>.
//
// For every pair of sample values and every operator, the exact result is
// computed with BigInt rationals and mapped to the outcome Ratio must report:
// - a negative exact result          -> Underflow
// - a zero divisor                   -> DivisionByZero
// - a reduced part above 2^128 - 1   -> Overflow
// - otherwise                        -> Ok, equal to the exact result and in lowest terms

#[cfg(test)]
mod oracle_tests {
    use num_bigint::BigInt;
    use num_rational::Ratio as NumRatio;
    use packed_ratio::{Ratio, RatioError};
    use std::cmp::Ordering;

    type NumRational = NumRatio<BigInt>;

    /// Deterministic sample source so failures reproduce.
    struct SplitMix64(u64);

    impl SplitMix64 {
        fn next_u64(&mut self) -> u64 {
            self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = self.0;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        /// A value with at most `bits` significant bits.
        fn next_bits(&mut self, bits: u32) -> u128 {
            let x = ((self.next_u64() as u128) << 64) | self.next_u64() as u128;
            x >> (128 - bits)
        }
    }

    fn frac(n: u128, d: u128) -> Ratio {
        Ratio::from_integer(n) / Ratio::from_integer(d)
    }

    fn sample_values() -> Vec<Ratio> {
        let mut values = vec![
            Ratio::ZERO,
            Ratio::ONE,
            Ratio::from_integer(2),
            frac(1, 2),
            frac(1, 3),
            frac(2, 3),
            Ratio::from_integer(1 << 127),
            Ratio::from_integer(u128::MAX),
            frac(1, u128::MAX),
            frac(u128::MAX, u128::MAX - 1),
            frac(u128::MAX - 1, u128::MAX),
        ];

        let mut rng = SplitMix64(0x5eed_1234);
        for bits in [8, 24, 64, 96, 127, 128] {
            for _ in 0..2 {
                let n = rng.next_bits(bits);
                let d = rng.next_bits(bits).max(1);
                values.push(frac(n, d));
            }
        }
        values
    }

    fn ratio_to_num(r: &Ratio) -> NumRational {
        let (n, d) = r.unpack();
        NumRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn fits_u128(x: &BigInt) -> bool {
        *x <= BigInt::from(u128::MAX)
    }

    /// What Ratio must return for an exact result.
    fn expected_outcome(exact: NumRational) -> Result<NumRational, RatioError> {
        if exact < NumRational::from_integer(BigInt::from(0)) {
            return Err(RatioError::Underflow);
        }
        if !fits_u128(exact.numer()) || !fits_u128(exact.denom()) {
            return Err(RatioError::Overflow);
        }
        Ok(exact)
    }

    fn assert_lowest_terms(r: &Ratio) {
        if r.is_zero() {
            return;
        }
        let (n, d) = r.unpack();
        let num = ratio_to_num(r);
        assert_eq!(num.numer(), &BigInt::from(n), "{} is not reduced", r);
        assert_eq!(num.denom(), &BigInt::from(d), "{} is not reduced", r);
    }

    /// Macro to generate an oracle test for one binary operator
    macro_rules! generate_oracle_test {
        ($test_name:ident, $method:ident, |$a:ident, $b:ident| $exact:expr) => {
            #[test]
            fn $test_name() {
                let values = sample_values();
                for x in &values {
                    for y in &values {
                        let $a = ratio_to_num(x);
                        let $b = ratio_to_num(y);
                        let expected: Result<NumRational, RatioError> = $exact;
                        let actual = x.$method(*y);

                        match (&actual, &expected) {
                            (Ok(r), Ok(e)) => {
                                assert_eq!(&ratio_to_num(r), e, "{} {} {}", x, stringify!($method), y);
                                assert_lowest_terms(r);
                            }
                            (Err(a), Err(e)) => {
                                assert_eq!(a, e, "{} {} {}", x, stringify!($method), y)
                            }
                            _ => panic!(
                                "{} {} {}: got {:?}, expected {:?}",
                                x,
                                stringify!($method),
                                y,
                                actual,
                                expected
                            ),
                        }
                    }
                }
            }
        };
    }

    generate_oracle_test!(test_add_matches_oracle, try_add, |a, b| expected_outcome(a + b));
    generate_oracle_test!(test_sub_matches_oracle, try_sub, |a, b| expected_outcome(a - b));
    generate_oracle_test!(test_mul_matches_oracle, try_mul, |a, b| expected_outcome(a * b));
    generate_oracle_test!(test_div_matches_oracle, try_div, |a, b| {
        if b == NumRational::from_integer(BigInt::from(0)) {
            Err(RatioError::DivisionByZero)
        } else {
            expected_outcome(a / b)
        }
    });

    // ========================================================================
    // COMPARISONS
    // ========================================================================

    #[test]
    fn test_compare_matches_oracle() {
        let values = sample_values();
        for x in &values {
            for y in &values {
                let expected = ratio_to_num(x).cmp(&ratio_to_num(y));
                assert_eq!(x.cmp(y), expected, "{} cmp {}", x, y);
            }
        }
    }

    /// Exactly one of <, ==, > holds and the derived operators agree.
    #[test]
    fn test_trichotomy() {
        let values = sample_values();
        for x in &values {
            for y in &values {
                let held = [x < y, x == y, x > y].iter().filter(|&&b| b).count();
                assert_eq!(held, 1, "{} vs {}", x, y);
                assert_eq!(x <= y, !(x > y));
                assert_eq!(x >= y, !(x < y));
                assert_eq!(x != y, !(x == y));
                assert_eq!(x.cmp(y) == Ordering::Equal, x == y);
            }
        }
    }

    // ========================================================================
    // ALGEBRAIC PROPERTIES
    // ========================================================================

    #[test]
    fn test_commutativity() {
        let values = sample_values();
        for x in &values {
            for y in &values {
                assert_eq!(x.try_add(*y), y.try_add(*x), "{} + {}", x, y);
                assert_eq!(x.try_mul(*y), y.try_mul(*x), "{} * {}", x, y);
            }
        }
    }

    #[test]
    fn test_identities() {
        for x in sample_values() {
            assert_eq!((x + Ratio::ZERO).unpack(), x.unpack());
            assert_eq!(x * Ratio::ZERO, Ratio::ZERO);
            assert_eq!((x * Ratio::ZERO).unpack(), (0, 1));
            if !x.is_zero() {
                assert_eq!((Ratio::ZERO / x).unpack(), (0, 1));
                assert_eq!(x / x, Ratio::ONE);
            }
            assert_eq!(x - x, Ratio::ZERO);
        }
    }

    /// (x / y) * y == x whenever neither step overflows.
    #[test]
    fn test_inverse_consistency() {
        let values = sample_values();
        for x in &values {
            for y in values.iter().filter(|y| !y.is_zero()) {
                if let Some(q) = x.checked_div(*y) {
                    if let Some(back) = q.checked_mul(*y) {
                        assert_eq!(back, *x, "({} / {}) * {}", x, y, y);
                    }
                }
            }
        }
    }

    #[test]
    fn test_integer_round_trip() {
        let mut rng = SplitMix64(42);
        let mut ints = vec![0, 1, u64::MAX as u128, 1 << 127, u128::MAX];
        ints.extend((0..64).map(|_| rng.next_bits(128)));
        for u in ints {
            assert_eq!(Ratio::from_integer(u).to_integer(), u);
        }
    }

    #[test]
    fn test_to_integer_truncates_like_oracle() {
        for x in sample_values() {
            let expected = ratio_to_num(&x).to_integer();
            assert_eq!(BigInt::from(x.to_integer()), expected, "{}", x);
        }
    }

    // ========================================================================
    // ENCODING
    // ========================================================================

    #[test]
    fn test_word_and_text_round_trips() {
        for x in sample_values() {
            let from_word = Ratio::from_word(x.to_word()).unwrap();
            assert_eq!(from_word.unpack(), x.unpack());

            let from_bytes = Ratio::from_be_bytes(x.to_be_bytes()).unwrap();
            assert_eq!(from_bytes.unpack(), x.unpack());

            let parsed: Ratio = x.to_string().parse().unwrap();
            assert_eq!(parsed.unpack(), x.unpack());
        }
    }

    #[test]
    fn test_worked_examples() {
        let sum = frac(1, 3) + frac(1, 6);
        assert_eq!(sum.unpack(), (1, 2));
        assert_eq!(sum, frac(1, 2));

        let diff = frac(3, 4) - frac(1, 4);
        assert_eq!(diff, frac(1, 2));

        assert_eq!(
            Ratio::from_integer(1 << 127).try_mul(Ratio::from_integer(2)),
            Err(RatioError::Overflow)
        );
        assert_eq!(
            Ratio::from_integer(5).try_div(Ratio::ZERO),
            Err(RatioError::DivisionByZero)
        );
    }
}
