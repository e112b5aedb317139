mod common;

use common::{exact_pairs, run_sequence_check};
use coulomb_variants::{ChargePair, CoulombError, generate_all_variants, generate_exact_variants};
use num_rational::Rational64;

#[test]
fn sequence_lengths_follow_powers_of_ten() {
    for accuracy in 1..=4 {
        let stats = run_sequence_check(accuracy);
        let expected = 10usize.pow(accuracy) - 1;
        assert_eq!(stats.count, expected, "accuracy {}", accuracy);
        assert_eq!(stats.distinct, expected, "accuracy {}", accuracy);
    }
}

#[test]
fn accuracy_one_lists_all_tenths_in_order() {
    let pairs: Vec<ChargePair> = generate_all_variants(1).unwrap().collect();
    let expected: Vec<ChargePair> = (1..=9)
        .map(|i| ChargePair::new(-(i as f64) / 10.0, -((10 - i) as f64) / 10.0))
        .collect();
    assert_eq!(pairs, expected);
}

#[test]
fn generator_is_restartable() {
    let first: Vec<ChargePair> = generate_all_variants(3).unwrap().collect();
    let second: Vec<ChargePair> = generate_all_variants(3).unwrap().collect();
    assert_eq!(first, second);
}

#[test]
fn exact_values_sit_on_the_decimal_grid() {
    let pairs = exact_pairs(3);
    for (i, pair) in pairs.iter().enumerate() {
        let index = i as i64 + 1;
        assert_eq!(pair.q2, Rational64::new(-index, 1000));
        assert_eq!(pair.q3, Rational64::new(index - 1000, 1000));
    }
}

#[test]
fn boundary_pairs_are_never_yielded() {
    for accuracy in 1..=3 {
        for pair in generate_exact_variants(accuracy).unwrap() {
            assert_ne!(pair.q2, Rational64::from_integer(-1));
            assert_ne!(pair.q3, Rational64::from_integer(0));
        }
    }
}

#[test]
fn float_pairs_match_decimal_literals() {
    let pairs: Vec<ChargePair> = generate_all_variants(3).unwrap().collect();
    assert_eq!(pairs[0], ChargePair::new(-0.001, -0.999));
    assert_eq!(pairs[122], ChargePair::new(-0.123, -0.877));
    assert_eq!(pairs[998], ChargePair::new(-0.999, -0.001));
}

#[test]
fn zero_accuracy_is_empty_and_large_accuracy_is_rejected() {
    assert!(generate_all_variants(0).unwrap().next().is_none());
    assert!(matches!(
        generate_all_variants(16),
        Err(CoulombError::AccuracyOutOfRange { accuracy: 16, max: 15 })
    ));
}
