use coulomb_variants::{ExactChargePair, generate_all_variants, generate_exact_variants};
use num_rational::Rational64;
use num_traits::{One, Signed, Zero};
use std::collections::HashSet;

pub struct SequenceStats {
    pub count: usize,
    pub distinct: usize,
    pub max_float_balance_error: f64,
}

pub fn exact_pairs(accuracy: u32) -> Vec<ExactChargePair> {
    generate_exact_variants(accuracy)
        .expect("accuracy should be supported")
        .collect()
}

pub fn run_sequence_check(accuracy: u32) -> SequenceStats {
    let exact = exact_pairs(accuracy);
    let floats: Vec<_> = generate_all_variants(accuracy)
        .expect("accuracy should be supported")
        .collect();

    println!("\nRunning Sequence Check: accuracy {}", accuracy);
    println!("{:-<60}", "");

    assert_eq!(exact.len(), floats.len());

    let mut seen = HashSet::new();
    let mut previous: Option<Rational64> = None;
    let mut max_float_balance_error: f64 = 0.0;

    for (pair, float_pair) in exact.iter().zip(floats.iter()) {
        assert!(pair.q2 < Rational64::zero(), "q2 must be negative: {}", pair.q2);
        assert!(pair.q3 < Rational64::zero(), "q3 must be negative: {}", pair.q3);
        assert_eq!(
            pair.q2.abs() + pair.q3.abs(),
            Rational64::one(),
            "charges must balance exactly"
        );
        if let Some(prev) = previous {
            assert!(pair.q2.abs() > prev.abs(), "|q2| must increase strictly");
        }
        previous = Some(pair.q2);
        seen.insert(*pair);

        assert_eq!(*float_pair, pair.to_f64());
        let error = ((float_pair.q2 + float_pair.q3).abs() - 1.0).abs();
        max_float_balance_error = max_float_balance_error.max(error);
    }

    let stats = SequenceStats {
        count: exact.len(),
        distinct: seen.len(),
        max_float_balance_error,
    };

    println!("  Variants:                {}", stats.count);
    println!("  Distinct:                {}", stats.distinct);
    println!("  Max float balance error: {:.3e}", stats.max_float_balance_error);
    println!("{:-<60}\n", "");

    stats
}
