use super::*;
use approx::assert_relative_eq;

#[test]
fn test_counts_resolve_to_fractions() {
    let fracs = SplitSpec::Counts(vec![3, 3, 3]).resolve(9).unwrap();
    assert_eq!(fracs.len(), 3);
    for f in fracs {
        assert_relative_eq!(f, 1.0 / 3.0);
    }
}

#[test]
fn test_counts_must_sum_to_n() {
    let err = SplitSpec::Counts(vec![3, 3]).resolve(10).unwrap_err();
    assert_eq!(
        err,
        WeakLabError::InvalidSplit {
            message: "Provided split counts must sum to n (10), not 6.".to_string()
        }
    );
    assert!(err.to_string().contains("must sum to n (10)"));
}

#[test]
fn test_counts_sum_overflow_is_rejected() {
    let err = SplitSpec::Counts(vec![usize::MAX, 11]).resolve(10).unwrap_err();
    assert!(matches!(err, WeakLabError::InvalidSplit { .. }));
    assert!(err.to_string().contains("overflows"));
}

#[test]
fn test_counts_on_empty_input() {
    assert!(SplitSpec::Counts(vec![0, 0]).resolve(0).is_err());
}

#[test]
fn test_fractions_used_as_is() {
    let fracs = SplitSpec::Fractions(vec![0.8, 0.1, 0.1]).resolve(123).unwrap();
    assert_eq!(fracs, vec![0.8, 0.1, 0.1]);
}

#[test]
fn test_fractions_must_sum_to_one() {
    let err = SplitSpec::Fractions(vec![0.5, 0.4]).resolve(10).unwrap_err();
    assert!(err.to_string().starts_with("Split fractions must sum to 1.0, not 0.9"));
}

#[test]
fn test_fractions_reject_negative_and_nan() {
    assert!(SplitSpec::Fractions(vec![1.5, -0.5]).resolve(10).is_err());
    assert!(SplitSpec::Fractions(vec![f64::NAN, 1.0]).resolve(10).is_err());
}

#[test]
fn test_fractions_allow_empty_input() {
    assert_eq!(SplitSpec::default().resolve(0).unwrap(), vec![0.5, 0.5]);
}

#[test]
fn test_empty_spec_is_rejected() {
    assert!(SplitSpec::Fractions(vec![]).resolve(10).is_err());
    assert!(SplitSpec::Counts(vec![]).resolve(0).is_err());
}

#[test]
fn test_from_sizes_infers_kind() {
    let counts = SplitSpec::from_sizes(&[SplitSize::from(2usize), SplitSize::from(8usize)]).unwrap();
    assert_eq!(counts, SplitSpec::Counts(vec![2, 8]));

    let fractions = SplitSpec::from_sizes(&[0.25.into(), 0.75.into()]).unwrap();
    assert_eq!(fractions, SplitSpec::Fractions(vec![0.25, 0.75]));
    assert_eq!(fractions.num_splits(), 2);
}

#[test]
fn test_from_sizes_rejects_mixed_kinds() {
    let err = SplitSpec::from_sizes(&[SplitSize::Count(5), SplitSize::Fraction(0.5)]).unwrap_err();
    assert_eq!(err.to_string(), "Splits must contain all ints or all floats.");
}

#[test]
fn test_from_sizes_rejects_empty() {
    assert!(SplitSpec::from_sizes(&[]).is_err());
}
