//! Shared numeric primitives. Internal scores live on the 0..4 scale; the
//! display helpers rescale to the user-facing 1..5 presentation.

/// Arithmetic mean, defined as 0 for an empty sample so unanswered groups
/// render as zero instead of NaN.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Geometric mean of two scores. Zero in either dimension collapses the
/// result to zero: both dimensions have to carry signal.
pub fn geometric_mean(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    (a * b).sqrt()
}

/// Rescales an internal 0..4 score to the 1..5 display scale with one
/// decimal. Missing values render as an em-dash sentinel.
pub fn to_display(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v / 4.0 * 5.0),
        None => "\u{2014}".to_string(),
    }
}

/// Rescales an internal 0..4 score to 0..100 for bar widths; missing is 0.
pub fn to_percent(value: Option<f64>) -> f64 {
    value.map_or(0.0, |v| v / 4.0 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_sample_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_of_singleton_is_the_value() {
        assert_eq!(mean(&[3.0]), 3.0);
    }

    #[test]
    fn mean_is_invariant_to_order() {
        assert_eq!(mean(&[1.0, 4.0, 2.0]), mean(&[4.0, 2.0, 1.0]));
    }

    #[test]
    fn geometric_mean_of_zeros_is_zero() {
        assert_eq!(geometric_mean(0.0, 0.0), 0.0);
    }

    #[test]
    fn geometric_mean_of_maxed_dimensions_is_max() {
        assert_eq!(geometric_mean(4.0, 4.0), 4.0);
    }

    #[test]
    fn geometric_mean_zero_dominates() {
        assert_eq!(geometric_mean(0.0, 4.0), 0.0);
    }

    #[test]
    fn display_scale_maps_internal_to_one_decimal() {
        assert_eq!(to_display(Some(4.0)), "5.0");
        assert_eq!(to_display(Some(2.0)), "2.5");
        assert_eq!(to_display(None), "\u{2014}");
    }

    #[test]
    fn percent_scale_maps_missing_to_zero() {
        assert_eq!(to_percent(Some(2.0)), 50.0);
        assert_eq!(to_percent(None), 0.0);
    }
}
