//! Percentile computation over sample columns.

/// Compute the `q`-th percentile (0..=100) of `values`, using linear
/// interpolation between the two nearest ranks.
///
/// For a sorted sample of size N the target rank is `q/100 * (N-1)`; the
/// result interpolates between the elements at the floor and ceiling of that
/// rank. Returns `None` for an empty sample.
pub fn percentile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    if values.len() == 1 {
        return Some(values[0]);
    }

    let q = q.clamp(0.0, 100.0);
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = (sorted.len() - 1) as f64 * q / 100.0;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }

    let weight = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_p90_evenly_spaced() {
        let values: Vec<f64> = (1..=10).map(|i| (i * 10) as f64).collect();
        assert_close(percentile(&values, 90.0).unwrap(), 91.0);
    }

    #[test]
    fn test_single_value_is_returned_exactly() {
        assert_eq!(percentile(&[42.5], 90.0), Some(42.5));
    }

    #[test]
    fn test_empty_sample() {
        assert_eq!(percentile(&[], 90.0), None);
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let sorted: Vec<f64> = (1..=10).map(|i| (i * 10) as f64).collect();
        let mut shuffled = sorted.clone();
        shuffled.swap(0, 9);
        shuffled.swap(3, 7);
        assert_eq!(
            percentile(&sorted, 90.0).unwrap(),
            percentile(&shuffled, 90.0).unwrap()
        );
    }

    #[test]
    fn test_median_interpolates_halfway() {
        assert_close(percentile(&[1.0, 2.0, 3.0, 4.0], 50.0).unwrap(), 2.5);
    }

    #[test]
    fn test_extremes() {
        let values = [3.0, 1.0, 2.0];
        assert_eq!(percentile(&values, 0.0), Some(1.0));
        assert_eq!(percentile(&values, 100.0), Some(3.0));
    }

    #[test]
    fn test_out_of_range_q_is_clamped() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(percentile(&values, 150.0), Some(3.0));
        assert_eq!(percentile(&values, -5.0), Some(1.0));
    }
}
