//! Small numeric helpers shared by the summaries.

/// Rounds to one decimal place. Ties go to the even digit, so `10.25`
/// becomes `10.2` and `18.75` becomes `18.8`.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Arithmetic mean rounded to one decimal, 0.0 for an empty input.
pub fn rounded_mean(values: &[i32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: i64 = values.iter().map(|v| i64::from(*v)).sum();
    round_one_decimal(sum as f64 / values.len() as f64)
}

/// `part / whole` as a percentage with one decimal, 0.0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_one_decimal(part as f64 / whole as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_mean_of_empty_is_zero() {
        assert_eq!(rounded_mean(&[]), 0.0);
    }

    #[test]
    fn rounded_mean_rounds_to_one_decimal() {
        assert_eq!(rounded_mean(&[10, 20]), 15.0);
        assert_eq!(rounded_mean(&[1, 2, 2]), 1.7);
    }

    #[test]
    fn rounded_mean_sends_ties_to_even() {
        assert_eq!(rounded_mean(&[10, 10, 10, 11]), 10.2);
        assert_eq!(rounded_mean(&[10, 10, 11, 11, 11, 11, 11, 11]), 10.8);
    }

    #[test]
    fn round_one_decimal_sends_exact_ties_to_even() {
        assert_eq!(round_one_decimal(0.75), 0.8);
        assert_eq!(round_one_decimal(-0.25), -0.2);
        assert_eq!(round_one_decimal(10.26), 10.3);
    }

    #[test]
    fn percentage_sends_ties_to_even() {
        assert_eq!(percentage(1, 16), 6.2);
        assert_eq!(percentage(3, 16), 18.8);
    }

    #[test]
    fn percentage_handles_zero_whole() {
        assert_eq!(percentage(3, 0), 0.0);
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 2), 100.0);
    }
}
