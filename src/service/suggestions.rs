//! Input handling for the price suggestion endpoint.

use crate::error::AppError;

/// Parse raw query values into finite numbers. Rejects an empty list and any value that
/// is not a plain decimal number.
pub fn parse_values<S: AsRef<str>>(raw: &[S]) -> Result<Vec<f64>, AppError> {
    if raw.is_empty() {
        return Err(AppError::InvalidInput("no values supplied".into()));
    }
    raw.iter()
        .map(|s| {
            let s = s.as_ref().trim();
            s.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| AppError::InvalidInput(format!("'{}' is not a number", s)))
        })
        .collect()
}

/// Arithmetic mean. `None` for an empty slice or when the sum overflows.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64).filter(|m| m.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_averages() {
        let values = parse_values(&["10000", " 20000.50 "]).unwrap();
        assert_eq!(values, vec![10000.0, 20000.5]);
        assert_eq!(mean(&values), Some(15000.25));
    }

    #[test]
    fn empty_list_is_invalid_input() {
        let err = parse_values::<&str>(&[]).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn overflowing_mean_is_none() {
        let values = parse_values(&["1e308", "1e308"]).unwrap();
        assert_eq!(mean(&values), None);
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        for bad in ["abc", "", "NaN", "inf", "1,5"] {
            let err = parse_values(&["100", bad]).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)), "{bad} should be rejected");
        }
    }
}
