use chrono::{Days, NaiveDate};
use models::{PredictionPoint, TrendModel};

use crate::error::PredictionError;

/// Number of days projected past the last observed day.
pub const FORECAST_HORIZON_DAYS: u64 = 30;

/// Round to 2 decimal places, halves away from zero.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Extrapolate the fitted trend for `horizon` days past `last_day`.
///
/// The trend line keeps counting the index sequence used for the fit: with
/// `n_observed` daily points the first future day is evaluated at index
/// `n_observed`, the next at `n_observed + 1`, and so on. Spending cannot
/// be negative in this model, so values below zero clamp to zero before
/// rounding.
pub fn forecast(
    model: &TrendModel,
    n_observed: usize,
    last_day: NaiveDate,
    horizon: u64,
) -> Result<Vec<PredictionPoint>, PredictionError> {
    let mut predictions = Vec::with_capacity(horizon as usize);
    for i in 1..=horizon {
        let date = last_day.checked_add_days(Days::new(i)).ok_or_else(|| {
            PredictionError::Internal(format!(
                "forecast date out of range {i} days after {last_day}"
            ))
        })?;
        let index = (n_observed as u64 + i - 1) as f64;
        let predicted = (model.intercept + model.slope * index).max(0.0);
        predictions.push(PredictionPoint {
            date,
            predicted_amount: round2(predicted),
        });
    }
    Ok(predictions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_forecast_emits_exactly_horizon_points() {
        let model = TrendModel { slope: 0.0, intercept: 10.0 };
        let points = forecast(&model, 10, day(2024, 3, 10), FORECAST_HORIZON_DAYS).unwrap();

        assert_eq!(points.len(), 30);
    }

    #[test]
    fn test_forecast_dates_are_consecutive_from_next_day() {
        let model = TrendModel { slope: 1.0, intercept: 0.0 };
        let last = day(2024, 2, 27);
        let points = forecast(&model, 5, last, 10).unwrap();

        for (i, point) in points.iter().enumerate() {
            let expected = last.checked_add_days(Days::new(i as u64 + 1)).unwrap();
            assert_eq!(point.date, expected);
        }
        // Crosses the leap-year February boundary.
        assert_eq!(points[1].date, day(2024, 2, 29));
        assert_eq!(points[2].date, day(2024, 3, 1));
    }

    #[test]
    fn test_forecast_continues_index_sequence() {
        // With 10 observed points the first future index is 10.
        let model = TrendModel { slope: 10.0, intercept: 10.0 };
        let points = forecast(&model, 10, day(2024, 3, 10), 30).unwrap();

        assert!((points[0].predicted_amount - 110.0).abs() < 1e-9);
        assert!((points[29].predicted_amount - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_forecast_clamps_negative_values_to_zero() {
        let model = TrendModel { slope: -5.0, intercept: 10.0 };
        let points = forecast(&model, 10, day(2024, 3, 10), 30).unwrap();

        assert!(points.iter().all(|p| p.predicted_amount >= 0.0));
        // Index 10 evaluates to 10 - 50 = -40, already below zero.
        assert_eq!(points[0].predicted_amount, 0.0);
    }

    #[test]
    fn test_forecast_rounds_to_two_decimals() {
        let model = TrendModel { slope: 0.0, intercept: 1.0 / 3.0 };
        let points = forecast(&model, 1, day(2024, 3, 10), 2).unwrap();

        assert_eq!(points[0].predicted_amount, 0.33);

        let model = TrendModel { slope: 0.0, intercept: 2.0 / 3.0 };
        let points = forecast(&model, 1, day(2024, 3, 10), 1).unwrap();

        assert_eq!(points[0].predicted_amount, 0.67);
    }

    #[test]
    fn test_forecast_fails_past_calendar_range() {
        let model = TrendModel { slope: 0.0, intercept: 10.0 };
        let err = forecast(&model, 1, NaiveDate::MAX, 30).unwrap_err();

        assert!(matches!(err, PredictionError::Internal(_)));
        assert!(err.to_string().starts_with("Prediction failed:"));
    }
}
