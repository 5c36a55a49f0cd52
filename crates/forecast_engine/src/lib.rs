pub mod aggregate;
pub mod error;
pub mod forecast;
pub mod record;
pub mod trend;

pub use aggregate::{DailySeries, MIN_TRANSACTIONS, aggregate};
pub use error::{PredictionError, RecordParseError};
pub use forecast::{FORECAST_HORIZON_DAYS, forecast};
pub use trend::fit_trend;

use models::{DailyPoint, PredictionPoint};
use serde_json::Value;

/// Result of a full prediction run: the forecast points plus any warnings
/// accumulated while parsing the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub predictions: Vec<PredictionPoint>,
    pub warnings: Vec<String>,
}

/// Main prediction function that turns raw transactions into a 30-day
/// spending forecast.
///
/// Runs the full pipeline: validate and aggregate into daily totals, fit a
/// linear trend over the daily series, then extrapolate one month past the
/// last observed day.
pub fn predict(transactions: &[Value]) -> Result<Prediction, PredictionError> {
    let series = aggregate(transactions)?;
    let predictions = fit_and_forecast(&series.points, FORECAST_HORIZON_DAYS)?;
    Ok(Prediction {
        predictions,
        warnings: series.warnings,
    })
}

/// Fits a trend to the daily series and extrapolates it `horizon` days past
/// the last observed day.
pub fn fit_and_forecast(
    points: &[DailyPoint],
    horizon: u64,
) -> Result<Vec<PredictionPoint>, PredictionError> {
    let Some(last) = points.last() else {
        return Ok(Vec::new());
    };

    let amounts: Vec<f64> = points.iter().map(|p| p.amount).collect();
    let model = fit_trend(&amounts);

    forecast(&model, points.len(), last.day, horizon)
}
