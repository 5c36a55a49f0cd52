use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single validated transaction: wall-clock timestamp plus signed amount.
///
/// Lives only for the duration of one request; the aggregation pipeline
/// consumes a batch of these and never stores them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionRecord {
    pub timestamp: NaiveDateTime,
    pub amount: f64,
}

/// One calendar day's summed spending. Days with no transactions are simply
/// absent from a series, never zero-filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyPoint {
    pub day: NaiveDate,
    pub amount: f64,
}

/// Linear trend fitted over the index of the ordered daily series.
///
/// The independent variable is the position 0, 1, 2, ... of each point, not
/// elapsed calendar time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendModel {
    pub slope: f64,
    pub intercept: f64,
}

/// One forecast day: a future calendar date and the predicted spending for
/// it, clamped to zero and rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub date: NaiveDate,
    pub predicted_amount: f64,
}
