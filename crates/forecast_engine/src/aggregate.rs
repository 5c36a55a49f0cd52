use std::collections::BTreeMap;

use chrono::NaiveDate;
use models::DailyPoint;
use serde_json::Value;

use crate::error::PredictionError;
use crate::record::parse_record;

/// Minimum number of transactions, raw and valid, required for a forecast.
pub const MIN_TRANSACTIONS: usize = 10;

/// The aggregated daily series plus one warning per record dropped during
/// parsing. Callers that care about input quality can log or assert on the
/// warnings; the rest of the pipeline only needs the points.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    pub points: Vec<DailyPoint>,
    pub warnings: Vec<String>,
}

/// Validate and normalize raw transactions into per-day totals.
///
/// A record that fails to parse is skipped with a warning, not fatal. The
/// size check runs twice: on the raw count before parsing and on the
/// surviving count after. Valid records are stable-sorted by their full
/// timestamp (ties keep input order), then grouped by calendar day with
/// amounts summed algebraically, signs intact.
///
/// The returned series is never empty: at least ten valid records exist by
/// the time grouping happens, and every record lands in some day bucket.
pub fn aggregate(transactions: &[Value]) -> Result<DailySeries, PredictionError> {
    if transactions.len() < MIN_TRANSACTIONS {
        return Err(PredictionError::InsufficientData);
    }

    let mut records = Vec::with_capacity(transactions.len());
    let mut warnings = Vec::new();
    for raw in transactions {
        match parse_record(raw) {
            Ok(record) => records.push(record),
            Err(err) => warnings.push(format!("Skipped transaction {raw}: {err}")),
        }
    }

    if records.len() < MIN_TRANSACTIONS {
        return Err(PredictionError::InsufficientValidData);
    }

    // Stable, so records sharing a timestamp stay in input order and the
    // per-day summation order is deterministic.
    records.sort_by_key(|r| r.timestamp);

    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in &records {
        *by_day.entry(record.timestamp.date()).or_insert(0.0) += record.amount;
    }

    let points = by_day
        .into_iter()
        .map(|(day, amount)| DailyPoint { day, amount })
        .collect();

    Ok(DailySeries { points, warnings })
}
