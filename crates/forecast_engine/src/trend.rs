use models::TrendModel;

/// Fit a least-squares line over the position of each value in the series.
///
/// The independent variable is the index 0, 1, 2, ... rather than elapsed
/// calendar time: a day separated from its predecessor by a week still sits
/// one index step away, so gaps between observed days do not stretch the
/// slope's time scale. The forecast continues this same index sequence.
///
/// With fewer than two points the fit degenerates to a flat line at the
/// mean, without any division by zero.
pub fn fit_trend(values: &[f64]) -> TrendModel {
    let n = values.len();
    if n < 2 {
        let mean = if n == 0 {
            0.0
        } else {
            values.iter().sum::<f64>() / n as f64
        };
        return TrendModel {
            slope: 0.0,
            intercept: mean,
        };
    }

    let n_f = n as f64;
    let x_mean = (n_f - 1.0) / 2.0;
    let y_mean = values.iter().sum::<f64>() / n_f;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - x_mean;
        numerator += dx * (y - y_mean);
        denominator += dx * dx;
    }

    // Unreachable for n >= 2 since the indices are distinct, but a zero
    // denominator must never turn into a division.
    if denominator == 0.0 {
        return TrendModel {
            slope: 0.0,
            intercept: y_mean,
        };
    }

    let slope = numerator / denominator;
    TrendModel {
        slope,
        intercept: y_mean - slope * x_mean,
    }
}
