//! Numeric helpers shared by the indicators

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by N)
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Smoothing factor of an N-period EMA
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Full EMA series seeded with the first value
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let alpha = ema_alpha(period);
    let mut series = Vec::with_capacity(values.len());
    let mut prev = match values.first() {
        Some(first) => *first,
        None => return series,
    };
    series.push(prev);
    for value in &values[1..] {
        prev = (value - prev) * alpha + prev;
        series.push(prev);
    }
    series
}

/// Trailing window of at most `len` elements
pub fn tail(values: &[f64], len: usize) -> &[f64] {
    &values[values.len().saturating_sub(len)..]
}
