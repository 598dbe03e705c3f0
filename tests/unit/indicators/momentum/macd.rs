//! Unit tests for MACD indicator

use signal_agent::indicators::momentum::{calculate_macd, try_calculate_macd};
use signal_agent::indicators::IndicatorError;
use signal_agent::models::indicators::MacdIndicator;

use crate::support::{decelerating_decline, decelerating_rally, linear};

#[test]
fn test_macd_neutral_below_26_samples() {
    for len in [0, 1, 12, 25] {
        let prices = linear(len, 50.0, 1.5);
        assert_eq!(calculate_macd(&prices), MacdIndicator::neutral(), "len {}", len);
    }
}

#[test]
fn test_macd_insufficient_data_error() {
    let prices = linear(25, 50.0, 1.0);
    assert_eq!(
        try_calculate_macd(&prices),
        Err(IndicatorError::InsufficientData {
            indicator: "macd",
            required: 26,
            available: 25,
        })
    );
}

#[test]
fn test_macd_flat_series_is_zero() {
    let prices = vec![42.0; 40];
    let macd = calculate_macd(&prices);
    assert!(macd.macd.abs() < 1e-12);
    assert!(macd.signal.abs() < 1e-12);
    assert!(macd.histogram.abs() < 1e-12);
}

#[test]
fn test_macd_uptrend_positive() {
    let macd = calculate_macd(&linear(60, 100.0, 1.0));
    assert!(macd.macd > 0.0);
    assert!(macd.signal > 0.0);
}

#[test]
fn test_macd_histogram_is_line_minus_signal() {
    let macd = calculate_macd(&decelerating_decline());
    assert!((macd.histogram - (macd.macd - macd.signal)).abs() < 1e-12);
}

#[test]
fn test_macd_turns_with_deceleration() {
    let down = calculate_macd(&decelerating_decline());
    assert!(down.macd < 0.0);
    assert!(down.is_bullish());

    let up = calculate_macd(&decelerating_rally());
    assert!(up.macd > 0.0);
    assert!(up.is_bearish());
}
