//! Unit tests for the indicator set and shared math

use signal_agent::config::TechnicalConfig;
use signal_agent::indicators::compute_indicator_set;
use signal_agent::indicators::math::{ema_series, mean, population_std_dev, tail};
use signal_agent::models::indicators::MacdIndicator;

use crate::support::decelerating_decline;

#[test]
fn test_empty_prices_yield_defaults() {
    let set = compute_indicator_set(&[], &TechnicalConfig::default());
    assert_eq!(set.rsi.value, 50.0);
    assert_eq!(set.macd, MacdIndicator::neutral());
    assert_eq!(set.bollinger.middle, 0.0);
}

#[test]
fn test_indicator_set_is_deterministic() {
    let prices = decelerating_decline();
    let config = TechnicalConfig::default();
    assert_eq!(
        compute_indicator_set(&prices, &config),
        compute_indicator_set(&prices, &config)
    );
}

#[test]
fn test_indicator_set_serializes_named_keys() {
    let set = compute_indicator_set(&decelerating_decline(), &TechnicalConfig::default());
    let json = serde_json::to_value(set).unwrap();
    assert!(json.get("rsi").is_some());
    assert!(json.get("macd").is_some());
    assert!(json.get("bollinger").is_some());
}

#[test]
fn test_math_helpers() {
    assert_eq!(mean(&[]), None);
    assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    assert_eq!(population_std_dev(&[3.0, 3.0]), Some(0.0));
    assert_eq!(tail(&[1.0, 2.0, 3.0], 2), &[2.0, 3.0]);
    assert_eq!(tail(&[1.0], 5), &[1.0]);

    let ema = ema_series(&[10.0, 20.0], 3);
    assert_eq!(ema, vec![10.0, 15.0]);
    assert!(ema_series(&[], 3).is_empty());
}
