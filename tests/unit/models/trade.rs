//! Unit tests for trade decisions

use signal_agent::models::signal::TradeDirection;
use signal_agent::models::trade::{TradeDecision, DEFAULT_SYMBOL};

use crate::support::{buy, fixed_time, hold, sell};

#[test]
fn test_direction_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&TradeDirection::Buy).unwrap(), "\"buy\"");
    assert_eq!(serde_json::to_string(&TradeDirection::Sell).unwrap(), "\"sell\"");
    assert_eq!(TradeDirection::Buy.opposite(), TradeDirection::Sell);
}

#[test]
fn test_no_trade_has_no_params() {
    let decision = TradeDecision::new(None, "majority", None, fixed_time(), vec![hold("a")]);
    assert!(!decision.should_trade);
    assert!(decision.trade_params().is_none());

    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(json["should_trade"], false);
    assert!(json["direction"].is_null());
}

#[test]
fn test_params_take_hints_from_supporting_verdicts() {
    let verdicts = vec![
        sell("contrarian", 0.9).with_size_hint(100.0).with_price_hint(1.0),
        buy("technical", 0.4).with_price_hint(42.0),
        buy("sizing", 0.4).with_size_hint(3.0),
    ];
    let decision = TradeDecision::new(
        Some(TradeDirection::Buy),
        "majority",
        Some("ETH".to_string()),
        fixed_time(),
        verdicts,
    );

    assert_eq!(decision.supporting_verdicts().count(), 2);
    let params = decision.trade_params().unwrap();
    assert_eq!(params.symbol, "ETH");
    assert_eq!(params.direction, TradeDirection::Buy);
    assert_eq!(params.price, Some(42.0));
    assert_eq!(params.size, Some(3.0));
}

#[test]
fn test_params_default_symbol() {
    let decision = TradeDecision::new(
        Some(TradeDirection::Sell),
        "majority",
        None,
        fixed_time(),
        vec![sell("a", 0.5)],
    );
    let params = decision.trade_params().unwrap();
    assert_eq!(params.symbol, DEFAULT_SYMBOL);
    assert_eq!(params.size, None);
}
