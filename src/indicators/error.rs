use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("{indicator}: insufficient data ({available} samples, {required} required)")]
    InsufficientData {
        indicator: &'static str,
        required: usize,
        available: usize,
    },

    #[error("{indicator}: period must be greater than zero")]
    InvalidPeriod { indicator: &'static str },
}
