use thiserror::Error;

/// Error type for statistics over a list of numbers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("{statistic} requires at least one data point")]
    EmptyInput { statistic: &'static str },
    #[error("not a number: {0}")]
    NotANumber(String),
}
