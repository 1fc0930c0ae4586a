use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid cycle length: {cycle_length} (must be at least 1 day)")]
    InvalidCycleLength { cycle_length: i64 },
    #[error("invalid period length: {period_length} (must not be negative)")]
    InvalidPeriodLength { period_length: i64 },
    #[error("invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("configuration error: {0}")]
    Config(String),
}
