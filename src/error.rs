//! Error taxonomy for table lookups and request validation.
//!
//! Inputs come from enumerated domains (note names, scale keys, tunings), so
//! every failure here means the caller handed over something outside those
//! domains. Nothing is clamped or defaulted.

#[derive(thiserror::Error, Debug)]
pub enum FretError {
    #[error("unknown scale key {0:?}")]
    InvalidScaleKey(String),
    #[error("unknown tuning {tuning:?} for instrument {instrument:?}")]
    InvalidTuningKey { instrument: String, tuning: String },
    #[error("unknown instrument {0:?}")]
    InvalidInstrument(String),
    #[error("pitch class {0} is outside 0..=11")]
    InvalidPitchClass(i64),
    #[error("unknown note name {0:?}")]
    InvalidNoteName(String),
    #[error("fret count {0} is outside 1..=25")]
    InvalidFretCount(usize),
    #[error("invalid value {value:?} for {flag}: {reason}")]
    InvalidArgument { flag: String, value: String, reason: String },
    #[error("{0} needs a value")]
    MissingArgument(String),
    #[error("malformed request: {0}")]
    Request(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FretError>;
