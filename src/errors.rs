use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("invalid parameter {field}: {message}")]
    InvalidParameter {
        field: &'static str,
        message: String,
    },

    #[error("internal consistency violation: {message}")]
    InternalConsistency {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ForecastError>;
