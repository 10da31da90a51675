use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccrualError {
    #[error("negative principal: {principal}")]
    NegativePrincipal { principal: f64 },

    #[error("invalid annual rate: {rate}")]
    InvalidRate { rate: f64 },

    #[error("invalid timestamp: {value}")]
    InvalidTimestamp { value: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

pub type Result<T> = std::result::Result<T, AccrualError>;
