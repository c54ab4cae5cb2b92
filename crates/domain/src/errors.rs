use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unexpected document shape: {0}")]
    Structure(String),

    #[error("No DNS records found in document")]
    EmptyResult,

    #[error("Unable to decode JSON from {input}: {reason}")]
    Decode { input: String, reason: String },

    #[error("Invalid output format: {0} (expected 'default' or 'cloudflare')")]
    InvalidOption(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
