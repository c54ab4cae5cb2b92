//! Zonedump Domain Layer
pub mod config;
pub mod dns_document;
pub mod dns_record;
pub mod errors;
pub mod normalize;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, OutputConfig};
pub use dns_document::{RawDnsDocument, RawRecord};
pub use dns_record::{NormalizedRecord, RecordType, RECORD_CLASS};
pub use errors::DomainError;
pub use normalize::{normalize, OutputFormat};
