use zonedump_domain::{DomainError, RawDnsDocument};

/// Port for loading a captured advanced-DNS payload.
pub trait DnsDocumentSource: Send + Sync {
    /// Identifier used in logs and error messages (usually a file path).
    fn source_name(&self) -> &str;

    fn load(&self) -> Result<RawDnsDocument, DomainError>;
}
