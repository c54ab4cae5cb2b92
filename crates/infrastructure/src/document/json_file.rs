use std::path::{Path, PathBuf};
use tracing::debug;
use zonedump_application::ports::DnsDocumentSource;
use zonedump_domain::{DomainError, RawDnsDocument};

/// Reads a saved advanced-DNS JSON response from disk.
pub struct JsonFileDocumentSource {
    path: PathBuf,
    name: String,
}

impl JsonFileDocumentSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl DnsDocumentSource for JsonFileDocumentSource {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<RawDnsDocument, DomainError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| DomainError::IoError(format!("Failed to read {}: {}", self.name, e)))?;

        debug!(path = %self.name, bytes = content.len(), "Read DNS document");
        RawDnsDocument::from_json_str(&content, &self.name)
    }
}
