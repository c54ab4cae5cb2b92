use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::dns_document::{
    decode_entry, entry_is_active, entry_type_code, RawDnsDocument, RawRecord, APEX_HOST,
};
use crate::dns_record::{NormalizedRecord, RecordType};
use crate::errors::DomainError;

/// Controls how the host column is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Host passed through as the provider stores it, `@` included.
    #[default]
    Default,

    /// Host qualified against the apex domain, ready for a Cloudflare zone import.
    Cloudflare,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Default => "default",
            OutputFormat::Cloudflare => "cloudflare",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(OutputFormat::Default),
            "cloudflare" => Ok(OutputFormat::Cloudflare),
            _ => Err(DomainError::InvalidOption(s.to_string())),
        }
    }
}

/// Convert a decoded advanced-DNS payload into zone records.
pub fn normalize(
    document: &Value,
    format: OutputFormat,
) -> Result<Vec<NormalizedRecord>, DomainError> {
    RawDnsDocument::from_value(document)?.normalize(format)
}

impl RawDnsDocument {
    /// Inactive entries and entries with an unknown type code are dropped
    /// before their remaining fields are read; everything else keeps its
    /// input order.
    pub fn normalize(&self, format: OutputFormat) -> Result<Vec<NormalizedRecord>, DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyResult);
        }

        let mut normalized = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            if !entry_is_active(entry)? {
                continue;
            }

            let Some(record_type) = entry_type_code(entry).and_then(RecordType::from_code) else {
                continue;
            };

            let record = decode_entry(entry)?;
            let value = record_value(&record, record_type)?;
            let host = match format {
                OutputFormat::Default => record.host,
                OutputFormat::Cloudflare => qualify_host(&record.host, self.apex_domain()?),
            };

            normalized.push(NormalizedRecord::new(
                host,
                record.ttl.to_string(),
                record_type,
                value,
            ));
        }

        Ok(normalized)
    }
}

// TXT data is quoted verbatim; embedded quotes are not escaped.
fn record_value(record: &RawRecord, record_type: RecordType) -> Result<String, DomainError> {
    match record_type {
        RecordType::MX => {
            let priority = record.priority.ok_or_else(|| {
                DomainError::Structure(format!("MX record '{}' has no Priority", record.host))
            })?;
            Ok(format!("{} {}", priority, record.data))
        }
        RecordType::TXT => Ok(format!("\"{}\"", record.data)),
        _ => Ok(record.data.clone()),
    }
}

fn qualify_host(host: &str, apex: &str) -> String {
    if host == APEX_HOST {
        apex.to_string()
    } else {
        format!("{}.{}.", host, apex)
    }
}
