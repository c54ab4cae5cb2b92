use super::RecordType;
use std::fmt;

/// Class column of every emitted zone line.
pub const RECORD_CLASS: &str = "IN";

/// One zone-file line: host, TTL, class, type and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub host: String,

    pub ttl: String,

    pub record_type: RecordType,

    pub value: String,
}

impl NormalizedRecord {
    pub fn new(host: String, ttl: String, record_type: RecordType, value: String) -> Self {
        Self {
            host,
            ttl,
            record_type,
            value,
        }
    }

    pub fn class(&self) -> &'static str {
        RECORD_CLASS
    }

    pub fn fields(&self) -> [&str; 5] {
        [
            self.host.as_str(),
            self.ttl.as_str(),
            self.class(),
            self.record_type.as_str(),
            self.value.as_str(),
        ]
    }
}

/// Renders the record as a single tab-separated zone line, without the newline.
impl fmt::Display for NormalizedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields().join("\t"))
    }
}
