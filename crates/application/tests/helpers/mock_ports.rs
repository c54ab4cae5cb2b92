#![allow(dead_code)]

use std::sync::{Arc, RwLock};
use zonedump_application::ports::{DnsDocumentSource, ZoneSink};
use zonedump_domain::{DomainError, NormalizedRecord, RawDnsDocument, RawRecord};

pub struct MockDocumentSource {
    name: String,
    document: Result<RawDnsDocument, DomainError>,
}

impl MockDocumentSource {
    pub fn with_document(document: RawDnsDocument) -> Self {
        Self {
            name: "mock.json".to_string(),
            document: Ok(document),
        }
    }

    pub fn with_error(error: DomainError) -> Self {
        Self {
            name: "mock.json".to_string(),
            document: Err(error),
        }
    }
}

impl DnsDocumentSource for MockDocumentSource {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<RawDnsDocument, DomainError> {
        self.document.clone()
    }
}

#[derive(Clone, Default)]
pub struct MockZoneSink {
    written: Arc<RwLock<Vec<NormalizedRecord>>>,
    writes: Arc<RwLock<usize>>,
    should_fail: bool,
}

impl MockZoneSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn written(&self) -> Vec<NormalizedRecord> {
        self.written.read().unwrap().clone()
    }

    pub fn write_calls(&self) -> usize {
        *self.writes.read().unwrap()
    }
}

impl ZoneSink for MockZoneSink {
    fn write_records(&self, records: &[NormalizedRecord]) -> Result<(), DomainError> {
        *self.writes.write().unwrap() += 1;
        if self.should_fail {
            return Err(DomainError::IoError("sink closed".to_string()));
        }
        self.written.write().unwrap().extend_from_slice(records);
        Ok(())
    }
}

pub fn raw_record(host: &str, code: u32, data: &str) -> RawRecord {
    RawRecord {
        is_active: true,
        record_type: code,
        data: data.to_string(),
        host: host.to_string(),
        ttl: 1799,
        priority: None,
    }
}
