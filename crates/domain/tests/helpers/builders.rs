#![allow(dead_code)]
use serde_json::{json, Value};
use zonedump_domain::RawRecord;

pub struct RawRecordBuilder {
    is_active: bool,
    record_type: u32,
    data: String,
    host: String,
    ttl: u32,
    priority: Option<u32>,
}

impl RawRecordBuilder {
    pub fn new() -> Self {
        Self {
            is_active: true,
            record_type: 1,
            data: "1.2.3.4".to_string(),
            host: "www".to_string(),
            ttl: 300,
            priority: None,
        }
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn record_type(mut self, code: u32) -> Self {
        self.record_type = code;
        self
    }

    pub fn data(mut self, data: &str) -> Self {
        self.data = data.to_string();
        self
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn build(self) -> RawRecord {
        RawRecord {
            is_active: self.is_active,
            record_type: self.record_type,
            data: self.data,
            host: self.host,
            ttl: self.ttl,
            priority: self.priority,
        }
    }
}

impl Default for RawRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a payload shaped like the provider's advanced DNS info response.
pub struct DocumentBuilder {
    domain_name: Option<String>,
    entries: Vec<Value>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            domain_name: Some("example.com".to_string()),
            entries: Vec::new(),
        }
    }

    pub fn domain_name(mut self, domain: &str) -> Self {
        self.domain_name = Some(domain.to_string());
        self
    }

    pub fn without_domain_name(mut self) -> Self {
        self.domain_name = None;
        self
    }

    pub fn record(mut self, record: RawRecord) -> Self {
        self.entries.push(record.to_value());
        self
    }

    /// Appends an entry verbatim, including malformed ones.
    pub fn entry(mut self, entry: Value) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn build(self) -> Value {
        let mut result = json!({
            "CustomHostRecords": {
                "Records": self.entries,
                "EmailType": 0,
            }
        });
        if let Some(domain) = self.domain_name {
            result["DomainBasicDetails"] = json!({ "DomainName": domain });
        }
        json!({ "Result": result, "Success": true })
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
