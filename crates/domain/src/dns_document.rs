use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::DomainError;

const RECORDS_POINTER: &str = "/Result/CustomHostRecords/Records";
const DOMAIN_NAME_POINTER: &str = "/Result/DomainBasicDetails/DomainName";

/// Host value the provider uses for the zone apex.
pub const APEX_HOST: &str = "@";

/// One fully decoded entry of `Result.CustomHostRecords.Records`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRecord {
    pub is_active: bool,

    pub record_type: u32,

    pub data: String,

    pub host: String,

    pub ttl: u32,

    /// Only meaningful for MX entries; the provider sends null or omits it otherwise.
    #[serde(default)]
    pub priority: Option<u32>,
}

impl RawRecord {
    pub fn to_value(&self) -> Value {
        json!({
            "IsActive": self.is_active,
            "RecordType": self.record_type,
            "Data": self.data,
            "Host": self.host,
            "Ttl": self.ttl,
            "Priority": self.priority,
        })
    }
}

/// Decoded advanced-DNS payload, reduced to the parts the normalizer reads.
///
/// Entries stay undecoded until normalization: inactive entries and entries
/// with an unsupported type are dropped without looking at their other fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDnsDocument {
    pub entries: Vec<Value>,

    pub domain_name: Option<String>,
}

impl RawDnsDocument {
    pub fn new(entries: Vec<Value>, domain_name: Option<String>) -> Self {
        Self {
            entries,
            domain_name,
        }
    }

    pub fn from_records(records: &[RawRecord], domain_name: Option<String>) -> Self {
        Self::new(records.iter().map(RawRecord::to_value).collect(), domain_name)
    }

    /// Extract the record list and apex domain from an already decoded payload.
    ///
    /// The apex domain is optional here; it is only demanded once a
    /// cloudflare-style host has to be built (see [`RawDnsDocument::apex_domain`]).
    pub fn from_value(value: &Value) -> Result<Self, DomainError> {
        let entries = value
            .pointer(RECORDS_POINTER)
            .filter(|v| !v.is_null())
            .ok_or_else(|| {
                DomainError::Structure("missing Result.CustomHostRecords.Records".to_string())
            })?
            .as_array()
            .ok_or_else(|| {
                DomainError::Structure(
                    "Result.CustomHostRecords.Records is not a list".to_string(),
                )
            })?
            .clone();

        let domain_name = value
            .pointer(DOMAIN_NAME_POINTER)
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            entries,
            domain_name,
        })
    }

    /// Decode raw JSON text; `source` names the input in error messages.
    pub fn from_json_str(text: &str, source: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(text).map_err(|e| DomainError::Decode {
            input: source.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    pub fn apex_domain(&self) -> Result<&str, DomainError> {
        self.domain_name.as_deref().ok_or_else(|| {
            DomainError::Structure("missing Result.DomainBasicDetails.DomainName".to_string())
        })
    }
}

/// `IsActive` is the one field every entry must carry.
pub(crate) fn entry_is_active(entry: &Value) -> Result<bool, DomainError> {
    entry
        .get("IsActive")
        .and_then(Value::as_bool)
        .ok_or_else(|| {
            DomainError::Structure("record entry without boolean IsActive".to_string())
        })
}

/// Type code of an entry; a missing or non-integer code reads as unsupported.
pub(crate) fn entry_type_code(entry: &Value) -> Option<u32> {
    entry
        .get("RecordType")
        .and_then(Value::as_u64)
        .and_then(|code| u32::try_from(code).ok())
}

pub(crate) fn decode_entry(entry: &Value) -> Result<RawRecord, DomainError> {
    RawRecord::deserialize(entry)
        .map_err(|e| DomainError::Structure(format!("invalid record entry: {}", e)))
}
