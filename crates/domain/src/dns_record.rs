pub mod record;
pub mod record_type;

pub use record::{NormalizedRecord, RECORD_CLASS};
pub use record_type::RecordType;
