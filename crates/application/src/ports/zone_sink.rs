use zonedump_domain::{DomainError, NormalizedRecord};

/// Port for emitting normalized zone records.
pub trait ZoneSink: Send + Sync {
    fn write_records(&self, records: &[NormalizedRecord]) -> Result<(), DomainError>;
}
