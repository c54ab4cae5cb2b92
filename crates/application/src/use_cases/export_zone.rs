use crate::ports::{DnsDocumentSource, ZoneSink};
use std::sync::Arc;
use tracing::{debug, info};
use zonedump_domain::{DomainError, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub source_entries: usize,
    pub emitted: usize,
}

impl ExportSummary {
    /// Inactive entries plus entries with an unsupported type code.
    pub fn skipped(&self) -> usize {
        self.source_entries - self.emitted
    }
}

pub struct ExportZoneUseCase {
    source: Arc<dyn DnsDocumentSource>,
    sink: Arc<dyn ZoneSink>,
}

impl ExportZoneUseCase {
    pub fn new(source: Arc<dyn DnsDocumentSource>, sink: Arc<dyn ZoneSink>) -> Self {
        Self { source, sink }
    }

    /// Records reach the sink only after the whole document normalized cleanly.
    pub fn execute(&self, format: OutputFormat) -> Result<ExportSummary, DomainError> {
        let document = self.source.load()?;
        debug!(
            source = self.source.source_name(),
            entries = document.entries.len(),
            "DNS document loaded"
        );

        let records = document.normalize(format)?;
        self.sink.write_records(&records)?;

        let summary = ExportSummary {
            source_entries: document.entries.len(),
            emitted: records.len(),
        };

        info!(
            source = self.source.source_name(),
            format = %format,
            emitted = summary.emitted,
            skipped = summary.skipped(),
            "Zone export complete"
        );

        Ok(summary)
    }
}
