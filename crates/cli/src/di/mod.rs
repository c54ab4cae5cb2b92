use std::path::Path;
use std::sync::Arc;
use zonedump_application::ports::ZoneSink;
use zonedump_application::use_cases::ExportZoneUseCase;
use zonedump_infrastructure::document::JsonFileDocumentSource;
use zonedump_infrastructure::zone::{TabSeparatedZoneWriter, ZoneFileSink};

pub fn build_export_use_case(input: &Path, output: Option<&Path>) -> ExportZoneUseCase {
    let source = Arc::new(JsonFileDocumentSource::new(input));
    let sink: Arc<dyn ZoneSink> = match output {
        Some(path) => Arc::new(ZoneFileSink::new(path)),
        None => Arc::new(TabSeparatedZoneWriter::stdout()),
    };

    ExportZoneUseCase::new(source, sink)
}
