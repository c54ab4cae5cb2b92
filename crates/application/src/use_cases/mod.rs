pub mod export_zone;

pub use export_zone::{ExportSummary, ExportZoneUseCase};
