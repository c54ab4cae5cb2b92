use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use zonedump_application::ports::ZoneSink;
use zonedump_domain::{DomainError, NormalizedRecord};

use super::tab_writer::write_zone_lines;

/// Writes the zone to a file. Lines go to a temporary file next to the
/// target, which is renamed over it only once every line is written.
pub struct ZoneFileSink {
    path: PathBuf,
}

impl ZoneFileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn staging_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn io_error(&self, action: &str, e: impl std::fmt::Display) -> DomainError {
        DomainError::IoError(format!(
            "Failed to {} {}: {}",
            action,
            self.path.display(),
            e
        ))
    }
}

impl ZoneSink for ZoneFileSink {
    fn write_records(&self, records: &[NormalizedRecord]) -> Result<(), DomainError> {
        let staged =
            NamedTempFile::new_in(self.staging_dir()).map_err(|e| self.io_error("create", e))?;

        let mut writer = BufWriter::new(staged);
        write_zone_lines(&mut writer, records).map_err(|e| self.io_error("write", e))?;
        writer.flush().map_err(|e| self.io_error("write", e))?;

        let staged = writer
            .into_inner()
            .map_err(|e| self.io_error("write", e.error()))?;
        staged
            .persist(&self.path)
            .map_err(|e| self.io_error("replace", e.error))?;

        debug!(path = %self.path.display(), records = records.len(), "Zone file written");
        Ok(())
    }
}
