use std::io::{self, Write};
use std::sync::Mutex;
use zonedump_application::ports::ZoneSink;
use zonedump_domain::{DomainError, NormalizedRecord};

/// Write one tab-separated line per record and flush.
pub fn write_zone_lines<W: Write>(writer: &mut W, records: &[NormalizedRecord]) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    writer.flush()
}

/// Zone sink over any writer, e.g. stdout.
pub struct TabSeparatedZoneWriter<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> TabSeparatedZoneWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl TabSeparatedZoneWriter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ZoneSink for TabSeparatedZoneWriter<W> {
    fn write_records(&self, records: &[NormalizedRecord]) -> Result<(), DomainError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| DomainError::IoError("zone writer lock poisoned".to_string()))?;

        write_zone_lines(&mut *writer, records)
            .map_err(|e| DomainError::IoError(format!("Failed to write zone output: {}", e)))
    }
}
