pub mod file_sink;
pub mod tab_writer;

pub use file_sink::ZoneFileSink;
pub use tab_writer::{write_zone_lines, TabSeparatedZoneWriter};
