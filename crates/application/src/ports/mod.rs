mod dns_document_source;
mod zone_sink;

pub use dns_document_source::DnsDocumentSource;
pub use zone_sink::ZoneSink;
