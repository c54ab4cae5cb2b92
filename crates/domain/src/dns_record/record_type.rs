use std::fmt;

/// Record kinds the DNS provider exposes in its advanced DNS payload.
///
/// The provider numbers its record kinds with its own small integer codes,
/// which are unrelated to the IANA type codes used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    CNAME,
    MX,
    TXT,
    AAAA,
    NS,
    UrlRedirect,
    SRV,
    CAA,
    ALIAS,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::AAAA => "AAAA",
            RecordType::NS => "NS",
            RecordType::UrlRedirect => "URL Redirect",
            RecordType::SRV => "SRV",
            RecordType::CAA => "CAA",
            RecordType::ALIAS => "ALIAS",
        }
    }

    /// Codes missing from the table are unsupported and yield `None`.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            2 => Some(RecordType::CNAME),
            3 => Some(RecordType::MX),
            5 => Some(RecordType::TXT),
            8 => Some(RecordType::AAAA),
            9 => Some(RecordType::NS),
            10 => Some(RecordType::UrlRedirect),
            11 => Some(RecordType::SRV),
            12 => Some(RecordType::CAA),
            13 => Some(RecordType::ALIAS),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
