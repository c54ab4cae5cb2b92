pub mod document;
pub mod zone;
