use serde::{Deserialize, Serialize};

use crate::normalize::OutputFormat;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}
