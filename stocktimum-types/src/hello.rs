use serde::{Deserialize, Serialize};

/// Body of the `/api/hello` banner endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hello {
    /// Banner text.
    pub message: String,
    /// Server-side cache lifetime, if the provider reports one.
    #[serde(default)]
    pub cache_ttl_seconds: Option<u64>,
    /// Provider data directory, if reported.
    #[serde(default)]
    pub data_dir: Option<String>,
}

impl Hello {
    /// Banner with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cache_ttl_seconds: None,
            data_dir: None,
        }
    }
}
