use crate::error::{DocstoreError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BIND_ADDRESS: &str = "localhost";
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Process configuration, read from a JSON file such as:
///
/// ```json
/// { "server-port": 8080, "store-dir": "/var/lib/docstore" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ServerConfig {
    /// Port the HTTP server listens on
    pub server_port: u16,

    /// Directory holding the index and payload files
    pub store_dir: PathBuf,

    /// Host or address to bind
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Upper bound on the size of an uploaded payload
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_max_payload_bytes() -> usize {
    DEFAULT_MAX_PAYLOAD_BYTES
}

impl ServerConfig {
    pub fn new(server_port: u16, store_dir: impl Into<PathBuf>) -> Self {
        Self {
            server_port,
            store_dir: store_dir.into(),
            bind_address: default_bind_address(),
            max_payload_bytes: default_max_payload_bytes(),
        }
    }

    /// Load config from the given file. A missing or malformed file is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DocstoreError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| DocstoreError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    /// The `host:port` string to listen on.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.server_port)
    }
}
