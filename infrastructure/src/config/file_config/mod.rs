//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types at
//! the composition root.

mod generation;
mod providers;
mod server;

pub use generation::FileGenerationConfig;
pub use providers::{
    FileGeminiConfig, FileHuggingFaceConfig, FileOpenAiConfig, FileProvidersConfig,
};
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Retry loop settings
    pub generation: FileGenerationConfig,
    /// Provider credentials and endpoints
    pub providers: FileProvidersConfig,
}
