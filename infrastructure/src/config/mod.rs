//! Configuration file loading for artisan-story
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed `ARTISAN_` (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./artisan.toml` or `./.artisan.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/artisan-story/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGeminiConfig, FileGenerationConfig, FileHuggingFaceConfig, FileOpenAiConfig,
    FileProvidersConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
