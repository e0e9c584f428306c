//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const APP_DIR: &str = "artisan-story";
const PROJECT_FILES: [&str; 2] = ["artisan.toml", ".artisan.toml"];
const ENV_PREFIX: &str = "ARTISAN_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ARTISAN_` environment variables (`ARTISAN_SERVER__BIND=...`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./artisan.toml` or `./.artisan.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/artisan-story/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        figment = Self::merge_explicit(figment, config_path);
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn merge_explicit(figment: Figment, config_path: Option<&PathBuf>) -> Figment {
        match config_path {
            Some(path) => figment.merge(Toml::file(path)),
            None => figment,
        }
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/artisan-story/config.toml if set,
    /// otherwise the platform config dir.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}* (__ separates sections)", ENV_PREFIX);

        match config_path {
            Some(path) if path.exists() => println!("  [FOUND] Explicit: {}", path.display()),
            Some(path) => println!("  [MISS ] Explicit: {}", path.display()),
            None => {}
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./artisan.toml or ./.artisan.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
