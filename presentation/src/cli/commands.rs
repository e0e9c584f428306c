//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for artisan-story
#[derive(Parser, Debug)]
#[command(name = "artisan-story")]
#[command(author, version, about = "Story generation backend for artisan profiles")]
#[command(long_about = r#"
Artisan Story generates short narratives about artisans and their crafts.

Each request is sanitized, reworded into several prompt variants, and sent to
Gemini with retries across three models. When Gemini keeps failing, OpenAI and
then Hugging Face are tried once each.

Configuration files are loaded from (in priority order):
1. ARTISAN_* environment variables (ARTISAN_SERVER__BIND=0.0.0.0:8000)
2. --config <path>     Explicit config file
3. ./artisan.toml      Project-level config
4. ~/.config/artisan-story/config.toml   Global config

API keys are read from GOOGLE_API_KEY, OPENAI_API_KEY and HUGGINGFACE_API_KEY
unless set in the config file.

Example:
  artisan-story serve --bind 0.0.0.0:8000
  artisan-story generate "A weaver who dyes silk with marigolds"
  artisan-story generate -m gemini-1.5-pro "A potter's first kiln"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to listen on (overrides `[server] bind`)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Generate one story and print the API reply as JSON
    Generate {
        /// Story prompt
        prompt: String,

        /// Gemini model to try first
        #[arg(short, long, value_name = "MODEL", default_value = "gemini-1.5-flash")]
        model: String,
    },
}
