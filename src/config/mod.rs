pub mod merge;
pub mod schema;

pub use schema::*;

use crate::cli::{Cli, Commands};
use crate::error::ConfigError;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the global config dir.
pub const CONFIG_FILE_NAME: &str = "bingserp.toml";

/// Load configuration by merging global, local, and CLI sources.
/// Precedence: CLI > `--config` file (or ./bingserp.toml) > global config > defaults.
///
/// Missing config files are handled gracefully (defaults apply). An explicit
/// `--config` path must exist and parse.
pub fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    // Layer 1: Global config (~/.config/bingserp/bingserp.toml or platform equivalent)
    let global = load_global_config();

    // Layer 2: Explicit config file, or bingserp.toml in the working directory
    let local = match cli.command.config_path() {
        Some(path) => load_explicit_config(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => load_toml_file(Path::new(CONFIG_FILE_NAME)).unwrap_or_default(),
    };

    // Layer 3: CLI args (converted to PartialConfig)
    let cli_partial = cli_to_partial(cli);

    // Merge: CLI > local > global > defaults
    let config = cli_partial
        .with_fallback(local)
        .with_fallback(global)
        .finalize();

    Ok(config)
}

/// Load global config from the platform-specific config directory.
/// Returns empty PartialConfig if file not found.
fn load_global_config() -> PartialConfig {
    match global_config_path() {
        Some(p) => load_toml_file(&p).unwrap_or_default(),
        None => {
            tracing::debug!("Could not determine global config directory");
            PartialConfig::default()
        }
    }
}

/// Load a config file named on the command line. Unlike the implicit
/// layers, a missing or malformed file is an error.
pub fn load_explicit_config(path: &Path) -> Result<PartialConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config_file = parse_config(path, &contents)?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config_file.to_partial())
}

/// Load and parse a TOML config file into a PartialConfig.
/// Returns None on file-not-found; logs parse errors and returns None.
fn load_toml_file(path: &Path) -> Option<PartialConfig> {
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse_config(path, &contents) {
            Ok(config_file) => {
                tracing::info!("Loaded config from {}", path.display());
                Some(config_file.to_partial())
            }
            Err(e) => {
                tracing::warn!("Config parse error: {}", e);
                None
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            None
        }
        Err(e) => {
            tracing::warn!("Failed to read config at {}: {}", path.display(), e);
            None
        }
    }
}

fn parse_config(path: &Path, contents: &str) -> Result<ConfigFile, ConfigError> {
    toml::from_str::<ConfigFile>(contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the platform-specific global config path.
/// Linux: ~/.config/bingserp/bingserp.toml
/// macOS: ~/Library/Application Support/bingserp/bingserp.toml
fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "bingserp")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Convert CLI arguments to a PartialConfig for merging.
fn cli_to_partial(cli: &Cli) -> PartialConfig {
    match &cli.command {
        Commands::Search {
            limit,
            credential_url,
            timeout,
            ..
        } => PartialConfig {
            default_limit: *limit,
            credential_url: credential_url.clone(),
            request_timeout_secs: *timeout,
            ..Default::default()
        },
        Commands::Credential { credential_url, .. } => PartialConfig {
            credential_url: credential_url.clone(),
            ..Default::default()
        },
    }
}
