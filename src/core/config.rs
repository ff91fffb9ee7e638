//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.charex/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::paging::PagePolicy;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub paging: PagingConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PagingConfig {
    pub start_page: Option<u32>,
    pub max_page: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScrollConfig {
    pub debounce_ms: Option<u64>,
    pub threshold_rows: Option<u16>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub start_page: Option<u32>,
    pub max_page: Option<u32>,
    pub debounce_ms: Option<u64>,
    pub threshold_rows: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api/character";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_START_PAGE: u32 = 1;
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_THRESHOLD_ROWS: u16 = 8;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub policy: PagePolicy,
    pub debounce: Duration,
    pub threshold_rows: u16,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.charex/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".charex").join("config.toml"))
}

/// Load config from `path`, or from `~/.charex/config.toml` when `None`.
///
/// A missing default file is generated (commented out) and treated as empty.
/// A missing explicit path is an error. A malformed file returns
/// `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<ExplorerConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => {
                if !p.exists() {
                    info!("No config file found, generating default at {}", p.display());
                    generate_default_config(&p);
                    return Ok(ExplorerConfig::default());
                }
                p
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(ExplorerConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<ExplorerConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Character Explorer Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "https://rickandmortyapi.com/api/character"   # Or CHAREX_BASE_URL
# timeout_secs = 10

# [paging]
# start_page = 1
# max_page = 42                      # Omit to page until the API runs out. Or CHAREX_MAX_PAGE

# [scroll]
# debounce_ms = 500                  # Quiet time after the last scroll before checking
# threshold_rows = 8                 # Load more when this close to the end
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ExplorerConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &ExplorerConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("CHAREX_BASE_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let start_page = cli
        .start_page
        .or(config.paging.start_page)
        .unwrap_or(DEFAULT_START_PAGE)
        .max(1);

    // Max page: CLI → env → config → unbounded
    let env_max_page = env("CHAREX_MAX_PAGE").and_then(|raw| match raw.trim().parse::<u32>() {
        Ok(page) => Some(page),
        Err(e) => {
            warn!("Ignoring CHAREX_MAX_PAGE={:?}: {}", raw, e);
            None
        }
    });
    let max_page = cli
        .max_page
        .or(env_max_page)
        .or(config.paging.max_page)
        .map(|max| {
            if max < start_page {
                warn!("max_page {} is below start_page {}, clamping", max, start_page);
                start_page
            } else {
                max
            }
        });

    ResolvedConfig {
        base_url,
        timeout: Duration::from_secs(config.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        policy: PagePolicy {
            start_page,
            max_page,
        },
        debounce: Duration::from_millis(
            cli.debounce_ms
                .or(config.scroll.debounce_ms)
                .unwrap_or(DEFAULT_DEBOUNCE_MS),
        ),
        threshold_rows: cli
            .threshold_rows
            .or(config.scroll.threshold_rows)
            .unwrap_or(DEFAULT_THRESHOLD_ROWS),
    }
}
