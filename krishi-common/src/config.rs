//! Configuration loading and root folder resolution
//!
//! # Settings Sources Priority
//!
//! 1. Command-line arguments (`--port`, `--root-folder`, `--config`)
//! 2. Environment variables (`KRISHI_*`)
//! 3. TOML configuration file
//! 4. Built-in defaults (code constants)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default HTTP port for krishi-diagnose
pub const DEFAULT_PORT: u16 = 5780;

/// Name of the TOML file looked up in the platform config directory
pub const CONFIG_FILE_NAME: &str = "krishi.toml";

/// Bootstrap configuration loaded from TOML file
///
/// Cannot change during runtime; restart to pick up edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Root folder for persisted user context (optional)
    #[serde(default)]
    pub root_folder: Option<PathBuf>,

    /// Language key used before a user picks one
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Optional TOML file replacing the built-in location hierarchy
    #[serde(default)]
    pub locations_file: Option<PathBuf>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Simulated analysis timings
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) or a full EnvFilter directive
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Timings for the simulated analysis pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Interval between progress ticks
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Upper bound of a single random progress increment (percentage points)
    #[serde(default = "default_max_increment")]
    pub max_increment: f64,

    /// Pause between reaching 100% and showing results
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Latency of the simulated analysis backend
    #[serde(default)]
    pub backend_latency_ms: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_language() -> String {
    "en".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_interval_ms() -> u64 {
    200
}

fn default_max_increment() -> f64 {
    15.0
}

fn default_settle_delay_ms() -> u64 {
    500
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            root_folder: None,
            default_language: default_language(),
            locations_file: None,
            logging: LoggingConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            max_increment: default_max_increment(),
            settle_delay_ms: default_settle_delay_ms(),
            backend_latency_ms: 0,
        }
    }
}

impl AnalysisConfig {
    /// Reject timings that would stall or never finish the simulation
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(Error::Config(
                "analysis.tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if !self.max_increment.is_finite() || self.max_increment <= 0.0 {
            return Err(Error::Config(format!(
                "analysis.max_increment must be a positive number, got {}",
                self.max_increment
            )));
        }
        Ok(())
    }
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))?;
        config.analysis.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve configuration: explicit path, then `KRISHI_CONFIG`, then the
    /// platform config file, then built-in defaults.
    ///
    /// An explicitly named file that fails to load is an error; a missing
    /// platform file silently falls back to defaults.
    pub fn resolve(cli_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = cli_path {
            return Self::load(path);
        }

        if let Ok(path) = std::env::var("KRISHI_CONFIG") {
            return Self::load(Path::new(&path));
        }

        match find_config_file() {
            Some(path) => Self::load(&path),
            None => {
                debug!("No configuration file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply `KRISHI_PORT`, `KRISHI_HOST` and `KRISHI_LANGUAGE` overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(port) = std::env::var("KRISHI_PORT") {
            match port.parse::<u16>() {
                Ok(p) => self.port = p,
                Err(_) => warn!("Ignoring invalid KRISHI_PORT value '{}'", port),
            }
        }
        if let Ok(host) = std::env::var("KRISHI_HOST") {
            if !host.trim().is_empty() {
                self.host = host;
            }
        }
        if let Ok(lang) = std::env::var("KRISHI_LANGUAGE") {
            if !lang.trim().is_empty() {
                self.default_language = lang;
            }
        }
    }
}

/// Root folder resolution priority:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config value
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    config: &TomlConfig,
) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = &config.root_folder {
        return path.clone();
    }

    // Priority 4: OS-dependent compiled default
    get_default_root_folder()
}

/// Create the root folder if it does not exist yet
pub fn ensure_root_folder(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
        info!("Created root folder: {}", path.display());
    }
    if !path.is_dir() {
        return Err(Error::Config(format!(
            "Root folder is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Locate the configuration file for the platform, if any exists
fn find_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("krishi").join(CONFIG_FILE_NAME));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/krishi").join(CONFIG_FILE_NAME);
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Get OS-dependent default root folder path
pub fn get_default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/krishi (or /var/lib/krishi for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("krishi"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/krishi"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("krishi"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/krishi"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("krishi"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\krishi"))
    } else {
        PathBuf::from("./krishi_data")
    }
}
