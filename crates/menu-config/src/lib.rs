//! Configuration management for menu rendering.
//!
//! Parses `menu.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. The values form
//! the default option table every menu falls back to.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! max_depth = 2
//!
//! [item_list]
//! element = "ul"
//! prefix = "${APP_BASE:-}"
//!
//! [item]
//! element = "li"
//! active_class = "active"
//! active_child_class = "active-child"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `item_list.prefix` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override maximum render depth.
    pub max_depth: Option<usize>,
    /// Override the active item class.
    pub active_class: Option<String>,
    /// Override the active descendant class.
    pub active_child_class: Option<String>,
    /// Override the link prefix.
    pub prefix: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "menu.toml";

/// Menu configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum render depth; 0 renders every level.
    pub max_depth: usize,
    /// Item list options.
    pub item_list: ItemListConfig,
    /// Item options.
    pub item: ItemConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Item list configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ItemListConfig {
    /// Wrapping element; empty for none.
    pub element: String,
    /// String prepended to relative link URLs.
    pub prefix: String,
    /// Prepend enclosing list names to relative link URLs.
    pub prefix_parents: bool,
    /// Prepend the outermost list name to relative link URLs.
    pub prefix_handler: bool,
}

impl Default for ItemListConfig {
    fn default() -> Self {
        Self {
            element: "ul".to_owned(),
            prefix: String::new(),
            prefix_parents: false,
            prefix_handler: false,
        }
    }
}

/// Item configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ItemConfig {
    /// Wrapping element; empty for none.
    pub element: String,
    /// Class added to items matching the request.
    pub active_class: String,
    /// Class added to items with an active descendant.
    pub active_child_class: String,
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            element: "li".to_owned(),
            active_class: "active".to_owned(),
            active_child_class: "active-child".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`item_list.prefix`").
        field: String,
        /// Error message (e.g., "${`APP_BASE`} not set").
        message: String,
    },
}

/// Require an element name to be empty or a plain tag name.
fn require_element_name(value: &str, field: &str) -> Result<(), ConfigError> {
    let mut chars = value.chars();
    let valid = match chars.next() {
        None => true,
        Some(first) => {
            first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
    };
    if !valid {
        return Err(ConfigError::Validation(format!(
            "{field} must be empty or a tag name, got {value:?}"
        )));
    }
    Ok(())
}

/// Require a class name to be a single non-empty token.
fn require_class_name(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "{field} must be a single class name"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `menu.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to
    /// take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(max_depth) = settings.max_depth {
            self.max_depth = max_depth;
        }
        if let Some(active_class) = &settings.active_class {
            self.item.active_class.clone_from(active_class);
        }
        if let Some(active_child_class) = &settings.active_child_class {
            self.item.active_child_class.clone_from(active_child_class);
        }
        if let Some(prefix) = &settings.prefix {
            self.item_list.prefix.clone_from(prefix);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_element_name(&self.item_list.element, "item_list.element")?;
        require_element_name(&self.item.element, "item.element")?;
        require_class_name(&self.item.active_class, "item.active_class")?;
        require_class_name(&self.item.active_child_class, "item.active_child_class")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.item_list.prefix = expand::expand_env(&self.item_list.prefix, "item_list.prefix")?;
        Ok(())
    }
}
