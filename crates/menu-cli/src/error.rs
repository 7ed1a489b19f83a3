//! CLI error types.

use menu::MenuError;
use menu_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Menu(#[from] MenuError),

    #[error("Failed to parse {path}: {message}")]
    Definition { path: String, message: String },

    #[error("{0}")]
    Validation(String),
}
