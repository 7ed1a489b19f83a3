//! Menu construction errors.

/// Error returned when a menu tree cannot be built.
///
/// Rendering never fails; every variant here is raised while content is
/// being added or configured, so a tree never holds half-built content.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// Link URL contains a malformed `{placeholder}`.
    #[error("Invalid URL template {url:?}: {message}")]
    InvalidUrlTemplate {
        /// The URL as passed by the caller.
        url: String,
        /// What is wrong with it.
        message: String,
    },
    /// Active pattern is not a valid regular expression.
    #[error("Invalid active pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The pattern as passed by the caller.
        pattern: String,
        /// Regex compilation error.
        #[source]
        source: regex::Error,
    },
    /// An operation targeting the last added item was called on an empty list.
    #[error("Item list is empty: add an item before configuring it")]
    NoItem,
    /// Declarative menu definition is inconsistent.
    #[error("Invalid menu definition: {0}")]
    InvalidDefinition(String),
}
