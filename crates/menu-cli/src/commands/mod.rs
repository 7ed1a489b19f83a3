//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod tree;

pub(crate) use render::RenderArgs;
pub(crate) use tree::TreeArgs;

use std::path::Path;

use menu::{Defaults, ItemList, MenuDefinition};
use menu_config::Config;

use crate::error::CliError;

/// Read a menu definition file and build its tree.
///
/// The format follows the file extension: `.json` or `.toml`.
pub(crate) fn load_definition(path: &Path) -> Result<ItemList, CliError> {
    let content = std::fs::read_to_string(path)?;
    let parse_error = |message: String| CliError::Definition {
        path: path.display().to_string(),
        message,
    };

    let definition: MenuDefinition = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
        Some("toml") => toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
        _ => {
            return Err(CliError::Validation(format!(
                "Unsupported definition format: {} (expected .json or .toml)",
                path.display()
            )));
        }
    };

    tracing::info!(path = %path.display(), "Loaded menu definition");
    Ok(definition.build()?)
}

/// Option defaults taken from the loaded configuration.
pub(crate) fn defaults_from_config(config: &Config) -> Defaults {
    Defaults {
        item_list_element: config.item_list.element.as_str().into(),
        item_element: config.item.element.as_str().into(),
        active_class: config.item.active_class.clone(),
        active_child_class: config.item.active_child_class.clone(),
        max_depth: config.max_depth,
        prefix: config.item_list.prefix.clone(),
        prefix_parents: config.item_list.prefix_parents,
        prefix_handler: config.item_list.prefix_handler,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu::Element;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn definition_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_toml_definition() {
        let file = definition_file(".toml", "[[items]]\nurl = \"/a\"\nvalue = \"A\"\n");

        let list = load_definition(file.path()).unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].content().url(), Some("/a"));
    }

    #[test]
    fn test_load_json_definition() {
        let file = definition_file(".json", r#"{"name": "main", "items": [{"raw": "<hr>"}]}"#);

        let list = load_definition(file.path()).unwrap();

        assert_eq!(list.name(), Some("main"));
        assert!(!list.items()[0].content().is_link());
    }

    #[test]
    fn test_load_unknown_extension() {
        let file = definition_file(".yaml", "items: []");

        let err = load_definition(file.path()).unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
    }

    #[test]
    fn test_load_malformed_definition() {
        let file = definition_file(".json", "{\"items\": [");

        let err = load_definition(file.path()).unwrap_err();

        assert!(matches!(err, CliError::Definition { .. }));
    }

    #[test]
    fn test_load_invalid_item_reports_menu_error() {
        let file = definition_file(".json", r#"{"items": [{"url": "/a", "raw": "<hr>"}]}"#);

        let err = load_definition(file.path()).unwrap_err();

        assert!(matches!(err, CliError::Menu(_)));
    }

    #[test]
    fn test_defaults_from_config() {
        let mut config = Config::default();
        config.item.element = String::new();
        config.item.active_class = "current".to_owned();
        config.max_depth = 2;

        let defaults = defaults_from_config(&config);

        assert_eq!(defaults.item_list_element, Element::tag("ul"));
        assert_eq!(defaults.item_element, Element::Bare);
        assert_eq!(defaults.active_class, "current");
        assert_eq!(defaults.active_child_class, "active-child");
        assert_eq!(defaults.max_depth, 2);
    }

    #[test]
    fn test_default_config_matches_library_defaults() {
        assert_eq!(defaults_from_config(&Config::default()), Defaults::default());
    }
}
