//! Declarative menu definitions.
//!
//! A [`MenuDefinition`] describes a whole tree in any serde format. The
//! CLI reads them from TOML or JSON files:
//!
//! ```toml
//! name = "main"
//! attributes = { class = "nav" }
//!
//! [[items]]
//! url = "/"
//! value = "Home"
//!
//! [[items]]
//! url = "/users"
//! value = "Users"
//! active_patterns = ['^/users/\d+']
//!
//! [[items.children.items]]
//! url = "/users/new"
//! value = "New user"
//! ```

use serde::Deserialize;

use crate::attributes::Attributes;
use crate::content::{Content, Link, Raw};
use crate::error::MenuError;
use crate::html::Element;
use crate::options::OptionLayer;
use crate::tree::{ItemList, ItemOptions};

/// Item list description.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuDefinition {
    pub name: Option<String>,
    pub element: Option<Element>,
    pub attributes: Attributes,
    pub options: OptionLayer,
    pub items: Vec<ItemDefinition>,
}

/// Item description. Exactly one of `url` and `raw` must be set.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ItemDefinition {
    pub url: Option<String>,
    pub raw: Option<String>,
    pub value: Option<String>,
    pub link_attributes: Attributes,
    pub attributes: Attributes,
    pub element: Option<Element>,
    pub active_patterns: Vec<String>,
    pub children: Option<MenuDefinition>,
}

impl MenuDefinition {
    /// Build the item list through the regular builder API.
    pub fn build(self) -> Result<ItemList, MenuError> {
        let mut list = ItemList::new();
        if let Some(name) = self.name {
            list.set_name(name);
        }
        if let Some(element) = self.element {
            list.set_element(element);
        }
        *list.attributes_mut() = self.attributes;
        *list.options_mut() = self.options;

        for item in self.items {
            item.build_into(&mut list)?;
        }
        Ok(list)
    }
}

impl ItemDefinition {
    fn build_into(self, list: &mut ItemList) -> Result<(), MenuError> {
        let content: Content = match (self.url, self.raw) {
            (Some(url), None) => {
                let mut link = Link::new(&url)?.with_attributes(self.link_attributes);
                if let Some(value) = self.value {
                    link = link.with_value(value);
                }
                link.into()
            }
            (None, Some(_)) if self.value.is_some() || !self.link_attributes.is_empty() => {
                return Err(MenuError::InvalidDefinition(
                    "raw item cannot set value or link_attributes".to_owned(),
                ));
            }
            (None, Some(markup)) => Raw::new(markup).into(),
            (Some(url), Some(_)) => {
                return Err(MenuError::InvalidDefinition(format!(
                    "item {url:?} sets both url and raw"
                )));
            }
            (None, None) => {
                return Err(MenuError::InvalidDefinition(
                    "item needs either url or raw".to_owned(),
                ));
            }
        };

        let mut options = ItemOptions::new().attributes(self.attributes);
        if let Some(children) = self.children {
            options = options.children(children.build()?);
        }
        if let Some(element) = self.element {
            options = options.element(element);
        }

        let item = list.add_content(content, options);
        if !self.active_patterns.is_empty() {
            item.add_active_patterns(&self.active_patterns)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentKind;

    #[test]
    fn test_build_from_toml() {
        let definition: MenuDefinition = toml::from_str(
            r#"
name = "main"
element = "nav"
attributes = { class = "menu" }
options = { max_depth = 2, active_class = "current" }

[[items]]
url = "/"
value = "Home"

[[items]]
raw = "<hr>"
element = ""

[[items]]
url = "/users"
value = "Users"
active_patterns = ['^/users/\d+$']
attributes = { class = "users" }
link_attributes = { title = "All users" }

[items.children]
name = "users"

[[items.children.items]]
url = "/users/new"
value = "New"
"#,
        )
        .unwrap();

        let list = definition.build().unwrap();

        assert_eq!(list.name(), Some("main"));
        assert_eq!(list.element(), Some(&Element::tag("nav")));
        assert_eq!(list.attributes().get("class"), Some("menu"));
        assert_eq!(list.options().max_depth, Some(2));
        assert_eq!(list.options().active_class.as_deref(), Some("current"));
        assert_eq!(list.len(), 3);
        assert_eq!(list.items()[1].element(), Some(&Element::Bare));
        assert_eq!(list.items_by_content_type(ContentKind::Raw).len(), 1);

        let users = &list.items()[2];
        assert_eq!(users.active_patterns().len(), 1);
        assert_eq!(users.attributes().get("class"), Some("users"));
        let link = users.content().as_link().unwrap();
        assert_eq!(link.attributes().get("title"), Some("All users"));
        assert_eq!(link.value(), Some("Users"));
        assert!(list.find("users").is_some());
        assert!(list.find_item_by_url("/users/new").is_some());
    }

    #[test]
    fn test_build_from_json() {
        let definition: MenuDefinition = serde_json::from_str(
            r#"{"items": [{"url": "/a", "value": "A", "children": {"items": [{"raw": "<b>x</b>"}]}}]}"#,
        )
        .unwrap();

        let list = definition.build().unwrap();

        assert_eq!(list.all_items().len(), 2);
        assert!(list.items()[0].has_children());
    }

    #[test]
    fn test_item_with_url_and_raw_is_rejected() {
        let definition: MenuDefinition =
            serde_json::from_str(r#"{"items": [{"url": "/a", "raw": "<b>"}]}"#).unwrap();

        let err = definition.build().unwrap_err();

        assert!(matches!(err, MenuError::InvalidDefinition(_)));
    }

    #[test]
    fn test_raw_item_with_link_fields_is_rejected() {
        for json in [
            r#"{"items": [{"raw": "<hr>", "value": "Divider"}]}"#,
            r#"{"items": [{"raw": "<hr>", "link_attributes": {"title": "x"}}]}"#,
        ] {
            let definition: MenuDefinition = serde_json::from_str(json).unwrap();

            assert!(matches!(
                definition.build().unwrap_err(),
                MenuError::InvalidDefinition(_)
            ));
        }
    }

    #[test]
    fn test_item_without_content_is_rejected() {
        let definition: MenuDefinition =
            serde_json::from_str(r#"{"items": [{"value": "A"}]}"#).unwrap();

        assert!(matches!(
            definition.build().unwrap_err(),
            MenuError::InvalidDefinition(_)
        ));
    }

    #[test]
    fn test_invalid_url_template_propagates() {
        let definition: MenuDefinition =
            serde_json::from_str(r#"{"items": [{"url": "/a/{id"}]}"#).unwrap();

        assert!(matches!(
            definition.build().unwrap_err(),
            MenuError::InvalidUrlTemplate { .. }
        ));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<MenuDefinition, _> =
            serde_json::from_str(r#"{"items": [{"url": "/a", "href": "/b"}]}"#);

        assert!(result.is_err());
    }
}
