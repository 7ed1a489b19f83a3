//! Layered rendering options.
//!
//! Every [`ItemList`](crate::ItemList) carries an [`OptionLayer`] of
//! overrides. While a tree is traversed, the enclosing lists form a chain of
//! [`Scope`] frames; an option is looked up from the nearest frame outwards
//! and falls back to [`Defaults`] when no frame sets it.

use serde::Deserialize;

use crate::html::Element;

/// Compiled-in option values used when no list overrides them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Defaults {
    /// Wrapping element of item lists.
    pub item_list_element: Element,
    /// Wrapping element of items.
    pub item_element: Element,
    /// Class added to an item whose link matches the request.
    pub active_class: String,
    /// Class added to an item with an active descendant.
    pub active_child_class: String,
    /// Maximum render depth; `0` means unlimited.
    pub max_depth: usize,
    /// String prepended to relative link URLs.
    pub prefix: String,
    /// Prepend the names of enclosing lists to relative link URLs.
    pub prefix_parents: bool,
    /// Prepend the name of the outermost list to relative link URLs.
    pub prefix_handler: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            item_list_element: Element::tag("ul"),
            item_element: Element::tag("li"),
            active_class: "active".to_owned(),
            active_child_class: "active-child".to_owned(),
            max_depth: 0,
            prefix: String::new(),
            prefix_parents: false,
            prefix_handler: false,
        }
    }
}

/// Per-list option overrides. `None` means "inherit".
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionLayer {
    pub item_list_element: Option<Element>,
    pub item_element: Option<Element>,
    pub active_class: Option<String>,
    pub active_child_class: Option<String>,
    pub max_depth: Option<usize>,
    pub prefix: Option<String>,
    pub prefix_parents: Option<bool>,
    pub prefix_handler: Option<bool>,
}

impl OptionLayer {
    /// True if this layer overrides nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One enclosing item list during a traversal.
///
/// Frames are linked to their parent frame, so the chain from any list up
/// to the root is available without the tree storing parent pointers.
#[derive(Clone, Copy, Debug)]
pub struct Scope<'a> {
    layer: &'a OptionLayer,
    name: Option<&'a str>,
    parent: Option<&'a Scope<'a>>,
}

impl<'a> Scope<'a> {
    /// Frame for a top-level list.
    #[must_use]
    pub fn root(layer: &'a OptionLayer, name: Option<&'a str>) -> Self {
        Self {
            layer,
            name,
            parent: None,
        }
    }

    /// Frame for a list nested inside `self`.
    #[must_use]
    pub fn child(&'a self, layer: &'a OptionLayer, name: Option<&'a str>) -> Self {
        Self {
            layer,
            name,
            parent: Some(self),
        }
    }

    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    pub fn parent(&self) -> Option<&'a Scope<'a>> {
        self.parent
    }

    /// Number of frames from the root to `self`, the root being 1.
    pub fn depth(&self) -> usize {
        self.frames().count()
    }

    /// Frames from `self` up to the root, nearest first.
    pub fn frames(&self) -> impl Iterator<Item = &Scope<'a>> {
        std::iter::successors(Some(self), |scope| scope.parent)
    }

    /// First override found walking from `self` to the root.
    pub fn lookup<T>(&self, pick: impl Fn(&'a OptionLayer) -> Option<T>) -> Option<T> {
        self.frames().find_map(|scope| pick(scope.layer))
    }

    /// Name of the outermost list.
    pub fn root_name(&self) -> Option<&'a str> {
        self.frames().last().and_then(|scope| scope.name)
    }

    /// Names of the enclosing lists above `self`, outermost first.
    ///
    /// Unnamed and empty-named lists are skipped.
    pub fn ancestor_names(&self) -> Vec<&'a str> {
        let mut names: Vec<&'a str> = self
            .frames()
            .skip(1)
            .filter_map(|scope| scope.name)
            .filter(|name| !name.is_empty())
            .collect();
        names.reverse();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_with_depth(depth: usize) -> OptionLayer {
        OptionLayer {
            max_depth: Some(depth),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_table() {
        let defaults = Defaults::default();

        assert_eq!(defaults.item_list_element, Element::tag("ul"));
        assert_eq!(defaults.item_element, Element::tag("li"));
        assert_eq!(defaults.active_class, "active");
        assert_eq!(defaults.active_child_class, "active-child");
        assert_eq!(defaults.max_depth, 0);
        assert!(defaults.prefix.is_empty());
        assert!(!defaults.prefix_parents);
        assert!(!defaults.prefix_handler);
    }

    #[test]
    fn test_lookup_returns_nearest_override() {
        let outer = layer_with_depth(3);
        let inner = layer_with_depth(1);
        let root = Scope::root(&outer, None);
        let child = root.child(&inner, None);

        assert_eq!(child.lookup(|layer| layer.max_depth), Some(1));
        assert_eq!(root.lookup(|layer| layer.max_depth), Some(3));
    }

    #[test]
    fn test_lookup_walks_past_empty_layers() {
        let outer = OptionLayer {
            active_class: Some("current".to_owned()),
            ..Default::default()
        };
        let middle = OptionLayer::default();
        let inner = OptionLayer::default();
        let root = Scope::root(&outer, None);
        let mid = root.child(&middle, None);
        let leaf = mid.child(&inner, None);

        assert_eq!(
            leaf.lookup(|layer| layer.active_class.as_deref()),
            Some("current")
        );
        assert_eq!(leaf.lookup(|layer| layer.prefix.as_deref()), None);
    }

    #[test]
    fn test_root_and_ancestor_names() {
        let layer = OptionLayer::default();
        let root = Scope::root(&layer, Some("main"));
        let unnamed = root.child(&layer, None);
        let admin = unnamed.child(&layer, Some("admin"));
        let leaf = admin.child(&layer, Some("users"));

        assert_eq!(leaf.root_name(), Some("main"));
        assert_eq!(leaf.ancestor_names(), vec!["main", "admin"]);
        assert_eq!(leaf.depth(), 4);
        assert!(root.ancestor_names().is_empty());
    }

    #[test]
    fn test_option_layer_is_empty() {
        assert!(OptionLayer::default().is_empty());
        assert!(!layer_with_depth(2).is_empty());
    }

    #[test]
    fn test_option_layer_deserialize() {
        let layer: OptionLayer = toml::from_str(
            r#"
item_list_element = "ol"
max_depth = 2
prefix = "admin"
"#,
        )
        .unwrap();

        assert_eq!(layer.item_list_element, Some(Element::tag("ol")));
        assert_eq!(layer.max_depth, Some(2));
        assert_eq!(layer.prefix.as_deref(), Some("admin"));
        assert_eq!(layer.prefix_parents, None);
    }
}
