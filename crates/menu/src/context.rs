//! Traversal context shared by rendering and active-state checks.

use crate::html::Element;
use crate::options::{Defaults, OptionLayer, Scope};
use crate::request::Request;

/// Request, default options and the chain of enclosing lists.
///
/// A context created with [`RenderContext::new`] sits outside any list; the
/// tree enters a new [`Scope`] for each list it descends into, so option
/// lookups and URL prefixes reflect the position in the tree.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    request: &'a dyn Request,
    defaults: &'a Defaults,
    scope: Option<&'a Scope<'a>>,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub fn new(request: &'a dyn Request, defaults: &'a Defaults) -> Self {
        Self {
            request,
            defaults,
            scope: None,
        }
    }

    pub fn request(&self) -> &'a dyn Request {
        self.request
    }

    pub fn defaults(&self) -> &'a Defaults {
        self.defaults
    }

    /// Innermost enclosing list, if any.
    pub fn scope(&self) -> Option<&'a Scope<'a>> {
        self.scope
    }

    /// Build the frame for a list nested at the current position.
    pub(crate) fn enter<'s>(&'s self, layer: &'s OptionLayer, name: Option<&'s str>) -> Scope<'s> {
        match self.scope {
            Some(parent) => parent.child(layer, name),
            None => Scope::root(layer, name),
        }
    }

    /// Same request and defaults, positioned inside `scope`.
    pub(crate) fn within<'s>(&'s self, scope: &'s Scope<'s>) -> RenderContext<'s> {
        RenderContext {
            request: self.request,
            defaults: self.defaults,
            scope: Some(scope),
        }
    }

    fn lookup<T>(&self, pick: impl Fn(&'a OptionLayer) -> Option<T>) -> Option<T> {
        self.scope.and_then(|scope| scope.lookup(pick))
    }

    pub fn item_list_element(&self) -> &'a Element {
        self.lookup(|layer| layer.item_list_element.as_ref())
            .unwrap_or(&self.defaults.item_list_element)
    }

    pub fn item_element(&self) -> &'a Element {
        self.lookup(|layer| layer.item_element.as_ref())
            .unwrap_or(&self.defaults.item_element)
    }

    pub fn active_class(&self) -> &'a str {
        self.lookup(|layer| layer.active_class.as_deref())
            .unwrap_or(&self.defaults.active_class)
    }

    pub fn active_child_class(&self) -> &'a str {
        self.lookup(|layer| layer.active_child_class.as_deref())
            .unwrap_or(&self.defaults.active_child_class)
    }

    pub fn max_depth(&self) -> usize {
        self.lookup(|layer| layer.max_depth)
            .unwrap_or(self.defaults.max_depth)
    }

    /// Nearest non-empty prefix. An empty override does not hide an outer one.
    pub fn prefix(&self) -> &'a str {
        self.lookup(|layer| {
            layer
                .prefix
                .as_deref()
                .filter(|prefix| !prefix.trim_matches('/').is_empty())
        })
        .unwrap_or(&self.defaults.prefix)
    }

    pub fn prefix_parents(&self) -> bool {
        self.lookup(|layer| layer.prefix_parents)
            .unwrap_or(self.defaults.prefix_parents)
    }

    pub fn prefix_handler(&self) -> bool {
        self.lookup(|layer| layer.prefix_handler)
            .unwrap_or(self.defaults.prefix_handler)
    }

    /// Path segments prepended to relative link URLs at this position.
    ///
    /// Order is outermost first: the root list name (`prefix_handler`),
    /// the enclosing list names (`prefix_parents`, without the root when it
    /// was already added), then the nearest `prefix` string.
    pub fn url_prefixes(&self) -> Vec<&'a str> {
        let mut segments = Vec::new();
        let handler = self.prefix_handler();

        if let Some(scope) = self.scope {
            if handler && let Some(root) = scope.root_name() {
                segments.push(root);
            }
            if self.prefix_parents() {
                let mut names = scope.ancestor_names();
                let root_named = scope.root_name().is_some_and(|name| !name.is_empty());
                if handler && root_named && scope.parent().is_some() {
                    names.remove(0);
                }
                segments.extend(names);
            }
        }

        segments.push(self.prefix());
        segments.retain(|segment| !segment.trim_matches('/').is_empty());
        segments
    }
}
