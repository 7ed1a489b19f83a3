//! A single menu entry.

use regex::Regex;

use crate::attributes::Attributes;
use crate::content::Content;
use crate::context::RenderContext;
use crate::error::MenuError;
use crate::html::{Element, decode_entities, render_element};
use crate::tree::ItemList;

/// Content plus optional nested children.
///
/// Items are created through [`ItemList::add`], [`ItemList::raw`] and
/// friends; the list that holds an item is its only parent. An item's
/// children list is owned by the item.
#[derive(Clone, Debug)]
pub struct Item {
    content: Content,
    pub(crate) children: Option<ItemList>,
    element: Option<Element>,
    attributes: Attributes,
    active_patterns: Vec<Regex>,
    /// State classes added by the last render, removed before the next one.
    applied: Vec<String>,
}

impl Item {
    pub(crate) fn new(
        content: Content,
        children: Option<ItemList>,
        attributes: Attributes,
        element: Option<Element>,
    ) -> Self {
        Self {
            content,
            children,
            element,
            attributes,
            active_patterns: Vec::new(),
            applied: Vec::new(),
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Children list, even if empty.
    pub fn children(&self) -> Option<&ItemList> {
        self.children.as_ref()
    }

    pub fn children_mut(&mut self) -> Option<&mut ItemList> {
        self.children.as_mut()
    }

    /// Attach (or replace) the children list.
    pub fn set_children(&mut self, children: ItemList) -> &mut Self {
        self.children = Some(children);
        self
    }

    /// True if a non-empty children list is attached.
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|list| !list.is_empty())
    }

    /// Explicit wrapping element; `None` inherits the `item_element` option.
    pub fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }

    pub fn set_element(&mut self, element: impl Into<Element>) -> &mut Self {
        self.element = Some(element.into());
        self
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    pub fn active_patterns(&self) -> &[Regex] {
        &self.active_patterns
    }

    /// Add regex patterns matched against the request path.
    ///
    /// Nothing is added if any pattern fails to compile.
    pub fn add_active_patterns<I, S>(&mut self, patterns: I) -> Result<&mut Self, MenuError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let compiled = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|source| MenuError::InvalidPattern {
                    pattern: pattern.to_owned(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = compiled.len(), "Registered active patterns");
        self.active_patterns.extend(compiled);
        Ok(self)
    }

    /// Whether this item matches the current request.
    ///
    /// A link is active when its evaluated URL equals the request path
    /// (both trimmed of `/`), the full URL, or the URL without query
    /// string. Any content is also active when one of its active patterns
    /// matches the request path.
    pub fn is_active(&self, ctx: &RenderContext<'_>) -> bool {
        let request = ctx.request();

        let url_matches = self.content.as_link().is_some_and(|link| {
            let url = link.evaluated_url(ctx);
            url.trim_matches('/') == request.path_info().trim_matches('/')
                || url == request.full_url()
                || url == request.url()
        });

        url_matches
            || self
                .active_patterns
                .iter()
                .any(|pattern| pattern.is_match(request.path_info()))
    }

    /// Whether any descendant, at any depth and in any branch, is active.
    pub fn has_active_child(&self, ctx: &RenderContext<'_>) -> bool {
        let Some(children) = &self.children else {
            return false;
        };

        let scope = ctx.enter(&children.options, children.name.as_deref());
        let ctx = ctx.within(&scope);
        children
            .items
            .iter()
            .any(|child| child.is_active(&ctx) || child.has_active_child(&ctx))
    }

    /// Render the item at `depth`.
    ///
    /// Adds the active and active-child classes to the item's attributes
    /// (at most once each), appends the rendered children, wraps the result
    /// in the item element and decodes HTML entities in the whole string.
    pub fn render(&mut self, ctx: &RenderContext<'_>, depth: usize) -> String {
        let mut value = self.content.render(ctx);
        self.add_active_classes(ctx);

        if let Some(children) = self.children.as_mut().filter(|list| !list.is_empty())
            && let Some(html) = children.render(ctx, depth + 1)
        {
            value.push_str(&html);
        }

        let element = self.element.as_ref().unwrap_or_else(|| ctx.item_element());
        let html = render_element(element, &value, &self.attributes);

        decode_entities(&html).into_owned()
    }

    /// Replace the state classes of the previous render with the ones for
    /// the current request. Classes set by the caller are never removed.
    fn add_active_classes(&mut self, ctx: &RenderContext<'_>) {
        for class in self.applied.drain(..) {
            self.attributes.remove_class(&class);
        }

        let mut classes = Vec::new();
        if self.is_active(ctx) {
            classes.push(ctx.active_class());
        }
        if self.has_active_child(ctx) {
            classes.push(ctx.active_child_class());
        }

        for class in classes {
            if !class.trim().is_empty() && !self.attributes.has_class(class) {
                self.attributes.add_class(class);
                self.applied.push(class.to_owned());
            }
        }
    }
}
