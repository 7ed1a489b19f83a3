//! Ordered container of menu items.

use crate::attributes::Attributes;
use crate::content::{Content, Link, Raw};
use crate::context::RenderContext;
use crate::error::MenuError;
use crate::html::{Element, render_element};
use crate::options::OptionLayer;
use crate::tree::Item;

/// Optional parts of a new item: nested children, attributes of the item
/// element, and the item element itself.
#[derive(Clone, Debug, Default)]
pub struct ItemOptions {
    children: Option<ItemList>,
    attributes: Attributes,
    element: Option<Element>,
}

impl ItemOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn children(mut self, children: ItemList) -> Self {
        self.children = Some(children);
        self
    }

    #[must_use]
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    #[must_use]
    pub fn element(mut self, element: impl Into<Element>) -> Self {
        self.element = Some(element.into());
        self
    }
}

/// Ordered list of [`Item`]s, rendered as one wrapping element.
///
/// Insertion order is render order and lookup order. Mutating methods
/// return `&mut Self` so calls can be chained:
///
/// ```
/// use menu::ItemList;
///
/// let mut list = ItemList::named("main");
/// list.add("/", "Home")?
///     .add("/users", "Users")?
///     .active_pattern(r"^/users/\d+")?
///     .raw("<li class=\"divider\"></li>");
///
/// assert_eq!(list.len(), 3);
/// # Ok::<(), menu::MenuError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ItemList {
    pub(crate) name: Option<String>,
    pub(crate) items: Vec<Item>,
    pub(crate) element: Option<Element>,
    pub(crate) attributes: Attributes,
    pub(crate) options: OptionLayer,
}

impl ItemList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Explicit wrapping element; `None` inherits the `item_list_element`
    /// option.
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

    /// Set an attribute of the wrapping element.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.set(key, value);
        self
    }

    /// Option overrides of this list, inherited by nested lists.
    pub fn options(&self) -> &OptionLayer {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut OptionLayer {
        &mut self.options
    }

    /// Prepend `prefix` to relative link URLs in this list and below.
    pub fn prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.options.prefix = Some(prefix.into());
        self
    }

    /// Prepend the names of enclosing lists to relative link URLs.
    pub fn prefix_parents(&mut self, enabled: bool) -> &mut Self {
        self.options.prefix_parents = Some(enabled);
        self
    }

    /// Prepend the name of the outermost list to relative link URLs.
    pub fn prefix_handler(&mut self, enabled: bool) -> &mut Self {
        self.options.prefix_handler = Some(enabled);
        self
    }

    /// Stop rendering below `depth`; `0` means unlimited.
    pub fn max_depth(&mut self, depth: usize) -> &mut Self {
        self.options.max_depth = Some(depth);
        self
    }

    /// Append an item holding `content` and return it.
    pub fn add_content(&mut self, content: impl Into<Content>, options: ItemOptions) -> &mut Item {
        let ItemOptions {
            children,
            attributes,
            element,
        } = options;

        self.items
            .push(Item::new(content.into(), children, attributes, element));
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    /// Append a link item.
    pub fn add(&mut self, url: &str, value: &str) -> Result<&mut Self, MenuError> {
        self.add_with(url, value, Attributes::new(), ItemOptions::new())
    }

    /// Append a link item with `<a>` attributes and item options.
    pub fn add_with(
        &mut self,
        url: &str,
        value: &str,
        link_attributes: Attributes,
        options: ItemOptions,
    ) -> Result<&mut Self, MenuError> {
        let link = Link::new(url)?
            .with_value(value)
            .with_attributes(link_attributes);
        self.add_content(link, options);
        Ok(self)
    }

    /// Append a raw markup item.
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.raw_with(markup, ItemOptions::new())
    }

    pub fn raw_with(&mut self, markup: &str, options: ItemOptions) -> &mut Self {
        self.add_content(Raw::new(markup), options);
        self
    }

    /// The most recently added item.
    pub fn on_item(&mut self) -> Option<&mut Item> {
        self.items.last_mut()
    }

    /// Add an active pattern to the most recently added item.
    ///
    /// Must follow the [`add`](Self::add) or [`raw`](Self::raw) call it is
    /// meant for.
    pub fn active_pattern(&mut self, pattern: &str) -> Result<&mut Self, MenuError> {
        self.active_patterns([pattern])
    }

    /// Add several active patterns to the most recently added item.
    pub fn active_patterns<I, S>(&mut self, patterns: I) -> Result<&mut Self, MenuError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.on_item()
            .ok_or(MenuError::NoItem)?
            .add_active_patterns(patterns)?;
        Ok(self)
    }

    /// Append copies of all items of `other`. `other` is left unchanged.
    pub fn attach(&mut self, other: &ItemList) -> &mut Self {
        tracing::debug!(
            count = other.items.len(),
            from = other.name.as_deref().unwrap_or_default(),
            "Attaching items"
        );
        self.items.extend(other.items.iter().cloned());
        self
    }

    /// Render this list at `depth`.
    ///
    /// Returns `None` when a non-zero `max_depth` is in effect and `depth`
    /// exceeds it; the items below are then left out of the parent's
    /// output. A list with no items and a bare element renders as an empty
    /// string.
    pub fn render(&mut self, ctx: &RenderContext<'_>, depth: usize) -> Option<String> {
        let scope = ctx.enter(&self.options, self.name.as_deref());
        let ctx = ctx.within(&scope);

        let max_depth = ctx.max_depth();
        if max_depth != 0 && depth > max_depth {
            tracing::debug!(depth, max_depth, name = ?self.name, "Item list suppressed");
            return None;
        }

        let mut contents = String::new();
        for item in &mut self.items {
            contents.push_str(&item.render(&ctx, depth + 1));
        }

        let element = self.element.as_ref().unwrap_or_else(|| ctx.item_list_element());
        Some(render_element(element, &contents, &self.attributes))
    }

    /// Render this list as the top of a menu.
    pub fn to_html(&mut self, ctx: &RenderContext<'_>) -> String {
        self.render(ctx, 0).unwrap_or_default()
    }
}
