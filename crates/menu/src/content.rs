//! Renderable payload of a menu item: a link or raw markup.

use crate::attributes::Attributes;
use crate::context::RenderContext;
use crate::error::MenuError;
use crate::html::{Element, render_element};
use crate::request::Request;

/// Runtime variant of a [`Content`] value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Link,
    Raw,
}

/// Payload of an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Link(Link),
    Raw(Raw),
}

impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Link(_) => ContentKind::Link,
            Self::Raw(_) => ContentKind::Raw,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link(_))
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Self::Link(link) => Some(link),
            Self::Raw(_) => None,
        }
    }

    /// Unevaluated link URL; `None` for raw content.
    pub fn url(&self) -> Option<&str> {
        self.as_link().map(Link::url)
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        match self {
            Self::Link(link) => link.render(ctx),
            Self::Raw(raw) => raw.render().to_owned(),
        }
    }
}

impl From<Link> for Content {
    fn from(link: Link) -> Self {
        Self::Link(link)
    }
}

impl From<Raw> for Content {
    fn from(raw: Raw) -> Self {
        Self::Raw(raw)
    }
}

/// Raw markup, emitted without escaping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raw {
    markup: String,
}

impl Raw {
    #[must_use]
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    pub fn render(&self) -> &str {
        &self.markup
    }
}

/// Hyperlink rendered as an `<a>` element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    template: UrlTemplate,
    value: Option<String>,
    attributes: Attributes,
}

impl Link {
    /// Create a link, validating `{placeholder}` syntax in `url`.
    pub fn new(url: &str) -> Result<Self, MenuError> {
        Ok(Self {
            template: UrlTemplate::parse(url)?,
            value: None,
            attributes: Attributes::new(),
        })
    }

    /// Set the link body.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the attributes of the `<a>` element.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// The URL as given, before placeholder substitution and prefixing.
    pub fn url(&self) -> &str {
        &self.template.raw
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Final URL at the current position in the tree.
    ///
    /// Placeholders are filled from the request's route parameters. External
    /// URLs are returned as is; relative ones get the prefixes configured on
    /// the enclosing lists, keeping a leading `/` if the URL had one.
    pub fn evaluated_url(&self, ctx: &RenderContext<'_>) -> String {
        let url = self.template.expand(ctx.request());
        if is_external(&url) {
            return url;
        }

        let prefixes = ctx.url_prefixes();
        if prefixes.is_empty() {
            return url;
        }

        let path = url.trim_matches('/');
        let joined = prefixes
            .iter()
            .map(|segment| segment.trim_matches('/'))
            .chain((!path.is_empty()).then_some(path))
            .collect::<Vec<_>>()
            .join("/");

        if url.starts_with('/') {
            format!("/{joined}")
        } else {
            joined
        }
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut attributes = self.attributes.clone();
        attributes.set("href", self.evaluated_url(ctx));
        render_element(
            &Element::tag("a"),
            self.value.as_deref().unwrap_or_default(),
            &attributes,
        )
    }
}

/// Whether a URL points outside the menu's own path space.
fn is_external(url: &str) -> bool {
    has_scheme(url)
        || url.starts_with("//")
        || url.starts_with("mailto:")
        || url.starts_with("tel:")
        || url.starts_with('#')
}

/// `scheme://` at the start of `url`, with a scheme of `[A-Za-z][A-Za-z0-9+.-]*`.
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Link URL split into literal text and `{name}` placeholders.
#[derive(Clone, Debug, PartialEq, Eq)]
struct UrlTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl UrlTemplate {
    fn parse(raw: &str) -> Result<Self, MenuError> {
        let invalid = |message: &str| MenuError::InvalidUrlTemplate {
            url: raw.to_owned(),
            message: message.to_owned(),
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars();
        while let Some(ch) = chars.next() {
            match ch {
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') => return Err(invalid("nested '{' in placeholder")),
                            Some(c) => name.push(c),
                            None => return Err(invalid("unclosed placeholder")),
                        }
                    }
                    if !is_param_name(&name) {
                        return Err(invalid(&format!("invalid placeholder name {name:?}")));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Param(name));
                }
                '}' => return Err(invalid("unmatched '}'")),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            raw: raw.to_owned(),
            segments,
        })
    }

    /// Substitute placeholders. Unknown parameters are kept as `{name}`.
    fn expand(&self, request: &dyn Request) -> String {
        let mut out = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Param(name) => {
                    if let Some(value) = request.route_param(name) {
                        out.push_str(value);
                    } else {
                        tracing::debug!(param = %name, url = %self.raw, "Unresolved route parameter");
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
            }
        }
        out
    }
}

fn is_param_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
