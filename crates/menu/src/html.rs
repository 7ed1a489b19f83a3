//! HTML element serialization and entity decoding.
//!
//! This is the only place where markup is produced. Lists, items and links
//! all go through [`render_element`], which quotes attribute values and
//! leaves the inner content untouched.

use std::borrow::Cow;
use std::fmt::Write;

use quick_xml::escape::{escape, resolve_html5_entity};
use serde::Deserialize;

use crate::attributes::Attributes;

/// Longest entity name worth looking up (`&CounterClockwiseContourIntegral;`).
const MAX_ENTITY_LEN: usize = 32;

/// Wrapping element of an item list or item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Element {
    /// No wrapper: the inner content is emitted as is.
    Bare,
    /// Wrap in `<tag>...</tag>`.
    Tag(String),
}

impl Element {
    /// Create a tag element. An empty name yields [`Element::Bare`].
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.trim().is_empty() {
            Self::Bare
        } else {
            Self::Tag(name)
        }
    }

    /// Tag name, or `None` for a bare element.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Bare => None,
            Self::Tag(name) => Some(name),
        }
    }
}

impl From<String> for Element {
    fn from(name: String) -> Self {
        Self::tag(name)
    }
}

impl From<&str> for Element {
    fn from(name: &str) -> Self {
        Self::tag(name)
    }
}

/// Serialize an element with its attributes around `inner`.
///
/// Attribute values are escaped; `inner` is trusted markup and is not.
/// A [`Element::Bare`] element returns `inner` unchanged.
pub fn render_element(element: &Element, inner: &str, attributes: &Attributes) -> String {
    let Some(tag) = element.name() else {
        return inner.to_owned();
    };

    let mut out = String::with_capacity(inner.len() + 2 * tag.len() + 5);
    out.push('<');
    out.push_str(tag);
    for (name, value) in attributes.iter() {
        write!(out, r#" {name}="{}""#, escape(value)).unwrap();
    }
    out.push('>');
    out.push_str(inner);
    write!(out, "</{tag}>").unwrap();
    out
}

/// Decode HTML character references in a single pass.
///
/// Handles named HTML5 entities as well as decimal (`&#39;`) and hex
/// (`&#x27;`) references. Anything that does not resolve, including a bare
/// `&`, is copied through verbatim.
pub fn decode_entities(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        if let Some(end) = after.find(';')
            && end <= MAX_ENTITY_LEN
            && resolve_entity(&after[..end], &mut out)
        {
            rest = &after[end + 1..];
        } else {
            out.push('&');
            rest = after;
        }
    }
    out.push_str(rest);

    Cow::Owned(out)
}

/// Push the decoded form of `entity` (without `&` and `;`) onto `out`.
fn resolve_entity(entity: &str, out: &mut String) -> bool {
    if let Some(number) = entity.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => number.parse::<u32>(),
        };
        return match code.ok().and_then(char::from_u32) {
            Some(ch) if ch != '\0' => {
                out.push(ch);
                true
            }
            _ => false,
        };
    }

    match resolve_html5_entity(entity) {
        Some(decoded) => {
            out.push_str(decoded);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_element_with_attributes() {
        let attrs = Attributes::new().with("class", "nav").with("id", "main");

        let html = render_element(&Element::tag("ul"), "<li>x</li>", &attrs);

        assert_eq!(html, r#"<ul class="nav" id="main"><li>x</li></ul>"#);
    }

    #[test]
    fn test_render_element_bare_returns_inner() {
        let attrs = Attributes::new().with("class", "ignored");

        let html = render_element(&Element::Bare, "<a>x</a>", &attrs);

        assert_eq!(html, "<a>x</a>");
    }

    #[test]
    fn test_render_element_escapes_attribute_values() {
        let attrs = Attributes::new().with("title", r#"Tom & "Jerry""#);

        let html = render_element(&Element::tag("span"), "", &attrs);

        assert_eq!(html, r#"<span title="Tom &amp; &quot;Jerry&quot;"></span>"#);
    }

    #[test]
    fn test_element_tag_empty_name_is_bare() {
        assert_eq!(Element::tag(""), Element::Bare);
        assert_eq!(Element::from("nav"), Element::Tag("nav".to_owned()));
    }

    #[test]
    fn test_element_deserialize_from_string() {
        let element: Element = serde_json::from_str(r#""div""#).unwrap();
        assert_eq!(element.name(), Some("div"));

        let bare: Element = serde_json::from_str(r#""""#).unwrap();
        assert_eq!(bare, Element::Bare);
    }

    #[test]
    fn test_decode_named_entities() {
        assert_eq!(decode_entities("a &amp; b &lt;c&gt;"), "a & b <c>");
        assert_eq!(decode_entities("&quot;x&quot; &nbsp;"), "\"x\" \u{a0}");
    }

    #[test]
    fn test_decode_numeric_entities() {
        assert_eq!(decode_entities("it&#39;s &#x27;here&#X27;"), "it's 'here'");
    }

    #[test]
    fn test_decode_is_single_pass() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_decode_leaves_unknown_and_bare_ampersands() {
        assert_eq!(decode_entities("A & B"), "A & B");
        assert_eq!(decode_entities("&bogus; &#xZZ;"), "&bogus; &#xZZ;");
        assert_eq!(decode_entities("trailing &"), "trailing &");
    }

    #[test]
    fn test_decode_without_entities_borrows() {
        assert!(matches!(decode_entities("<a>plain</a>"), Cow::Borrowed(_)));
    }
}
