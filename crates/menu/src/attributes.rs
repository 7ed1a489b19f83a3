//! HTML attribute maps.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Attribute name to value mapping for a single HTML element.
///
/// Keys are unique and serialized in sorted order, so rendering the same
/// map always yields the same markup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set an attribute, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whitespace-separated tokens of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get("class").unwrap_or_default().split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Append a class token unless it is already present.
    ///
    /// Calling this repeatedly with the same class leaves the attribute
    /// unchanged after the first call. Empty class names are ignored.
    pub fn add_class(&mut self, class: &str) {
        let class = class.trim();
        if class.is_empty() || self.has_class(class) {
            return;
        }

        match self.0.get_mut("class") {
            Some(existing) if !existing.trim().is_empty() => {
                existing.push(' ');
                existing.push_str(class);
            }
            _ => self.set("class", class),
        }
    }

    /// Remove a class token. Drops the `class` attribute once it is empty.
    pub fn remove_class(&mut self, class: &str) {
        let Some(existing) = self.get("class") else {
            return;
        };

        let remaining = existing
            .split_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        if remaining.is_empty() {
            self.remove("class");
        } else {
            self.set("class", remaining);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
