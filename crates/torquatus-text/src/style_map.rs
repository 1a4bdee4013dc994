//! Ordered property/value maps attached to characters and paragraphs.

use std::fmt;

/// An ordered mapping from style property name to value.
///
/// Holds at most one value per property. Writing a property removes the old
/// entry and appends the new one, so the order reflects the sequence of
/// writes. Properties the editor does not know about are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if no property is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of properties set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }

    /// Get the value of a property.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].1.as_str())
    }

    /// Check if a property is present, whatever its value.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Check if a property is present with exactly `value`.
    pub fn has_value(&self, name: &str, value: &str) -> bool {
        self.get(name) == Some(value)
    }

    /// Set a property, replacing any previous value.
    ///
    /// Returns the previous value, if any.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let previous = self.remove(&name);
        self.entries.push((name, value.into()));
        previous
    }

    /// Builder method to set a property.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Remove a property, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|i| self.entries.remove(i).1)
    }

    /// Write every property of `other` into this map.
    ///
    /// Properties present only in `self` are preserved.
    pub fn merge(&mut self, other: &StyleMap) {
        for (name, value) in &other.entries {
            self.set(name.as_str(), value.as_str());
        }
    }

    /// Iterate over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Render as an inline declaration list, e.g. `font-weight: bold; underline: true;`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}: {value};")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.set(name, value);
        }
        map
    }
}
