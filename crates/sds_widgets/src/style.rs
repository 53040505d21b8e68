//! Flat style records
//!
//! A [`StyleRecord`] is an ordered map from CSS property name (kebab-case) to
//! value. Records are built by the resolver and then layered: the resolved
//! record first, component additions next, caller overrides last. Merging is
//! last-write-wins per property.
//!
//! # Example
//!
//! ```rust
//! use sds_widgets::style::StyleRecord;
//!
//! let base = StyleRecord::new().set("display", "flex").set("line-height", 1);
//! let caller = StyleRecord::new().set("display", "inline-flex");
//!
//! let merged = base.merge(&caller);
//! assert_eq!(merged.to_css(), "display: inline-flex; line-height: 1");
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A single style value
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Str(String),
    Num(f64),
}

impl StyleValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            StyleValue::Num(_) => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            StyleValue::Num(n) => Some(*n),
            StyleValue::Str(_) => None,
        }
    }

    /// True for empty strings, which render as nothing
    pub fn is_blank(&self) -> bool {
        matches!(self, StyleValue::Str(s) if s.trim().is_empty())
    }
}

impl Display for StyleValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValue::Str(s) => f.write_str(s),
            StyleValue::Num(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Num(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Num(value as f64)
    }
}

/// Ordered property map
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleRecord {
    properties: IndexMap<String, StyleValue>,
}

impl StyleRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value in place
    pub fn set(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Set a property on an existing record
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.properties.insert(property.into(), value.into());
    }

    /// Remove a property
    pub fn remove(&mut self, property: &str) -> Option<StyleValue> {
        self.properties.shift_remove(property)
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.properties.get(property)
    }

    /// String value of a property, if it is set to a string
    pub fn get_str(&self, property: &str) -> Option<&str> {
        self.get(property).and_then(StyleValue::as_str)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Overlay `other` on top of this record
    ///
    /// Properties in `other` win. A property already present keeps its
    /// position; new properties are appended in `other`'s order.
    pub fn merge(&self, other: &StyleRecord) -> StyleRecord {
        let mut merged = self.clone();
        merged.extend(other);
        merged
    }

    /// In-place form of [`merge`](Self::merge)
    pub fn extend(&mut self, other: &StyleRecord) {
        for (property, value) in &other.properties {
            self.properties.insert(property.clone(), value.clone());
        }
    }

    /// Parse inline `style` attribute text (`property: value; ...`)
    ///
    /// Declarations without a colon or with an empty property are skipped.
    pub fn from_css(css: &str) -> StyleRecord {
        css.split(';')
            .filter_map(|declaration| declaration.split_once(':'))
            .map(|(property, value)| (property.trim(), value.trim()))
            .filter(|(property, _)| !property.is_empty())
            .collect()
    }

    /// Serialize to an inline `style` attribute value
    ///
    /// Blank string values are skipped.
    pub fn to_css(&self) -> String {
        self.properties
            .iter()
            .filter(|(_, v)| !v.is_blank())
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = StyleRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn merge_is_last_write_wins() {
        let base = StyleRecord::new()
            .set("padding", "12px")
            .set("color", "red")
            .set("line-height", 1);
        let overrides = StyleRecord::new().set("color", "blue").set("margin", "0");

        let merged = base.merge(&overrides);
        assert_eq!(merged.get_str("color"), Some("blue"));
        assert_eq!(merged.get_str("padding"), Some("12px"));
        assert_eq!(merged.get("line-height").and_then(StyleValue::as_num), Some(1.0));
        assert_eq!(merged.len(), 4);

        // Inputs are untouched
        assert_eq!(base.get_str("color"), Some("red"));
    }

    #[test]
    fn merge_keeps_original_positions() {
        let base = StyleRecord::new().set("a", "1").set("b", "2");
        let merged = base.merge(&StyleRecord::new().set("c", "3").set("a", "9"));
        let keys: Vec<&str> = merged.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn css_rendering_skips_blank_values() {
        let record: StyleRecord = [("display", "flex"), ("width", ""), ("gap", "8px")]
            .into_iter()
            .collect();
        assert_eq!(record.to_css(), "display: flex; gap: 8px");
    }

    #[test]
    fn numbers_render_without_trailing_zero() {
        let record = StyleRecord::new().set("letter-spacing", 0).set("opacity", 0.5);
        assert_eq!(record.to_css(), "letter-spacing: 0; opacity: 0.5");
    }

    #[test]
    fn remove_preserves_order_of_rest() {
        let mut record = StyleRecord::new().set("a", "1").set("b", "2").set("c", "3");
        assert_eq!(record.remove("b"), Some(StyleValue::from("2")));
        assert_eq!(record.to_css(), "a: 1; c: 3");
        assert!(!record.contains("b"));
    }

    #[test]
    fn serializes_as_flat_object() {
        let record = StyleRecord::new().set("cursor", "pointer").set("line-height", 1);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"cursor":"pointer","line-height":1.0}"#);
    }

    #[test]
    fn parses_inline_declarations() {
        let record = StyleRecord::from_css(" margin: 4px;color:red ; ; broken; : x; background: url(a:b)");
        assert_eq!(record.to_css(), "margin: 4px; color: red; background: url(a:b)");
    }
}
