//! Rendered element tree
//!
//! Components build [`Element`]s; hosts walk the tree or serialize it with
//! [`Element::to_html`].

use crate::style::StyleRecord;
use indexmap::IndexMap;
use std::fmt::Write;
use tracing::debug;

/// Attributes rendered by presence alone
const BOOLEAN_ATTRIBUTES: &[&str] = &["disabled", "hidden"];

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "img", "input", "meta"];

/// A child of an element
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text content
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text_content(),
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape(text)),
            Node::Element(element) => element.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// A rendered element
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attributes: IndexMap<String, String>,
    pub style: StyleRecord,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: IndexMap::new(),
            style: StyleRecord::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute
    ///
    /// `style` is parsed and merged over the inline style record, so an
    /// element always serializes one `style` attribute. A boolean attribute
    /// set to `"false"` is removed.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();

        if name.eq_ignore_ascii_case("style") {
            self.style.extend(&StyleRecord::from_css(&value));
        } else if is_boolean(&name) && value.eq_ignore_ascii_case("false") {
            self.attributes.shift_remove(&name);
        } else {
            self.attributes.insert(name, value);
        }
        self
    }

    /// Set a boolean attribute when `present`
    pub fn flag(self, name: &str, present: bool) -> Self {
        if present {
            self.attr(name, "")
        } else {
            self
        }
    }

    /// Replace the inline style
    pub fn style(mut self, style: StyleRecord) -> Self {
        self.style = style;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Child elements, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Depth-first search for the first element with `tag`
    pub fn find(&self, tag: &str) -> Option<&Element> {
        if self.tag == tag {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find(tag))
    }

    /// Depth-first list of every element with `tag`
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        if self.tag == tag {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect(tag, found);
        }
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Serialize to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);

        for (name, value) in &self.attributes {
            if !is_valid_name(name) || name.eq_ignore_ascii_case("style") {
                debug!("element: skipping attribute {:?} on <{}>", name, self.tag);
                continue;
            }
            if is_boolean(name) {
                let _ = write!(out, " {}", name);
            } else {
                let _ = write!(out, " {}=\"{}\"", name, escape(value));
            }
        }

        let css = self.style.to_css();
        if !css.is_empty() {
            let _ = write!(out, " style=\"{}\"", escape(&css));
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn is_boolean(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES.contains(&name)
}

/// Attribute names must not be able to close the tag or start another one
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_attributes_style_and_children() {
        let element = Element::new("button")
            .attr("type", "button")
            .flag("disabled", true)
            .style(StyleRecord::new().set("cursor", "not-allowed").set("line-height", 1))
            .child(Element::new("span").child("Save"));

        assert_eq!(
            element.to_html(),
            r#"<button type="button" disabled style="cursor: not-allowed; line-height: 1"><span>Save</span></button>"#
        );
    }

    #[test]
    fn escapes_text_and_attribute_values() {
        let element = Element::new("div")
            .attr("title", "\"quoted\" & <b>")
            .child("a < b && c > d");

        assert_eq!(
            element.to_html(),
            r#"<div title="&quot;quoted&quot; &amp; &lt;b&gt;">a &lt; b &amp;&amp; c &gt; d</div>"#
        );
    }

    #[test]
    fn omitted_flag_and_empty_style() {
        let element = Element::new("span").flag("disabled", false);
        assert_eq!(element.to_html(), "<span></span>");
        assert!(!element.has_attribute("disabled"));
    }

    #[test]
    fn find_walks_depth_first() {
        let tree = Element::new("div")
            .child(Element::new("div").child(Element::new("button").attr("id", "a")))
            .child(Element::new("button").attr("id", "b"));

        assert_eq!(tree.find("button").and_then(|b| b.get_attribute("id")), Some("a"));
        assert_eq!(tree.find_all("button").len(), 2);
        assert!(tree.find("img").is_none());
    }

    #[test]
    fn text_content_concatenates() {
        let tree = Element::new("p")
            .child("Color ")
            .child(Element::new("b").child("Mode"));
        assert_eq!(tree.text_content(), "Color Mode");
    }

    #[test]
    fn style_attribute_merges_into_record() {
        let element = Element::new("div")
            .style(StyleRecord::new().set("display", "flex").set("margin", "0"))
            .attr("style", "margin: 4px; color: red");

        assert!(!element.has_attribute("style"));
        assert_eq!(
            element.to_html(),
            r#"<div style="display: flex; margin: 4px; color: red"></div>"#
        );
    }

    #[test]
    fn unsafe_attribute_names_are_skipped() {
        let element = Element::new("button")
            .attr("x\"><script>alert(1)</script", "v")
            .attr("data id", "v")
            .attr("aria-label", "ok");

        assert_eq!(element.to_html(), r#"<button aria-label="ok"></button>"#);
    }

    #[test]
    fn false_boolean_attribute_is_removed() {
        let element = Element::new("button")
            .flag("disabled", true)
            .attr("hidden", "false")
            .attr("disabled", "false");

        assert!(!element.has_attribute("disabled"));
        assert_eq!(element.to_html(), "<button></button>");
    }
}
