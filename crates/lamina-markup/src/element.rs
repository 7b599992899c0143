//! Element tree construction and serialization.

use std::fmt;

/// Indent unit prepended once per nesting level.
const INDENT: &str = "    ";

/// A node in the markup tree.
///
/// An element carries a tag name fixed at construction, an ordered
/// attribute list, an ordered list of owned child elements, and an
/// optional text value. Children are moved into their parent, so a node
/// has at most one parent and the tree cannot contain cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    value: Option<String>,
}

/// Argument to [`Element::append`]: a single element or an ordered run of
/// elements.
///
/// A `Many` argument is flattened one level — its members are appended
/// individually, in order. This lets callers pass the result of mapping a
/// list into elements without flattening it by hand.
#[derive(Debug, Clone)]
pub enum Child {
    One(Element),
    Many(Vec<Element>),
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Self::One(element)
    }
}

impl From<Vec<Element>> for Child {
    fn from(elements: Vec<Element>) -> Self {
        Self::Many(elements)
    }
}

impl From<Option<Element>> for Child {
    fn from(element: Option<Element>) -> Self {
        Self::Many(element.into_iter().collect())
    }
}

impl Element {
    /// Create an element with the given tag, no attributes, no children,
    /// and no text value.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        debug_assert!(!tag.is_empty(), "element tag must be non-empty");
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
            value: None,
        }
    }

    /// Add an attribute. Attributes serialize in insertion order.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Append a child or a run of children, preserving order.
    ///
    /// Repeated calls accumulate onto the existing child list.
    pub fn append(mut self, child: impl Into<Child>) -> Self {
        match child.into() {
            Child::One(element) => self.children.push(element),
            Child::Many(elements) => self.children.extend(elements),
        }
        self
    }

    /// Set the text value, overwriting any previous value.
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Remove the text value.
    pub fn clear_text(mut self) -> Self {
        self.value = None;
        self
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Child elements in append order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Text value, if set.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Serialize this element and its subtree to indented markup text.
    ///
    /// The output is a pure function of the tree: serializing an
    /// unmutated tree twice yields identical strings.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out, 0);
        out
    }

    /// Serialize into `out` at the given nesting depth.
    ///
    /// An element with no children and no non-empty text renders compact,
    /// open and close on one line. Otherwise children render first at
    /// `depth + 1`, then the text value with every line prefixed by the
    /// `depth + 1` indent, then the closing tag at `depth`. Attribute
    /// values and text are emitted literally, without escaping.
    pub fn write_markup(&self, out: &mut String, depth: usize) {
        let prefix = INDENT.repeat(depth);
        out.push_str(&prefix);
        out.push('<');
        out.push_str(&self.tag);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push('>');

        // Empty-string text counts as absent.
        let text = self.value.as_deref().filter(|v| !v.is_empty());
        if self.children.is_empty() && text.is_none() {
            out.push_str("</");
            out.push_str(&self.tag);
            out.push_str(">\n");
            return;
        }

        out.push('\n');
        for child in &self.children {
            child.write_markup(out, depth + 1);
        }
        if let Some(text) = text {
            let inner = INDENT.repeat(depth + 1);
            for line in text.split('\n') {
                out.push_str(&inner);
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push_str(&prefix);
        out.push_str("</");
        out.push_str(&self.tag);
        out.push_str(">\n");
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}
