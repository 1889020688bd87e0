/*!
 * Minimal XML tree used for the monolingual output documents.
 *
 * The tree is built in memory, serialized with quick-xml into a buffer and
 * only then written to disk, so a document that cannot be serialized never
 * leaves a partial file behind.
 */

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::borrow::Cow;
use std::io::Write;

use crate::errors::{SplitError, SplitResult};

/// A node of mixed content
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    /// Character data, stored unescaped
    Text(String),
    /// A child element
    Element(XmlElement),
}

impl XmlNode {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }

    /// Element name, or `None` for text
    pub fn element_name(&self) -> Option<&str> {
        match self {
            Self::Element(element) => Some(&element.name),
            Self::Text(_) => None,
        }
    }
}

/// An element with ordered attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute append; attribute order is kept on output
    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Builder-style append of child nodes
    pub fn with_children<I: IntoIterator<Item = XmlNode>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push(&mut self, node: XmlNode) {
        self.children.push(node);
    }

    /// Value of the named attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }
}

impl From<XmlElement> for XmlNode {
    fn from(element: XmlElement) -> Self {
        Self::Element(element)
    }
}

/// Serialize a document rooted at `root`, declaration included, without indentation
pub fn to_xml_bytes(root: &XmlElement) -> SplitResult<Vec<u8>> {
    let mut output = Vec::new();
    write_document(&mut output, root)?;
    Ok(output)
}

/// Serialize a document to any writer
pub fn write_document<W: Write>(inner: W, root: &XmlElement) -> SplitResult<()> {
    let mut writer = Writer::new(inner);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    write_element(&mut writer, root)?;

    Ok(())
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> SplitResult<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        let escaped = escape_attribute(value, key)?;
        start.push_attribute((key.as_bytes(), escaped.as_bytes()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start.borrow()))?;

    for child in &element.children {
        match child {
            XmlNode::Text(text) => {
                let escaped = escape_text(text)?;
                writer.write_event(Event::Text(BytesText::from_escaped(escaped)))?;
            }
            XmlNode::Element(child) => write_element(writer, child)?,
        }
    }

    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

/// Whether XML 1.0 allows `ch` in a document
pub fn is_xml_char(ch: char) -> bool {
    matches!(ch,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn check_chars(s: &str, context: &str) -> SplitResult<()> {
    match s.chars().find(|ch| !is_xml_char(*ch)) {
        Some(ch) => Err(SplitError::InvalidXmlChar {
            ch,
            context: context.to_string(),
        }),
        None => Ok(()),
    }
}

/// Escape character data. CR is written as a character reference so that
/// parsers do not fold it into LF on the way back in.
fn escape_text(s: &str) -> SplitResult<Cow<'_, str>> {
    check_chars(s, "text")?;
    if !s.contains(['&', '<', '>', '\r']) {
        return Ok(Cow::Borrowed(s));
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\r' => escaped.push_str("&#xD;"),
            _ => escaped.push(ch),
        }
    }
    Ok(Cow::Owned(escaped))
}

/// Escape an attribute value for use between double quotes. Whitespace other
/// than space is written as character references to survive normalization.
fn escape_attribute<'a>(s: &'a str, name: &str) -> SplitResult<Cow<'a, str>> {
    check_chars(s, &format!("attribute '{}'", name))?;
    if !s.contains(['&', '<', '>', '"', '\t', '\n', '\r']) {
        return Ok(Cow::Borrowed(s));
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\t' => escaped.push_str("&#x9;"),
            '\n' => escaped.push_str("&#xA;"),
            '\r' => escaped.push_str("&#xD;"),
            _ => escaped.push(ch),
        }
    }
    Ok(Cow::Owned(escaped))
}
