//! # XML Element Tree
//!
//! The generic substrate the annotation codec reads and writes: a namespaced,
//! ordered element tree with a minimal capability set (create, append, set/get
//! attribute, child lookup by tag, text content). Documents are parsed from and
//! serialized to bytes with `quick-xml` events.
//!
//! Namespace handling is prefix-based: namespace URIs are declared once on the
//! document root as `xmlns:prefix` attributes and all tag matching happens on
//! `(prefix, local name)` pairs. This mirrors how PMF-ML annotations are laid
//! out in practice and keeps the codec free of URI resolution.

use std::collections::BTreeMap;
use std::io::Cursor;

use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};


/// Errors from parsing or writing XML documents
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// Error from the underlying XML parser
    #[error("XML parse error: {0}")]
    Parse(#[from] quick_xml::Error),

    /// I/O error while writing events
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not well formed (unbalanced tags, no root element, ...)
    #[error("Invalid document structure: {0}")]
    InvalidStructure(String),
}

/// Qualified tag identity: an optional namespace prefix plus a local name.
///
/// Two tags match when both components are equal; the prefix-to-URI binding is
/// declared once per document root and not carried per tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub prefix: Option<String>,
    pub local: String,
}

impl Tag {
    pub fn new(prefix: &str, local: &str) -> Self {
        Tag {
            prefix: Some(prefix.to_string()),
            local: local.to_string(),
        }
    }

    pub fn unprefixed(local: &str) -> Self {
        Tag {
            prefix: None,
            local: local.to_string(),
        }
    }

    /// Parse a qualified name like `pmmlab:condID` into a tag
    pub fn from_qualified(name: &str) -> Self {
        match name.split_once(':') {
            Some((prefix, local)) => Tag::new(prefix, local),
            None => Tag::unprefixed(name),
        }
    }

    /// The serialized form, `prefix:local` or just `local`
    pub fn qualified(&self) -> String {
        match &self.prefix {
            Some(p) => format!("{}:{}", p, self.local),
            None => self.local.clone(),
        }
    }

    pub fn matches(&self, prefix: Option<&str>, local: &str) -> bool {
        self.prefix.as_deref() == prefix && self.local == local
    }
}

/// Element content: either ordered child elements or a single text payload,
/// never both.
///
/// Mixed content is not representable: appending a child to a text leaf
/// replaces the text, and parsing a foreign mixed-content element keeps its
/// child elements while the interleaved text is lost.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Children(Vec<Element>),
    Text(String),
}

impl Default for Content {
    fn default() -> Self {
        Content::Children(Vec::new())
    }
}

/// A node in the element tree.
///
/// Attributes are an unordered name-to-value mapping; a `BTreeMap` keeps
/// emission deterministic so two encodes of an equal record produce
/// byte-identical documents.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub attributes: BTreeMap<String, String>,
    pub content: Content,
}

impl Element {
    /// Create an empty element
    pub fn new(tag: Tag) -> Self {
        Element {
            tag,
            attributes: BTreeMap::new(),
            content: Content::Children(Vec::new()),
        }
    }

    /// Create a leaf element holding a single text payload
    pub fn text(tag: Tag, text: impl Into<String>) -> Self {
        Element {
            tag,
            attributes: BTreeMap::new(),
            content: Content::Text(text.into()),
        }
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Append a child element. Text leaves hold no children; appending to one
    /// replaces the text with element content.
    pub fn push(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::Text(_) => self.content = Content::Children(vec![child]),
        }
    }

    /// Mutable access to the child list. A text leaf is normalized to empty
    /// element content first.
    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        match self.content {
            Content::Children(ref mut children) => children,
            Content::Text(_) => {
                self.content = Content::Children(Vec::new());
                match self.content {
                    Content::Children(ref mut children) => children,
                    Content::Text(_) => unreachable!(),
                }
            }
        }
    }

    /// Ordered child elements (empty for text leaves)
    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            Content::Text(_) => &[],
        }
    }

    /// First child whose tag matches `(prefix, local)`
    pub fn child(&self, prefix: Option<&str>, local: &str) -> Option<&Element> {
        self.children()
            .iter()
            .find(|c| c.tag.matches(prefix, local))
    }

    /// All children whose tags match `(prefix, local)`, in document order
    pub fn children_named<'a>(
        &'a self,
        prefix: Option<&'a str>,
        local: &'a str,
    ) -> impl Iterator<Item = &'a Element> {
        self.children()
            .iter()
            .filter(move |c| c.tag.matches(prefix, local))
    }

    /// Text payload of a leaf element
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::Children(_) => None,
        }
    }

    /// Text payload of the first matching child, if present
    pub fn child_text(&self, prefix: Option<&str>, local: &str) -> Option<&str> {
        self.child(prefix, local).and_then(Element::text_content)
    }

    /// Serialize this element as a standalone XML document
    pub fn to_xml(&self) -> Result<Vec<u8>, XmlError> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        write_element(&mut writer, self)?;
        Ok(writer.into_inner().into_inner())
    }

    /// Parse a standalone XML document into its root element
    pub fn from_xml(data: &[u8]) -> Result<Element, XmlError> {
        parse_document(data)
    }
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    element: &Element,
) -> Result<(), XmlError> {
    let name = element.tag.qualified();
    let mut start = BytesStart::new(name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    match &element.content {
        Content::Children(children) if children.is_empty() => {
            writer.write_event(Event::Empty(start))?;
        }
        Content::Children(children) => {
            writer.write_event(Event::Start(start))?;
            for child in children {
                write_element(writer, child)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        }
        Content::Text(text) => {
            writer.write_event(Event::Start(start))?;
            writer.write_event(Event::Text(BytesText::new(text)))?;
            writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        }
    }
    Ok(())
}

fn read_start(e: &BytesStart, decoder: Decoder) -> Result<Element, XmlError> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut element = Element::new(Tag::from_qualified(&name));
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.decode_and_unescape_value(decoder)?.into_owned();
        element.attributes.insert(key, value);
    }
    Ok(element)
}

fn parse_document(data: &[u8]) -> Result<Element, XmlError> {
    let mut reader = Reader::from_reader(data);
    let decoder = reader.decoder();

    let mut stack: Vec<Element> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(read_start(e, decoder)?);
            }
            Ok(Event::Empty(ref e)) => {
                let element = read_start(e, decoder)?;
                match stack.last_mut() {
                    Some(parent) => parent.push(element),
                    None => return Ok(element),
                }
            }
            Ok(Event::Text(ref t)) => {
                // Text is kept verbatim; padding in a value is data. Only
                // whitespace sitting between child elements is layout and
                // dropped (text before the first child goes through `push`,
                // which replaces it once the child arrives).
                let text = t.unescape()?.into_owned();
                if let Some(current) = stack.last_mut() {
                    match &current.content {
                        Content::Children(children) if !children.is_empty() => {
                            if !text.trim().is_empty() {
                                current.content = Content::Text(text);
                            }
                        }
                        _ => current.content = Content::Text(text),
                    }
                }
            }
            Ok(Event::End(_)) => {
                let element = stack.pop().ok_or_else(|| {
                    XmlError::InvalidStructure("closing tag without opening tag".to_string())
                })?;
                match stack.last_mut() {
                    Some(parent) => parent.push(element),
                    None => return Ok(element),
                }
            }
            Ok(Event::Eof) => {
                return Err(XmlError::InvalidStructure(
                    "no root element found".to_string(),
                ));
            }
            Err(e) => return Err(XmlError::Parse(e)),
            // Declarations, comments and processing instructions are skipped
            _ => {}
        }
        buf.clear();
    }
}
