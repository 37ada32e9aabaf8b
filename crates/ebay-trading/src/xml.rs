//! Generic XML tree for Trading API responses.
//!
//! eBay's response shapes are not contractually stable and only a few leaf
//! paths are ever read, so responses are parsed into a schema-less tree
//! instead of typed structs:
//!
//! - an element holding only text becomes [`XmlValue::Text`]
//! - an element with child elements or attributes becomes [`XmlValue::Map`];
//!   attributes are stored as keys and any text goes under [`CONTENT_KEY`]
//! - repeated sibling elements collapse into [`XmlValue::List`]
//! - an empty element becomes an empty `Text`

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Error, ErrorKind, Result};

/// Key holding the text of an element that also has children or attributes.
pub const CONTENT_KEY: &str = "__content__";

/// A node of a parsed XML document.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum XmlValue {
    /// Text content of a leaf element.
    Text(String),
    /// Child elements and attributes, in document order.
    Map(XmlMap),
    /// Repeated sibling elements sharing one name.
    List(Vec<XmlValue>),
}

impl XmlValue {
    /// The text of a leaf element.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            XmlValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The children of an element.
    pub fn as_map(&self) -> Option<&XmlMap> {
        match self {
            XmlValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The values of a repeated element.
    pub fn as_list(&self) -> Option<&[XmlValue]> {
        match self {
            XmlValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a child element; `None` unless this is a map.
    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        self.as_map()?.get(key)
    }

    /// Follow a path of child element names.
    pub fn path(&self, keys: &[&str]) -> Option<&XmlValue> {
        keys.iter().try_fold(self, |node, key| node.get(key))
    }

    /// Iterate a value that may occur once or many times.
    pub fn iter_occurrences(&self) -> std::slice::Iter<'_, XmlValue> {
        match self {
            XmlValue::List(items) => items.iter(),
            single => std::slice::from_ref(single).iter(),
        }
    }

    /// Returns true for empty or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        matches!(self, XmlValue::Text(text) if text.trim().is_empty())
    }
}

/// An ordered mapping of element names to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlMap {
    entries: Vec<(String, XmlValue)>,
}

impl XmlMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by element name.
    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Look up the text of a leaf child.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Follow a path of element names from this map.
    pub fn path(&self, keys: &[&str]) -> Option<&XmlValue> {
        let (first, rest) = keys.split_first()?;
        self.get(first)?.path(rest)
    }

    /// Follow a path and return the text at its end.
    pub fn path_str(&self, keys: &[&str]) -> Option<&str> {
        self.path(keys)?.as_str()
    }

    /// Insert a value, collapsing repeated names into a list.
    pub fn insert(&mut self, key: impl Into<String>, value: XmlValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some((_, XmlValue::List(items))) => items.push(value),
            Some((_, existing)) => {
                let first = std::mem::replace(existing, XmlValue::List(Vec::new()));
                *existing = XmlValue::List(vec![first, value]);
            }
            None => self.entries.push((key, value)),
        }
    }

    /// Iterate entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &XmlValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Element names in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of distinct element names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for XmlMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>> FromIterator<(K, XmlValue)> for XmlMap {
    fn from_iter<I: IntoIterator<Item = (K, XmlValue)>>(iter: I) -> Self {
        let mut map = XmlMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// An element being read.
struct Frame {
    name: String,
    children: XmlMap,
    text: String,
}

impl Frame {
    fn document() -> Self {
        Self {
            name: String::new(),
            children: XmlMap::new(),
            text: String::new(),
        }
    }

    fn open(start: &BytesStart<'_>) -> Result<Self> {
        let mut children = XmlMap::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            children.insert(key, XmlValue::Text(value));
        }

        Ok(Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            children,
            text: String::new(),
        })
    }

    fn close(self) -> (String, XmlValue) {
        let value = if self.children.is_empty() {
            XmlValue::Text(self.text)
        } else {
            let mut children = self.children;
            if !self.text.is_empty() {
                children.insert(CONTENT_KEY, XmlValue::Text(self.text));
            }
            XmlValue::Map(children)
        };
        (self.name, value)
    }
}

/// Parse an XML document into a map keyed by its root element.
///
/// A body without any element (empty, or plain text) parses to an empty map.
/// Malformed markup is an [`ErrorKind::Xml`] error.
pub fn parse(xml: &str) -> Result<XmlMap> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack = vec![Frame::document()];

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(Frame::open(&start)?),
            Event::Empty(start) => {
                let (name, value) = Frame::open(&start)?.close();
                current(&mut stack).children.insert(name, value);
            }
            Event::End(_) => {
                if stack.len() < 2 {
                    return Err(Error::new(ErrorKind::Xml(
                        "unexpected closing tag".to_string(),
                    )));
                }
                if let Some(frame) = stack.pop() {
                    let (name, value) = frame.close();
                    current(&mut stack).children.insert(name, value);
                }
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                current(&mut stack).text.push_str(&text);
            }
            Event::CData(data) => {
                current(&mut stack)
                    .text
                    .push_str(&String::from_utf8_lossy(&data));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if stack.len() != 1 {
        return Err(Error::new(ErrorKind::Xml(format!(
            "unclosed element <{}>",
            stack.last().map(|f| f.name.as_str()).unwrap_or_default()
        ))));
    }

    Ok(stack.pop().map(|document| document.children).unwrap_or_default())
}

fn current(stack: &mut [Frame]) -> &mut Frame {
    // The document frame is never popped.
    let last = stack.len() - 1;
    &mut stack[last]
}
