//! Minimal XML tree on top of quick-xml, and the mapping to and from [`Node`].

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::Error;
use crate::node::{Node, Placement, Record};

/// An element with namespace prefixes stripped from element and attribute names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Character content with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Leaf elements become untyped text, kept verbatim; everything else a lexical record.
    pub fn to_node(&self) -> Node {
        if self.children.is_empty() && self.attributes.is_empty() {
            return Node::Text(self.text.clone());
        }
        Node::Record(self.to_record())
    }

    pub fn to_record(&self) -> Record {
        let mut record = Record::lexical();
        for (name, value) in &self.attributes {
            record.insert_attribute(name.clone(), Node::Text(value.clone()));
        }
        for child in &self.children {
            record.push_repeated(child.name.clone(), child.to_node());
        }
        record
    }
}

fn local(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}

fn open(start: &BytesStart<'_>) -> Result<Element, Error> {
    let mut element = Element {
        name: local(start.local_name().as_ref()),
        ..Element::default()
    };
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = attr.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            continue;
        }
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((local(attr.key.local_name().as_ref()), value));
    }
    Ok(element)
}

fn close(stack: &mut Vec<Element>, element: Element) -> Option<Element> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            None
        }
        None => Some(element),
    }
}

/// Parses a document and returns its root element.
pub fn parse_document(xml: &str) -> Result<Element, Error> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(open(&start)?),
            Event::Empty(start) => {
                let element = open(&start)?;
                if let Some(root) = close(&mut stack, element) {
                    return Ok(root);
                }
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::Soap("unbalanced end tag".into()))?;
                if let Some(root) = close(&mut stack, element) {
                    return Ok(root);
                }
            }
            Event::Text(text) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => return Err(Error::Soap("document has no root element".into())),
            _ => {}
        }
    }
}

fn scalar_text(node: &Node) -> String {
    match node {
        Node::Bool(b) => b.to_string(),
        Node::Number(n) => n.to_string(),
        Node::String(s) | Node::Text(s) => s.clone(),
        other => other.to_json().to_string(),
    }
}

/// Writes `node` as element(s) named `name`; lists repeat the element, nulls are skipped.
pub fn write_node(out: &mut String, name: &str, node: &Node) {
    match node {
        Node::Null => {}
        Node::List(items) => {
            for item in items {
                write_node(out, name, item);
            }
        }
        Node::Record(record) => write_record(out, name, record, ""),
        scalar => {
            out.push('<');
            out.push_str(name);
            out.push('>');
            out.push_str(&escape(scalar_text(scalar).as_str()));
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

/// Writes a record as one element; `extra` is appended verbatim inside the start tag.
pub fn write_record(out: &mut String, name: &str, record: &Record, extra: &str) {
    out.push('<');
    out.push_str(name);
    out.push_str(extra);
    for entry in record.entries().filter(|e| e.placement == Placement::Attribute) {
        out.push(' ');
        out.push_str(&entry.name);
        out.push_str("=\"");
        out.push_str(&escape(scalar_text(&entry.node).as_str()));
        out.push('"');
    }
    let mut children = record
        .entries()
        .filter(|e| e.placement == Placement::Element && e.node != Node::Null)
        .peekable();
    if children.peek().is_none() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in children {
        write_node(out, &child.name, &child.node);
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_document() {
        let root = parse_document(
            r#"<?xml version="1.0"?>
            <s:Envelope xmlns:s="urn:s"><s:Body a:kind="x" xmlns:a="urn:a">
              <key>one &amp; two</key><key>three</key><empty/>
            </s:Body></s:Envelope>"#,
        )
        .unwrap();
        assert_eq!(root.name, "Envelope");
        let body = root.child("Body").unwrap();
        assert_eq!(body.attribute("kind"), Some("x"));
        let record = body.to_record();
        assert_eq!(
            record.get("key"),
            Some(&Node::List(vec![
                Node::Text("one & two".into()),
                Node::Text("three".into())
            ]))
        );
        assert_eq!(record.get("empty"), Some(&Node::Text(String::new())));
        assert_eq!(record.entry("kind").map(|e| e.placement), Some(Placement::Attribute));
    }

    #[test]
    fn writes_attributes_lists_and_escapes() {
        let mut record = Record::new();
        record.insert_attribute("version", Node::Text("1".into()));
        record.insert("note", Node::String("a<b".into()));
        record.insert("n", Node::List(vec![Node::Number(1.into()), Node::Number(2.into())]));
        record.insert("skip", Node::Null);
        let mut out = String::new();
        write_record(&mut out, "doc", &record, "");
        assert_eq!(out, r#"<doc version="1"><note>a&lt;b</note><n>1</n><n>2</n></doc>"#);
    }

    #[test]
    fn leaf_whitespace_is_kept() {
        let root = parse_document("<doc><data>   </data><note> a </note></doc>").unwrap();
        let record = root.to_record();
        assert_eq!(record.get("data"), Some(&Node::Text("   ".into())));
        assert_eq!(record.get("note"), Some(&Node::Text(" a ".into())));
    }

    #[test]
    fn rejects_truncated_documents() {
        assert!(parse_document("<a><b></b>").is_err());
        assert!(parse_document("").is_err());
    }
}
