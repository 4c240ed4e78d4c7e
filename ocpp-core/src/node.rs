//! Format-neutral message tree shared by the JSON and SOAP back-ends.

use serde_json::{Map, Number, Value};

/// A value inside a message tree.
///
/// `String` is a typed JSON string. `Text` is untyped character data read from
/// XML; field decoders interpret it according to the declared field type.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Text(String),
    List(Vec<Node>),
    Record(Record),
}

/// Where a field lives when written as XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Element,
    Attribute,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub placement: Placement,
    pub node: Node,
}

/// An ordered set of named fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<Entry>,
    lexical: bool,
}

impl Node {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(*b),
            Value::Number(n) => Node::Number(n.clone()),
            Value::String(s) => Node::String(s.clone()),
            Value::Array(items) => Node::List(items.iter().map(Node::from_json).collect()),
            Value::Object(map) => Node::Record(Record::from_json_map(map)),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(n) => Value::Number(n.clone()),
            Node::String(s) | Node::Text(s) => Value::String(s.clone()),
            Node::List(items) => Value::Array(items.iter().map(Node::to_json).collect()),
            Node::Record(record) => record.to_json(),
        }
    }

    /// Short description used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Text(_) => "text",
            Node::List(_) => "array",
            Node::Record(_) => "object",
        }
    }

    /// True for nodes produced by an untyped (XML) decoder.
    pub fn is_lexical(&self) -> bool {
        match self {
            Node::Text(_) => true,
            Node::Record(record) => record.is_lexical(),
            _ => false,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Node::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// A record read from XML, whose scalars are untyped text.
    pub fn lexical() -> Self {
        Self {
            entries: Vec::new(),
            lexical: true,
        }
    }

    pub fn is_lexical(&self) -> bool {
        self.lexical
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entry(name).map(|e| &e.node)
    }

    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Inserts an element field, replacing an existing field of the same name.
    pub fn insert(&mut self, name: impl Into<String>, node: Node) {
        self.insert_placed(name.into(), node, Placement::Element);
    }

    pub fn insert_attribute(&mut self, name: impl Into<String>, node: Node) {
        self.insert_placed(name.into(), node, Placement::Attribute);
    }

    fn insert_placed(&mut self, name: String, node: Node, placement: Placement) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.node = node;
                entry.placement = placement;
            }
            None => self.entries.push(Entry {
                name,
                placement,
                node,
            }),
        }
    }

    /// Appends a repeated XML element: a second occurrence turns the field into a list.
    pub fn push_repeated(&mut self, name: impl Into<String>, node: Node) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => match &mut entry.node {
                Node::List(items) => items.push(node),
                existing => {
                    let first = std::mem::replace(existing, Node::Null);
                    *existing = Node::List(vec![first, node]);
                }
            },
            None => self.entries.push(Entry {
                name,
                placement: Placement::Element,
                node,
            }),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Node> {
        let idx = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(idx).node)
    }

    pub fn from_json_map(map: &Map<String, Value>) -> Self {
        let mut record = Record::new();
        for (name, value) in map {
            record.insert(name.clone(), Node::from_json(value));
        }
        record
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for entry in &self.entries {
            map.insert(entry.name.clone(), entry.node.to_json());
        }
        Value::Object(map)
    }
}
