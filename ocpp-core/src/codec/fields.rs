use super::{FromNode, Payload, ToNode};
use crate::error::{ParseError, ParseErrorKind};
use crate::node::{Node, Record};
use crate::set::OrderedSet;

/// Pulls typed fields out of a record.
pub struct FieldReader<'a> {
    record: &'a Record,
}

#[derive(Clone, Copy, PartialEq)]
enum Repeats {
    Merge,
    Reject,
}

impl<'a> FieldReader<'a> {
    pub fn new(record: &'a Record) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &'a Record {
        self.record
    }

    pub fn mandatory<T: FromNode>(&self, name: &str) -> Result<T, ParseError> {
        let node = self.record.get(name).ok_or_else(|| ParseError::missing(name))?;
        T::from_node(node).map_err(|kind| ParseError::new(name, kind))
    }

    /// Absence is the only way to skip validation: a present value must decode.
    pub fn optional<T: FromNode>(&self, name: &str) -> Result<Option<T>, ParseError> {
        match self.record.get(name) {
            None => Ok(None),
            Some(node) => T::from_node(node)
                .map(Some)
                .map_err(|kind| ParseError::new(name, kind)),
        }
    }

    pub fn mandatory_nested<T: Payload>(&self, name: &str) -> Result<T, ParseError> {
        let node = self.record.get(name).ok_or_else(|| ParseError::missing(name))?;
        super::nested(node).map_err(|kind| ParseError::new(name, kind))
    }

    pub fn optional_nested<T: Payload>(&self, name: &str) -> Result<Option<T>, ParseError> {
        match self.record.get(name) {
            None => Ok(None),
            Some(node) => super::nested(node)
                .map(Some)
                .map_err(|kind| ParseError::new(name, kind)),
        }
    }

    /// Non-empty collection; duplicates are dropped, first occurrence wins.
    pub fn mandatory_collection<T: FromNode + PartialEq>(
        &self,
        name: &str,
    ) -> Result<OrderedSet<T>, ParseError> {
        let node = self.record.get(name).ok_or_else(|| ParseError::missing(name))?;
        collect(name, node, Repeats::Merge, 1)
    }

    pub fn optional_collection<T: FromNode + PartialEq>(
        &self,
        name: &str,
    ) -> Result<Option<OrderedSet<T>>, ParseError> {
        self.record
            .get(name)
            .map(|node| collect(name, node, Repeats::Merge, 1))
            .transpose()
    }

    /// Optional collection for arrays that declare no minimum item count.
    pub fn optional_collection_or_empty<T: FromNode + PartialEq>(
        &self,
        name: &str,
    ) -> Result<Option<OrderedSet<T>>, ParseError> {
        self.record
            .get(name)
            .map(|node| collect(name, node, Repeats::Merge, 0))
            .transpose()
    }

    /// Non-empty collection whose elements must already be distinct.
    pub fn mandatory_unique<T: FromNode + PartialEq>(
        &self,
        name: &str,
    ) -> Result<OrderedSet<T>, ParseError> {
        let node = self.record.get(name).ok_or_else(|| ParseError::missing(name))?;
        collect(name, node, Repeats::Reject, 1)
    }

    pub fn optional_unique<T: FromNode + PartialEq>(
        &self,
        name: &str,
    ) -> Result<Option<OrderedSet<T>>, ParseError> {
        self.record
            .get(name)
            .map(|node| collect(name, node, Repeats::Reject, 1))
            .transpose()
    }
}

fn collect<T: FromNode + PartialEq>(
    name: &str,
    node: &Node,
    repeats: Repeats,
    min_items: usize,
) -> Result<OrderedSet<T>, ParseError> {
    let single;
    let items: &[Node] = match node {
        Node::List(items) => items,
        // XML has no arrays: a lone element stands for a one-item collection
        other if other.is_lexical() => {
            single = [other.clone()];
            &single
        }
        other => {
            return Err(ParseError::invalid(
                name,
                format!("expected array, found {}", other.kind()),
            ))
        }
    };
    if items.len() < min_items {
        return Err(ParseError::invalid(
            name,
            format!("expected at least {min_items} item(s), found {}", items.len()),
        ));
    }
    let mut set = OrderedSet::new();
    for (idx, item) in items.iter().enumerate() {
        let value = T::from_node(item).map_err(|kind| ParseError::new(format!("{name}[{idx}]"), kind))?;
        if !set.insert(value) && repeats == Repeats::Reject {
            return Err(ParseError::new(name, ParseErrorKind::Duplicate));
        }
    }
    Ok(set)
}

/// Collects fields into a record, skipping absent optionals.
#[derive(Debug, Default)]
pub struct FieldWriter {
    record: Record,
}

impl FieldWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put<T: ToNode + ?Sized>(&mut self, name: &str, value: &T) {
        self.record.insert(name, value.to_node());
    }

    pub fn put_optional<T: ToNode>(&mut self, name: &str, value: &Option<T>) {
        if let Some(value) = value {
            self.put(name, value);
        }
    }

    pub fn put_attribute<T: ToNode + ?Sized>(&mut self, name: &str, value: &T) {
        self.record.insert_attribute(name, value.to_node());
    }

    pub fn put_optional_attribute<T: ToNode>(&mut self, name: &str, value: &Option<T>) {
        if let Some(value) = value {
            self.put_attribute(name, value);
        }
    }

    pub fn put_node(&mut self, name: &str, node: Node) {
        self.record.insert(name, node);
    }

    pub fn finish(self) -> Record {
        self.record
    }
}
