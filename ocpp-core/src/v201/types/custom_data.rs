use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde_json::Value;

use crate::codec::{self, check, FieldReader, FieldWriter, FromNode, Payload, ToNode};
use crate::error::{ParseError, ParseErrorKind};
use crate::node::Node;

const VENDOR_ID: &str = "vendorId";

/// Vendor extension bag: a mandatory vendor id plus any vendor-defined keys.
///
/// Extra keys are kept as JSON values and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomData {
    vendor_id: String,
    extras: BTreeMap<String, Value>,
}

impl CustomData {
    pub const VENDOR_ID_MAX_LEN: usize = 255;

    pub fn new(vendor_id: impl Into<String>) -> Result<Self, ParseError> {
        let vendor_id = vendor_id.into();
        check::max_len(&vendor_id, Self::VENDOR_ID_MAX_LEN)
            .map_err(|kind| ParseError::new(VENDOR_ID, kind))?;
        Ok(Self {
            vendor_id,
            extras: BTreeMap::new(),
        })
    }

    /// Adds a vendor key. `vendorId` itself cannot be overridden.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != VENDOR_ID {
            self.extras.insert(key, value.into());
        }
        self
    }

    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extras.get(key)
    }

    pub fn extras(&self) -> &BTreeMap<String, Value> {
        &self.extras
    }
}

impl Hash for CustomData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vendor_id.hash(state);
        for (key, value) in &self.extras {
            key.hash(state);
            // objects serialize with sorted keys, so equal values print equally
            value.to_string().hash(state);
        }
    }
}

impl Payload for CustomData {
    fn read(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        let vendor_id: String = fields.mandatory(VENDOR_ID)?;
        let mut data = Self::new(vendor_id)?;
        for entry in fields.record().entries().filter(|e| e.name != VENDOR_ID) {
            data.extras.insert(entry.name.clone(), entry.node.to_json());
        }
        Ok(data)
    }

    fn write(&self, fields: &mut FieldWriter) {
        fields.put(VENDOR_ID, &self.vendor_id);
        for (key, value) in &self.extras {
            fields.put_node(key, Node::from_json(value));
        }
    }
}

impl FromNode for CustomData {
    fn from_node(node: &Node) -> Result<Self, ParseErrorKind> {
        codec::nested(node)
    }
}

impl ToNode for CustomData {
    fn to_node(&self) -> Node {
        Node::Record(self.to_record())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use serde_json::json;

    use super::*;

    fn hash_of(data: &CustomData) -> u64 {
        let mut hasher = DefaultHasher::new();
        data.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn keeps_vendor_keys() {
        let data = CustomData::from_json(&json!({"vendorId": "com.acme", "slot": 3})).unwrap();
        assert_eq!(data.vendor_id(), "com.acme");
        assert_eq!(data.get("slot"), Some(&json!(3)));
        assert_eq!(data.to_json(), json!({"vendorId": "com.acme", "slot": 3}));
    }

    #[test]
    fn vendor_id_is_mandatory() {
        let err = CustomData::try_from_json(&json!({"slot": 3})).unwrap_err();
        assert_eq!(err.field(), "vendorId");
        assert_eq!(err.kind(), &ParseErrorKind::MissingField);
    }

    #[test]
    fn equal_bags_hash_equally() {
        let a = CustomData::new("v").unwrap().with("x", json!({"b": 1, "a": 2}));
        let b = CustomData::from_json(&json!({"x": {"a": 2, "b": 1}, "vendorId": "v"})).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
