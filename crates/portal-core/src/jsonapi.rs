//! JSON:API compound document wire model.
//!
//! Only the members the portal reads are modelled: top-level `data`,
//! `included` and `errors`, and per-resource `type`, `id`, `attributes`
//! and `relationships`. Everything else in the payload is ignored.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A JSON:API response: primary resources plus a side-loaded lookup table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundDocument {
    /// Primary resources in server order. `data: null` decodes as empty; an
    /// absent `data` member is a malformed document.
    #[serde(rename = "data", deserialize_with = "deserialize_primary")]
    pub primary: Vec<Resource>,

    /// Related resources referenced from `primary`. Unordered.
    #[serde(default, deserialize_with = "null_as_default")]
    pub included: Vec<Resource>,
}

/// A typed, identified entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub attributes: Map<String, Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_relationships",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub relationships: BTreeMap<String, Relationship>,
}

/// One named relationship. `data` is `None` for an empty to-one link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<RelationshipData>,
}

/// Linkage of a relationship: a single reference or an ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    Many(Vec<ResourceIdentifier>),
    One(ResourceIdentifier),
}

/// A `{type, id}` reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl ResourceIdentifier {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            meta: None,
        }
    }
}

impl Resource {
    /// Create a resource with no attributes or relationships.
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            attributes: Map::new(),
            relationships: BTreeMap::new(),
        }
    }

    /// Builder: set one attribute.
    pub fn with_attribute(mut self, name: &str, value: Value) -> Self {
        self.attributes.insert(name.to_string(), value);
        self
    }

    /// Builder: set one relationship.
    pub fn with_relationship(mut self, name: &str, data: RelationshipData) -> Self {
        self.relationships
            .insert(name.to_string(), Relationship { data: Some(data) });
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// String-valued attribute; `None` when absent or not a string.
    pub fn attribute_str(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(Value::as_str)
    }

    pub fn relationship(&self, name: &str) -> Option<&RelationshipData> {
        self.relationships.get(name).and_then(|r| r.data.as_ref())
    }

    /// The single reference of a to-one relationship.
    ///
    /// A relationship that arrives as a list yields `None`.
    pub fn to_one(&self, name: &str) -> Option<&ResourceIdentifier> {
        match self.relationship(name)? {
            RelationshipData::One(identifier) => Some(identifier),
            RelationshipData::Many(_) => None,
        }
    }

    /// The references of a to-many relationship, in order.
    ///
    /// A single reference is read as a one-element list; an absent
    /// relationship is an empty slice.
    pub fn to_many(&self, name: &str) -> &[ResourceIdentifier] {
        match self.relationship(name) {
            Some(RelationshipData::Many(identifiers)) => identifiers,
            Some(RelationshipData::One(identifier)) => std::slice::from_ref(identifier),
            None => &[],
        }
    }
}

impl CompoundDocument {
    pub fn new(primary: Vec<Resource>, included: Vec<Resource>) -> Self {
        Self { primary, included }
    }

    /// Decode a document from an already-parsed JSON value.
    ///
    /// Fails with [`Error::MalformedDocument`] for a non-object root or
    /// misshapen members, and with [`Error::Api`] for an error document.
    pub fn from_value(value: Value) -> Result<Self> {
        let object = match &value {
            Value::Object(object) => object,
            other => {
                return Err(Error::MalformedDocument(format!(
                    "expected a JSON object at the document root, found {}",
                    json_kind(other)
                )))
            }
        };

        if !object.contains_key("data") {
            if let Some(errors) = object.get("errors") {
                return Err(Error::Api(describe_errors(errors)));
            }
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Decode a document from raw response bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Number of primary resources.
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }
}

impl FromStr for CompoundDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(s.as_bytes())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Join the `title`/`detail` of each JSON:API error object.
fn describe_errors(errors: &Value) -> String {
    let Some(list) = errors.as_array() else {
        return errors.to_string();
    };
    let messages: Vec<String> = list
        .iter()
        .map(|e| {
            let title = e.get("title").and_then(Value::as_str);
            let detail = e.get("detail").and_then(Value::as_str);
            match (title, detail) {
                (Some(t), Some(d)) => format!("{}: {}", t, d),
                (Some(t), None) => t.to_string(),
                (None, Some(d)) => d.to_string(),
                (None, None) => e.to_string(),
            }
        })
        .collect();
    if messages.is_empty() {
        "empty errors member".to_string()
    } else {
        messages.join("; ")
    }
}

fn deserialize_primary<'de, D>(deserializer: D) -> std::result::Result<Vec<Resource>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::from_value(item)
                    .map_err(|e| D::Error::custom(format!("data[{}]: {}", i, e)))
            })
            .collect(),
        // Single-resource document
        item @ Value::Object(_) => serde_json::from_value(item)
            .map(|resource| vec![resource])
            .map_err(|e| D::Error::custom(format!("data: {}", e))),
        other => Err(D::Error::custom(format!(
            "data: expected an array, object or null, found {}",
            json_kind(&other)
        ))),
    }
}

fn deserialize_relationships<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, Relationship>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<Relationship>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(name, relationship)| relationship.map(|r| (name, r)))
        .collect())
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
