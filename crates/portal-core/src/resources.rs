//! Typed view of a document's `included` side-table.
//!
//! Each included resource is decoded once into an [`IncludedResource`]
//! variant and stored under its `(kind, id)` key. Lookups go through the
//! typed accessors on [`IncludedIndex`] instead of probing raw attributes.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::defaults;
use crate::jsonapi::Resource;

/// Resource kinds the portal resolves relationships to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    User,
    File,
    Tag,
}

impl ResourceKind {
    /// JSON:API `type` tag for this kind.
    pub fn type_tag(self) -> &'static str {
        match self {
            Self::User => defaults::USER_TYPE,
            Self::File => defaults::FILE_TYPE,
            Self::Tag => defaults::TAG_TYPE,
        }
    }

    pub fn from_type_tag(tag: &str) -> Option<Self> {
        match tag {
            defaults::USER_TYPE => Some(Self::User),
            defaults::FILE_TYPE => Some(Self::File),
            defaults::TAG_TYPE => Some(Self::Tag),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserResource {
    pub id: String,
    /// `attributes.name`
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResource {
    pub id: String,
    /// `attributes.uri.url`, site-relative as served by the CMS.
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagResource {
    pub id: String,
    /// `attributes.name`
    pub name: Option<String>,
}

/// An included resource, decoded by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncludedResource {
    User(UserResource),
    File(FileResource),
    Tag(TagResource),
    /// Any other type; kept only so it can be counted and skipped.
    Other { kind: String, id: String },
}

impl IncludedResource {
    pub fn from_resource(resource: &Resource) -> Self {
        let id = resource.id.clone();
        match ResourceKind::from_type_tag(&resource.kind) {
            Some(ResourceKind::User) => Self::User(UserResource {
                id,
                name: resource.attribute_str("name").map(str::to_string),
            }),
            Some(ResourceKind::File) => Self::File(FileResource {
                id,
                url: resource
                    .attribute("uri")
                    .and_then(|uri| uri.get("url"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }),
            Some(ResourceKind::Tag) => Self::Tag(TagResource {
                id,
                name: resource.attribute_str("name").map(str::to_string),
            }),
            None => Self::Other {
                kind: resource.kind.clone(),
                id,
            },
        }
    }

    pub fn kind(&self) -> Option<ResourceKind> {
        match self {
            Self::User(_) => Some(ResourceKind::User),
            Self::File(_) => Some(ResourceKind::File),
            Self::Tag(_) => Some(ResourceKind::Tag),
            Self::Other { .. } => None,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::User(r) => &r.id,
            Self::File(r) => &r.id,
            Self::Tag(r) => &r.id,
            Self::Other { id, .. } => id,
        }
    }
}

/// `(kind, id)` lookup table over `included`.
///
/// When a key appears more than once the first occurrence wins, matching a
/// front-to-back scan of the list.
#[derive(Debug, Default)]
pub struct IncludedIndex {
    entries: HashMap<(ResourceKind, String), IncludedResource>,
    skipped: usize,
}

impl IncludedIndex {
    pub fn build(included: &[Resource]) -> Self {
        let mut index = Self::default();
        for resource in included {
            let typed = IncludedResource::from_resource(resource);
            match typed.kind() {
                Some(kind) => {
                    index
                        .entries
                        .entry((kind, typed.id().to_string()))
                        .or_insert(typed);
                }
                None => index.skipped += 1,
            }
        }
        index
    }

    fn get(&self, kind: ResourceKind, id: &str) -> Option<&IncludedResource> {
        self.entries.get(&(kind, id.to_string()))
    }

    pub fn user(&self, id: &str) -> Option<&UserResource> {
        match self.get(ResourceKind::User, id)? {
            IncludedResource::User(user) => Some(user),
            _ => None,
        }
    }

    pub fn file(&self, id: &str) -> Option<&FileResource> {
        match self.get(ResourceKind::File, id)? {
            IncludedResource::File(file) => Some(file),
            _ => None,
        }
    }

    pub fn tag(&self, id: &str) -> Option<&TagResource> {
        match self.get(ResourceKind::Tag, id)? {
            IncludedResource::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    /// Number of indexed resources of a known kind.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Included resources of a type the portal does not resolve.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
