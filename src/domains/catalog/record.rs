//! The record model and the wire envelope it arrives in.
//!
//! The backend returns rows shaped
//! `{ "records": [ { "fields": { "Name": ..., "Category": ... } } ] }`.
//! Fields are all optional at the wire level: a malformed row (missing name
//! or category) is tolerated and simply never matches a filter, rather than
//! failing the whole decode.

use serde::{Deserialize, Serialize};

/// One curated tool/resource entry.
///
/// `name` is treated as the display/list key within one fetched batch;
/// uniqueness is the backend's concern, not ours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Display and search key.
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Single category value, searched alongside the name.
    #[serde(rename = "Category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Website, URL-ish, no scheme required.
    #[serde(rename = "Website", default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Documentation link; presence controls the "Docs" affordance.
    #[serde(
        rename = "Documentation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub documentation: Option<String>,

    /// Tags, rendered in given order.
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Record {
    /// Whether this record has a non-empty documentation link.
    pub fn has_documentation(&self) -> bool {
        self.documentation.as_deref().is_some_and(|d| !d.is_empty())
    }
}

/// The full set of records fetched for one render.
///
/// An immutable snapshot: filtering derives views from it, never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub records: Vec<Record>,
}

impl Collection {
    /// Create a collection from already-decoded records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Wire envelope for one row: the backend nests the fields under `fields`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordEnvelope {
    #[serde(default)]
    pub fields: Record,
}

/// Wire envelope for a full table read.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPage {
    pub records: Vec<RecordEnvelope>,
}

impl From<RecordPage> for Collection {
    fn from(page: RecordPage) -> Self {
        Self {
            records: page.records.into_iter().map(|e| e.fields).collect(),
        }
    }
}
