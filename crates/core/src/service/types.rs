use serde::{Deserialize, Serialize};

use crate::projection::DEFAULT_ID_FIELD;
use crate::record::Record;

/// Query parameters understood by `find`, `get` and `remove`.
///
/// Keys starting with `$` are operators; every other key is an attribute
/// equality filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    #[serde(rename = "$select", default, skip_serializing_if = "Option::is_none")]
    pub select: Option<Vec<String>>,
    #[serde(rename = "$limit", default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(rename = "$skip", default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<usize>,
    #[serde(flatten)]
    pub filters: Record,
}

impl Query {
    pub fn select<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            select: Some(fields.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }
}

/// Parameters passed alongside every service call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Query>,
}

impl Params {
    pub fn with_query(query: Query) -> Self {
        Self { query: Some(query) }
    }

    /// The `$select` list, if any.
    pub fn selection(&self) -> Option<&[String]> {
        self.query.as_ref()?.select.as_deref()
    }
}

/// Pagination defaults for `find`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paginate {
    /// Page size when `$limit` is not given. Pagination is off when unset.
    pub default: Option<usize>,
    /// Upper bound on any requested page size.
    pub max: Option<usize>,
}

/// Options a service is constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Hash-key attribute name.
    pub id: String,
    pub range_key: Option<String>,
    /// Custom event names the service may emit besides the CRUD events.
    pub events: Vec<String>,
    pub paginate: Paginate,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID_FIELD.to_string(),
            range_key: None,
            events: Vec::new(),
            paginate: Paginate::default(),
        }
    }
}

impl ServiceOptions {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_range_key(mut self, range_key: impl Into<String>) -> Self {
        self.range_key = Some(range_key.into());
        self
    }

    pub fn with_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events = events.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_paginate(mut self, paginate: Paginate) -> Self {
        self.paginate = paginate;
        self
    }
}

/// One page of `find` results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub total: usize,
    pub limit: usize,
    pub skip: usize,
    pub data: Vec<Record>,
}

/// Result of `find`: a page when pagination is enabled, otherwise every match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FindResult {
    Page(Page),
    All(Vec<Record>),
}

impl FindResult {
    /// The records in this result, regardless of pagination.
    pub fn data(&self) -> &[Record] {
        match self {
            Self::Page(page) => &page.data,
            Self::All(records) => records,
        }
    }

    pub fn into_data(self) -> Vec<Record> {
        match self {
            Self::Page(page) => page.data,
            Self::All(records) => records,
        }
    }
}

/// Kind of a service event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Created,
    Updated,
    Patched,
    Removed,
    Custom(String),
}

impl EventKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Patched => "patched",
            Self::Removed => "removed",
            Self::Custom(name) => name,
        }
    }
}

/// An event published after a successful mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEvent {
    pub path: String,
    pub kind: EventKind,
    pub data: Record,
}
