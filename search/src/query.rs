//! Search query types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Reserved predicate keys shared with the façade.
pub mod keys {
    /// `match`: `|`-separated set of names. `fuzzy`: name or display name substring.
    pub const NAME: &str = "name";
    pub const KEYWORD: &str = "keyword";
    pub const OWNER_KIND: &str = "owner_kind";
    pub const OWNER_NAME: &str = "owner_name";
    pub const USER_FACING: &str = "userfacing";
    /// `fuzzy` only: substring of any label key or value.
    pub const LABEL: &str = "label";
    /// `fuzzy` only: substring of any annotation key or value.
    pub const ANNOTATION: &str = "annotation";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    #[serde(alias = "createTime")]
    CreateTime,
    #[default]
    Name,
}

impl OrderBy {
    /// Unknown values fall back to ordering by name.
    pub fn parse(value: &str) -> Self {
        match value {
            "create_time" | "createTime" => OrderBy::CreateTime,
            _ => OrderBy::Name,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::CreateTime => "create_time",
            OrderBy::Name => "name",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed search request.
///
/// Absent maps impose no constraint; every entry present must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    #[serde(rename = "match")]
    pub matches: BTreeMap<String, String>,
    pub fuzzy: BTreeMap<String, String>,
    pub order_by: OrderBy,
    pub reverse: bool,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_match(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.matches.insert(key.into(), value.into());
        self
    }

    pub fn with_fuzzy(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fuzzy.insert(key.into(), value.into());
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// True when the query carries no predicates at all.
    pub fn is_unfiltered(&self) -> bool {
        self.matches.is_empty() && self.fuzzy.is_empty()
    }
}
