//! Sort options for paginated catalog queries
//!
//! Sortable columns are an explicit allow-list: a sort field arriving as a
//! request string must parse into `SortField` or the request is rejected,
//! so no caller-supplied name ever reaches the SQL layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Column a catalog page may be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    #[default]
    Price,
    Kind,
    Size,
    CreatedAt,
}

impl SortField {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Kind => "type",
            Self::Size => "size",
            Self::CreatedAt => "created_at",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "type" => Ok(Self::Kind),
            "size" => Ok(Self::Size),
            "created_at" => Ok(Self::CreatedAt),
            _ => Err(ParseSortError(s.to_string())),
        }
    }
}

/// Ascending or descending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseSortError(s.to_string())),
        }
    }
}

/// Error returned for a sort field or order outside the allow-list
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unsortable field or order: {0}")]
pub struct ParseSortError(pub String);
