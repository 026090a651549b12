use std::cmp::Ordering;
use thiserror::Error;

use crate::records::types::SearchRecord;

/// Request-shape failures of the search engine.
///
/// Each variant travels over the wire as a fixed reason string,
/// see [`crate::search::protocol::REASONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SearchError {
    #[error("order field is not one of Id, Age, Name")]
    BadOrderField,
    #[error("order by must be -1, 0 or 1")]
    BadOrderBy,
    #[error("limit must be >= 0")]
    BadLimit,
    #[error("offset must be >= 0")]
    BadOffset,
}

/// Field a result set can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Id,
    Age,
    Name,
}

impl OrderField {
    /// Parses the wire name; an empty string means `Name`.
    pub fn parse(field: &str) -> Result<Self, SearchError> {
        match field {
            "Name" | "" => Ok(OrderField::Name),
            "Id" => Ok(OrderField::Id),
            "Age" => Ok(OrderField::Age),
            _ => Err(SearchError::BadOrderField),
        }
    }

    /// Ascending comparison of two records on this field.
    pub fn compare(&self, a: &SearchRecord, b: &SearchRecord) -> Ordering {
        match self {
            OrderField::Id => a.id.cmp(&b.id),
            OrderField::Age => a.age.cmp(&b.age),
            OrderField::Name => a.name.cmp(&b.name),
        }
    }
}

/// Sort direction, using this service's wire convention:
/// `-1` ascending, `1` descending, `0` keep the filtered order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    Ascending,
    AsIs,
    Descending,
}

impl TryFrom<i64> for OrderBy {
    type Error = SearchError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(OrderBy::Ascending),
            0 => Ok(OrderBy::AsIs),
            1 => Ok(OrderBy::Descending),
            _ => Err(SearchError::BadOrderBy),
        }
    }
}

/// Untrusted parameters of one search call, as received from the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Substring to look for; empty matches every record.
    pub query: String,
    pub order_field: String,
    pub order_by: i64,
    pub limit: i64,
    pub offset: i64,
}
