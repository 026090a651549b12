//! Search Wire Protocol
//!
//! Defines the endpoint, query parameter names and error payloads shared by
//! the HTTP handler and the client. Error reasons are a closed set mapped
//! to and from their wire strings through the single [`REASONS`] table.

use serde::{Deserialize, Serialize};

use super::types::SearchError;

// --- API Endpoints ---

/// Public endpoint answering search queries.
pub const ENDPOINT_SEARCH: &str = "/search";
/// Static HTML form that submits to [`ENDPOINT_SEARCH`].
pub const ENDPOINT_FORM: &str = "/";

// --- Query Parameters ---

pub const PARAM_QUERY: &str = "query";
pub const PARAM_ORDER_FIELD: &str = "orderField";
pub const PARAM_ORDER_BY: &str = "orderBy";
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_OFFSET: &str = "offset";

/// Header carrying the caller's access token. Sent by the client, not checked by the server.
pub const HEADER_ACCESS_TOKEN: &str = "AccessToken";

// --- Error Reasons ---

/// Wire spelling of every engine error.
pub const REASONS: [(SearchError, &str); 4] = [
    (SearchError::BadOrderField, "ErrorBadOrderField"),
    (SearchError::BadOrderBy, "ErrorBadOrderBy"),
    (SearchError::BadLimit, "ErrorBadLimit"),
    (SearchError::BadOffset, "ErrorBadOffset"),
];

/// Wire reason string for an engine error.
pub fn reason_to_wire(error: SearchError) -> &'static str {
    REASONS
        .iter()
        .find(|(known, _)| *known == error)
        .map(|(_, wire)| *wire)
        .unwrap_or("ErrorUnknown")
}

/// Recognized engine error for a wire reason, if any.
pub fn reason_from_wire(reason: &str) -> Option<SearchError> {
    REASONS
        .iter()
        .find(|(_, wire)| *wire == reason)
        .map(|(known, _)| *known)
}

// --- Data Transfer Objects ---

/// Body of every `400 Bad Request` answered by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchErrorResponse {
    pub error: String,
}

impl From<SearchError> for SearchErrorResponse {
    fn from(error: SearchError) -> Self {
        Self {
            error: reason_to_wire(error).to_string(),
        }
    }
}
