use super::engine::search;
use super::protocol::{
    ENDPOINT_FORM, ENDPOINT_SEARCH, PARAM_LIMIT, PARAM_OFFSET, PARAM_ORDER_BY, PARAM_ORDER_FIELD,
    PARAM_QUERY, SearchErrorResponse,
};
use super::types::{SearchError, SearchQuery};
use crate::records::types::SearchRecord;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use std::sync::Arc;

/// Record set loaded at startup, shared read-only by every request.
pub type SharedRecords = Arc<Vec<SearchRecord>>;

pub const DEFAULT_LIMIT: i64 = 10;

/// Raw query string of `GET /search`.
///
/// Numbers arrive as text so that a malformed value is reported with the
/// matching search reason instead of a framework rejection.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub query: Option<String>,
    pub order_field: Option<String>,
    pub order_by: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl SearchParams {
    /// Keeps the first value of each known key; repeats and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                PARAM_QUERY => &mut params.query,
                PARAM_ORDER_FIELD => &mut params.order_field,
                PARAM_ORDER_BY => &mut params.order_by,
                PARAM_LIMIT => &mut params.limit,
                PARAM_OFFSET => &mut params.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    pub fn into_query(self) -> Result<SearchQuery, SearchError> {
        Ok(SearchQuery {
            order_by: parse_number(self.order_by.as_deref(), 0, SearchError::BadOrderBy)?,
            limit: parse_number(self.limit.as_deref(), DEFAULT_LIMIT, SearchError::BadLimit)?,
            offset: parse_number(self.offset.as_deref(), 0, SearchError::BadOffset)?,
            query: self.query.unwrap_or_default(),
            order_field: self.order_field.unwrap_or_default(),
        })
    }
}

fn parse_number(value: Option<&str>, default: i64, error: SearchError) -> Result<i64, SearchError> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(text) => text.parse().map_err(|_| error),
    }
}

pub async fn handle_search(
    Query(pairs): Query<Vec<(String, String)>>,
    Extension(records): Extension<SharedRecords>,
) -> Response {
    let result = SearchParams::from_pairs(pairs)
        .into_query()
        .and_then(|query| search(&records, &query).map(|users| (query, users)));

    match result {
        Ok((query, users)) => {
            tracing::debug!(
                "Search query={:?} orderField={:?} orderBy={} limit={} offset={} -> {} users",
                query.query,
                query.order_field,
                query.order_by,
                query.limit,
                query.offset,
                users.len()
            );
            (StatusCode::OK, Json(users)).into_response()
        }
        Err(e) => {
            tracing::warn!("Rejected search request: {}", e);
            (StatusCode::BAD_REQUEST, Json(SearchErrorResponse::from(e))).into_response()
        }
    }
}

pub async fn handle_form() -> Html<&'static str> {
    Html(include_str!("form.html"))
}

pub fn router(records: SharedRecords) -> Router {
    Router::new()
        .route(ENDPOINT_FORM, get(handle_form))
        .route(ENDPOINT_SEARCH, get(handle_search))
        .layer(Extension(records))
}
