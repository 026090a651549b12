use super::types::{ClientConfig, ClientError, SearchRequest};
use crate::records::types::SearchRecord;
use crate::search::protocol::{
    ENDPOINT_SEARCH, HEADER_ACCESS_TOKEN, PARAM_LIMIT, PARAM_OFFSET, PARAM_ORDER_BY,
    PARAM_ORDER_FIELD, PARAM_QUERY, SearchErrorResponse, reason_from_wire,
};
use crate::search::types::SearchError;
use reqwest::StatusCode;

pub struct SearchClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl SearchClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::NetworkFailure(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Runs one search against the server.
    ///
    /// Negative `limit`/`offset` fail before anything is sent; a `limit`
    /// above the cap is clamped. No retries happen here.
    pub async fn find_users(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<SearchRecord>, ClientError> {
        let request = request.validated()?;
        let url = self.search_url(&request);

        tracing::debug!("Sending search request to {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(HEADER_ACCESS_TOKEN, &self.config.access_token)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("Search server rejected access token");
            return Err(ClientError::Unauthorized);
        }
        if status.is_server_error() {
            tracing::warn!("Search server failed with {}", status);
            return Err(ClientError::ServerFailure);
        }
        if status != StatusCode::BAD_REQUEST && !status.is_success() {
            return Err(ClientError::UnexpectedStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        if status == StatusCode::BAD_REQUEST {
            let error = classify_bad_request(&body, &request);
            tracing::warn!("Search request rejected: {}", error);
            return Err(error);
        }

        serde_json::from_slice::<Vec<SearchRecord>>(&body)
            .map_err(|e| ClientError::MalformedResponsePayload(e.to_string()))
    }

    fn search_url(&self, request: &SearchRequest) -> String {
        format!(
            "{}{ENDPOINT_SEARCH}?{PARAM_QUERY}={}&{PARAM_ORDER_FIELD}={}&{PARAM_ORDER_BY}={}&{PARAM_LIMIT}={}&{PARAM_OFFSET}={}",
            self.config.base_url,
            urlencoding::encode(&request.query),
            urlencoding::encode(&request.order_field),
            request.order_by,
            request.limit,
            request.offset,
        )
    }

    fn transport_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            tracing::warn!("Search request timed out after {:?}", self.config.timeout);
            ClientError::Timeout(self.config.timeout)
        } else {
            tracing::warn!("Search request failed: {}", e);
            ClientError::NetworkFailure(e.to_string())
        }
    }
}

fn classify_bad_request(body: &[u8], request: &SearchRequest) -> ClientError {
    let payload: SearchErrorResponse = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => return ClientError::MalformedErrorPayload(e.to_string()),
    };

    match reason_from_wire(&payload.error) {
        Some(SearchError::BadOrderField) => {
            ClientError::BadOrderField(request.order_field.clone())
        }
        Some(SearchError::BadOrderBy) => ClientError::BadOrderBy(request.order_by),
        Some(SearchError::BadLimit | SearchError::BadOffset) => {
            ClientError::InvalidParameters(payload.error)
        }
        None => ClientError::UnknownError(payload.error),
    }
}
