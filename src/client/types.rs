use std::time::Duration;
use thiserror::Error;

/// Largest page the client will ask for; bigger limits are clamped silently.
pub const MAX_LIMIT: i64 = 25;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Where and how the client talks to the search server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root, e.g. `http://127.0.0.1:8080`.
    pub base_url: String,
    /// Sent in the `AccessToken` header of every request.
    pub access_token: String,
    /// Upper bound on the whole request, connect through body.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            access_token: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    normalized.trim_end_matches('/').to_string()
}

/// Parameters of one `find_users` call.
///
/// `order_by`: `-1` ascending, `0` as-is, `1` descending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub order_field: String,
    pub order_by: i64,
    pub limit: i64,
    pub offset: i64,
}

impl SearchRequest {
    /// Rejects negative paging values and clamps `limit` to [`MAX_LIMIT`].
    pub fn validated(&self) -> Result<SearchRequest, ClientError> {
        if self.limit < 0 {
            return Err(ClientError::InvalidParameters(
                "limit must be >= 0".to_string(),
            ));
        }
        if self.offset < 0 {
            return Err(ClientError::InvalidParameters(
                "offset must be >= 0".to_string(),
            ));
        }

        let mut request = self.clone();
        request.limit = request.limit.min(MAX_LIMIT);
        Ok(request)
    }
}

/// Every way a `find_users` call can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("bad AccessToken")]
    Unauthorized,

    #[error("order field {0:?} invalid")]
    BadOrderField(String),

    #[error("order by {0} invalid")]
    BadOrderBy(i64),

    #[error("unknown bad request error: {0}")]
    UnknownError(String),

    #[error("cant unpack error json: {0}")]
    MalformedErrorPayload(String),

    #[error("search server fatal error")]
    ServerFailure,

    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),

    #[error("cant unpack result json: {0}")]
    MalformedResponsePayload(String),

    #[error("timeout after {0:?}")]
    Timeout(Duration),

    #[error("network failure: {0}")]
    NetworkFailure(String),
}

impl ClientError {
    /// Transport failures are the only ones worth retrying.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Timeout(_) | ClientError::NetworkFailure(_))
    }
}
