//! Search Client Module
//!
//! Typed HTTP client for the search endpoint.
//!
//! ## Overview
//! `SearchClient::find_users` validates a `SearchRequest` locally, sends it as
//! `GET /search`, and classifies whatever comes back into a `ClientError`
//! variant the caller can act on:
//! - **Transport** (`Timeout`, `NetworkFailure`): safe to retry.
//! - **Rejected** (`InvalidParameters`, `BadOrderField`, `BadOrderBy`, `UnknownError`):
//!   the request itself is wrong, retrying will not help.
//! - **Server** (`Unauthorized`, `ServerFailure`, `UnexpectedStatus`) and
//!   **payload** (`MalformedErrorPayload`, `MalformedResponsePayload`) anomalies.
//!
//! ## Submodules
//! - **`client`**: The `SearchClient` itself.
//! - **`types`**: Configuration, request and error types.

pub mod client;
pub mod types;
