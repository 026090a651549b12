//! User Search Service Library
//!
//! In-memory search over a fixed user dataset, served over HTTP, plus a typed
//! client for it. The binary (`main.rs`) wires these together.
//!
//! ## Modules
//! - **`records`**: Dataset loading and normalization of raw rows into `SearchRecord`s.
//! - **`search`**: The filter/order/paginate engine, the wire protocol and the Axum handlers.
//! - **`client`**: HTTP client that classifies every response into a typed outcome.
//! - **`config`**: Server settings from flags and environment.

pub mod client;
pub mod config;
pub mod records;
pub mod search;
