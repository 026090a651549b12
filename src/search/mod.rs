//! Search Service Module
//!
//! Answers substring queries over the in-memory user records.
//!
//! ## Overview
//! A request flows through three stages, all pure and operating on a private
//! copy of the shared record set:
//! 1. **Filter**: keep records whose `name` or `about` contains the query (case-sensitive).
//! 2. **Order**: stable sort by `Id`, `Age` or `Name`, ascending, descending or as-is.
//! 3. **Paginate**: `offset`/`limit` window; an offset past the end yields nothing.
//!
//! ## Submodules
//! - **`engine`**: The filter/sort/paginate pipeline.
//! - **`handlers`**: HTTP handlers and router for the Axum web server.
//! - **`protocol`**: Wire constants, error reason table and DTOs shared with the client.
//! - **`types`**: Query parameters, ordering enums and the engine's error type.

pub mod engine;
pub mod handlers;
pub mod protocol;
pub mod types;
