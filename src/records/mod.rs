//! Record Model
//!
//! Turns the raw user dataset into the records the search service works with.
//!
//! ## Responsibilities
//! - **Loading**: Reading `dataset.xml` from disk and decoding its `<row>` entries.
//! - **Normalization**: Collapsing first/second name into a single display name.
//!
//! ## Submodules
//! - **`types`**: `RawRecord` (as stored) and `SearchRecord` (as served).
//! - **`normalize`**: Pure, order-preserving conversion between the two.
//! - **`loader`**: XML decoding and file access.

pub mod loader;
pub mod normalize;
pub mod types;
