//! Dataset Record Types
//!
//! `RawRecord` mirrors a `<row>` of the dataset file; `SearchRecord` is the
//! shape returned by the search endpoint and decoded by the client.

use serde::{Deserialize, Serialize};

/// A dataset entry exactly as stored, before the name fields are joined.
///
/// Unknown child elements of `<row>` are ignored during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    pub id: u64,
    pub first_name: String,
    pub second_name: String,
    pub age: u32,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub gender: String,
}

/// The client-facing record.
///
/// Serializes with exactly the wire fields `id`, `name`, `age`, `about`, `gender`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: u64,
    /// `first_name + " " + second_name`.
    pub name: String,
    pub age: u32,
    pub about: String,
    pub gender: String,
}
