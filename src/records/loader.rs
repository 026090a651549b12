//! Dataset Loader
//!
//! Reads the XML dataset (`<root><row>...</row>...</root>`) into records.
//! Loading happens once at startup; a failure here is fatal to the server
//! but never reaches the query engine.

use super::normalize::normalize_all;
use super::types::{RawRecord, SearchRecord};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] quick_xml::DeError),
}

#[derive(Debug, Deserialize)]
struct DatasetXml {
    #[serde(rename = "row", default)]
    rows: Vec<RawRecord>,
}

/// Decodes every `<row>` of an XML document, in document order.
pub fn parse_dataset(xml: &str) -> Result<Vec<RawRecord>, DatasetError> {
    let dataset: DatasetXml = quick_xml::de::from_str(xml)?;
    Ok(dataset.rows)
}

/// Reads and normalizes the dataset file at `path`.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<SearchRecord>, DatasetError> {
    let path = path.as_ref();
    let xml = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raws = parse_dataset(&xml)?;
    tracing::debug!("Decoded {} rows from {}", raws.len(), path.display());

    Ok(normalize_all(raws))
}
