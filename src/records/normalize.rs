use super::types::{RawRecord, SearchRecord};

/// Converts a stored record into its searchable form.
pub fn normalize(raw: RawRecord) -> SearchRecord {
    SearchRecord {
        id: raw.id,
        name: format!("{} {}", raw.first_name, raw.second_name),
        age: raw.age,
        about: raw.about,
        gender: raw.gender,
    }
}

/// Length- and order-preserving map of [`normalize`].
pub fn normalize_all(raws: Vec<RawRecord>) -> Vec<SearchRecord> {
    raws.into_iter().map(normalize).collect()
}
