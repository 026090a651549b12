use super::types::{OrderBy, OrderField, SearchError, SearchQuery};
use crate::records::types::SearchRecord;

/// Filters, orders and paginates `records` according to `query`.
///
/// All parameters are validated before any record is touched. The shared
/// slice is never reordered; matches are cloned into a fresh vector first.
pub fn search(
    records: &[SearchRecord],
    query: &SearchQuery,
) -> Result<Vec<SearchRecord>, SearchError> {
    let limit = usize::try_from(query.limit).map_err(|_| SearchError::BadLimit)?;
    let offset = usize::try_from(query.offset).map_err(|_| SearchError::BadOffset)?;
    let order_field = OrderField::parse(&query.order_field)?;
    let order_by = OrderBy::try_from(query.order_by)?;

    let mut matched = filter(records, &query.query);
    order(&mut matched, order_field, order_by);

    Ok(paginate(matched, limit, offset))
}

/// Case-sensitive substring match against `name` or `about`.
pub fn filter(records: &[SearchRecord], query: &str) -> Vec<SearchRecord> {
    if query.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| record.name.contains(query) || record.about.contains(query))
        .cloned()
        .collect()
}

/// Stable sort; `AsIs` leaves the slice untouched.
pub fn order(records: &mut [SearchRecord], field: OrderField, direction: OrderBy) {
    match direction {
        OrderBy::AsIs => {}
        OrderBy::Ascending => records.sort_by(|a, b| field.compare(a, b)),
        OrderBy::Descending => records.sort_by(|a, b| field.compare(b, a)),
    }
}

/// Window `[offset, offset + limit)`, clipped to the end of `records`.
pub fn paginate(records: Vec<SearchRecord>, limit: usize, offset: usize) -> Vec<SearchRecord> {
    if offset >= records.len() || limit == 0 {
        return Vec::new();
    }

    records.into_iter().skip(offset).take(limit).collect()
}
