//! Conversion of raw store records into listing entries.

use crate::domain::entities::{ExternalRecord, ListingEntry};

/// Normalizes a raw record into a [`ListingEntry`].
///
/// Returns `None` when the name, link, or description is missing, not a string,
/// or blank after trimming. The function is pure, so normalizing the same record
/// twice gives the same answer.
pub fn normalize(record: &ExternalRecord) -> Option<ListingEntry> {
    ListingEntry::new(record.name()?, record.link()?, record.description()?)
}

/// Normalizes every record, keeping the input order and dropping the rest.
pub fn normalize_all<'a, I>(records: I) -> Vec<ListingEntry>
where
    I: IntoIterator<Item = &'a ExternalRecord>,
{
    records.into_iter().filter_map(normalize).collect()
}
