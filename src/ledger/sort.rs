use super::entry::LedgerEntry;

/// Textual ordering key: `date@description@change`, with the ISO date and the
/// plain decimal form of the change.
pub fn sort_key(entry: &LedgerEntry) -> String {
    format!(
        "{}@{}@{}",
        entry.date(),
        entry.description(),
        entry.change()
    )
}

/// Orders entries for display: all negative changes first, then the rest.
/// Each block is sorted by [`sort_key`] and keeps input order on ties.
pub fn sort_entries(entries: &[LedgerEntry]) -> Vec<&LedgerEntry> {
    let (mut negatives, mut non_negatives): (Vec<&LedgerEntry>, Vec<&LedgerEntry>) =
        entries.iter().partition(|entry| entry.is_negative());
    negatives.sort_by_cached_key(|entry| sort_key(entry));
    non_negatives.sort_by_cached_key(|entry| sort_key(entry));
    negatives.extend(non_negatives);
    negatives
}
