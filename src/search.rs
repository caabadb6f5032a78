use crate::entries::Entry;

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Entries whose key or value contains `query`, ignoring case, in store
/// order. A blank query matches everything.
pub fn filter_entries<'a>(entries: &'a [Entry], query: &str) -> Vec<&'a Entry> {
    let q = normalize_query(query);
    if q.is_empty() {
        return entries.iter().collect();
    }
    entries
        .iter()
        .filter(|e| e.key.to_lowercase().contains(&q) || e.value.to_lowercase().contains(&q))
        .collect()
}
