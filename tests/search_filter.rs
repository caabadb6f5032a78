use quick_kv::entries::Entry;
use quick_kv::search::filter_entries;

fn sample() -> Vec<Entry> {
    vec![
        Entry::new("api_key", "abc123"),
        Entry::new("Home", "/home/me"),
        Entry::new("db_url", "postgres://API.local"),
        Entry::new("misc", "nothing"),
    ]
}

#[test]
fn empty_query_returns_everything() {
    let entries = sample();
    let all: Vec<&Entry> = entries.iter().collect();
    assert_eq!(filter_entries(&entries, ""), all);
    assert_eq!(filter_entries(&entries, "  "), all);
}

#[test]
fn matches_key_or_value_ignoring_case() {
    let entries = sample();
    let found: Vec<&str> = filter_entries(&entries, " API ")
        .iter()
        .map(|e| e.key.as_str())
        .collect();
    assert_eq!(found, vec!["api_key", "db_url"]);

    let found = filter_entries(&entries, "HOME");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].key, "Home");
}

#[test]
fn result_is_ordered_subsequence_satisfying_predicate() {
    let entries = sample();
    for q in ["a", "o", "me", "zzz", "123", "/"] {
        let result = filter_entries(&entries, q);
        let mut last = None;
        for e in &result {
            let pos = entries.iter().position(|x| x == *e).unwrap();
            assert!(last.map_or(true, |l| pos > l), "order broken for {q}");
            last = Some(pos);
            let q = q.to_lowercase();
            assert!(e.key.to_lowercase().contains(&q) || e.value.to_lowercase().contains(&q));
        }
    }
}

#[test]
fn no_match_is_empty() {
    assert!(filter_entries(&sample(), "xyz").is_empty());
}
