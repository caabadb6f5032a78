use crate::storage::BlobStore;
use serde::{Deserialize, Serialize};

/// Durable key under which the entry list is stored.
pub const ENTRIES_KEY: &str = "kv-entries";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Parse a serialized entry list. Empty input yields an empty list.
pub fn parse_entries(content: &str) -> anyhow::Result<Vec<Entry>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let list: Vec<Entry> = serde_json::from_str(content)?;
    Ok(list)
}

/// Ordered key/value list mirrored to a [`BlobStore`] on every mutation.
pub struct EntryStore {
    entries: Vec<Entry>,
    blob: Box<dyn BlobStore>,
}

impl EntryStore {
    /// Load the entry list from `blob`. Anything that cannot be read or
    /// parsed degrades to an empty list.
    pub fn load(blob: Box<dyn BlobStore>) -> Self {
        let entries = match blob.read(ENTRIES_KEY) {
            Ok(Some(content)) => parse_entries(&content).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored entries are malformed; starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored entries; starting empty");
                Vec::new()
            }
        };
        tracing::debug!(count = entries.len(), "entries loaded");
        Self { entries, blob }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `key` at the front, or replace the value of an existing entry
    /// in place. A key that is blank after trimming leaves the store untouched.
    pub fn upsert(&mut self, key: &str, value: &str) -> &[Entry] {
        let key = key.trim();
        if key.is_empty() {
            return &self.entries;
        }
        if let Some(existing) = self.entries.iter_mut().find(|e| e.key == key) {
            existing.value = value.to_string();
        } else {
            self.entries.insert(0, Entry::new(key, value));
        }
        if let Err(e) = self.persist() {
            tracing::error!(error = %e, "failed to persist entries");
        }
        &self.entries
    }

    fn persist(&mut self) -> anyhow::Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        self.blob.write(ENTRIES_KEY, &json)?;
        Ok(())
    }
}
