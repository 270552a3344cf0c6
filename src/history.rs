//! Per-topic history of generated questions.
//!
//! Owned by the caller and fed back into the prompt builder so the model is
//! steered away from questions it already produced. Entries are truncated
//! prefixes of the raw response, kept per topic with a bounded capacity.
//! The store lives for the process only; nothing is persisted.

use std::collections::{HashMap, VecDeque};

/// Number of characters of the raw response kept per entry.
pub const HISTORY_PREFIX_CHARS: usize = 200;

/// Default per-topic entry cap. Oldest entries are evicted first.
pub const DEFAULT_HISTORY_CAP: usize = 50;

#[derive(Debug, Clone)]
pub struct QuestionHistory {
    cap: usize,
    entries: HashMap<String, VecDeque<String>>,
}

impl QuestionHistory {
    pub fn new() -> Self {
        Self::with_cap(DEFAULT_HISTORY_CAP)
    }

    /// History keeping at most `cap` entries per topic.
    pub fn with_cap(cap: usize) -> Self {
        Self {
            cap,
            entries: HashMap::new(),
        }
    }

    /// Record a generated question for `topic`. Only the first
    /// [`HISTORY_PREFIX_CHARS`] characters of the raw response are kept;
    /// an empty response is ignored.
    pub fn record(&mut self, topic: &str, raw_text: &str) {
        if raw_text.is_empty() {
            return;
        }

        let entry: String = raw_text.chars().take(HISTORY_PREFIX_CHARS).collect();
        let topic_entries = self.entries.entry(topic.to_string()).or_default();
        topic_entries.push_back(entry);
        while topic_entries.len() > self.cap {
            topic_entries.pop_front();
        }
    }

    /// The most recent `n` entries for `topic`, oldest first.
    pub fn recent(&self, topic: &str, n: usize) -> Vec<&str> {
        self.entries
            .get(topic)
            .map(|entries| {
                entries
                    .iter()
                    .skip(entries.len().saturating_sub(n))
                    .map(String::as_str)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of entries recorded for `topic`.
    pub fn len(&self, topic: &str) -> usize {
        self.entries.get(topic).map_or(0, VecDeque::len)
    }

    pub fn is_empty(&self, topic: &str) -> bool {
        self.len(topic) == 0
    }
}

impl Default for QuestionHistory {
    fn default() -> Self {
        Self::new()
    }
}
