use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

// pandoc-style block anchored at the very start of the document.
// the interior group is lazily optional: `---\n---\n` closes at the second marker
// even when the body has a later `---` line.
static HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"\A---[ \t]*\r?\n(?:(.*?)\r?\n)??---[ \t]*(?:\r?\n|\z)")
        .dot_matches_new_line(true)
        .build()
        .unwrap()
});

/// Key-value header of a document. Keys are lowercased; the last occurrence of a key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Metadata(BTreeMap<String, String>);

impl Metadata {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn date(&self) -> Option<&str> {
        self.get("date")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.0.insert(key.trim().to_lowercase(), value.trim().to_string());
    }
}

/// Returns (body, header). Without a leading block, the body is `content` itself.
pub(crate) fn split_metadata(content: &str) -> (&str, Metadata) {
    let mut metadata = Metadata::default();

    let Some(caps) = HEADER_PATTERN.captures(content) else {
        return (content, metadata);
    };

    if let Some(header) = caps.get(1) {
        for line in header.as_str().lines() {
            // split at the first colon only: values like `10:00` stay intact
            if let Some((name, value)) = line.split_once(':') {
                metadata.insert(name, value);
            }
        }
    }

    let end = caps.get(0).map_or(0, |m| m.end());
    (&content[end..], metadata)
}
