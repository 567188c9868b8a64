use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::input::records::parse_date;

/// Free-text annotations keyed by day. Held for the session only and never
/// merged into the loaded records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notes {
    entries: BTreeMap<NaiveDate, String>,
}

impl Notes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `text` under the day named by `date_key`, replacing any earlier
    /// note. Blank text or an unreadable key is ignored.
    pub fn add(&mut self, date_key: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(date) = parse_date(date_key) else {
            tracing::warn!(date_key, "note date is not a readable date; ignoring note");
            return false;
        };
        self.entries.insert(date, text.to_string());
        true
    }

    pub fn get(&self, date: NaiveDate) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.entries.iter().map(|(d, t)| (*d, t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/notes.rs"]
mod tests;
