//! State of one interactive comparison: the loaded table, both period
//! tokens, the display language and the day notes.

use crate::locale::Locale;
use crate::model::notes::Notes;
use crate::model::record::Record;
use crate::pipeline::{Comparison, compare};

#[derive(Debug, Clone)]
pub struct Session {
    table: Option<Vec<Record>>,
    period_a: String,
    period_b: String,
    locale: Locale,
    notes: Notes,
    comparison: Comparison,
}

impl Session {
    pub fn new(locale: Locale) -> Self {
        Self {
            table: None,
            period_a: String::new(),
            period_b: String::new(),
            locale,
            notes: Notes::new(),
            comparison: compare(None, "", ""),
        }
    }

    /// Replaces the whole table; earlier records are discarded.
    pub fn replace_table(&mut self, records: Vec<Record>) {
        self.table = Some(records);
        self.recompute();
    }

    pub fn set_periods(&mut self, period_a: &str, period_b: &str) {
        if self.period_a == period_a && self.period_b == period_b {
            return;
        }
        self.period_a = period_a.to_string();
        self.period_b = period_b.to_string();
        self.recompute();
    }

    /// Language only affects rendering, so the comparison is kept.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn add_note(&mut self, date_key: &str, text: &str) -> bool {
        self.notes.add(date_key, text)
    }

    pub fn table(&self) -> Option<&[Record]> {
        self.table.as_deref()
    }

    pub fn period_a(&self) -> &str {
        &self.period_a
    }

    pub fn period_b(&self) -> &str {
        &self.period_b
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn notes(&self) -> &Notes {
        &self.notes
    }

    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    fn recompute(&mut self) {
        self.comparison = compare(self.table.as_deref(), &self.period_a, &self.period_b);
        match &self.comparison {
            Comparison::Ready(r) => tracing::debug!(
                period_a = %self.period_a,
                period_b = %self.period_b,
                insights = r.insights.len(),
                "comparison ready"
            ),
            Comparison::Unavailable(reason) => {
                tracing::debug!(?reason, "comparison unavailable")
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/session.rs"]
mod tests;
