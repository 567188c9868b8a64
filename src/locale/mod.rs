//! Localized text for every user-facing string, including the insight
//! sentences.
//!
//! Each locale owns one [`Labels`] table; insight sentences are rendered from
//! the table's template so they always follow the active locale.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::model::record::ScoreField;
use crate::pipeline::stage3_insights::{Direction, Insight};

mod tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Id,
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Id, Locale::En, Locale::Zh];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Id => "id",
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Id => &tables::ID,
            Locale::En => &tables::EN,
            Locale::Zh => &tables::ZH,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language `{0}` (use id|en|zh)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" | "id-id" => Ok(Locale::Id),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "zh" | "zh-cn" => Ok(Locale::Zh),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Labels {
    pub title: &'static str,
    pub comparison: &'static str,
    pub compare_period_1: &'static str,
    pub compare_period_2: &'static str,
    pub upload: &'static str,
    pub notes: &'static str,
    pub add_note: &'static str,
    pub sleep_score: &'static str,
    pub activity_score: &'static str,
    pub readiness_score: &'static str,
    pub insight: &'static str,
    pub language: &'static str,
    pub no_comparison: &'static str,
    pub increased: &'static str,
    pub decreased: &'static str,
    /// Slots: `{field}`, `{direction}`, `{percent}`.
    pub insight_template: &'static str,
    pub footer: &'static str,
}

impl Labels {
    pub fn field_name(&self, field: ScoreField) -> &'static str {
        match field {
            ScoreField::Sleep => self.sleep_score,
            ScoreField::Activity => self.activity_score,
            ScoreField::Readiness => self.readiness_score,
        }
    }

    pub fn direction(&self, direction: Direction) -> &'static str {
        match direction {
            Direction::Increased => self.increased,
            Direction::Decreased => self.decreased,
        }
    }

    pub fn insight_sentence(&self, insight: &Insight) -> String {
        self.insight_template
            .replace("{field}", self.field_name(insight.field))
            .replace("{direction}", self.direction(insight.direction))
            .replace("{percent}", &format!("{:.1}", insight.percent))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/locale/tests.rs"]
mod tests;
