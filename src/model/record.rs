use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreField {
    Sleep,
    Activity,
    Readiness,
}

impl ScoreField {
    pub const ALL: [ScoreField; 3] = [
        ScoreField::Sleep,
        ScoreField::Activity,
        ScoreField::Readiness,
    ];

    /// Header of the CSV column carrying this score.
    pub fn column(self) -> &'static str {
        match self {
            ScoreField::Sleep => "Sleep Score",
            ScoreField::Activity => "Activity Score",
            ScoreField::Readiness => "Readiness Score",
        }
    }
}

/// One day of the export. A score is `None` when the column was absent,
/// blank or not a finite number.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    pub sleep_score: Option<f64>,
    pub activity_score: Option<f64>,
    pub readiness_score: Option<f64>,
}

impl Record {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            sleep_score: None,
            activity_score: None,
            readiness_score: None,
        }
    }

    pub fn score(&self, field: ScoreField) -> Option<f64> {
        match field {
            ScoreField::Sleep => self.sleep_score,
            ScoreField::Activity => self.activity_score,
            ScoreField::Readiness => self.readiness_score,
        }
    }

    pub fn with_score(mut self, field: ScoreField, value: Option<f64>) -> Self {
        match field {
            ScoreField::Sleep => self.sleep_score = value,
            ScoreField::Activity => self.activity_score = value,
            ScoreField::Readiness => self.readiness_score = value,
        }
        self
    }
}
