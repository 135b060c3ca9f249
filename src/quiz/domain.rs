use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog questions (1-based, stable display order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The six debt-situation archetypes a respondent can be classified into.
///
/// The set is closed; scoring never produces a key outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Student,
    Credit,
    Medical,
    Mortgage,
    Multi,
    Solidarity,
}

impl Profile {
    /// Enumeration order, which doubles as the deterministic secondary order
    /// used when tie-breaking primary-profile candidates.
    pub const ALL: [Profile; 6] = [
        Profile::Student,
        Profile::Credit,
        Profile::Medical,
        Profile::Mortgage,
        Profile::Multi,
        Profile::Solidarity,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Profile::Student => "student",
            Profile::Credit => "credit",
            Profile::Medical => "medical",
            Profile::Mortgage => "mortgage",
            Profile::Multi => "multi",
            Profile::Solidarity => "solidarity",
        }
    }

    /// Reader-facing archetype name reported alongside the primary profile.
    pub const fn display_name(self) -> &'static str {
        match self {
            Profile::Student => "Student Loan Struggler",
            Profile::Credit => "Credit Card Cycler",
            Profile::Medical => "Medical Debt Survivor",
            Profile::Mortgage => "Asset-Secured Borrower",
            Profile::Multi => "Multi-Generational Carrier",
            Profile::Solidarity => "Solidarity Participant",
        }
    }
}

/// Accumulated score per archetype. Every key is always present and values
/// only ever increase while answers are aggregated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileScores {
    #[serde(default)]
    pub student: f64,
    #[serde(default)]
    pub credit: f64,
    #[serde(default)]
    pub medical: f64,
    #[serde(default)]
    pub mortgage: f64,
    #[serde(default)]
    pub multi: f64,
    #[serde(default)]
    pub solidarity: f64,
}

impl ProfileScores {
    pub fn get(&self, profile: Profile) -> f64 {
        match profile {
            Profile::Student => self.student,
            Profile::Credit => self.credit,
            Profile::Medical => self.medical,
            Profile::Mortgage => self.mortgage,
            Profile::Multi => self.multi,
            Profile::Solidarity => self.solidarity,
        }
    }

    pub(crate) fn add(&mut self, profile: Profile, points: f64) {
        let slot = match profile {
            Profile::Student => &mut self.student,
            Profile::Credit => &mut self.credit,
            Profile::Medical => &mut self.medical,
            Profile::Mortgage => &mut self.mortgage,
            Profile::Multi => &mut self.multi,
            Profile::Solidarity => &mut self.solidarity,
        };
        *slot += points;
    }
}

/// Scoring contribution attached to a selectable option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionScoring {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub profiles: BTreeMap<Profile, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness: Option<i32>,
}

/// One selectable option of a catalog question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub scoring: OptionScoring,
}

/// How a question collects its answer. The catalog's declared kind is
/// authoritative for scoring dispatch regardless of the payload shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    #[default]
    SingleChoice,
    Freeform,
    Ranked,
    MultiSelect,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionKind::SingleChoice => "single-choice",
            QuestionKind::Freeform => "freeform",
            QuestionKind::Ranked => "ranked",
            QuestionKind::MultiSelect => "multi-select",
        }
    }
}

/// Immutable catalog question definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    #[serde(default)]
    pub kind: QuestionKind,
    pub options: Vec<AnswerOption>,
}

/// Submitted answer payload as a tagged union over the three answer shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerPayload {
    /// A single selected option value.
    Choice(String),
    /// An unordered selection of option values.
    Choices(Vec<String>),
    /// Option values ordered from highest to lowest priority.
    Ranking(Vec<String>),
}

impl AnswerPayload {
    /// Selected values in submission order.
    pub fn values(&self) -> &[String] {
        match self {
            AnswerPayload::Choice(value) => std::slice::from_ref(value),
            AnswerPayload::Choices(values) | AnswerPayload::Ranking(values) => values,
        }
    }

    /// The value used when the catalog scores this answer as a single choice.
    pub fn primary(&self) -> Option<&str> {
        self.values().first().map(String::as_str)
    }
}

/// One respondent answer tied to a catalog question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub question_id: QuestionId,
    pub payload: AnswerPayload,
}

/// A completed quiz session handed to the scoring engine as one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<QuizAnswer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
}

impl QuizSubmission {
    /// Records an answer, replacing any earlier answer for the same question.
    /// Answers are keyed by question id, last write wins.
    pub fn record_answer(&mut self, answer: QuizAnswer) {
        match self
            .answers
            .iter_mut()
            .find(|existing| existing.question_id == answer.question_id)
        {
            Some(existing) => *existing = answer,
            None => self.answers.push(answer),
        }
    }
}

/// Openness to collaborative financial solutions, derived from the 0-100
/// readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessLevel {
    Low,
    Medium,
    High,
}

impl ReadinessLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ReadinessLevel::Low => "low",
            ReadinessLevel::Medium => "medium",
            ReadinessLevel::High => "high",
        }
    }
}

/// The winning archetype with its derived match percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryProfile {
    pub profile: Profile,
    pub name: String,
    /// Always within [60, 95].
    pub match_percentage: u8,
}

/// Full scoring output for one submission. Produced once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub answers: Vec<QuizAnswer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    pub profile_scores: ProfileScores,
    pub primary_profile: PrimaryProfile,
    /// Always within [0, 100].
    pub readiness_score: u8,
    pub readiness_level: ReadinessLevel,
    pub recommendations: Vec<String>,
}
