//! Quiz domain model, question catalogs, the scoring engine, and export
//! shaping for the collaborative debt quiz.

pub mod catalog;
pub mod domain;
pub mod export;
pub mod scoring;

pub use catalog::{CatalogError, QuestionCatalog};
pub use domain::{
    AnswerOption, AnswerPayload, OptionScoring, PrimaryProfile, Profile, ProfileScores, Question,
    QuestionId, QuestionKind, QuizAnswer, QuizResult, QuizSubmission, ReadinessLevel,
};
pub use export::{AnswerRecord, ExportError, ResponseRecord, SubmissionExport};
pub use scoring::ScoringEngine;
