//! The scoring engine: a pure, synchronous pass over a completed submission.

mod profile;
mod recommendations;
mod rules;

use super::catalog::QuestionCatalog;
use super::domain::{QuizResult, QuizSubmission};

/// Stateless engine that scores completed submissions against an injected
/// catalog. Each evaluation is an independent, side-effect-free function of
/// the submission and the catalog.
pub struct ScoringEngine {
    catalog: QuestionCatalog,
}

impl ScoringEngine {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Computes the full result for one submission.
    ///
    /// Never fails: unknown question ids or option values simply contribute
    /// nothing.
    pub fn evaluate(&self, submission: &QuizSubmission) -> QuizResult {
        let (profile_scores, readiness) = rules::accumulate(&self.catalog, submission);

        // Contributions are non-negative in practice, but both ends of the
        // range are enforced.
        let readiness_score = readiness.clamp(0, 100) as u8;

        let primary_profile = profile::derive_primary(&profile_scores);
        let readiness_level = profile::readiness_level(readiness_score);
        let recommendations =
            recommendations::for_result(readiness_level, primary_profile.profile);

        QuizResult {
            answers: submission.answers.clone(),
            freeform_response: submission.freeform_response.clone(),
            contact_info: submission.contact_info.clone(),
            profile_scores,
            primary_profile,
            readiness_score,
            readiness_level,
            recommendations,
        }
    }
}
