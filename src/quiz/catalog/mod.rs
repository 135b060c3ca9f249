//! Ordered question catalogs injected into the scoring engine.
//!
//! Deployments either use the built-in standard set or load a catalog from a
//! JSON document, so question numbering stays a configuration concern rather
//! than something the engine hard-codes.

mod standard;

use std::collections::BTreeSet;
use std::io::Read;

use serde::Serialize;

use super::domain::{Question, QuestionId};

/// Immutable, display-ordered question set. Deserialization goes through
/// [`QuestionCatalog::from_json_reader`] so the duplicate-id check always
/// runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate question id {0} in catalog")]
    DuplicateQuestionId(QuestionId),
}

impl QuestionCatalog {
    /// The built-in authoritative question set.
    pub fn standard() -> Self {
        Self {
            questions: standard::questions(),
        }
    }

    /// Builds a catalog from explicit question definitions, rejecting
    /// duplicate ids so lookups stay unambiguous.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateQuestionId(question.id));
            }
        }
        Ok(Self { questions })
    }

    /// Loads a deployment-specific catalog from a JSON array of questions.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = serde_json::from_reader(reader)?;
        Self::new(questions)
    }

    pub fn lookup(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// Questions in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::domain::QuestionKind;
    use std::io::Cursor;

    #[test]
    fn standard_catalog_has_unique_sequential_ids() {
        let catalog = QuestionCatalog::standard();
        assert_eq!(catalog.len(), 11);
        let ids: Vec<u32> = catalog.iter().map(|question| question.id.0).collect();
        assert_eq!(ids, (1..=11).collect::<Vec<u32>>());
    }

    #[test]
    fn lookup_misses_return_none() {
        let catalog = QuestionCatalog::standard();
        assert!(catalog.lookup(QuestionId(1)).is_some());
        assert!(catalog.lookup(QuestionId(99)).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"[
            {"id": 1, "prompt": "first", "options": []},
            {"id": 1, "prompt": "second", "options": []}
        ]"#;
        let err = QuestionCatalog::from_json_reader(Cursor::new(raw))
            .expect_err("duplicate ids must be rejected");
        assert!(matches!(err, CatalogError::DuplicateQuestionId(QuestionId(1))));
    }

    #[test]
    fn json_catalog_defaults_kind_to_single_choice() {
        let raw = r#"[
            {
                "id": 7,
                "prompt": "Interested?",
                "options": [
                    {"label": "Yes", "value": "A", "scoring": {"readiness": 20}}
                ]
            }
        ]"#;
        let catalog = QuestionCatalog::from_json_reader(Cursor::new(raw)).expect("parses");
        let question = catalog.lookup(QuestionId(7)).expect("present");
        assert_eq!(question.kind, QuestionKind::SingleChoice);
        assert_eq!(question.options[0].scoring.readiness, Some(20));
    }
}
