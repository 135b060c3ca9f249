//! Flat record shaping for the tabular export collaborator.
//!
//! The live product submits one response row plus one row per answer to an
//! external record store. The transport lives outside this crate; this module
//! only produces the rows and can serialize them as CSV to any sink the
//! caller owns. Export failures never affect an already-computed result.

use std::io::Write;

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use super::catalog::QuestionCatalog;
use super::domain::{AnswerPayload, QuizResult};

/// Flattened "Quiz Responses" row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseRecord {
    #[serde(rename = "Response ID")]
    pub response_id: String,
    /// YYYY-MM-DD, the format the record store expects.
    #[serde(rename = "Submission Date")]
    pub submission_date: String,
    #[serde(rename = "Primary Profile Type")]
    pub primary_profile_type: String,
    #[serde(rename = "Primary Profile Name")]
    pub primary_profile_name: String,
    #[serde(rename = "Match Percentage")]
    pub match_percentage: u8,
    #[serde(rename = "Readiness Score")]
    pub readiness_score: u8,
    #[serde(rename = "Readiness Level")]
    pub readiness_level: String,
    #[serde(rename = "Student Score")]
    pub student_score: f64,
    #[serde(rename = "Credit Score")]
    pub credit_score: f64,
    #[serde(rename = "Medical Score")]
    pub medical_score: f64,
    #[serde(rename = "Mortgage Score")]
    pub mortgage_score: f64,
    #[serde(rename = "Multi Score")]
    pub multi_score: f64,
    #[serde(rename = "Solidarity Score")]
    pub solidarity_score: f64,
    #[serde(rename = "Freeform Response")]
    pub freeform_response: String,
    #[serde(rename = "Contact Info")]
    pub contact_info: String,
}

/// Flattened "Individual Answers" row, one per submitted answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerRecord {
    #[serde(rename = "Response ID")]
    pub response_id: String,
    #[serde(rename = "Question ID")]
    pub question_id: u32,
    #[serde(rename = "Question Text")]
    pub question_text: String,
    #[serde(rename = "Answer Type")]
    pub answer_type: String,
    #[serde(rename = "Selected Option")]
    pub selected_option: String,
    /// JSON-encoded array for ranking payloads, empty otherwise.
    #[serde(rename = "Ranked Options")]
    pub ranked_options: String,
    /// JSON-encoded array for multi-select payloads, empty otherwise.
    #[serde(rename = "Multi Select Options")]
    pub multi_select_options: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
}

/// Complete export payload for one scored submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionExport {
    pub response: ResponseRecord,
    pub answers: Vec<AnswerRecord>,
}

impl SubmissionExport {
    /// Builds the export with a generated response id and today's date.
    pub fn new(result: &QuizResult, catalog: &QuestionCatalog) -> Self {
        let now = Utc::now();
        Self::with_response_id(
            result,
            catalog,
            format!("resp_{}", now.timestamp_millis()),
            now.date_naive(),
        )
    }

    /// Builds the export with caller-supplied identity, for deterministic
    /// pipelines and tests.
    pub fn with_response_id(
        result: &QuizResult,
        catalog: &QuestionCatalog,
        response_id: String,
        submitted_on: NaiveDate,
    ) -> Self {
        let response = ResponseRecord {
            response_id: response_id.clone(),
            submission_date: submitted_on.format("%Y-%m-%d").to_string(),
            primary_profile_type: result.primary_profile.profile.key().to_string(),
            primary_profile_name: result.primary_profile.name.clone(),
            match_percentage: result.primary_profile.match_percentage,
            readiness_score: result.readiness_score,
            readiness_level: result.readiness_level.label().to_string(),
            student_score: result.profile_scores.student,
            credit_score: result.profile_scores.credit,
            medical_score: result.profile_scores.medical,
            mortgage_score: result.profile_scores.mortgage,
            multi_score: result.profile_scores.multi,
            solidarity_score: result.profile_scores.solidarity,
            freeform_response: trimmed_or_empty(result.freeform_response.as_deref()),
            contact_info: trimmed_or_empty(result.contact_info.as_deref()),
        };

        let answers = result
            .answers
            .iter()
            .map(|answer| {
                let question = catalog.lookup(answer.question_id);
                AnswerRecord {
                    response_id: response_id.clone(),
                    question_id: answer.question_id.0,
                    question_text: question
                        .map(|question| question.prompt.clone())
                        .unwrap_or_default(),
                    answer_type: question
                        .map(|question| question.kind.label().to_string())
                        .unwrap_or_default(),
                    selected_option: match &answer.payload {
                        AnswerPayload::Choice(value) => value.clone(),
                        _ => String::new(),
                    },
                    ranked_options: match &answer.payload {
                        AnswerPayload::Ranking(values) => json_list(values),
                        _ => String::new(),
                    },
                    multi_select_options: match &answer.payload {
                        AnswerPayload::Choices(values) => json_list(values),
                        _ => String::new(),
                    },
                }
            })
            .collect();

        Self { response, answers }
    }

    /// Writes the response row as CSV (header plus one record).
    pub fn write_response_csv<W: Write>(&self, sink: W) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_writer(sink);
        writer.serialize(&self.response)?;
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Writes the per-answer rows as CSV (header plus one record each).
    pub fn write_answers_csv<W: Write>(&self, sink: W) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_writer(sink);
        for record in &self.answers {
            writer.serialize(record)?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

fn trimmed_or_empty(text: Option<&str>) -> String {
    text.map(str::trim).unwrap_or_default().to_string()
}

fn json_list(values: &[String]) -> String {
    // Serializing a list of strings cannot realistically fail.
    serde_json::to_string(values).unwrap_or_default()
}
