use crate::quiz::catalog::QuestionCatalog;
use crate::quiz::domain::{Profile, ProfileScores, Question, QuestionKind, QuizSubmission};

/// Keyword groups scanned over the freeform response. Each group fires
/// independently; a single response may trigger several.
const SOLIDARITY_CUES: [&str; 3] = ["helping others", "community", "solidarity"];
const URGENCY_CUES: [&str; 3] = ["escape debt", "bankruptcy", "desperate"];
const ALTERNATIVE_ECONOMY_CUES: [&str; 3] = ["skills", "barter", "time banking"];
const DEBT_FREEDOM_CUES: [&str; 3] = ["debt free", "paid off", "escaped debt"];

/// Aggregates every answer plus the freeform heuristics into the raw profile
/// vector and unclamped readiness accumulator.
///
/// Unknown question ids and option values contribute nothing; the pass is
/// total over any well-typed submission.
pub(crate) fn accumulate(
    catalog: &QuestionCatalog,
    submission: &QuizSubmission,
) -> (ProfileScores, i32) {
    let mut scores = ProfileScores::default();
    let mut readiness: i32 = 0;

    for answer in &submission.answers {
        let Some(question) = catalog.lookup(answer.question_id) else {
            continue;
        };

        // The catalog's declared kind drives dispatch, never the payload shape.
        match question.kind {
            QuestionKind::MultiSelect => {
                for value in answer.payload.values() {
                    apply_option(question, value, 1.0, true, &mut scores, &mut readiness);
                }
            }
            QuestionKind::Ranked => {
                for (rank, value) in answer.payload.values().iter().enumerate() {
                    // Readiness is asymmetric: only the top-ranked item
                    // contributes, and it does so unweighted.
                    apply_option(
                        question,
                        value,
                        rank_weight(rank),
                        rank == 0,
                        &mut scores,
                        &mut readiness,
                    );
                }
            }
            QuestionKind::SingleChoice | QuestionKind::Freeform => {
                if let Some(value) = answer.payload.primary() {
                    apply_option(question, value, 1.0, true, &mut scores, &mut readiness);
                }
            }
        }
    }

    if let Some(text) = submission.freeform_response.as_deref() {
        score_freeform(text, &mut scores, &mut readiness);
    }

    (scores, readiness)
}

/// Rank 0 scores at full weight; each later rank drops 0.2, down to a 0.3 floor.
pub(crate) fn rank_weight(rank: usize) -> f64 {
    (1.0 - rank as f64 * 0.2).max(0.3)
}

fn apply_option(
    question: &Question,
    value: &str,
    weight: f64,
    include_readiness: bool,
    scores: &mut ProfileScores,
    readiness: &mut i32,
) {
    let Some(option) = question.options.iter().find(|option| option.value == value) else {
        return;
    };

    for (&profile, &points) in &option.scoring.profiles {
        scores.add(profile, points * weight);
    }

    if include_readiness {
        if let Some(points) = option.scoring.readiness {
            *readiness += points;
        }
    }
}

/// Case-insensitive substring heuristics over a non-blank freeform response.
pub(crate) fn score_freeform(text: &str, scores: &mut ProfileScores, readiness: &mut i32) {
    if text.trim().is_empty() {
        return;
    }
    let normalized = text.to_lowercase();
    let mentions = |cues: &[&str]| cues.iter().any(|cue| normalized.contains(cue));

    if mentions(&SOLIDARITY_CUES) {
        *readiness += 10;
        scores.add(Profile::Solidarity, 1.0);
    }
    if mentions(&URGENCY_CUES) {
        *readiness += 15;
    }
    if mentions(&ALTERNATIVE_ECONOMY_CUES) {
        *readiness += 10;
    }
    if mentions(&DEBT_FREEDOM_CUES) {
        scores.add(Profile::Solidarity, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::domain::{
        AnswerOption, AnswerPayload, OptionScoring, QuestionId, QuizAnswer,
    };
    use std::collections::BTreeMap;

    fn option(value: &str, profiles: &[(Profile, f64)], readiness: Option<i32>) -> AnswerOption {
        AnswerOption {
            label: value.to_string(),
            value: value.to_string(),
            scoring: OptionScoring {
                profiles: profiles.iter().copied().collect::<BTreeMap<_, _>>(),
                readiness,
            },
        }
    }

    fn catalog_of(questions: Vec<Question>) -> QuestionCatalog {
        QuestionCatalog::new(questions).expect("unique ids")
    }

    fn submission(answers: Vec<QuizAnswer>) -> QuizSubmission {
        QuizSubmission {
            answers,
            freeform_response: None,
            contact_info: None,
        }
    }

    #[test]
    fn rank_weight_decays_to_floor() {
        assert_eq!(rank_weight(0), 1.0);
        assert!((rank_weight(1) - 0.8).abs() < 1e-9);
        assert!((rank_weight(3) - 0.4).abs() < 1e-9);
        assert_eq!(rank_weight(4), 0.3);
        assert_eq!(rank_weight(9), 0.3);
    }

    #[test]
    fn ranked_profiles_are_weighted_by_position() {
        let catalog = catalog_of(vec![Question {
            id: QuestionId(1),
            prompt: "rank".to_string(),
            kind: QuestionKind::Ranked,
            options: vec![
                option("A", &[(Profile::Student, 1.0)], None),
                option("B", &[(Profile::Credit, 1.0)], None),
            ],
        }]);
        let (scores, _) = accumulate(
            &catalog,
            &submission(vec![QuizAnswer {
                question_id: QuestionId(1),
                payload: AnswerPayload::Ranking(vec!["A".to_string(), "B".to_string()]),
            }]),
        );

        assert_eq!(scores.student, 1.0);
        assert!((scores.credit - 0.8).abs() < 1e-9);
    }

    #[test]
    fn ranked_readiness_counts_only_at_rank_zero() {
        let question = Question {
            id: QuestionId(1),
            prompt: "rank".to_string(),
            kind: QuestionKind::Ranked,
            options: vec![
                option("A", &[], None),
                option("B", &[], Some(20)),
            ],
        };
        let catalog = catalog_of(vec![question]);

        let (_, readiness) = accumulate(
            &catalog,
            &submission(vec![QuizAnswer {
                question_id: QuestionId(1),
                payload: AnswerPayload::Ranking(vec!["A".to_string(), "B".to_string()]),
            }]),
        );
        assert_eq!(readiness, 0);

        let (_, readiness) = accumulate(
            &catalog,
            &submission(vec![QuizAnswer {
                question_id: QuestionId(1),
                payload: AnswerPayload::Ranking(vec!["B".to_string(), "A".to_string()]),
            }]),
        );
        assert_eq!(readiness, 20);
    }

    #[test]
    fn multi_select_sums_every_selection_unweighted() {
        let catalog = catalog_of(vec![Question {
            id: QuestionId(2),
            prompt: "select".to_string(),
            kind: QuestionKind::MultiSelect,
            options: vec![
                option("A", &[(Profile::Credit, 1.0)], Some(5)),
                option("B", &[(Profile::Credit, 1.0)], Some(5)),
                option("C", &[(Profile::Medical, 1.0)], None),
            ],
        }]);
        let (scores, readiness) = accumulate(
            &catalog,
            &submission(vec![QuizAnswer {
                question_id: QuestionId(2),
                payload: AnswerPayload::Choices(vec![
                    "A".to_string(),
                    "B".to_string(),
                    "C".to_string(),
                ]),
            }]),
        );

        assert_eq!(scores.credit, 2.0);
        assert_eq!(scores.medical, 1.0);
        assert_eq!(readiness, 10);
    }

    #[test]
    fn catalog_kind_overrides_payload_shape() {
        // A ranking payload sent against a single-choice question scores as
        // one full-weight choice of its primary value.
        let catalog = catalog_of(vec![Question {
            id: QuestionId(3),
            prompt: "choose".to_string(),
            kind: QuestionKind::SingleChoice,
            options: vec![
                option("A", &[(Profile::Mortgage, 1.0)], Some(10)),
                option("B", &[(Profile::Student, 1.0)], Some(10)),
            ],
        }]);
        let (scores, readiness) = accumulate(
            &catalog,
            &submission(vec![QuizAnswer {
                question_id: QuestionId(3),
                payload: AnswerPayload::Ranking(vec!["A".to_string(), "B".to_string()]),
            }]),
        );

        assert_eq!(scores.mortgage, 1.0);
        assert_eq!(scores.student, 0.0);
        assert_eq!(readiness, 10);
    }

    #[test]
    fn unknown_references_contribute_nothing() {
        let catalog = catalog_of(vec![Question {
            id: QuestionId(1),
            prompt: "choose".to_string(),
            kind: QuestionKind::SingleChoice,
            options: vec![option("A", &[(Profile::Credit, 1.0)], Some(10))],
        }]);
        let (scores, readiness) = accumulate(
            &catalog,
            &submission(vec![
                QuizAnswer {
                    question_id: QuestionId(42),
                    payload: AnswerPayload::Choice("A".to_string()),
                },
                QuizAnswer {
                    question_id: QuestionId(1),
                    payload: AnswerPayload::Choice("Z".to_string()),
                },
            ]),
        );

        assert_eq!(scores, ProfileScores::default());
        assert_eq!(readiness, 0);
    }

    #[test]
    fn freeform_cues_fire_independently() {
        let mut scores = ProfileScores::default();
        let mut readiness = 0;
        score_freeform(
            "I want to escape debt and focus on community",
            &mut scores,
            &mut readiness,
        );

        assert_eq!(readiness, 25);
        assert_eq!(scores.solidarity, 1.0);
    }

    #[test]
    fn freeform_matching_is_case_insensitive() {
        let mut scores = ProfileScores::default();
        let mut readiness = 0;
        score_freeform("BARTER networks helped me", &mut scores, &mut readiness);

        // "skills"/"barter"/"time banking" group only.
        assert_eq!(readiness, 10);
        assert_eq!(scores.solidarity, 0.0);
    }

    #[test]
    fn blank_freeform_is_ignored() {
        let mut scores = ProfileScores::default();
        let mut readiness = 0;
        score_freeform("   \n", &mut scores, &mut readiness);

        assert_eq!(readiness, 0);
        assert_eq!(scores, ProfileScores::default());
    }

    #[test]
    fn debt_freedom_cues_raise_solidarity_without_readiness() {
        let mut scores = ProfileScores::default();
        let mut readiness = 0;
        score_freeform("finally paid off everything", &mut scores, &mut readiness);

        assert_eq!(readiness, 0);
        assert_eq!(scores.solidarity, 1.0);
    }
}
