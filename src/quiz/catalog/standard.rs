//! The built-in question set, carried verbatim from the live quiz.

use std::collections::BTreeMap;

use crate::quiz::domain::{
    AnswerOption, OptionScoring, Profile, Question, QuestionId, QuestionKind,
};

use crate::quiz::domain::Profile::{Credit, Medical, Mortgage, Multi, Solidarity, Student};

pub(super) fn questions() -> Vec<Question> {
    vec![
        question(
            1,
            "Select and rank all types of debt you have, by total debt from highest to lowest:",
            QuestionKind::Ranked,
            vec![
                opt("Student loans", "A", profiles(&[(Student, 1.0)])),
                opt("Credit cards", "B", profiles(&[(Credit, 1.0)])),
                opt("Medical bills", "C", profiles(&[(Medical, 1.0)])),
                opt("Mortgage/Home-related", "D", profiles(&[(Mortgage, 1.0)])),
                opt("Car loan", "E", profiles(&[(Mortgage, 1.0)])),
                opt(
                    "Buy now, pay later (Klarna, Afterpay, etc.)",
                    "F",
                    profiles(&[(Credit, 1.0)]),
                ),
                opt("I have no debt", "G", profiles(&[(Solidarity, 1.0)])),
            ],
        ),
        question(
            2,
            "For each type of debt you have, what APR range does it fall into?",
            QuestionKind::MultiSelect,
            vec![
                opt("Credit Cards: 0-10%", "CC1", OptionScoring::default()),
                opt("Credit Cards: 10-15%", "CC2", OptionScoring::default()),
                opt("Credit Cards: 15-20%", "CC3", OptionScoring::default()),
                opt("Credit Cards: 20-25%", "CC4", OptionScoring::default()),
                opt("Credit Cards: 25%+", "CC5", profiles(&[(Credit, 1.0)])),
                opt("Mortgage: 1-3%", "M1", OptionScoring::default()),
                opt("Mortgage: 4-5%", "M2", OptionScoring::default()),
                opt("Mortgage: 6-8%", "M3", OptionScoring::default()),
                opt("Mortgage: 8%+", "M4", profiles(&[(Mortgage, 1.0)])),
                opt("Student Loans: 0-3%", "SL1", OptionScoring::default()),
                opt("Student Loans: 3-5%", "SL2", OptionScoring::default()),
                opt("Student Loans: 5-7%", "SL3", OptionScoring::default()),
                opt("Student Loans: 7%+", "SL4", profiles(&[(Student, 1.0)])),
                opt("Car Loan: 0-5%", "CL1", OptionScoring::default()),
                opt("Car Loan: 5-10%", "CL2", OptionScoring::default()),
                opt("Car Loan: 10%+", "CL3", OptionScoring::default()),
                opt(
                    "Not applicable - I have no debt",
                    "NA",
                    profiles(&[(Solidarity, 1.0)]),
                ),
            ],
        ),
        question(
            3,
            "What percentage of your monthly income goes to debt payments?",
            QuestionKind::SingleChoice,
            vec![
                opt("Less than 20%", "A", OptionScoring::default()),
                opt("20-40%", "B", OptionScoring::default()),
                opt("40-60%", "C", scoring(&[(Multi, 1.0)], 15)),
                opt("More than 60%", "D", scoring(&[(Multi, 1.0)], 15)),
                opt("0% - I have no debt", "E", scoring(&[(Solidarity, 2.0)], 5)),
            ],
        ),
        question(
            4,
            "Which describes your relationship with traditional debt solutions?",
            QuestionKind::SingleChoice,
            vec![
                opt(
                    "No need, I'm able to maintain my current obligations",
                    "A",
                    OptionScoring::default(),
                ),
                opt("Haven't tried many options yet", "B", OptionScoring::default()),
                opt(
                    "Currently using consolidation or payment plans",
                    "C",
                    OptionScoring::default(),
                ),
                opt(
                    "Used debt consolidation in the past but am now back in debt",
                    "D",
                    readiness(20),
                ),
                opt("Tried multiple solutions without success", "E", readiness(20)),
                opt("Given up on traditional solutions", "F", readiness(20)),
                opt(
                    "Not applicable - I avoid debt on principle",
                    "G",
                    scoring(&[(Solidarity, 2.0)], 10),
                ),
            ],
        ),
        question(
            5,
            "What's your timeline for getting out of debt?",
            QuestionKind::SingleChoice,
            vec![
                opt("Need immediate relief", "A", readiness(10)),
                opt("Within 1-2 years", "B", OptionScoring::default()),
                opt("3-5 year plan", "C", OptionScoring::default()),
                opt("Long-term transformation", "D", OptionScoring::default()),
                opt("Accepted it as permanent", "E", readiness(5)),
            ],
        ),
        question(
            6,
            "Are you supporting anyone else financially?",
            QuestionKind::SingleChoice,
            vec![
                opt("No, just myself", "A", OptionScoring::default()),
                opt("Partner/Spouse", "B", OptionScoring::default()),
                opt("Children", "C", scoring(&[(Multi, 1.0)], 5)),
                opt("Aging parents", "D", scoring(&[(Multi, 1.0)], 5)),
                opt(
                    "Friends and/or Community",
                    "E",
                    scoring(&[(Solidarity, 1.0)], 5),
                ),
                opt("Multiple generations", "F", scoring(&[(Multi, 2.0)], 10)),
            ],
        ),
        question(
            7,
            "Would you be interested in a cooperative/collaborative finance model that reduces your monthly payments and total cost of servicing your debt in a way that helps others do the same?",
            QuestionKind::SingleChoice,
            vec![
                opt("Yes, definitely", "A", readiness(20)),
                opt("Yes, but I'd need to know more", "B", readiness(10)),
                opt("Maybe, depends on the specifics", "C", readiness(5)),
                opt(
                    "No, I prefer traditional approaches",
                    "D",
                    OptionScoring::default(),
                ),
                opt(
                    "Not applicable - I have no debt",
                    "E",
                    profiles(&[(Solidarity, 2.0)]),
                ),
            ],
        ),
        question(
            8,
            "What's your view on the current financial system?",
            QuestionKind::SingleChoice,
            vec![
                opt(
                    "It works, I just need to use it better",
                    "A",
                    OptionScoring::default(),
                ),
                opt("Has flaws but can be navigated", "B", OptionScoring::default()),
                opt("Fundamentally broken", "C", readiness(15)),
                opt("Designed to exploit people", "D", readiness(15)),
            ],
        ),
        question(
            9,
            "How comfortable are you sharing your debt story?",
            QuestionKind::SingleChoice,
            vec![
                opt("Very private about finances", "A", OptionScoring::default()),
                opt("Share with close friends/family", "B", OptionScoring::default()),
                opt("Open in support groups/community", "C", readiness(10)),
                opt("Willing to advocate publicly", "D", readiness(10)),
            ],
        ),
        question(
            10,
            "Is there anything else about your financial situation or interest in collaborative economics that we haven't covered?",
            QuestionKind::Freeform,
            vec![opt("Optional text response", "freeform", OptionScoring::default())],
        ),
        question(
            11,
            "If you'd like us to follow up with you about this collaborative debt management platform, please share a way to contact you (email, social media handle, etc.). This is completely optional.",
            QuestionKind::Freeform,
            vec![opt(
                "Optional contact information",
                "freeform",
                OptionScoring::default(),
            )],
        ),
    ]
}

fn question(id: u32, prompt: &str, kind: QuestionKind, options: Vec<AnswerOption>) -> Question {
    Question {
        id: QuestionId(id),
        prompt: prompt.to_string(),
        kind,
        options,
    }
}

fn opt(label: &str, value: &str, scoring: OptionScoring) -> AnswerOption {
    AnswerOption {
        label: label.to_string(),
        value: value.to_string(),
        scoring,
    }
}

fn profiles(entries: &[(Profile, f64)]) -> OptionScoring {
    OptionScoring {
        profiles: entries.iter().copied().collect::<BTreeMap<_, _>>(),
        readiness: None,
    }
}

fn readiness(points: i32) -> OptionScoring {
    OptionScoring {
        profiles: BTreeMap::new(),
        readiness: Some(points),
    }
}

fn scoring(entries: &[(Profile, f64)], points: i32) -> OptionScoring {
    OptionScoring {
        readiness: Some(points),
        ..profiles(entries)
    }
}
