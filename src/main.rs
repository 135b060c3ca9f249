use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use debt_quiz::config::AppConfig;
use debt_quiz::error::AppError;
use debt_quiz::quiz::{
    Profile, QuestionCatalog, QuizResult, QuizSubmission, ScoringEngine, SubmissionExport,
};
use debt_quiz::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Debt Quiz Scorer",
    about = "Score completed debt quiz submissions from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a completed submission and print the result
    Score(ScoreArgs),
    /// Print the active question catalog
    Catalog(CatalogArgs),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Path to a submission JSON document, or "-" to read stdin
    #[arg(long)]
    submission: PathBuf,
    /// Emit the full result as JSON instead of the summary view
    #[arg(long)]
    json: bool,
    /// Write the flattened response row as CSV to this path
    #[arg(long)]
    responses_csv: Option<PathBuf>,
    /// Write the per-answer rows as CSV to this path
    #[arg(long)]
    answers_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
struct CatalogArgs {
    /// Emit the catalog as JSON instead of the summary view
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let catalog = config.catalog.load()?;
    info!(questions = catalog.len(), "question catalog loaded");

    match cli.command {
        Command::Score(args) => run_score(args, catalog),
        Command::Catalog(args) => run_catalog(args, &catalog),
    }
}

fn run_score(args: ScoreArgs, catalog: QuestionCatalog) -> Result<(), AppError> {
    let submission = read_submission(&args.submission)?;
    let engine = ScoringEngine::new(catalog);
    let result = engine.evaluate(&submission);

    info!(
        profile = result.primary_profile.profile.key(),
        readiness = result.readiness_score,
        answers = submission.answers.len(),
        "submission scored"
    );

    if args.responses_csv.is_some() || args.answers_csv.is_some() {
        let export = SubmissionExport::new(&result, engine.catalog());
        if let Some(path) = &args.responses_csv {
            export.write_response_csv(File::create(path)?)?;
            info!(path = %path.display(), "response row written");
        }
        if let Some(path) = &args.answers_csv {
            export.write_answers_csv(File::create(path)?)?;
            info!(path = %path.display(), "answer rows written");
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_result(&result);
    }

    Ok(())
}

fn run_catalog(args: CatalogArgs, catalog: &QuestionCatalog) -> Result<(), AppError> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
        return Ok(());
    }

    println!("Question catalog ({} questions)", catalog.len());
    for question in catalog.iter() {
        println!(
            "\n{}. [{}] {}",
            question.id,
            question.kind.label(),
            question.prompt
        );
        for option in &question.options {
            println!("   {} - {}", option.value, option.label);
        }
    }

    Ok(())
}

fn read_submission(path: &Path) -> Result<QuizSubmission, AppError> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        return Ok(serde_json::from_str(&raw)?);
    }

    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn render_result(result: &QuizResult) {
    println!("Debt quiz result");
    println!(
        "Primary profile: {} ({}), {}% match",
        result.primary_profile.name,
        result.primary_profile.profile.key(),
        result.primary_profile.match_percentage
    );
    println!(
        "Readiness: {}/100 ({})",
        result.readiness_score,
        result.readiness_level.label()
    );

    println!("\nProfile scores");
    for profile in Profile::ALL {
        println!(
            "- {}: {:.1}",
            profile.key(),
            result.profile_scores.get(profile)
        );
    }

    println!("\nRecommendations");
    for recommendation in &result.recommendations {
        println!("- {recommendation}");
    }
}

#[cfg(test)]
mod tests {
    use debt_quiz::quiz::{AnswerPayload, QuestionId, QuizSubmission};

    #[test]
    fn submission_document_round_trips_all_payload_shapes() {
        let raw = r#"{
            "answers": [
                {"question_id": 1, "payload": {"ranking": ["B", "A"]}},
                {"question_id": 2, "payload": {"choices": ["CC5", "M4"]}},
                {"question_id": 3, "payload": {"choice": "D"}}
            ],
            "freeform_response": "community focused"
        }"#;

        let submission: QuizSubmission = serde_json::from_str(raw).expect("parses");
        assert_eq!(submission.answers.len(), 3);
        assert_eq!(submission.answers[0].question_id, QuestionId(1));
        assert!(matches!(
            submission.answers[2].payload,
            AnswerPayload::Choice(ref value) if value == "D"
        ));
        assert_eq!(submission.contact_info, None);
    }
}
