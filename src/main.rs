use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use loan_decision::application::engine::DecisionEngine;
use loan_decision::infrastructure::estonian::EstonianCodeValidator;
use loan_decision::interfaces::csv::decision_writer::DecisionWriter;
use loan_decision::interfaces::csv::request_reader::RequestReader;
use loan_decision::telemetry;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Decide the largest loan an applicant qualifies for",
    long_about = None
)]
struct Cli {
    /// Measure applicant ages against this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    as_of: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decide on a single application
    Decide(DecideArgs),
    /// Decide on every application in a CSV file
    Batch {
        /// Input CSV with personal_code, loan_amount, loan_period columns
        input: PathBuf,
    },
}

#[derive(Args)]
struct DecideArgs {
    /// Estonian personal identification code
    #[arg(long)]
    personal_code: String,
    /// Requested loan amount
    #[arg(long)]
    amount: u32,
    /// Requested loan period in months
    #[arg(long)]
    period: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(telemetry::DEFAULT_LOG_FILTER).into_diagnostic()?;

    let validator = match cli.as_of {
        Some(date) => EstonianCodeValidator::as_of(date),
        None => EstonianCodeValidator::new(),
    };
    let engine = DecisionEngine::with_validator(validator);

    let stdout = io::stdout();
    let mut writer = DecisionWriter::new(stdout.lock());

    match cli.command {
        Command::Decide(args) => {
            let decision =
                engine.calculate_approved_loan(&args.personal_code, args.amount, args.period);
            writer
                .write_decision(&args.personal_code, &decision)
                .into_diagnostic()?;
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = RequestReader::new(file);
            for request in reader.requests() {
                match request {
                    Ok(request) => {
                        let decision = engine.decide(&request);
                        writer
                            .write_decision(&request.personal_code, &decision)
                            .into_diagnostic()?;
                    }
                    Err(e) => warn!(error = %e, "skipping unreadable request"),
                }
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
