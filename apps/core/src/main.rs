//! `survey`: command-line front end for the medicine price survey.
//!
//! Submits responses and renders the results dashboard, report and CSV export.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use survey_core::analysis::{write_csv, EXPORT_FILE_NAME};
use survey_core::config::SurveyConfig;
use survey_core::models::{Language, SurveySubmission};
use survey_core::phrases::{question_sheet, Phrase};
use survey_core::{store, telemetry, AppError, SurveyService};

/// Medicine price survey.
#[derive(Parser, Debug)]
#[command(name = "survey", about = "Collect and analyse survey responses")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit one survey response.
    Submit {
        /// Age group: 20-35, 35-50 or 50+.
        #[arg(long, default_value = "")]
        age: String,
        /// Gender: male or female.
        #[arg(long, default_value = "")]
        gender: String,
        /// Location: urban or rural.
        #[arg(long, default_value = "")]
        location: String,
        /// Monthly income: <20k, 20-50k, 50-100k or >100k.
        #[arg(long, default_value = "")]
        income: String,
        /// Free-text answer to the survey question.
        #[arg(long, default_value = "")]
        text: String,
        /// Form language: en or ur.
        #[arg(long, default_value = "en")]
        language: Language,
    },

    /// List stored responses, newest first.
    List {
        /// Print records as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the full dashboard (summary, segments, charts, report) as JSON.
    Dashboard,

    /// Print the text analysis report.
    Report,

    /// Export segment tallies as CSV.
    Export {
        /// Output file, or `-` for stdout.
        #[arg(long, short = 'o', default_value = EXPORT_FILE_NAME)]
        output: String,
    },

    /// Print the survey title, question and submit usage.
    Question {
        #[arg(long, default_value = "en")]
        language: Language,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match SurveyConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = telemetry::init_tracing("survey", config.log_format) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cli, config).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn open_service(config: &SurveyConfig) -> anyhow::Result<SurveyService> {
    let store = store::open_store(config)
        .await
        .context("Failed to open the response store")?;
    info!("Using {} response store", store.backend());
    Ok(SurveyService::new(store, config.store_timeout))
}

async fn run(cli: Cli, config: SurveyConfig) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Question { language } => {
            println!("{}", question_sheet(language));
        }
        Commands::Submit {
            age,
            gender,
            location,
            income,
            text,
            language,
        } => {
            let service = open_service(&config).await?;
            let form = SurveySubmission {
                age,
                gender,
                location,
                income,
                response: text,
                language,
            };
            return Ok(submit(&service, &form).await);
        }
        Commands::List { json } => {
            let records = open_service(&config).await?.responses().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for record in &records {
                    println!(
                        "{}  {:<8} {:<6} {:<6} {:<7} {:<8} {}",
                        record.created_at.format("%Y-%m-%d %H:%M:%S"),
                        record.sentiment,
                        record.age_group,
                        record.gender,
                        record.location,
                        record.income_band,
                        record.original_text
                    );
                }
                println!("Total Responses: {}", records.len());
            }
        }
        Commands::Dashboard => {
            let dashboard = open_service(&config).await?.dashboard().await?;
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
        }
        Commands::Report => {
            let dashboard = open_service(&config).await?.dashboard().await?;
            println!("{}", dashboard.report);
        }
        Commands::Export { output } => {
            let segments = open_service(&config).await?.segments().await?;
            if output == "-" {
                write_csv(&segments, io::stdout().lock())?;
            } else {
                let path = PathBuf::from(&output);
                let file = File::create(&path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                write_csv(&segments, file)?;
                info!("Exported {} segments to {}", segments.len(), path.display());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Submits the form and prints the outcome in the form's language.
async fn submit(service: &SurveyService, form: &SurveySubmission) -> ExitCode {
    let language = form.language;

    match service.submit(form).await {
        Ok(record) => {
            println!("{}", Phrase::ThankYou.text(language));
            info!("Response {} classified as {}", record.id, record.sentiment);
            ExitCode::SUCCESS
        }
        Err(AppError::Validation(message)) => {
            eprintln!("{}", message);
            ExitCode::from(2)
        }
        Err(e) => {
            error!("Submission failed: {}", e);
            eprintln!("{}", Phrase::SubmitFailed.text(language));
            ExitCode::FAILURE
        }
    }
}
