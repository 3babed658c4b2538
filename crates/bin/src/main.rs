//! Jobrisk CLI binary.
//!
//! Plays the form-layer role around the scoring core: reads a submission
//! from a JSON file, rejects incomplete submissions with every missing field
//! named, scores it against a model artifact loaded at startup, and renders
//! the explained result.

use clap::{Parser, Subcommand, ValueEnum};
use jobrisk::{assess, validate};
use jobrisk_explain::{AttributionReport, ExportFormat, export_report};
use jobrisk_model::ModelArtifact;
use jobrisk_survey::{
    AreaType, EducationLevel, Field, Gender, HealthLimitation, Industry, MaritalStatus,
    Occupation, OrganizationType, RawProfile, UnionMembership, YesNo, regions,
    validate::{AGE_RANGE, HOUSEHOLD_RANGE},
};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "jobrisk")]
#[command(about = "Jobrisk: unemployment risk scoring with per-factor explanations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a submission and explain the result
    Score {
        /// Path to the model artifact bundle
        #[arg(long)]
        model: PathBuf,

        /// Path to the submission JSON (field identifiers to answers)
        #[arg(long)]
        profile: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "ascii")]
        format: Format,

        /// Also write the factor breakdown to this file (.csv or .json)
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Show metadata of a model artifact
    Inspect {
        /// Path to the model artifact bundle
        #[arg(long)]
        model: PathBuf,
    },

    /// List the questionnaire fields and their accepted answers
    Fields,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// ASCII table with a horizontal bar chart
    Ascii,
    /// Markdown table
    Markdown,
    /// JSON report
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Score {
            model,
            profile,
            format,
            export,
        } => run_score(&model, &profile, format, export.as_deref()),
        Commands::Inspect { model } => run_inspect(&model),
        Commands::Fields => {
            run_fields();
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run_score(
    model: &Path,
    profile: &Path,
    format: Format,
    export: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    // A missing or corrupt artifact is fatal before any submission is read.
    let artifact = ModelArtifact::load(model)?;

    let raw = fs::read_to_string(profile)?;
    let submission: RawProfile = serde_json::from_str(&raw)?;
    validate(&submission)?;

    let report = assess(&artifact, &submission)?;
    render(&report, format)?;

    if let Some(path) = export {
        let format = if path.extension().is_some_and(|e| e == "json") {
            ExportFormat::PrettyJson
        } else {
            ExportFormat::Csv
        };
        export_report(&report, format, path)?;
        eprintln!("wrote factor breakdown to {}", path.display());
    }

    Ok(())
}

fn render(report: &AttributionReport, format: Format) -> Result<(), Box<dyn Error>> {
    match format {
        Format::Ascii => print!("{}", report.to_ascii_table()),
        Format::Markdown => print!("{}", report.to_markdown()),
        Format::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

fn run_inspect(model: &Path) -> Result<(), Box<dyn Error>> {
    let artifact = ModelArtifact::load(model)?;

    println!("Model id:       {}", artifact.model_id);
    println!("Trained at:     {}", artifact.trained_at);
    println!("Format version: {}", artifact.format_version);
    println!("Features:       {}", artifact.forest.n_features);
    println!("Trees:          {}", artifact.forest.trees.len());
    println!("Base margin:    {:+.4}", artifact.forest.base_margin);

    println!("\nSource fields:");
    for field in artifact.transformer.source_fields() {
        let label = Field::from_id(field).map_or("(unknown)", |f| f.label());
        println!("  {field:<10} {label}");
    }

    Ok(())
}

fn print_options(field: Field, labels: &[&str]) {
    println!("{:<10} {}", field.id(), field.label());
    for label in labels {
        println!("    {label}");
    }
}

fn run_fields() {
    for field in Field::all() {
        match field {
            Field::Gender => {
                let labels: Vec<&str> = Gender::all().iter().map(|c| c.label()).collect();
                print_options(field, &labels);
            }
            Field::Age => {
                println!("{:<10} {}", field.id(), field.label());
                println!(
                    "    integer between {} and {}",
                    AGE_RANGE.start(),
                    AGE_RANGE.end()
                );
            }
            Field::MaritalStatus => {
                let labels: Vec<&str> = MaritalStatus::all().iter().map(|c| c.label()).collect();
                print_options(field, &labels);
            }
            Field::HouseholdSize => {
                println!("{:<10} {}", field.id(), field.label());
                println!(
                    "    integer between {} and {}",
                    HOUSEHOLD_RANGE.start(),
                    HOUSEHOLD_RANGE.end()
                );
            }
            Field::Country => {
                print_options(field, regions::countries());
            }
            Field::Region => {
                println!("{:<10} {}", field.id(), field.label());
                println!("    region list depends on the chosen country");
            }
            Field::BornInCountry
            | Field::FatherBornInCountry
            | Field::MotherBornInCountry
            | Field::DiscriminatedGroup => {
                let labels: Vec<&str> = YesNo::all().iter().map(|c| c.label()).collect();
                print_options(field, &labels);
            }
            Field::AreaType => {
                let labels: Vec<&str> = AreaType::all().iter().map(|c| c.label()).collect();
                print_options(field, &labels);
            }
            Field::Education | Field::FatherEducation | Field::MotherEducation => {
                let labels: Vec<&str> = EducationLevel::all().iter().map(|c| c.label()).collect();
                print_options(field, &labels);
            }
            Field::Occupation => {
                let labels: Vec<&str> = Occupation::all().iter().map(|c| c.label()).collect();
                print_options(field, &labels);
            }
            Field::Industry => {
                let labels: Vec<&str> = Industry::all().iter().map(|c| c.label()).collect();
                print_options(field, &labels);
            }
            Field::OrganizationType => {
                let labels: Vec<&str> =
                    OrganizationType::all().iter().map(|c| c.label()).collect();
                print_options(field, &labels);
            }
            Field::UnionMembership => {
                let labels: Vec<&str> =
                    UnionMembership::all().iter().map(|c| c.label()).collect();
                print_options(field, &labels);
            }
            Field::HealthLimitation => {
                let labels: Vec<&str> =
                    HealthLimitation::all().iter().map(|c| c.label()).collect();
                print_options(field, &labels);
            }
        }
        println!();
    }
}
