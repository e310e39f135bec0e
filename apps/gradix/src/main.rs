//! # Gradix Binary
//!
//! Student outcome predictor: hard-coded credit rules first, pre-trained
//! model fallback second. The model bundle is loaded once at startup and a
//! load failure halts the process before any input is accepted.

use clap::{Parser, Subcommand};
use gradix::cli;
use gradix::gradix_core::{Gender, HighSchoolType, StudentRecord};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gradix", version, about = "Predict student academic outcomes")]
struct Cli {
    /// Directory holding the four JSON model artifacts.
    #[arg(long, default_value = "model", global = true)]
    model_dir: PathBuf,

    /// Load a packed single-file bundle instead of the artifact directory.
    #[arg(long, global = true)]
    packed: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Predict the outcome for one student given as flags.
    Predict {
        /// Student gender (male/female).
        #[arg(long, value_parser = cli::parse_gender)]
        gender: Gender,

        /// Age at enrollment.
        #[arg(long, value_parser = clap::value_parser!(u8).range(15..=100))]
        age: u8,

        /// High school type (sma/smk/ma/other).
        #[arg(long, value_parser = cli::parse_school)]
        school: HighSchoolType,

        /// Total credits taken.
        #[arg(long, value_parser = clap::value_parser!(u16).range(0..=200))]
        credits: u16,

        /// Average grade, 0.00 to 4.00.
        #[arg(long, value_parser = cli::parse_grade)]
        grade: f64,

        /// Student holds a scholarship.
        #[arg(long)]
        scholarship: bool,

        /// Emit the result as JSON instead of the colored line.
        #[arg(long)]
        json: bool,
    },

    /// Interactive form: prompt for the six fields on stdin.
    Form {
        /// Emit the result as JSON instead of the colored line.
        #[arg(long)]
        json: bool,
    },

    /// Pack the JSON artifacts into a single bundle file.
    Pack {
        /// Output path for the packed bundle.
        #[arg(long, default_value = "model.grdx")]
        output: PathBuf,
    },

    /// Print a summary of the loaded bundle.
    Inspect {
        /// Emit the summary as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn run(args: Cli) -> Result<(), cli::CliError> {
    let model_dir = args.model_dir.as_path();
    let packed = args.packed.as_deref();

    match args.command {
        Command::Predict {
            gender,
            age,
            school,
            credits,
            grade,
            scholarship,
            json,
        } => {
            let record = StudentRecord::new(gender, age, school, credits, grade, scholarship);
            cli::cmd_predict(model_dir, packed, &record, json)
        }
        Command::Form { json } => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            cli::cmd_form(model_dir, packed, &mut input, json)
        }
        Command::Pack { output } => cli::cmd_pack(model_dir, &output),
        Command::Inspect { json } => cli::cmd_inspect(model_dir, packed, json),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
