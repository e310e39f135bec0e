//! # CLI Commands
//!
//! File I/O and presentation for the Gradix binary.
//!
//! The model bundle is loaded exactly once, before any input is accepted;
//! a missing or corrupt artifact is fatal and nothing is retried. All
//! prediction logic lives in `gradix-core`; this module renders the result
//! (color class and emoji are derived purely from the outcome label).

use gradix_core::formats::{
    assemble_bundle, decode_packed, encode_packed, ClassifierArtifact, ScalerArtifact,
};
use gradix_core::record::{AGE_RANGE, CREDITS_RANGE, GRADE_RANGE};
use gradix_core::{
    decision, BundleError, Gender, HighSchoolType, ModelBundle, Outcome, StudentRecord,
};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

// =============================================================================
// ARTIFACT LAYOUT
// =============================================================================

/// The four artifact files expected inside the model directory.
pub const CLASSIFIER_FILE: &str = "classifier.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const FEATURE_ORDER_FILE: &str = "feature_order.json";
pub const LABEL_ENCODER_FILE: &str = "label_encoder.json";

// =============================================================================
// ERRORS
// =============================================================================

/// App-layer failure. Any variant hit while loading the bundle is fatal to
/// the process before input is accepted.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("model bundle rejected: {0}")]
    Bundle(#[from] BundleError),

    #[error("invalid input: {0}")]
    Input(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// =============================================================================
// BUNDLE LOADING
// =============================================================================

fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let bytes = read_file(path)?;
    serde_json::from_slice(&bytes).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate the bundle from a model directory holding the four
/// JSON artifacts.
pub fn load_bundle(model_dir: &Path) -> Result<ModelBundle, CliError> {
    let classifier: ClassifierArtifact = read_json(&model_dir.join(CLASSIFIER_FILE))?;
    let scaler: ScalerArtifact = read_json(&model_dir.join(SCALER_FILE))?;
    let feature_order: Vec<String> = read_json(&model_dir.join(FEATURE_ORDER_FILE))?;
    let labels: Vec<String> = read_json(&model_dir.join(LABEL_ENCODER_FILE))?;

    let bundle = assemble_bundle(classifier, scaler, &feature_order, &labels)?;
    info!(
        classes = bundle.labels().class_count(),
        features = bundle.feature_order().len(),
        "model bundle loaded"
    );
    Ok(bundle)
}

/// Load and validate a packed single-file bundle.
pub fn load_packed(path: &Path) -> Result<ModelBundle, CliError> {
    let bytes = read_file(path)?;
    let bundle = decode_packed(&bytes)?;
    info!(
        classes = bundle.labels().class_count(),
        path = %path.display(),
        "packed model bundle loaded"
    );
    Ok(bundle)
}

/// Resolve the bundle source: a packed file when given, the artifact
/// directory otherwise.
pub fn load_from(model_dir: &Path, packed: Option<&Path>) -> Result<ModelBundle, CliError> {
    match packed {
        Some(path) => load_packed(path),
        None => load_bundle(model_dir),
    }
}

// =============================================================================
// INPUT PARSING (shared by clap value parsers and the form)
// =============================================================================

/// Parse a gender token (`male`/`female`, case-insensitive).
pub fn parse_gender(raw: &str) -> Result<Gender, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "male" | "m" => Ok(Gender::Male),
        "female" | "f" => Ok(Gender::Female),
        other => Err(format!("expected male or female, got {other:?}")),
    }
}

/// Parse a high school type token (`sma`/`smk`/`ma`/`other`).
pub fn parse_school(raw: &str) -> Result<HighSchoolType, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "sma" => Ok(HighSchoolType::Sma),
        "smk" => Ok(HighSchoolType::Smk),
        "ma" => Ok(HighSchoolType::Ma),
        "other" => Ok(HighSchoolType::Other),
        other => Err(format!("expected sma, smk, ma or other, got {other:?}")),
    }
}

/// Parse an average grade, enforcing the widget bounds [0.00, 4.00].
pub fn parse_grade(raw: &str) -> Result<f64, String> {
    let grade: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("not a number: {raw:?}"))?;
    if !(GRADE_RANGE.0..=GRADE_RANGE.1).contains(&grade) {
        return Err(format!("grade {grade} is outside 0.00..=4.00"));
    }
    Ok(grade)
}

/// Parse a yes/no token.
pub fn parse_yes_no(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        other => Err(format!("expected yes or no, got {other:?}")),
    }
}

fn parse_bounded_int<T>(raw: &str, low: T, high: T, what: &str) -> Result<T, String>
where
    T: std::str::FromStr + PartialOrd + std::fmt::Display + Copy,
{
    let value: T = raw
        .trim()
        .parse()
        .map_err(|_| format!("not a number: {raw:?}"))?;
    if value < low || value > high {
        return Err(format!("{what} {value} is outside {low}..={high}"));
    }
    Ok(value)
}

// =============================================================================
// INTERACTIVE FORM
// =============================================================================

fn prompt_field<T>(
    input: &mut dyn BufRead,
    label: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, CliError> {
    print!("{label}: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::Input(format!("unexpected end of input at {label:?}")));
    }
    parse(&line).map_err(CliError::Input)
}

/// Read the six record fields from an interactive form.
///
/// Field bounds mirror the original input widgets; a value outside its
/// domain aborts the form with an input error.
pub fn read_form_record(input: &mut dyn BufRead) -> Result<StudentRecord, CliError> {
    let gender = prompt_field(input, "Gender [male/female]", parse_gender)?;
    let age = prompt_field(input, "Age at enrollment [15-100]", |raw| {
        parse_bounded_int(raw, AGE_RANGE.0, AGE_RANGE.1, "age")
    })?;
    let school = prompt_field(input, "High school type [sma/smk/ma/other]", parse_school)?;
    let credits = prompt_field(input, "Total credits taken [0-200]", |raw| {
        parse_bounded_int(raw, CREDITS_RANGE.0, CREDITS_RANGE.1, "credits")
    })?;
    let grade = prompt_field(input, "Average grade [0.00-4.00]", parse_grade)?;
    let scholarship = prompt_field(input, "Scholarship holder [yes/no]", parse_yes_no)?;

    Ok(StudentRecord::new(
        gender,
        age,
        school,
        credits,
        grade,
        scholarship,
    ))
}

// =============================================================================
// RESULT RENDERING
// =============================================================================

/// ANSI color code for an outcome (derived purely from the label).
#[must_use]
pub fn outcome_color(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Graduated => "\x1b[32m", // green
        Outcome::Active => "\x1b[34m",    // blue
        Outcome::DroppedOut => "\x1b[31m", // red
    }
}

/// Emoji for an outcome (derived purely from the label).
#[must_use]
pub fn outcome_emoji(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Graduated => "🎉",
        Outcome::Active => "📘",
        Outcome::DroppedOut => "⚠️",
    }
}

/// The color-coded result line.
#[must_use]
pub fn render_result(outcome: Outcome) -> String {
    format!(
        "{}{} Predicted status: {}\x1b[0m",
        outcome_color(outcome),
        outcome_emoji(outcome),
        outcome.label().to_uppercase()
    )
}

fn print_outcome(record: &StudentRecord, outcome: Outcome, json: bool) {
    if json {
        let payload = serde_json::json!({
            "record": record,
            "outcome": outcome,
            "label": outcome.label(),
        });
        println!("{payload}");
    } else {
        println!("{}", render_result(outcome));
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Predict the outcome for a record supplied via flags.
pub fn cmd_predict(
    model_dir: &Path,
    packed: Option<&Path>,
    record: &StudentRecord,
    json: bool,
) -> Result<(), CliError> {
    let bundle = load_from(model_dir, packed)?;

    let outcome = decision::predict(record, &bundle);
    debug!(
        credits = record.total_credits,
        rule_hit = decision::rule_outcome(record).is_some(),
        %outcome,
        "prediction"
    );

    print_outcome(record, outcome, json);
    Ok(())
}

/// Interactive form: prompt for the six fields, then predict.
pub fn cmd_form(
    model_dir: &Path,
    packed: Option<&Path>,
    input: &mut dyn BufRead,
    json: bool,
) -> Result<(), CliError> {
    // Fail fast on the bundle before asking for any input.
    let bundle = load_from(model_dir, packed)?;

    let record = read_form_record(input)?;
    let outcome = decision::predict(&record, &bundle);

    print_outcome(&record, outcome, json);
    Ok(())
}

/// Pack the four JSON artifacts into a single distributable bundle file.
pub fn cmd_pack(model_dir: &Path, output: &Path) -> Result<(), CliError> {
    let bundle = load_bundle(model_dir)?;
    let bytes = encode_packed(&bundle)?;

    std::fs::write(output, &bytes).map_err(|source| CliError::WriteFile {
        path: output.to_path_buf(),
        source,
    })?;

    info!(path = %output.display(), size = bytes.len(), "packed bundle written");
    println!("packed bundle written to {}", output.display());
    Ok(())
}

/// Print a bundle summary.
pub fn cmd_inspect(model_dir: &Path, packed: Option<&Path>, json: bool) -> Result<(), CliError> {
    let bundle = load_from(model_dir, packed)?;

    let order: Vec<&str> = bundle
        .feature_order()
        .iter()
        .map(|name| name.column())
        .collect();
    let classes: Vec<&str> = bundle
        .labels()
        .classes()
        .iter()
        .map(|outcome| outcome.label())
        .collect();

    if json {
        let payload = serde_json::json!({
            "feature_order": order,
            "classes": classes,
            "class_count": bundle.classifier().class_count(),
        });
        println!("{payload}");
    } else {
        println!("feature order: {}", order.join(", "));
        println!("classes:       {}", classes.join(", "));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_tokens() {
        assert_eq!(parse_gender("Female"), Ok(Gender::Female));
        assert_eq!(parse_gender("m"), Ok(Gender::Male));
        assert!(parse_gender("robot").is_err());
    }

    #[test]
    fn school_tokens() {
        assert_eq!(parse_school("SMA"), Ok(HighSchoolType::Sma));
        assert_eq!(parse_school("other"), Ok(HighSchoolType::Other));
        assert!(parse_school("college").is_err());
    }

    #[test]
    fn grade_bounds() {
        assert_eq!(parse_grade("3.25"), Ok(3.25));
        assert!(parse_grade("4.01").is_err());
        assert!(parse_grade("-0.5").is_err());
        assert!(parse_grade("high").is_err());
    }

    #[test]
    fn yes_no_tokens() {
        assert_eq!(parse_yes_no("yes"), Ok(true));
        assert_eq!(parse_yes_no("N"), Ok(false));
        assert!(parse_yes_no("maybe").is_err());
    }

    #[test]
    fn render_is_color_coded() {
        let graduated = render_result(Outcome::Graduated);
        assert!(graduated.contains("\x1b[32m"));
        assert!(graduated.contains("GRADUATED"));

        let dropped = render_result(Outcome::DroppedOut);
        assert!(dropped.contains("\x1b[31m"));
        assert!(dropped.contains("DROPPED OUT"));

        let active = render_result(Outcome::Active);
        assert!(active.contains("\x1b[34m"));
        assert!(active.contains("ACTIVE"));
    }

    #[test]
    fn form_reads_six_fields() {
        let mut input = std::io::Cursor::new("female\n19\nsmk\n80\n3.25\nyes\n");
        let record = read_form_record(&mut input).expect("form parses");

        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.age_at_enrollment, 19);
        assert_eq!(record.high_school_type, HighSchoolType::Smk);
        assert_eq!(record.total_credits, 80);
        assert_eq!(record.average_grade, 3.25);
        assert!(record.has_scholarship);
    }

    #[test]
    fn form_rejects_out_of_range_age() {
        let mut input = std::io::Cursor::new("male\n12\nsma\n80\n3.0\nno\n");
        let result = read_form_record(&mut input);
        assert!(matches!(result, Err(CliError::Input(_))));
    }

    #[test]
    fn form_rejects_truncated_input() {
        let mut input = std::io::Cursor::new("male\n20\n");
        let result = read_form_record(&mut input);
        assert!(matches!(result, Err(CliError::Input(_))));
    }
}
