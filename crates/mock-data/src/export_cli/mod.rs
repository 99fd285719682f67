//! CLI support for exporting a generated dataset to JSON.
//!
//! This module provides the parsing and export helpers behind the
//! `mock_data_export` binary. The binary delegates here so the behaviour can
//! be exercised in tests without spawning a subprocess.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::assembler::{GeneratorConfig, generate_dataset_with};
use crate::atomic_io::write_atomic;
use crate::error::{ExportError, GenerationError};

/// Parsed options for the dataset export CLI.
#[derive(Debug, Clone)]
pub struct Options {
    out_path: Utf8PathBuf,
    seed: Option<u64>,
    author_count: Option<usize>,
    media_count: Option<usize>,
    module_count: Option<usize>,
    page_count: Option<usize>,
    tag_count: Option<usize>,
}

impl Options {
    /// Returns the output path supplied for the export.
    #[must_use]
    pub fn out_path(&self) -> &Utf8Path {
        &self.out_path
    }

    fn config(&self) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            author_count: self.author_count.unwrap_or(defaults.author_count),
            media_count: self.media_count.unwrap_or(defaults.media_count),
            module_count: self.module_count.unwrap_or(defaults.module_count),
            page_count: self.page_count.unwrap_or(defaults.page_count),
            tag_count: self.tag_count.unwrap_or(defaults.tag_count),
        }
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Result of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Seed used for the generation run.
    pub seed: u64,
    /// Total number of entities written.
    pub entity_total: usize,
}

/// Parses CLI arguments into an export plan.
///
/// # Errors
///
/// Returns [`CliError`] when required flags are missing or values cannot be
/// parsed.
///
/// # Example
///
/// ```
/// use mock_data::export_cli::{ParseOutcome, parse_args};
///
/// let args = vec!["--out".to_string(), "dataset.json".to_string()];
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut out_path: Option<Utf8PathBuf> = None;
    let mut seed: Option<u64> = None;
    let mut author_count: Option<usize> = None;
    let mut media_count: Option<usize> = None;
    let mut module_count: Option<usize> = None;
    let mut page_count: Option<usize> = None;
    let mut tag_count: Option<usize> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--out" => {
                let value = next_value(&mut args, "--out")?;
                out_path = Some(Utf8PathBuf::from(value));
            }
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                seed = Some(parse_number(&value, "--seed")?);
            }
            "--authors" => {
                let value = next_value(&mut args, "--authors")?;
                author_count = Some(parse_number(&value, "--authors")?);
            }
            "--medias" => {
                let value = next_value(&mut args, "--medias")?;
                media_count = Some(parse_number(&value, "--medias")?);
            }
            "--modules" => {
                let value = next_value(&mut args, "--modules")?;
                module_count = Some(parse_number(&value, "--modules")?);
            }
            "--pages" => {
                let value = next_value(&mut args, "--pages")?;
                page_count = Some(parse_number(&value, "--pages")?);
            }
            "--tags" => {
                let value = next_value(&mut args, "--tags")?;
                tag_count = Some(parse_number(&value, "--tags")?);
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    let resolved_out_path = out_path.ok_or(CliError::MissingOutPath)?;
    Ok(ParseOutcome::Options(Options {
        out_path: resolved_out_path,
        seed,
        author_count,
        media_count,
        module_count,
        page_count,
        tag_count,
    }))
}

/// Generates the dataset and writes it to the output path as pretty JSON.
///
/// The file is written atomically; an interrupted export never leaves a
/// partial dataset behind.
///
/// # Errors
///
/// Returns [`CliError`] when generation fails or the file cannot be written.
pub fn apply_export(options: &Options) -> Result<Export, CliError> {
    let seed = options.seed.unwrap_or_else(random_seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dataset = generate_dataset_with(&options.config(), &mut rng)?;

    let json = serde_json::to_string_pretty(&dataset).map_err(|err| ExportError::Serialize {
        message: err.to_string(),
    })?;
    write_dataset_file(&options.out_path, &json)?;

    Ok(Export {
        seed,
        entity_total: dataset.entity_total(),
    })
}

/// Formats the success message emitted by the CLI.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use mock_data::export_cli::{Export, success_message};
///
/// let export = Export { seed: 42, entity_total: 175 };
/// let message = success_message(&export, Utf8Path::new("dataset.json"));
///
/// assert!(message.contains("seed=42"));
/// assert!(message.contains("dataset.json"));
/// ```
#[must_use]
pub fn success_message(export: &Export, out_path: &Utf8Path) -> String {
    format!(
        "Wrote {} entities (seed={}) to {}",
        export.entity_total, export.seed, out_path
    )
}

fn write_dataset_file(out_path: &Utf8Path, contents: &str) -> Result<(), ExportError> {
    let parent = match out_path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let file_name = out_path
        .file_name()
        .ok_or_else(|| ExportError::WriteError {
            path: out_path.to_path_buf(),
            message: "output path must name a file".to_owned(),
        })?;
    let dir =
        Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
            ExportError::WriteError {
                path: out_path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
    write_atomic(&dir, Utf8Path::new(file_name), contents)
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

fn random_seed() -> u64 {
    rand::rng().random()
}

/// Errors surfaced by the CLI parsing and export flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Output path was not supplied.
    #[error("missing required flag: --out")]
    MissingOutPath,
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// Dataset generation failed.
    #[error("generation error: {source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: GenerationError,
    },
    /// The dataset could not be serialised or written.
    #[error("export error: {source}")]
    Export {
        /// Underlying export error.
        #[from]
        #[source]
        source: ExportError,
    },
}
