//! Error types for the mock-data crate.
//!
//! Generation has no external inputs beyond counts and the injected RNG, so
//! the taxonomy is small: misconfigured random ranges, strict selections that
//! exceed their pool, and positional misalignment between modules and their
//! chapter groups. Empty pools are never errors; they degrade to empty
//! attachments.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while generating the dataset.
///
/// Each variant is a configuration or construction bug surfaced fast rather
/// than silently repaired: bounds are never swapped and collections are never
/// truncated to fit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A random range was requested with inverted bounds.
    #[error("invalid random range: min {min} exceeds max {max}")]
    InvalidRange {
        /// Lower bound supplied by the caller.
        min: usize,
        /// Upper bound supplied by the caller.
        max: usize,
    },

    /// A strict selection requested more entries than the pool holds.
    #[error("selection of {requested} entries exceeds pool of {available}")]
    SelectionOverflow {
        /// Number of entries requested.
        requested: usize,
        /// Number of entries available in the pool.
        available: usize,
    },

    /// The module collection and chapter groups are not positionally aligned.
    ///
    /// Silently zipping mismatched lengths would attribute chapters to the
    /// wrong modules without any visible failure, so this is rejected.
    #[error("chapter groups misaligned: {modules} modules but {groups} groups")]
    ChapterAlignment {
        /// Number of modules in the collection.
        modules: usize,
        /// Number of chapter groups generated.
        groups: usize,
    },
}

/// Errors that can occur while exporting a dataset to disk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The dataset could not be serialised to JSON.
    #[error("failed to serialise dataset: {message}")]
    Serialize {
        /// Description of the serialisation failure.
        message: String,
    },

    /// The output file could not be written.
    #[error("failed to write dataset to '{path}': {message}")]
    WriteError {
        /// Path to the output file.
        path: Utf8PathBuf,
        /// Description of the I/O failure.
        message: String,
    },
}
