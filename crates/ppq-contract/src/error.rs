//! # Error Taxonomy
//!
//! Every contract violation is a distinct [`ContractError`] variant built with
//! `thiserror`. The `Display` text of each variant is exactly the description
//! printed after the `[FAIL] ` prefix, so the report and the error never drift.
//!
//! All variants are fatal. The validator stops at the first one it produces.

use std::path::PathBuf;

use thiserror::Error;

use crate::contract::ArtifactKind;

/// A failed contract check, or an operational failure that ends the run.
#[derive(Error, Debug)]
pub enum ContractError {
    /// A required artifact does not exist as a file under the bundle root.
    #[error("Missing required file: {}", .path.display())]
    MissingArtifact {
        /// Absolute (or root-joined) path that was expected.
        path: PathBuf,
    },

    /// An existing artifact could not be read as UTF-8 text.
    #[error("Unable to read {}: {source}", .path.display())]
    UnreadableArtifact {
        /// Path of the artifact that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The driver script lacks one of its required literal tokens.
    #[error("{artifact} missing snippet: {snippet}")]
    MissingSnippet {
        /// Artifact whose text was searched.
        artifact: ArtifactKind,
        /// The literal token that was not found.
        snippet: &'static str,
    },

    /// The inspection profile lacks one of the required inspection ids.
    #[error("{} missing inspection: {inspection}", ArtifactKind::Profile)]
    MissingInspection {
        /// The inspection identifier that was not found.
        inspection: &'static str,
    },

    /// The driver script does not default `variable` to `"on"`.
    #[error("{} default for {variable} is not on", ArtifactKind::Runner)]
    MissingDefaultOn {
        /// Shell variable carrying the default.
        variable: &'static str,
    },

    /// The driver script does not default `variable` to `"off"`.
    #[error("{} default for {variable} is not off", ArtifactKind::Runner)]
    MissingDefaultOff {
        /// Shell variable carrying the default.
        variable: &'static str,
    },

    /// The issue-count parser does not handle the path placeholder.
    #[error("{} is missing {placeholder} path normalization support", ArtifactKind::Parser)]
    MissingPathNormalization {
        /// Placeholder token the parser must rewrite.
        placeholder: &'static str,
    },

    /// The issue-count parser does not know the cast-inspection alias.
    #[error("{} is missing cast-inspection alias support", ArtifactKind::Parser)]
    MissingAliasSupport {
        /// Inspection id the parser must treat as an alias.
        alias: &'static str,
    },

    /// A built-in pattern failed to compile.
    #[error("invalid contract pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// Regex source text.
        pattern: &'static str,
        /// Compilation error from the `regex` crate.
        #[source]
        source: regex::Error,
    },

    /// The report could not be written to the output stream.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl ContractError {
    /// Whether this error is a contract violation that belongs in the report.
    ///
    /// Output failures are not reported, since the report stream is what failed.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, ContractError::Output(_))
    }
}
