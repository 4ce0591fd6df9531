//! # Validator
//!
//! Runs the fixed check sequence over one [`SkillBundle`]:
//!
//! 1. every artifact in [`ArtifactKind::ALL`] exists;
//! 2. the runner contains each of [`RUNNER_SNIPPETS`];
//! 3. the profile contains each of [`PROFILE_INSPECTIONS`];
//! 4. the runner matches each of [`RUNNER_DEFAULTS`];
//! 5. the parser matches each of [`PARSER_CAPABILITIES`].
//!
//! The run is fail-fast: the first failing check is reported and nothing
//! after it is attempted. Each artifact is read at most once, and only after
//! all existence checks have passed.

use std::io::Write;
use std::path::PathBuf;

use regex::Regex;

use crate::bundle::SkillBundle;
use crate::contract::{
    ArtifactKind, RequiredPattern, RequiredSnippet, PARSER_CAPABILITIES, PROFILE_INSPECTIONS,
    RUNNER_DEFAULTS, RUNNER_SNIPPETS,
};
use crate::error::ContractError;
use crate::report::Reporter;

/// Final report line of a fully passing run.
pub const PASSED_MESSAGE: &str = "Skill quick validation passed.";

/// Succeeds iff `artifact` exists as a file under `bundle`.
pub fn check_existence(
    bundle: &SkillBundle,
    artifact: ArtifactKind,
) -> Result<PathBuf, ContractError> {
    let path = bundle.artifact_path(artifact);
    if path.is_file() {
        Ok(path)
    } else {
        Err(ContractError::MissingArtifact { path })
    }
}

/// Succeeds iff `text` contains the snippet literal.
pub fn check_snippet(text: &str, snippet: &RequiredSnippet) -> Result<(), ContractError> {
    if text.contains(snippet.literal) {
        Ok(())
    } else {
        Err(snippet.missing())
    }
}

/// Succeeds iff the pattern matches anywhere in `text`.
pub fn check_pattern(text: &str, pattern: &RequiredPattern) -> Result<(), ContractError> {
    let re = Regex::new(pattern.pattern).map_err(|source| ContractError::InvalidPattern {
        pattern: pattern.pattern,
        source,
    })?;
    if re.is_match(text) {
        Ok(())
    } else {
        Err(pattern.missing())
    }
}

/// Drives the check sequence and writes the report.
pub struct Validator<'a, W: Write> {
    bundle: &'a SkillBundle,
    reporter: Reporter<W>,
}

impl<'a, W: Write> Validator<'a, W> {
    /// Validator over `bundle`, reporting to `out`.
    pub fn new(bundle: &'a SkillBundle, out: W) -> Self {
        Self {
            bundle,
            reporter: Reporter::new(out),
        }
    }

    /// Run every check in order.
    ///
    /// On success the final `[OK]` line has been written. On a contract
    /// failure the `[FAIL]` line has been written and the error is returned.
    /// [`ContractError::Output`] is returned without a report line.
    pub fn run(&mut self) -> Result<(), ContractError> {
        tracing::debug!(root = %self.bundle.root().display(), "starting quick validation");
        match self.check_all() {
            Ok(()) => {
                self.reporter.ok(PASSED_MESSAGE)?;
                Ok(())
            }
            Err(err) if err.is_reportable() => {
                tracing::debug!(error = %err, "quick validation stopped");
                self.reporter.fail(&err)?;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Recover the report stream.
    pub fn into_inner(self) -> W {
        self.reporter.into_inner()
    }

    fn check_all(&mut self) -> Result<(), ContractError> {
        self.verify_artifacts()?;

        let runner = self.bundle.read_artifact(ArtifactKind::Runner)?;
        self.verify_snippets(&runner, &RUNNER_SNIPPETS)?;

        let profile = self.bundle.read_artifact(ArtifactKind::Profile)?;
        self.verify_snippets(&profile, &PROFILE_INSPECTIONS)?;

        self.verify_patterns(&runner, &RUNNER_DEFAULTS)?;

        let parser = self.bundle.read_artifact(ArtifactKind::Parser)?;
        self.verify_patterns(&parser, &PARSER_CAPABILITIES)
    }

    fn verify_artifacts(&mut self) -> Result<(), ContractError> {
        tracing::debug!("phase: artifact existence");
        for artifact in ArtifactKind::ALL {
            let path = check_existence(self.bundle, artifact)?;
            self.reporter.ok(format!("Found: {}", path.display()))?;
        }
        Ok(())
    }

    fn verify_snippets(
        &mut self,
        text: &str,
        snippets: &[RequiredSnippet],
    ) -> Result<(), ContractError> {
        for snippet in snippets {
            check_snippet(text, snippet)?;
            self.reporter.ok(snippet.passed_message())?;
        }
        Ok(())
    }

    fn verify_patterns(
        &mut self,
        text: &str,
        patterns: &[RequiredPattern],
    ) -> Result<(), ContractError> {
        for pattern in patterns {
            check_pattern(text, pattern)?;
            self.reporter.ok(pattern.passed_message())?;
        }
        Ok(())
    }
}
