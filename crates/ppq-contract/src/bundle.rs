//! # Skill Bundle
//!
//! Locates the bundle root and resolves artifact paths under it.
//!
//! The root is computed once, at entry, and carried as a [`SkillBundle`]
//! value through every phase of the run.

use std::path::{Path, PathBuf};

use crate::contract::ArtifactKind;
use crate::error::ContractError;

/// Root directory of a skill bundle. Immutable for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBundle {
    root: PathBuf,
}

impl SkillBundle {
    /// Bundle rooted at `root`, taken as given.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Bundle that owns the verifier installed at `verifier`.
    ///
    /// See [`resolve_bundle_root`].
    pub fn from_verifier_path(verifier: &Path) -> Self {
        Self::new(resolve_bundle_root(verifier))
    }

    /// The bundle root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of `artifact` under this bundle.
    pub fn artifact_path(&self, artifact: ArtifactKind) -> PathBuf {
        artifact
            .relative_path()
            .split('/')
            .fold(self.root.clone(), |acc, part| acc.join(part))
    }

    /// Full text of `artifact`.
    ///
    /// Callers must have passed the existence check for `artifact` first.
    pub fn read_artifact(&self, artifact: ArtifactKind) -> Result<String, ContractError> {
        let path = self.artifact_path(artifact);
        let text = std::fs::read_to_string(&path)
            .map_err(|source| ContractError::UnreadableArtifact { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read artifact");
        Ok(text)
    }
}

/// Bundle root for a verifier installed at `verifier`: its grandparent.
///
/// The verifier lives in `<root>/scripts/`, so the root is two levels up from
/// the verifier file itself. Symlinks are resolved first when possible. A
/// path too short to have a grandparent falls back to its topmost ancestor,
/// and the existence checks then report what is missing.
pub fn resolve_bundle_root(verifier: &Path) -> PathBuf {
    let resolved = std::fs::canonicalize(verifier).unwrap_or_else(|e| {
        tracing::debug!(
            path = %verifier.display(),
            error = %e,
            "could not canonicalize verifier path; using it as given"
        );
        verifier.to_path_buf()
    });
    resolved
        .ancestors()
        .nth(2)
        .or_else(|| resolved.ancestors().last())
        .unwrap_or(&resolved)
        .to_path_buf()
}
