//! # ppq-cli: quick-validate
//!
//! The `quick-validate` binary ships in `<bundle>/scripts/` and checks the
//! bundle it lives in. It takes no arguments in normal use:
//!
//! ```bash
//! scripts/quick-validate
//! scripts/quick-validate -v                      # trace phases to stderr
//! quick-validate --bundle-root path/to/skill     # check a bundle from elsewhere
//! ```
//!
//! Exit status is 0 when every check passes and 1 at the first failure.

pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ppq_contract::SkillBundle;

/// Resolve the bundle to check.
///
/// An explicit root is used as given (relative roots are joined onto the
/// current directory). Otherwise the root is derived from the location of
/// the running executable.
pub fn resolve_bundle(explicit_root: Option<&Path>) -> Result<SkillBundle> {
    match explicit_root {
        Some(root) if root.is_absolute() => Ok(SkillBundle::new(root)),
        Some(root) => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            Ok(SkillBundle::new(cwd.join(root)))
        }
        None => {
            let exe: PathBuf =
                std::env::current_exe().context("failed to locate the quick-validate executable")?;
            Ok(SkillBundle::from_verifier_path(&exe))
        }
    }
}
