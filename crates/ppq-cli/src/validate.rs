//! # Validate
//!
//! Runs the contract checks for one bundle and maps the outcome to an exit
//! code: 0 when every check passes, 1 at the first failure.

use std::io::Write;

use anyhow::Result;
use ppq_contract::{ContractError, SkillBundle, Validator};

/// Check `bundle`, writing the report to `out`.
///
/// Contract failures are already in the report and come back as `Ok(1)`.
/// An `Err` means the report itself could not be written.
pub fn run_validate<W: Write>(bundle: &SkillBundle, out: W) -> Result<u8> {
    let mut validator = Validator::new(bundle, out);
    match validator.run() {
        Ok(()) => {
            tracing::info!(root = %bundle.root().display(), "skill bundle passed");
            Ok(0)
        }
        Err(ContractError::Output(e)) => {
            Err(anyhow::Error::new(e).context("failed to write validation report"))
        }
        Err(e) => {
            tracing::info!(root = %bundle.root().display(), error = %e, "skill bundle failed");
            Ok(1)
        }
    }
}
