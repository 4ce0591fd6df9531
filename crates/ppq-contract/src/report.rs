//! # Check Report
//!
//! Line-oriented report: one `[OK] ` line per passed check, one `[FAIL] `
//! line for the check that ended the run.

use std::fmt;
use std::io::{self, Write};

use crate::error::ContractError;

/// Outcome of a single check.
#[derive(Debug)]
pub enum CheckEvent<'a> {
    /// The check passed; carries the description to print.
    Passed(String),
    /// The check failed and ends the run.
    Failed(&'a ContractError),
}

impl fmt::Display for CheckEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckEvent::Passed(message) => write!(f, "[OK] {message}"),
            CheckEvent::Failed(err) => write!(f, "[FAIL] {err}"),
        }
    }
}

/// Writes [`CheckEvent`]s to an output stream, one per line, in order.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    /// Reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one event line and flush it.
    pub fn report(&mut self, event: &CheckEvent<'_>) -> io::Result<()> {
        writeln!(self.out, "{event}")?;
        self.out.flush()
    }

    /// Shorthand for reporting [`CheckEvent::Passed`].
    pub fn ok(&mut self, message: impl Into<String>) -> io::Result<()> {
        self.report(&CheckEvent::Passed(message.into()))
    }

    /// Shorthand for reporting [`CheckEvent::Failed`].
    pub fn fail(&mut self, err: &ContractError) -> io::Result<()> {
        self.report(&CheckEvent::Failed(err))
    }

    /// Recover the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}
