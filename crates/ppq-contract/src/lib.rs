#![deny(missing_docs)]

//! # ppq-contract: Static Contract Checks for the php-prebuild-quality Skill
//!
//! Confirms, before a skill bundle is ever executed, that its three artifacts
//! exist and that their text carries the tokens the surrounding tooling
//! relies on:
//!
//! - the driver script (`scripts/run_prebuild_quality.sh`) exposes the IDE
//!   inspection flags, the final-validation flag, the `phpstorm_inspect`
//!   stage marker, and calls the issue-count parser;
//! - the inspection profile (`references/phpstorm-profile.xml`) enables the
//!   required PhpStorm inspections;
//! - the driver script defaults IDE inspection on and final validation off;
//! - the issue-count parser (`scripts/count_phpstorm_issues.php`) handles the
//!   `$PROJECT_DIR$` placeholder and the legacy cast-inspection alias.
//!
//! Only textual presence is checked. Nothing in the bundle is executed.
//!
//! ## Design Principles
//!
//! 1. **Fixed expectations.** The contract lives in const tables in
//!    [`contract`]. Table order is report order.
//!
//! 2. **Fail-fast.** [`Validator::run`] stops at the first failing check and
//!    reports exactly one `[FAIL]` line.
//!
//! 3. **Explicit bundle root.** The root is resolved once into a
//!    [`SkillBundle`] and passed down; there is no ambient state.
//!
//! 4. **[`ContractError`] taxonomy.** One `thiserror` variant per failure
//!    kind, whose `Display` text is the report line.

pub mod bundle;
pub mod contract;
pub mod error;
pub mod report;
pub mod validator;


pub use bundle::{resolve_bundle_root, SkillBundle};
pub use contract::{ArtifactKind, Expectation, RequiredPattern, RequiredSnippet};
pub use error::ContractError;
pub use report::{CheckEvent, Reporter};
pub use validator::{check_existence, check_pattern, check_snippet, Validator, PASSED_MESSAGE};
