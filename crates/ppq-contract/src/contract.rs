//! # Contract Tables
//!
//! The fixed expectations for a `php-prebuild-quality` skill bundle: which
//! artifacts must exist, which literal tokens each must contain, and which
//! patterns assert runner defaults and parser capabilities.
//!
//! Table order is significant. The validator walks each table front to back
//! and stops at the first miss, so the order here is the order of the report.

use std::fmt;

use crate::error::ContractError;

/// One of the three files a skill bundle must ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Driver script that runs the prebuild stages.
    Runner,
    /// PhpStorm inspection profile.
    Profile,
    /// Issue-count parser for PhpStorm inspection reports.
    Parser,
}

impl ArtifactKind {
    /// All artifacts in existence-check order.
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Runner,
        ArtifactKind::Profile,
        ArtifactKind::Parser,
    ];

    /// Path of the artifact relative to the bundle root, `/`-separated.
    pub fn relative_path(self) -> &'static str {
        match self {
            ArtifactKind::Runner => "scripts/run_prebuild_quality.sh",
            ArtifactKind::Profile => "references/phpstorm-profile.xml",
            ArtifactKind::Parser => "scripts/count_phpstorm_issues.php",
        }
    }

    /// Name used for this artifact in report lines.
    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::Runner => "Runner",
            ArtifactKind::Profile => "Profile",
            ArtifactKind::Parser => "PhpStorm parser",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A literal token that must appear somewhere in an artifact's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredSnippet {
    /// Artifact whose text is searched.
    pub artifact: ArtifactKind,
    /// Literal substring that must be present.
    pub literal: &'static str,
}

impl RequiredSnippet {
    const fn runner(literal: &'static str) -> Self {
        Self {
            artifact: ArtifactKind::Runner,
            literal,
        }
    }

    const fn inspection(literal: &'static str) -> Self {
        Self {
            artifact: ArtifactKind::Profile,
            literal,
        }
    }

    /// Report text when the snippet is present.
    pub fn passed_message(&self) -> String {
        format!("{} contains: {}", self.artifact, self.literal)
    }

    /// The error raised when the snippet is absent.
    ///
    /// Profile snippets are inspection ids and get their own variant.
    pub fn missing(&self) -> ContractError {
        match self.artifact {
            ArtifactKind::Profile => ContractError::MissingInspection {
                inspection: self.literal,
            },
            artifact => ContractError::MissingSnippet {
                artifact,
                snippet: self.literal,
            },
        }
    }
}

/// What a [`RequiredPattern`] asserts when it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// The runner defaults `variable` to `"on"`.
    DefaultOn {
        /// Shell variable name.
        variable: &'static str,
    },
    /// The runner defaults `variable` to `"off"`.
    DefaultOff {
        /// Shell variable name.
        variable: &'static str,
    },
    /// The parser rewrites `placeholder` into a real path.
    PathNormalization {
        /// Placeholder token.
        placeholder: &'static str,
    },
    /// The parser maps `alias` onto the redundant-cast inspection.
    AliasSupport {
        /// Alias inspection id.
        alias: &'static str,
    },
}

/// A regular expression that must match somewhere in an artifact's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredPattern {
    /// Artifact whose text is matched.
    pub artifact: ArtifactKind,
    /// Regex source, compiled when the check runs.
    pub pattern: &'static str,
    /// What a match proves about the artifact.
    pub expectation: Expectation,
}

impl RequiredPattern {
    /// Report text when the pattern matches.
    pub fn passed_message(&self) -> String {
        match self.expectation {
            Expectation::DefaultOn { variable } => {
                format!("{} default {variable} is on", self.artifact)
            }
            Expectation::DefaultOff { variable } => {
                format!("{} default {variable} is off", self.artifact)
            }
            Expectation::PathNormalization { placeholder } => {
                format!("{} supports {placeholder} path normalization", self.artifact)
            }
            Expectation::AliasSupport { .. } => {
                format!("{} supports cast-inspection alias", self.artifact)
            }
        }
    }

    /// The error raised when the pattern does not match.
    pub fn missing(&self) -> ContractError {
        match self.expectation {
            Expectation::DefaultOn { variable } => ContractError::MissingDefaultOn { variable },
            Expectation::DefaultOff { variable } => ContractError::MissingDefaultOff { variable },
            Expectation::PathNormalization { placeholder } => {
                ContractError::MissingPathNormalization { placeholder }
            }
            Expectation::AliasSupport { alias } => ContractError::MissingAliasSupport { alias },
        }
    }
}

/// Placeholder PhpStorm writes in place of the project root in report paths.
pub const PROJECT_DIR_PLACEHOLDER: &str = "$PROJECT_DIR$";

/// Older inspection id that reports the same problem as `PhpRedundantCastingInspection`.
pub const CAST_INSPECTION_ALIAS: &str = "PhpCastIsUnnecessaryInspection";

/// Runner CLI flags, stage marker, and parser reference.
pub const RUNNER_SNIPPETS: [RequiredSnippet; 6] = [
    RequiredSnippet::runner("--ide-inspect"),
    RequiredSnippet::runner("--ide-profile"),
    RequiredSnippet::runner("--ide-bin"),
    RequiredSnippet::runner("--final-validation"),
    RequiredSnippet::runner("Stage: phpstorm_inspect"),
    RequiredSnippet::runner("count_phpstorm_issues.php"),
];

/// Inspections the shipped profile must enable.
pub const PROFILE_INSPECTIONS: [RequiredSnippet; 4] = [
    RequiredSnippet::inspection("PhpUnhandledExceptionInspection"),
    RequiredSnippet::inspection("PhpDocMissingThrowsInspection"),
    RequiredSnippet::inspection("PhpPossiblePolymorphicInvocationInspection"),
    RequiredSnippet::inspection("PhpRedundantCastingInspection"),
];

/// Runner defaults: IDE inspection on, final validation off.
pub const RUNNER_DEFAULTS: [RequiredPattern; 2] = [
    RequiredPattern {
        artifact: ArtifactKind::Runner,
        pattern: r#"IDE_INSPECT="on""#,
        expectation: Expectation::DefaultOn {
            variable: "IDE_INSPECT",
        },
    },
    RequiredPattern {
        artifact: ArtifactKind::Runner,
        pattern: r#"FINAL_VALIDATION="off""#,
        expectation: Expectation::DefaultOff {
            variable: "FINAL_VALIDATION",
        },
    },
];

/// Parser capabilities, normalization before alias.
pub const PARSER_CAPABILITIES: [RequiredPattern; 2] = [
    RequiredPattern {
        artifact: ArtifactKind::Parser,
        pattern: r"\$PROJECT_DIR\$",
        expectation: Expectation::PathNormalization {
            placeholder: PROJECT_DIR_PLACEHOLDER,
        },
    },
    RequiredPattern {
        artifact: ArtifactKind::Parser,
        pattern: "PhpCastIsUnnecessaryInspection",
        expectation: Expectation::AliasSupport {
            alias: CAST_INSPECTION_ALIAS,
        },
    },
];
