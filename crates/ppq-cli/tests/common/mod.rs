use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Mutex;

use tempfile::TempDir;

// Copying the binary and spawning it are serialized so that no child forked
// by another test inherits a write handle to a freshly copied executable.
static EXEC_LOCK: Mutex<()> = Mutex::new(());

pub const RUNNER: &str = r#"#!/usr/bin/env bash
set -euo pipefail

IDE_INSPECT="on"
IDE_PROFILE="$SKILL_DIR/references/phpstorm-profile.xml"
IDE_BIN="phpstorm.sh"
FINAL_VALIDATION="off"

while [[ $# -gt 0 ]]; do
  case "$1" in
    --ide-inspect) IDE_INSPECT="$2"; shift 2 ;;
    --ide-profile) IDE_PROFILE="$2"; shift 2 ;;
    --ide-bin) IDE_BIN="$2"; shift 2 ;;
    --final-validation) FINAL_VALIDATION="$2"; shift 2 ;;
    *) TARGETS+=("$1"); shift ;;
  esac
done

echo "Stage: phpstorm_inspect"
php "$SKILL_DIR/scripts/count_phpstorm_issues.php" "$REPORT_DIR" "$ROOT" "${TARGETS[@]}"
"#;

pub const PROFILE: &str = r#"<component name="InspectionProjectProfileManager">
  <profile version="1.0">
    <inspection_tool class="PhpUnhandledExceptionInspection" enabled="true" level="WARNING" />
    <inspection_tool class="PhpDocMissingThrowsInspection" enabled="true" level="WARNING" />
    <inspection_tool class="PhpPossiblePolymorphicInvocationInspection" enabled="true" level="WARNING" />
    <inspection_tool class="PhpRedundantCastingInspection" enabled="true" level="WARNING" />
  </profile>
</component>
"#;

pub const PARSER: &str = r#"<?php
$aliases = ['PhpCastIsUnnecessaryInspection' => 'PhpRedundantCastingInspection'];
$path = str_replace('$PROJECT_DIR$', $root, $path);
"#;

pub const RUNNER_PATH: &str = "scripts/run_prebuild_quality.sh";
pub const PROFILE_PATH: &str = "references/phpstorm-profile.xml";
pub const PARSER_PATH: &str = "scripts/count_phpstorm_issues.php";

/// A skill bundle in a temp dir with `quick-validate` installed in `scripts/`.
pub struct SkillFixture {
    _tmp: TempDir,
    pub root: PathBuf,
    verifier: PathBuf,
}

impl SkillFixture {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = fs::canonicalize(tmp.path())
            .expect("canonicalize temp dir")
            .join("php-prebuild-quality");
        fs::create_dir_all(root.join("scripts")).expect("create scripts dir");
        fs::create_dir_all(root.join("references")).expect("create references dir");

        let fixture = Self {
            verifier: root.join("scripts").join("quick-validate"),
            _tmp: tmp,
            root,
        };
        fixture.write(RUNNER_PATH, RUNNER);
        fixture.write(PROFILE_PATH, PROFILE);
        fixture.write(PARSER_PATH, PARSER);
        fixture
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) {
        fs::write(self.path(relative), contents).expect("write artifact");
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.path(relative)).expect("remove artifact");
    }

    /// Install the verifier in `scripts/` and run it with no arguments.
    pub fn run_installed(&self) -> Output {
        let _guard = EXEC_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        if !self.verifier.exists() {
            fs::copy(env!("CARGO_BIN_EXE_quick-validate"), &self.verifier)
                .expect("install verifier");
        }
        Command::new(&self.verifier)
            .output()
            .expect("run installed verifier")
    }

    /// Run the build-dir verifier against this bundle via `--bundle-root`.
    pub fn run_with_root_flag(&self) -> Output {
        run_verifier(&["--bundle-root", self.root.to_str().expect("utf8 root")])
    }
}

pub fn run_verifier(args: &[&str]) -> Output {
    let _guard = EXEC_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    Command::new(env!("CARGO_BIN_EXE_quick-validate"))
        .args(args)
        .output()
        .expect("run verifier")
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("utf8 stdout")
        .lines()
        .map(str::to_owned)
        .collect()
}

pub fn found_line(root: &Path, relative: &str) -> String {
    let path = relative
        .split('/')
        .fold(root.to_path_buf(), |acc, part| acc.join(part));
    format!("[OK] Found: {}", path.display())
}
