//! Scaffold Configuration
//!
//! Every path, token and anchor is data. Defaults reproduce the quickpin
//! component layout: run from `lib/component/`, patch `lib/app.dart` and
//! `pubspec.yaml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::pipeline::ScaffoldError;

pub const DEFAULT_CONFIG_FILE: &str = "scaffold.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldConfig {
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    #[serde(default = "default_package")]
    pub package: String,
    #[serde(default)]
    pub tokens: TemplateTokens,
    #[serde(default = "default_targets")]
    pub targets: Vec<PatchTarget>,
}

fn default_template_path() -> PathBuf { PathBuf::from("my-template.dart.template") }
fn default_output_dir() -> PathBuf { PathBuf::from(".") }
fn default_source_extension() -> String { "dart".to_string() }
fn default_package() -> String { "quickpin".to_string() }

/// Placeholder spellings searched for in the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateTokens {
    #[serde(default = "default_underscore_token")]
    pub underscore: String,
    #[serde(default = "default_hyphen_token")]
    pub hyphen: String,
    #[serde(default = "default_title_token")]
    pub title: String,
}

fn default_underscore_token() -> String { "my_template".to_string() }
fn default_hyphen_token() -> String { "my-template".to_string() }
fn default_title_token() -> String { "MyTemplate".to_string() }

impl Default for TemplateTokens {
    fn default() -> Self {
        Self {
            underscore: default_underscore_token(),
            hyphen: default_hyphen_token(),
            title: default_title_token(),
        }
    }
}

/// An existing file that gets lines inserted after anchors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchTarget {
    pub path: PathBuf,
    pub insertions: Vec<Insertion>,
}

/// Lines may use `{{hyphen}}`, `{{underscore}}`, `{{title}}`, `{{package}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insertion {
    pub anchor: String,
    pub lines: Vec<String>,
}

impl Insertion {
    pub fn new(anchor: &str, lines: &[&str]) -> Self {
        Self {
            anchor: anchor.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

fn default_targets() -> Vec<PatchTarget> {
    vec![
        PatchTarget {
            path: PathBuf::from("../app.dart"),
            insertions: vec![
                Insertion::new(
                    "// import components here",
                    &["import 'package:{{package}}/component/{{hyphen}}.dart';"],
                ),
                Insertion::new(
                    "// bind components here",
                    &["    bind({{title}}Component);"],
                ),
            ],
        },
        PatchTarget {
            path: PathBuf::from("../../pubspec.yaml"),
            insertions: vec![Insertion::new(
                "    html_files:",
                &["      - lib/component/{{hyphen}}.html"],
            )],
        },
    ]
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            template_path: default_template_path(),
            output_dir: default_output_dir(),
            source_extension: default_source_extension(),
            package: default_package(),
            tokens: TemplateTokens::default(),
            targets: default_targets(),
        }
    }
}

impl ScaffoldConfig {
    /// Explicit path (must exist), then `scaffold.json` in `base_dir`, then defaults.
    pub fn load(explicit: Option<&Path>, base_dir: &Path) -> Result<Self, ScaffoldError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let local = base_dir.join(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load_from_file(&local);
        }

        log::debug!("No {} in {}, using defaults", DEFAULT_CONFIG_FILE, base_dir.display());
        Ok(Self::default())
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ScaffoldError> {
        let content = fs::read_to_string(path).map_err(|source| ScaffoldError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ScaffoldError::Config(format!("{}: {}", path.display(), e)))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
