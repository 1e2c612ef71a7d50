//! Scaffold Pipeline - Single Entry Point
//!
//! Every read happens before the first write. A missing template or target
//! file leaves the project untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{PatchTarget, ScaffoldConfig};
use crate::hashing::sha256_hex;
use crate::naming::{ComponentName, NameVariants};
use crate::patching::{insert_after_anchor, InsertOutcome, PatchMode};
use crate::templates::{render_line, ComponentFiles, Template};
use crate::validation::{ValidationResult, Validator};
use crate::SCAFFOLD_VERSION;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid component name: {0}")]
    InvalidName(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldRequest {
    pub name: ComponentName,
    #[serde(default)]
    pub mode: PatchMode,
    #[serde(default)]
    pub dry_run: bool,
}

impl ScaffoldRequest {
    pub fn new(name: ComponentName) -> Self {
        Self { name, mode: PatchMode::default(), dry_run: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
    Created,
    Overwritten,
    Patched,
    Unchanged,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileChange {
    pub path: PathBuf,
    pub action: FileAction,
    pub bytes: usize,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertionRecord {
    pub path: PathBuf,
    pub anchor: String,
    pub outcome: InsertOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldReport {
    pub name: NameVariants,
    pub scaffold_version: String,
    pub created_at: DateTime<Utc>,
    pub dry_run: bool,
    pub files: Vec<FileChange>,
    pub insertions: Vec<InsertionRecord>,
    pub warnings: Vec<String>,
}

impl ScaffoldReport {
    pub fn file(&self, path: &Path) -> Option<&FileChange> {
        self.files.iter().find(|f| f.path == path)
    }
}

struct PlannedWrite {
    path: PathBuf,
    contents: String,
    action: FileAction,
}

impl PlannedWrite {
    fn change(&self) -> FileChange {
        FileChange {
            path: self.path.clone(),
            action: self.action,
            bytes: self.contents.len(),
            sha256: sha256_hex(self.contents.as_bytes()),
        }
    }
}

/// The scaffold pipeline - validate, instantiate, patch, write
pub struct ScaffoldPipeline {
    config: ScaffoldConfig,
    base_dir: PathBuf,
    validator: Validator,
}

impl ScaffoldPipeline {
    /// Relative paths in `config` resolve against `base_dir`.
    pub fn new(config: ScaffoldConfig, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            base_dir: base_dir.into(),
            validator: Validator::new(),
        }
    }

    pub fn validate_name(&self, name: &ComponentName) -> ValidationResult {
        self.validator.validate(name)
    }

    /// Paths of the three component files for `name`
    pub fn component_files(&self, name: &ComponentName) -> ComponentFiles {
        ComponentFiles::new(
            &self.base_dir.join(&self.config.output_dir),
            &self.config.source_extension,
            name,
        )
    }

    pub fn run(&self, request: &ScaffoldRequest) -> Result<ScaffoldReport, ScaffoldError> {
        let name = &request.name;

        let validation = self.validate_name(name);
        if !validation.valid {
            return Err(ScaffoldError::InvalidName(validation.error_summary()));
        }

        let mut warnings: Vec<String> = validation
            .warnings()
            .map(|v| format!("{}: {}", v.rule, v.message))
            .collect();
        for w in &warnings {
            log::warn!("{}", w);
        }

        let files = self.component_files(name);
        self.check_collisions(&files)?;

        let template = Template::load(&self.base_dir.join(&self.config.template_path))?;
        let mut planned = self.plan_component(&template, files, name);

        let mut insertions = Vec::new();
        for target in &self.config.targets {
            let (write, records) = self.plan_patch(target, name, request.mode)?;
            for record in &records {
                if record.outcome == InsertOutcome::AnchorMissing {
                    let msg = format!(
                        "anchor {:?} not found in {}",
                        record.anchor,
                        record.path.display()
                    );
                    log::warn!("{}", msg);
                    warnings.push(msg);
                }
            }
            insertions.extend(records);
            planned.push(write);
        }

        if request.dry_run {
            log::info!("Dry run: {} files planned, nothing written", planned.len());
        } else {
            for write in planned.iter().filter(|w| w.action != FileAction::Unchanged) {
                fs::write(&write.path, &write.contents).map_err(|source| ScaffoldError::Write {
                    path: write.path.clone(),
                    source,
                })?;
                log::info!("{:?} {}", write.action, write.path.display());
            }
        }

        Ok(ScaffoldReport {
            name: name.variants(),
            scaffold_version: SCAFFOLD_VERSION.to_string(),
            created_at: Utc::now(),
            dry_run: request.dry_run,
            files: planned.iter().map(PlannedWrite::change).collect(),
            insertions,
            warnings,
        })
    }

    /// A component file that is also a patch target would be written twice.
    fn check_collisions(&self, files: &ComponentFiles) -> Result<(), ScaffoldError> {
        let component_paths = [&files.source, &files.markup, &files.stylesheet];
        for target in &self.config.targets {
            let target_path = self.base_dir.join(&target.path);
            if component_paths.iter().any(|p| **p == target_path) {
                return Err(ScaffoldError::Config(format!(
                    "component file {} is also a patch target",
                    target_path.display()
                )));
            }
        }
        Ok(())
    }

    fn plan_component(
        &self,
        template: &Template,
        files: ComponentFiles,
        name: &ComponentName,
    ) -> Vec<PlannedWrite> {
        let source = template.instantiate(&self.config.tokens, name);

        [
            (files.source, source),
            (files.markup, String::new()),
            (files.stylesheet, String::new()),
        ]
        .into_iter()
        .map(|(path, contents)| {
            let action = if path.exists() { FileAction::Overwritten } else { FileAction::Created };
            log::debug!("Planned {:?} {}", action, path.display());
            PlannedWrite { path, contents, action }
        })
        .collect()
    }

    fn plan_patch(
        &self,
        target: &PatchTarget,
        name: &ComponentName,
        mode: PatchMode,
    ) -> Result<(PlannedWrite, Vec<InsertionRecord>), ScaffoldError> {
        let path = self.base_dir.join(&target.path);
        let original = fs::read_to_string(&path).map_err(|source| ScaffoldError::Read {
            path: path.clone(),
            source,
        })?;

        let mut text = original.clone();
        let mut records = Vec::with_capacity(target.insertions.len());
        for insertion in &target.insertions {
            let lines: Vec<String> = insertion
                .lines
                .iter()
                .map(|l| render_line(l, name, &self.config.package))
                .collect();
            let (patched, outcome) = insert_after_anchor(&text, &insertion.anchor, &lines, mode);
            if outcome == InsertOutcome::AlreadyPresent {
                log::debug!("Already present after {:?} in {}", insertion.anchor, path.display());
            }
            text = patched;
            records.push(InsertionRecord {
                path: path.clone(),
                anchor: insertion.anchor.clone(),
                outcome,
            });
        }

        let action = if text == original { FileAction::Unchanged } else { FileAction::Patched };
        Ok((PlannedWrite { path, contents: text, action }, records))
    }
}
