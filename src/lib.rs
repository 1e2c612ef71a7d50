//! Component Scaffold Core
//!
//! # What a run does
//! 1. Derive `my-widget`, `my_widget`, `MyWidget` from the phrase
//! 2. Validate the name before touching disk
//! 3. Substitute tokens in the template, plan source/markup/stylesheet
//! 4. Insert reference lines after anchors in existing project files
//! 5. Write everything, or report the plan on a dry run

pub mod naming;
pub mod validation;
pub mod templates;
pub mod patching;
pub mod config;
pub mod hashing;
pub mod pipeline;

pub use naming::{ComponentName, NameVariants};
pub use validation::{ValidationResult, ValidationRule, ValidationViolation, ViolationSeverity};
pub use templates::{ComponentFiles, Template};
pub use patching::{InsertOutcome, PatchMode};
pub use config::{Insertion, PatchTarget, ScaffoldConfig, TemplateTokens};
pub use hashing::sha256_hex;
pub use pipeline::{FileAction, FileChange, ScaffoldError, ScaffoldPipeline, ScaffoldReport, ScaffoldRequest};

pub const SCAFFOLD_VERSION: &str = env!("CARGO_PKG_VERSION");
