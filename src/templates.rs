//! Template System - Literal Token Substitution
//!
//! Templates are plain text. Tokens are matched literally, never parsed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::TemplateTokens;
use crate::naming::ComponentName;
use crate::pipeline::ScaffoldError;

pub const MARKUP_EXTENSION: &str = "html";
pub const STYLESHEET_EXTENSION: &str = "css";

/// Render variable names usable in insertion lines
pub struct TemplateVars;

impl TemplateVars {
    pub const HYPHEN: &'static str = "hyphen";
    pub const UNDERSCORE: &'static str = "underscore";
    pub const TITLE: &'static str = "title";
    pub const PACKAGE: &'static str = "package";
}

/// Template text loaded from disk
#[derive(Debug, Clone)]
pub struct Template {
    pub path: PathBuf,
    pub text: String,
}

impl Template {
    pub fn load(path: &Path) -> Result<Self, ScaffoldError> {
        let text = fs::read_to_string(path).map_err(|source| ScaffoldError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read template {} ({} bytes)", path.display(), text.len());
        Ok(Self { path: path.to_path_buf(), text })
    }

    /// Replace all three tokens. Order matters: underscore, hyphen, title.
    pub fn instantiate(&self, tokens: &TemplateTokens, name: &ComponentName) -> String {
        instantiate(&self.text, tokens, name)
    }
}

pub fn instantiate(text: &str, tokens: &TemplateTokens, name: &ComponentName) -> String {
    text.replace(&tokens.underscore, &name.lower_underscore())
        .replace(&tokens.hyphen, &name.lower_hyphen())
        .replace(&tokens.title, &name.title_concat())
}

/// The three files a component consists of
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFiles {
    pub source: PathBuf,
    pub markup: PathBuf,
    pub stylesheet: PathBuf,
}

impl ComponentFiles {
    pub fn new(output_dir: &Path, source_extension: &str, name: &ComponentName) -> Self {
        let stem = name.lower_hyphen();
        Self {
            source: output_dir.join(format!("{}.{}", stem, source_extension)),
            markup: output_dir.join(format!("{}.{}", stem, MARKUP_EXTENSION)),
            stylesheet: output_dir.join(format!("{}.{}", stem, STYLESHEET_EXTENSION)),
        }
    }
}

/// Replace `{{key}}` placeholders.
pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

/// Render an insertion line against a component name.
pub fn render_line(line: &str, name: &ComponentName, package: &str) -> String {
    let hyphen = name.lower_hyphen();
    let underscore = name.lower_underscore();
    let title = name.title_concat();
    render(
        line,
        &[
            (TemplateVars::HYPHEN, hyphen.as_str()),
            (TemplateVars::UNDERSCORE, underscore.as_str()),
            (TemplateVars::TITLE, title.as_str()),
            (TemplateVars::PACKAGE, package),
        ],
    )
}
