//! Validation System - Rule/Policy Separation
//!
//! Rules produce structured violations.
//! Errors block scaffolding, warnings are reported.

use serde::{Deserialize, Serialize};
use crate::naming::ComponentName;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationViolation {
    pub rule: String,
    pub severity: ViolationSeverity,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub remediation: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<ValidationViolation>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.severity == ViolationSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationViolation> {
        self.violations.iter().filter(|v| v.severity == ViolationSeverity::Warning)
    }

    /// `rule: message` for every error, joined with `; `
    pub fn error_summary(&self) -> String {
        self.violations
            .iter()
            .filter(|v| v.severity == ViolationSeverity::Error)
            .map(|v| format!("{}: {}", v.rule, v.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validation rule trait - produces violations
pub trait ValidationRule {
    fn name(&self) -> &'static str;
    fn validate(&self, name: &ComponentName) -> Vec<ValidationViolation>;
}

// --- Concrete Rules ---

pub struct NonEmptyRule;

impl ValidationRule for NonEmptyRule {
    fn name(&self) -> &'static str { "non_empty" }

    fn validate(&self, name: &ComponentName) -> Vec<ValidationViolation> {
        if !name.is_empty() {
            return vec![];
        }
        vec![ValidationViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Error,
            message: "Component name is empty".to_string(),
            expected: Some("at least one word".to_string()),
            actual: None,
            remediation: vec!["Pass the component name as the last argument, e.g. \"label picker\"".to_string()],
        }]
    }
}

pub struct FileSafeRule;

impl ValidationRule for FileSafeRule {
    fn name(&self) -> &'static str { "file_safe" }

    fn validate(&self, name: &ComponentName) -> Vec<ValidationViolation> {
        name.words()
            .iter()
            .filter(|w| w.contains(['/', '\\']) || w.contains("..") || w.chars().any(char::is_control))
            .map(|w| ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Error,
                message: "Component name would escape the output directory".to_string(),
                expected: Some("no path separators, '..' or control characters".to_string()),
                actual: Some(w.clone()),
                remediation: vec!["Remove path and control characters from the component name".to_string()],
            })
            .collect()
    }
}

pub struct IdentifierRule;

impl ValidationRule for IdentifierRule {
    fn name(&self) -> &'static str { "identifier" }

    fn validate(&self, name: &ComponentName) -> Vec<ValidationViolation> {
        let title = name.title_concat();
        if title.is_empty() {
            return vec![];
        }

        let starts_alpha = title.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        let all_word_chars = title.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if starts_alpha && all_word_chars {
            return vec![];
        }

        vec![ValidationViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Warning,
            message: "Title-cased name is not a valid class identifier".to_string(),
            expected: Some("ASCII letter followed by letters, digits or '_'".to_string()),
            actual: Some(title),
            remediation: vec!["Use only letters and digits in the component name".to_string()],
        }]
    }
}

/// Validator runs every rule
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(NonEmptyRule),
                Box::new(FileSafeRule),
                Box::new(IdentifierRule),
            ],
        }
    }

    pub fn validate(&self, name: &ComponentName) -> ValidationResult {
        let violations: Vec<_> = self.rules.iter().flat_map(|rule| rule.validate(name)).collect();
        let valid = !violations.iter().any(|v| v.severity == ViolationSeverity::Error);
        ValidationResult { valid, violations }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_is_valid() {
        let result = Validator::new().validate(&ComponentName::parse("my widget"));
        assert!(result.valid);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_empty_name_blocks() {
        let result = Validator::new().validate(&ComponentName::parse(""));
        assert!(!result.valid);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].rule, "non_empty");
    }

    #[test]
    fn test_path_separator_blocks() {
        let result = Validator::new().validate(&ComponentName::parse("../evil widget"));
        assert!(!result.valid);
        assert!(result.has_errors());
        assert!(result.error_summary().contains("file_safe"));
    }

    #[test]
    fn test_control_character_blocks() {
        let result = Validator::new().validate(&ComponentName::parse("bell\u{7}"));
        assert!(!result.valid);
        let violation = &result.violations[0];
        assert_eq!(violation.rule, "file_safe");
        assert!(violation.expected.as_deref().unwrap().contains("control characters"));
    }

    #[test]
    fn test_non_identifier_warns_only() {
        let result = Validator::new().validate(&ComponentName::parse("2fa prompt"));
        assert!(result.valid);
        assert_eq!(result.warnings().count(), 1);
        assert_eq!(result.violations[0].actual.as_deref(), Some("2faPrompt"));
    }
}
