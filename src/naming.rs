//! Name Derivation - one phrase, three spellings

use serde::{Deserialize, Serialize};

/// A component name as an ordered list of words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentName {
    words: Vec<String>,
}

impl ComponentName {
    /// Split a phrase on whitespace.
    pub fn parse(phrase: &str) -> Self {
        Self {
            words: phrase.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Join CLI words with a space and split again, so `my widget` and
    /// `"my widget"` name the same component.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let phrase: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        Self::parse(&phrase.join(" "))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// `my-widget`
    pub fn lower_hyphen(&self) -> String {
        self.lowered().join("-")
    }

    /// `my_widget`
    pub fn lower_underscore(&self) -> String {
        self.lowered().join("_")
    }

    /// `MyWidget`
    pub fn title_concat(&self) -> String {
        self.words.iter().map(|w| title_case(w)).collect()
    }

    pub fn variants(&self) -> NameVariants {
        NameVariants {
            lower_hyphen: self.lower_hyphen(),
            lower_underscore: self.lower_underscore(),
            title_concat: self.title_concat(),
        }
    }

    fn lowered(&self) -> Vec<String> {
        self.words.iter().map(|w| w.to_lowercase()).collect()
    }
}

/// All derived spellings, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameVariants {
    pub lower_hyphen: String,
    pub lower_underscore: String,
    pub title_concat: String,
}

/// First character uppercased, the rest lowercased.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_word_phrase() {
        let name = ComponentName::parse("my widget");
        assert_eq!(name.lower_hyphen(), "my-widget");
        assert_eq!(name.lower_underscore(), "my_widget");
        assert_eq!(name.title_concat(), "MyWidget");
    }

    #[test]
    fn test_mixed_case_is_normalized() {
        let name = ComponentName::parse("USER proFILE card");
        assert_eq!(name.lower_hyphen(), "user-profile-card");
        assert_eq!(name.lower_underscore(), "user_profile_card");
        assert_eq!(name.title_concat(), "UserProfileCard");
    }

    #[test]
    fn test_extra_whitespace_ignored() {
        let name = ComponentName::parse("  label \t  list ");
        assert_eq!(name.words(), &["label".to_string(), "list".to_string()]);
        assert_eq!(name.lower_hyphen(), "label-list");
    }

    #[test]
    fn test_from_args_matches_quoted_phrase() {
        let split = ComponentName::from_args(&["my", "widget"]);
        let quoted = ComponentName::from_args(&["my widget"]);
        assert_eq!(split, quoted);
    }

    #[test]
    fn test_empty_phrase_yields_empty_variants() {
        let name = ComponentName::parse("   ");
        assert!(name.is_empty());
        assert_eq!(name.lower_hyphen(), "");
        assert_eq!(name.lower_underscore(), "");
        assert_eq!(name.title_concat(), "");
    }

    #[test]
    fn test_single_word() {
        let v = ComponentName::parse("notes").variants();
        assert_eq!(v.lower_hyphen, "notes");
        assert_eq!(v.lower_underscore, "notes");
        assert_eq!(v.title_concat, "Notes");
    }
}
