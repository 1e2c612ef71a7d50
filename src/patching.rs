//! Manifest Patching - anchor-based line insertion

use serde::{Deserialize, Serialize};

/// How repeated runs treat an insertion that is already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchMode {
    /// Insert every time. Running twice duplicates the lines.
    #[default]
    Always,
    /// Skip when every line already appears, in order, after the anchor.
    Once,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertOutcome {
    Inserted,
    AlreadyPresent,
    AnchorMissing,
}

/// Insert `lines` right after the first occurrence of `anchor`.
///
/// The anchor is replaced by `anchor + "\n" + lines.join("\n")`, so text
/// following the anchor on the same line ends up after the inserted block.
pub fn insert_after_anchor(
    text: &str,
    anchor: &str,
    lines: &[String],
    mode: PatchMode,
) -> (String, InsertOutcome) {
    let Some(pos) = text.find(anchor) else {
        return (text.to_string(), InsertOutcome::AnchorMissing);
    };

    let end = pos + anchor.len();
    if mode == PatchMode::Once && lines_present_in_order(&text[end..], lines) {
        return (text.to_string(), InsertOutcome::AlreadyPresent);
    }

    let block = inserted_block(anchor, lines);
    let mut out = String::with_capacity(text.len() + block.len() - anchor.len());
    out.push_str(&text[..pos]);
    out.push_str(&block);
    out.push_str(&text[end..]);
    (out, InsertOutcome::Inserted)
}

/// Later insertions at the same anchor push older blocks down, so the
/// lines only have to appear in order somewhere after it.
fn lines_present_in_order(rest: &str, lines: &[String]) -> bool {
    let mut remaining = rest.lines();
    lines
        .iter()
        .all(|wanted| remaining.by_ref().any(|line| line == wanted.as_str()))
}

fn inserted_block(anchor: &str, lines: &[String]) -> String {
    let mut block = anchor.to_string();
    for line in lines {
        block.push('\n');
        block.push_str(line);
    }
    block
}
