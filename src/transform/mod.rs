//! Conversion of README markdown into documentation-comment lines.

use crate::model::{CommentBlock, DOC_PREFIX, Document};

/// Callout token removed wherever it appears in a line.
pub const TIP_CALLOUT: &str = "> [!TIP]";

/// Builds the comment block for a whole document, one line per README line.
pub fn build_comment_block(document: &Document) -> CommentBlock {
    CommentBlock::new(document.lines().iter().map(|line| to_doc_line(line)).collect())
}

/// Transforms raw README text into the text form of its comment block.
///
/// Every line is preceded by a line feed, so the result can be appended to an
/// existing line without disturbing it. An empty README yields an empty
/// string.
pub fn readme_to_doc_comments(readme: &str) -> String {
    build_comment_block(&Document::parse(readme)).render()
}

/// Converts a single README line into a documentation-comment line.
///
/// The callout token is removed first. A single leading `>` is then stripped
/// from whatever remains, and the doc prefix is prepended.
pub fn to_doc_line(line: &str) -> String {
    let without_tip = line.replace(TIP_CALLOUT, "");
    let body = without_tip.strip_prefix('>').unwrap_or(without_tip.as_str());
    format!("{DOC_PREFIX}{body}")
}
