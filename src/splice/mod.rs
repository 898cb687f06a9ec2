//! Replacement of the marked region inside the target source file.

use crate::error::{Result, SyncError};
use crate::model::{CommentBlock, Markers, Region, TargetFile};

/// Index of the first line containing `marker`.
pub fn find_marker(target: &TargetFile, marker: &str) -> Result<usize> {
    target
        .lines
        .iter()
        .position(|line| line.contains(marker))
        .ok_or_else(|| SyncError::MarkerNotFound {
            marker: marker.to_string(),
            path: target.path.clone(),
        })
}

/// Locates both marker lines and checks that the end comes after the start.
pub fn locate_region(target: &TargetFile, markers: &Markers) -> Result<Region> {
    let start = find_marker(target, &markers.start)?;
    let end = find_marker(target, &markers.end)?;
    if end <= start {
        return Err(SyncError::InvalidRegion {
            start,
            end,
            path: target.path.clone(),
        });
    }
    Ok(Region { start, end })
}

/// Produces a new target whose region holds exactly the lines of `block`.
///
/// Lines up to and including the start marker and lines from the end marker
/// onwards are carried over unchanged.
pub fn splice(target: &TargetFile, markers: &Markers, block: &CommentBlock) -> Result<TargetFile> {
    let region = locate_region(target, markers)?;

    let mut lines =
        Vec::with_capacity(target.lines.len() - region.inner_len() + block.len());
    lines.extend_from_slice(&target.lines[..=region.start]);
    lines.extend_from_slice(block.lines());
    lines.extend_from_slice(&target.lines[region.end..]);

    Ok(TargetFile {
        path: target.path.clone(),
        lines,
        trailing_newline: target.trailing_newline,
    })
}

/// Splices the text form of a comment block into the target contents and
/// returns the rewritten text.
pub fn splice_text(target: &TargetFile, markers: &Markers, block_text: &str) -> Result<String> {
    let block = CommentBlock::from_text(block_text);
    Ok(splice(target, markers, &block)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::readme_to_doc_comments;

    const SOURCE: &str = "#![allow(dead_code)]\n\n/* START OF README CONTENTS */\n/// stale\n/// lines\n/* END OF README CONTENTS */\n\npub fn f() {}\n";

    fn target(text: &str) -> TargetFile {
        TargetFile::parse("src/lib.rs", text)
    }

    #[test]
    fn replaces_region_and_keeps_surroundings() {
        let block = readme_to_doc_comments("# Title\nbody");
        let output = splice_text(&target(SOURCE), &Markers::default(), &block).unwrap();
        assert_eq!(
            output,
            "#![allow(dead_code)]\n\n/* START OF README CONTENTS */\n/// # Title\n/// body\n/* END OF README CONTENTS */\n\npub fn f() {}\n"
        );
    }

    #[test]
    fn splicing_twice_is_a_fixed_point() {
        let block = readme_to_doc_comments("# Title\n> [!TIP] hello\n");
        let markers = Markers::default();
        let first = splice_text(&target(SOURCE), &markers, &block).unwrap();
        let second = splice_text(&target(&first), &markers, &block).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_block_leaves_markers_adjacent() {
        let output = splice_text(&target(SOURCE), &Markers::default(), "").unwrap();
        assert!(output.contains("/* START OF README CONTENTS */\n/* END OF README CONTENTS */"));
        assert!(!output.contains("stale"));
    }

    #[test]
    fn first_occurrence_of_each_marker_wins() {
        let text = "// START OF README CONTENTS\nold\n// END OF README CONTENTS\nkeep\n// END OF README CONTENTS";
        let region = locate_region(&target(text), &Markers::default()).unwrap();
        assert_eq!(region, Region { start: 0, end: 2 });
    }

    #[test]
    fn missing_start_marker_is_reported() {
        let error = locate_region(&target("a\n// END OF README CONTENTS\n"), &Markers::default())
            .unwrap_err();
        match error {
            SyncError::MarkerNotFound { marker, .. } => assert_eq!(marker, "START OF README CONTENTS"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_end_marker_is_reported() {
        let error = locate_region(&target("// START OF README CONTENTS\nb\n"), &Markers::default())
            .unwrap_err();
        match error {
            SyncError::MarkerNotFound { marker, .. } => assert_eq!(marker, "END OF README CONTENTS"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn inverted_markers_are_rejected() {
        let text = "// END OF README CONTENTS\nx\n// START OF README CONTENTS\n";
        let error = locate_region(&target(text), &Markers::default()).unwrap_err();
        assert!(matches!(error, SyncError::InvalidRegion { start: 2, end: 0, .. }));
    }

    #[test]
    fn custom_markers_are_honoured() {
        let markers = Markers {
            start: "<readme>".into(),
            end: "</readme>".into(),
        };
        let text = "//! <readme>\n//! old\n//! </readme>";
        let output = splice_text(&target(text), &markers, "\n/// new").unwrap();
        assert_eq!(output, "//! <readme>\n/// new\n//! </readme>");
    }
}
