use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::io::readme_read;
use crate::io::target;
use crate::model::Markers;
use crate::splice;
use crate::transform;

/// README location relative to the project root.
pub const README_PATH: &str = "README.md";

/// Target source file location relative to the project root.
pub const TARGET_PATH: &str = "src/lib.rs";

/// Paths and markers for a single synchronisation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// README to read from.
    pub readme: PathBuf,
    /// Source file whose marked region is rewritten.
    pub target: PathBuf,
    /// Substrings delimiting the region.
    pub markers: Markers,
}

impl SyncConfig {
    pub fn new(readme: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            readme: readme.into(),
            target: target.into(),
            markers: Markers::default(),
        }
    }

    /// Uses the conventional `README.md` and `src/lib.rs` under `root`.
    pub fn from_root(root: &Path) -> Self {
        Self::new(root.join(README_PATH), root.join(TARGET_PATH))
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The target was rewritten with new region contents.
    Updated { lines: usize },
    /// The region already matched the README; nothing was written.
    Unchanged { lines: usize },
}

/// Copies the README into the marked region of the target file.
///
/// Both files are read and the new contents computed before anything is
/// written, so a missing or misplaced marker leaves the target untouched.
#[instrument(
    level = "info",
    skip_all,
    fields(readme = %config.readme.display(), target = %config.target.display())
)]
pub fn run(config: &SyncConfig) -> Result<SyncOutcome> {
    let document = readme_read::read_document(&config.readme)?;
    let block = transform::build_comment_block(&document);
    info!(line_count = block.len(), "built comment block from README");

    let current = target::read_target(&config.target)?;
    let region = splice::locate_region(&current, &config.markers)?;
    debug!(
        start = region.start + 1,
        end = region.end + 1,
        replaced = region.inner_len(),
        "located README region"
    );

    let updated = splice::splice(&current, &config.markers, &block)?;
    if updated == current {
        info!("target already up to date");
        return Ok(SyncOutcome::Unchanged { lines: block.len() });
    }

    target::write_target(&updated)?;
    info!(total_lines = updated.lines.len(), "target rewritten");
    Ok(SyncOutcome::Updated { lines: block.len() })
}
