use std::fs;
use std::path::Path;

use crate::error::{Result, SyncError};
use crate::model::TargetFile;

/// Reads the target source file at `path`.
pub fn read_target(path: &Path) -> Result<TargetFile> {
    if !path.exists() {
        return Err(SyncError::MissingInput(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    Ok(TargetFile::parse(path, &text))
}

/// Overwrites the file the target was read from with its rendered contents.
///
/// The write is not atomic: an interrupted write can leave the file truncated.
pub fn write_target(target: &TargetFile) -> Result<()> {
    fs::write(&target.path, target.render())?;
    Ok(())
}
