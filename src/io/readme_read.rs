use std::fs;
use std::path::Path;

use crate::error::{Result, SyncError};
use crate::model::Document;

/// Reads the README at `path` into a [`Document`].
pub fn read_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(SyncError::MissingInput(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    Ok(Document::parse(&text))
}
