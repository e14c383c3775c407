//! Whole-body file writes with atomic finalize.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::temp_path;
use crate::error::{DmkError, Result};

/// Writes `data` to `<final_path>.part`, syncs, then renames it to `final_path`.
/// On failure the temp file is removed, so nothing appears under the final name.
pub fn write_atomically(final_path: &Path, data: &[u8]) -> Result<()> {
    let tmp = temp_path(final_path);
    let result = write_and_sync(&tmp, data).and_then(|()| std::fs::rename(&tmp, final_path));
    if let Err(source) = result {
        if let Err(e) = std::fs::remove_file(&tmp) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("failed to remove temp file {}: {}", tmp.display(), e);
            }
        }
        return Err(DmkError::Storage {
            path: final_path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

fn write_and_sync(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(data)?;
    file.sync_all()
}
