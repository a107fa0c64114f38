//! Atomic file writes for exported result cards.
//!
//! The card is written to a temp file in the destination directory and then
//! renamed over the target, so a reader never sees a half-written card.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

/// Replace `path` with `bytes` in one rename.
///
/// The parent directory must already exist. When the platform refuses to
/// rename over an existing file, the old file is moved to `<name>.bak` first
/// and restored if the second attempt also fails.
pub fn atomic_write(path: impl AsRef<Path>, bytes: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let dir = target_dir(path);

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    match tmp.persist(path) {
        Ok(_) => {}
        Err(err) if path.exists() => {
            let backup = path.with_extension("bak");
            let _ = fs::remove_file(&backup);
            fs::rename(path, &backup)?;

            if let Err(retry) = err.file.persist(path) {
                let _ = fs::rename(&backup, path);
                return Err(retry.error);
            }
            if let Err(e) = fs::remove_file(&backup) {
                tracing::warn!(path = %backup.display(), "Failed to remove backup: {e}");
            }
        }
        Err(err) => return Err(err.error),
    }

    sync_dir(dir);
    debug!(path = %path.display(), bytes = bytes.len(), "Wrote file atomically");
    Ok(())
}

fn target_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Best effort: the rename is already durable on most filesystems.
fn sync_dir(dir: &Path) {
    if cfg!(unix)
        && let Err(e) = File::open(dir).and_then(|d| d.sync_all())
    {
        debug!(path = %dir.display(), "Directory sync failed: {e}");
    }
}
