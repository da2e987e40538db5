//! Filesystem helpers for replacing the store document atomically.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Write `data` to `destination` so readers see either the old or the new
/// contents, never a torn write.
///
/// The bytes go to a sibling temp file which is synced and then renamed over
/// the destination. The parent directory is created if missing.
///
/// # Errors
///
/// Returns an error if the temp file cannot be created, written, synced, or
/// renamed. The destination is left untouched in every failure case.
pub fn write_atomic(destination: &Path, data: &[u8]) -> io::Result<()> {
    let parent = match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let temp_path = temp_sibling(&parent, destination)?;
    let written = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .and_then(|mut file| {
            file.write_all(data)?;
            file.sync_all()
        });
    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    rename_with_fallback(&temp_path, destination)
}

fn temp_sibling(parent: &Path, destination: &Path) -> io::Result<PathBuf> {
    let filename = destination
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid store filename"))?;
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(io::Error::other)?
        .as_nanos();
    Ok(parent.join(format!(
        ".{}.{}.{}.tmp",
        filename,
        std::process::id(),
        nanos
    )))
}

/// Rename `temp_path` over `destination`, retrying after removing the
/// destination on platforms where rename refuses to replace.
///
/// The temp file is removed if the rename ultimately fails.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
