//! Daemon identity record: a PID file at a well-known path.
//!
//! Written once after the listener binds, removed at clean shutdown. It is a
//! supervisory artifact only (`kill $(cat /tmp/voxd.pid)`); nothing in the
//! request path reads it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write the PID file atomically using temp file + rename.
///
/// Rename is atomic on Unix, so a supervisor never observes a half-written
/// record even if it races a restart.
pub fn write_pidfile(path: &Path, pid: u32) -> io::Result<PathBuf> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let temp_path = path.with_extension("pid.tmp");
    fs::write(&temp_path, format!("{}\n", pid))?;
    fs::rename(&temp_path, path)?;

    Ok(path.to_path_buf())
}

/// Read the PID recorded at `path`.
pub fn read_pidfile(path: &Path) -> io::Result<u32> {
    let content = fs::read_to_string(path)?;
    content
        .trim()
        .parse::<u32>()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "missing or invalid PID"))
}

/// Delete the PID file (idempotent - no error if missing).
pub fn remove_pidfile(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
