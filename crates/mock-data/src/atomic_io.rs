//! Atomic file write for exported datasets.
//!
//! The export CLI writes through a hidden temporary file in the target
//! directory and renames it into place, so a crashed or interrupted export
//! never leaves a half-written dataset behind.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::ExportError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to `path` inside `dir` atomically.
///
/// `path` must be a bare file name; the caller opens the parent directory as
/// a capability handle. The temp name mixes process ID, wall clock, and a
/// counter so concurrent exports into the same directory never collide.
pub(crate) fn write_atomic(dir: &Dir, path: &Utf8Path, contents: &str) -> Result<(), ExportError> {
    let mut components = path.components();
    let (Some(Utf8Component::Normal(file_name)), None) = (components.next(), components.next())
    else {
        return Err(ExportError::WriteError {
            path: path.to_path_buf(),
            message: "output path must be a bare file name".to_owned(),
        });
    };

    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let clock = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(".{}.tmp.{}.{clock}.{counter}", file_name, std::process::id());

    write_temp(dir, &tmp_name, path, contents)?;
    if let Err(err) = rename_into_place(dir, &tmp_name, file_name) {
        // Best-effort cleanup; the rename error is the one worth reporting.
        drop(dir.remove_file(&tmp_name));
        return Err(ExportError::WriteError {
            path: path.to_path_buf(),
            message: err.to_string(),
        });
    }
    sync_directory(dir);
    Ok(())
}

fn write_temp(
    dir: &Dir,
    tmp_name: &str,
    target: &Utf8Path,
    contents: &str,
) -> Result<(), ExportError> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let result = dir
        .open_with(tmp_name, &options)
        .and_then(|mut file| file.write_all(contents.as_bytes()).map(|()| file))
        .and_then(|file| file.sync_all());

    result.map_err(|err| {
        drop(dir.remove_file(tmp_name));
        ExportError::WriteError {
            path: target.with_file_name(tmp_name),
            message: err.to_string(),
        }
    })
}

#[cfg(windows)]
fn rename_into_place(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists, so remove it first.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_into_place(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn sync_directory(dir: &Dir) {
    // Best-effort durability for the rename itself.
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Ignore sync failures.
    }
}
