// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/file.rs
//
// Output file handling: staged writes and best-effort cleanup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::error::{DocResult, LabelkitError};

/// A transient file that is removed when dropped unless persisted.
///
/// Removal is best-effort: failures are logged and never raised.
#[derive(Debug)]
pub struct TempFile {
    path: PathBuf,
    persisted: bool,
}

impl TempFile {
    /// Track an existing or soon-to-exist transient file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            persisted: false,
        }
    }

    /// Staging file next to `target` (`dir/.name.tmp`), on the same filesystem
    /// so the final rename is atomic.
    pub fn beside(target: &Path) -> Self {
        let name = target
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("output");
        let dir = target.parent().unwrap_or_else(|| Path::new(""));
        Self::new(dir.join(format!(".{name}.tmp")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move the transient file onto `target`, keeping it.
    pub fn persist(mut self, target: &Path) -> io::Result<()> {
        fs::rename(&self.path, target)?;
        self.persisted = true;
        Ok(())
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.persisted {
            remove_quietly(&self.path);
        }
    }
}

/// Remove a file, logging instead of failing.
pub fn remove_quietly(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => log::debug!("Removed transient file {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => log::debug!("Could not remove transient file {}: {e}", path.display()),
    }
}

/// Write every `(path, bytes)` pair or none of them.
///
/// All payloads are staged first; targets are only replaced once every
/// staging write succeeded. If a rename then fails, targets already moved
/// into place by this call are removed again. A file that existed before
/// under one of those names is not restored.
pub fn write_all(outputs: &[(PathBuf, Vec<u8>)]) -> DocResult<Vec<PathBuf>> {
    let mut staged = Vec::with_capacity(outputs.len());

    for (target, bytes) in outputs {
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LabelkitError::write(target, e))?;
        }
        let temp = TempFile::beside(target);
        fs::write(temp.path(), bytes).map_err(|e| LabelkitError::write(target, e))?;
        staged.push((temp, target));
    }

    let mut written: Vec<PathBuf> = Vec::with_capacity(staged.len());
    for (temp, target) in staged {
        if let Err(e) = temp.persist(target) {
            for done in &written {
                remove_quietly(done);
            }
            return Err(LabelkitError::write(target, e));
        }
        log::info!("Wrote {}", target.display());
        written.push(target.clone());
    }

    Ok(written)
}

/// Write a single file through a staging file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> DocResult<()> {
    write_all(&[(path.to_path_buf(), bytes.to_vec())]).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_file_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.png");
        fs::write(&path, b"x").unwrap();

        drop(TempFile::new(&path));
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_of_missing_file_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        drop(TempFile::new(dir.path().join("never-created")));
    }

    #[test]
    fn test_beside_stays_in_target_dir() {
        let temp = TempFile::beside(Path::new("/out/label.png"));
        assert_eq!(temp.path(), Path::new("/out/.label.png.tmp"));
    }

    #[test]
    fn test_write_all_leaves_no_staging_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("nested").join("b.pdf");

        let written = write_all(&[(a.clone(), vec![1, 2]), (b.clone(), vec![3])]).unwrap();

        assert_eq!(written, vec![a.clone(), b.clone()]);
        assert_eq!(fs::read(&a).unwrap(), vec![1, 2]);
        assert_eq!(fs::read(&b).unwrap(), vec![3]);
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_write_all_reports_unwritable_target() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"").unwrap();
        // A regular file cannot act as a parent directory.
        let target = blocker.join("out.png");

        let err = write_all(&[(target.clone(), vec![0])]).unwrap_err();
        assert!(matches!(err, LabelkitError::Write { ref path, .. } if *path == target));
    }

    #[test]
    fn test_failed_rename_rolls_back_earlier_targets() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("label.png");
        // A non-empty directory cannot be replaced by a file.
        let second = dir.path().join("label.pdf");
        fs::create_dir(&second).unwrap();
        fs::write(second.join("keep"), b"x").unwrap();

        let err = write_all(&[(first.clone(), vec![1]), (second.clone(), vec![2])]).unwrap_err();

        assert!(matches!(err, LabelkitError::Write { ref path, .. } if *path == second));
        assert!(!first.exists());
        let mut names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["label.pdf"]);
    }
}
