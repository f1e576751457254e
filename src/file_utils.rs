use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Path of a locale's bundle within the messages directory
    pub fn bundle_path<P: AsRef<Path>>(messages_dir: P, locale: &str) -> PathBuf {
        messages_dir.as_ref().join(format!("{}.json", locale))
    }

    /// Write a string to a file atomically.
    ///
    /// The parent directory is created if needed. The content goes to a
    /// temp file in the destination directory first and is renamed over
    /// the target, so a failed run never leaves a truncated bundle
    /// behind. Overwrites any prior content.
    pub fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
        let path = path.as_ref();
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::ensure_dir(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        io::Write::write_all(&mut tmp, content.as_bytes())?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
