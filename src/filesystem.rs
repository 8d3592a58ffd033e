// src/filesystem.rs
use crate::errors::CipherError;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::fs;
use std::io::{self, Read};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Paths currently being written by this process
static FILE_LOCKS: Lazy<DashMap<PathBuf, ()>> = Lazy::new(DashMap::new);

pub const TEXT_FILE_MODE: u32 = 0o644;
pub const TEXT_EXTENSION: &str = "txt";

/// Whole-file UTF-8 text operations
pub struct FileManager;

impl FileManager {
    pub fn new() -> Self {
        Self
    }

    /// Refuse to replace an existing file unless forced
    pub fn overwrite_check(&self, path: &Path, force: bool) -> Result<(), CipherError> {
        if !force && path.exists() {
            return Err(CipherError::FileExists(format!(
                "Output file {} already exists. Use --force to overwrite",
                path.display()
            )));
        }
        Ok(())
    }

    /// Write file atomically with exclusive lock
    pub fn write_atomic(&self, path: &Path, content: &[u8], file_mode: u32) -> Result<(), CipherError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let _lock = FileLockGuard::acquire(path)?;

        // Write to temporary file first, then rename over the target
        let temp_path = temp_path_for(path);
        let written = fs::write(&temp_path, content)
            .map_err(CipherError::from)
            .and_then(|_| self.set_permissions(&temp_path, file_mode))
            .and_then(|_| fs::rename(&temp_path, path).map_err(CipherError::from));

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }

    /// List text files (.txt extension), sorted by name
    pub fn list_text_files(&self, dir: &Path) -> Result<Vec<PathBuf>, CipherError> {
        if !dir.is_dir() {
            return Err(CipherError::InvalidPath(format!(
                "Not a directory: {}",
                dir.display()
            )));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(TEXT_EXTENSION) {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Parse content from various input sources
    pub fn parse_content(&self, input: &str) -> Result<String, CipherError> {
        match input {
            "-" => self.read_stdin(),
            input if input.starts_with('@') => {
                let content = self.read_file_content(Path::new(&input[1..]))?;
                Ok(strip_line_endings(&content).to_string())
            }
            input => Ok(input.to_string()),
        }
    }

    pub fn read_file_content(&self, path: &Path) -> Result<String, CipherError> {
        if !path.exists() {
            return Err(CipherError::InvalidPath(format!(
                "File not found: {}",
                path.display()
            )));
        }

        fs::read_to_string(path).map_err(|e| {
            CipherError::InvalidPath(format!("Failed to read {}: {}", path.display(), e))
        })
    }

    // Private helper methods
    fn read_stdin(&self) -> Result<String, CipherError> {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(strip_line_endings(&buffer).to_string())
    }

    fn set_permissions(&self, path: &Path, mode: u32) -> Result<(), CipherError> {
        let permissions = fs::Permissions::from_mode(mode);
        fs::set_permissions(path, permissions)?;
        Ok(())
    }
}

impl Default for FileManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop trailing `\n` / `\r\n` terminators an editor may have added
pub fn strip_line_endings(content: &str) -> &str {
    content.trim_end_matches(['\n', '\r'])
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Stable key for `path`, also for files that do not exist yet
fn lock_key(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

/// File lock guard for atomic operations
struct FileLockGuard {
    path: PathBuf,
}

impl FileLockGuard {
    fn acquire(path: &Path) -> Result<Self, CipherError> {
        let normalized_path = lock_key(path);

        match FILE_LOCKS.entry(normalized_path.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(CipherError::Lock(format!(
                "File {} is already locked",
                path.display()
            ))),
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(());
                tracing::trace!(path = %normalized_path.display(), "acquired file lock");
                Ok(Self {
                    path: normalized_path,
                })
            }
        }
    }
}

impl Drop for FileLockGuard {
    fn drop(&mut self) {
        FILE_LOCKS.remove(&self.path);
    }
}
