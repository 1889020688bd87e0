use glob::glob;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{SplitError, SplitResult};

// @module: File and path utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Last component of a path given as text.
    ///
    /// Both `/` and `\` count as separators, since names stored inside
    /// bilingual files often come from Windows tools. A trailing separator
    /// yields an empty name.
    pub fn file_name_only(path: &str) -> &str {
        path.rsplit(['/', '\\']).next().unwrap_or(path)
    }

    /// Whether the argument contains glob metacharacters
    pub fn is_pattern(arg: &str) -> bool {
        arg.contains(['*', '?', '['])
    }

    /// Expand one command line argument to input files.
    ///
    /// Plain names are returned as given. A pattern that matches no file is
    /// also returned as given, so the failure to read it names the argument.
    pub fn expand_pattern(arg: &str) -> SplitResult<Vec<PathBuf>> {
        if !Self::is_pattern(arg) {
            return Ok(vec![PathBuf::from(arg)]);
        }

        let paths = glob(arg).map_err(|e| SplitError::Pattern {
            pattern: arg.to_string(),
            message: e.to_string(),
        })?;

        let mut files = Vec::new();
        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => warn!("Error resolving pattern {}: {}", arg, e),
            }
        }

        if files.is_empty() {
            files.push(PathBuf::from(arg));
        }

        Ok(files)
    }
}

