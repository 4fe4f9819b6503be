// @module: File utilities for the conversion pipeline

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::AppError;

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Read a file into owned lines
    pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, AppError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AppError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Write lines to a file in one shot, one line per entry, overwriting
    /// any existing file. The file either gets all lines or none.
    pub fn write_lines<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<(), AppError> {
        let path = path.as_ref();
        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(path, content).map_err(|source| AppError::FileWrite {
            path: path.display().to_string(),
            source,
        })
    }

    // @generates: Output path for a converted input file
    pub fn output_path<P: AsRef<Path>>(input: P) -> PathBuf {
        let mut name = input.as_ref().as_os_str().to_os_string();
        name.push(".out");
        PathBuf::from(name)
    }
}
