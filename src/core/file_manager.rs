//! The single-responsibility counter-example and its recommended split.
//!
//! [`FileManager`] bundles reading, writing, and parsing into one type; a
//! change to any one concern forces a change to the type that owns all three.
//! [`FileReader`], [`FileWriter`], and [`FileParser`] carry one concern each.
//! Every body is a placeholder: arguments are validated, nothing touches the
//! filesystem.

use crate::utils::error::Result;
use crate::utils::validation::validate_path;

#[derive(Debug, Clone, Copy, Default)]
pub struct FileManager;

impl FileManager {
    pub fn new() -> Self {
        Self
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        validate_path("path", path)?;
        tracing::debug!("would read {}", path);
        Ok(String::new())
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        validate_path("path", path)?;
        tracing::debug!("would write {} bytes to {}", content.len(), path);
        Ok(())
    }

    pub fn parse_file(&self, path: &str) -> Result<Vec<String>> {
        validate_path("path", path)?;
        tracing::debug!("would parse {}", path);
        Ok(Vec::new())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FileReader;

impl FileReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        validate_path("path", path)?;
        Ok(String::new())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FileWriter;

impl FileWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        validate_path("path", path)?;
        let _ = content;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FileParser;

impl FileParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_file(&self, path: &str) -> Result<Vec<String>> {
        validate_path("path", path)?;
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_manager_returns_placeholder_values() {
        let manager = FileManager::new();

        assert_eq!(manager.read_file("input.txt").unwrap(), "");
        assert!(manager.write_file("output.txt", "content").is_ok());
        assert!(manager.parse_file("input.txt").unwrap().is_empty());
    }

    #[test]
    fn test_file_manager_rejects_empty_paths() {
        let manager = FileManager::new();

        assert!(manager.read_file("").is_err());
        assert!(manager.write_file("", "content").is_err());
        assert!(manager.parse_file("").is_err());
    }

    #[test]
    fn test_split_types_cover_the_same_operations() {
        assert_eq!(FileReader::new().read_file("input.txt").unwrap(), "");
        assert!(FileWriter::new().write_file("output.txt", "content").is_ok());
        assert!(FileParser::new().parse_file("input.txt").unwrap().is_empty());
    }
}
