use crate::ports::outbound::OutputPresenter;
use crate::shared::error::BomError;
use crate::shared::security::validate_output_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter writing the rendered document to a file
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: String) -> BomError {
        BomError::FileWriteError {
            path: self.output_path.clone(),
            details,
        }
    }

    /// The parent directory must already exist; it is never created.
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(self
                    .write_error(format!(
                        "Parent directory does not exist: {}",
                        parent.display()
                    ))
                    .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        validate_output_not_symlink(&self.output_path)?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter writing the rendered document to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        write_document(&mut io::stdout().lock(), content)
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

/// Writes `content` and terminates it with a newline if it lacks one.
fn write_document(out: &mut impl Write, content: &str) -> io::Result<()> {
    out.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("bom.json");

        FileSystemWriter::new(output_path.clone())
            .present("{\"compositions\": []}")
            .unwrap();

        assert_eq!(
            fs::read_to_string(&output_path).unwrap(),
            "{\"compositions\": []}"
        );
    }

    #[test]
    fn test_file_writer_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("bom.md");
        fs::write(&output_path, "old").unwrap();

        FileSystemWriter::new(output_path.clone()).present("new").unwrap();
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "new");
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("missing").join("bom.json");

        let err = FileSystemWriter::new(output_path).present("x").unwrap_err();
        assert!(err.to_string().contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        fs::write(&target, "keep").unwrap();
        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = FileSystemWriter::new(link).present("overwrite").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep");
    }

    #[test]
    fn test_write_document_terminates_line() {
        let mut buffer = Vec::new();
        write_document(&mut buffer, "{}").unwrap();
        assert_eq!(buffer, b"{}\n");

        let mut buffer = Vec::new();
        write_document(&mut buffer, "# BOM\n").unwrap();
        assert_eq!(buffer, b"# BOM\n");
    }

    #[test]
    fn test_stdout_presenter() {
        assert!(StdoutPresenter::default().present("resolved\n").is_ok());
    }
}
