use crate::error::{BitpadError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// An isolated rendering target for composed preview documents.
pub trait RenderSurface {
    /// Replace the surface's content with `document`.
    fn present(&mut self, document: &str) -> Result<()>;

    /// Where the surface materializes, for surfaces that have a location.
    fn location(&self) -> Option<&Path> {
        None
    }
}

/// Writes the document to a file. The browser that opens it is its own
/// browsing context: scripts run, but nothing outside that document is
/// reachable from them.
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RenderSurface for FileSurface {
    fn present(&mut self, document: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(BitpadError::Io)?;
            }
        }
        fs::write(&self.path, document).map_err(BitpadError::Io)?;
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// Captures presented documents in memory for tests.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Default)]
pub struct MemorySurface {
    pub presented: Vec<String>,
}

#[cfg(any(test, feature = "test_utils"))]
impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&str> {
        self.presented.last().map(String::as_str)
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl RenderSurface for MemorySurface {
    fn present(&mut self, document: &str) -> Result<()> {
        self.presented.push(document.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_surface_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview/bit-test.html");
        let mut surface = FileSurface::new(path.clone());

        surface.present("<!DOCTYPE html><html></html>").unwrap();
        assert!(path.exists());
        assert_eq!(surface.location(), Some(path.as_path()));
    }

    #[test]
    fn presenting_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.html");
        let mut surface = FileSurface::new(path.clone());

        surface.present("first").unwrap();
        surface.present("second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
