//! Temporary directory with helpers for writing inputs and reading outputs.

use std::fs;
use std::path::{Path, PathBuf};

use palette_dither::PixelBuffer;
use sprite_forge::png_io::write_png;
use tempfile::TempDir;

/// A scratch directory removed when the test ends
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `image` as a PNG and return its path
    pub fn png(&self, name: &str, image: &PixelBuffer) -> PathBuf {
        let path = self.path(name);
        write_png(&path, image).expect("Failed to write fixture PNG");
        path
    }

    /// Write a text or binary file and return its path
    pub fn file(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }

    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.path(name)).unwrap_or_else(|e| panic!("Failed to read {name}: {e}"))
    }
}
