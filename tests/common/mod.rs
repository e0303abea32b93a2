#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Header used by most tests.
pub const HEADER: &str = "// LICENSE\n";

/// A scratch workspace with a `src/` tree and a header template next to it.
pub struct Workspace {
  pub dir: TempDir,
}

impl Workspace {
  /// Creates an empty `src/` directory and writes `header` to `header.txt`.
  pub fn new(header: &str) -> Result<Self> {
    let dir = TempDir::new()?;
    fs::create_dir(dir.path().join("src"))?;
    fs::write(dir.path().join("header.txt"), header)?;
    Ok(Self { dir })
  }

  pub fn root(&self) -> PathBuf {
    self.dir.path().join("src")
  }

  pub fn header(&self) -> PathBuf {
    self.dir.path().join("header.txt")
  }

  /// Writes `content` to `src/<rel>`, creating parent directories.
  pub fn write(&self, rel: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
    let path = self.root().join(rel);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
  }

  pub fn read(&self, rel: &str) -> Result<String> {
    Ok(fs::read_to_string(self.root().join(rel))?)
  }

  pub fn read_bytes(&self, rel: &str) -> Result<Vec<u8>> {
    Ok(fs::read(self.root().join(rel))?)
  }
}

/// Returns `path` as a `&str` for command arguments.
pub fn arg(path: &Path) -> &str {
  path.to_str().unwrap_or_default()
}
