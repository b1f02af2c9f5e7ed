use std::{
  io,
  path::{Path, PathBuf},
};

/// The file system operations the bundler needs, so module graphs can be built from disk or from
/// memory alike.
pub trait FileSystem: Send + Sync {
  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  /// Returns the canonical absolute form of `path`. Two paths naming the same file must
  /// canonicalize to the same value, since module identity is keyed by it.
  fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

  fn create_dir_all(&self, path: &Path) -> io::Result<()>;

  fn exists(&self, path: &Path) -> bool;

  fn is_file(&self, path: &Path) -> bool;
}
