use std::{
  io::{self, Read, Write},
  path::{Path, PathBuf},
};

use sugar_path::SugarPath;
use vfs::{FileSystem as _, MemoryFS, VfsError, VfsFileType};

use crate::FileSystem;

/// An in-memory file system. Paths are normalized lexically, there are no symlinks.
#[derive(Debug)]
pub struct MemoryFileSystem {
  fs: MemoryFS,
}

impl Default for MemoryFileSystem {
  fn default() -> Self {
    Self { fs: MemoryFS::new() }
  }
}

impl MemoryFileSystem {
  /// Creates a file system seeded with `files`, creating parent directories as needed.
  pub fn new(files: &[(&str, &str)]) -> Self {
    let fs = Self::default();
    for (path, content) in files {
      fs.add_file(Path::new(path), content).unwrap_or_else(|err| panic!("{path}: {err}"));
    }
    fs
  }

  /// Add a file, creating its parent directories.
  pub fn add_file(&self, path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
      self.create_dir_all(parent)?;
    }
    self.write(path, content.as_bytes())
  }
}

/// `vfs` addresses the root as "" and everything else as "/a/b".
fn to_vfs_path(path: &Path) -> String {
  let normalized = Path::new("/").join(path).normalize().to_slash_lossy().into_owned();
  if normalized == "/" { String::new() } else { normalized }
}

fn to_io_error(err: VfsError) -> io::Error {
  io::Error::new(io::ErrorKind::NotFound, err.to_string())
}

impl FileSystem for MemoryFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    let mut file = self.fs.open_file(&to_vfs_path(path)).map_err(to_io_error)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
  }

  fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
    let vfs_path = to_vfs_path(path);
    if self.fs.exists(&vfs_path).map_err(to_io_error)? {
      Ok(PathBuf::from(if vfs_path.is_empty() { "/" } else { vfs_path.as_str() }))
    } else {
      Err(io::Error::new(io::ErrorKind::NotFound, format!("{} does not exist", path.display())))
    }
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = self.fs.create_file(&to_vfs_path(path)).map_err(to_io_error)?;
    file.write_all(content)
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    let mut current = PathBuf::from("/");
    for component in Path::new(&to_vfs_path(path)).components().skip(1) {
      current.push(component);
      let vfs_path = to_vfs_path(&current);
      if !self.fs.exists(&vfs_path).map_err(to_io_error)? {
        self.fs.create_dir(&vfs_path).map_err(to_io_error)?;
      }
    }
    Ok(())
  }

  fn exists(&self, path: &Path) -> bool {
    self.fs.exists(&to_vfs_path(path)).unwrap_or(false)
  }

  fn is_file(&self, path: &Path) -> bool {
    self
      .fs
      .metadata(&to_vfs_path(path))
      .is_ok_and(|metadata| matches!(metadata.file_type, VfsFileType::File))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn read_back_written_files() {
    let fs = MemoryFileSystem::new(&[("/project/src/entry.js", "require('./math')")]);

    assert!(fs.exists(Path::new("/project/src")));
    assert!(fs.is_file(Path::new("/project/src/entry.js")));
    assert!(!fs.is_file(Path::new("/project/src")));
    assert_eq!(
      fs.read_to_string(Path::new("/project/src/entry.js")).unwrap(),
      "require('./math')"
    );
  }

  #[test]
  fn canonicalize_is_lexical() {
    let fs = MemoryFileSystem::new(&[("/project/src/math.js", "")]);

    assert_eq!(
      fs.canonicalize(Path::new("/project/lib/../src/./math.js")).unwrap(),
      PathBuf::from("/project/src/math.js")
    );
    assert_eq!(
      fs.canonicalize(Path::new("/project/src/missing.js")).unwrap_err().kind(),
      io::ErrorKind::NotFound
    );
  }
}
