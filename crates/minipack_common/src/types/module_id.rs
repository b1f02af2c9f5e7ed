use std::path::Path;

use arcstr::ArcStr;
use minipack_utils::path_ext::PathExt;

/// `ModuleId` is the canonical absolute path of a module.
/// - Two `ModuleId`s are equal if and only if they name the same file.
/// - It never makes it into the bundle, only the `ModuleIdx` does.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct ModuleId(ArcStr);

impl ModuleId {
  pub fn new(value: impl Into<ArcStr>) -> Self {
    Self(value.into())
  }

  pub fn as_path(&self) -> &Path {
    Path::new(self.0.as_str())
  }

  /// Path relative to `cwd`, stable across machines. Used for logs and diagnostics.
  pub fn stabilize(&self, cwd: &Path) -> String {
    self.as_path().stable_display(cwd)
  }
}

impl std::ops::Deref for ModuleId {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl AsRef<str> for ModuleId {
  fn as_ref(&self) -> &str {
    self
  }
}

impl AsRef<Path> for ModuleId {
  fn as_ref(&self) -> &Path {
    self.as_path()
  }
}

impl From<ArcStr> for ModuleId {
  fn from(value: ArcStr) -> Self {
    Self::new(value)
  }
}

impl std::fmt::Display for ModuleId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}
