use std::{borrow::Cow, ffi::OsStr, path::Path};

use sugar_path::SugarPath;

pub trait PathExt {
  /// The path relative to `cwd` with forward slashes, used in logs and diagnostics only.
  fn stable_display(&self, cwd: &Path) -> String;

  fn representative_file_name(&self) -> Cow<str>;
}

impl PathExt for Path {
  fn stable_display(&self, cwd: &Path) -> String {
    if self.is_absolute() {
      self.relative(cwd).to_slash_lossy().into_owned()
    } else {
      self.to_slash_lossy().into_owned()
    }
  }

  /// It doesn't ensure the file name is a valid identifier in JS.
  fn representative_file_name(&self) -> Cow<str> {
    let file_name =
      self.file_stem().map_or_else(|| self.to_string_lossy(), |stem| stem.to_string_lossy());

    let file_name = match &*file_name {
      // "index": Node.js use `index` as a special name for directory import.
      "index" => self
        .parent()
        .and_then(Self::file_stem)
        .map(OsStr::to_string_lossy)
        .map_or(file_name, |parent_dir_name| parent_dir_name),
      _ => file_name,
    };

    file_name
  }
}

#[test]
fn test_representative_file_name() {
  let cwd = Path::new(".").join("project");
  let path = cwd.join("src").join("math.js");
  assert_eq!(path.representative_file_name(), "math");

  let path = cwd.join("math").join("index.js");
  assert_eq!(path.representative_file_name(), "math");
}

#[cfg(unix)]
#[test]
fn test_stable_display() {
  let cwd = Path::new("/project");
  assert_eq!(Path::new("/project/src/entry.js").stable_display(cwd), "src/entry.js");
  assert_eq!(Path::new("/other/lib.js").stable_display(cwd), "../other/lib.js");
  assert_eq!(Path::new("src/entry.js").stable_display(cwd), "src/entry.js");
}
