use std::{ffi::OsStr, path::Path};

/// How a module's source becomes its exports.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ModuleType {
  /// A CommonJS script, spliced into its factory as is.
  #[default]
  Js,
  /// A JSON document, which becomes `module.exports`. Has no dependencies.
  Json,
}

impl ModuleType {
  pub fn from_path(path: &Path) -> Self {
    match path.extension().and_then(OsStr::to_str) {
      Some("json") => Self::Json,
      _ => Self::Js,
    }
  }
}

#[test]
fn test_from_path() {
  assert_eq!(ModuleType::from_path(Path::new("/project/data.json")), ModuleType::Json);
  assert_eq!(ModuleType::from_path(Path::new("/project/main.js")), ModuleType::Js);
  assert_eq!(ModuleType::from_path(Path::new("/project/main.cjs")), ModuleType::Js);
  assert_eq!(ModuleType::from_path(Path::new("/project/LICENSE")), ModuleType::Js);
}
