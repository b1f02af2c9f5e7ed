use std::path::PathBuf;

use crate::{InputItem, Platform};

#[derive(Debug)]
pub struct NormalizedBundlerOptions {
  // --- Input
  pub input: Option<InputItem>,
  pub cwd: PathBuf,
  pub platform: Platform,

  // --- Output
  pub entry_filenames: String,
  pub dir: String,
  pub file: Option<String>,
}

impl NormalizedBundlerOptions {
  /// Where `write` puts the bundle, relative to `cwd` unless absolute. `file` wins over `dir`.
  pub fn output_path(&self, entry_name: &str) -> PathBuf {
    match &self.file {
      Some(file) => self.cwd.join(file),
      None => self.cwd.join(&self.dir).join(self.entry_filenames.replace("[name]", entry_name)),
    }
  }
}

#[test]
fn test_output_path() {
  let mut options = NormalizedBundlerOptions {
    input: None,
    cwd: PathBuf::from("/project"),
    platform: Platform::Node,
    entry_filenames: "[name].bundle.js".to_string(),
    dir: "dist".to_string(),
    file: None,
  };
  assert_eq!(options.output_path("entry"), PathBuf::from("/project/dist/entry.bundle.js"));

  options.file = Some("out/app.js".to_string());
  assert_eq!(options.output_path("entry"), PathBuf::from("/project/out/app.js"));
}
