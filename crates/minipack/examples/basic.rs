use std::path::PathBuf;

use minipack::{Bundler, BundlerOptions};
use sugar_path::SugarPath;

fn main() {
  let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("examples/basic");

  let bundler = Bundler::new(BundlerOptions {
    input: Some("./entry.js".into()),
    cwd: Some(root.normalize()),
    ..Default::default()
  })
  .expect("Failed to create bundler");

  match bundler.write() {
    Ok(output) => {
      for asset in &output.assets {
        eprintln!("{} ({} modules)", asset.filename, asset.module_count);
      }
    }
    Err(errors) => eprintln!("{errors}"),
  }
}
