use anyhow::Context;
use minipack_common::{BundlerOptions, NormalizedBundlerOptions};
use minipack_error::BuildResult;

pub fn normalize_options(raw_options: BundlerOptions) -> BuildResult<NormalizedBundlerOptions> {
  let cwd = match raw_options.cwd {
    Some(cwd) => cwd,
    None => std::env::current_dir().context("Failed to get current dir")?,
  };

  Ok(NormalizedBundlerOptions {
    input: raw_options.input,
    cwd,
    platform: raw_options.platform.unwrap_or_default(),
    entry_filenames: raw_options.entry_filenames.unwrap_or_else(|| "[name].js".to_string()),
    dir: raw_options.dir.unwrap_or_else(|| "dist".to_string()),
    file: raw_options.file,
  })
}
