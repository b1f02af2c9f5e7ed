use std::sync::Arc;

use minipack_common::BundlerOptions;
use minipack_error::{BuildDiagnostic, BuildResult};
use minipack_fs::{FileSystem, OsFileSystem};
use minipack_resolver::Resolver;

use crate::{
  generate_stage::GenerateStage,
  scan_stage::{ScanStage, ScanStageOutput},
  types::{bundle_output::BundleOutput, SharedOptions, SharedResolver},
  utils::normalize_options::normalize_options,
};

pub struct Bundler {
  pub(crate) fs: OsFileSystem,
  pub(crate) options: SharedOptions,
  pub(crate) resolver: SharedResolver,
}

impl Bundler {
  pub fn new(options: BundlerOptions) -> BuildResult<Self> {
    let options = normalize_options(options)?;
    let resolver: SharedResolver = Resolver::new(options.platform, options.cwd.clone()).into();

    Ok(Self { fs: OsFileSystem, options: Arc::new(options), resolver })
  }

  pub fn options(&self) -> &SharedOptions {
    &self.options
  }

  /// Builds the module graph without rendering anything.
  pub fn scan(&self) -> BuildResult<ScanStageOutput> {
    ScanStage::new(self.fs, Arc::clone(&self.options), Arc::clone(&self.resolver)).scan()
  }

  /// Builds the graph and renders the bundle in memory.
  pub fn generate(&self) -> BuildResult<BundleOutput> {
    let ScanStageOutput { module_graph, warnings } = self.scan()?;

    let asset = GenerateStage::new(&module_graph, &self.options).generate();

    Ok(BundleOutput { assets: vec![asset], warnings })
  }

  /// Same as `generate`, then writes the bundle to `file`, or into `dir` named after
  /// `entry_filenames`.
  pub fn write(&self) -> BuildResult<BundleOutput> {
    let output = self.generate()?;

    for asset in &output.assets {
      let dest = self.options.cwd.join(&asset.filename);
      if let Some(parent) = dest.parent() {
        self
          .fs
          .create_dir_all(parent)
          .map_err(|source| BuildDiagnostic::Write { path: parent.to_path_buf(), source })?;
      }
      self
        .fs
        .write(&dest, asset.content_as_bytes())
        .map_err(|source| BuildDiagnostic::Write { path: dest.clone(), source })?;
      tracing::debug!("Wrote {}", dest.display());
    }

    Ok(output)
  }
}
