pub mod module_loader;

use minipack_common::InputItem;
use minipack_error::{BuildDiagnostic, BuildResult};
use minipack_fs::OsFileSystem;
use module_loader::{ModuleLoader, ModuleLoaderOutput};

use crate::types::{SharedOptions, SharedResolver};

pub type ScanStageOutput = ModuleLoaderOutput;

pub struct ScanStage {
  fs: OsFileSystem,
  options: SharedOptions,
  resolver: SharedResolver,
}

impl ScanStage {
  pub fn new(fs: OsFileSystem, options: SharedOptions, resolver: SharedResolver) -> Self {
    Self { fs, options, resolver }
  }

  pub fn scan(&self) -> BuildResult<ScanStageOutput> {
    let Some(InputItem { import, .. }) = &self.options.input else {
      return Err(BuildDiagnostic::MissingInput.into());
    };

    let entry_path = self.resolver.resolve_entry(import).map_err(|err| {
      BuildDiagnostic::Resolution {
        specifier: import.clone(),
        importer: None,
        from_dir: self.options.cwd.clone(),
        reason: err.to_string(),
      }
    })?;

    ModuleLoader::new(&self.fs, &*self.resolver, self.options.cwd.clone()).build(&entry_path)
  }
}
