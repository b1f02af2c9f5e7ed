// An wrapper around the `oxc_resolver` crate to provide a more minipack-specific API.

mod resolver;

use std::path::{Path, PathBuf};

pub use crate::resolver::Resolver;
pub use oxc_resolver::ResolveError;

/// Turns an import specifier into the absolute path of the module it names.
///
/// Implementations follow the host's module resolution rules (extension inference, package entry
/// points, ...). `from_dir` is the directory of the importing module.
pub trait ResolveSpecifier {
  fn resolve(&self, specifier: &str, from_dir: &Path) -> anyhow::Result<PathBuf>;
}
