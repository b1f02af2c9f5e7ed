use std::path::{Path, PathBuf};

use itertools::Itertools;
use oxc_resolver::{ResolveError, ResolveOptions as OxcResolverOptions, Resolver as OxcResolver};

use minipack_common::Platform;

use crate::ResolveSpecifier;

#[derive(Debug)]
pub struct Resolver {
  cwd: PathBuf,
  inner: OxcResolver,
}

impl Resolver {
  pub fn new(platform: Platform, cwd: PathBuf) -> Self {
    let mut condition_names = vec!["require".to_string(), "default".to_string()];

    match platform {
      Platform::Node => {
        condition_names.push("node".to_string());
      }
      Platform::Browser => {
        condition_names.push("browser".to_string());
      }
      Platform::Neutral => {}
    }

    condition_names = condition_names.into_iter().unique().collect();

    let main_fields = match platform {
      Platform::Node => vec!["main".to_string(), "module".to_string()],
      Platform::Browser => vec!["browser".to_string(), "module".to_string(), "main".to_string()],
      Platform::Neutral => vec![],
    };

    let alias_fields = match platform {
      Platform::Browser => vec![vec!["browser".to_string()]],
      _ => vec![],
    };

    let options = OxcResolverOptions {
      main_fields,
      alias_fields,
      // Lets builtins surface as `ResolveError::Builtin` instead of a confusing "not found".
      builtin_modules: matches!(platform, Platform::Node),
      condition_names,
      extensions: vec![".js".to_string(), ".cjs".to_string(), ".json".to_string()],
      ..Default::default()
    };

    Self { cwd, inner: OxcResolver::new(options) }
  }

  /// Resolves the user supplied entry relative to `cwd`.
  ///
  /// Handles `minipack main` -> `<CWD>/main.js`: a bare entry is tried as a package first and then
  /// as a path relative to `cwd`.
  pub fn resolve_entry(&self, input: &str) -> Result<PathBuf, ResolveError> {
    let resolution = self.inner.resolve(&self.cwd, input);

    let is_specifier_path_like =
      input.starts_with('.') || input.starts_with('/') || Path::new(input).is_absolute();

    match resolution {
      Err(_) if !is_specifier_path_like => {
        self.inner.resolve(&self.cwd, &format!("./{input}")).map(|info| info.full_path())
      }
      resolution => resolution.map(|info| info.full_path()),
    }
  }
}

impl ResolveSpecifier for Resolver {
  fn resolve(&self, specifier: &str, from_dir: &Path) -> anyhow::Result<PathBuf> {
    match self.inner.resolve(from_dir, specifier) {
      Ok(resolution) => Ok(resolution.full_path()),
      Err(ResolveError::Builtin { .. }) => {
        Err(anyhow::anyhow!("{specifier:?} is a builtin module and cannot be bundled"))
      }
      Err(err) => Err(err.into()),
    }
  }
}
