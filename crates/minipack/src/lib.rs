//! Packs a CommonJS entry and everything it `require`s into one self-executing script.
//!
//! ```no_run
//! use minipack::{Bundler, BundlerOptions};
//!
//! let bundler = Bundler::new(BundlerOptions {
//!   input: Some("./src/main.js".into()),
//!   ..Default::default()
//! })?;
//! let output = bundler.write()?;
//! # Ok::<(), minipack::BuildError>(())
//! ```

mod bundler;
mod generate_stage;
mod runtime;
mod scan_stage;
mod types;
mod utils;

pub use crate::{
  bundler::Bundler,
  generate_stage::render_bundle::render_bundle,
  runtime::RUNTIME_SOURCE,
  scan_stage::{
    module_loader::{ModuleLoader, ModuleLoaderOutput},
    ScanStageOutput,
  },
  types::bundle_output::BundleOutput,
};
pub use minipack_common::*;
pub use minipack_error::{BuildDiagnostic, BuildError, BuildResult};
pub use minipack_fs::{FileSystem, OsFileSystem};
pub use minipack_resolver::{ResolveSpecifier, Resolver};
