//! Runs a `ModuleGraph` whose modules are compiled to Rust closures instead of being spliced into
//! a JavaScript bundle. Loading semantics match the bundle runtime exactly:
//!
//! - a module's factory runs at most once per runtime, the first time it is required;
//! - every `require` of a module observes the same exports handle;
//! - requiring a module that is still running returns its partially populated exports.

mod module_namespace;
mod module_runtime;
mod module_state;

pub use crate::{
  module_namespace::{Exports, ModuleNamespace},
  module_runtime::{ModuleFactory, ModuleRuntime, RequireContext},
  module_state::{ModuleState, ModuleStatus},
};
