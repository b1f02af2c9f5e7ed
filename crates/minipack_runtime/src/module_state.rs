use std::rc::Rc;

use crate::Exports;

/// Per-module loader state. Transitions only go `Unloaded -> Loading -> Loaded`, except that a
/// factory failure sends a `Loading` module back to `Unloaded`.
#[derive(Debug, Default)]
pub enum ModuleState {
  #[default]
  Unloaded,
  /// The factory is running. The exports container is already allocated so that circular
  /// requires can be handed the partial exports.
  Loading(Exports),
  Loaded(Exports),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleStatus {
  Unloaded,
  Loading,
  Loaded,
}

impl ModuleState {
  pub fn status(&self) -> ModuleStatus {
    match self {
      Self::Unloaded => ModuleStatus::Unloaded,
      Self::Loading(_) => ModuleStatus::Loading,
      Self::Loaded(_) => ModuleStatus::Loaded,
    }
  }

  pub fn exports(&self) -> Option<Exports> {
    match self {
      Self::Unloaded => None,
      Self::Loading(exports) | Self::Loaded(exports) => Some(Rc::clone(exports)),
    }
  }
}
