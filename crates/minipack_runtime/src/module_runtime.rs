use std::{cell::RefCell, rc::Rc};

use minipack_common::{ModuleGraph, ModuleIdx, ModuleRecord, ENTRY_MODULE_IDX};
use minipack_utils::{indexmap::FxIndexMap, rstr::Rstr};
use oxc_index::IndexVec;

use crate::{Exports, ModuleNamespace, ModuleState, ModuleStatus};

/// The compiled body of a module. Receives the module's exports and its local `require` through
/// the `RequireContext`.
pub type ModuleFactory = Rc<dyn Fn(&RequireContext<'_>) -> anyhow::Result<()>>;

struct RuntimeModule {
  factory: ModuleFactory,
  specifier_map: FxIndexMap<Rstr, ModuleIdx>,
}

pub struct ModuleRuntime {
  modules: IndexVec<ModuleIdx, RuntimeModule>,
  states: RefCell<IndexVec<ModuleIdx, ModuleState>>,
}

impl ModuleRuntime {
  /// `factory_for` is called once per module, in id order, to compile it.
  pub fn new(
    graph: &ModuleGraph,
    mut factory_for: impl FnMut(&ModuleRecord) -> ModuleFactory,
  ) -> Self {
    let modules = graph
      .iter()
      .map(|module| RuntimeModule {
        factory: factory_for(module),
        specifier_map: module.specifier_map.clone(),
      })
      .collect::<IndexVec<ModuleIdx, _>>();
    let states = modules.iter().map(|_| ModuleState::Unloaded).collect();

    Self { modules, states: RefCell::new(states) }
  }

  /// Requires the entry module, the equivalent of executing the bundle.
  pub fn run(&self) -> anyhow::Result<Exports> {
    self.require(ENTRY_MODULE_IDX)
  }

  pub fn require(&self, idx: ModuleIdx) -> anyhow::Result<Exports> {
    let Some(module) = self.modules.get(idx) else {
      return Err(anyhow::anyhow!("Module {} is not part of the graph", idx.index()));
    };

    let exports = {
      let mut states = self.states.borrow_mut();
      match &states[idx] {
        ModuleState::Loading(exports) => {
          tracing::trace!("Module {} is still loading, returning partial exports", idx.index());
          return Ok(Rc::clone(exports));
        }
        ModuleState::Loaded(exports) => return Ok(Rc::clone(exports)),
        ModuleState::Unloaded => {}
      }
      // Must be visible before the factory runs, it's what ends circular requires.
      let exports = Rc::new(ModuleNamespace::default());
      states[idx] = ModuleState::Loading(Rc::clone(&exports));
      exports
    };

    let factory = Rc::clone(&module.factory);
    let context = RequireContext { runtime: self, idx, exports: &exports };

    match factory(&context) {
      Ok(()) => {
        self.states.borrow_mut()[idx] = ModuleState::Loaded(Rc::clone(&exports));
        Ok(exports)
      }
      Err(err) => {
        self.states.borrow_mut()[idx] = ModuleState::Unloaded;
        Err(err)
      }
    }
  }

  pub fn status(&self, idx: ModuleIdx) -> ModuleStatus {
    self.states.borrow().get(idx).map_or(ModuleStatus::Unloaded, ModuleState::status)
  }

  /// Exports of `idx` if it has started loading.
  pub fn exports(&self, idx: ModuleIdx) -> Option<Exports> {
    self.states.borrow().get(idx).and_then(ModuleState::exports)
  }
}

/// What a running factory sees: its own exports and a `require` scoped to its specifier map.
pub struct RequireContext<'rt> {
  runtime: &'rt ModuleRuntime,
  idx: ModuleIdx,
  exports: &'rt Exports,
}

impl RequireContext<'_> {
  pub fn exports(&self) -> &Exports {
    self.exports
  }

  pub fn runtime(&self) -> &ModuleRuntime {
    self.runtime
  }

  /// Resolves `specifier` through the specifier map captured at build time, no resolution logic
  /// runs here.
  pub fn require(&self, specifier: &str) -> anyhow::Result<Exports> {
    let target = self.runtime.modules[self.idx].specifier_map.get(specifier).copied();
    match target {
      Some(target) => self.runtime.require(target),
      None => Err(anyhow::anyhow!("Cannot find module '{specifier}'")),
    }
  }
}
