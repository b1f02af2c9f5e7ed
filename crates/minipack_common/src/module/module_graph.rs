use oxc_index::IndexVec;

use crate::{ModuleId, ModuleIdx, ModuleRecord, ENTRY_MODULE_IDX};

/// Every module reachable from the entry, stored in discovery order so that a module's position
/// is its `ModuleIdx`.
///
/// Holds exactly one record per canonical path; the module loader is the only producer.
#[derive(Debug, Default)]
pub struct ModuleGraph {
  pub modules: IndexVec<ModuleIdx, ModuleRecord>,
}

impl ModuleGraph {
  pub fn new(modules: IndexVec<ModuleIdx, ModuleRecord>) -> Self {
    debug_assert!(modules.iter_enumerated().all(|(idx, module)| idx == module.idx));
    Self { modules }
  }

  pub fn entry(&self) -> Option<&ModuleRecord> {
    self.modules.get(ENTRY_MODULE_IDX)
  }

  pub fn get(&self, idx: ModuleIdx) -> Option<&ModuleRecord> {
    self.modules.get(idx)
  }

  pub fn find_by_id(&self, id: &ModuleId) -> Option<&ModuleRecord> {
    self.modules.iter().find(|module| &module.id == id)
  }

  pub fn iter(&self) -> impl Iterator<Item = &ModuleRecord> {
    self.modules.iter()
  }

  pub fn len(&self) -> usize {
    self.modules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.modules.is_empty()
  }
}

impl std::ops::Index<ModuleIdx> for ModuleGraph {
  type Output = ModuleRecord;

  fn index(&self, idx: ModuleIdx) -> &Self::Output {
    &self.modules[idx]
  }
}
