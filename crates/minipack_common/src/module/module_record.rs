use arcstr::ArcStr;
use minipack_utils::{indexmap::FxIndexMap, rstr::Rstr};

use crate::{ModuleId, ModuleIdx, ModuleType};

/// One record per unique canonical path reachable from the entry.
#[derive(Debug)]
pub struct ModuleRecord {
  pub idx: ModuleIdx,
  pub id: ModuleId,
  /// `id` relative to the cwd, for logs and diagnostics only.
  pub stable_id: String,
  /// Derived from the extension of `id`.
  pub module_type: ModuleType,
  /// Raw source text. Never inspected past specifier extraction.
  pub source: ArcStr,
  /// Maps each specifier exactly as written in `source` to the module it resolves to. Insertion
  /// order follows extraction order.
  pub specifier_map: FxIndexMap<Rstr, ModuleIdx>,
}

impl ModuleRecord {
  pub fn new(idx: ModuleIdx, id: ModuleId, stable_id: String, source: ArcStr) -> Self {
    let module_type = ModuleType::from_path(id.as_path());
    Self { idx, id, stable_id, module_type, source, specifier_map: FxIndexMap::default() }
  }

  pub fn resolve_specifier(&self, specifier: &str) -> Option<ModuleIdx> {
    self.specifier_map.get(specifier).copied()
  }

  pub fn is_entry(&self) -> bool {
    self.idx == crate::ENTRY_MODULE_IDX
  }
}
