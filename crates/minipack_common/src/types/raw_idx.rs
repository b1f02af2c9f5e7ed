oxc_index::define_index_type! {
  #[derive(Default)]
  pub struct RawIdx = u32;
}

/// Position of a module in the `ModuleGraph` arena. Doubles as the module's id in the bundle.
pub type ModuleIdx = RawIdx;

/// The entry module is always the first one discovered.
pub const ENTRY_MODULE_IDX: ModuleIdx = ModuleIdx::from_usize_unchecked(0);
