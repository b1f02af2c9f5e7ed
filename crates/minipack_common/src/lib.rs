mod bundler_options;
mod module;
mod types;

pub use bundler_options::{
  input_item::InputItem, normalized_bundler_options::NormalizedBundlerOptions, platform::Platform,
  BundlerOptions,
};

pub use crate::{
  module::{module_graph::ModuleGraph, module_record::ModuleRecord},
  types::{
    module_id::ModuleId,
    module_type::ModuleType,
    output_asset::OutputAsset,
    raw_idx::{ModuleIdx, ENTRY_MODULE_IDX},
  },
};
