pub mod render_bundle;

use minipack_common::{ModuleGraph, OutputAsset};
use minipack_utils::path_ext::PathExt;

use crate::types::SharedOptions;
use render_bundle::render_bundle;

pub struct GenerateStage<'a> {
  module_graph: &'a ModuleGraph,
  options: &'a SharedOptions,
}

impl<'a> GenerateStage<'a> {
  pub fn new(module_graph: &'a ModuleGraph, options: &'a SharedOptions) -> Self {
    Self { module_graph, options }
  }

  /// Packs the graph into the single output asset. `filename` is where `write` would put it,
  /// relative to `cwd`.
  #[tracing::instrument(level = "debug", skip_all)]
  pub fn generate(&self) -> OutputAsset {
    let content = render_bundle(self.module_graph);
    let filename = self.options.output_path(&self.entry_name()).stable_display(&self.options.cwd);

    tracing::info!(
      "Rendered {filename} with {} modules ({} bytes)",
      self.module_graph.len(),
      content.len()
    );

    OutputAsset { filename, content, module_count: self.module_graph.len() }
  }

  /// `[name]` in `entry_filenames`: the input's explicit name, or one derived from the entry file.
  fn entry_name(&self) -> String {
    if let Some(name) = self.options.input.as_ref().and_then(|input| input.name.clone()) {
      return name;
    }
    self
      .module_graph
      .entry()
      .map_or_else(|| "bundle".to_string(), |entry| {
        entry.id.as_path().representative_file_name().into_owned()
      })
  }
}
