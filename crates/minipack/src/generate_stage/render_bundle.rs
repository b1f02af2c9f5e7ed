use minipack_common::{ModuleGraph, ModuleRecord, ModuleType};
use minipack_utils::ecmascript::{hashbang_len, to_property_key};

use crate::RUNTIME_SOURCE;

const FACTORY_PRELUDE: &str = ": [function (module, exports, require) {\n";

/// Packs `graph` into a single self-executing script.
///
/// Module sources are spliced verbatim into factory bodies; only ids and specifiers are emitted,
/// never paths. The output depends on nothing but the graph, so equal graphs give equal bundles.
pub fn render_bundle(graph: &ModuleGraph) -> String {
  let runtime = RUNTIME_SOURCE.trim_end();
  let size_hint = runtime.len()
    + graph.iter().map(|module| module.source.len() + FACTORY_PRELUDE.len() + 32).sum::<usize>();
  let mut output = String::with_capacity(size_hint);

  // A hashbang is only legal as the very first line.
  if let Some(entry) = graph.entry() {
    if let Some(len) = hashbang_len(&entry.source) {
      output.push_str(&entry.source[..len]);
      output.push('\n');
    }
  }

  output.push_str(runtime);
  output.push_str("({\n");
  for (index, module) in graph.iter().enumerate() {
    if index > 0 {
      output.push_str(",\n");
    }
    render_module(&mut output, module);
  }
  output.push_str("\n});\n");

  output
}

fn render_module(output: &mut String, module: &ModuleRecord) {
  let mut id = itoa::Buffer::new();
  output.push_str(id.format(module.idx.raw()));
  output.push_str(FACTORY_PRELUDE);

  match module.module_type {
    ModuleType::Js => {
      // Keep the line break after the hashbang so line numbers inside the factory stay put.
      let source =
        hashbang_len(&module.source).map_or(&*module.source, |len| &module.source[len..]);
      output.push_str(source);
      if !source.ends_with('\n') {
        // A trailing line comment would swallow the closing brace.
        output.push('\n');
      }
    }
    ModuleType::Json => {
      output.push_str("module.exports = ");
      output.push_str(module.source.trim());
      output.push_str(";\n");
    }
  }

  output.push_str("}, ");
  render_specifier_map(output, module);
  output.push(']');
}

fn render_specifier_map(output: &mut String, module: &ModuleRecord) {
  if module.specifier_map.is_empty() {
    output.push_str("{}");
    return;
  }

  output.push_str("{ ");
  for (index, (specifier, target)) in module.specifier_map.iter().enumerate() {
    if index > 0 {
      output.push_str(", ");
    }
    output.push_str(&to_property_key(specifier));
    output.push_str(": ");
    output.push_str(itoa::Buffer::new().format(target.raw()));
  }
  output.push_str(" }");
}
