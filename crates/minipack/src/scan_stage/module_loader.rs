use std::collections::{hash_map::Entry, VecDeque};
use std::path::{Path, PathBuf};

use arcstr::ArcStr;
use minipack_common::{
  ModuleGraph, ModuleId, ModuleIdx, ModuleRecord, ModuleType, ENTRY_MODULE_IDX,
};
use minipack_ecmascript::{EcmaCompiler, ScanResult};
use minipack_error::{BuildDiagnostic, BuildResult};
use minipack_fs::FileSystem;
use minipack_resolver::ResolveSpecifier;
use oxc_index::IndexVec;
use rustc_hash::FxHashMap;

/// Discovers every module reachable from an entry, breadth first.
///
/// Modules are keyed by canonical path, so a path is read, scanned and given an id exactly once no
/// matter how many specifiers lead to it. This is also what makes cyclic graphs terminate.
pub struct ModuleLoader<'a> {
  fs: &'a dyn FileSystem,
  resolver: &'a dyn ResolveSpecifier,
  cwd: PathBuf,
  modules: IndexVec<ModuleIdx, ModuleRecord>,
  visited: FxHashMap<PathBuf, ModuleIdx>,
  queue: VecDeque<ModuleIdx>,
  warnings: Vec<anyhow::Error>,
}

#[derive(Debug)]
pub struct ModuleLoaderOutput {
  pub module_graph: ModuleGraph,
  pub warnings: Vec<anyhow::Error>,
}

impl<'a> ModuleLoader<'a> {
  pub fn new(fs: &'a dyn FileSystem, resolver: &'a dyn ResolveSpecifier, cwd: PathBuf) -> Self {
    Self {
      fs,
      resolver,
      cwd,
      modules: IndexVec::new(),
      visited: FxHashMap::default(),
      queue: VecDeque::new(),
      warnings: Vec::new(),
    }
  }

  /// Builds the graph rooted at `entry_path`. The entry gets `ENTRY_MODULE_IDX`, every other module
  /// gets the next id in discovery order.
  ///
  /// The first unreadable module, unparsable module or unresolvable specifier aborts the build.
  pub fn build(mut self, entry_path: &Path) -> BuildResult<ModuleLoaderOutput> {
    let entry_path = self.canonicalize(entry_path)?;
    let entry_idx = self.try_alloc_module(entry_path)?;
    debug_assert_eq!(entry_idx, ENTRY_MODULE_IDX);

    while let Some(idx) = self.queue.pop_front() {
      self.fetch_dependencies(idx)?;
    }

    tracing::info!("Module graph built with {} modules", self.modules.len());

    Ok(ModuleLoaderOutput {
      module_graph: ModuleGraph::new(self.modules),
      warnings: self.warnings,
    })
  }

  fn fetch_dependencies(&mut self, idx: ModuleIdx) -> BuildResult<()> {
    let importer = self.modules[idx].id.as_path().to_path_buf();

    if self.modules[idx].module_type == ModuleType::Json {
      // Validated here so that a broken document fails the build instead of the bundle.
      return serde_json::from_str::<serde_json::Value>(&self.modules[idx].source)
        .map(|_| ())
        .map_err(|err| BuildDiagnostic::Parse { path: importer, message: err.to_string() }.into());
    }

    let scanned = EcmaCompiler::scan(&self.modules[idx].source);
    let ScanResult { specifiers, dynamic_requires } = scanned
      .map_err(|err| BuildDiagnostic::Parse { path: importer.clone(), message: err.to_string() })?;

    if dynamic_requires > 0 {
      self.warnings.push(anyhow::anyhow!(
        "{} has {dynamic_requires} require call(s) with a non-literal argument, they will throw",
        self.modules[idx].stable_id
      ));
    }

    let from_dir = importer.parent().unwrap_or(&self.cwd).to_path_buf();

    for specifier in specifiers {
      let resolved = self.resolver.resolve(&specifier, &from_dir).map_err(|err| {
        BuildDiagnostic::Resolution {
          specifier: specifier.to_string(),
          importer: Some(importer.clone()),
          from_dir: from_dir.clone(),
          reason: err.to_string(),
        }
      })?;
      let resolved = self.canonicalize(&resolved)?;
      let target = self.try_alloc_module(resolved)?;
      self.modules[idx].specifier_map.insert(specifier, target);
    }

    Ok(())
  }

  /// Returns the id already assigned to `path`, or reads it and assigns the next one.
  fn try_alloc_module(&mut self, path: PathBuf) -> BuildResult<ModuleIdx> {
    match self.visited.entry(path) {
      Entry::Occupied(visited) => {
        let idx = *visited.get();
        tracing::trace!("Reusing module {} for {}", idx.index(), visited.key().display());
        Ok(idx)
      }
      Entry::Vacant(not_visited) => {
        let path = not_visited.key();
        let source = self
          .fs
          .read_to_string(path)
          .map_err(|source| BuildDiagnostic::Read { path: path.clone(), source })?;

        let idx = self.modules.next_idx();
        let id = ModuleId::new(ArcStr::from(path.to_string_lossy().as_ref()));
        let stable_id = id.stabilize(&self.cwd);
        tracing::debug!("Discovered module {} ({stable_id})", idx.index());

        self.modules.push(ModuleRecord::new(idx, id, stable_id, source.into()));
        self.queue.push_back(idx);

        Ok(*not_visited.insert(idx))
      }
    }
  }

  fn canonicalize(&self, path: &Path) -> BuildResult<PathBuf> {
    self
      .fs
      .canonicalize(path)
      .map_err(|source| BuildDiagnostic::Read { path: path.to_path_buf(), source }.into())
  }
}
