#![allow(dead_code)]

use std::{
  path::{Path, PathBuf},
  process::Command,
};

use minipack::{BuildResult, FileSystem, ModuleLoader, ModuleLoaderOutput, ResolveSpecifier};
use minipack_fs::MemoryFileSystem;
use sugar_path::SugarPath;

pub const CWD: &str = "/project";

/// Relative and absolute specifiers only, with `.js` and `index.js` inference.
pub struct MemoryResolver<'a> {
  fs: &'a MemoryFileSystem,
}

impl<'a> MemoryResolver<'a> {
  pub fn new(fs: &'a MemoryFileSystem) -> Self {
    Self { fs }
  }
}

impl ResolveSpecifier for MemoryResolver<'_> {
  fn resolve(&self, specifier: &str, from_dir: &Path) -> anyhow::Result<PathBuf> {
    let is_path_like =
      specifier.starts_with("./") || specifier.starts_with("../") || specifier.starts_with('/');
    if !is_path_like {
      anyhow::bail!("Cannot find module '{specifier}'");
    }

    let base = from_dir.join(specifier).normalize();
    let candidates =
      [base.clone(), PathBuf::from(format!("{}.js", base.display())), base.join("index.js")];
    candidates
      .into_iter()
      .find(|candidate| self.fs.is_file(candidate))
      .ok_or_else(|| anyhow::anyhow!("Cannot find module '{specifier}'"))
  }
}

/// Builds the graph of `entry` over an in-memory project rooted at `CWD`.
pub fn build_graph(files: &[(&str, &str)], entry: &str) -> BuildResult<ModuleLoaderOutput> {
  let fs = MemoryFileSystem::new(files);
  let resolver = MemoryResolver::new(&fs);
  ModuleLoader::new(&fs, &resolver, PathBuf::from(CWD)).build(Path::new(entry))
}

/// Writes `files` under a fresh temp dir.
pub fn project(files: &[(&str, &str)]) -> tempfile::TempDir {
  let dir = tempfile::tempdir().unwrap();
  for (path, content) in files {
    let path = dir.path().join(path);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
  }
  dir
}

pub fn has_node() -> bool {
  Command::new("node").arg("--version").output().is_ok_and(|output| output.status.success())
}

pub struct NodeOutput {
  pub success: bool,
  pub stdout: String,
  pub stderr: String,
}

/// Runs the script at `path` with node.
pub fn run_node(path: &Path) -> NodeOutput {
  let output = Command::new("node").arg(path).output().unwrap();
  NodeOutput {
    success: output.status.success(),
    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
  }
}
