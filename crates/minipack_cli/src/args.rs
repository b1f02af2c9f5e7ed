use std::path::PathBuf;

use clap::Args;

use crate::types::platform::Platform;

#[derive(Args)]
pub struct InputArgs {
  /// Directory relative paths are resolved against. Defaults to the current directory.
  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// Entry module, e.g. `./src/main.js` or `src/main`.
  #[clap(long, short)]
  pub input: Option<String>,

  #[clap(long, short)]
  pub platform: Option<Platform>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub dir: Option<String>,

  /// Write the bundle to this file instead of into `--dir`.
  #[clap(long, short = 'o')]
  pub file: Option<String>,

  /// Output filename pattern inside `--dir`, `[name]` is replaced by the entry name.
  #[clap(long)]
  pub entry_filenames: Option<String>,

  /// Print the bundle instead of writing it.
  #[clap(long, conflicts_with_all = ["dir", "file"])]
  pub stdout: bool,
}

#[derive(Args)]
pub struct LogArgs {
  /// Don't print warnings or the output summary.
  #[clap(long, short)]
  pub silent: bool,
}
