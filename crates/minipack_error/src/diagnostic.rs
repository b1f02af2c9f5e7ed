use std::path::{Path, PathBuf};

/// Fatal conditions a build can run into. None of them are retried: each one points at a static
/// defect in the input program or its environment.
#[derive(Debug, thiserror::Error)]
pub enum BuildDiagnostic {
  #[error("You must supply options.input to minipack")]
  MissingInput,

  #[error("Could not read module {}: {source}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// `importer` is `None` when the entry itself could not be resolved.
  #[error("Could not resolve {specifier:?} from {}: {reason}", origin(.importer.as_ref(), .from_dir))]
  Resolution { specifier: String, importer: Option<PathBuf>, from_dir: PathBuf, reason: String },

  #[error("Failed to parse {}: {message}", .path.display())]
  Parse { path: PathBuf, message: String },

  #[error("Could not write {}: {source}", .path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

fn origin(importer: Option<&PathBuf>, from_dir: &Path) -> String {
  importer.map_or(from_dir, PathBuf::as_path).display().to_string()
}

impl BuildDiagnostic {
  pub fn kind(&self) -> &'static str {
    match self {
      Self::MissingInput => "MISSING_INPUT",
      Self::Read { .. } => "READ_ERROR",
      Self::Resolution { .. } => "RESOLUTION_ERROR",
      Self::Parse { .. } => "PARSE_ERROR",
      Self::Write { .. } => "WRITE_ERROR",
    }
  }
}

#[test]
fn test_resolution_message_names_the_importer() {
  let diagnostic = BuildDiagnostic::Resolution {
    specifier: "./missing".to_string(),
    importer: Some(PathBuf::from("/project/src/entry.js")),
    from_dir: PathBuf::from("/project/src"),
    reason: "Cannot find module './missing'".to_string(),
  };

  assert_eq!(diagnostic.kind(), "RESOLUTION_ERROR");
  assert_eq!(
    diagnostic.to_string(),
    "Could not resolve \"./missing\" from /project/src/entry.js: Cannot find module './missing'"
  );
}
