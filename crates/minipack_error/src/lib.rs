mod diagnostic;

use std::ops::{Deref, DerefMut};

pub use crate::diagnostic::BuildDiagnostic;

#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  /// Typed diagnostics carried by this error, skipping anything that isn't a `BuildDiagnostic`.
  pub fn diagnostics(&self) -> impl Iterator<Item = &BuildDiagnostic> {
    self.0.iter().filter_map(anyhow::Error::downcast_ref::<BuildDiagnostic>)
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<BuildDiagnostic> for BuildError {
  fn from(diagnostic: BuildDiagnostic) -> Self {
    Self(vec![diagnostic.into()])
  }
}

impl std::fmt::Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_diagnostics_are_recoverable() {
  let error = BuildError::from(vec![
    anyhow::anyhow!("untyped"),
    BuildDiagnostic::MissingInput.into(),
  ]);

  let diagnostics = error.diagnostics().collect::<Vec<_>>();
  assert_eq!(diagnostics.len(), 1);
  assert!(matches!(diagnostics[0], BuildDiagnostic::MissingInput));
  assert_eq!(error.to_string(), "untyped\nYou must supply options.input to minipack");
}
