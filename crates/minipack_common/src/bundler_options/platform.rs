/// Which host the bundle targets. Only affects how bare specifiers resolve.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
  /// Resolve with the `node` condition and `main` before `module`.
  #[default]
  Node,
  /// Honor the `browser` field and condition.
  Browser,
  /// Only the `default` condition, no main fields.
  Neutral,
}
