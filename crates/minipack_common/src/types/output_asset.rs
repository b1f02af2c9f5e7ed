#[derive(Debug, Clone)]
pub struct OutputAsset {
  pub filename: String,
  pub content: String,
  /// Number of modules packed into `content`.
  pub module_count: usize,
}

impl OutputAsset {
  pub fn content_as_bytes(&self) -> &[u8] {
    self.content.as_bytes()
  }
}
