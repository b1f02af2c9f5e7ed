use minipack_common::OutputAsset;

#[derive(Debug, Default)]
pub struct BundleOutput {
  /// Always a single bundle for a single entry.
  pub assets: Vec<OutputAsset>,
  pub warnings: Vec<anyhow::Error>,
}

impl BundleOutput {
  pub fn asset(&self) -> Option<&OutputAsset> {
    self.assets.first()
  }
}
