use std::{
  borrow::Borrow,
  fmt::Display,
  hash::{Hash, Hasher},
  ops::Deref,
};

use oxc::span::CompactStr;

/// Cheap-to-clone string used for import specifiers. Short specifiers are stored inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rstr(CompactStr);

impl Rstr {
  pub fn new(value: &str) -> Self {
    Self(CompactStr::new(value))
  }

  pub fn as_str(&self) -> &str {
    self.0.as_str()
  }
}

// Must hash like `str` for `Borrow<str>` lookups.
impl Hash for Rstr {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_str().hash(state);
  }
}

impl Borrow<str> for Rstr {
  fn borrow(&self) -> &str {
    self.as_str()
  }
}

impl Deref for Rstr {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    self.as_str()
  }
}

impl AsRef<str> for Rstr {
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

impl Display for Rstr {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl From<&str> for Rstr {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl From<String> for Rstr {
  fn from(value: String) -> Self {
    Self::new(&value)
  }
}

#[test]
fn test_lookup_by_str() {
  let mut map = crate::indexmap::FxIndexMap::default();
  map.insert(Rstr::new("./math"), 1);
  map.insert(Rstr::from("../lib/util.js".to_string()), 2);

  assert_eq!(map.get("./math"), Some(&1));
  assert_eq!(map.get("../lib/util.js"), Some(&2));
  assert_eq!(map.get("./missing"), None);
}
