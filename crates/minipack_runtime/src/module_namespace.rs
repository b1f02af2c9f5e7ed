use std::{cell::RefCell, rc::Rc};

use minipack_utils::indexmap::FxIndexMap;
use serde_json::Value;

/// Exports object of a module. Every `require` of the module hands out the same `Rc`.
#[derive(Debug, Default)]
pub struct ModuleNamespace {
  exports: RefCell<FxIndexMap<String, Value>>,
}

pub type Exports = Rc<ModuleNamespace>;

impl ModuleNamespace {
  /// Returns `None` for an export that hasn't been assigned yet, which is what a circular
  /// `require` observes for everything assigned after the cycle closed.
  pub fn get(&self, name: &str) -> Option<Value> {
    self.exports.borrow().get(name).cloned()
  }

  pub fn set(&self, name: impl Into<String>, value: Value) {
    self.exports.borrow_mut().insert(name.into(), value);
  }

  pub fn has(&self, name: &str) -> bool {
    self.exports.borrow().contains_key(name)
  }

  pub fn is_empty(&self) -> bool {
    self.exports.borrow().is_empty()
  }

  /// Snapshot of the exports as a JSON object, in assignment order.
  pub fn to_value(&self) -> Value {
    Value::Object(self.exports.borrow().iter().map(|(k, v)| (k.clone(), v.clone())).collect())
  }
}
