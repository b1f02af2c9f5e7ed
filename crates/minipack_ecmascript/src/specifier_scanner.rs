use minipack_utils::{indexmap::FxIndexSet, rstr::Rstr};
use oxc::{
  ast::ast::{Argument, CallExpression, Expression},
  ast_visit::{walk, Visit},
};

/// Collects the specifiers of `require("...")` calls.
///
/// Only a literal first argument counts, anything computed is left for the runtime to reject.
/// Scoping is not checked, a local binding named `require` is treated like the real one.
#[derive(Debug, Default)]
pub struct SpecifierScanner {
  specifiers: FxIndexSet<Rstr>,
  dynamic_requires: u32,
}

#[derive(Debug, Default)]
pub struct ScanResult {
  /// Deduplicated, in order of first appearance.
  pub specifiers: Vec<Rstr>,
  /// `require` calls whose argument isn't a literal. They can't be bundled.
  pub dynamic_requires: u32,
}

impl SpecifierScanner {
  pub fn into_result(self) -> ScanResult {
    ScanResult {
      specifiers: self.specifiers.into_iter().collect(),
      dynamic_requires: self.dynamic_requires,
    }
  }

  fn static_specifier(argument: &Argument<'_>) -> Option<Rstr> {
    match argument {
      Argument::StringLiteral(lit) => Some(Rstr::new(lit.value.as_str())),
      Argument::TemplateLiteral(tpl) if tpl.expressions.is_empty() => {
        let cooked = tpl.quasis.first().and_then(|quasi| quasi.value.cooked.as_ref());
        cooked.map(|cooked| Rstr::new(cooked.as_str()))
      }
      _ => None,
    }
  }
}

impl<'a> Visit<'a> for SpecifierScanner {
  fn visit_call_expression(&mut self, it: &CallExpression<'a>) {
    let is_require =
      matches!(&it.callee, Expression::Identifier(ident) if ident.name.as_str() == "require");
    if is_require {
      match it.arguments.first().map(Self::static_specifier) {
        Some(Some(specifier)) => {
          self.specifiers.insert(specifier);
        }
        Some(None) => self.dynamic_requires += 1,
        None => {}
      }
    }
    walk::walk_call_expression(self, it);
  }
}
