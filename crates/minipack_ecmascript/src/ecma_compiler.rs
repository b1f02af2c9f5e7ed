use oxc::{
  allocator::Allocator,
  ast_visit::Visit,
  parser::{ParseOptions, Parser},
  span::SourceType,
};

use crate::{ScanResult, SpecifierScanner};

pub struct EcmaCompiler;

impl EcmaCompiler {
  /// Modules end up as function bodies, so they are parsed as CommonJS scripts with top-level
  /// `return` allowed.
  pub fn source_type() -> SourceType {
    SourceType::cjs()
  }

  /// Finds the specifiers of every static `require` call in `source`.
  pub fn scan(source: &str) -> anyhow::Result<ScanResult> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, Self::source_type())
      .with_options(ParseOptions { allow_return_outside_function: true, ..ParseOptions::default() })
      .parse();

    if ret.panicked || !ret.errors.is_empty() {
      let messages = ret.errors.iter().map(ToString::to_string).collect::<Vec<_>>();
      return Err(anyhow::anyhow!("{}", messages.join("; ")));
    }

    let mut scanner = SpecifierScanner::default();
    scanner.visit_program(&ret.program);
    Ok(scanner.into_result())
  }
}
