mod ecma_compiler;
mod specifier_scanner;

pub use crate::{ecma_compiler::EcmaCompiler, specifier_scanner::{ScanResult, SpecifierScanner}};
