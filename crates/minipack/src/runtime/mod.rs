/// The loader every bundle starts with: a function expression taking the module table.
///
/// The table maps each module id to `[factory, specifierMap]`, where `factory` is
/// `function (module, exports, require) { <source> }`.
pub const RUNTIME_SOURCE: &str = include_str!("./runtime.js");
