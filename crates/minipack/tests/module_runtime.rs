mod common;

use std::{cell::RefCell, rc::Rc};

use common::build_graph;
use minipack::ENTRY_MODULE_IDX;
use minipack_runtime::{ModuleFactory, ModuleRuntime, ModuleStatus, RequireContext};
use serde_json::json;

fn factory(f: impl Fn(&RequireContext<'_>) -> anyhow::Result<()> + 'static) -> ModuleFactory {
  Rc::new(f)
}

#[test]
fn runs_a_loaded_graph_with_bundle_semantics() {
  let graph = build_graph(
    &[
      ("/project/entry.js", "require('./a');\nrequire('./b');"),
      ("/project/a.js", "require('./b');"),
      ("/project/b.js", "require('./a');"),
    ],
    "/project/entry.js",
  )
  .unwrap()
  .module_graph;

  let log = Rc::new(RefCell::new(Vec::<String>::new()));
  let runtime = ModuleRuntime::new(&graph, |module| {
    let log = Rc::clone(&log);
    match module.stable_id.as_str() {
      "entry.js" => factory(move |ctx| {
        let a = ctx.require("./a")?;
        let b = ctx.require("./b")?;
        log.borrow_mut().push(format!("entry sees a={:?} b={:?}", a.get("name"), b.get("name")));
        Ok(())
      }),
      "a.js" => factory(move |ctx| {
        ctx.exports().set("name", json!("a"));
        let b = ctx.require("./b")?;
        log.borrow_mut().push(format!("a sees b={:?}", b.get("name")));
        Ok(())
      }),
      _ => factory(move |ctx| {
        let a = ctx.require("./a")?;
        log.borrow_mut().push(format!("b sees a={:?}", a.get("name")));
        ctx.exports().set("name", json!("b"));
        Ok(())
      }),
    }
  });

  runtime.run().unwrap();

  assert_eq!(
    *log.borrow(),
    [
      r#"b sees a=Some(String("a"))"#,
      r#"a sees b=Some(String("b"))"#,
      r#"entry sees a=Some(String("a")) b=Some(String("b"))"#,
    ]
  );
  assert!(graph.iter().all(|module| runtime.status(module.idx) == ModuleStatus::Loaded));
  assert_eq!(runtime.exports(ENTRY_MODULE_IDX).map(|exports| exports.is_empty()), Some(true));
}
