mod common;

use std::path::Path;

use common::{has_node, project, run_node};
use minipack::{BuildDiagnostic, Bundler, BundlerOptions, InputItem, RUNTIME_SOURCE};

fn bundler(cwd: &Path, input: &str) -> Bundler {
  Bundler::new(BundlerOptions {
    input: Some(input.into()),
    cwd: Some(cwd.to_path_buf()),
    ..Default::default()
  })
  .unwrap()
}

/// Bundles `files` from `entry.js` into `dist/entry.js` and runs it, or returns `None` without node.
fn bundle_and_run(files: &[(&str, &str)]) -> Option<common::NodeOutput> {
  if !has_node() {
    eprintln!("node is not available, skipping");
    return None;
  }
  let dir = project(files);
  bundler(dir.path(), "./entry.js").write().unwrap();
  Some(run_node(&dir.path().join("dist/entry.js")))
}

#[test]
fn bundle_runs() {
  let Some(output) = bundle_and_run(&[
    ("entry.js", "const { add } = require('./math');\nconsole.log(add(2, 3));"),
    ("math.js", "exports.add = (a, b) => a + b;"),
  ]) else {
    return;
  };

  assert!(output.success, "{}", output.stderr);
  assert_eq!(output.stdout, "5\n");
}

#[test]
fn modules_run_once_and_share_exports() {
  let Some(output) = bundle_and_run(&[
    (
      "entry.js",
      "const a = require('./counter');\nconst b = require('./counter.js');\n\
       require('./other');\nconsole.log(a === b, a.runs);",
    ),
    ("other.js", "require('./counter').runs;"),
    ("counter.js", "exports.runs = (globalThis.__runs = (globalThis.__runs || 0) + 1);"),
  ]) else {
    return;
  };

  assert!(output.success, "{}", output.stderr);
  assert_eq!(output.stdout, "true 1\n");
}

#[test]
fn circular_requires_see_partial_exports() {
  let Some(output) = bundle_and_run(&[
    (
      "entry.js",
      "exports.early = 'early';\nconst b = require('./b');\nexports.late = 'late';\n\
       console.log(b.sawEarly, b.sawLate);",
    ),
    ("b.js", "const a = require('./entry');\nexports.sawEarly = a.early;\nexports.sawLate = a.late;"),
  ]) else {
    return;
  };

  assert!(output.success, "{}", output.stderr);
  assert_eq!(output.stdout, "early undefined\n");
}

#[test]
fn circular_cross_reads_before_any_assignment() {
  let Some(output) = bundle_and_run(&[
    (
      "entry.js",
      "const y = require('./b').y;\nexports.x = 1;\nconsole.log('a saw ' + y);",
    ),
    ("b.js", "const x = require('./entry').x;\nexports.y = 2;\nconsole.log('b saw ' + x);"),
  ]) else {
    return;
  };

  assert!(output.success, "{}", output.stderr);
  assert_eq!(output.stdout, "b saw undefined\na saw 2\n");
}

#[test]
fn json_modules_export_their_document() {
  let Some(output) = bundle_and_run(&[
    ("entry.js", "const data = require('./data');\nconsole.log(data.a, data.list.length);"),
    ("data.json", "{ \"a\": 1, \"list\": [1, 2, 3] }\n"),
  ]) else {
    return;
  };

  assert!(output.success, "{}", output.stderr);
  assert_eq!(output.stdout, "1 3\n");
}

#[test]
fn proto_specifier_stays_an_own_key() {
  let Some(output) = bundle_and_run(&[
    ("entry.js", "console.log(require('__proto__'));"),
    ("node_modules/__proto__/index.js", "module.exports = 'package';"),
  ]) else {
    return;
  };

  assert!(output.success, "{}", output.stderr);
  assert_eq!(output.stdout, "package\n");
}

#[test]
fn factories_receive_module_exports_and_this() {
  let Some(output) = bundle_and_run(&[
    ("entry.js", "const v = require('./value');\nconsole.log(v, this === module.exports);"),
    ("value.js", "module.exports = 42;\nif (this !== exports) throw new Error('bad this');"),
  ]) else {
    return;
  };

  assert!(output.success, "{}", output.stderr);
  assert_eq!(output.stdout, "42 true\n");
}

#[test]
fn unknown_specifiers_throw_at_runtime() {
  let Some(output) = bundle_and_run(&[(
    "entry.js",
    "const name = './nope';\ntry { require(name); } catch (e) { console.log(e.message); }",
  )]) else {
    return;
  };

  assert!(output.success, "{}", output.stderr);
  assert_eq!(output.stdout, "Cannot find module './nope'\n");
}

#[test]
fn failed_modules_rerun_on_next_require() {
  let Some(output) = bundle_and_run(&[
    (
      "entry.js",
      "for (let i = 0; i < 2; i++) {\n  try { require('./flaky'); } catch (e) { console.log(e.message); }\n}\n\
       console.log(require('./flaky').ok);",
    ),
    (
      "flaky.js",
      "globalThis.__tries = (globalThis.__tries || 0) + 1;\n\
       if (globalThis.__tries < 3) throw new Error('try ' + globalThis.__tries);\nexports.ok = true;",
    ),
  ]) else {
    return;
  };

  assert!(output.success, "{}", output.stderr);
  assert_eq!(output.stdout, "try 1\ntry 2\ntrue\n");
}

#[test]
fn entry_hashbang_stays_first() {
  let dir = project(&[
    ("entry.js", "#!/usr/bin/env node\nconsole.log(require('./dep'));"),
    ("dep.js", "module.exports = 'dep'"),
  ]);

  let output = bundler(dir.path(), "entry").generate().unwrap();
  let content = &output.asset().unwrap().content;

  assert!(content.starts_with("#!/usr/bin/env node\n"));
  assert_eq!(content.matches("#!/usr/bin/env node").count(), 1);

  if has_node() {
    std::fs::write(dir.path().join("out.js"), content).unwrap();
    let output = run_node(&dir.path().join("out.js"));
    assert!(output.success, "{}", output.stderr);
    assert_eq!(output.stdout, "dep\n");
  }
}

#[test]
fn bundles_do_not_depend_on_where_the_project_lives() {
  let files = [
    ("src/entry.js", "require('./a');\nrequire('../lib/b');"),
    ("src/a.js", "require('../lib/b');"),
    ("lib/b.js", "module.exports = 1;"),
  ];
  let first = project(&files);
  let second = project(&files);

  let render = |dir: &tempfile::TempDir| {
    let output = bundler(dir.path(), "./src/entry.js").generate().unwrap();
    output.assets.into_iter().next().unwrap()
  };
  let first_asset = render(&first);
  let second_asset = render(&second);

  assert_eq!(first_asset.content, second_asset.content);
  assert_eq!(first_asset.content, render(&first).content);
  assert_eq!(first_asset.module_count, 3);
  assert_eq!(first_asset.filename, "dist/entry.js");

  let root = first.path().to_string_lossy();
  assert!(!first_asset.content.contains(&*root));
  assert!(!first_asset.content.contains("src/a.js"));
  assert!(first_asset.content.starts_with(RUNTIME_SOURCE.trim_end()));
}

#[test]
fn write_honors_output_options() {
  let dir = project(&[("main.js", "module.exports = 1;")]);

  let bundler = Bundler::new(BundlerOptions {
    input: Some(InputItem { name: Some("app".to_string()), import: "./main.js".to_string() }),
    cwd: Some(dir.path().to_path_buf()),
    dir: Some("build".to_string()),
    entry_filenames: Some("[name].bundle.js".to_string()),
    ..Default::default()
  })
  .unwrap();
  let output = bundler.write().unwrap();

  let asset = output.asset().unwrap();
  assert_eq!(output.assets.len(), 1);
  assert_eq!(asset.filename, "build/app.bundle.js");
  let written = std::fs::read_to_string(dir.path().join("build/app.bundle.js")).unwrap();
  assert_eq!(written, asset.content);

  let bundler = Bundler::new(BundlerOptions {
    input: Some("./main.js".into()),
    cwd: Some(dir.path().to_path_buf()),
    file: Some("out/single.js".to_string()),
    ..Default::default()
  })
  .unwrap();
  bundler.write().unwrap();

  assert!(dir.path().join("out/single.js").is_file());
}

#[test]
fn missing_input_is_reported() {
  let dir = project(&[]);
  let bundler = Bundler::new(BundlerOptions {
    cwd: Some(dir.path().to_path_buf()),
    ..Default::default()
  })
  .unwrap();

  let err = bundler.generate().unwrap_err();

  assert!(matches!(err.diagnostics().next(), Some(BuildDiagnostic::MissingInput)));
  assert_eq!(err.to_string(), "You must supply options.input to minipack");
}

#[test]
fn failed_builds_write_nothing() {
  let dir = project(&[("entry.js", "require('./missing');")]);

  let err = bundler(dir.path(), "./entry.js").write().unwrap_err();

  assert_eq!(err.diagnostics().next().map(BuildDiagnostic::kind), Some("RESOLUTION_ERROR"));
  assert!(!dir.path().join("dist").exists());
}

#[test]
fn invalid_json_fails_the_build() {
  let dir = project(&[("entry.js", "require('./config');"), ("config.json", "{ \"a\": }")]);

  let err = bundler(dir.path(), "./entry.js").generate().unwrap_err();

  assert_eq!(err.diagnostics().next().map(BuildDiagnostic::kind), Some("PARSE_ERROR"));
  assert!(err.to_string().contains("config.json"), "{err}");
}

#[test]
fn unresolvable_entry_is_a_resolution_error() {
  let dir = project(&[]);

  let err = bundler(dir.path(), "./entry.js").generate().unwrap_err();

  match err.diagnostics().next() {
    Some(BuildDiagnostic::Resolution { importer: None, specifier, .. }) => {
      assert_eq!(specifier, "./entry.js");
    }
    other => panic!("unexpected diagnostic {other:?}"),
  };
}
