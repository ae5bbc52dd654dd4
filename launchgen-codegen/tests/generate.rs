//! End-to-end tests: run the pipeline against a project on disk and check
//! the launch.json that comes out.

use std::{fs, path::Path};

use launchgen_codegen::{GenerateOptions, GenerateResult, Generator, Pipeline};
use launchgen_core::{Runtime, WriteResult};
use launchgen_manifest::{LaunchSpec, is_generated};
use serde_json::{Value, json};
use tempfile::TempDir;

fn project(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(temp.path().join(".vscode")).unwrap();
    for (file, content) in files {
        let path = temp.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    temp
}

fn generator(root: &Path, options: GenerateOptions) -> Generator {
    let ctx = Pipeline::new().run(root, options).expect("Pipeline failed");
    Generator::from_context(ctx).expect("Failed to merge entries")
}

fn generate(root: &Path) -> GenerateResult {
    generator(root, GenerateOptions::default())
        .generate()
        .expect("Failed to write launch.json")
}

fn launch_json(root: &Path) -> LaunchSpec {
    let content = fs::read_to_string(root.join(".vscode/launch.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn names(spec: &LaunchSpec) -> Vec<&str> {
    spec.names().collect()
}

#[test]
fn test_single_deno_test_file() {
    let temp = project(&[("deno.json", "{}"), ("my.test.ts", "// test file")]);

    let file = generator(temp.path(), GenerateOptions::default())
        .preview()
        .unwrap();

    insta::assert_snapshot!(file.content().trim_end(), @r#"
    {
      "version": "0.2.0",
      "configurations": [
        {
          "type": "node",
          "request": "launch",
          "name": "Debug my.test.ts",
          "cwd": "${workspaceFolder}",
          "runtimeExecutable": "deno",
          "runtimeArgs": [
            "test",
            "--inspect-brk",
            "-A",
            "${workspaceFolder}/my.test.ts"
          ],
          "attachSimplePort": 9229,
          "console": "integratedTerminal",
          "env": {
            "LAUNCHGEN": "true"
          }
        }
      ]
    }
    "#);
}

#[test]
fn test_user_entries_are_preserved_and_stale_entries_dropped() {
    let existing = json!({
        "version": "0.2.0",
        "configurations": [
            { "name": "Debug gone.test.ts", "env": { "LAUNCHGEN": "true" } },
            { "type": "node", "request": "attach", "name": "Attach", "port": 9229 },
            { "name": "Custom", "env": { "LAUNCHGEN": "false" } }
        ],
        "compounds": []
    });
    let existing_json = existing.to_string();
    let temp = project(&[
        ("deno.json", "{}"),
        ("src/a.test.ts", ""),
        (".vscode/launch.json", existing_json.as_str()),
    ]);

    let result = generate(temp.path());

    assert_eq!(result.write, WriteResult::Overwritten);
    assert_eq!(result.retained, 2);
    assert_eq!(result.removed, 1);
    assert_eq!(result.added, ["Debug src/a.test.ts"]);

    let spec = launch_json(temp.path());
    assert_eq!(names(&spec), ["Attach", "Custom", "Debug src/a.test.ts"]);
    assert_eq!(spec.configurations[0], existing["configurations"][1]);
    assert_eq!(spec.extra.get("compounds"), Some(&json!([])));
}

#[test]
fn test_second_run_is_byte_identical() {
    let temp = project(&[
        ("deno.json", "{}"),
        ("a.test.ts", ""),
        ("nested/b.test.ts", ""),
        ("launch.config.json", r#"{ "groups": [{ "program": "main.ts" }] }"#),
    ]);

    let first = generate(temp.path());
    let before = fs::read(&first.path).unwrap();
    let second = generate(temp.path());
    let after = fs::read(&second.path).unwrap();

    assert_eq!(first.write, WriteResult::Created);
    assert_eq!(before, after);
    assert_eq!(second.removed, 3);
    assert_eq!(second.retained, 0);
    assert!(
        generator(temp.path(), GenerateOptions::default())
            .is_current()
            .unwrap()
    );
}

#[test]
fn test_port_and_console_apply_to_every_entry() {
    let temp = project(&[
        ("deno.json", "{}"),
        ("a.test.ts", ""),
        (
            "launch.config.json",
            r#"{
                "port": 9333,
                "console": "internalConsole",
                "groups": [{ "program": "main.ts", "scripts": ["serve"] }]
            }"#,
        ),
    ]);

    generate(temp.path());

    let spec = launch_json(temp.path());
    assert_eq!(spec.configurations.len(), 2);
    for entry in &spec.configurations {
        assert_eq!(entry["attachSimplePort"], json!(9333));
        assert_eq!(entry["console"], json!("internalConsole"));
        assert!(is_generated(entry));
    }
}

#[test]
fn test_node_workspaces() {
    let temp = project(&[
        (
            "package.json",
            r#"{ "name": "root", "workspaces": ["packages/*"] }"#,
        ),
        ("packages/api/package.json", "{}"),
        ("packages/api/server.test.mjs", ""),
        ("packages/api/node_modules/dep/x.test.js", ""),
        ("packages/docs/intro.test.js", ""),
    ]);

    generate(temp.path());

    let spec = launch_json(temp.path());
    assert_eq!(names(&spec), ["Debug packages/api/server.test.mjs"]);
    assert_eq!(
        spec.configurations[0]["runtimeArgs"],
        json!([
            "--inspect-brk",
            "--test",
            "${workspaceFolder}/packages/api/server.test.mjs"
        ])
    );
    assert_eq!(spec.configurations[0]["runtimeExecutable"], json!("node"));
}

#[test]
fn test_include_and_exclude() {
    let temp = project(&[
        (
            "deno.json",
            r#"{ "test": { "include": ["src"], "exclude": ["src/fixtures"] } }"#,
        ),
        ("src/a.test.ts", ""),
        ("src/fixtures/b.test.ts", ""),
        ("scripts/c.test.ts", ""),
    ]);

    generate(temp.path());

    assert_eq!(names(&launch_json(temp.path())), ["Debug src/a.test.ts"]);
}

#[test]
fn test_runtime_override_and_extra_args() {
    let temp = project(&[("deno.json", "{}"), ("a.test.js", "")]);
    let options = GenerateOptions {
        runtime: Some(Runtime::Node),
        extra_runtime_args: vec!["--trace-warnings".to_string()],
    };

    let spec = generator(temp.path(), options).spec().clone();

    assert_eq!(spec.configurations[0]["runtimeExecutable"], json!("node"));
    assert_eq!(
        spec.configurations[0]["runtimeArgs"],
        json!([
            "--inspect-brk",
            "--test",
            "${workspaceFolder}/a.test.js",
            "--trace-warnings"
        ])
    );
}

#[test]
fn test_unparsable_launch_json_is_treated_as_empty() {
    let temp = project(&[
        ("deno.json", "{}"),
        ("a.test.ts", ""),
        (".vscode/launch.json", "{ \"configurations\": [ oops"),
    ]);

    let ctx = Pipeline::new()
        .run(temp.path(), GenerateOptions::default())
        .unwrap();
    assert_eq!(ctx.load_errors.len(), 1);
    assert_eq!(ctx.warning_count(), 1);

    let result = Generator::from_context(ctx).unwrap().generate().unwrap();

    assert_eq!(result.retained, 0);
    let written: Value =
        serde_json::from_str(&fs::read_to_string(&result.path).unwrap()).unwrap();
    assert_eq!(written["configurations"].as_array().unwrap().len(), 1);
}

#[test]
fn test_commented_launch_json_keeps_user_entries() {
    let existing = r#"{
    // Use IntelliSense to learn about possible attributes.
    "version": "0.2.0",
    "configurations": [
        {
            "type": "node",
            "request": "attach",
            "name": "Attach", // hand written
        },
        /* regenerated */
        { "name": "Debug old.test.ts", "env": { "LAUNCHGEN": "true" } },
    ]
}"#;
    let temp = project(&[
        ("deno.json", "{}"),
        ("a.test.ts", ""),
        (".vscode/launch.json", existing),
    ]);

    let result = generate(temp.path());

    assert_eq!(result.retained, 1);
    assert_eq!(result.removed, 1);
    let spec = launch_json(temp.path());
    assert_eq!(names(&spec), ["Attach", "Debug a.test.ts"]);
    assert_eq!(
        spec.configurations[0],
        json!({ "type": "node", "request": "attach", "name": "Attach" })
    );
}

#[test]
fn test_no_launchable_files_keeps_user_entries() {
    let existing = r#"{ "version": "0.2.0", "configurations": [{ "name": "Attach" }] }"#;
    let temp = project(&[("deno.json", "{}"), (".vscode/launch.json", existing)]);

    let result = generate(temp.path());

    assert!(result.added.is_empty());
    assert_eq!(names(&launch_json(temp.path())), ["Attach"]);
}
