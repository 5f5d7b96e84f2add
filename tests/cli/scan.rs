use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const MAIN_GO: &str = r#"package main

// TODO: single line TODO example

import "fmt"

// TODO: multi line todo with
// double slashes.
func main() {
    x := 1 // TODO: inline todo is not a comment line

    /*
       TODO: multi line comment with
       slash star
    */
    fmt.Println(x)
}
"#;

#[test]
fn test_text_report() -> Result<()> {
    let test = CliTest::with_file("main.go", MAIN_GO)?;

    let output = test.run(&["--no-blame"])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stderr, "");
    assert_snapshot!(output.stdout, @r"
    ===========================
    Found TODO in file '[ROOT]/main.go' starting at: 3, ending at: 3:
    Content:
    // TODO: single line TODO example

    ===========================
    Found TODO in file '[ROOT]/main.go' starting at: 7, ending at: 8:
    Content:
    // TODO: multi line todo with
    // double slashes.

    ===========================
    Found TODO in file '[ROOT]/main.go' starting at: 13, ending at: 15:
    Content:
           TODO: multi line comment with
           slash star
        */

    Found 3 TODOs in 1 file
    ");

    Ok(())
}

#[test]
fn test_json_report() -> Result<()> {
    let test = CliTest::with_file("main.go", MAIN_GO)?;

    let output = test.run(&["--no-blame", "--format", "json"])?;

    assert_eq!(output.code, Some(0));
    let value: serde_json::Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(value["filesScanned"], 1);
    assert_eq!(value["filesFailed"], 0);
    assert_eq!(value["filesUnattributed"], 0);
    let todos = value["todos"].as_array().unwrap();
    assert_eq!(todos.len(), 3);
    assert_eq!(todos[1]["filePath"], "[ROOT]/main.go");
    assert_eq!(todos[1]["lineStart"], 7);
    assert_eq!(todos[1]["lineEnd"], 8);
    assert_eq!(
        todos[1]["content"],
        "// TODO: multi line todo with\n// double slashes."
    );

    Ok(())
}

#[test]
fn test_explicit_root_argument() -> Result<()> {
    let test = CliTest::with_file("project/cmd/app.go", "// TODO: nested\n")?;
    test.write_file("outside.go", "// TODO: not under root\n")?;

    let output = test.run(&["project", "--no-blame"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("'[ROOT]/project/cmd/app.go'"));
    assert!(!output.stdout.contains("outside.go"));
    assert!(output.stdout.ends_with("Found 1 TODO in 1 file\n"));

    Ok(())
}

#[test]
fn test_hidden_directories_and_extensions() -> Result<()> {
    let test = CliTest::with_file("lib.rs", "// TODO: rust\n")?;
    test.write_file(".cache/gen.rs", "// TODO: hidden\n")?;
    test.write_file("main.go", "// TODO: go\n")?;

    let output = test.run(&["--no-blame", "-e", "rs"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("'[ROOT]/lib.rs'"));
    assert!(!output.stdout.contains("gen.rs"));
    assert!(!output.stdout.contains("main.go"));

    Ok(())
}

#[test]
fn test_no_todos() -> Result<()> {
    let test = CliTest::with_file("main.go", "package main\n\n// just a note\n")?;

    let output = test.run(&["--no-blame"])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "Found 0 TODOs in 1 file\n");

    Ok(())
}

#[test]
fn test_missing_root_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["does-not-exist"])?;

    assert_eq!(output.code, Some(2));
    assert_eq!(output.stdout, "");
    assert!(output.stderr.starts_with("Error: cannot list 'does-not-exist'"));

    Ok(())
}

#[test]
fn test_invalid_extension_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["-e", "a/b"])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Invalid file extension"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--help"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage: todoscan [OPTIONS] [PATH]"));
    assert!(output.stdout.contains("--no-blame"));

    Ok(())
}
