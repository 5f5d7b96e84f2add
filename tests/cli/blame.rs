use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, git_available};

#[test]
fn test_attribution_failure_keeps_exit_status() -> Result<()> {
    let test = CliTest::with_file("main.go", "// TODO: untracked\n")?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stderr.contains("cannot attribute '[ROOT]/main.go'"));
    assert!(!output.stdout.contains("TODO by:"));
    assert!(
        output
            .stdout
            .contains("Found TODO in file '[ROOT]/main.go' starting at: 1, ending at: 1:")
    );

    let output = test.run(&["--format", "json"])?;

    assert_eq!(output.code, Some(0));
    let value: serde_json::Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(value["filesScanned"], 1);
    assert_eq!(value["filesUnattributed"], 1);
    assert!(value["todos"][0].get("committer").is_none());

    Ok(())
}

#[test]
fn test_quiet_hides_attribution_warnings() -> Result<()> {
    let test = CliTest::with_file("main.go", "// TODO: untracked\n")?;

    let output = test.run(&["--quiet"])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stderr, "");

    Ok(())
}

#[test]
fn test_committed_todos_are_attributed() -> Result<()> {
    if !git_available() {
        return Ok(());
    }

    let test = CliTest::with_file(
        "pkg/store.go",
        "package pkg\n\n// TODO: add caching\n// for reads.\nfunc Get() {}\n",
    )?;
    test.git(&["init", "--quiet"])?;
    test.git(&["add", "."])?;
    test.git(&["commit", "--quiet", "-m", "initial"])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stderr, "");
    assert_eq!(
        output.stdout,
        "\
===========================
TODO by: Jane Doe
Committed at: 2024-01-02 03:04:05 +0000
Found TODO in file '[ROOT]/pkg/store.go' starting at: 3, ending at: 4:
Content:
// TODO: add caching
// for reads.

Found 1 TODO in 1 file
"
    );

    Ok(())
}
