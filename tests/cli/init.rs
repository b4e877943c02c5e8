use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .nolintguardrc.json

    ----- stderr -----
    ");

    // 2-space indentation, every option spelled out with its default
    insta::assert_snapshot!(test.read_file(".nolintguardrc.json")?, @r#"
    {
      "requireJustification": false,
      "forbiddenLinters": [],
      "ignores": [],
      "ignoreTestFiles": false
    }
    "#);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".nolintguardrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .nolintguardrc.json already exists
    ");

    assert_eq!(test.read_file(".nolintguardrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file(
        "main.go",
        "package main\n\n//nolint:errcheck\nfunc main() {}\n",
    )?;

    let output = test.check_command().output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
