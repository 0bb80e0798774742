// Tests for argument parsing and validation

use super::test_utils::*;

#[test]
fn test_no_arguments() {
    let output = CliTest::new().run();

    // A subcommand is required, clap reports usage on stderr
    assert_eq!(output.exit_code, exit_codes::ARGUMENT_ERROR);
    assert!(output.stderr_contains("Usage"));
}

#[test]
fn test_help_flag() {
    let output = CliTest::new().arg("--help").run();

    assert_eq!(output.exit_code, exit_codes::SUCCESS);
    assert!(output.stdout_contains("text-analyzer"));
    assert!(output.stdout_contains("summary"));
    assert!(output.stdout_contains("frequency"));
    assert!(output.stdout_contains("search"));
}

#[test]
fn test_version_flag() {
    let output = CliTest::new().arg("--version").run();

    assert_eq!(output.exit_code, exit_codes::SUCCESS);
    assert!(output.stdout_contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_top_value() {
    let output = CliTest::new()
        .with_file("sample.txt", SAMPLE_TEXT)
        .arg("frequency")
        .arg("sample.txt")
        .arg("-n")
        .arg("lots")
        .run();

    assert_output(&output, exit_codes::ARGUMENT_ERROR, None, Some("error:"));
}

#[test]
fn test_invalid_format_value() {
    let output = CliTest::new()
        .with_file("sample.txt", SAMPLE_TEXT)
        .arg("summary")
        .arg("sample.txt")
        .arg("--format")
        .arg("yaml")
        .run();

    assert_output(&output, exit_codes::ARGUMENT_ERROR, None, Some("error:"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let output = CliTest::new()
        .with_file("sample.txt", SAMPLE_TEXT)
        .arg("-v")
        .arg("summary")
        .arg("sample.txt")
        .run();

    assert_eq!(output.exit_code, exit_codes::SUCCESS);
    assert!(output.stderr_contains("DEBUG"));
    assert!(!output.stdout_contains("DEBUG"));
}
