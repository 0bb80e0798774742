// Tests for the 'search' command

use super::test_utils::*;

#[test]
fn test_search_found_is_case_insensitive() {
    let output = CliTest::new()
        .with_file("sample.txt", SAMPLE_TEXT)
        .arg("search")
        .arg("sample.txt")
        .arg("the")
        .run();

    assert_output(
        &output,
        exit_codes::SUCCESS,
        Some("Frequency of 'THE': 3"),
        None,
    );
    assert!(output.stdout_contains("Analysis completed for 'sample.txt'."));
}

#[test]
fn test_search_not_found() {
    let output = CliTest::new()
        .with_file("sample.txt", SAMPLE_TEXT)
        .arg("search")
        .arg("sample.txt")
        .arg("octopus")
        .run();

    assert_output(
        &output,
        exit_codes::SUCCESS,
        Some("Search term not found"),
        None,
    );
}

#[test]
fn test_search_missing_file() {
    let output = CliTest::new()
        .arg("search")
        .arg("missing.txt")
        .arg("whale")
        .run();

    assert_output(
        &output,
        exit_codes::GENERAL_ERROR,
        None,
        Some("Error: The file 'missing.txt' does not exist."),
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_search_json() {
    let output = CliTest::new()
        .with_file("sample.txt", SAMPLE_TEXT)
        .arg("--format")
        .arg("json")
        .arg("search")
        .arg("sample.txt")
        .arg("whale")
        .run();

    assert_eq!(output.exit_code, exit_codes::SUCCESS);
    let value: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(value["term"], "WHALE");
    assert_eq!(value["count"], 1);
}
