//! Tests for command handlers: fill, check, countries, contact, team

mod support;
use support::harness::{stderr, stdout, TestHarness};

const COMPLETE: &[&str] = &[
    "fill",
    "--name",
    "Jane Doe",
    "--phone",
    "+14155550123",
    "--email",
    "jane@example.com",
    "--nationality",
    "US",
    "--residence",
    "Canada",
    "--age",
    "30",
];

fn fill_args<'a>(overrides: &[(&'a str, &'a str)], extra: &[&'a str]) -> Vec<&'a str> {
    let mut args: Vec<&str> = COMPLETE.to_vec();
    for (flag, value) in overrides {
        let pos = args
            .iter()
            .position(|a| a == flag)
            .unwrap_or_else(|| panic!("unknown flag {}", flag));
        args[pos + 1] = *value;
    }
    args.extend_from_slice(extra);
    args
}

// ============================================================================
// FILL COMMAND TESTS
// ============================================================================

#[test]
fn test_fill_prints_form_data() {
    let harness = TestHarness::new();

    let output = harness.run(COMPLETE);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Form Data:"));
    assert!(out.contains("jane@example.com"));
    assert!(out.contains("residence:   CA"));
    assert!(out.trim_end().ends_with("Form Submitted!"));
    assert!(!out.contains("linkedin:"));
}

#[test]
fn test_fill_stops_at_first_invalid_step() {
    let harness = TestHarness::new();

    let output = harness.run(&fill_args(&[("--email", "not-an-email")], &[]));

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Blocked at step 3/6"), "stderr: {}", err);
    assert!(err.contains("Invalid email format."));
    assert!(!stdout(&output).contains("Form Submitted!"));
}

#[test]
fn test_fill_reports_short_phone() {
    let harness = TestHarness::new();

    let output = harness.run(&fill_args(&[("--phone", "5551234")], &[]));

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid phone number."));
}

#[test]
fn test_fill_rejects_zero_age() {
    let harness = TestHarness::new();

    let output = harness.run(&fill_args(&[("--age", "0")], &[]));

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Blocked at step 6/6"));
    assert!(err.contains("Invalid age."));
}

#[test]
fn test_fill_json_format() {
    let harness = TestHarness::new();

    let output = harness.run(&fill_args(
        &[],
        &["--linkedin", "https://linkedin.com/in/jane", "--format", "json"],
    ));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout should be JSON");
    assert_eq!(value["name"], "Jane Doe");
    assert_eq!(value["residence"], "CA");
    assert_eq!(value["age"], "30");
    assert_eq!(value["linkedin"], "https://linkedin.com/in/jane");
}

#[test]
fn test_fill_writes_submission_file() {
    let harness = TestHarness::new();

    let output = harness.run(&fill_args(&[], &["--output", "out"]));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Saved to"));

    let files = harness.submissions_in("out");
    assert_eq!(files.len(), 1);
    let content = std::fs::read_to_string(&files[0]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["email"], "jane@example.com");

    let second = harness.run(&fill_args(&[], &["--output", "out"]));
    assert!(second.status.success());
    assert_eq!(harness.submissions_in("out").len(), 2);
}

#[test]
fn test_fill_uses_configured_output_dir_quietly() {
    let harness = TestHarness::with_config(
        "---\nsubmission:\n  output_dir: submissions\n---\n",
    );

    let output = harness.run(&fill_args(&[], &["--quiet"]));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert_eq!(harness.submissions_in("submissions").len(), 1);
}

#[test]
fn test_fill_respects_configured_min_age() {
    let harness = TestHarness::with_config("---\nform:\n  min_age: 18\n---\n");

    let output = harness.run(&fill_args(&[("--age", "17")], &[]));
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid age."));

    let output = harness.run(&fill_args(&[("--age", "18")], &[]));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[test]
fn test_invalid_config_is_reported() {
    let harness = TestHarness::with_config("---\nform:\n  min_age: 0\n---\n");

    let output = harness.run(COMPLETE);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("min_age"));
}

// ============================================================================
// CHECK COMMAND TESTS
// ============================================================================

#[test]
fn test_check_valid_email() {
    let harness = TestHarness::new();

    let output = harness.run(&["check", "email", "jane@example.com"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("email is valid"));
}

#[test]
fn test_check_invalid_phone() {
    let harness = TestHarness::new();

    let output = harness.run(&["check", "phone", "+5551234"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid phone number."));
}

#[test]
fn test_check_national_phone_gets_dial_code() {
    let harness = TestHarness::new();

    let output = harness.run(&["check", "phone", "(415) 555-0123"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("stored as +14155550123"));
}

#[test]
fn test_check_double_zero_prefix_phone() {
    let harness = TestHarness::new();

    let output = harness.run(&["check", "phone", "0044 7911 123456"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("stored as +447911123456"));
}

#[test]
fn test_check_unknown_field() {
    let harness = TestHarness::new();

    let output = harness.run(&["check", "shoe-size", "42"]);

    assert!(!output.status.success());
}

// ============================================================================
// COUNTRIES / CONTACT / TEAM
// ============================================================================

#[test]
fn test_countries_search_by_name() {
    let harness = TestHarness::new();

    let output = harness.run(&["countries", "germany"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("DE"));
    assert!(out.contains("Germany"));
    assert!(out.contains("+49"));
}

#[test]
fn test_countries_json_puts_exact_code_first() {
    let harness = TestHarness::new();

    let output = harness.run(&["countries", "de", "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value[0]["code"], "DE");
}

#[test]
fn test_countries_no_match() {
    let harness = TestHarness::new();

    let output = harness.run(&["countries", "atlantis"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("No countries match 'atlantis'."));
}

#[test]
fn test_custom_country_list_from_config() {
    let harness = TestHarness::with_config(
        "---\nform:\n  default_country: GB\ncountries:\n  path: countries.yaml\n---\n",
    );
    std::fs::write(
        harness.path().join("countries.yaml"),
        "- { code: GB, name: United Kingdom, dial: \"+44\" }\n- { code: IE, name: Ireland, dial: \"+353\" }\n",
    )
    .unwrap();

    let output = harness.run(&["countries"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Ireland"));
    assert!(!out.contains("Germany"));

    let output = harness.run(&["check", "phone", "020 7183 8750"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("+442071838750"));
}

#[test]
fn test_contact_card() {
    let harness = TestHarness::new();

    let output = harness.run(&["contact"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Contact Us"));
    assert!(out.contains("info@example.com"));
    assert!(out.contains("55 Main Street, 2nd block, Malborne, Australia"));
}

#[test]
fn test_team_roster() {
    let harness = TestHarness::new();

    let output = harness.run(&["team"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Saqib Z Siddique"));
    assert!(out.contains("Technical Analyst"));
}

#[test]
fn test_subscribe_requires_terminal() {
    let harness = TestHarness::new();

    let output = harness.run(&["subscribe"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("fireup fill"));
}

#[test]
fn test_version() {
    let harness = TestHarness::new();

    let output = harness.run(&["version"]);

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("fireup "));
}
