/// Black-box tests for the calmath CLI
///
/// Every command runs in a fresh working directory with UTC as the
/// configured zone, so results are independent of the host machine.
use predicates::prelude::*;
use rstest::rstest;

mod helpers;
use helpers::{assertions, CliTestHarness};

#[test]
fn test_cli_help_and_version() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["--help"])
        .stdout(predicate::str::contains("schedule"))
        .stdout(predicate::str::contains("next-friday-13th"));

    harness
        .run_success(&["--version"])
        .stdout(predicate::str::contains("calmath"));

    harness
        .run_failure(&["invalid-command"])
        .stderr(assertions::has_error());
}

#[rstest]
#[case(&["timestamp", "2024-01-01"], "1704067200000")]
#[case(&["format", "2024-11-25T13:05:09Z"], "11/25/2024, 1:05:09 PM")]
#[case(&["day-name", "2024-01-01"], "Monday")]
#[case(&["days-between", "2024-02-02", "2024-03-02"], "30")]
#[case(&["in-period", "2024-02-02", "2024-02-02", "2024-03-02"], "true")]
#[case(&["in-period", "2024-03-03", "2024-02-02", "2024-03-02"], "false")]
#[case(&["days-in-month", "2", "2024"], "29")]
#[case(&["days-in-month", "2", "2023"], "28")]
#[case(&["weekends", "1", "2024"], "8")]
#[case(&["quarter", "2024-04-01"], "Q2")]
#[case(&["quarter", "2024-03-31"], "Q1")]
#[case(&["leap-year", "1900"], "false")]
#[case(&["leap-year", "2000"], "true")]
#[case(&["leap-year", "2024-06-01"], "true")]
#[case(&["week", "2024-01-03"], "1")]
#[case(&["week", "2024-01-31"], "5")]
fn test_plain_output(#[case] args: &[&str], #[case] expected: &str) {
    let harness = CliTestHarness::new();
    assert_eq!(harness.stdout_of(args), expected);
}

#[test]
fn test_json_output() {
    let harness = CliTestHarness::new();

    let out = harness.stdout_of(&["--json", "quarter", "2024-10-01"]);
    assert_eq!(out, r#"{"quarter":4}"#);

    let out = harness.stdout_of(&["days-in-month", "4", "2024", "--json"]);
    assert_eq!(out, r#"{"days":30}"#);

    let out = harness.stdout_of(&["--json", "next-friday", "2024-01-05"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["days_ahead"], 7);
    assert_eq!(value["date"], "2024-01-12T00:00:00+00:00");
}

#[test]
fn test_time_in_zone() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["time", "2024-03-05T07:08:09Z"])
        .stdout(predicate::str::starts_with("07:08:09 UTC (+00:00)"));

    harness
        .run_success(&["--timezone", "America/Los_Angeles", "time", "2024-03-05T07:08:09Z"])
        .stdout(predicate::str::starts_with("23:08:09 PST (-08:00)"));

    harness
        .run_success(&["--timezone", "America/New_York", "day-name", "2024-01-01T00:00:00Z"])
        .stdout(predicate::str::contains("Sunday"));
}

#[test]
fn test_next_friday_commands() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["next-friday", "2024-01-05"])
        .stdout(predicate::str::starts_with("Friday 2024-01-12 00:00:00 UTC"));

    harness
        .run_success(&["next-friday-13th", "2024-01-01"])
        .stdout(predicate::str::starts_with("Friday 2024-09-13"));

    harness
        .run_success(&["next-friday-13th", "2024-09-13T08:00:00Z"])
        .stdout(predicate::str::contains("today"));

    // The search passes 2022-03-13, where 02:30 does not exist in New York
    harness
        .run_success(&["--timezone", "America/New_York", "next-friday-13th", "2022-02-14T02:30:00"])
        .stdout(predicate::str::starts_with("Friday 2022-05-13 02:30:00 EDT"));

    harness
        .run_success(&["--timezone", "Asia/Jerusalem", "next-friday", "2024-03-28T02:30:00"])
        .stdout(predicate::str::starts_with("Friday 2024-03-29 03:30:00 IDT"));

    // Defaults to now
    harness
        .run_success(&["next-friday"])
        .stdout(predicate::str::starts_with("Friday"));
}

#[test]
fn test_schedule_command() {
    let harness = CliTestHarness::new();

    let out = harness.stdout_of(&[
        "--json", "schedule", "01-01-2024", "15-01-2024", "--work", "1", "--off", "3",
    ]);
    let dates: Vec<String> = serde_json::from_str(&out).unwrap();
    assert_eq!(dates, ["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]);

    harness
        .run_success(&["schedule", "01-01-2024", "15-01-2024", "-w", "1", "-o", "3"])
        .stdout(predicate::str::contains("13-01-2024"))
        .stdout(predicate::str::contains("Saturday"))
        .stdout(predicate::str::contains("17-01-2024").not());

    harness
        .run_failure(&["schedule", "01-01-2024", "15-01-2024", "--work", "0", "--off", "0"])
        .stderr(predicate::str::contains("never advances"));

    harness
        .run_failure(&["schedule", "2024-01-01", "15-01-2024"])
        .stderr(predicate::str::contains("DD-MM-YYYY"));
}

#[test]
fn test_month_summary() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["month", "2", "2024"])
        .stdout(predicate::str::contains("February 2024"))
        .stdout(predicate::str::contains("29"))
        .stdout(predicate::str::contains("Q1"));

    let out = harness.stdout_of(&["--json", "month", "6", "2024"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["days"], 30);
    assert_eq!(value["weekends"], 10);
    assert_eq!(value["quarter"], "Q2");
    assert_eq!(value["leap_year"], true);
}

#[test]
fn test_config_file_defaults() {
    let harness = CliTestHarness::new();
    harness.write_config(
        r#"
            date_input = "iso"

            [schedule]
            work_days = 2
            off_days = 2
        "#,
    );

    let out = harness.stdout_of(&["--json", "schedule", "01-01-2024", "09-01-2024"]);
    let dates: Vec<String> = serde_json::from_str(&out).unwrap();
    assert_eq!(dates, ["01-01-2024", "05-01-2024", "09-01-2024"]);

    harness
        .run_failure(&["week", "tomorrow"])
        .stderr(predicate::str::contains("tomorrow"));
}

#[test]
fn test_natural_language_dates() {
    let harness = CliTestHarness::new();

    harness.run_success(&["week", "tomorrow"]);
    harness.run_success(&["day-name", "next friday"]).stdout(predicate::str::contains("Friday"));
}

#[test]
fn test_invalid_input_errors() {
    let harness = CliTestHarness::new();

    harness
        .run_failure(&["days-in-month", "13", "2024"])
        .stderr(predicate::str::contains("Invalid month"));

    harness
        .run_failure(&["timestamp", "%%%"])
        .stderr(predicate::str::contains("Could not read"));

    harness
        .run_failure(&["--timezone", "Berlin", "week", "2024-01-01"])
        .stderr(predicate::str::contains("Europe/Berlin"));
}
