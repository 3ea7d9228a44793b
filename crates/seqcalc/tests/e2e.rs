//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn seqcalc() -> Command {
    let mut cmd = Command::cargo_bin("seqcalc").expect("binary not found");
    cmd.env("NO_COLOR", "1")
        .env_remove("SEQCALC_KIND")
        .env_remove("SEQCALC_FIRST")
        .env_remove("SEQCALC_STEP")
        .env_remove("SEQCALC_TERMS");
    cmd
}

#[test]
fn help_flag() {
    seqcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sequence"));
}

#[test]
fn version_flag() {
    seqcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("seqcalc"));
}

#[test]
fn default_arithmetic_sequence() {
    seqcalc()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sequence: 1, 2, 3, 4, 5, 6, 7, 8, 9, 10",
        ))
        .stdout(predicate::str::contains("a_n = 1 + (n-1) × 1"));
}

#[test]
fn arithmetic_with_details() {
    seqcalc()
        .args(["-k", "arithmetic", "-a", "2", "-s", "3", "-n", "5", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequence: 2, 5, 8, 11, 14"))
        .stdout(predicate::str::contains("Sum of Terms: 40"))
        .stdout(predicate::str::contains("Total Terms:  5"));
}

#[test]
fn geometric_with_details() {
    seqcalc()
        .args(["-k", "geometric", "-a", "2", "-s", "3", "-n", "4", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequence: 2, 6, 18, 54"))
        .stdout(predicate::str::contains("Series Sum:   80.000000"));
}

#[test]
fn geometric_default_ratio() {
    seqcalc()
        .args(["-k", "geom", "-n", "5", "-q"])
        .assert()
        .success()
        .stdout("1, 2, 4, 8, 16\n");
}

#[test]
fn negative_difference() {
    seqcalc()
        .args(["-a", "10", "-s", "-2", "-n", "6", "-q"])
        .assert()
        .success()
        .stdout("10, 8, 6, 4, 2, 0\n");
}

#[test]
fn long_sequence_shows_head_and_tail() {
    seqcalc()
        .args(["-n", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "First 10 terms: 1, 2, 3, 4, 5, 6, 7, 8, 9, 10",
        ))
        .stdout(predicate::str::contains(
            "Last 10 terms: 91, 92, 93, 94, 95, 96, 97, 98, 99, 100",
        ));
}

#[test]
fn zero_terms_rejected() {
    seqcalc()
        .args(["-n", "0"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains(
            "Number of terms must be a positive integer.",
        ));
}

#[test]
fn negative_terms_rejected() {
    seqcalc()
        .args(["-n", "-3"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn too_many_terms_rejected() {
    seqcalc()
        .args(["-n", "1001"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Number of terms cannot exceed 1000 for performance reasons.",
        ));
}

#[test]
fn count_beyond_i64_rejected_as_too_many() {
    seqcalc()
        .args(["-n", "99999999999999999999"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Number of terms cannot exceed 1000 for performance reasons.",
        ));
}

#[test]
fn max_terms_accepted() {
    seqcalc()
        .args(["-n", "1000", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("999, 1000\n"));
}

#[test]
fn unknown_kind_is_config_error() {
    seqcalc()
        .args(["-k", "harmonic"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("harmonic"));
}

#[test]
fn bad_csv_header_is_config_error() {
    seqcalc().args(["--csv-header", "fancy"]).assert().code(4);
}

#[test]
fn json_output() {
    let output = seqcalc()
        .args(["-k", "geometric", "-a", "1", "-s", "2", "-n", "3", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["result"]["terms"], serde_json::json!([1.0, 2.0, 4.0]));
    assert_eq!(value["result"]["sum"], 7.0);
    assert_eq!(value["request"]["kind"], "geometric");
}

#[test]
fn table_output() {
    seqcalc()
        .args(["-n", "3", "-f", "table", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("n | aₙ"))
        .stdout(predicate::str::contains("3 | 3"));
}

#[test]
fn csv_on_stdout() {
    seqcalc()
        .args(["-k", "geometric", "-a", "100", "-s", "0.5", "-n", "3", "-f", "csv"])
        .assert()
        .success()
        .stdout("Term Position,Term Value\n1,100\n2,50\n3,25\n");
}

#[test]
fn csv_compact_header() {
    seqcalc()
        .args(["-n", "2", "-f", "csv", "--csv-header", "compact"])
        .assert()
        .success()
        .stdout("n,aₙ\n1,1\n2,2\n");
}

#[test]
fn output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("seq.csv");
    seqcalc()
        .args(["-a", "5", "-s", "5", "-n", "3", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV written to"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Term Position,Term Value\n1,5\n2,10\n3,15\n"
    );
}

#[test]
fn export_uses_generated_filename() {
    let tmp = tempfile::TempDir::new().unwrap();
    seqcalc()
        .args(["-k", "geometric", "-a", "2", "-s", "3", "-n", "4", "--export", "-q"])
        .arg("--export-dir")
        .arg(tmp.path())
        .assert()
        .success();
    let csv = std::fs::read_to_string(tmp.path().join("geometric_sequence_2_3_4.csv")).unwrap();
    assert_eq!(csv, "Term Position,Term Value\n1,2\n2,6\n3,18\n4,54\n");
}

#[test]
fn export_to_missing_directory_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    seqcalc()
        .args(["--export", "--export-dir"])
        .arg(tmp.path().join("nope"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("export failed"));
}

#[test]
fn env_fallbacks() {
    seqcalc()
        .env("SEQCALC_KIND", "geometric")
        .env("SEQCALC_FIRST", "3")
        .env("SEQCALC_STEP", "2")
        .env("SEQCALC_TERMS", "3")
        .arg("-q")
        .assert()
        .success()
        .stdout("3, 6, 12\n");
}

#[test]
fn about_geometric() {
    seqcalc()
        .args(["--about", "-k", "geometric"])
        .assert()
        .success()
        .stdout(predicate::str::contains("About Geometric Sequences"))
        .stdout(predicate::str::contains("Sequence: 2, 6, 18, 54"));
}

#[test]
fn completion_bash() {
    seqcalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seqcalc"));
}

#[test]
fn unit_ratio_geometric() {
    seqcalc()
        .args(["-k", "geometric", "-a", "7", "-s", "1", "-n", "4", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequence: 7, 7, 7, 7"))
        .stdout(predicate::str::contains("Series Sum:   28.000000"));
}
