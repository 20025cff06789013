//! CLI integration tests using assert_cmd.

mod common;

use common::{numbered_source, question_file, sflash, CAPITAL, COLORS};
use predicates::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn token_answer_is_retried_until_correct() {
    let (_dir, path) = question_file(CAPITAL);

    sflash()
        .arg(&path)
        .write_stdin("paris\nParis\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Q: Capital of France?"))
        .stdout(predicate::str::contains("0/1 == 0.00  Paris\nTry again."))
        .stdout(predicate::str::contains("1/1 == 1.00  Paris"))
        .stdout(predicate::str::contains("Done: 1 drilled, 0 abandoned, 2 answers over 1 pass(es)"));
}

#[test]
fn list_answer_claims_each_item_once() {
    let (_dir, path) = question_file(COLORS);

    let output = sflash()
        .arg(&path)
        .write_stdin("red\nred\nblue\ngreen\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let feedback: Vec<_> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("  -> "))
        .collect();
    assert_eq!(feedback, vec!["Correct", "Already claimed", "Correct", "Correct"]);
    assert!(stdout.contains("Done: 1 drilled, 0 abandoned, 4 answers"));
}

#[test]
fn threshold_flag_lowers_bar() {
    let (_dir, path) = question_file("-Three primes\n+two three five\n");

    sflash()
        .arg(&path)
        .args(["-t", "30"])
        .write_stdin("two\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1/3 == 0.33").and(predicate::str::contains("Try again.").not()));
}

#[test]
fn closed_input_abandons_remaining_records() {
    let (_dir, path) = question_file(&format!("{CAPITAL}{COLORS}"));

    sflash()
        .arg(&path)
        .write_stdin("nope\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done: 0 drilled, 2 abandoned, 1 answers"));
}

#[test]
fn perpetual_mode_restarts_until_input_ends() {
    let (_dir, path) = question_file(CAPITAL);

    let output = sflash()
        .arg(&path)
        .arg("--perpetual")
        .write_stdin("Paris\nParis\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert_eq!(stdout.matches("Q: Capital of France?").count(), 3);
    assert!(stdout.contains("over 3 pass(es)"));
}

#[test]
fn randomized_run_with_seed_terminates() {
    let (_dir, path) = question_file(&numbered_source(5));

    sflash()
        .arg(&path)
        .args(["--r", "--seed", "11", "-b", "2"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Q: Question"))
        .stdout(predicate::str::contains("Done: 0 drilled"));
}

#[test]
fn json_report_includes_policy_and_summary() {
    let (_dir, path) = question_file(CAPITAL);

    let output = sflash()
        .arg(&path)
        .args(["--json", "-t", "100"])
        .write_stdin("Paris\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let start = stdout.find("\n{").expect("json report") + 1;
    let report: serde_json::Value = serde_json::from_str(&stdout[start..]).unwrap();
    assert_eq!(report["policy"]["retry_threshold"], 1.0);
    assert_eq!(report["policy"]["batch_size"], 10);
    assert_eq!(report["summary"]["records_drilled"], 1);
    assert_eq!(report["summary"]["attempts"], 1);
    assert_eq!(report["summary"]["passes"], 1);
}

#[test]
fn check_reports_record_kinds() {
    let (_dir, path) = question_file(&format!("{CAPITAL}\n{COLORS}"));

    sflash()
        .arg(&path)
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 records OK (1 token, 1 list)"));
}

#[test]
fn check_rejects_empty_answer() {
    let (_dir, path) = question_file("-Q1\n+A1\n-Q2\n+\n");

    sflash()
        .arg(&path)
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed record at line 3: answer is empty"));
}

#[test]
fn malformed_record_aborts_drill() {
    let (_dir, path) = question_file("-Q1\n+A1\nQ2\n+A2\n");

    sflash()
        .arg(&path)
        .write_stdin("A1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed record at line 3"));
}

#[test]
fn empty_source_fails_fast() {
    let (_dir, path) = question_file("\n\nno questions here\n");

    sflash()
        .arg(&path)
        .write_stdin("anything\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Q:").not())
        .stderr(predicate::str::contains("source contains no records"));
}

#[test]
fn missing_file_is_fatal() {
    sflash()
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("failed to open question file"));
}

#[test]
fn threshold_without_value_is_fatal() {
    let (_dir, path) = question_file(CAPITAL);

    sflash().arg(&path).arg("-t").assert().failure();
    sflash().arg(&path).args(["-t", "250"]).assert().failure();
}

#[test]
fn huge_batch_size_is_accepted() {
    let (_dir, path) = question_file(CAPITAL);

    sflash()
        .arg(&path)
        .args(["-b", "9223372036854775807"])
        .write_stdin("Paris\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done: 1 drilled, 0 abandoned, 1 answers"));
}

#[test]
fn undecodable_response_is_a_miss_not_a_crash() {
    let (_dir, path) = question_file(&format!("{CAPITAL}-Second?\n+B\n"));

    sflash()
        .arg(&path)
        .write_stdin(b"caf\xe9\nParis\nB\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("0/1 == 0.00  Paris\nTry again."))
        .stdout(predicate::str::contains("Q: Second?"))
        .stdout(predicate::str::contains("Done: 2 drilled, 0 abandoned, 3 answers"));
}
