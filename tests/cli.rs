use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::{TempDir, tempdir};

const SAMPLE: &str =
    "105804 A409-ESG-Senior-Secretary Ancillary-Support ESG MGT ESG-MGT D3-ESG A409-ESG\n";

/// `jt` isolated from the caller's config files and environment.
fn jt(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jt").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    for key in [
        "JT_CONFIG",
        "JT_ROBOT",
        "JT_INGEST_ENCODING",
        "JT_INGEST_MODE",
        "JT_EXPORT_TIMESTAMP_FORMAT",
        "JT_OUTPUT_FORMAT",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

fn workspace() -> TempDir {
    tempdir().unwrap()
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    serde_json::from_slice(&output.stdout).unwrap_or_else(|err| {
        panic!(
            "stdout is not JSON ({err}): {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

#[test]
fn test_cli_help() {
    let dir = workspace();
    jt(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("import"));
}

#[test]
fn test_cli_version() {
    let dir = workspace();
    jt(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_levels_plain_lists_thirteen_in_order() {
    let dir = workspace();
    let output = jt(dir.path()).args(["--plain", "levels"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "Officer");
    assert_eq!(lines[4], "Specialist");
    assert_eq!(lines[12], "Chief (Top of the Org)");
}

#[test]
fn test_classify_plain() {
    let dir = workspace();
    jt(dir.path())
        .args(["--plain", "classify", "Senior Director of Ops", "CHIEF EXECUTIVE", ""])
        .assert()
        .success()
        .stdout("Senior Director\nChief (Top of the Org)\nSpecialist\n");
}

#[test]
fn test_classify_json_explains_rule() {
    let dir = workspace();
    let json = stdout_json(jt(dir.path()).args(["-m", "classify", "Senior Director of Ops"]));
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"][0]["level"], "senior-director");
    assert_eq!(json["data"][0]["rule"], 4);
    assert_eq!(json["data"][0]["trigger"], "senior director");
}

#[test]
fn test_classify_reads_stdin() {
    let dir = workspace();
    jt(dir.path())
        .args(["--plain", "classify", "-"])
        .write_stdin("Payroll Clerk\nVP Sales\n")
        .assert()
        .success()
        .stdout("Officer\nVice President\n");
}

#[test]
fn test_compose_titles() {
    let dir = workspace();
    jt(dir.path())
        .args(["--plain", "compose", "-d", "Commercial", "-s", "Strategy", "-l", "director"])
        .assert()
        .success()
        .stdout("Commercial Strategy Director\n");
    jt(dir.path())
        .args(["--plain", "compose", "-d", "Commercial", "-s", "Strategy", "-l", "chief"])
        .assert()
        .success()
        .stdout("Chief Commercial Officer\n");
}

#[test]
fn test_compose_rejects_empty_division() {
    let dir = workspace();
    jt(dir.path())
        .args(["compose", "--division", "", "--subdivision", "Strategy", "--level", "officer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("division must not be empty"));
}

#[test]
fn test_compose_error_is_structured_in_machine_mode() {
    let dir = workspace();
    let mut cmd = jt(dir.path());
    cmd.args(["-m", "compose", "-d", "", "-s", "Strategy", "-l", "officer"]);
    cmd.assert().failure();
    let json = stdout_json(&mut cmd);
    assert_eq!(json["status"]["error"]["code"], "INVALID_INPUT");
    assert_eq!(json["status"]["error"]["numeric_code"], 201);
}

#[test]
fn test_import_whitespace_sample() {
    let dir = workspace();
    std::fs::write(dir.path().join("staff.txt"), SAMPLE).unwrap();

    let json = stdout_json(jt(dir.path()).args([
        "-m",
        "import",
        "staff.txt",
        "--mode",
        "whitespace",
    ]));
    assert_eq!(json["status"], "ok");
    let data = &json["data"];
    assert_eq!(data["header"], "fixed_layout");
    assert_eq!(data["total_records"], 1);
    let record = &data["records"][0];
    assert_eq!(record["employee_id"], "105804");
    assert_eq!(record["division"], "Ancillary-Support");
    assert_eq!(record["subdivision"], "ESG");
    assert_eq!(record["job_code"], "A409-ESG");
    assert_eq!(record["raw_job_text"], "A409-ESG-Senior-Secretary");
    assert_eq!(record["final_title"], "Ancillary-Support ESG Officer");
}

#[test]
fn test_import_fixed_layout_classifies_job_text() {
    let dir = workspace();
    let text = format!("105805 Payroll-Clerk Finance TRS PAY C1-TRS F102-TRS\n{SAMPLE}");
    std::fs::write(dir.path().join("staff.txt"), text).unwrap();

    let json = stdout_json(jt(dir.path()).args([
        "-m",
        "import",
        "staff.txt",
        "--mode",
        "whitespace",
    ]));
    let records = json["data"]["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["final_title"], "Finance TRS Officer");
    assert_eq!(records[1]["raw_job_text"], "A409-ESG-Senior-Secretary");
    assert_eq!(records[1]["job_code"], "A409-ESG");
    assert_eq!(records[1]["hierarchy_level"], "officer");
}

#[test]
fn test_import_two_columns_reports_missing_columns() {
    let dir = workspace();
    std::fs::write(dir.path().join("narrow.txt"), "1 Ops\n2 Fin\n").unwrap();

    let mut cmd = jt(dir.path());
    cmd.args(["-m", "import", "narrow.txt", "--mode", "whitespace"]);
    cmd.assert().failure();
    let json = stdout_json(&mut cmd);
    let error = &json["status"]["error"];
    assert_eq!(error["code"], "MISSING_COLUMNS");
    assert_eq!(
        error["context"]["missing"],
        serde_json::json!(["DIVISION", "PSL", "PERNR", "JOB_CODE"])
    );
}

#[test]
fn test_import_wrong_encoding_fails_fast() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("staff.csv"),
        b"PERNR,DIVISION,PSL,JOB_CODE\n1,Z\xFCrich,ESG,A1\n",
    )
    .unwrap();

    jt(dir.path())
        .args(["import", "staff.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid utf-8"));

    jt(dir.path())
        .args(["--plain", "import", "staff.csv", "--encoding", "latin-1"])
        .assert()
        .success()
        .stdout("Zürich ESG Specialist\n");
}

#[test]
fn test_import_export_writes_csv() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("staff.csv"),
        "PERNR,JOB_TEXT,DIVISION,PSL,JOB_CODE\n\
         1,Payroll Clerk,Finance,TRS,F1\n\
         2,Operations Manager,Ops,ESG,O7\n",
    )
    .unwrap();

    jt(dir.path())
        .args(["import", "staff.csv", "--division", "Ops", "--export", "out.csv"])
        .assert()
        .success();

    let exported = std::fs::read_to_string(dir.path().join("out.csv")).unwrap();
    let lines: Vec<_> = exported.lines().collect();
    assert_eq!(
        lines[0],
        "Final Job Title,PERNR,JOB_CODE,Division,Subdivision,Job Title,Created"
    );
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("Ops ESG Manager,2,O7,Ops,ESG,Manager,"));
}

#[test]
fn test_import_malformed_quoting_fails() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("staff.csv"),
        "PERNR,DIVISION,PSL,JOB_CODE\n1,\"Ops,ESG,A1\n2,Fin,TRS,B2\n",
    )
    .unwrap();

    let mut cmd = jt(dir.path());
    cmd.args(["-m", "import", "staff.csv"]);
    cmd.assert().failure();
    let json = stdout_json(&mut cmd);
    assert_eq!(json["status"]["error"]["code"], "PARSE_FAILED");
    assert_eq!(
        json["status"]["error"]["context"]["reason"],
        "line 2: unterminated quoted field"
    );
}

#[test]
fn test_import_refuses_empty_export() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("staff.csv"),
        "PERNR,DIVISION,PSL,JOB_CODE\n1,Finance,TRS,F1\n",
    )
    .unwrap();

    jt(dir.path())
        .args(["import", "staff.csv", "--level", "chief", "--export", "out.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no records to export"));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_project_config_sets_ingest_defaults() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("jobtitle.toml"),
        "[ingest]\nmode = \"whitespace\"\nencoding = \"cp1252\"\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("staff.txt"),
        b"PERNR DIVISION PSL JOB_CODE JOB_TEXT\n1 Caf\xE9 ESG A1 Clerk\n",
    )
    .unwrap();

    jt(dir.path())
        .args(["--plain", "import", "staff.txt"])
        .assert()
        .success()
        .stdout("Café ESG Officer\n");

    jt(dir.path())
        .args(["--plain", "config", "ingest.mode"])
        .assert()
        .success()
        .stdout("whitespace\n");
}

#[test]
fn test_env_override_beats_project_config() {
    let dir = workspace();
    std::fs::write(dir.path().join("jobtitle.toml"), "[ingest]\nmode = \"whitespace\"\n").unwrap();

    jt(dir.path())
        .env("JT_INGEST_MODE", "comma")
        .args(["--plain", "config", "ingest.mode"])
        .assert()
        .success()
        .stdout("comma\n");
}

#[test]
fn test_invalid_config_fails() {
    let dir = workspace();
    std::fs::write(dir.path().join("jobtitle.toml"), "[ingest]\nmode = \"tab\"\n").unwrap();

    jt(dir.path())
        .arg("levels")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse config"));
}

#[test]
fn test_completions_bash() {
    let dir = workspace();
    jt(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jt"));
}
