use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("nodedump"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

struct Golden {
    degree: String,
    data: String,
    expected: String,
}

fn golden(case: &str) -> Golden {
    let dir = repo_root().join("tests").join("golden").join(case);
    let input = std::fs::read_to_string(dir.join("input.json")).expect("read input.json");
    let input: Value = serde_json::from_str(&input).expect("parse input.json");
    Golden {
        degree: input["degree"].to_string(),
        data: input["data"].as_str().expect("data string").to_string(),
        expected: std::fs::read_to_string(dir.join("expected.txt")).expect("read expected.txt"),
    }
}

#[test]
fn help_describes_both_modes() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("DEGREE").and(contains("--kind")));
}

#[test]
fn arguments_decode_as_leaf() {
    let case = golden("leaf_degree2");
    cmd()
        .arg(&case.degree)
        .arg(&case.data)
        .assert()
        .success()
        .stdout(case.expected);
}

#[test]
fn arguments_with_internal_kind() {
    let case = golden("internal_degree3");
    cmd()
        .arg("--kind")
        .arg("internal")
        .arg(&case.degree)
        .arg(&case.data)
        .assert()
        .success()
        .stdout(case.expected);
}

#[test]
fn interactive_internal_node() {
    let case = golden("internal_degree3");
    cmd()
        .write_stdin(format!("n\n{}\n{}\n", case.degree, case.data))
        .assert()
        .success()
        .stdout(format!("Leaf? y/n degree: data: {}", case.expected));
}

#[test]
fn interactive_reasks_on_invalid_answer() {
    let case = golden("leaf_degree3");
    cmd()
        .write_stdin(format!("maybe\ny\n{}\n{}\n", case.degree, case.data))
        .assert()
        .success()
        .stdout(format!(
            "Leaf? y/n Answer with Y or N\nLeaf? y/n degree: data: {}",
            case.expected
        ));
}

#[test]
fn interactive_non_integer_degree_fails() {
    cmd()
        .write_stdin("y\nfour\n00\n")
        .assert()
        .code(2)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn interactive_closed_stdin_fails() {
    cmd()
        .write_stdin("y\n")
        .assert()
        .code(2)
        .stderr(contains("standard input closed"));
}

#[test]
fn argument_non_integer_degree_fails() {
    cmd()
        .arg("four")
        .arg("00")
        .assert()
        .failure()
        .stderr(contains("invalid degree"));
}

#[test]
fn degree_without_data_fails() {
    cmd().arg("3").assert().failure().stderr(contains("error:"));
}

#[test]
fn short_data_is_not_an_error() {
    let case = golden("leaf_truncated");
    cmd()
        .arg(&case.degree)
        .arg(&case.data)
        .assert()
        .success()
        .stdout(case.expected);
}

#[test]
fn json_outputs_layout() {
    let case = golden("leaf_degree2");
    let assert = cmd()
        .arg("--json")
        .arg(&case.degree)
        .arg(&case.data)
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["kind"], "leaf");
    assert_eq!(value["degree"], 2);
    let tail = &value["sections"][3]["records"][0];
    assert_eq!(tail["region"], "tail");
    assert_eq!(tail["fields"], serde_json::json!(["TAIL", "1234"]));
}

#[test]
fn pretty_requires_json() {
    cmd()
        .arg("--pretty")
        .arg("2")
        .arg("00")
        .assert()
        .failure()
        .stderr(contains("error:"));
}
