use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_path(category: &str, name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("onf-parser")
        .join("specs")
        .join("v1")
        .join(category)
        .join(name)
}

const HELLO: &str = "Plain sentence:\n---------------\n    Hello world .\n";

#[test]
fn parses_file_to_pretty_json() {
    let mut cmd = cargo_bin_cmd!("onf");
    cmd.arg(sample_path("sentences", "01-plain-sentence.onf"));

    cmd.assert().success().stdout(
        predicate::str::contains("\"plain_sentence\": {")
            .and(predicate::str::contains("\"string\": \"Hello world .\""))
            .and(predicate::str::contains("\"chains\": null")),
    );
}

#[test]
fn compact_json_is_one_line() {
    let mut cmd = cargo_bin_cmd!("onf");
    cmd.arg(sample_path("sentences", "01-plain-sentence.onf"))
        .arg("--compact");

    cmd.assert().success().stdout(predicate::str::starts_with(
        "[{\"sentences\":[{\"plain_sentence\":{\"string\":\"Hello world .\"}",
    ));
}

#[test]
fn yaml_output() {
    let mut cmd = cargo_bin_cmd!("onf");
    cmd.arg(sample_path("chains", "01-ident-and-appos.onf"))
        .arg("--format")
        .arg("YAML");

    cmd.assert().success().stdout(
        predicate::str::contains("chain_type: APPOS")
            .and(predicate::str::contains("coref_type: APPOS HEAD")),
    );
}

#[test]
fn rejects_unknown_format() {
    let mut cmd = cargo_bin_cmd!("onf");
    cmd.arg(sample_path("sentences", "01-plain-sentence.onf"))
        .arg("--format")
        .arg("xml");

    cmd.assert().failure();
}

#[test]
fn parse_error_names_the_file() {
    let path = sample_path("invalid", "04-malformed-chain-header.onf");
    let mut cmd = cargo_bin_cmd!("onf");
    cmd.arg(&path);

    cmd.assert().failure().code(1).stderr(
        predicate::str::contains("04-malformed-chain-header.onf")
            .and(predicate::str::contains("Malformed chain header: Chain 1 IDENT")),
    );
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("onf");
    cmd.arg(dir.path().join("absent.onf"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("absent.onf"));
}

#[test]
fn parses_directory_recursively() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("a.onf"), HELLO).unwrap();
    fs::write(dir.path().join("nested").join("b.onf"), HELLO).unwrap();
    fs::write(dir.path().join("notes.txt"), "not onf").unwrap();

    let mut cmd = cargo_bin_cmd!("onf");
    cmd.arg(dir.path()).arg("--compact");

    cmd.assert().success().stdout(
        predicate::str::contains("a.onf")
            .and(predicate::str::contains("b.onf"))
            .and(predicate::str::contains("notes.txt").not()),
    );
}

#[test]
fn extension_flag_changes_discovery() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.onf"), HELLO).unwrap();
    fs::write(dir.path().join("b.txt"), HELLO).unwrap();

    let mut cmd = cargo_bin_cmd!("onf");
    cmd.arg(dir.path()).arg("--extension").arg("txt");

    cmd.assert().success().stdout(
        predicate::str::contains("b.txt").and(predicate::str::contains("a.onf").not()),
    );
}

#[test]
fn config_file_sets_output() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("onf.toml");
    fs::write(&config, "[output]\nformat = \"yaml\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("onf");
    cmd.arg(sample_path("sentences", "01-plain-sentence.onf"))
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("string: Hello world ."));
}

#[test]
fn flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("onf.toml");
    fs::write(&config, "[output]\nformat = \"yaml\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("onf");
    cmd.arg(sample_path("sentences", "01-plain-sentence.onf"))
        .arg("--config")
        .arg(&config)
        .arg("--format")
        .arg("json")
        .arg("--compact");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("[{\"sentences\""));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("onf");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("Available output formats")
            .and(predicate::str::contains("json"))
            .and(predicate::str::contains("yaml")),
    );
}
