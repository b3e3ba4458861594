//! End-to-end tests for the aviz-prerender binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn prerender() -> Command {
    cargo_bin_cmd!("aviz-prerender")
}

#[test]
fn shows_help() {
    prerender()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--out"));
}

#[test]
fn writes_page_to_stdout() {
    let temp = TempDir::new().expect("temp dir");
    prerender()
        .current_dir(temp.path())
        .args(["--out", "-"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains(r#"id="contact""#));
}

#[test]
fn creates_missing_output_directories() {
    let temp = TempDir::new().expect("temp dir");
    let out = temp.path().join("dist/site/index.html");

    prerender()
        .current_dir(temp.path())
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let html = std::fs::read_to_string(&out).expect("rendered page");
    assert!(html.starts_with("<!DOCTYPE html>"));
}

#[test]
fn applies_config_file() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("site.toml");
    std::fs::write(
        &config,
        "[page]\ntitle = \"Open Day\"\n\n[bundle]\njs = \"/pkg/aviz_landing.js\"\n",
    )
    .expect("write config");

    prerender()
        .current_dir(temp.path())
        .args(["--out", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Open Day</title>"))
        .stdout(predicate::str::contains(r#"import init from "/pkg/aviz_landing.js";"#));
}

#[test]
fn rejects_invalid_config() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("broken.toml");
    std::fs::write(&config, "[popup]\ndelay_ms = 0\n").expect("write config");

    prerender()
        .current_dir(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["--out", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("delay_ms"));
}
