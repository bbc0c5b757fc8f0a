//! E2E tests for the xsweb binary.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn xsweb() -> Command {
    Command::cargo_bin("xsweb").unwrap()
}

#[test]
fn test_pages_lists_download() {
    xsweb()
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("download"));
}

#[test]
fn test_render_unknown_page_fails() {
    xsweb()
        .arg("render")
        .arg("no-such-page")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown page"));
}

#[test]
fn test_help() {
    xsweb()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Render a page fragment"));
}

#[test]
#[ignore = "requires network access"]
fn test_render_download_to_file() {
    let temp = TempDir::new().unwrap();
    let out = temp.child("download.html");

    xsweb()
        .arg("render")
        .arg("download")
        .arg("--output")
        .arg(out.path())
        .assert()
        .success();

    out.assert(predicate::str::contains("Latest commits"));
}
