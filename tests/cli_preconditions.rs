//! Integration tests for the fatal, non-interactive paths: manifest and
//! directory preconditions plus the foreign entry-file conflict. All of
//! these fail before the first prompt, so the binary can be driven directly.

use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_pugstart")
}

const MANIFEST: &str = r#"{"name": "site", "dependencies": {"pugstart": "^0.3.0"}}"#;

#[test]
fn fails_without_package_json() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("site")).unwrap();

    let output = Command::new(bin())
        .current_dir(dir.path())
        .arg("site")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("package.json"), "stderr: {stderr}");
}

#[test]
fn fails_when_manifest_lacks_dependency() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("site")).unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{"dependencies": {"pug": "^3.0.0"}}"#,
    )
    .unwrap();

    let output = Command::new(bin())
        .current_dir(dir.path())
        .arg("site")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("npm i --save pugstart"), "stderr: {stderr}");
}

#[test]
fn fails_when_target_directory_is_missing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("package.json"), MANIFEST).unwrap();

    let output = Command::new(bin())
        .current_dir(dir.path())
        .arg("missing-dir")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("directory"), "stderr: {stderr}");
}

#[test]
fn foreign_index_without_rewrite_flag_is_refused_and_untouched() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("package.json"), MANIFEST).unwrap();
    fs::create_dir_all(dir.path().join("site")).unwrap();
    let original = "h1 Hand made\np do not lose me\n";
    fs::write(dir.path().join("site/index.pug"), original).unwrap();

    let output = Command::new(bin())
        .current_dir(dir.path())
        .arg("site")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("-r"), "stderr: {stderr}");

    let after = fs::read_to_string(dir.path().join("site/index.pug")).unwrap();
    assert_eq!(after, original);
}

#[test]
fn rewrite_flag_relocates_content_even_when_bundle_is_missing() {
    // No node_modules tree here: the run fails at the base installer, but
    // the reconciler has already rewritten the entry file safely.
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("package.json"), MANIFEST).unwrap();
    fs::create_dir_all(dir.path().join("site")).unwrap();
    fs::write(dir.path().join("site/index.pug"), "h1 Hand made\n").unwrap();

    let output = Command::new(bin())
        .current_dir(dir.path())
        .args(["site", "-r"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bundled template"), "stderr: {stderr}");

    let after = fs::read_to_string(dir.path().join("site/index.pug")).unwrap();
    assert!(after.contains("extends _base/layout"));
    assert!(after.contains("\n    h1 Hand made"));
}
