//! Integration tests for the `stencil` binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `stencil` command isolated from the user's settings and `.env`.
fn stencil(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("stencil");
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("update"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_writes_both_trees() {
    let temp = TempDir::new().unwrap();
    let build = temp.path().join("build");

    stencil(temp.path())
        .args(["generate", "--dir"])
        .arg(&build)
        .args(["--name", "My App", "--product-company", "Acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated build assets in"));

    assert!(build.join("Taskfile.yml").is_file());
    assert!(build.join("linux/appimage/build.sh").is_file());
    assert!(build.join("darwin/Info.plist").is_file());
    assert!(build.join("windows/info.json").is_file());

    let snapshot = fs::read_to_string(build.join("appdata.yaml")).unwrap();
    assert!(snapshot.contains("My App"));
    assert!(snapshot.contains("Acme"));
}

#[cfg(unix)]
#[test]
fn generated_shell_scripts_are_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let build = temp.path().join("build");

    stencil(temp.path())
        .args(["generate", "-s", "--dir"])
        .arg(&build)
        .assert()
        .success();

    let mode = fs::metadata(build.join("linux/appimage/build.sh"))
        .unwrap()
        .permissions()
        .mode();
    assert_ne!(mode & 0o111, 0);
}

#[test]
fn silent_generate_prints_nothing() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .args(["generate", "--silent", "--dir", "out", "--name", "quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("out/appdata.yaml").is_file());
}

#[test]
fn update_rewrites_evolving_files_only() {
    let temp = TempDir::new().unwrap();

    stencil(temp.path())
        .args(["generate", "-s", "--dir", "build", "--name", "tool"])
        .assert()
        .success();

    let build = temp.path().join("build");
    fs::write(build.join("Taskfile.yml"), "# hand edited\n").unwrap();
    let snapshot = fs::read_to_string(build.join("appdata.yaml")).unwrap();
    fs::write(
        build.join("appdata.yaml"),
        snapshot.replace("0.1.0", "2.5.0"),
    )
    .unwrap();

    stencil(temp.path())
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully updated build assets in",
        ));

    assert_eq!(
        fs::read_to_string(build.join("Taskfile.yml")).unwrap(),
        "# hand edited\n"
    );
    let info = fs::read_to_string(build.join("windows/info.json")).unwrap();
    assert!(info.contains("2.5.0"));
}

#[test]
fn update_honours_settings_from_environment() {
    let temp = TempDir::new().unwrap();

    stencil(temp.path())
        .args(["generate", "-s", "--dir", "packaging"])
        .assert()
        .success();

    stencil(temp.path())
        .arg("update")
        .env("STENCIL__UPDATE__DIRECTORY", "packaging")
        .assert()
        .success();
}

#[test]
fn list_shows_output_paths() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("foundation/Taskfile.yml"))
        .stdout(predicate::str::contains("evolving/appdata.yaml"))
        .stdout(predicate::str::contains(".tmpl").not());
}

#[test]
fn list_json_for_one_tree() {
    let temp = TempDir::new().unwrap();
    let out = stencil(temp.path())
        .args(["list", "--tree", "evolving", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let files: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let files = files.as_array().unwrap();
    assert!(!files.is_empty());
    assert!(files.iter().all(|f| f["tree"] == "evolving"));
}

#[test]
fn config_init_then_get() {
    let temp = TempDir::new().unwrap();
    let settings = temp.path().join("stencil.toml");

    stencil(temp.path())
        .arg("--config-file")
        .arg(&settings)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(settings.is_file());

    stencil(temp.path())
        .arg("--config-file")
        .arg(&settings)
        .args(["config", "get", "update.config_file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("appdata.yaml"));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stencil"));
}
