//! Runs the built binary against temporary project directories.

use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

fn mapgen(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_mapgen"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run mapgen")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_init_then_check() {
    let temp = TempDir::new().unwrap();

    let init = mapgen(temp.path(), &["init"]);
    assert!(init.status.success(), "{}", stderr(&init));
    assert!(temp.path().join("mapgen.toml").exists());

    let check = mapgen(temp.path(), &["check"]);
    assert!(check.status.success(), "{}", stderr(&check));
    let out = stdout(&check);
    assert!(out.contains("mapgen.toml is valid"));
    assert!(out.contains("Namespace: Reynolds.Mappings"));
    assert!(out.contains("WeakMapping.cs"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("mapgen.toml"), "[arity]\nmax = 2\n").unwrap();

    let init = mapgen(temp.path(), &["init"]);
    assert!(!init.status.success());
    assert!(stderr(&init).contains("--force"));
    assert_eq!(
        fs::read_to_string(temp.path().join("mapgen.toml")).unwrap(),
        "[arity]\nmax = 2\n"
    );

    let forced = mapgen(temp.path(), &["init", "--force"]);
    assert!(forced.status.success(), "{}", stderr(&forced));
    assert!(
        fs::read_to_string(temp.path().join("mapgen.toml"))
            .unwrap()
            .contains("[csharp]")
    );
}

#[test]
fn test_generate_without_config_uses_defaults() {
    let temp = TempDir::new().unwrap();

    let output = mapgen(temp.path(), &["generate", "-o", "out"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let mapping = fs::read_to_string(temp.path().join("out").join("Mapping.cs")).unwrap();
    assert_eq!(mapping, include_str!("../../mapgen-csharp/tests/fixtures/Mapping.cs"));
    assert!(temp.path().join("out").join("WeakMapping.cs").exists());
    assert!(stdout(&output).contains("Mapping.cs (2120 lines)"));
}

#[test]
fn test_generate_arity_override() {
    let temp = TempDir::new().unwrap();

    let output = mapgen(temp.path(), &["generate", "--min", "2", "--max", "2"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let mapping = fs::read_to_string(temp.path().join("Mapping.cs")).unwrap();
    assert!(mapping.contains("IDomain<TKey1, TKey2>"));
    assert!(!mapping.contains("IDomain<TKey>"));
}

#[test]
fn test_generate_rejects_invalid_override() {
    let temp = TempDir::new().unwrap();

    let output = mapgen(temp.path(), &["generate", "--max", "9"]);
    assert!(!output.status.success());
    assert!(!temp.path().join("Mapping.cs").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    let output = mapgen(temp.path(), &["generate", "--dry-run", "--max", "1"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("── Mapping.cs ──"));
    assert!(out.contains("public interface IDomain<TKey>"));
    assert!(out.contains("2 files would be generated"));
    assert!(!temp.path().join("Mapping.cs").exists());
}

#[test]
fn test_invalid_config_reports_diagnostic() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("mapgen.toml"), "[arity]\nmin = 3\nmax = 1\n").unwrap();

    let output = mapgen(temp.path(), &["check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid arity range"));
}

#[test]
fn test_completions() {
    let temp = TempDir::new().unwrap();

    let output = mapgen(temp.path(), &["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("mapgen"));
}
