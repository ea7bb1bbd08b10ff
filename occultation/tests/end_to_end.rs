//! Runs the compiled binary the way a user would: no arguments, inside an
//! empty working directory.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_occultation"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch occultation binary")
}

#[test]
fn test_writes_only_the_answer() {
    let dir = TempDir::new().unwrap();

    let output = run_in(dir.path());
    assert!(
        output.status.success(),
        "binary failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let entries: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["the-answer.pdf".to_string()]);

    let pdf = std::fs::read(dir.path().join("the-answer.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn test_logs_lunar_figures() {
    let dir = TempDir::new().unwrap();

    let output = run_in(dir.path());
    assert!(output.status.success());

    let log = String::from_utf8_lossy(&output.stderr);
    assert!(log.contains("The moon moves at 0.55 arcsec / s"), "{log}");
    assert!(
        log.contains("The apparent diameter of the moon is 1864.18 arcsec"),
        "{log}"
    );
}

#[test]
fn test_debug_log_reports_write_once() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_occultation"))
        .current_dir(dir.path())
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to launch occultation binary");
    assert!(output.status.success());

    let log = String::from_utf8_lossy(&output.stderr);
    let writes = log.lines().filter(|l| l.contains("the-answer.pdf")).count();
    assert_eq!(writes, 1, "{log}");
}

#[test]
fn test_recreates_deleted_output() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("the-answer.pdf");

    std::fs::write(&target, b"previous run").unwrap();
    std::fs::remove_file(&target).unwrap();
    assert!(!target.exists());

    assert!(run_in(dir.path()).status.success());
    assert!(target.exists());
}

#[test]
fn test_overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("the-answer.pdf");
    std::fs::write(&target, b"stale contents").unwrap();

    assert!(run_in(dir.path()).status.success());

    let pdf = std::fs::read(&target).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[cfg(unix)]
#[test]
fn test_fails_in_read_only_directory() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores directory permissions, nothing to check there
    let scratch = dir.path().join("scratch");
    if std::fs::write(&scratch, b"").is_ok() {
        std::fs::remove_file(&scratch).unwrap();
        std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let output = run_in(dir.path());
    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

    assert!(!output.status.success());
    assert!(!dir.path().join("the-answer.pdf").exists());
}
