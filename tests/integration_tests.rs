//! Integration tests for the keysift CLI

use assert_cmd::Command;
use predicates::prelude::*;
use rand::RngCore;
use std::fs;
use tempfile::TempDir;

fn keysift() -> Command {
    Command::cargo_bin("keysift").unwrap()
}

fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    keysift()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--target"))
        .stdout(predicate::str::contains("--algo"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    keysift()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("keysift"));
}

/// Missing target directory is fatal: exit code 1, no report table
#[test]
fn test_missing_target_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("no-such-dir");

    keysift()
        .arg("--target")
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("FILENAME").not())
        .stderr(predicate::str::contains("not found"));
}

/// A target that is a regular file, not a directory, is fatal
#[test]
fn test_file_target_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("plain.key");
    fs::write(&file, b"not a directory").unwrap();

    keysift()
        .arg("--target")
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a directory"));
}

/// Repeated bytes are flagged as a honeypot, random bytes pass as production
#[test]
fn test_repeated_and_random_content_split_the_verdicts() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("templated.key"), vec![0x41u8; 10_000]).unwrap();
    fs::write(temp_dir.path().join("genuine.key"), random_bytes(10_000)).unwrap();

    keysift()
        .arg("--target")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"templated\.key\s+.*HONEYPOT").unwrap())
        .stdout(predicate::str::is_match(r"genuine\.key\s+.*PRODUCTION").unwrap())
        .stdout(predicate::str::is_match(r"Total analyzed:\s+2").unwrap());
}

/// An empty directory is a valid scan: table header, zero rows, 0/0/0 summary
#[test]
fn test_empty_directory_reports_zero_totals() {
    let temp_dir = TempDir::new().unwrap();

    keysift()
        .arg("--target")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("FILENAME"))
        .stdout(predicate::str::is_match(r"Production:\s+0").unwrap())
        .stdout(predicate::str::is_match(r"Honeypot:\s+0").unwrap())
        .stdout(predicate::str::is_match(r"Total analyzed:\s+0").unwrap());
}

/// Zero-length files are excluded from the report and from the totals
#[test]
fn test_zero_length_file_is_excluded() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("empty.key"), b"").unwrap();
    fs::write(temp_dir.path().join("real.key"), random_bytes(4096)).unwrap();

    keysift()
        .arg("--target")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("empty file, skipped"))
        .stdout(predicate::str::is_match(r"Total analyzed:\s+1").unwrap());
}

/// An unreadable file is skipped with a diagnostic; the scan continues
#[cfg(unix)]
#[test]
fn test_unreadable_file_is_skipped_with_diagnostic() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("readable.key"), random_bytes(4096)).unwrap();
    let blocked = temp_dir.path().join("blocked.key");
    fs::write(&blocked, random_bytes(4096)).unwrap();
    fs::set_permissions(&blocked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged processes ignore file modes; nothing to assert then.
    if fs::read(&blocked).is_ok() {
        return;
    }

    keysift()
        .arg("--target")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"readable\.key\s+.*PRODUCTION").unwrap())
        .stdout(predicate::str::contains("blocked.key"))
        .stdout(predicate::str::is_match(r"Total analyzed:\s+1").unwrap());
}

/// The classification boundary is a CLI parameter, not a baked-in constant
#[test]
fn test_threshold_flag_moves_the_boundary() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("genuine.key"), random_bytes(10_000)).unwrap();

    // Random content sits near ratio 1.0; a boundary above that flags it.
    keysift()
        .arg("--target")
        .arg(temp_dir.path())
        .arg("--threshold")
        .arg("1.5")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"genuine\.key\s+.*HONEYPOT").unwrap());
}

/// The zstd backend produces the same verdicts as the baseline probe
#[cfg(feature = "zstd")]
#[test]
fn test_zstd_backend_scans_successfully() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("templated.key"), vec![0x41u8; 10_000]).unwrap();
    fs::write(temp_dir.path().join("genuine.key"), random_bytes(10_000)).unwrap();

    keysift()
        .arg("--target")
        .arg(temp_dir.path())
        .arg("--algo")
        .arg("zstd")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"templated\.key\s+.*HONEYPOT").unwrap())
        .stdout(predicate::str::is_match(r"genuine\.key\s+.*PRODUCTION").unwrap());
}

/// The brotli backend produces the same verdicts as the baseline probe
#[cfg(feature = "brotli")]
#[test]
fn test_brotli_backend_scans_successfully() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("templated.key"), vec![0x41u8; 10_000]).unwrap();
    fs::write(temp_dir.path().join("genuine.key"), random_bytes(10_000)).unwrap();

    keysift()
        .arg("--target")
        .arg(temp_dir.path())
        .arg("--algo")
        .arg("brotli")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"templated\.key\s+.*HONEYPOT").unwrap())
        .stdout(predicate::str::is_match(r"genuine\.key\s+.*PRODUCTION").unwrap());
}

/// Verbose mode surfaces compressed sizes and timing per file
#[test]
fn test_verbose_shows_compression_details() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("sample.key"), random_bytes(4096)).unwrap();

    keysift()
        .arg("--target")
        .arg(temp_dir.path())
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"compressed to \d+ bytes in \d+ ms").unwrap());
}
