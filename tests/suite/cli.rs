//! The `qrfolio` binary's non-interactive surface.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn qrfolio(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qrfolio"))
        .args(args)
        .env("HOME", home)
        .env_remove("QRFOLIO_THEME")
        .env_remove("RUST_LOG")
        .output()
        .expect("run qrfolio")
}

#[test]
fn print_writes_wrapped_page() {
    let home = tempdir().unwrap();
    let output = qrfolio(
        home.path(),
        &["--print", "--width", "60", "--process", "qc", "--theme", "light"],
    );
    assert!(output.status.success(), "{output:?}");

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("QR Project"));
    assert!(text.contains("B. QC 성적서 등록"));
    assert!(!text.contains("A. 생산 시리얼 생성 및 관리"));
    assert!(text.contains("11 / 14 완료"));
    for line in text.lines() {
        assert!(line.chars().count() <= 60, "too wide: {line:?}");
    }
    assert!(!text.contains('\u{1b}'), "plain output must not carry escapes");
}

#[test]
fn logs_go_to_the_home_directory() {
    let home = tempdir().unwrap();
    let output = qrfolio(home.path(), &["--print", "--width", "40"]);
    assert!(output.status.success(), "{output:?}");
    assert!(home.path().join(".qrfolio/logs/qrfolio.log").exists());
}

#[test]
fn unknown_process_is_rejected() {
    let home = tempdir().unwrap();
    let output = qrfolio(home.path(), &["--print", "--process", "bogus"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bogus"), "{stderr}");
}

#[test]
fn width_requires_print_and_a_usable_value() {
    let home = tempdir().unwrap();
    assert!(!qrfolio(home.path(), &["--width", "60"]).status.success());
    assert!(
        !qrfolio(home.path(), &["--print", "--width", "5"])
            .status
            .success()
    );
}
