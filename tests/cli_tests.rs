//! The `reflect-dump` binary run against feed files.

mod common;

use std::process::{Command, Output};

use common::fixture;

fn reflect_dump(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_reflect-dump"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn prints_fixture_interface() {
    let feed = fixture("widgets.json");
    let output = reflect_dump(&[feed.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = text(&output.stdout);
    assert!(stdout.starts_with("class Button {\n"));
    assert!(stdout.contains("class Widget {\n\tWidget(int32);\n"));
    assert!(stdout.ends_with("static int32 add(int32, int32);\nstatic int64 now();\n"));
}

#[test]
fn flags_shape_the_listing() {
    let feed = fixture("widgets.json");
    let output = reflect_dump(&[
        feed.to_str().unwrap(),
        "--exclude",
        "Button",
        "--indent-spaces",
        "2",
        "--stats",
    ]);

    assert!(output.status.success());
    let stdout = text(&output.stdout);
    assert!(!stdout.contains("class Button"));
    assert!(stdout.contains("class Widget {\n  Widget(int32);\n"));
    assert!(text(&output.stderr).contains("excluded classes:       2"));
}

#[test]
fn inconsistent_feed_fails_with_message() {
    let feed = fixture("inconsistent.json");
    let output = reflect_dump(&[feed.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = text(&output.stderr);
    assert!(stderr.contains("Error: unresolved type #404 while reflecting Widget.resize\n"));
    assert!(!stderr.contains("caused by"));
}

#[test]
fn missing_feed_prints_error_chain() {
    let feed = fixture("missing.json");
    let output = reflect_dump(&[feed.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = text(&output.stderr);
    assert!(stderr.contains("Error: failed to read "));
    assert_eq!(stderr.matches("caused by: ").count(), 1);
}
