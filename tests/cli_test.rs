//! Tests of the `cg3conv` binary: flags, config file and exit status.

mod common;

use std::path::Path;
use std::process::{Command, Output};

use common::fixtures::{self, colors};
use common::{assert_packed_file, pixel, read_rgba_png};
use pretty_assertions::assert_eq;

fn cg3conv(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cg3conv"))
        .args(args)
        .env_remove("CG3CONV_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_cli_writes_packed_and_preview() {
    let dir = tempfile::tempdir().unwrap();
    let source = fixtures::write_png(
        dir.path(),
        "in.png",
        &fixtures::rgba_png(256, 192, &fixtures::quadrants_rgba()),
    );
    let output = dir.path().join("out");
    let preview = dir.path().join("preview.png");

    let result = cg3conv(&[
        arg(&source),
        "-o",
        arg(&output),
        "--preview",
        arg(&preview),
    ]);

    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));
    assert_packed_file(&dir.path().join("out.cg3"));
    let (_, _, rgba) = read_rgba_png(&preview);
    assert_eq!(rgba, fixtures::quadrants_rgba());
}

#[test]
fn test_cli_color_set_flag() {
    let dir = tempfile::tempdir().unwrap();
    // Orange is exact in the alternate set (index 3)
    let source = fixtures::write_png(
        dir.path(),
        "orange.png",
        &fixtures::rgba_png(8, 8, &fixtures::solid_rgba(8, 8, [255, 128, 0])),
    );
    let output = dir.path().join("orange.cg3");
    let preview = dir.path().join("orange_preview.png");

    let result = cg3conv(&[
        arg(&source),
        "-o",
        arg(&output),
        "--color-set",
        "alternate",
        "--preview",
        arg(&preview),
    ]);

    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));
    let bytes = assert_packed_file(&output);
    assert_eq!(bytes[0], 0xFF);
    let (_, _, rgba) = read_rgba_png(&preview);
    assert_eq!(pixel(&rgba, 256, 0, 0), [255, 128, 0, 255]);
}

#[test]
fn test_cli_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("cg3conv.yaml");
    std::fs::write(&config, "color_set: alternate\nparallel_channels: false\n").unwrap();
    // Buff (white) is exact in the alternate set, index 0
    let source = fixtures::write_png(
        dir.path(),
        "white.png",
        &fixtures::rgba_png(4, 4, &fixtures::solid_rgba(4, 4, [255, 255, 255])),
    );
    let output = dir.path().join("white.cg3");

    let result = cg3conv(&[
        arg(&source),
        "-o",
        arg(&output),
        "--config",
        arg(&config),
    ]);

    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));
    assert_eq!(assert_packed_file(&output)[0], 0x00);
}

#[test]
fn test_cli_names_failing_stage() {
    let dir = tempfile::tempdir().unwrap();
    let source = fixtures::write_png(dir.path(), "bad.png", b"GIF89a");
    let output = dir.path().join("bad.cg3");

    let result = cg3conv(&[arg(&source), "-o", arg(&output)]);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("decode stage failed"), "{stderr}");
    assert!(!output.exists());
}

#[test]
fn test_cli_rejects_zero_bias_step() {
    let dir = tempfile::tempdir().unwrap();
    let source = fixtures::write_png(
        dir.path(),
        "red.png",
        &fixtures::rgba_png(4, 4, &fixtures::solid_rgba(4, 4, colors::RED)),
    );
    let output = dir.path().join("red.cg3");

    let result = cg3conv(&[
        arg(&source),
        "-o",
        arg(&output),
        "--bias-step",
        "0",
    ]);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("config stage failed"), "{stderr}");
}
