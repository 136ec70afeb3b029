//! End-to-end runs of the `trifill` binary.

use std::path::Path;
use std::process::{Command, Output};

fn trifill(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trifill"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run trifill")
}

#[test]
fn reference_triangle_is_written_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = trifill(
        &["--width", "256", "--height", "240", "-o", "frame.png", "-v"],
        dir.path(),
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let img = image::open(dir.path().join("frame.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (256, 240));
    // The centroid of (50,100) (100,220) (200,70) is inside, the corner is not.
    assert_eq!(img.get_pixel(116, 130).0, [0xFF, 0, 0, 0xFF]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0xFF]);

    let log = String::from_utf8_lossy(&out.stderr);
    assert!(log.contains("reference triangle"), "{log}");
}

#[test]
fn tri_mesh_is_rendered() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = trifill::Mesh::cube().to_tri_bytes();
    std::fs::write(dir.path().join("cube.tri"), bytes).unwrap();

    let out = trifill(
        &["--mesh", "cube.tri", "--width", "32", "--height", "32", "--parallel"],
        dir.path(),
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let img = image::open(dir.path().join("trifill.png")).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(16, 16).0, [0xFF, 0, 0, 0xFF]);
}

#[test]
fn missing_mesh_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = trifill(&["--mesh", "nowhere.tri"], dir.path());
    assert!(!out.status.success());
    assert!(!out.stderr.is_empty());
    assert!(!dir.path().join("trifill.png").exists());
}

#[test]
fn unknown_mesh_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("model.xyz"), b"").unwrap();
    let out = trifill(&["--mesh", "model.xyz"], dir.path());
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("UnsupportedFormat"));
}

#[cfg(not(feature = "window"))]
#[test]
fn window_without_feature_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = trifill(&["--window"], dir.path());
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("window"));
}
