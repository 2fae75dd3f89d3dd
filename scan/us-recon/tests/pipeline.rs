//! End-to-end reconstruction tests.
//!
//! Synthetic acquisitions stand in for scanner output: every slice is an
//! ellipse around the probe column whose size varies with the angle, fed
//! through each slice source the crate accepts.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::io::Write;

use approx::assert_relative_eq;
use nalgebra::Point2;
use us_recon::prelude::*;
use us_recon::scan_io::GrayImage;
use us_recon::{reconstruct_images, reconstruct_point_log};

/// Contour of slice `angle`: an ellipse whose width depends on the angle.
fn slice(angle: usize, n: usize) -> Vec<Point2<f64>> {
    let rx = 30.0 + 2.0 * angle as f64;
    (0..n)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / n as f64;
            Point2::new(120.0 + rx * a.cos(), 100.0 + 40.0 * a.sin())
        })
        .collect()
}

fn acquisition() -> Vec<Vec<Point2<f64>>> {
    (0..12).map(|angle| slice(angle, 45)).collect()
}

fn is_zero_or_unit(n: &nalgebra::Vector3<f64>) -> bool {
    n.norm() == 0.0 || (n.norm() - 1.0).abs() < 1e-9
}

#[test]
fn full_pipeline_is_closed_and_has_normals() {
    let recon = reconstruct(&acquisition(), &ReconConfig::default()).unwrap();
    let mesh = &recon.mesh;

    // 12 rings of 49, one Loop pass.
    let tube_vertices = 12 * 49;
    let tube_faces = 12 * 49 * 2;
    let tube_edges = tube_faces * 3 / 2;
    assert_eq!(mesh.vertex_count(), tube_vertices + tube_edges);
    assert_eq!(mesh.face_count(), tube_faces * 4);
    assert!(mesh.is_closed());

    assert!(mesh.schema().contains(VertexProperty::Nx));
    let normals: Vec<_> = mesh.vertices.iter().map(|v| v.normal().unwrap()).collect();
    assert!(normals.iter().all(is_zero_or_unit));
    let unit = normals.iter().filter(|n| n.norm() > 0.0).count();
    assert!(unit * 4 >= normals.len() * 3, "{unit} of {} unit normals", normals.len());
}

#[test]
fn poles_are_shared_by_all_rings() {
    let config = ReconConfig::default()
        .with_subdivide(false)
        .with_update_normals(false);
    let recon = reconstruct(&acquisition(), &config).unwrap();
    let mesh = &recon.mesh;

    let first = mesh.vertices[0].position;
    let middle = mesh.vertices[24].position;
    for ring in 0..12 {
        let base = ring * 49;
        for offset in [0, 1, 48] {
            assert_eq!(mesh.vertices[base + offset].position, first);
        }
        for offset in [23, 24, 25] {
            assert_eq!(mesh.vertices[base + offset].position, middle);
        }
    }

    // Both poles lie on the rotation axis (x = z = 0 after projection).
    assert!(first.x.abs() < 0.5 && first.z.abs() < 0.5);
    assert!(middle.y > first.y);
}

#[test]
fn degenerate_slices_are_skipped() {
    let mut slices = acquisition();
    slices[2] = vec![Point2::origin(); 49];
    slices[7].clear();

    let config = ReconConfig::default().with_update_normals(false);
    let recon = reconstruct(&slices, &config).unwrap();

    assert_eq!(recon.skipped_angles, vec![2, 7]);
    assert_eq!(recon.used_angles, vec![0, 1, 3, 4, 5, 6, 8, 9, 10, 11]);
    assert!(recon.mesh.is_closed());
    assert!(recon.to_string().contains("10/12 slices"));
}

#[test]
fn single_usable_slice_is_an_error() {
    let mut slices = vec![Vec::new(); 12];
    slices[4] = slice(4, 45);

    let err = reconstruct(&slices, &ReconConfig::default()).unwrap_err();
    assert!(matches!(err, ReconError::TooFewRings { min: 2, actual: 1 }));
}

#[test]
fn ply_roundtrip_keeps_mesh() {
    let recon = reconstruct(&acquisition(), &ReconConfig::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();

    for binary in [true, false] {
        let path = dir.path().join(if binary { "bin.ply" } else { "ascii.ply" });
        save_ply(&recon.mesh, &path, binary).unwrap();
        let loaded = load_ply(&path).unwrap();

        assert_eq!(loaded.vertex_count(), recon.mesh.vertex_count());
        assert_eq!(loaded.faces, recon.mesh.faces);
        assert!(loaded.schema().contains(VertexProperty::Nz));
        assert!(loaded.is_closed());

        for (a, b) in loaded.vertices.iter().zip(&recon.mesh.vertices) {
            assert_relative_eq!(a.position, b.position, epsilon = 1e-5);
        }
    }
}

#[test]
fn bitmap_stack_source() {
    let mut stack = ImageStack::default();
    for angle in 0..12 {
        let mut image = GrayImage::filled(240, 200, 0);
        for p in slice(angle, 40) {
            image.set(p.x.round() as usize, p.y.round() as usize, 255).unwrap();
        }
        stack.push(image).unwrap();
    }

    let config = ReconConfig::default().with_subdivide(false);
    let recon = reconstruct_images(&stack, &config).unwrap();

    assert_eq!(recon.used_angles.len(), 12);
    assert_eq!(recon.mesh.vertex_count(), 12 * 49);
    assert!(recon.mesh.is_closed());
}

#[test]
fn point_log_source() {
    let layout = PointLogLayout::default();
    let mut x_bytes = Vec::new();
    let mut y_bytes = Vec::new();
    for angle in 0..12 {
        let points = if angle == 5 {
            vec![Point2::origin(); 49]
        } else {
            slice(angle, 49)
        };
        for p in points {
            // x channel holds rows, y channel columns, both doubled.
            x_bytes.extend(((p.y * 2.0).round() as u16).to_le_bytes());
            y_bytes.extend(((p.x * 2.0).round() as u16).to_le_bytes());
        }
        x_bytes.extend([0u8; 4]);
        y_bytes.extend([0u8; 4]);
    }

    let dir = tempfile::tempdir().unwrap();
    let x_path = dir.path().join("BDX.BIN");
    let y_path = dir.path().join("BDY.BIN");
    std::fs::File::create(&x_path).unwrap().write_all(&x_bytes).unwrap();
    std::fs::File::create(&y_path).unwrap().write_all(&y_bytes).unwrap();

    let recon = reconstruct_point_log(&x_path, &y_path, &layout, &ReconConfig::default()).unwrap();
    assert_eq!(recon.skipped_angles, vec![5]);
    assert!(recon.mesh.is_closed());

    let missing = reconstruct_point_log(
        dir.path().join("nope.bin"),
        &y_path,
        &layout,
        &ReconConfig::default(),
    );
    assert!(matches!(missing, Err(ReconError::Scan(_))));
}
