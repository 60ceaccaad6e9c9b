// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 the hemesh developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use hemesh::error::MeshError;
use hemesh::geometry::{Point, Point3};
use hemesh::mesh::basic_types::Mesh;
use hemesh::mesh::vertex::UserValue;
use hemesh::mesh_processing::level_sets;

type TestMesh = Mesh<f64, 3>;

const KEY: &str = "sets1";

fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point::from_vals([x, y, z])
}

/// Unit square split along the (0, 2) diagonal, carrying its x coordinate
/// as the scalar field.
fn square_with_x_field() -> TestMesh {
    let mut mesh = TestMesh::from_indexed(
        &[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ],
        &[vec![0, 1, 2], vec![0, 2, 3]],
    )
    .unwrap();

    for vertex in &mut mesh.vertices {
        let x = vertex.position[0];
        vertex.user_values.insert(KEY.to_string(), UserValue::Scalar(x));
    }
    mesh
}

#[test]
fn iso_line_crosses_both_triangles() {
    let mesh = square_with_x_field();
    let levels = level_sets::compute(&mesh, KEY, &[0.5]).unwrap();

    assert_eq!(levels.len(), 1);
    let segments = &levels[0];
    assert_eq!(segments.len(), 2);

    // The x = 0.5 line, one piece per triangle, covering y in [0, 1].
    let mut ys = Vec::new();
    for seg in segments {
        assert!((seg.a[0] - 0.5).abs() < 1e-12);
        assert!((seg.b[0] - 0.5).abs() < 1e-12);
        ys.push(seg.a[1]);
        ys.push(seg.b[1]);
    }
    ys.sort_by(f64::total_cmp);
    assert_eq!(ys.first(), Some(&0.0));
    assert_eq!(ys.last(), Some(&1.0));
}

#[test]
fn one_segment_list_per_level() {
    let mesh = square_with_x_field();
    let levels = level_sets::compute(&mesh, KEY, &[0.25, 0.5, 0.75]).unwrap();
    assert_eq!(levels.len(), 3);
    for segments in &levels {
        assert!(!segments.is_empty());
    }
}

#[test]
fn level_through_vertices_follows_the_boundary_edge() {
    let mesh = square_with_x_field();
    // x = 0 runs exactly along the edge (3, 0) of the second triangle; the
    // first triangle only touches the level at one vertex and yields
    // nothing.
    let levels = level_sets::compute(&mesh, KEY, &[0.0]).unwrap();
    let segments = &levels[0];
    assert_eq!(segments.len(), 1);
    assert!((segments[0].a[0]).abs() < 1e-12);
    assert!((segments[0].b[0]).abs() < 1e-12);
    assert!((segments[0].length() - 1.0).abs() < 1e-12);
}

#[test]
fn out_of_range_level_yields_no_segments() {
    let mesh = square_with_x_field();
    let levels = level_sets::compute(&mesh, KEY, &[2.0]).unwrap();
    assert!(levels[0].is_empty());
}

#[test]
fn missing_key_is_rejected() {
    let mesh = square_with_x_field();
    let err = level_sets::compute(&mesh, "no-such-field", &[0.5]).unwrap_err();
    assert!(matches!(err, MeshError::MissingVertexValue { vertex: 0, .. }));
}

#[test]
fn non_scalar_value_is_rejected() {
    let mut mesh = square_with_x_field();
    mesh.vertices[2].user_values.insert(
        KEY.to_string(),
        UserValue::Vector(hemesh::geometry::Vector::from_vals([1.0, 0.0, 0.0])),
    );
    let err = level_sets::compute(&mesh, KEY, &[0.5]).unwrap_err();
    assert!(matches!(
        err,
        MeshError::MissingVertexValue { vertex: 2, .. }
    ));
}

#[test]
fn non_triangular_mesh_is_rejected() {
    let mut mesh = TestMesh::from_indexed(
        &[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ],
        &[vec![0, 1, 2, 3]],
    )
    .unwrap();
    for vertex in &mut mesh.vertices {
        let x = vertex.position[0];
        vertex.user_values.insert(KEY.to_string(), UserValue::Scalar(x));
    }
    let err = level_sets::compute(&mesh, KEY, &[0.5]).unwrap_err();
    assert!(matches!(err, MeshError::NotTriangular));
}
