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

use std::f64::consts::{FRAC_PI_2, PI};

use hemesh::error::MeshError;
use hemesh::geometry::{Point, Point3, Vector, VectorOps};
use hemesh::mesh::basic_types::Mesh;
use hemesh::mesh_processing::curvature::{
    angle_defect, barycentric_dual_area, principal_curvatures, vertex_curvatures,
};
use hemesh::mesh_processing::normals::{
    NormalWeighting, corner_angle, face_area, face_centroid, face_normal, orthonormal_bases,
    vertex_normal, vertex_normals,
};

type TestMesh = Mesh<f64, 3>;

const EPS: f64 = 1e-9;

fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point::from_vals([x, y, z])
}

/// Flat unit square in the z = 0 plane, CCW so normals point +z, with a
/// center vertex so the fan has an interior vertex.
fn flat_fan() -> TestMesh {
    TestMesh::from_indexed(
        &[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.5, 0.5, 0.0),
        ],
        &[
            vec![0, 1, 4],
            vec![1, 2, 4],
            vec![2, 3, 4],
            vec![3, 0, 4],
        ],
    )
    .unwrap()
}

/// Same fan with the center lifted into an apex.
fn pyramid() -> TestMesh {
    TestMesh::from_indexed(
        &[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.5, 0.5, 0.5),
        ],
        &[
            vec![0, 1, 4],
            vec![1, 2, 4],
            vec![2, 3, 4],
            vec![3, 0, 4],
        ],
    )
    .unwrap()
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < EPS, "{} != {}", a, b);
}

#[test]
fn face_measures_on_flat_fan() {
    let mesh = flat_fan();

    for f in 0..4 {
        let n = face_normal(&mesh, f);
        assert_close(n[0], 0.0);
        assert_close(n[1], 0.0);
        assert_close(n[2], 1.0);
        assert_close(face_area(&mesh, f), 0.25);
    }

    let c = face_centroid(&mesh, 0);
    assert_close(c[0], 0.5);
    assert_close(c[1], 1.0 / 6.0);
    assert_close(c[2], 0.0);
}

#[test]
fn quad_face_area_sums_the_fan() {
    let quad = TestMesh::from_indexed(
        &[
            p(0.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ],
        &[vec![0, 1, 2, 3]],
    )
    .unwrap();
    assert_close(face_area(&quad, 0), 2.0);
}

#[test]
fn orthonormal_bases_span_the_tangent_plane() {
    let mesh = pyramid();
    for f in 0..4 {
        let n = face_normal(&mesh, f);
        let [e1, e2] = orthonormal_bases(&mesh, f);
        assert_close(e1.norm(), 1.0);
        assert_close(e2.norm(), 1.0);
        assert_close(e1.dot(&e2), 0.0);
        assert_close(e1.dot(&n), 0.0);
        assert_close(e2.dot(&n), 0.0);
    }
}

#[test]
fn corner_angles_sum_to_pi_per_triangle() {
    let mesh = pyramid();
    for f in 0..4 {
        let total: f64 = mesh
            .face_half_edges(f)
            .iter()
            .map(|&he| corner_angle(&mesh, he))
            .sum();
        assert_close(total, PI);
    }
}

#[test]
fn geometric_weightings_recover_the_plane_normal() {
    let mesh = flat_fan();
    let up = Vector::from_vals([0.0, 0.0, 1.0]);

    for weighting in [
        NormalWeighting::Equal,
        NormalWeighting::Area,
        NormalWeighting::Angle,
        NormalWeighting::SphereInscribed,
    ] {
        let normals = vertex_normals(&mesh, weighting).unwrap();
        assert_eq!(normals.len(), 5);
        for n in &normals {
            assert_close(n.dot(&up), 1.0);
        }
    }
}

#[test]
fn curvature_weightings_align_with_the_apex_axis() {
    let mesh = pyramid();
    let axis = Vector::from_vals([0.0, 0.0, 1.0]);

    for weighting in [NormalWeighting::GaussCurvature, NormalWeighting::MeanCurvature] {
        let n = vertex_normal(&mesh, 4, weighting);
        assert_close(n.norm(), 1.0);
        assert!(
            n.dot(&axis).abs() > 1.0 - EPS,
            "apex normal {:?} not aligned with the axis",
            n
        );
    }
}

#[test]
fn vertex_normals_reject_non_triangular_meshes() {
    let quad = TestMesh::from_indexed(
        &[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ],
        &[vec![0, 1, 2, 3]],
    )
    .unwrap();
    assert!(matches!(
        vertex_normals(&quad, NormalWeighting::Equal),
        Err(MeshError::NotTriangular)
    ));
    assert!(matches!(
        vertex_curvatures(&quad),
        Err(MeshError::NotTriangular)
    ));
}

#[test]
fn angle_defect_flat_interior_and_square_corner() {
    let mesh = flat_fan();
    // Interior vertex of a flat patch is intrinsically flat.
    assert_close(angle_defect(&mesh, 4), 0.0);
    // Square corner on the boundary: pi minus a right angle.
    assert_close(angle_defect(&mesh, 0), FRAC_PI_2);
}

#[test]
fn flat_mesh_has_zero_curvature() {
    let mesh = flat_fan();
    assert_close(barycentric_dual_area(&mesh, 4), 1.0 / 3.0);
    let [k1, k2] = principal_curvatures(&mesh, 4);
    assert_close(k1, 0.0);
    assert_close(k2, 0.0);
}

#[test]
fn apex_of_a_pyramid_is_intrinsically_curved() {
    let mesh = pyramid();
    let defect = angle_defect(&mesh, 4);
    assert!(defect > EPS, "apex defect {} should be positive", defect);

    let [k1, k2] = principal_curvatures(&mesh, 4);
    assert!(k1 <= k2);
    assert!(k1.is_finite() && k2.is_finite());
    // Convex apex: both principal curvatures bend the same way.
    assert!(k1 * k2 > 0.0, "gauss curvature at the apex must be positive");
}
