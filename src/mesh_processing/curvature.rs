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

//! Discrete curvature quantities per vertex. The integrated quantities are
//! normalized by the barycentric dual area.

use std::f64::consts::PI;

use crate::error::{MeshError, Result};
use crate::geometry::point::PointOps;
use crate::mesh::basic_types::Mesh;
use crate::mesh_processing::normals::{corner_angle, dihedral_angle, face_area};
use crate::numeric::scalar::Scalar;

/// One third of the incident face areas.
pub fn barycentric_dual_area<T: Scalar>(mesh: &Mesh<T, 3>, v: usize) -> T {
    let third = T::from_f64(1.0 / 3.0);
    mesh.vertex_faces(v)
        .iter()
        .fold(T::zero(), |acc, &f| acc + face_area(mesh, f))
        * third
}

/// 2π minus the incident corner angles; π minus at a boundary vertex.
pub fn angle_defect<T: Scalar>(mesh: &Mesh<T, 3>, v: usize) -> T {
    let full = if mesh.is_boundary_vertex(v) {
        T::from_f64(PI)
    } else {
        T::from_f64(2.0 * PI)
    };
    mesh.outgoing_half_edges(v)
        .iter()
        .fold(full, |acc, &he| acc - corner_angle(mesh, he))
}

/// Angle defect normalized by the barycentric dual area. Zero for a vertex
/// with no incident faces.
pub fn scalar_gauss_curvature<T: Scalar>(mesh: &Mesh<T, 3>, v: usize) -> T {
    let area = barycentric_dual_area(mesh, v);
    if area <= T::tolerance() {
        return T::zero();
    }
    angle_defect(mesh, v) / area
}

/// Half the dihedral-angle-weighted incident edge lengths, normalized by
/// the barycentric dual area.
pub fn scalar_mean_curvature<T: Scalar>(mesh: &Mesh<T, 3>, v: usize) -> T {
    let area = barycentric_dual_area(mesh, v);
    if area <= T::tolerance() {
        return T::zero();
    }
    let half = T::from_f64(0.5);
    let p = &mesh.vertices[v].position;
    let integrated = mesh.outgoing_half_edges(v).iter().fold(T::zero(), |acc, &he| {
        let len = p.distance_to(&mesh.vertices[mesh.target(he)].position);
        acc + dihedral_angle(mesh, he) * len * half
    });
    integrated / area
}

/// Principal curvatures `[k1, k2]` with `k1 <= k2`, recovered from the
/// scalar mean and Gauss curvatures.
pub fn principal_curvatures<T: Scalar>(mesh: &Mesh<T, 3>, v: usize) -> [T; 2] {
    let h = scalar_mean_curvature(mesh, v);
    let k = scalar_gauss_curvature(mesh, v);
    let disc = (h * h - k).max(T::zero()).sqrt();
    [h - disc, h + disc]
}

/// Principal curvatures for every vertex; triangular meshes only.
pub fn vertex_curvatures<T: Scalar>(mesh: &Mesh<T, 3>) -> Result<Vec<[T; 2]>> {
    if !mesh.is_triangular_mesh() {
        return Err(MeshError::NotTriangular);
    }
    Ok((0..mesh.vertices.len())
        .map(|v| principal_curvatures(mesh, v))
        .collect())
}
