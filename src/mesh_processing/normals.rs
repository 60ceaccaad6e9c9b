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

//! Face measures and vertex normals.
//!
//! The per-vertex weightings follow the discrete-differential-geometry
//! formulations; the curvature-based ones degenerate to the zero vector on
//! flat regions, which normalizes to zero rather than a unit normal.

use crate::error::{MeshError, Result};
use crate::geometry::point::{Point, PointOps};
use crate::geometry::vector::{Cross3, Vector, VectorOps};
use crate::mesh::basic_types::Mesh;
use crate::numeric::scalar::Scalar;

/// Weighting schemes for averaging face data into a vertex normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalWeighting {
    Equal,
    Area,
    Angle,
    GaussCurvature,
    MeanCurvature,
    SphereInscribed,
}

/// Unit normal of a face, taken at its first corner.
pub fn face_normal<T: Scalar>(mesh: &Mesh<T, 3>, f: usize) -> Vector<T, 3> {
    let he = mesh.faces[f].half_edge;
    let next = mesh.half_edges[he].next;
    let p0 = &mesh.vertices[mesh.half_edges[he].vertex].position;
    let p1 = &mesh.vertices[mesh.half_edges[next].vertex].position;
    let p2 = &mesh.vertices[mesh.half_edges[mesh.half_edges[next].next].vertex].position;
    p0.vector_to(p1).cross(&p0.vector_to(p2)).normalized()
}

/// Face area, summed over the triangle fan from the first loop vertex.
pub fn face_area<T: Scalar>(mesh: &Mesh<T, 3>, f: usize) -> T {
    let vs = mesh.face_vertices(f);
    let p0 = &mesh.vertices[vs[0]].position;
    let half = T::from_f64(0.5);
    let mut area = T::zero();
    for w in vs[1..].windows(2) {
        let a = p0.vector_to(&mesh.vertices[w[0]].position);
        let b = p0.vector_to(&mesh.vertices[w[1]].position);
        area = area + a.cross(&b).norm() * half;
    }
    area
}

/// Centroid of a face's vertices.
pub fn face_centroid<T: Scalar>(mesh: &Mesh<T, 3>, f: usize) -> Point<T, 3> {
    let vs = mesh.face_vertices(f);
    let inv = T::one() / T::from_f64(vs.len() as f64);
    let mut coords = [T::zero(); 3];
    for &v in &vs {
        for (i, c) in coords.iter_mut().enumerate() {
            *c = *c + mesh.vertices[v].position[i];
        }
    }
    Point::new(coords.map(|c| c * inv))
}

/// Orthonormal tangent basis of a face: the first edge direction and its
/// in-plane perpendicular.
pub fn orthonormal_bases<T: Scalar>(mesh: &Mesh<T, 3>, f: usize) -> [Vector<T, 3>; 2] {
    let he = mesh.faces[f].half_edge;
    let p0 = &mesh.vertices[mesh.source(he)].position;
    let p1 = &mesh.vertices[mesh.target(he)].position;
    let e1 = p0.vector_to(p1).normalized();
    let e2 = face_normal(mesh, f).cross(&e1);
    [e1, e2]
}

/// Interior angle at the origin of `he` inside its face.
pub fn corner_angle<T: Scalar>(mesh: &Mesh<T, 3>, he: usize) -> T {
    let p = &mesh.vertices[mesh.source(he)].position;
    let a = p.vector_to(&mesh.vertices[mesh.target(he)].position);
    let prev = mesh.half_edges[he].prev;
    let b = p.vector_to(&mesh.vertices[mesh.source(prev)].position);
    a.cross(&b).norm().atan2(a.dot(&b))
}

/// Cotangent of the angle opposite `he` in its triangle. Zero for a
/// degenerate corner.
pub fn cotan<T: Scalar>(mesh: &Mesh<T, 3>, he: usize) -> T {
    let prev = mesh.half_edges[he].prev;
    let p = &mesh.vertices[mesh.source(prev)].position;
    let u = p.vector_to(&mesh.vertices[mesh.source(he)].position);
    let w = p.vector_to(&mesh.vertices[mesh.target(he)].position);
    let denom = u.cross(&w).norm();
    if denom <= T::tolerance() {
        return T::zero();
    }
    u.dot(&w) / denom
}

/// Signed dihedral angle across the edge of `he`; zero on the boundary.
pub fn dihedral_angle<T: Scalar>(mesh: &Mesh<T, 3>, he: usize) -> T {
    let Some(twin) = mesh.half_edges[he].twin else {
        return T::zero();
    };
    let n1 = face_normal(mesh, mesh.half_edges[he].face);
    let n2 = face_normal(mesh, mesh.half_edges[twin].face);
    let p0 = &mesh.vertices[mesh.source(he)].position;
    let p1 = &mesh.vertices[mesh.target(he)].position;
    let e = p0.vector_to(p1).normalized();
    e.dot(&n1.cross(&n2)).atan2(n1.dot(&n2))
}

/// Normal of one vertex under the given weighting. Assumes a triangular
/// mesh; [`vertex_normals`] is the gated whole-mesh form.
pub fn vertex_normal<T: Scalar>(
    mesh: &Mesh<T, 3>,
    v: usize,
    weighting: NormalWeighting,
) -> Vector<T, 3> {
    let half = T::from_f64(0.5);
    let p = &mesh.vertices[v].position;
    let mut n = Vector::zero();

    for he in mesh.outgoing_half_edges(v) {
        match weighting {
            NormalWeighting::Equal => {
                n = n + face_normal(mesh, mesh.half_edges[he].face);
            }
            NormalWeighting::Area => {
                let f = mesh.half_edges[he].face;
                n = n + face_normal(mesh, f).scale(face_area(mesh, f));
            }
            NormalWeighting::Angle => {
                let f = mesh.half_edges[he].face;
                n = n + face_normal(mesh, f).scale(corner_angle(mesh, he));
            }
            NormalWeighting::GaussCurvature => {
                let e = p.vector_to(&mesh.vertices[mesh.target(he)].position);
                n = n + e.normalized().scale(dihedral_angle(mesh, he) * half);
            }
            NormalWeighting::MeanCurvature => {
                let to = p.vector_to(&mesh.vertices[mesh.target(he)].position);
                let mut w = cotan(mesh, he);
                if let Some(t) = mesh.half_edges[he].twin {
                    w = w + cotan(mesh, t);
                }
                n = n - to.scale(w * half);
            }
            NormalWeighting::SphereInscribed => {
                let e1 = p.vector_to(&mesh.vertices[mesh.target(he)].position);
                let prev = mesh.half_edges[he].prev;
                let e2 = p.vector_to(&mesh.vertices[mesh.source(prev)].position);
                let denom = e1.norm_squared() * e2.norm_squared();
                if denom > T::tolerance() {
                    n = n + e1.cross(&e2).scale(T::one() / denom);
                }
            }
        }
    }

    n.normalized()
}

/// Vertex normals for the whole mesh. The weightings are defined on
/// triangular meshes; anything else is rejected.
pub fn vertex_normals<T: Scalar>(
    mesh: &Mesh<T, 3>,
    weighting: NormalWeighting,
) -> Result<Vec<Vector<T, 3>>> {
    if !mesh.is_triangular_mesh() {
        return Err(MeshError::NotTriangular);
    }
    Ok((0..mesh.vertices.len())
        .map(|v| vertex_normal(mesh, v, weighting))
        .collect())
}
