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

//! Iso-line extraction over a per-vertex scalar field.

use smallvec::SmallVec;

use crate::error::{MeshError, Result};
use crate::geometry::point::{Point, PointOps};
use crate::geometry::segment::Segment;
use crate::geometry::vector::VectorOps;
use crate::mesh::basic_types::Mesh;
use crate::mesh::vertex::UserValue;
use crate::numeric::scalar::Scalar;

/// Traces iso-lines of the scalar field stored under `key`, one segment
/// list per requested level.
///
/// The field must be present as [`UserValue::Scalar`] on every vertex;
/// tracing is per-triangle by linear interpolation along the edges, so
/// segments come back unordered, one per crossed face.
pub fn compute<T: Scalar>(
    mesh: &Mesh<T, 3>,
    key: &str,
    levels: &[T],
) -> Result<Vec<Vec<Segment<T, 3>>>> {
    if !mesh.is_triangular_mesh() {
        return Err(MeshError::NotTriangular);
    }

    // Fetch the field once so a missing key fails before any tracing.
    let mut field = Vec::with_capacity(mesh.vertices.len());
    for (v, vertex) in mesh.vertices.iter().enumerate() {
        match vertex.user_values.get(key) {
            Some(UserValue::Scalar(s)) => field.push(*s),
            _ => {
                return Err(MeshError::MissingVertexValue {
                    vertex: v,
                    key: key.to_string(),
                });
            }
        }
    }

    let mut result = Vec::with_capacity(levels.len());
    for &level in levels {
        let mut segments = Vec::new();
        for f in 0..mesh.faces.len() {
            if let Some(seg) = face_level(mesh, &field, f, level) {
                segments.push(seg);
            }
        }
        result.push(segments);
    }
    Ok(result)
}

/// Crossing of one triangle with one level, if any. A face lying entirely
/// on the level yields three coincidence points and is skipped.
fn face_level<T: Scalar>(
    mesh: &Mesh<T, 3>,
    field: &[T],
    f: usize,
    level: T,
) -> Option<Segment<T, 3>> {
    let vs = mesh.face_vertices(f);
    let mut points: SmallVec<[Point<T, 3>; 3]> = SmallVec::new();

    for i in 0..3 {
        let (a, b) = (vs[i], vs[(i + 1) % 3]);
        let (sa, sb) = (field[a] - level, field[b] - level);

        if sa == T::zero() {
            let p = mesh.vertices[a].position;
            if !points.contains(&p) {
                points.push(p);
            }
        }
        if sa * sb < T::zero() {
            let t = sa / (sa - sb);
            let pa = &mesh.vertices[a].position;
            let p = pa.add_vector(&pa.vector_to(&mesh.vertices[b].position).scale(t));
            points.push(p);
        }
    }

    (points.len() == 2).then(|| Segment::new(&points[0], &points[1]))
}
