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

use std::collections::HashMap;

use crate::error::{MeshError, Result};
use crate::geometry::point::Point;
use crate::mesh::basic_types::Mesh;
use crate::mesh::edge::Edge;
use crate::mesh::face::Face;
use crate::mesh::half_edge::HalfEdge;
use crate::mesh::vertex::Vertex;
use crate::numeric::scalar::Scalar;

impl<T: Scalar, const N: usize> Mesh<T, N> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            half_edges: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            edge_map: HashMap::new(),
        }
    }

    /// Builds a half-edge mesh from an indexed face-vertex description.
    ///
    /// Vertices keep their input order as indices and faces are wired in
    /// input order, so the result round-trips through [`Mesh::to_indexed`].
    /// Fails with [`MeshError::InvalidFace`] on a face with fewer than three
    /// distinct vertices or an out-of-range index, and with
    /// [`MeshError::NonManifoldEdge`] when an unordered vertex pair would be
    /// claimed by more than two face sides. On failure the partially wired
    /// mesh is dropped here and never observable.
    pub fn from_indexed(positions: &[Point<T, N>], faces: &[Vec<usize>]) -> Result<Self> {
        let mut mesh = Self::new();
        mesh.vertices.reserve(positions.len());
        for &position in positions {
            mesh.vertices.push(Vertex::new(position));
        }
        for face_vertices in faces {
            mesh.add_face(face_vertices)?;
        }
        Ok(mesh)
    }

    /// Wires one face loop: half-edges chained in input order, twin pairing
    /// through `edge_map`, one edge record per unordered vertex pair.
    fn add_face(&mut self, loop_vertices: &[usize]) -> Result<usize> {
        let face_idx = self.faces.len();
        let n = loop_vertices.len();

        if n < 3 {
            return Err(MeshError::InvalidFace {
                face: face_idx,
                reason: format!("{} vertices, need at least 3", n),
            });
        }
        for (i, &v) in loop_vertices.iter().enumerate() {
            if v >= self.vertices.len() {
                return Err(MeshError::InvalidFace {
                    face: face_idx,
                    reason: format!("vertex index {} out of range", v),
                });
            }
            if loop_vertices[..i].contains(&v) {
                return Err(MeshError::InvalidFace {
                    face: face_idx,
                    reason: format!("repeated vertex index {}", v),
                });
            }
        }

        let base = self.half_edges.len();
        self.faces.push(Face::new(base));

        for (i, &v) in loop_vertices.iter().enumerate() {
            self.half_edges.push(HalfEdge {
                vertex: v,
                face: face_idx,
                next: base + (i + 1) % n,
                prev: base + (i + n - 1) % n,
                twin: None,
                edge: usize::MAX,
            });
            self.vertices[v].half_edge.get_or_insert(base + i);
        }

        for i in 0..n {
            let he_idx = base + i;
            let a = loop_vertices[i];
            let b = loop_vertices[(i + 1) % n];
            let key = if a < b { (a, b) } else { (b, a) };

            match self.edge_map.get(&key) {
                None => {
                    let edge_idx = self.edges.len();
                    self.edges.push(Edge::new(he_idx));
                    self.edge_map.insert(key, edge_idx);
                    self.half_edges[he_idx].edge = edge_idx;
                }
                Some(&edge_idx) => {
                    let rep = self.edges[edge_idx].half_edge;
                    // A fully paired edge, or a second half-edge running the
                    // same way (inconsistent winding), cannot be twinned.
                    if self.half_edges[rep].twin.is_some() || self.half_edges[rep].vertex == a {
                        return Err(MeshError::NonManifoldEdge { v0: key.0, v1: key.1 });
                    }
                    self.half_edges[rep].twin = Some(he_idx);
                    self.half_edges[he_idx].twin = Some(rep);
                    self.half_edges[he_idx].edge = edge_idx;
                }
            }
        }

        Ok(face_idx)
    }

    /// Projects the mesh back to a flat vertex list plus polygon index
    /// loops. Inverse of [`Mesh::from_indexed`]: positions come back
    /// exactly, each loop up to cyclic rotation.
    pub fn to_indexed(&self) -> (Vec<Point<T, N>>, Vec<Vec<usize>>) {
        let positions = self.vertices.iter().map(|v| v.position).collect();
        let faces = (0..self.faces.len())
            .map(|f| self.face_vertices(f).into_vec())
            .collect();
        (positions, faces)
    }

    /// Arity-restricted conversion for hosts that accept only triangles and
    /// quads. All-or-nothing: the first offending face fails the whole
    /// conversion and nothing truncated or triangulated is emitted.
    pub fn to_tri_quad_indexed(&self) -> Result<(Vec<Point<T, N>>, Vec<Vec<usize>>)> {
        let mut faces = Vec::with_capacity(self.faces.len());
        for f in 0..self.faces.len() {
            let loop_vertices = self.face_vertices(f);
            let arity = loop_vertices.len();
            if arity != 3 && arity != 4 {
                return Err(MeshError::UnsupportedArity { face: f, arity });
            }
            faces.push(loop_vertices.into_vec());
        }
        let positions = self.vertices.iter().map(|v| v.position).collect();
        Ok((positions, faces))
    }

    /// Whole-mesh gate used by hosts restricted to triangles and quads,
    /// ahead of [`Mesh::to_tri_quad_indexed`].
    pub fn check_tri_quad(&self) -> Result<()> {
        if self.is_ngon_mesh() {
            return Err(MeshError::NgonMesh);
        }
        Ok(())
    }

    /// True when every face is a triangle.
    pub fn is_triangular_mesh(&self) -> bool {
        (0..self.faces.len()).all(|f| self.face_degree(f) == 3)
    }

    /// True when every face is a quad.
    pub fn is_quad_mesh(&self) -> bool {
        (0..self.faces.len()).all(|f| self.face_degree(f) == 4)
    }

    /// True when any face has more than four sides.
    pub fn is_ngon_mesh(&self) -> bool {
        (0..self.faces.len()).any(|f| self.face_degree(f) > 4)
    }

    pub fn euler_characteristic(&self) -> isize {
        self.vertices.len() as isize - self.edges.len() as isize + self.faces.len() as isize
    }
}

impl<T: Scalar, const N: usize> Default for Mesh<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
