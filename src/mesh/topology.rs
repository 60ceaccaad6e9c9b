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

use smallvec::SmallVec;

use crate::mesh::basic_types::Mesh;
use crate::numeric::scalar::Scalar;

impl<T: Scalar, const N: usize> Mesh<T, N> {
    /// Origin vertex of a half-edge.
    #[inline]
    pub fn source(&self, he: usize) -> usize {
        self.half_edges[he].vertex
    }

    /// Head vertex of a half-edge.
    #[inline]
    pub fn target(&self, he: usize) -> usize {
        self.half_edges[self.half_edges[he].next].vertex
    }

    /// Half-edges bounding a face, starting at its stored half-edge.
    pub fn face_half_edges(&self, f: usize) -> SmallVec<[usize; 4]> {
        let start = self.faces[f].half_edge;
        let mut out = SmallVec::new();
        let mut he = start;
        loop {
            out.push(he);
            he = self.half_edges[he].next;
            if he == start {
                break;
            }
        }
        out
    }

    /// Ordered boundary loop of a face as vertex indices.
    pub fn face_vertices(&self, f: usize) -> SmallVec<[usize; 4]> {
        self.face_half_edges(f)
            .iter()
            .map(|&he| self.half_edges[he].vertex)
            .collect()
    }

    /// Ordered boundary loop of a face as edge indices.
    pub fn face_edges(&self, f: usize) -> SmallVec<[usize; 4]> {
        self.face_half_edges(f)
            .iter()
            .map(|&he| self.half_edges[he].edge)
            .collect()
    }

    /// Number of sides of a face.
    pub fn face_degree(&self, f: usize) -> usize {
        self.face_half_edges(f).len()
    }

    /// Outgoing half-edges around a vertex, in `twin.next` rotation order.
    ///
    /// At a boundary vertex the walk first rewinds against the rotation
    /// until the incoming side of the fan is unpaired, then runs forward to
    /// the unpaired outgoing side: the result is an open fan, not a closed
    /// ring, and callers must not assume closure.
    pub fn outgoing_half_edges(&self, v: usize) -> Vec<usize> {
        let Some(start) = self.vertices[v].half_edge else {
            return Vec::new();
        };

        // Rewind: twin(prev) inverts the forward rotation next(twin).
        let mut first = start;
        let mut guard = self.half_edges.len();
        loop {
            let incoming = self.half_edges[first].prev;
            match self.half_edges[incoming].twin {
                Some(t) => {
                    first = t;
                    if first == start {
                        break;
                    }
                }
                None => break,
            }
            guard -= 1;
            if guard == 0 {
                break;
            }
        }

        let mut spokes = Vec::new();
        let mut he = first;
        let mut guard = self.half_edges.len();
        loop {
            spokes.push(he);
            match self.half_edges[he].twin {
                Some(t) => {
                    he = self.half_edges[t].next;
                    if he == first {
                        break;
                    }
                }
                None => break,
            }
            guard -= 1;
            if guard == 0 {
                break;
            }
        }
        spokes
    }

    /// One-step vertex neighbors in rotation order. At a boundary vertex
    /// the neighbor across the leading open gap is included first, so the
    /// one-step neighborhood is complete.
    pub fn vertex_neighbors(&self, v: usize) -> Vec<usize> {
        let spokes = self.outgoing_half_edges(v);
        let mut out = Vec::with_capacity(spokes.len() + 1);
        if let Some(&first) = spokes.first() {
            let incoming = self.half_edges[first].prev;
            if self.half_edges[incoming].twin.is_none() {
                out.push(self.half_edges[incoming].vertex);
            }
        }
        out.extend(spokes.iter().map(|&he| self.target(he)));
        out
    }

    /// Edges incident to a vertex, same rotation order and boundary
    /// handling as [`Mesh::vertex_neighbors`].
    pub fn vertex_edges(&self, v: usize) -> Vec<usize> {
        let spokes = self.outgoing_half_edges(v);
        let mut out = Vec::with_capacity(spokes.len() + 1);
        if let Some(&first) = spokes.first() {
            let incoming = self.half_edges[first].prev;
            if self.half_edges[incoming].twin.is_none() {
                out.push(self.half_edges[incoming].edge);
            }
        }
        out.extend(spokes.iter().map(|&he| self.half_edges[he].edge));
        out
    }

    /// Faces incident to a vertex, one per outgoing spoke.
    pub fn vertex_faces(&self, v: usize) -> Vec<usize> {
        self.outgoing_half_edges(v)
            .iter()
            .map(|&he| self.half_edges[he].face)
            .collect()
    }

    /// True when some incident edge is unpaired.
    pub fn is_boundary_vertex(&self, v: usize) -> bool {
        self.outgoing_half_edges(v)
            .iter()
            .any(|&he| self.half_edges[he].twin.is_none())
    }

    pub fn boundary_vertices(&self) -> Vec<usize> {
        (0..self.vertices.len())
            .filter(|&v| self.is_boundary_vertex(v))
            .collect()
    }

    /// True when the edge has exactly one incident face.
    pub fn is_boundary_edge(&self, e: usize) -> bool {
        self.half_edges[self.edges[e].half_edge].twin.is_none()
    }

    /// The edge between two vertices, if one exists.
    pub fn edge_between(&self, v0: usize, v1: usize) -> Option<usize> {
        let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
        self.edge_map.get(&key).copied()
    }

    /// The half-edge running from `v0` to `v1`, if one exists.
    pub fn half_edge_between(&self, v0: usize, v1: usize) -> Option<usize> {
        let e = self.edge_between(v0, v1)?;
        let rep = self.edges[e].half_edge;
        if self.source(rep) == v0 {
            return Some(rep);
        }
        self.half_edges[rep].twin.filter(|&t| self.source(t) == v0)
    }

    /// Endpoint vertices of an edge, representative side first.
    pub fn edge_vertices(&self, e: usize) -> [usize; 2] {
        let rep = self.edges[e].half_edge;
        [self.source(rep), self.target(rep)]
    }

    /// One or two faces incident to an edge; one exactly when boundary.
    pub fn edge_faces(&self, e: usize) -> SmallVec<[usize; 2]> {
        let rep = self.edges[e].half_edge;
        let mut out = SmallVec::new();
        out.push(self.half_edges[rep].face);
        if let Some(t) = self.half_edges[rep].twin {
            out.push(self.half_edges[t].face);
        }
        out
    }
}

/// On-demand derivation of the nine adjacency relations of a built mesh,
/// each keyed by entity index and valued by an ordered index sequence.
///
/// The three groups are computed independently by caller choice; reading a
/// map before its `compute_*` pass has run yields an empty mapping, not an
/// error.
#[derive(Debug)]
pub struct MeshTopology<'m, T: Scalar, const N: usize> {
    mesh: &'m Mesh<T, N>,

    pub vertex_vertex: HashMap<usize, Vec<usize>>,
    pub vertex_edges: HashMap<usize, Vec<usize>>,
    pub vertex_faces: HashMap<usize, Vec<usize>>,

    pub edge_vertex: HashMap<usize, Vec<usize>>,
    pub edge_edge: HashMap<usize, Vec<usize>>,
    pub edge_face: HashMap<usize, Vec<usize>>,

    pub face_vertex: HashMap<usize, Vec<usize>>,
    pub face_edge: HashMap<usize, Vec<usize>>,
    pub face_face: HashMap<usize, Vec<usize>>,
}

impl<'m, T: Scalar, const N: usize> MeshTopology<'m, T, N> {
    pub fn new(mesh: &'m Mesh<T, N>) -> Self {
        Self {
            mesh,
            vertex_vertex: HashMap::new(),
            vertex_edges: HashMap::new(),
            vertex_faces: HashMap::new(),
            edge_vertex: HashMap::new(),
            edge_edge: HashMap::new(),
            edge_face: HashMap::new(),
            face_vertex: HashMap::new(),
            face_edge: HashMap::new(),
            face_face: HashMap::new(),
        }
    }

    /// Fills VV, VE and VF, keyed by vertex index.
    pub fn compute_vertex_adjacency(&mut self) {
        for v in 0..self.mesh.vertices.len() {
            self.vertex_vertex.insert(v, self.mesh.vertex_neighbors(v));
            self.vertex_edges.insert(v, self.mesh.vertex_edges(v));
            self.vertex_faces.insert(v, self.mesh.vertex_faces(v));
        }
    }

    /// Fills EV, EE and EF, keyed by edge index.
    pub fn compute_edge_adjacency(&mut self) {
        for e in 0..self.mesh.edges.len() {
            let [v0, v1] = self.mesh.edge_vertices(e);
            self.edge_vertex.insert(e, vec![v0, v1]);

            // Edges sharing a vertex with `e`; an edge meets itself at both
            // endpoints and at nothing else, so no dedup is needed.
            let mut around = Vec::new();
            for v in [v0, v1] {
                around.extend(
                    self.mesh
                        .vertex_edges(v)
                        .into_iter()
                        .filter(|&other| other != e),
                );
            }
            self.edge_edge.insert(e, around);

            self.edge_face.insert(e, self.mesh.edge_faces(e).into_vec());
        }
    }

    /// Fills FV, FE and FF, keyed by face index.
    pub fn compute_face_adjacency(&mut self) {
        for f in 0..self.mesh.faces.len() {
            self.face_vertex
                .insert(f, self.mesh.face_vertices(f).into_vec());
            self.face_edge.insert(f, self.mesh.face_edges(f).into_vec());

            let mut across = Vec::new();
            for he in self.mesh.face_half_edges(f) {
                if let Some(t) = self.mesh.half_edges[he].twin {
                    across.push(self.mesh.half_edges[t].face);
                }
            }
            self.face_face.insert(f, across);
        }
    }
}
