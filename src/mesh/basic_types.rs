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

use crate::mesh::edge::Edge;
use crate::mesh::face::Face;
use crate::mesh::half_edge::HalfEdge;
use crate::mesh::vertex::Vertex;
use crate::numeric::scalar::Scalar;

/// Half-edge boundary representation of a polygon mesh.
///
/// All entities live in flat arenas owned by the mesh; every cross-reference
/// is an index into these arenas. Indices equal arena positions and stay
/// stable for the mesh's lifetime: the structure is immutable once built,
/// apart from the per-vertex user values.
#[derive(Debug, Clone)]
pub struct Mesh<T: Scalar, const N: usize> {
    pub vertices: Vec<Vertex<T, N>>,
    pub half_edges: Vec<HalfEdge>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face>,

    /// Unordered endpoint pair `(min, max)` -> edge index. Filled during
    /// twin pairing, kept afterwards for edge-between-vertices lookups.
    pub edge_map: HashMap<(usize, usize), usize>,
}

/// The usual embedding.
pub type Mesh3<T> = Mesh<T, 3>;
