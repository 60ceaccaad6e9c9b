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

use thiserror::Error;

/// Result alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors surfaced by mesh construction, conversion and the algorithms
/// derived from the half-edge structure. All are value-level and final;
/// none represent transient conditions.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A face references fewer than three distinct vertices, or an index
    /// outside the vertex list.
    #[error("invalid face {face}: {reason}")]
    InvalidFace { face: usize, reason: String },

    /// An unordered vertex pair is claimed by more than two face sides.
    #[error("non-manifold edge ({v0}, {v1}): shared by more than two face sides")]
    NonManifoldEdge { v0: usize, v1: usize },

    /// A face exceeds the arity the target representation accepts.
    #[error("face {face} has {arity} sides; target accepts only triangles and quads")]
    UnsupportedArity { face: usize, arity: usize },

    /// Whole-mesh gate for hosts restricted to triangles and quads.
    #[error("mesh contains faces with more than four sides")]
    NgonMesh,

    /// The requested algorithm is defined on triangular meshes only.
    #[error("mesh is not triangular")]
    NotTriangular,

    /// A vertex lacks the named scalar user value.
    #[error("vertex {vertex} has no scalar value under key '{key}'")]
    MissingVertexValue { vertex: usize, key: String },

    #[error("OFF: {0}")]
    OffParse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
