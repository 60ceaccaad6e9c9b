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

/// Directed boundary element of one face loop.
#[derive(Debug, Clone)]
pub struct HalfEdge {
    /// Origin vertex.
    pub vertex: usize,
    /// Owning face. Every stored half-edge bounds a face; boundary-ness is
    /// carried by `twin` alone.
    pub face: usize,
    /// Next half-edge around the same face.
    pub next: usize,
    /// Previous half-edge around the same face.
    pub prev: usize,
    /// Oppositely directed half-edge over the same vertex pair; `None` when
    /// this side of the edge is unpaired (mesh boundary).
    pub twin: Option<usize>,
    /// Owning undirected edge.
    pub edge: usize,
}
