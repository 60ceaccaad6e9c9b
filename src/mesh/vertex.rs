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

use crate::geometry::point::Point;
use crate::geometry::vector::Vector;
use crate::numeric::scalar::Scalar;

/// Value attached to a vertex by downstream algorithms. Key names are an
/// out-of-band contract between the producer and the consumer of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum UserValue<T: Scalar, const N: usize> {
    Scalar(T),
    Vector(Vector<T, N>),
}

#[derive(Debug, Clone)]
pub struct Vertex<T: Scalar, const N: usize> {
    pub position: Point<T, N>,
    /// One outgoing half-edge, arbitrary among the incident ones. `None`
    /// only for vertices no face references.
    pub half_edge: Option<usize>,
    /// Open per-vertex store; the only part of the mesh mutated after
    /// construction.
    pub user_values: HashMap<String, UserValue<T, N>>,
}

impl<T: Scalar, const N: usize> Vertex<T, N> {
    pub fn new(position: Point<T, N>) -> Self {
        Self {
            position,
            half_edge: None,
            user_values: HashMap::new(),
        }
    }
}
