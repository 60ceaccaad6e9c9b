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

use std::array;
use std::ops::{Index, IndexMut};

use crate::geometry::vector::{Vector, VectorOps};
use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub type Point3<T> = Point<T, 3>;

pub trait PointOps<T: Scalar, const N: usize>: Sized {
    type Vector;

    fn as_vector(&self) -> Self::Vector;
    fn add_vector(&self, v: &Self::Vector) -> Self;
    fn vector_to(&self, other: &Self) -> Self::Vector;
    fn midpoint(&self, other: &Self) -> Self;
    fn distance_to(&self, other: &Self) -> T;
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Self { coords }
    }

    pub fn from_vals(vals: [f64; N]) -> Self {
        Self {
            coords: vals.map(T::from_f64),
        }
    }

    pub fn coords(&self) -> &[T; N] {
        &self.coords
    }
}

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Self {
        Self {
            coords: array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.coords[i]
    }
}

impl<T: Scalar, const N: usize> PointOps<T, N> for Point<T, N> {
    type Vector = Vector<T, N>;

    fn as_vector(&self) -> Vector<T, N> {
        Vector::new(self.coords)
    }

    fn add_vector(&self, v: &Vector<T, N>) -> Self {
        Self {
            coords: array::from_fn(|i| self.coords[i] + v.coords[i]),
        }
    }

    fn vector_to(&self, other: &Self) -> Vector<T, N> {
        Vector::new(array::from_fn(|i| other.coords[i] - self.coords[i]))
    }

    fn midpoint(&self, other: &Self) -> Self {
        let half = T::from_f64(0.5);
        Self {
            coords: array::from_fn(|i| (self.coords[i] + other.coords[i]) * half),
        }
    }

    fn distance_to(&self, other: &Self) -> T {
        self.vector_to(other).norm()
    }
}
