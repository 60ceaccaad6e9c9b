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

use std::io::Cursor;

use hemesh::error::MeshError;
use hemesh::geometry::{Point, Point3};
use hemesh::io::off::{read_off_from, write_off_to};
use hemesh::mesh::basic_types::Mesh;

type TestMesh = Mesh<f64, 3>;

fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point::from_vals([x, y, z])
}

#[test]
fn read_basic_file() {
    let data = "\
OFF
# a unit right triangle
4 2 5
0 0 0
1 0 0
1 1 0
0 1 0
3 0 1 2
3 0 2 3
";
    let mesh: TestMesh = read_off_from(Cursor::new(data)).unwrap();
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.faces.len(), 2);
    assert_eq!(mesh.edges.len(), 5);
    assert_eq!(mesh.vertices[2].position, p(1.0, 1.0, 0.0));
}

#[test]
fn read_accepts_ngon_faces() {
    let data = "\
OFF
5 1 5
0 0 0
2 0 0
3 2 0
1 3 0
-1 2 0
5 0 1 2 3 4
";
    let mesh: TestMesh = read_off_from(Cursor::new(data)).unwrap();
    assert_eq!(mesh.faces.len(), 1);
    assert_eq!(mesh.face_degree(0), 5);
    assert!(mesh.is_ngon_mesh());
}

#[test]
fn write_then_read_round_trips() {
    let positions = [
        p(0.0, 0.0, 0.0),
        p(1.0, 0.0, 0.0),
        p(1.0, 1.0, 0.0),
        p(0.0, 1.0, 0.0),
        p(2.0, 0.5, 0.0),
    ];
    // Quad plus triangle, so both arities take the trip.
    let faces = vec![vec![0, 1, 2, 3], vec![1, 4, 2]];
    let mesh = TestMesh::from_indexed(&positions, &faces).unwrap();

    let mut buffer = Vec::new();
    write_off_to(&mesh, &mut buffer).unwrap();

    let text = String::from_utf8(buffer.clone()).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("OFF"));
    assert_eq!(lines.next(), Some("5 2 6"));

    let back: TestMesh = read_off_from(Cursor::new(buffer)).unwrap();
    let (back_positions, back_faces) = back.to_indexed();
    assert_eq!(back_positions.as_slice(), positions.as_slice());
    assert_eq!(back_faces, faces);
}

#[test]
fn rejects_wrong_header() {
    let err = read_off_from::<f64, _>(Cursor::new("PLY\n0 0 0\n")).unwrap_err();
    assert!(matches!(err, MeshError::OffParse(_)));
}

#[test]
fn rejects_truncated_vertex_data() {
    let data = "OFF\n2 0 0\n0 0 0\n1 0\n";
    let err = read_off_from::<f64, _>(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, MeshError::OffParse(_)));
}

#[test]
fn rejects_unparsable_counts() {
    let data = "OFF\nthree 0 0\n";
    let err = read_off_from::<f64, _>(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, MeshError::OffParse(_)));
}

#[test]
fn builder_errors_pass_through() {
    // Face references vertex 7 of 3.
    let data = "OFF\n3 1 3\n0 0 0\n1 0 0\n0 1 0\n3 0 1 7\n";
    let err = read_off_from::<f64, _>(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, MeshError::InvalidFace { face: 0, .. }));
}
