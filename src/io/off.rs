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

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{MeshError, Result};
use crate::geometry::point::Point;
use crate::mesh::basic_types::Mesh;
use crate::numeric::scalar::Scalar;

/// Write a mesh to OFF.
/// Format:
///   OFF
///   <numVertices> <numFaces> <numEdges>
///   x y z
///   ...
///   <degree> v0 v1 ...   (zero-based indices)
pub fn write_off<T: Scalar, P: AsRef<Path>>(mesh: &Mesh<T, 3>, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_off_to(mesh, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn write_off_to<T: Scalar, W: Write>(mesh: &Mesh<T, 3>, out: &mut W) -> Result<()> {
    writeln!(out, "OFF")?;
    writeln!(
        out,
        "{} {} {}",
        mesh.vertices.len(),
        mesh.faces.len(),
        mesh.edges.len()
    )?;

    for v in &mesh.vertices {
        let c = v.position.coords();
        writeln!(out, "{} {} {}", c[0].to_f64(), c[1].to_f64(), c[2].to_f64())?;
    }

    for f in 0..mesh.faces.len() {
        let vs = mesh.face_vertices(f);
        write!(out, "{}", vs.len())?;
        for &v in &vs {
            write!(out, " {}", v)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Read a mesh from OFF. Faces of any degree >= 3 are accepted and run
/// through the regular builder, so its validation and error taxonomy apply.
pub fn read_off<T: Scalar, P: AsRef<Path>>(path: P) -> Result<Mesh<T, 3>> {
    let file = File::open(path)?;
    read_off_from(BufReader::new(file))
}

pub fn read_off_from<T: Scalar, R: BufRead>(reader: R) -> Result<Mesh<T, 3>> {
    // Non-empty, non-comment tokens across lines.
    let mut toks = Vec::new();
    for line in reader.lines() {
        let l = line?;
        let trimmed = l.split('#').next().unwrap_or("").trim();
        if trimmed.is_empty() {
            continue;
        }
        toks.extend(trimmed.split_whitespace().map(|s| s.to_string()));
    }

    let mut it = toks.into_iter();
    let mut next_tok =
        |what: &str| it.next().ok_or_else(|| MeshError::OffParse(format!("missing {}", what)));

    let header = next_tok("header")?;
    if header != "OFF" {
        return Err(MeshError::OffParse(format!(
            "expected 'OFF', got '{}'",
            header
        )));
    }

    let vcount = parse_usize(&next_tok("vertex count")?, "vertex count")?;
    let fcount = parse_usize(&next_tok("face count")?, "face count")?;
    // The edge count is declarative only; the builder derives its own edges.
    let _ecount = parse_usize(&next_tok("edge count")?, "edge count")?;

    let mut positions = Vec::with_capacity(vcount);
    for _ in 0..vcount {
        let x = parse_f64(&next_tok("vertex x")?, "vertex x")?;
        let y = parse_f64(&next_tok("vertex y")?, "vertex y")?;
        let z = parse_f64(&next_tok("vertex z")?, "vertex z")?;
        positions.push(Point::from_vals([x, y, z]));
    }

    let mut faces = Vec::with_capacity(fcount);
    for _ in 0..fcount {
        let degree = parse_usize(&next_tok("face degree")?, "face degree")?;
        let mut face = Vec::with_capacity(degree);
        for _ in 0..degree {
            face.push(parse_usize(&next_tok("face index")?, "face index")?);
        }
        faces.push(face);
    }

    Mesh::from_indexed(&positions, &faces)
}

fn parse_usize(tok: &str, what: &str) -> Result<usize> {
    tok.parse()
        .map_err(|_| MeshError::OffParse(format!("bad {}: '{}'", what, tok)))
}

fn parse_f64(tok: &str, what: &str) -> Result<f64> {
    tok.parse()
        .map_err(|_| MeshError::OffParse(format!("bad {}: '{}'", what, tok)))
}
