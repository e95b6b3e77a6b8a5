use std::path::Path;

use renderer::math_prelude::*;
use renderer::{Face, Model};

use crate::error::LoadError;

/// Load a Wavefront OBJ mesh. Only `v`, `vt` and `f` records are consumed;
/// every other line kind is ignored. Face fields are `vertex/texcoord[/…]`
/// with 1-based indices.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Model, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    parse_model(&contents)
}

fn parse_model(contents: &str) -> Result<Model, LoadError> {
    let mut vertices = Vec::new();
    let mut texcoords = Vec::new();
    let mut faces = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        let line_number = index + 1;
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("v") => {
                let x = parse_float(&mut fields, line_number)?;
                let y = parse_float(&mut fields, line_number)?;
                let z = parse_float(&mut fields, line_number)?;
                vertices.push(Vec3::new(x, y, z));
            }
            Some("vt") => {
                let u = parse_float(&mut fields, line_number)?;
                let v = parse_float(&mut fields, line_number)?;
                texcoords.push(Vec2::new(u, v));
            }
            Some("f") => faces.push(parse_face(&mut fields, line_number)?),
            _ => continue,
        }
    }

    Ok(Model::new(vertices, texcoords, faces))
}

fn parse_face<'a, I>(fields: &mut I, line: usize) -> Result<Face, LoadError>
where
    I: Iterator<Item = &'a str>,
{
    let mut vertices = [0usize; 3];
    let mut texcoords = [None; 3];
    for i in 0..3 {
        let field = fields.next().ok_or(LoadError::TruncatedRecord { line })?;
        let mut parts = field.split('/');
        // split always yields the leading part, even for an empty field
        vertices[i] = parse_index(parts.next().unwrap_or(""), line)?;
        texcoords[i] = match parts.next() {
            Some("") | None => None,
            Some(part) => Some(parse_index(part, line)?),
        };
    }

    let texcoords = match texcoords {
        [Some(a), Some(b), Some(c)] => Some([a, b, c]),
        [None, None, None] => None,
        _ => {
            return Err(LoadError::MalformedRecord {
                line,
                field: "face mixes indexed and unindexed texcoords".to_string(),
            })
        }
    };
    Ok(Face {
        vertices,
        texcoords,
    })
}

fn parse_float<'a, I>(fields: &mut I, line: usize) -> Result<f32, LoadError>
where
    I: Iterator<Item = &'a str>,
{
    let field = fields.next().ok_or(LoadError::TruncatedRecord { line })?;
    field.parse().map_err(|_| LoadError::MalformedRecord {
        line,
        field: field.to_string(),
    })
}

fn parse_index(field: &str, line: usize) -> Result<usize, LoadError> {
    let malformed = || LoadError::MalformedRecord {
        line,
        field: field.to_string(),
    };
    let index: usize = field.parse().map_err(|_| malformed())?;
    // the source format counts from 1
    index.checked_sub(1).ok_or_else(malformed)
}
