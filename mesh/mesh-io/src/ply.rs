//! PLY (Polygon File Format) support.
//!
//! # Layout Written
//!
//! ```text
//! ply
//! format ascii 1.0 | binary_little_endian 1.0
//! element vertex N
//! property float x
//! property float y
//! property float z
//! property float <attribute>      (one per registered attribute)
//! element face M
//! property list uchar int vertex_indices
//! end_header
//! ```
//!
//! Vertices lacking a registered attribute are written with `0.0` in its
//! column.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use mesh_types::{IndexedMesh, Vertex, VertexProperty};
use ply_rs::parser::Parser;
use ply_rs::ply::{
    Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType,
    ScalarType,
};
use ply_rs::writer::Writer;
use tracing::debug;

use crate::error::{IoError, IoResult};

const COMMENT: &str = "reconstructed surface";

/// Load a mesh from a PLY file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, and
/// otherwise the errors of [`read_ply`].
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_ply;
///
/// let mesh = load_ply("surface.ply")?;
/// println!("Loaded {} vertices, {} faces", mesh.vertices.len(), mesh.faces.len());
/// # Ok::<(), mesh_io::IoError>(())
/// ```
pub fn load_ply<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    read_ply(BufReader::new(file))
}

/// Read a mesh from PLY data in any encoding.
///
/// Faces with more than three indices are fan-triangulated; faces with fewer
/// than three are ignored. Recognized attribute columns are restored and
/// registered in the mesh schema; other vertex properties are ignored.
///
/// # Errors
///
/// Returns an error if:
/// - The data is not valid PLY
/// - The vertex element lacks `x`, `y` or `z`
/// - A face index is negative or out of range
pub fn read_ply<R: Read>(reader: R) -> IoResult<IndexedMesh> {
    let mut reader = BufReader::new(reader);
    let parser = Parser::<DefaultElement>::new();
    let ply = parser
        .read_ply(&mut reader)
        .map_err(|e| IoError::invalid_content(format!("failed to parse PLY: {e}")))?;

    let mut mesh = IndexedMesh::new();

    if let Some(vertex_def) = ply.header.elements.get("vertex") {
        for axis in ["x", "y", "z"] {
            if !vertex_def.properties.contains_key(axis) {
                return Err(IoError::invalid_content(format!(
                    "vertex element has no '{axis}' property"
                )));
            }
        }
        mesh.schema.register_all(
            vertex_def
                .properties
                .keys()
                .filter_map(|name| VertexProperty::from_name(name)),
        );
    }

    if let Some(vertex_elements) = ply.payload.get("vertex") {
        mesh.vertices.reserve(vertex_elements.len());
        for element in vertex_elements {
            let coord = |key: &str| element.get(key).and_then(scalar_value).unwrap_or(0.0);
            let mut vertex = Vertex::from_coords(coord("x"), coord("y"), coord("z"));
            for property in mesh.schema.iter() {
                if let Some(value) = element.get(property.name()).and_then(scalar_value) {
                    vertex.set_attribute(property, value);
                }
            }
            mesh.vertices.push(vertex);
        }
    }

    if let Some(face_elements) = ply.payload.get("face") {
        mesh.faces.reserve(face_elements.len());
        let vertex_count = mesh.vertices.len();
        for (face, element) in face_elements.iter().enumerate() {
            let indices = index_list(element);
            let checked = indices
                .iter()
                .map(|&index| {
                    u32::try_from(index)
                        .ok()
                        .filter(|&i| (i as usize) < vertex_count)
                        .ok_or(IoError::InvalidFaceIndex {
                            face,
                            index,
                            vertex_count,
                        })
                })
                .collect::<IoResult<Vec<u32>>>()?;
            for i in 1..checked.len().saturating_sub(1) {
                mesh.faces.push([checked[0], checked[i], checked[i + 1]]);
            }
        }
    }

    debug!(
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        attributes = mesh.schema.len(),
        "Read PLY mesh"
    );

    Ok(mesh)
}

/// Numeric value of a scalar property.
fn scalar_value(property: &Property) -> Option<f64> {
    match *property {
        Property::Char(v) => Some(f64::from(v)),
        Property::UChar(v) => Some(f64::from(v)),
        Property::Short(v) => Some(f64::from(v)),
        Property::UShort(v) => Some(f64::from(v)),
        Property::Int(v) => Some(f64::from(v)),
        Property::UInt(v) => Some(f64::from(v)),
        Property::Float(v) => Some(f64::from(v)),
        Property::Double(v) => Some(v),
        _ => None,
    }
}

/// Vertex index list of a face element, widened to `i64`.
fn index_list(element: &DefaultElement) -> Vec<i64> {
    for key in ["vertex_indices", "vertex_index"] {
        if let Some(prop) = element.get(key) {
            return match prop {
                Property::ListChar(v) => v.iter().map(|&i| i64::from(i)).collect(),
                Property::ListUChar(v) => v.iter().map(|&i| i64::from(i)).collect(),
                Property::ListShort(v) => v.iter().map(|&i| i64::from(i)).collect(),
                Property::ListUShort(v) => v.iter().map(|&i| i64::from(i)).collect(),
                Property::ListInt(v) => v.iter().map(|&i| i64::from(i)).collect(),
                Property::ListUInt(v) => v.iter().map(|&i| i64::from(i)).collect(),
                _ => continue,
            };
        }
    }
    Vec::new()
}

/// Save a mesh to a PLY file.
///
/// # Arguments
///
/// * `mesh` - The mesh to save
/// * `path` - Output file path
/// * `binary` - If true, save as binary little-endian; if false, save as ASCII
///
/// # Errors
///
/// Returns an error if the file cannot be written or a face references a
/// missing vertex.
pub fn save_ply<P: AsRef<Path>>(mesh: &IndexedMesh, path: P, binary: bool) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ply(mesh, &mut writer, binary)?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh as PLY.
///
/// # Errors
///
/// Returns [`IoError::InvalidFaceIndex`] before writing anything if a face
/// references a missing vertex, or an I/O error from the writer.
pub fn write_ply<W: Write>(mesh: &IndexedMesh, writer: &mut W, binary: bool) -> IoResult<()> {
    if let Some((face, index)) = mesh.first_invalid_face() {
        return Err(IoError::InvalidFaceIndex {
            face,
            index: i64::from(index),
            vertex_count: mesh.vertices.len(),
        });
    }

    if binary {
        write_ply_binary(mesh, writer)?;
    } else {
        write_ply_ascii(mesh, writer)?;
    }

    debug!(
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        attributes = mesh.schema.len(),
        binary,
        "Wrote PLY mesh"
    );
    Ok(())
}

/// Registered attribute values of a vertex, in schema order.
#[allow(clippy::cast_possible_truncation)]
fn attribute_row<'a>(
    mesh: &'a IndexedMesh,
    vertex: &'a Vertex,
) -> impl Iterator<Item = (VertexProperty, f32)> + 'a {
    mesh.schema
        .iter()
        .map(|p| (p, vertex.attribute(p).unwrap_or(0.0) as f32))
}

/// Save mesh as binary PLY (little-endian).
///
/// Written by hand: ply-rs emits the element count instead of the list
/// length for binary list properties.
fn write_ply_binary<W: Write>(mesh: &IndexedMesh, writer: &mut W) -> IoResult<()> {
    writeln!(writer, "ply")?;
    writeln!(writer, "format binary_little_endian 1.0")?;
    writeln!(writer, "comment {COMMENT}")?;
    writeln!(writer, "element vertex {}", mesh.vertices.len())?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    for property in mesh.schema.iter() {
        writeln!(writer, "property float {property}")?;
    }
    writeln!(writer, "element face {}", mesh.faces.len())?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    writeln!(writer, "end_header")?;

    for v in &mesh.vertices {
        #[allow(clippy::cast_possible_truncation)]
        {
            writer.write_all(&(v.position.x as f32).to_le_bytes())?;
            writer.write_all(&(v.position.y as f32).to_le_bytes())?;
            writer.write_all(&(v.position.z as f32).to_le_bytes())?;
        }
        for (_, value) in attribute_row(mesh, v) {
            writer.write_all(&value.to_le_bytes())?;
        }
    }

    for &[i0, i1, i2] in &mesh.faces {
        writer.write_all(&[3u8])?;
        #[allow(clippy::cast_possible_wrap)]
        {
            writer.write_all(&(i0 as i32).to_le_bytes())?;
            writer.write_all(&(i1 as i32).to_le_bytes())?;
            writer.write_all(&(i2 as i32).to_le_bytes())?;
        }
    }

    Ok(())
}

fn float_property(name: &str) -> PropertyDef {
    PropertyDef::new(name.to_string(), PropertyType::Scalar(ScalarType::Float))
}

/// Save mesh as ASCII PLY using ply-rs.
fn write_ply_ascii<W: Write>(mesh: &IndexedMesh, writer: &mut W) -> IoResult<()> {
    let mut ply = Ply::<DefaultElement>::new();
    ply.header.encoding = Encoding::Ascii;
    ply.header.comments.push(COMMENT.to_string());

    let mut vertex_def = ElementDef::new("vertex".to_string());
    for name in ["x", "y", "z"] {
        vertex_def.properties.add(float_property(name));
    }
    for property in mesh.schema.iter() {
        vertex_def.properties.add(float_property(property.name()));
    }
    vertex_def.count = mesh.vertices.len();
    ply.header.elements.add(vertex_def);

    let mut face_def = ElementDef::new("face".to_string());
    face_def.properties.add(PropertyDef::new(
        "vertex_indices".to_string(),
        PropertyType::List(ScalarType::UChar, ScalarType::Int),
    ));
    face_def.count = mesh.faces.len();
    ply.header.elements.add(face_def);

    let mut vertex_elements = Vec::with_capacity(mesh.vertices.len());
    for v in &mesh.vertices {
        let mut element = DefaultElement::new();
        #[allow(clippy::cast_possible_truncation)]
        {
            element.insert("x".to_string(), Property::Float(v.position.x as f32));
            element.insert("y".to_string(), Property::Float(v.position.y as f32));
            element.insert("z".to_string(), Property::Float(v.position.z as f32));
        }
        for (property, value) in attribute_row(mesh, v) {
            element.insert(property.name().to_string(), Property::Float(value));
        }
        vertex_elements.push(element);
    }
    ply.payload.insert("vertex".to_string(), vertex_elements);

    let mut face_elements = Vec::with_capacity(mesh.faces.len());
    for &[i0, i1, i2] in &mesh.faces {
        let mut element = DefaultElement::new();
        #[allow(clippy::cast_possible_wrap)]
        let indices = vec![i0 as i32, i1 as i32, i2 as i32];
        element.insert("vertex_indices".to_string(), Property::ListInt(indices));
        face_elements.push(element);
    }
    ply.payload.insert("face".to_string(), face_elements);

    Writer::new()
        .write_ply(writer, &mut ply)
        .map_err(|e| IoError::invalid_content(format!("failed to write PLY: {e}")))?;

    Ok(())
}
