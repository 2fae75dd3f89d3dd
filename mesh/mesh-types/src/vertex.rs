//! Vertex types and attributes.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::attributes::VertexProperty;

/// RGB color with floating point channels.
///
/// Channels are stored exactly as they appear in `red`/`green`/`blue`
/// float columns; no range is imposed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexColor {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl VertexColor {
    /// Create a new color from its channels.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Black (all channels zero).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
}

/// Optional attributes that can be attached to a vertex.
///
/// Attributes are stored in typed slots but can be read and written by
/// column name through [`VertexProperty`]. Writing a single component of an
/// absent slot creates the slot with the other components zeroed.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexAttributes {
    /// Vertex normal, usually unit length after
    /// [`IndexedMesh::update_normals`](crate::IndexedMesh::update_normals).
    pub normal: Option<Vector3<f64>>,

    /// Vertex color.
    pub color: Option<VertexColor>,
}

impl VertexAttributes {
    /// Create empty attributes with no values set.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            normal: None,
            color: None,
        }
    }

    /// Create attributes with just a normal.
    #[inline]
    #[must_use]
    pub const fn with_normal(normal: Vector3<f64>) -> Self {
        Self {
            normal: Some(normal),
            color: None,
        }
    }

    /// Check if any attributes are set.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.normal.is_none() && self.color.is_none()
    }

    /// Read one attribute column.
    #[must_use]
    pub fn get(&self, property: VertexProperty) -> Option<f64> {
        match property {
            VertexProperty::Red => self.color.map(|c| f64::from(c.r)),
            VertexProperty::Green => self.color.map(|c| f64::from(c.g)),
            VertexProperty::Blue => self.color.map(|c| f64::from(c.b)),
            VertexProperty::Nx => self.normal.map(|n| n.x),
            VertexProperty::Ny => self.normal.map(|n| n.y),
            VertexProperty::Nz => self.normal.map(|n| n.z),
        }
    }

    /// Write one attribute column.
    #[allow(clippy::cast_possible_truncation)]
    pub fn set(&mut self, property: VertexProperty, value: f64) {
        match property {
            VertexProperty::Red => self.color.get_or_insert(VertexColor::BLACK).r = value as f32,
            VertexProperty::Green => self.color.get_or_insert(VertexColor::BLACK).g = value as f32,
            VertexProperty::Blue => self.color.get_or_insert(VertexColor::BLACK).b = value as f32,
            VertexProperty::Nx => self.normal.get_or_insert_with(Vector3::zeros).x = value,
            VertexProperty::Ny => self.normal.get_or_insert_with(Vector3::zeros).y = value,
            VertexProperty::Nz => self.normal.get_or_insert_with(Vector3::zeros).z = value,
        }
    }
}

/// A vertex in 3D space with optional attributes.
///
/// # Example
///
/// ```
/// use mesh_types::{Vertex, Point3};
///
/// let v1 = Vertex::new(Point3::new(1.0, 2.0, 3.0));
/// let v2 = Vertex::from_coords(1.0, 2.0, 3.0);
///
/// assert_eq!(v1.position, v2.position);
/// assert!(v1.attributes.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,

    /// Optional attributes (normal, color).
    pub attributes: VertexAttributes,
}

impl Vertex {
    /// Create a new vertex with only position set.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            attributes: VertexAttributes::empty(),
        }
    }

    /// Create a vertex from raw coordinates.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Create a vertex with position and normal.
    #[inline]
    #[must_use]
    pub const fn with_normal(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            position,
            attributes: VertexAttributes::with_normal(normal),
        }
    }

    /// Get the normal if set.
    #[inline]
    #[must_use]
    pub const fn normal(&self) -> Option<Vector3<f64>> {
        self.attributes.normal
    }

    /// Get the color if set.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Option<VertexColor> {
        self.attributes.color
    }

    /// Read an attribute by column.
    #[inline]
    #[must_use]
    pub fn attribute(&self, property: VertexProperty) -> Option<f64> {
        self.attributes.get(property)
    }

    /// Write an attribute by column.
    #[inline]
    pub fn set_attribute(&mut self, property: VertexProperty, value: f64) {
        self.attributes.set(property, value);
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}
