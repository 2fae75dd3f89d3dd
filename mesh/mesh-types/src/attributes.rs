//! Named per-vertex attribute columns.
//!
//! Attribute values live in typed slots on each [`Vertex`](crate::Vertex);
//! the names below are how those slots are addressed by serializers. An
//! [`AttributeSchema`] records which columns a mesh declares, and its
//! iteration order is the column order on disk.

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named float attribute that a vertex may carry.
///
/// Declaration order is the canonical column order: colors first, then
/// normal components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VertexProperty {
    /// Red color channel (`red`).
    Red,
    /// Green color channel (`green`).
    Green,
    /// Blue color channel (`blue`).
    Blue,
    /// Normal X component (`nx`).
    Nx,
    /// Normal Y component (`ny`).
    Ny,
    /// Normal Z component (`nz`).
    Nz,
}

impl VertexProperty {
    /// Every property, in column order.
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Nx,
        Self::Ny,
        Self::Nz,
    ];

    /// The three normal components.
    pub const NORMAL: [Self; 3] = [Self::Nx, Self::Ny, Self::Nz];

    /// The three color channels.
    pub const COLOR: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Column name as it appears in a file header.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Nx => "nx",
            Self::Ny => "ny",
            Self::Nz => "nz",
        }
    }

    /// Look up a property by its column name.
    ///
    /// Returns `None` for names that are not vertex attributes (including
    /// the position columns `x`, `y`, `z`).
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::VertexProperty;
    ///
    /// assert_eq!(VertexProperty::from_name("nz"), Some(VertexProperty::Nz));
    /// assert_eq!(VertexProperty::from_name("x"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Check if this property is a normal component.
    #[must_use]
    pub const fn is_normal(self) -> bool {
        matches!(self, Self::Nx | Self::Ny | Self::Nz)
    }
}

impl fmt::Display for VertexProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of attribute columns a mesh declares.
///
/// Registration is idempotent. Iteration yields properties in column order,
/// and [`ordinal`](Self::ordinal) gives a property's position among the
/// registered columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributeSchema {
    registered: BTreeSet<VertexProperty>,
}

impl AttributeSchema {
    /// Create an empty schema.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            registered: BTreeSet::new(),
        }
    }

    /// Register a single column.
    pub fn register(&mut self, property: VertexProperty) {
        self.registered.insert(property);
    }

    /// Register several columns at once.
    pub fn register_all(&mut self, properties: impl IntoIterator<Item = VertexProperty>) {
        self.registered.extend(properties);
    }

    /// Remove a column.
    pub fn unregister(&mut self, property: VertexProperty) {
        self.registered.remove(&property);
    }

    /// Check whether a column is registered.
    #[must_use]
    pub fn contains(&self, property: VertexProperty) -> bool {
        self.registered.contains(&property)
    }

    /// Position of a registered column, or `None` if it is not registered.
    #[must_use]
    pub fn ordinal(&self, property: VertexProperty) -> Option<usize> {
        self.registered.iter().position(|&p| p == property)
    }

    /// Number of registered columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// Check if no columns are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Iterate registered columns in column order.
    pub fn iter(&self) -> impl Iterator<Item = VertexProperty> + '_ {
        self.registered.iter().copied()
    }
}

impl FromIterator<VertexProperty> for AttributeSchema {
    fn from_iter<I: IntoIterator<Item = VertexProperty>>(iter: I) -> Self {
        Self {
            registered: iter.into_iter().collect(),
        }
    }
}
