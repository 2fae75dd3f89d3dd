//! Canonical mesh edges.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An undirected edge between two vertex indices.
///
/// The smaller index is always stored first, so `Edge::new(a, b)` and
/// `Edge::new(b, a)` compare and hash identically. This is what lets two
/// triangles sharing an edge agree on a single key regardless of their
/// winding.
///
/// # Example
///
/// ```
/// use mesh_types::Edge;
///
/// assert_eq!(Edge::new(7, 3), Edge::new(3, 7));
/// assert_eq!(Edge::new(7, 3).vertices(), (3, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    v1: u32,
    v2: u32,
}

impl Edge {
    /// Create a canonical edge from two endpoints in either order.
    #[inline]
    #[must_use]
    pub const fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { v1: a, v2: b }
        } else {
            Self { v1: b, v2: a }
        }
    }

    /// The smaller endpoint.
    #[inline]
    #[must_use]
    pub const fn v1(self) -> u32 {
        self.v1
    }

    /// The larger endpoint.
    #[inline]
    #[must_use]
    pub const fn v2(self) -> u32 {
        self.v2
    }

    /// Both endpoints, smaller first.
    #[inline]
    #[must_use]
    pub const fn vertices(self) -> (u32, u32) {
        (self.v1, self.v2)
    }

    /// Check if `v` is one of the endpoints.
    #[inline]
    #[must_use]
    pub const fn contains(self, v: u32) -> bool {
        self.v1 == v || self.v2 == v
    }

    /// The three edges of a triangle, in winding order `(0,1)`, `(1,2)`, `(2,0)`.
    #[inline]
    #[must_use]
    pub const fn of_face(face: [u32; 3]) -> [Self; 3] {
        [
            Self::new(face[0], face[1]),
            Self::new(face[1], face[2]),
            Self::new(face[2], face[0]),
        ]
    }

    /// The vertex of `face` that is not on this edge.
    ///
    /// Returns `None` when the face does not contain this edge or has no
    /// third distinct vertex.
    #[must_use]
    pub fn opposite_in(self, face: [u32; 3]) -> Option<u32> {
        if !(face.contains(&self.v1) && face.contains(&self.v2)) {
            return None;
        }
        face.into_iter().find(|&v| !self.contains(v))
    }
}

impl From<(u32, u32)> for Edge {
    fn from((a, b): (u32, u32)) -> Self {
        Self::new(a, b)
    }
}
