//! End-to-end reconstruction from slices to a closed mesh.

use std::fmt;
use std::path::Path;

use mesh_from_rings::{build_tube, normalize_poles, project_ring};
use mesh_subdivide::subdivide_mesh;
use mesh_types::{IndexedMesh, MeshTopology};
use nalgebra::{Point2, Point3};
use scan_io::{ImageStack, PointLogLayout, load_point_log};
use scan_ring::RingSet;
use tracing::{debug, info};

use crate::config::ReconConfig;
use crate::error::{ReconError, ReconResult};

/// Usable slices needed to stitch a tube.
const MIN_RINGS: usize = 2;

/// A reconstructed surface and which slices went into it.
#[derive(Debug, Clone)]
pub struct Reconstruction {
    /// The closed triangle mesh.
    pub mesh: IndexedMesh,

    /// Angle indices whose slice produced a ring, in order.
    pub used_angles: Vec<usize>,

    /// Angle indices whose slice was empty or all zero.
    pub skipped_angles: Vec<usize>,
}

impl fmt::Display for Reconstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reconstruction: {}/{} slices, {} vertices, {} faces",
            self.used_angles.len(),
            self.used_angles.len() + self.skipped_angles.len(),
            self.mesh.vertex_count(),
            self.mesh.face_count()
        )?;
        if !self.skipped_angles.is_empty() {
            write!(f, " (skipped {:?})", self.skipped_angles)?;
        }
        Ok(())
    }
}

/// Reconstruct a closed surface from per-angle contour slices.
///
/// `slices[i]` holds the raw image-space contour of angle index `i`, taken
/// at `i · angle_step_deg`. Only the first `num_images` slices are used.
/// Degenerate slices are skipped without shifting the angles of the rest.
///
/// Stages: ring preprocessing, projection, pole normalization, tube
/// stitching, then optional Loop subdivision and vertex normals.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - Fewer than two slices produce a ring
/// - Subdivision would exceed its face budget
///
/// # Example
///
/// ```
/// use nalgebra::Point2;
/// use us_recon::{ReconConfig, reconstruct};
///
/// let slice: Vec<Point2<f64>> = (0..40)
///     .map(|i| {
///         let a = f64::from(i) * std::f64::consts::TAU / 40.0;
///         Point2::new(120.0 + 30.0 * a.cos(), 80.0 + 20.0 * a.sin())
///     })
///     .collect();
/// let slices = vec![slice; 12];
///
/// let recon = reconstruct(&slices, &ReconConfig::default().with_subdivide(false))?;
/// assert_eq!(recon.used_angles.len(), 12);
/// assert!(recon.mesh.is_closed());
/// # Ok::<(), us_recon::ReconError>(())
/// ```
pub fn reconstruct(slices: &[Vec<Point2<f64>>], config: &ReconConfig) -> ReconResult<Reconstruction> {
    config.validate()?;

    let ring_set = RingSet::from_slices(slices, config.num_images, &config.ring_params())?;
    if ring_set.len() < MIN_RINGS {
        return Err(ReconError::TooFewRings {
            min: MIN_RINGS,
            actual: ring_set.len(),
        });
    }

    let projection = config.projection();
    let mut used_angles = Vec::with_capacity(ring_set.len());
    #[allow(clippy::cast_precision_loss)]
    let mut rings: Vec<Vec<Point3<f64>>> = ring_set
        .present()
        .map(|(index, ring)| {
            used_angles.push(index);
            project_ring(ring.points(), index as f64 * config.angle_step_deg, &projection)
        })
        .collect();

    normalize_poles(&mut rings)?;
    let mut mesh = build_tube(&rings)?;
    debug!(
        rings = rings.len(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Stitched tube"
    );

    if config.subdivide {
        let result = subdivide_mesh(&mesh, &config.subdivision)?;
        debug!("{result}");
        mesh = result.mesh;
    }
    if config.update_normals {
        mesh.update_normals();
    }

    let recon = Reconstruction {
        mesh,
        used_angles,
        skipped_angles: ring_set.skipped(),
    };
    info!("{recon}");
    Ok(recon)
}

/// Reconstruct from a stack of bitmap slices.
///
/// Each image contributes up to `max_contour_points` contour pixels.
///
/// # Errors
///
/// Same as [`reconstruct`].
pub fn reconstruct_images(stack: &ImageStack, config: &ReconConfig) -> ReconResult<Reconstruction> {
    let slices = stack.contour_slices(config.max_contour_points);
    reconstruct(&slices, config)
}

/// Reconstruct from a pair of point log files.
///
/// # Errors
///
/// Returns an error if either file cannot be read, or any error from
/// [`reconstruct`].
pub fn reconstruct_point_log<P: AsRef<Path>, Q: AsRef<Path>>(
    x_path: P,
    y_path: Q,
    layout: &PointLogLayout,
    config: &ReconConfig,
) -> ReconResult<Reconstruction> {
    let slices = load_point_log(x_path, y_path, layout)?;
    reconstruct(&slices, config)
}
