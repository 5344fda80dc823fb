use super::bounds::{AxisExtent, LigandBounds};
use crate::core::models::atom::Atom;
use crate::core::utils::rounding::round_to;
use nalgebra::Point3;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

const VOLUME_DECIMALS: usize = 3;
/// Empty margin (Å) added on both sides of every axis of the sampled box.
const GRID_PADDING: f64 = 1.0;

/// How sample points are laid out over the padded ligand box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoxelScheme {
    /// `count + 1` evenly spaced points per axis covering the whole padded
    /// box; the covered fraction of all points scales the box volume.
    #[default]
    Uniform,
    /// The sampling walk of the published P3-Score tool, reproduced exactly so
    /// that volumes (and therefore predictions) match its published output.
    /// Every axis is sampled one step past its padded origin, the inner axes
    /// restart from the unpadded lower edge after their first pass, and the
    /// covered count is divided by `count_x * count_y * count_z`.
    Legacy,
}

impl fmt::Display for VoxelScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoxelScheme::Uniform => write!(f, "uniform"),
            VoxelScheme::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for VoxelScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Ok(VoxelScheme::Uniform),
            "legacy" => Ok(VoxelScheme::Legacy),
            other => Err(format!(
                "unknown voxel scheme '{}', expected 'uniform' or 'legacy'",
                other
            )),
        }
    }
}

/// Sample coordinates along one axis. The legacy walk starts its very first
/// pass somewhere else than every later pass, hence two sequences.
struct AxisSamples {
    first_pass: Vec<f64>,
    later_passes: Vec<f64>,
}

impl AxisSamples {
    fn new(extent: &AxisExtent, count: usize, scheme: VoxelScheme) -> Self {
        let origin = extent.lower() - GRID_PADDING;
        let spacing = (extent.length + 2.0 * GRID_PADDING) / count as f64;
        match scheme {
            VoxelScheme::Uniform => {
                let points: Vec<f64> = (0..=count)
                    .map(|k| origin + k as f64 * spacing)
                    .collect();
                Self {
                    first_pass: points.clone(),
                    later_passes: points,
                }
            }
            VoxelScheme::Legacy => Self {
                first_pass: walk(origin, spacing, count),
                later_passes: walk(extent.lower(), spacing, count),
            },
        }
    }

    #[inline]
    fn pass(&self, first: bool) -> &[f64] {
        if first {
            &self.first_pass
        } else {
            &self.later_passes
        }
    }
}

// Accumulates the step instead of multiplying so rounding matches the legacy walk.
fn walk(start: f64, step: f64, count: usize) -> Vec<f64> {
    let mut coord = start;
    (0..=count)
        .map(|_| {
            coord += step;
            coord
        })
        .collect()
}

/// Number of grid intervals along an axis of the given length.
pub fn grid_count(length: f64, accuracy: f64) -> usize {
    (length * accuracy).floor().max(0.0) as usize
}

/// Estimates the volume (Å^3) of the union of the atoms' van der Waals spheres.
///
/// Sample points of a regular grid over the padded box are classified as
/// inside when they lie within the radius of at least one atom. `accuracy`
/// is the number of grid intervals per Ångström. A degenerate box (any axis
/// with zero intervals) yields `0.0`. The result is rounded to 3 decimals.
pub fn estimate_volume(
    atoms: &[Atom],
    bounds: &LigandBounds,
    accuracy: f64,
    scheme: VoxelScheme,
) -> f64 {
    let counts = bounds.lengths().map(|length| grid_count(length, accuracy));
    if counts.contains(&0) {
        return 0.0;
    }

    let [xs, ys, zs] =
        [0, 1, 2].map(|axis| AxisSamples::new(&bounds.axes[axis], counts[axis], scheme));
    let spheres: Vec<(Point3<f64>, f64)> = atoms
        .iter()
        .map(|atom| {
            let radius = atom.vdw_radius();
            (atom.position, radius * radius)
        })
        .collect();

    let count_plane = |(i, &x): (usize, &f64)| -> u64 {
        let mut inside = 0;
        for (j, &y) in ys.pass(i == 0).iter().enumerate() {
            for &z in zs.pass(i == 0 && j == 0) {
                if is_covered(&spheres, x, y, z) {
                    inside += 1;
                }
            }
        }
        inside
    };

    #[cfg(not(feature = "parallel"))]
    let inside: u64 = xs.first_pass.iter().enumerate().map(count_plane).sum();

    #[cfg(feature = "parallel")]
    let inside: u64 = xs.first_pass.par_iter().enumerate().map(count_plane).sum();

    let sampled = match scheme {
        VoxelScheme::Uniform => counts.iter().map(|&c| (c + 1) as f64).product::<f64>(),
        VoxelScheme::Legacy => counts.iter().map(|&c| c as f64).product::<f64>(),
    };
    let box_volume: f64 = bounds
        .lengths()
        .iter()
        .map(|length| length + 2.0 * GRID_PADDING)
        .product();

    round_to(inside as f64 * box_volume / sampled, VOLUME_DECIMALS)
}

#[inline]
fn is_covered(spheres: &[(Point3<f64>, f64)], x: f64, y: f64, z: f64) -> bool {
    spheres.iter().any(|(center, radius_sq)| {
        let dx = center.x - x;
        let dy = center.y - y;
        let dz = center.z - z;
        dx * dx + dy * dy + dz * dz <= *radius_sq
    })
}
