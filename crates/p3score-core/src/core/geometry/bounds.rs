use crate::core::models::atom::Atom;
use crate::core::utils::rounding::round_to;
use nalgebra::Point3;

const AXIS_LENGTH_DECIMALS: usize = 4;

/// Extent of a ligand along one Cartesian axis.
///
/// Only the two extreme atoms contribute their van der Waals radius to the
/// padded length. A large atom that is not a coordinate extremum is not
/// accounted for; the trained model expects exactly this approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisExtent {
    /// Smallest atom coordinate.
    pub min: f64,
    /// Radius of the atom holding `min`.
    pub min_radius: f64,
    /// Largest atom coordinate.
    pub max: f64,
    /// Radius of the atom holding `max`.
    pub max_radius: f64,
    /// `(max - min) + max_radius + min_radius`, rounded to 4 decimals.
    pub length: f64,
}

impl AxisExtent {
    /// Lower edge of the radius-padded extent.
    #[inline]
    pub fn lower(&self) -> f64 {
        self.min - self.min_radius
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        self.lower() + self.length * 0.5
    }
}

/// Axis-aligned, radius-padded box around a ligand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LigandBounds {
    pub axes: [AxisExtent; 3],
}

impl LigandBounds {
    /// Computes the padded extents of `atoms`; `None` when there are no atoms.
    ///
    /// When several atoms share the minimum coordinate of an axis, the first
    /// one in file order supplies `min_radius`; for the maximum the last one
    /// supplies `max_radius`.
    pub fn from_atoms(atoms: &[Atom]) -> Option<Self> {
        Some(Self {
            axes: [
                axis_extent(atoms, 0)?,
                axis_extent(atoms, 1)?,
                axis_extent(atoms, 2)?,
            ],
        })
    }

    pub fn lengths(&self) -> [f64; 3] {
        self.axes.map(|axis| axis.length)
    }

    /// Center of the padded box.
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            self.axes[0].midpoint(),
            self.axes[1].midpoint(),
            self.axes[2].midpoint(),
        )
    }

    /// Half of the longest padded axis. A coarse interaction radius, not a
    /// true bounding sphere.
    pub fn interaction_radius(&self) -> f64 {
        self.lengths().into_iter().fold(0.0, f64::max) * 0.5
    }
}

fn axis_extent(atoms: &[Atom], axis: usize) -> Option<AxisExtent> {
    let (first, rest) = atoms.split_first()?;
    let (mut lo, mut hi) = (first, first);
    for atom in rest {
        let coord = atom.position[axis];
        if coord < lo.position[axis] {
            lo = atom;
        }
        if coord >= hi.position[axis] {
            hi = atom;
        }
    }

    let (min, max) = (lo.position[axis], hi.position[axis]);
    let (min_radius, max_radius) = (lo.vdw_radius(), hi.vdw_radius());
    Some(AxisExtent {
        min,
        min_radius,
        max,
        max_radius,
        length: round_to(max - min + max_radius + min_radius, AXIS_LENGTH_DECIMALS),
    })
}
