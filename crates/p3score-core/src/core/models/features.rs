use crate::core::chem::polarity::PolarCounts;
use crate::core::chem::residues::ContactCounts;

/// Length of a [`RawFeatures`] vector.
pub const RAW_FEATURE_COUNT: usize = 14;

/// The five per-ligand terms taken from the external empirical scoring program.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExternalScores {
    /// Van der Waals interaction term (VDW).
    pub vdw: f64,
    /// Hydrogen bonding term (HB).
    pub hbond: f64,
    /// Hydrophobic matching term (HM).
    pub hydrophobic_match: f64,
    /// Hydrophobic surface term (HS).
    pub hydrophobic_surface: f64,
    /// Frozen-rotor penalty term (RT).
    pub rotor: f64,
}

impl ExternalScores {
    pub fn from_columns(columns: [f64; 5]) -> Self {
        let [vdw, hbond, hydrophobic_match, hydrophobic_surface, rotor] = columns;
        Self {
            vdw,
            hbond,
            hydrophobic_match,
            hydrophobic_surface,
            rotor,
        }
    }

    pub fn as_array(&self) -> [f64; 5] {
        [
            self.vdw,
            self.hbond,
            self.hydrophobic_match,
            self.hydrophobic_surface,
            self.rotor,
        ]
    }
}

/// Structural descriptors computed for one ligand against the protein.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LigandProfile {
    /// Estimated molecular volume in Å^3, rounded to 3 decimals.
    pub volume: f64,
    pub ring_count: i64,
    pub polar: PolarCounts,
    pub contacts: ContactCounts,
}

impl LigandProfile {
    /// The record used for a ligand without any parsed atom.
    pub fn empty(ring_count: i64) -> Self {
        Self {
            ring_count,
            ..Self::default()
        }
    }
}

/// The ordered raw feature record of one ligand.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawFeatures {
    pub scores: ExternalScores,
    pub profile: LigandProfile,
}

impl RawFeatures {
    pub fn new(scores: ExternalScores, profile: LigandProfile) -> Self {
        Self { scores, profile }
    }

    /// Flattens the record in model order: VDW, HB, HM, HS, RT, volume, rings,
    /// N, O, then the five residue-class buckets.
    pub fn to_vector(&self) -> [f64; RAW_FEATURE_COUNT] {
        let s = self.scores.as_array();
        let p = &self.profile;
        let c = p.contacts.as_array();
        [
            s[0],
            s[1],
            s[2],
            s[3],
            s[4],
            p.volume,
            p.ring_count as f64,
            f64::from(p.polar.nitrogen),
            f64::from(p.polar.oxygen),
            f64::from(c[0]),
            f64::from(c[1]),
            f64::from(c[2]),
            f64::from(c[3]),
            f64::from(c[4]),
        ]
    }
}

/// Predicted affinity of one ligand together with the features it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub ligand_name: String,
    pub features: RawFeatures,
    /// Predicted -log(Kd), rounded to 4 decimals.
    pub affinity: f64,
    /// Affinity converted to a binding energy, rounded to 4 decimals.
    pub binding_energy: f64,
}
