use phf::{Map, phf_map};

/// Chemical class of a standard amino acid as used by the contact features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueClass {
    /// A1: ALA VAL LEU ILE PRO PHE TRP MET.
    Nonpolar,
    /// B1: GLY SER THR CYS TYR ASN GLN.
    PolarNeutral,
    /// B2: LYS ARG HIS.
    Basic,
    /// B3: ASP GLU.
    Acidic,
    /// Crystallographic water, never counted.
    Water,
}

impl ResidueClass {
    /// Short class code as used in the report columns (`ami_A1` etc.).
    pub fn label(self) -> &'static str {
        match self {
            ResidueClass::Nonpolar => "A1",
            ResidueClass::PolarNeutral => "B1",
            ResidueClass::Basic => "B2",
            ResidueClass::Acidic => "B3",
            ResidueClass::Water => "H2O",
        }
    }
}

static RESIDUE_CLASSES: Map<&'static str, ResidueClass> = phf_map! {
    "ALA" => ResidueClass::Nonpolar, "VAL" => ResidueClass::Nonpolar,
    "LEU" => ResidueClass::Nonpolar, "ILE" => ResidueClass::Nonpolar,
    "PRO" => ResidueClass::Nonpolar, "PHE" => ResidueClass::Nonpolar,
    "TRP" => ResidueClass::Nonpolar, "MET" => ResidueClass::Nonpolar,
    "GLY" => ResidueClass::PolarNeutral, "SER" => ResidueClass::PolarNeutral,
    "THR" => ResidueClass::PolarNeutral, "CYS" => ResidueClass::PolarNeutral,
    "TYR" => ResidueClass::PolarNeutral, "ASN" => ResidueClass::PolarNeutral,
    "GLN" => ResidueClass::PolarNeutral,
    "LYS" => ResidueClass::Basic, "ARG" => ResidueClass::Basic, "HIS" => ResidueClass::Basic,
    "ASP" => ResidueClass::Acidic, "GLU" => ResidueClass::Acidic,
    "HOH" => ResidueClass::Water,
};

/// Looks up the class of a three-letter residue name. `None` means "other"
/// (metals, cofactors, modified or non-standard residues).
pub fn residue_class(name: &str) -> Option<ResidueClass> {
    RESIDUE_CLASSES.get(name).copied()
}

/// Number of distinct contacted residues per class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactCounts {
    pub nonpolar: u32,
    pub polar_neutral: u32,
    pub basic: u32,
    pub acidic: u32,
    pub other: u32,
}

impl ContactCounts {
    /// Adds one residue to its class bucket. Water is dropped silently.
    pub fn record(&mut self, residue_name: &str) {
        match residue_class(residue_name) {
            Some(ResidueClass::Nonpolar) => self.nonpolar += 1,
            Some(ResidueClass::PolarNeutral) => self.polar_neutral += 1,
            Some(ResidueClass::Basic) => self.basic += 1,
            Some(ResidueClass::Acidic) => self.acidic += 1,
            Some(ResidueClass::Water) => {}
            None => self.other += 1,
        }
    }

    /// Buckets in feature order: nonpolar, polar-neutral, basic, acidic, other.
    pub fn as_array(&self) -> [u32; 5] {
        [
            self.nonpolar,
            self.polar_neutral,
            self.basic,
            self.acidic,
            self.other,
        ]
    }

    pub fn total(&self) -> u32 {
        self.as_array().iter().sum()
    }
}
