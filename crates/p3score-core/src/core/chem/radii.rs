use phf::{Map, phf_map};

static VDW_RADII: Map<&'static str, f64> = phf_map! {
    "C.3" => 1.70, "C.2" => 1.70, "C.cat" => 1.70, "C" => 1.77, "C.1" => 1.77, "C.ar" => 1.77,
    "N.4" => 1.55, "N.3" => 1.55, "N.2" => 1.55, "N" => 1.55,
    "N.1" => 1.60, "N.ar" => 1.60, "N.am" => 1.60, "N.pl3" => 1.60,
    "O" => 1.50, "O.2" => 1.50, "O.co2" => 1.50, "O.3" => 1.52, "O.spc" => 1.43, "O.t3p" => 1.43,
    "S" => 1.80, "S.3" => 1.80, "S.2" => 1.80, "S.o" => 1.80, "S.o2" => 1.80,
    "P.3" => 1.88,
    "H" => 1.10, "H.spc" => 1.15, "H.t3p" => 1.15,
    "F" => 1.50, "Cl" => 1.75, "Br" => 1.85, "I" => 1.97,
    "Li" => 2.14, "Na" => 2.38, "K" => 2.52, "Mg" => 2.00, "Ca" => 2.27, "Al" => 1.92,
    "Si" => 2.05, "Se" => 1.92, "Sn" => 2.23,
    "Fe" => 2.04, "Cu" => 1.96, "Zn" => 2.01, "Mo" => 2.17, "Mn" => 2.05,
    "Cr.oh" => 2.06, "Cr.th" => 2.06, "Co.oh" => 2.00,
};

/// Returns the van der Waals radius (Å) for a SYBYL-style atom type tag.
///
/// Tags are matched exactly (case-sensitive). Unknown tags resolve to `0.0`;
/// such an atom still takes part in bounding-box extremes but covers no volume.
pub fn vdw_radius(atom_type: &str) -> f64 {
    VDW_RADII.get(atom_type).copied().unwrap_or(0.0)
}

pub fn is_known_type(atom_type: &str) -> bool {
    VDW_RADII.contains_key(atom_type)
}
