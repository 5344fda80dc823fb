use super::column;
use super::traits::InputFile;
use crate::core::models::atom::Atom;
use crate::core::models::protein::Protein;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Reader for PDB-style fixed-width coordinate files.
///
/// Every `ATOM`/`HETATM` record becomes one protein atom. Records whose
/// coordinate fields do not parse are skipped, as are all other record types.
pub struct PdbFile;

impl InputFile for PdbFile {
    type Output = Protein;
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Protein, PdbError> {
        let mut atoms = Vec::new();
        let mut skipped = 0usize;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            if !is_coordinate_record(&line) {
                continue;
            }
            match parse_coordinate_record(&line) {
                Some(atom) => atoms.push(atom),
                None => {
                    skipped += 1;
                    debug!(line = line_num + 1, "Skipping malformed coordinate record.");
                }
            }
        }

        if skipped > 0 {
            warn!(
                skipped,
                "Some ATOM/HETATM records had unreadable coordinates and were ignored."
            );
        }
        Ok(Protein::new(atoms))
    }
}

fn is_coordinate_record(line: &str) -> bool {
    line.starts_with("ATOM") || line.starts_with("HETATM")
}

fn parse_coordinate_record(line: &str) -> Option<Atom> {
    let name = column(line, 12, 16);
    let residue_name = column(line, 16, 20);
    let seq_id = column(line, 22, 27);
    let x: f64 = column(line, 30, 38).parse().ok()?;
    let y: f64 = column(line, 38, 46).parse().ok()?;
    let z: f64 = column(line, 46, 54).parse().ok()?;
    let element = column(line, 76, 78);

    Some(Atom::protein(
        name,
        element,
        residue_name,
        seq_id,
        Point3::new(x, y, z),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTEIN: &str = "\
HEADER    TEST
ATOM      1  CB  ALA A  10       0.000   0.000   2.000  1.00  0.00           C
ATOM      2  CA  ALA A  10       0.500   0.000   2.800  1.00  0.00           C

HETATM    6  O   HOH W 201      -1.000   1.500   0.500  1.00  0.00           O
ATOM      7  CA  GLY A  52A     30.000  30.000  30.000  1.00  0.00           C
ATOM      8  CA  GLY A  53      30.000      nan
TER
END
";

    #[test]
    fn reads_atom_and_hetatm_records_across_blank_lines() {
        let protein = PdbFile::read_from_str(PROTEIN).unwrap();
        assert_eq!(protein.len(), 4);

        let first = &protein.atoms()[0];
        assert_eq!(first.name, "CB");
        assert_eq!(first.atom_type, "C");
        assert_eq!(first.position, Point3::new(0.0, 0.0, 2.0));
        let residue = first.residue.as_ref().unwrap();
        assert_eq!(residue.name, "ALA");
        assert_eq!(residue.seq_id, "10");

        let water = &protein.atoms()[2];
        assert_eq!(water.residue.as_ref().unwrap().name, "HOH");
        assert_eq!(water.position, Point3::new(-1.0, 1.5, 0.5));
    }

    #[test]
    fn keeps_insertion_code_in_sequence_id() {
        let protein = PdbFile::read_from_str(PROTEIN).unwrap();
        assert_eq!(protein.atoms()[3].residue.as_ref().unwrap().seq_id, "52A");
        assert_eq!(protein.residue_count(), 3);
    }

    #[test]
    fn skips_short_records_instead_of_failing() {
        let protein = PdbFile::read_from_str("ATOM      1  CA  ALA A  10\nREMARK done\n").unwrap();
        assert!(protein.is_empty());
    }

    #[test]
    fn read_from_path_reports_missing_files() {
        let err = PdbFile::read_from_path("/nonexistent/receptor.pdb").unwrap_err();
        assert!(matches!(err, PdbError::Io(_)));
    }
}
