use super::column;
use super::traits::InputFile;
use crate::core::models::atom::Atom;
use crate::core::models::ligand::Ligand;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, warn};

const SECTION_PREFIX: &str = "@<TRIPOS>";

#[derive(Debug, Error)]
pub enum Mol2Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: Mol2ParseErrorKind,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Mol2ParseErrorKind {
    #[error("Atom record matches neither the fixed-column nor the whitespace layout: '{0}'")]
    UnparseableAtom(String),
    #[error("Counts line must start with integer atom and bond counts (value: '{0}')")]
    InvalidCounts(String),
    #[error("Molecule header ends before its counts line")]
    MissingCounts,
    #[error("Atom record appears before any molecule header")]
    AtomOutsideMolecule,
}

/// A successfully parsed atom record, tagged with the layout that matched.
#[derive(Debug, Clone, PartialEq)]
pub enum AtomLine {
    /// x, y, z and the type tag were read from their fixed columns.
    FixedColumns(Atom),
    /// The record was split on whitespace (tokens 3 to 6).
    Whitespace(Atom),
}

impl AtomLine {
    pub fn into_atom(self) -> Atom {
        match self {
            AtomLine::FixedColumns(atom) | AtomLine::Whitespace(atom) => atom,
        }
    }
}

/// Parses one atom record of a `@<TRIPOS>ATOM` block.
///
/// The fixed-column layout (x `16..26`, y `26..36`, z `36..46`, type `46..53`)
/// is tried first; ligand files are not reliably column-aligned, so a record
/// that does not fit falls back to whitespace tokens.
pub fn parse_atom_line(line: &str) -> Result<AtomLine, Mol2ParseErrorKind> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let name = tokens.get(1).copied().unwrap_or("");

    if let Some((position, atom_type)) = fixed_column_fields(line) {
        return Ok(AtomLine::FixedColumns(Atom::ligand(name, atom_type, position)));
    }
    if let Some((position, atom_type)) = whitespace_fields(&tokens) {
        return Ok(AtomLine::Whitespace(Atom::ligand(name, atom_type, position)));
    }
    Err(Mol2ParseErrorKind::UnparseableAtom(line.trim().to_string()))
}

fn fixed_column_fields(line: &str) -> Option<(Point3<f64>, &str)> {
    let x = column(line, 16, 26).parse().ok()?;
    let y = column(line, 26, 36).parse().ok()?;
    let z = column(line, 36, 46).parse().ok()?;
    // A blank type field is accepted; the atom then has no radius.
    let atom_type = column(line, 46, 53).split_whitespace().next().unwrap_or("");
    Some((Point3::new(x, y, z), atom_type))
}

fn whitespace_fields<'a>(tokens: &[&'a str]) -> Option<(Point3<f64>, &'a str)> {
    let [_, _, x, y, z, atom_type, ..] = tokens else {
        return None;
    };
    Some((
        Point3::new(x.parse().ok()?, y.parse().ok()?, z.parse().ok()?),
        *atom_type,
    ))
}

fn parse_counts(line: &str) -> Result<(usize, usize), Mol2ParseErrorKind> {
    let invalid = || Mol2ParseErrorKind::InvalidCounts(line.trim().to_string());
    let mut tokens = line.split_whitespace();
    let atoms = tokens.next().and_then(|t| t.parse().ok()).ok_or_else(invalid)?;
    let bonds = tokens.next().and_then(|t| t.parse().ok()).ok_or_else(invalid)?;
    Ok((atoms, bonds))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Molecule,
    Atoms,
    Other,
}

#[derive(Default)]
struct MoleculeHeader {
    marker_line: usize,
    lines_seen: usize,
    name: String,
}

/// Accumulates molecules while walking the file line by line.
struct Mol2Parser {
    section: Section,
    header: MoleculeHeader,
    current: Option<Ligand>,
    fallback_records: usize,
    ligands: Vec<Ligand>,
}

impl Mol2Parser {
    fn new() -> Self {
        Self {
            section: Section::Preamble,
            header: MoleculeHeader::default(),
            current: None,
            fallback_records: 0,
            ligands: Vec::new(),
        }
    }

    fn feed(&mut self, line_num: usize, line: &str) -> Result<(), Mol2Error> {
        let trimmed = line.trim();
        if trimmed.starts_with(SECTION_PREFIX) {
            return self.enter_section(line_num, trimmed);
        }

        match self.section {
            Section::Molecule => self.read_header_line(line_num, line),
            Section::Atoms if !trimmed.is_empty() => self.read_atom_line(line_num, line),
            _ => Ok(()),
        }
    }

    fn enter_section(&mut self, line_num: usize, marker: &str) -> Result<(), Mol2Error> {
        self.check_header_complete()?;
        let name = &marker[SECTION_PREFIX.len()..];
        self.section = if name.eq_ignore_ascii_case("MOLECULE") {
            self.finish_molecule();
            self.header = MoleculeHeader {
                marker_line: line_num,
                ..MoleculeHeader::default()
            };
            Section::Molecule
        } else if name.eq_ignore_ascii_case("ATOM") {
            Section::Atoms
        } else {
            Section::Other
        };
        Ok(())
    }

    fn read_header_line(&mut self, line_num: usize, line: &str) -> Result<(), Mol2Error> {
        self.header.lines_seen += 1;
        match self.header.lines_seen {
            1 => self.header.name = line.trim().to_string(),
            2 => {
                let (atoms, bonds) = parse_counts(line).map_err(|kind| Mol2Error::Parse {
                    line: line_num,
                    kind,
                })?;
                self.current = Some(Ligand::new(&self.header.name, atoms, bonds));
            }
            _ => {}
        }
        Ok(())
    }

    fn read_atom_line(&mut self, line_num: usize, line: &str) -> Result<(), Mol2Error> {
        let Some(ligand) = self.current.as_mut() else {
            return Err(Mol2Error::Parse {
                line: line_num,
                kind: Mol2ParseErrorKind::AtomOutsideMolecule,
            });
        };
        let parsed = parse_atom_line(line).map_err(|kind| Mol2Error::Parse {
            line: line_num,
            kind,
        })?;
        if matches!(parsed, AtomLine::Whitespace(_)) {
            self.fallback_records += 1;
        }
        ligand.atoms.push(parsed.into_atom());
        Ok(())
    }

    fn check_header_complete(&self) -> Result<(), Mol2Error> {
        if self.section == Section::Molecule && self.header.lines_seen < 2 {
            return Err(Mol2Error::Parse {
                line: self.header.marker_line,
                kind: Mol2ParseErrorKind::MissingCounts,
            });
        }
        Ok(())
    }

    fn finish_molecule(&mut self) {
        let Some(ligand) = self.current.take() else {
            return;
        };
        if ligand.atoms.len() != ligand.declared_atom_count {
            warn!(
                ligand = %ligand.name,
                declared = ligand.declared_atom_count,
                parsed = ligand.atoms.len(),
                "Parsed atom count differs from the molecule header."
            );
        }
        if self.fallback_records > 0 {
            debug!(
                ligand = %ligand.name,
                records = self.fallback_records,
                "Atom records read with the whitespace fallback."
            );
        }
        self.fallback_records = 0;
        self.ligands.push(ligand);
    }

    fn finish(mut self) -> Result<Vec<Ligand>, Mol2Error> {
        self.check_header_complete()?;
        self.finish_molecule();
        Ok(self.ligands)
    }
}

/// Reader for Tripos MOL2 files holding one or more molecules.
///
/// Each `@<TRIPOS>MOLECULE` section starts a new [`Ligand`]: its first line is
/// the name, the second holds the atom and bond counts. Atom records are read
/// from `@<TRIPOS>ATOM` sections; every other section is skipped. A molecule
/// without atom records is kept with an empty atom list.
pub struct Mol2File;

impl InputFile for Mol2File {
    type Output = Vec<Ligand>;
    type Error = Mol2Error;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Ligand>, Mol2Error> {
        let mut parser = Mol2Parser::new();
        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            parser.feed(line_num + 1, &line)?;
        }
        parser.finish()
    }
}
