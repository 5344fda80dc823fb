use crate::core::models::features::Prediction;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
}

/// One report row; field order and names define the CSV header.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    ligand_name: &'a str,
    #[serde(rename = "VDW")]
    vdw: f64,
    #[serde(rename = "HB")]
    hbond: f64,
    #[serde(rename = "HM")]
    hydrophobic_match: f64,
    #[serde(rename = "HS")]
    hydrophobic_surface: f64,
    #[serde(rename = "RT")]
    rotor: f64,
    volume: f64,
    num_ring: i64,
    #[serde(rename = "num_N")]
    num_n: u32,
    #[serde(rename = "num_O")]
    num_o: u32,
    #[serde(rename = "ami_A1")]
    ami_a1: u32,
    #[serde(rename = "ami_B1")]
    ami_b1: u32,
    #[serde(rename = "ami_B2")]
    ami_b2: u32,
    #[serde(rename = "ami_B3")]
    ami_b3: u32,
    other: u32,
    predicted_affinity: f64,
}

impl<'a> From<&'a Prediction> for ReportRow<'a> {
    fn from(p: &'a Prediction) -> Self {
        let scores = &p.features.scores;
        let profile = &p.features.profile;
        let [ami_a1, ami_b1, ami_b2, ami_b3, other] = profile.contacts.as_array();
        Self {
            ligand_name: &p.ligand_name,
            vdw: scores.vdw,
            hbond: scores.hbond,
            hydrophobic_match: scores.hydrophobic_match,
            hydrophobic_surface: scores.hydrophobic_surface,
            rotor: scores.rotor,
            volume: profile.volume,
            num_ring: profile.ring_count,
            num_n: profile.polar.nitrogen,
            num_o: profile.polar.oxygen,
            ami_a1,
            ami_b1,
            ami_b2,
            ami_b3,
            other,
            predicted_affinity: p.affinity,
        }
    }
}

/// Writes one CSV row per prediction, preceded by the header line.
///
/// The header is emitted with the first row, so an empty slice writes nothing.
pub fn write_report<W: Write>(writer: W, predictions: &[Prediction]) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for prediction in predictions {
        wtr.serialize(ReportRow::from(prediction))?;
    }
    wtr.flush().map_err(|e| ReportError::Io {
        path: "<writer>".to_string(),
        source: e,
    })?;
    Ok(())
}

pub fn write_report_to_path(path: &Path, predictions: &[Prediction]) -> Result<(), ReportError> {
    let file = std::fs::File::create(path).map_err(|e| ReportError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    write_report(file, predictions)
}
