//! Readers and writers for the file formats the predictor consumes and emits.
//!
//! - [`pdb`] - fixed-width protein coordinate records
//! - [`mol2`] - multi-molecule ligand files with `@<TRIPOS>` sections
//! - [`score_log`] - the text log of the external empirical scoring program
//! - [`report`] - the per-ligand CSV report

pub mod mol2;
pub mod pdb;
pub mod report;
pub mod score_log;
pub mod traits;

/// Returns the trimmed text of the 0-based, end-exclusive column range.
///
/// Ranges running past the end of the line are clipped, so short records
/// yield partial or empty fields rather than failing.
pub(crate) fn column(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    if start >= end {
        return "";
    }
    line.get(start..end).unwrap_or("").trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_clips_ranges_past_the_end_of_line() {
        let line = "ATOM      1  CA  ALA";
        assert_eq!(column(line, 0, 6), "ATOM");
        assert_eq!(column(line, 16, 20), "ALA");
        assert_eq!(column(line, 18, 40), "LA");
        assert_eq!(column(line, 30, 38), "");
    }
}
