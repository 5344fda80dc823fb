use super::traits::InputFile;
use crate::core::models::features::ExternalScores;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

/// Token positions of VDW, HB, HM, HS and RT on a `Total` line.
const SCORE_COLUMNS: [usize; 5] = [1, 2, 4, 5, 6];
/// Consecutive blank lines after which the log is considered finished.
const BLANK_LINE_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum ScoreLogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Reader for the text log written by the external empirical scoring program.
///
/// Only lines whose first token is `Total` carry data, one per scored ligand,
/// in the order the ligands appear in the ligand file.
pub struct ScoreLogFile;

impl InputFile for ScoreLogFile {
    type Output = Vec<ExternalScores>;
    type Error = ScoreLogError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<ExternalScores>, ScoreLogError> {
        let mut rows = Vec::new();
        let mut blank_run = 0usize;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                blank_run += 1;
                if blank_run == BLANK_LINE_LIMIT {
                    debug!(line = line_num + 1, "Blank-line run ends the score log.");
                    break;
                }
                continue;
            }
            blank_run = 0;

            if tokens[0] == "Total" {
                rows.push(parse_total_line(line_num + 1, &tokens)?);
            }
        }

        debug!(rows = rows.len(), "Read external score rows.");
        Ok(rows)
    }
}

fn parse_total_line(line: usize, tokens: &[&str]) -> Result<ExternalScores, ScoreLogError> {
    let mut columns = [0.0; 5];
    for (slot, &index) in columns.iter_mut().zip(SCORE_COLUMNS.iter()) {
        let token = tokens.get(index).ok_or_else(|| ScoreLogError::Parse {
            line,
            message: format!(
                "'Total' line has {} tokens, expected at least {}",
                tokens.len(),
                SCORE_COLUMNS[4] + 1
            ),
        })?;
        *slot = token.parse().map_err(|_| ScoreLogError::Parse {
            line,
            message: format!("token {index} ('{token}') is not a number"),
        })?;
    }
    Ok(ExternalScores::from_columns(columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const LOG: &str = "\
  XTOOL/XSCORE scoring summary
  Receptor : protein.pdb

   Ligand          VDW     HB     HP     HM     HS     RT   Score
Total            -5.12   1.80   0.30   0.45  -4.90   1.20   -4.31
  contributions listed per atom are omitted

Total            -2.30   0.60   0.05   0.10  -2.00   0.30   -2.02
";

    #[test]
    fn total_lines_yield_selected_columns_in_order() {
        let rows = ScoreLogFile::read_from_str(LOG).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].as_array(), [-5.12, 1.8, 0.45, -4.9, 1.2]);
        assert_eq!(rows[1].as_array(), [-2.3, 0.6, 0.1, -2.0, 0.3]);
    }

    #[test]
    fn ten_consecutive_blank_lines_end_the_log() {
        let mut content = String::from("Total 1 2 3 4 5 6\n");
        content.push_str(&"\n".repeat(10));
        content.push_str("Total 9 9 9 9 9 9\n");
        let rows = ScoreLogFile::read_from_str(&content).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn interrupted_blank_runs_do_not_end_the_log() {
        let mut content = String::from("Total 1 2 3 4 5 6\n");
        content.push_str(&"\n".repeat(9));
        content.push_str("note\n");
        content.push_str(&"   \n".repeat(9));
        content.push_str("Total 9 9 9 9 9 9\n");
        let rows = ScoreLogFile::read_from_str(&content).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].rotor, 9.0);
    }

    #[test]
    fn short_total_line_is_a_parse_error() {
        let err = ScoreLogFile::read_from_str("header\nTotal -1.0 2.0\n").unwrap_err();
        assert!(matches!(err, ScoreLogError::Parse { line: 2, .. }));
    }

    #[test]
    fn non_numeric_total_line_is_a_parse_error() {
        let err = ScoreLogFile::read_from_str("Total -1.0 2.0 0.0 abc 1 1\n").unwrap_err();
        match err {
            ScoreLogError::Parse { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("abc"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reads_log_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(LOG.as_bytes()).unwrap();
        let rows = ScoreLogFile::read_from_path(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn log_without_total_lines_is_empty() {
        assert!(ScoreLogFile::read_from_str("nothing scored\n").unwrap().is_empty());
    }
}
