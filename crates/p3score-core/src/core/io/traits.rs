use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading an input file format.
///
/// Implementors parse a whole file from a buffered reader into their
/// [`Output`](InputFile::Output) type; path-based reading is provided.
pub trait InputFile {
    /// The in-memory result of parsing one file.
    type Output;

    /// The error type for parsing and I/O failures.
    type Error: Error + From<io::Error>;

    /// Reads and parses the whole content of `reader`.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content violates the format.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error>;

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Output, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Parses in-memory text.
    fn read_from_str(content: &str) -> Result<Self::Output, Self::Error> {
        Self::read_from(&mut content.as_bytes())
    }
}
