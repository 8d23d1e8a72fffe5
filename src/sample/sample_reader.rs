use crate::error::{Error, Result};
use super::sample_struct::{Schema, Dataset};

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};


/// Reads a comma-delimited file.
/// Empty lines are skipped and each value is trimmed.
/// Quoting is not supported.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut table = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }

        let row = line.split(',')
            .map(|value| value.trim().to_string())
            .collect::<Vec<_>>();
        table.push(row);
    }
    Ok(table)
}


/// A struct that returns [`Dataset`].
/// The attribute names are read from the first row of the header file,
/// and the records are read from the data file.
/// # Example
/// ```no_run
/// use id3tree::SampleReader;
/// let dataset = SampleReader::default()
///     .header_file("adult_headers.txt")
///     .data_file("adult.data")
///     .decision_index(14)
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SampleReader {
    header: Option<PathBuf>,
    data: Option<PathBuf>,
    decision_index: Option<usize>,
}


impl SampleReader {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the file that holds the attribute names.
    pub fn header_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.header = Some(path.as_ref().to_path_buf());
        self
    }


    /// Set the file that holds the records.
    pub fn data_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data = Some(path.as_ref().to_path_buf());
        self
    }


    /// Set the position of the decision column.
    /// By default, the last column is the decision column.
    pub fn decision_index(mut self, index: usize) -> Self {
        self.decision_index = Some(index);
        self
    }


    /// Reads the schema from the header file.
    pub fn read_schema(&self) -> Result<Schema> {
        let header = self.header.as_ref()
            .ok_or_else(|| {
                Error::Parameters("the header file is not set".to_string())
            })?;

        let names = read_table(header)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::EmptyDataset(header.clone()))?;

        match self.decision_index {
            Some(index) => Schema::new(names, index),
            None => Schema::with_last_decision(names),
        }
    }


    /// Reads the files based on the arguments,
    /// and returns `Result<Dataset>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Dataset> {
        let schema = self.read_schema()?;
        let data = self.data.as_ref()
            .ok_or_else(|| {
                Error::Parameters("the data file is not set".to_string())
            })?;
        let rows = read_table(data)?;
        Dataset::new(schema, rows)
    }
}


/// Writes `rows` to `path` as comma-delimited lines.
pub fn write_table<P: AsRef<Path>>(path: P, rows: &[Vec<String>]) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for row in rows {
        writeln!(file, "{}", row.join(","))?;
    }
    file.flush()?;
    Ok(())
}
