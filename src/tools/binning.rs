use crate::Record;
use crate::constants::DEFAULT_UNKNOWN_FLAG;
use crate::error::{Error, Result};

use std::cmp::Ordering;
use std::collections::BTreeMap;


/// Discretizes continuous columns into two bins split at the median.
///
/// The rows containing the unknown flag are dropped.
/// Each value of a continuous column is replaced with
/// `>{median}` or `<={median}`.
///
/// # Example
/// ```no_run
/// use id3tree::tools::MedianBinning;
/// # let rows: Vec<Vec<String>> = Vec::new();
/// let binned = MedianBinning::new(vec![0, 2, 4, 10, 11, 12])
///     .unknown_flag("?")
///     .transform(rows)
///     .unwrap();
/// println!("dropped {} rows", binned.excluded);
/// ```
#[derive(Debug, Clone)]
pub struct MedianBinning {
    columns: Vec<usize>,
    unknown_flag: String,
}


/// The output of [`MedianBinning::transform`].
#[derive(Debug, Clone, PartialEq)]
pub struct Binned {
    /// Rows with the continuous columns replaced.
    pub rows: Vec<Record>,
    /// Median of each continuous column.
    pub thresholds: BTreeMap<usize, String>,
    /// Number of rows dropped for containing the unknown flag.
    pub excluded: usize,
}


impl MedianBinning {
    /// Construct a new instance of [`MedianBinning`]
    /// for the columns at `columns`.
    pub fn new(columns: Vec<usize>) -> Self {
        Self {
            columns,
            unknown_flag: DEFAULT_UNKNOWN_FLAG.to_string(),
        }
    }


    /// Set the marker of unknown values.
    /// Default value is `"?"`.
    pub fn unknown_flag<S: Into<String>>(mut self, flag: S) -> Self {
        self.unknown_flag = flag.into();
        self
    }


    /// Returns the median of each continuous column over the `rows`
    /// that do not contain the unknown flag.
    /// The median is the element at `len / 2` after sorting.
    pub fn thresholds(&self, rows: &[Record]) -> Result<BTreeMap<usize, String>> {
        let known = rows.iter()
            .filter(|row| !self.has_unknown(row))
            .collect::<Vec<_>>();

        let mut thresholds = BTreeMap::new();
        if known.is_empty() {
            return Ok(thresholds);
        }

        for &column in self.columns.iter() {
            let mut values = known.iter()
                .map(|row| {
                    row.get(column)
                        .map(String::as_str)
                        .ok_or_else(|| Error::Parameters(format!(
                            "column {column} is out of a row with {} values",
                            row.len()
                        )))
                })
                .collect::<Result<Vec<&str>>>()?;

            values.sort_by(|a, b| compare_values(a, b));
            let median = values[values.len() / 2].to_string();
            thresholds.insert(column, median);
        }
        Ok(thresholds)
    }


    /// Drops the rows with unknown values and
    /// replaces the continuous values with their bins.
    pub fn transform(&self, rows: Vec<Record>) -> Result<Binned> {
        let thresholds = self.thresholds(&rows)?;

        let n_rows = rows.len();
        let rows = rows.into_iter()
            .filter(|row| !self.has_unknown(row))
            .map(|mut row| {
                for (&column, median) in thresholds.iter() {
                    let bin = match compare_values(&row[column], median) {
                        Ordering::Greater => format!(">{median}"),
                        _ => format!("<={median}"),
                    };
                    row[column] = bin;
                }
                row
            })
            .collect::<Vec<_>>();
        let excluded = n_rows - rows.len();

        Ok(Binned { rows, thresholds, excluded })
    }


    #[inline]
    fn has_unknown(&self, row: &Record) -> bool {
        row.iter().any(|value| *value == self.unknown_flag)
    }
}


/// Compares two values numerically if both are numbers,
/// lexicographically if neither is.
/// Numbers are placed before the other values,
/// so this is a total order.
fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values() {
        assert_eq!(compare_values("9", "10"), Ordering::Less);
        assert_eq!(compare_values("b", "a"), Ordering::Greater);
        assert_eq!(compare_values("1.0", "1"), Ordering::Equal);
    }

    #[test]
    fn test_numbers_before_text() {
        assert_eq!(compare_values("10", "1x"), Ordering::Less);
        assert_eq!(compare_values("1x", "2"), Ordering::Greater);

        let mut values = vec!["1x", "10", "b", "2", "a", "-3"];
        values.sort_by(|a, b| compare_values(a, b));
        assert_eq!(values, vec!["-3", "2", "10", "1x", "a", "b"]);
    }
}
