//! Preprocessing tools for the raw data files.

/// Provides the median binning of continuous columns.
pub mod binning;

pub use binning::{MedianBinning, Binned};
