//! Struct `Dataset` represents a batch of categorical records
//! that share one `Schema`.

// Provides the schema and dataset structs.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use sample_reader::{SampleReader, read_table, write_table};
pub use sample_struct::{Schema, Record, Dataset};
