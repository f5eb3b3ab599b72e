pub mod csv_reader;
pub mod dataset;

pub use csv_reader::read_dataset;
pub use dataset::{ColumnType, Dataset, FieldValue};
