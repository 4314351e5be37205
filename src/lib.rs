// src/lib.rs
pub mod config;
pub mod error;
pub mod extractor;
pub mod literal;
pub mod output_table;
pub mod projection;

pub use error::*;

pub use config::{ExtractorConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
pub use extractor::{ExtractionStats, LogRecordExtractor};
pub use literal::{parse_mapping, LiteralError};
pub use output_table::OutputTable;
pub use projection::{first_element, flatten_record, ProjectionError};
