pub mod config;
pub mod extract;
pub mod fields;
pub mod report;
pub mod result;
pub mod runner;
pub mod scanner;
pub mod str_utils;

// Re-export types for convenience
pub use config::{OutputFormat, ScanConfig};
pub use extract::{extract_insert_statement, extract_values_section};
pub use fields::{SqlValue, parse_tuple, split_fields};
pub use report::{ScanSummary, TupleReport};
pub use result::{Result, ValuesError};
pub use runner::{scan_file, scan_sql};
pub use scanner::{
    ScanOutcome, ScanReport, TruncationPolicy, Tuple, TupleScanner, scan_tuples, tuple_strings,
};
