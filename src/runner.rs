use crate::{
    config::ScanConfig,
    extract::{extract_insert_statement, extract_values_section},
    report::ScanSummary,
    result::Result,
    scanner::scan_tuples,
};
use std::fs;
use std::path::Path;

/// Run the whole pipeline over SQL text: narrow, extract, scan, summarize
pub fn scan_sql(sql: &str, config: &ScanConfig) -> Result<ScanSummary> {
    let statement = match config.table.as_deref() {
        Some(table) => extract_insert_statement(sql, table)?,
        None => sql,
    };
    let values = extract_values_section(statement)?;
    let report = scan_tuples(values, config.policy)?;
    tracing::info!(
        tuples = report.len(),
        outcome = ?report.outcome,
        "scan finished"
    );
    ScanSummary::build(&report, config)
}

/// Read a dump file verbatim and scan it
pub fn scan_file(path: impl AsRef<Path>, config: &ScanConfig) -> Result<ScanSummary> {
    let path = path.as_ref();
    let sql = fs::read_to_string(path)?;
    tracing::info!(path = %path.display(), bytes = sql.len(), "read SQL dump");
    scan_sql(&sql, config)
}
