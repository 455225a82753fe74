use crate::{
    config::ScanConfig,
    fields::{SqlValue, parse_tuple},
    result::Result,
    scanner::{ScanOutcome, ScanReport},
    str_utils::{char_len, preview},
};
use serde::Serialize;
use std::io::Write;

/// Diagnostics for one tuple
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TupleReport {
    /// 1-based
    pub index: usize,
    pub total: usize,
    /// Byte offset of the opening `(` within the VALUES section
    pub offset: usize,
    /// Character length of the trimmed tuple
    pub length: usize,
    pub preview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<SqlValue>>,
}

/// Report for a whole scan, ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanSummary {
    pub total: usize,
    pub outcome: ScanOutcome,
    pub tuples: Vec<TupleReport>,
}

impl ScanSummary {
    pub fn build(report: &ScanReport<'_>, config: &ScanConfig) -> Result<Self> {
        let total = report.len();
        let tuples = report
            .tuples
            .iter()
            .map(|tuple| -> Result<TupleReport> {
                let text = tuple.trimmed();
                let fields = if config.include_fields {
                    Some(parse_tuple(text)?)
                } else {
                    None
                };
                Ok(TupleReport {
                    index: tuple.position + 1,
                    total,
                    offset: tuple.offset,
                    length: char_len(text),
                    preview: preview(text, config.preview_chars).to_string(),
                    fields,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ScanSummary {
            total,
            outcome: report.outcome,
            tuples,
        })
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Found {} tuples", self.total)?;

        for tuple in &self.tuples {
            writeln!(out)?;
            writeln!(out, "Processing tuple {}/{}...", tuple.index, tuple.total)?;
            writeln!(out, "Tuple length: {} chars", tuple.length)?;
            writeln!(out, "Start: {}...", tuple.preview)?;
            if let Some(fields) = &tuple.fields {
                writeln!(out, "Fields: {}", fields.len())?;
                for (i, value) in fields.iter().enumerate() {
                    writeln!(out, "  [{i}]: {}", describe(value))?;
                }
            }
        }

        match self.outcome {
            ScanOutcome::Complete => {}
            ScanOutcome::Stopped { offset } => {
                writeln!(out)?;
                writeln!(out, "Note: scan stopped at byte {offset} (not a tuple)")?;
            }
            ScanOutcome::Truncated { offset } => {
                writeln!(out)?;
                writeln!(
                    out,
                    "Warning: unbalanced tuple at byte {offset} was dropped"
                )?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Total tuples to import: {}", self.total)?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

fn describe(value: &SqlValue) -> String {
    match value {
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Integer(n) => n.to_string(),
        SqlValue::Float(f) => f.to_string(),
        SqlValue::Text(s) => format!("{s:?}"),
        SqlValue::Hex(_) => match value.hex_as_text() {
            Some(text) => format!("hex -> {text}"),
            None => "hex (binary)".to_string(),
        },
        SqlValue::Raw(raw) => raw.clone(),
    }
}
