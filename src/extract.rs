use crate::{
    result::{Result, ValuesError},
    str_utils::find_statement_end,
};
use regex::Regex;

// Greedy up to the last `;` in the text
static VALUES_REGEX: once_cell::sync::Lazy<Regex> =
    once_cell::sync::Lazy::new(|| Regex::new(r"(?s)VALUES\s+(.*);").unwrap());

/// Locate the VALUES list of an INSERT statement.
///
/// Returns everything after the `VALUES` keyword up to, but not including, the
/// last `;` of `sql`. Dumps with several statements should be narrowed with
/// [`extract_insert_statement`] first.
pub fn extract_values_section(sql: &str) -> Result<&str> {
    let captures = VALUES_REGEX
        .captures(sql)
        .ok_or(ValuesError::ValuesNotFound)?;
    let section = captures
        .get(1)
        .map(|m| m.as_str())
        .ok_or(ValuesError::ValuesNotFound)?;
    tracing::debug!(bytes = section.len(), "located VALUES section");
    Ok(section)
}

/// Narrow a multi-table dump to the first ``INSERT INTO `table` `` statement.
///
/// The returned slice runs from `INSERT` through the terminating `;` found
/// outside string literals, or to the end of input if there is none. An
/// unterminated statement then has no VALUES section for
/// [`extract_values_section`], which needs the closing `;`.
pub fn extract_insert_statement<'a>(sql: &'a str, table: &str) -> Result<&'a str> {
    let pattern = format!(
        r"(?i)INSERT\s+INTO\s+`?{}`?(?:[\s(]|$)",
        regex::escape(table)
    );
    let regex = Regex::new(&pattern).map_err(|e| ValuesError::InvalidConfig(e.to_string()))?;
    let start = regex
        .find(sql)
        .map(|m| m.start())
        .ok_or_else(|| ValuesError::TableNotFound(table.to_string()))?;

    let end = find_statement_end(sql, start).map_or(sql.len(), |semi| semi + 1);
    tracing::debug!(table, start, end, "located INSERT statement");
    Ok(&sql[start..end])
}
