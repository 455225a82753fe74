/// Utility functions for string processing, particularly SQL dump handling

/// Bytes consumed after a closing `)` before the next tuple is looked for
pub const TUPLE_SEPARATORS: &[u8] = b",; \n\t";

/// Check whether a byte belongs to the inter-tuple separator run
pub fn is_tuple_separator(byte: u8) -> bool {
    TUPLE_SEPARATORS.contains(&byte)
}

/// Find the byte index of the first `;` at or after `from` that is not inside a quoted string.
/// Handles single and double quotes plus backslash escapes.
pub fn find_statement_end(sql: &str, from: usize) -> Option<usize> {
    let bytes = sql.as_bytes();
    let mut quote: Option<u8> = None;
    let mut escaped = false;

    for (i, &byte) in bytes.iter().enumerate().skip(from) {
        if escaped {
            escaped = false;
            continue;
        }

        match (quote, byte) {
            (_, b'\\') => escaped = true,
            (None, b'\'' | b'"') => quote = Some(byte),
            (Some(q), _) if q == byte => quote = None,
            (None, b';') => return Some(i),
            _ => {}
        }
    }

    None
}

/// First `max_chars` characters of `text`, never splitting a UTF-8 sequence
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Length of `text` in characters rather than bytes
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
