//! Tuple boundary scanner for the VALUES list of an INSERT statement.
//!
//! The scanner walks the text once, left to right, and yields the interior of
//! every top-level parenthesized tuple. Single-quoted literals make `(`, `)`,
//! `,` and `;` inert, and a backslash makes the following byte literal.
//!
//! All structural characters are ASCII, so the scan runs over bytes and every
//! slice it hands out falls on a UTF-8 boundary.

use crate::{
    result::{Result, ValuesError},
    str_utils::is_tuple_separator,
};
use serde::{Deserialize, Serialize};

/// What the scanner does when input ends inside an unclosed tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncationPolicy {
    /// Drop the partial tuple and report it through [`ScanOutcome::Truncated`]
    #[default]
    Lenient,
    /// Fail with [`ValuesError::UnbalancedTuple`]
    Strict,
}

/// Terminal state of a finished scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// End of input reached between tuples
    Complete,
    /// A byte other than `(` was found where a tuple should start
    Stopped { offset: usize },
    /// Input ended inside the tuple opened at `offset`; that tuple was discarded
    Truncated { offset: usize },
}

impl ScanOutcome {
    pub fn is_truncated(&self) -> bool {
        matches!(self, ScanOutcome::Truncated { .. })
    }
}

/// One top-level tuple found in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuple<'a> {
    /// 0-based position in source order
    pub position: usize,
    /// Byte offset of the opening `(` in the source text
    pub offset: usize,
    /// Text strictly between the top-level parentheses, untrimmed
    pub text: &'a str,
}

impl<'a> Tuple<'a> {
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    Inside {
        depth: usize,
        string_mode: bool,
        escape_pending: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue(ScanState),
    Closed,
}

impl ScanState {
    fn step(self, byte: u8) -> Step {
        match self {
            ScanState::Outside if byte == b'(' => Step::Continue(ScanState::Inside {
                depth: 1,
                string_mode: false,
                escape_pending: false,
            }),
            ScanState::Outside => Step::Continue(self),
            ScanState::Inside {
                depth,
                string_mode,
                escape_pending: true,
            } => Step::Continue(ScanState::Inside {
                depth,
                string_mode,
                escape_pending: false,
            }),
            ScanState::Inside {
                depth, string_mode, ..
            } => match (byte, string_mode) {
                (b'\\', _) => Step::Continue(ScanState::Inside {
                    depth,
                    string_mode,
                    escape_pending: true,
                }),
                (b'\'', _) => Step::Continue(ScanState::Inside {
                    depth,
                    string_mode: !string_mode,
                    escape_pending: false,
                }),
                (b'(', false) => Step::Continue(ScanState::Inside {
                    depth: depth + 1,
                    string_mode,
                    escape_pending: false,
                }),
                (b')', false) if depth == 1 => Step::Closed,
                (b')', false) => Step::Continue(ScanState::Inside {
                    depth: depth - 1,
                    string_mode,
                    escape_pending: false,
                }),
                _ => Step::Continue(self),
            },
        }
    }
}

/// Lazy iterator over the tuples of a VALUES list
///
/// Once `next` returns `None`, [`TupleScanner::outcome`] tells why.
#[derive(Debug, Clone)]
pub struct TupleScanner<'a> {
    source: &'a str,
    cursor: usize,
    emitted: usize,
    outcome: Option<ScanOutcome>,
}

impl<'a> TupleScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        TupleScanner {
            source,
            cursor: 0,
            emitted: 0,
            outcome: None,
        }
    }

    /// How the scan ended, or `None` while tuples may still follow
    pub fn outcome(&self) -> Option<ScanOutcome> {
        self.outcome
    }

    /// Number of tuples yielded so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Byte index of the `)` matching the `(` at `open`
    fn find_close(&self, open: usize) -> Option<usize> {
        let mut state = ScanState::Outside;
        for (i, &byte) in self.source.as_bytes().iter().enumerate().skip(open) {
            match state.step(byte) {
                Step::Continue(next) => state = next,
                Step::Closed => return Some(i),
            }
        }
        None
    }

    /// Skip Unicode whitespace before a tuple; the cursor always sits on a char boundary here
    fn skip_whitespace(&mut self) {
        let rest = &self.source[self.cursor..];
        self.cursor += rest.len() - rest.trim_start().len();
    }

    fn advance_while(&mut self, pred: impl Fn(u8) -> bool) {
        let source = self.source;
        let bytes = source.as_bytes();
        while self.cursor < bytes.len() && pred(bytes[self.cursor]) {
            self.cursor += 1;
        }
    }

    fn finish(&mut self, outcome: ScanOutcome) -> Option<Tuple<'a>> {
        self.outcome = Some(outcome);
        self.cursor = self.source.len();
        None
    }
}

impl<'a> Iterator for TupleScanner<'a> {
    type Item = Tuple<'a>;

    fn next(&mut self) -> Option<Tuple<'a>> {
        if self.outcome.is_some() {
            return None;
        }

        self.skip_whitespace();
        let source = self.source;
        let bytes = source.as_bytes();
        if self.cursor >= bytes.len() {
            return self.finish(ScanOutcome::Complete);
        }
        if bytes[self.cursor] != b'(' {
            return self.finish(ScanOutcome::Stopped {
                offset: self.cursor,
            });
        }

        let open = self.cursor;
        let Some(close) = self.find_close(open) else {
            return self.finish(ScanOutcome::Truncated { offset: open });
        };

        let tuple = Tuple {
            position: self.emitted,
            offset: open,
            text: &source[open + 1..close],
        };
        self.emitted += 1;
        self.cursor = close + 1;
        self.advance_while(is_tuple_separator);
        Some(tuple)
    }
}

/// Every tuple of a scan plus the state it ended in
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport<'a> {
    pub tuples: Vec<Tuple<'a>>,
    pub outcome: ScanOutcome,
}

impl<'a> ScanReport<'a> {
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn texts(&self) -> Vec<&'a str> {
        self.tuples.iter().map(|t| t.text).collect()
    }
}

/// Scan `source` eagerly, applying `policy` to an unclosed trailing tuple
pub fn scan_tuples(source: &str, policy: TruncationPolicy) -> Result<ScanReport<'_>> {
    let mut scanner = TupleScanner::new(source);
    let tuples: Vec<Tuple<'_>> = scanner.by_ref().collect();
    let outcome = scanner.outcome().unwrap_or(ScanOutcome::Complete);

    match outcome {
        ScanOutcome::Truncated { offset } => {
            if policy == TruncationPolicy::Strict {
                return Err(ValuesError::UnbalancedTuple {
                    offset,
                    tuples_before: tuples.len(),
                });
            }
            tracing::warn!(
                offset,
                kept = tuples.len(),
                "unbalanced tuple at end of input, partial tuple dropped"
            );
        }
        ScanOutcome::Stopped { offset } => {
            tracing::debug!(offset, "scan stopped at non-tuple text");
        }
        ScanOutcome::Complete => {}
    }

    tracing::debug!(count = tuples.len(), "scanned VALUES tuples");
    Ok(ScanReport { tuples, outcome })
}

/// Interior text of every complete tuple, in source order
pub fn tuple_strings(source: &str) -> Vec<&str> {
    TupleScanner::new(source).map(|t| t.text).collect()
}
