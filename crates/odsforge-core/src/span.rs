//! Pending merge directives

use std::fmt;

/// A merge directive collected during normalization, resolved against the
/// tab's actual grid once all rows are known
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanRequest {
    /// Spreadsheet-style area, e.g. "A1:B3"
    Symbolic(String),
    /// Zero-based (col_start, row_start, col_end, row_end)
    Numeric(u32, u32, u32, u32),
}

impl fmt::Display for SpanRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanRequest::Symbolic(area) => write!(f, "{}", area),
            SpanRequest::Numeric(c0, r0, c1, r1) => {
                write!(f, "[{}, {}, {}, {}]", c0, r0, c1, r1)
            }
        }
    }
}
