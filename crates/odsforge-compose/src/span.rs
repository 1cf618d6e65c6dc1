//! Span resolution
//!
//! Runs once per tab, after every row is normalized, because symbolic areas
//! can only be validated against the full grid. Overlapping spans are kept
//! as-is and applied in order; the writer treats later spans as widening
//! earlier ones.

use odsforge_core::{CellRange, Error, Result, SpanRequest, Tab};

/// Resolve a tab's collected span requests into concrete merge areas
///
/// Each request is checked against the tab's dimensions (row count, maximum
/// cell count across rows); any area reaching outside the grid fails with
/// [`Error::SpanOutOfBounds`].
pub fn resolve_spans(tab: &mut Tab) -> Result<()> {
    let rows = tab.row_count();
    let cols = tab.column_count();

    let mut merges = Vec::with_capacity(tab.spans.len());
    for request in &tab.spans {
        let range = match request {
            SpanRequest::Symbolic(area) => CellRange::parse(area)?,
            SpanRequest::Numeric(c0, r0, c1, r1) => CellRange::from_indices(*r0, *c0, *r1, *c1),
        };
        if range.end.row as usize >= rows || range.end.col as usize >= cols {
            return Err(Error::SpanOutOfBounds {
                span: range.to_a1_string(),
                tab: tab.name.clone(),
                rows,
                cols,
            });
        }
        merges.push(range);
    }
    tab.merges = merges;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::normalize_tab;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn tab_with_spans(span: serde_json::Value) -> Tab {
        normalize_tab(
            &json!({
                "table": [["a", "b", "c"], [1, 2, 3], [4, 5, 6]],
                "span": span,
            }),
            0,
        )
        .unwrap()
    }

    #[test]
    fn test_symbolic_span_resolution() {
        let mut tab = tab_with_spans(json!("A1:B3"));
        resolve_spans(&mut tab).unwrap();
        assert_eq!(tab.merges, vec![CellRange::from_indices(0, 0, 2, 1)]);
    }

    #[test]
    fn test_numeric_span_used_as_is() {
        let mut tab = tab_with_spans(json!([[1, 0, 2, 1]]));
        resolve_spans(&mut tab).unwrap();
        // (col_start, row_start, col_end, row_end) -> rows 0..=1, cols 1..=2
        assert_eq!(tab.merges, vec![CellRange::from_indices(0, 1, 1, 2)]);
    }

    #[test]
    fn test_span_past_row_count_fails() {
        let mut tab = tab_with_spans(json!("A1:A4"));
        let result = resolve_spans(&mut tab);
        assert!(matches!(result, Err(Error::SpanOutOfBounds { rows: 3, .. })));
    }

    #[test]
    fn test_span_past_column_count_fails() {
        let mut tab = tab_with_spans(json!("A1:D1"));
        let result = resolve_spans(&mut tab);
        assert!(matches!(result, Err(Error::SpanOutOfBounds { cols: 3, .. })));
    }

    #[test]
    fn test_cell_span_reaching_outside_grid_fails() {
        let mut tab = normalize_tab(
            &json!([[{"value": "wide", "colspanned": 3}, "b"]]),
            0,
        )
        .unwrap();
        let result = resolve_spans(&mut tab);
        assert!(matches!(result, Err(Error::SpanOutOfBounds { .. })));
    }

    #[test]
    fn test_overlapping_spans_kept_in_order() {
        let mut tab = tab_with_spans(json!(["A1:B2", "B2:C3"]));
        resolve_spans(&mut tab).unwrap();
        assert_eq!(
            tab.merges,
            vec![
                CellRange::from_indices(0, 0, 1, 1),
                CellRange::from_indices(1, 1, 2, 2),
            ]
        );
    }

    #[test]
    fn test_malformed_symbolic_area() {
        let mut tab = tab_with_spans(json!("not-an-area"));
        assert!(matches!(resolve_spans(&mut tab), Err(Error::InvalidSpan(_))));
    }
}
