//! Tab normalization

use crate::row::normalize_row;
use crate::shape;
use odsforge_core::{Error, Result, Row, SpanRequest, Tab};
use serde_json::{Map, Value};

/// Normalize a raw tab: a sequence of rows, or a map with at least a `table`
/// key. `position` is the tab's 0-based index among its siblings, used for
/// the default "Tab N" name.
pub fn normalize_tab(raw: &Value, position: usize) -> Result<Tab> {
    let (rows_value, annotations) = match raw {
        Value::Array(_) => (raw, None),
        Value::Object(map) => (
            map.get("table")
                .ok_or_else(|| Error::missing("tab", "table"))?,
            Some(map),
        ),
        other => {
            return Err(Error::shape(format!(
                "a tab must be a sequence of rows or an annotated map, got {}",
                shape::kind_of(other)
            )))
        }
    };
    let Value::Array(raw_rows) = rows_value else {
        return Err(Error::shape(format!(
            "tab 'table' must be a sequence of rows, got {}",
            shape::kind_of(rows_value)
        )));
    };

    let name = match annotations
        .map(|map| shape::opt_string(map, "name", "tab"))
        .transpose()?
        .flatten()
    {
        Some(name) if !name.is_empty() => name,
        _ => Tab::default_name(position),
    };

    let mut tab = Tab::new(name);
    tab.rows = raw_rows
        .iter()
        .map(normalize_row)
        .collect::<Result<Vec<Row>>>()?;

    if let Some(map) = annotations {
        tab.styles = shape::style_list(map, "tab")?;
        tab.column_widths = column_widths(map, &tab)?;
        tab.spans = span_requests(map)?;
    }
    let cell_spans = collect_cell_spans(&tab);
    tab.spans.extend(cell_spans);
    Ok(tab)
}

fn column_widths(map: &Map<String, Value>, tab: &Tab) -> Result<Vec<Option<String>>> {
    let widths = match map.get("width") {
        None | Some(Value::Null) => Vec::new(),
        // A single length applies to every column of the widest row
        Some(Value::String(width)) => {
            if width.is_empty() {
                Vec::new()
            } else {
                vec![Some(width.clone()); tab.column_count()]
            }
        }
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => Ok(None),
                Value::String(width) if width.is_empty() => Ok(None),
                Value::String(width) => Ok(Some(width.clone())),
                other => Err(Error::shape(format!(
                    "column width must be an ODF length string, got {}",
                    shape::kind_of(other)
                ))),
            })
            .collect::<Result<Vec<_>>>()?,
        Some(other) => {
            return Err(Error::shape(format!(
                "tab 'width' must be a length or a sequence of lengths, got {}",
                shape::kind_of(other)
            )))
        }
    };
    if widths.len() > tab.column_count() {
        log::warn!(
            "tab '{}': width list covers {} columns but the widest row has {} cells",
            tab.name,
            widths.len(),
            tab.column_count()
        );
    }
    Ok(widths)
}

fn span_requests(map: &Map<String, Value>) -> Result<Vec<SpanRequest>> {
    match map.get("span") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(area)) => Ok(vec![SpanRequest::Symbolic(area.clone())]),
        Some(Value::Array(items)) => {
            // A bare 4-coordinate area is accepted alongside a list of areas
            if items.len() == 4 && items.iter().all(Value::is_number) {
                return Ok(vec![numeric_area(items)?]);
            }
            items.iter().map(parse_area).collect()
        }
        Some(other) => Err(Error::InvalidSpan(format!(
            "tab 'span' must be an area or a list of areas, got {}",
            shape::kind_of(other)
        ))),
    }
}

fn parse_area(value: &Value) -> Result<SpanRequest> {
    match value {
        Value::String(area) => Ok(SpanRequest::Symbolic(area.clone())),
        Value::Array(items) => numeric_area(items),
        other => Err(Error::InvalidSpan(format!(
            "span area must be a range string or 4 coordinates, got {}",
            shape::kind_of(other)
        ))),
    }
}

fn numeric_area(items: &[Value]) -> Result<SpanRequest> {
    if items.len() != 4 {
        return Err(Error::InvalidSpan(format!(
            "numeric span area must have 4 coordinates, got {}",
            items.len()
        )));
    }
    let mut coords = [0u32; 4];
    for (slot, item) in coords.iter_mut().zip(items) {
        *slot = match item.as_i64() {
            Some(v) if v >= 0 && v <= i64::from(u32::MAX) => v as u32,
            _ => {
                return Err(Error::InvalidSpan(format!(
                    "span coordinate must be a non-negative integer, got {}",
                    item
                )))
            }
        };
    }
    Ok(SpanRequest::Numeric(
        coords[0], coords[1], coords[2], coords[3],
    ))
}

/// Merge directives declared on cells, anchored at each cell's grid position
fn collect_cell_spans(tab: &Tab) -> Vec<SpanRequest> {
    let mut requests = Vec::new();
    for (y, row) in tab.rows.iter().enumerate() {
        for (x, cell) in row.cells.iter().enumerate() {
            if cell.is_spanned() {
                let (x, y) = (x as u32, y as u32);
                requests.push(SpanRequest::Numeric(
                    x,
                    y,
                    x + cell.colspan - 1,
                    y + cell.rowspan - 1,
                ));
            }
        }
    }
    requests
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_bare_tab_gets_default_name() {
        let tab = normalize_tab(&json!([["a", "b"], [1, 2]]), 0).unwrap();
        assert_eq!(tab.name, "Tab 1");
        assert_eq!(tab.row_count(), 2);
        assert!(tab.styles.is_empty());
        assert!(tab.spans.is_empty());

        let tab = normalize_tab(&json!([]), 4).unwrap();
        assert_eq!(tab.name, "Tab 5");
    }

    #[test]
    fn test_empty_name_falls_back() {
        let tab = normalize_tab(&json!({"name": "", "table": []}), 1).unwrap();
        assert_eq!(tab.name, "Tab 2");
    }

    #[test]
    fn test_annotated_tab() {
        let tab = normalize_tab(
            &json!({
                "name": "first tab",
                "style": "cell_decimal2",
                "width": ["2.5cm", null, "1cm"],
                "table": [["a", "b", "c"]],
            }),
            0,
        )
        .unwrap();
        assert_eq!(tab.name, "first tab");
        assert_eq!(tab.styles, vec!["cell_decimal2".to_string()]);
        assert_eq!(
            tab.column_widths,
            vec![Some("2.5cm".to_string()), None, Some("1cm".to_string())]
        );
    }

    #[test]
    fn test_uniform_width_expands_to_all_columns() {
        let tab = normalize_tab(
            &json!({"width": "1cm", "table": [["a"], ["b", "c"]]}),
            0,
        )
        .unwrap();
        assert_eq!(
            tab.column_widths,
            vec![Some("1cm".to_string()), Some("1cm".to_string())]
        );
    }

    #[test]
    fn test_table_key_mandatory_in_map_form() {
        let result = normalize_tab(&json!({"name": "x"}), 0);
        assert!(matches!(
            result,
            Err(Error::MissingField {
                context: "tab",
                field: "table"
            })
        ));
    }

    #[test]
    fn test_tab_level_spans() {
        let tab = normalize_tab(
            &json!({"table": [["a", "b"], ["c", "d"]], "span": "A1:B2"}),
            0,
        )
        .unwrap();
        assert_eq!(tab.spans, vec![SpanRequest::Symbolic("A1:B2".into())]);

        let tab = normalize_tab(
            &json!({"table": [["a", "b"], ["c", "d"]], "span": [[0, 0, 1, 1], "A1:A2"]}),
            0,
        )
        .unwrap();
        assert_eq!(
            tab.spans,
            vec![
                SpanRequest::Numeric(0, 0, 1, 1),
                SpanRequest::Symbolic("A1:A2".into()),
            ]
        );

        // A bare quadruple is one area, not four
        let tab = normalize_tab(
            &json!({"table": [["a", "b"], ["c", "d"]], "span": [0, 0, 1, 1]}),
            0,
        )
        .unwrap();
        assert_eq!(tab.spans, vec![SpanRequest::Numeric(0, 0, 1, 1)]);
    }

    #[test]
    fn test_cell_spans_collected_after_tab_spans() {
        let tab = normalize_tab(
            &json!({
                "table": [
                    [{"value": "wide", "colspanned": 2}, "x", "y"],
                    ["a", "b", {"value": "tall", "rowspanned": 2}],
                    ["c", "d", "e"],
                ],
                "span": "A2:B2",
            }),
            0,
        )
        .unwrap();
        assert_eq!(
            tab.spans,
            vec![
                SpanRequest::Symbolic("A2:B2".into()),
                SpanRequest::Numeric(0, 0, 1, 0),
                SpanRequest::Numeric(2, 1, 2, 2),
            ]
        );
    }

    #[test]
    fn test_malformed_span_area() {
        let result = normalize_tab(&json!({"table": [], "span": [true]}), 0);
        assert!(matches!(result, Err(Error::InvalidSpan(_))));

        let result = normalize_tab(&json!({"table": [], "span": [[0, 0, 1]]}), 0);
        assert!(matches!(result, Err(Error::InvalidSpan(_))));

        let result = normalize_tab(&json!({"table": [], "span": [[0, 0, 1, -1]]}), 0);
        assert!(matches!(result, Err(Error::InvalidSpan(_))));
    }
}
