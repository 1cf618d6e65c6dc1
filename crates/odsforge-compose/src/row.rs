//! Row normalization

use crate::cell::normalize_cell;
use crate::shape;
use odsforge_core::{Error, Result, Row};
use serde_json::Value;

/// Normalize a raw row: a sequence of cells, or a map with at least a `row` key
pub fn normalize_row(raw: &Value) -> Result<Row> {
    match raw {
        Value::Array(items) => Ok(Row::from_cells(normalize_cells(items)?)),
        Value::Object(map) => {
            let cells = map
                .get("row")
                .ok_or_else(|| Error::missing("row", "row"))?;
            let Value::Array(items) = cells else {
                return Err(Error::shape(format!(
                    "row 'row' must be a sequence of cells, got {}",
                    shape::kind_of(cells)
                )));
            };
            let mut row = Row::from_cells(normalize_cells(items)?);
            row.styles = shape::style_list(map, "row")?;
            Ok(row)
        }
        other => Err(Error::shape(format!(
            "a row must be a sequence of cells or an annotated map, got {}",
            shape::kind_of(other)
        ))),
    }
}

fn normalize_cells(items: &[Value]) -> Result<Vec<odsforge_core::Cell>> {
    items.iter().map(normalize_cell).collect()
}
