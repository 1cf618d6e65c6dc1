//! Cell normalization

use crate::shape;
use odsforge_core::{Cell, CellValue, Error, Result};
use serde_json::{Map, Number, Value};

/// Normalize a raw cell: a bare scalar, or a map with at least a `value` key
pub fn normalize_cell(raw: &Value) -> Result<Cell> {
    match raw {
        Value::Object(map) => annotated_cell(map),
        Value::Array(_) => Err(Error::shape(
            "a cell must be a scalar or an annotated map, got a sequence",
        )),
        scalar => Ok(Cell::new(scalar_value(scalar)?)),
    }
}

fn annotated_cell(map: &Map<String, Value>) -> Result<Cell> {
    let value = map
        .get("value")
        .ok_or_else(|| Error::missing("cell", "value"))?;
    let mut cell = Cell::new(scalar_value(value)?);
    cell.styles = shape::style_list(map, "cell")?;
    cell.text = shape::opt_string(map, "text", "cell")?;
    cell.formula = shape::opt_string(map, "formula", "cell")?;
    cell.colspan = span_extent(map, "colspanned")?;
    cell.rowspan = span_extent(map, "rowspanned")?;
    Ok(cell)
}

fn scalar_value(raw: &Value) -> Result<CellValue> {
    match raw {
        Value::Null => Ok(CellValue::Empty),
        Value::Bool(b) => Ok(CellValue::Boolean(*b)),
        Value::Number(n) => Ok(number_value(n)),
        Value::String(s) => Ok(CellValue::String(s.clone())),
        other => Err(Error::shape(format!(
            "cell value must be a scalar, got {}",
            shape::kind_of(other)
        ))),
    }
}

fn number_value(n: &Number) -> CellValue {
    match n.as_i64() {
        Some(i) => CellValue::Integer(i),
        None => CellValue::Float(n.as_f64().unwrap_or(0.0)),
    }
}

fn span_extent(map: &Map<String, Value>, key: &str) -> Result<u32> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(1),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(v) if v >= 1 && v <= i64::from(u32::MAX) => Ok(v as u32),
            _ => Err(Error::InvalidSpan(format!(
                "'{}' must be a positive integer, got {}",
                key, n
            ))),
        },
        Some(other) => Err(Error::InvalidSpan(format!(
            "'{}' must be a positive integer, got {}",
            key, other
        ))),
    }
}
