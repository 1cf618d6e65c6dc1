//! Effective style resolution
//!
//! Normalization records style names without consulting the registry, so a
//! document can reference styles registered later in the same assembly pass.
//! This module computes the styles that actually apply, walking the levels
//! bottom-up (cell → row → tab → document defaults). A level contributes
//! only a style of the wanted family; a list that names styles of other
//! families defers to the levels above, which is how a tab-level cell style
//! reaches the cells of every row beneath it.

use crate::cell::Cell;
use crate::document::DefaultBindings;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::style::{StyleDefinition, StyleFamily, StyleRegistry};
use crate::tab::Tab;

/// The effective row style for a row within a tab
///
/// Falls back from the row's own styles to the tab's, then to the `row`
/// default binding. Unknown names fail with [`Error::UnknownStyle`]; a
/// default binding of the wrong family fails with [`Error::StyleConflict`].
pub fn effective_row_style<'a>(
    registry: &'a StyleRegistry,
    defaults: &DefaultBindings,
    tab: &Tab,
    row: &Row,
) -> Result<Option<&'a StyleDefinition>> {
    for names in [&row.styles, &tab.styles] {
        if let Some(definition) = registry.first_of_family(names, StyleFamily::TableRow)? {
            return Ok(Some(definition));
        }
    }
    default_of_family(registry, &defaults.row, StyleFamily::TableRow, "row")
}

/// The effective cell style for a cell within a row and tab
///
/// Falls back from the cell's own styles to the row's, then the tab's, then
/// the `cell` default binding, then the per-scalar-kind binding.
pub fn effective_cell_style<'a>(
    registry: &'a StyleRegistry,
    defaults: &DefaultBindings,
    tab: &Tab,
    row: &Row,
    cell: &Cell,
) -> Result<Option<&'a StyleDefinition>> {
    for names in [&cell.styles, &row.styles, &tab.styles] {
        if let Some(definition) = registry.first_of_family(names, StyleFamily::TableCell)? {
            return Ok(Some(definition));
        }
    }
    let name = if defaults.cell.is_empty() {
        defaults.for_value(&cell.value)
    } else {
        defaults.cell.as_str()
    };
    default_of_family(registry, name, StyleFamily::TableCell, "cell")
}

/// Check every non-empty default binding against the registry
///
/// Callers run this once per document before serialization so that a bad
/// binding surfaces even when no cell happens to consult it.
pub fn validate_defaults(registry: &StyleRegistry, defaults: &DefaultBindings) -> Result<()> {
    let bindings = [
        (&defaults.row, StyleFamily::TableRow, "row"),
        (&defaults.cell, StyleFamily::TableCell, "cell"),
        (&defaults.string, StyleFamily::TableCell, "str"),
        (&defaults.integer, StyleFamily::TableCell, "int"),
        (&defaults.float, StyleFamily::TableCell, "float"),
        (&defaults.other, StyleFamily::TableCell, "other"),
    ];
    for (name, family, kind) in bindings {
        if !name.is_empty() {
            default_of_family(registry, name, family, kind)?;
        }
    }
    Ok(())
}

fn default_of_family<'a>(
    registry: &'a StyleRegistry,
    name: &str,
    family: StyleFamily,
    kind: &str,
) -> Result<Option<&'a StyleDefinition>> {
    if name.is_empty() {
        return Ok(None);
    }
    match registry.resolve_family(std::slice::from_ref(&name))? {
        Some(found) if found == family => Ok(registry.get(name)),
        Some(found) => Err(Error::StyleConflict(format!(
            "default binding for '{}' names '{}' of family {:?}, expected {:?}",
            kind, name, found, family
        ))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;

    fn fixture(
        tab_styles: &[&str],
        row_styles: &[&str],
        cell_styles: &[&str],
    ) -> (Tab, Row, Cell) {
        let mut tab = Tab::new("t");
        tab.styles = tab_styles.iter().map(|s| s.to_string()).collect();
        let mut row = Row::new();
        row.styles = row_styles.iter().map(|s| s.to_string()).collect();
        let mut cell = Cell::new("x");
        cell.styles = cell_styles.iter().map(|s| s.to_string()).collect();
        (tab, row, cell)
    }

    #[test]
    fn test_cell_style_priority_cell_wins() {
        let registry = StyleRegistry::with_builtins();
        let defaults = DefaultBindings::default();
        let (tab, row, cell) = fixture(&["center"], &["bold"], &["right"]);
        let definition = effective_cell_style(&registry, &defaults, &tab, &row, &cell)
            .unwrap()
            .unwrap();
        assert_eq!(definition.name, "right");
    }

    #[test]
    fn test_cell_style_falls_back_to_row_then_tab() {
        let registry = StyleRegistry::with_builtins();
        let defaults = DefaultBindings::default();

        let (tab, row, cell) = fixture(&["center"], &["bold"], &[]);
        let definition = effective_cell_style(&registry, &defaults, &tab, &row, &cell)
            .unwrap()
            .unwrap();
        assert_eq!(definition.name, "bold");

        let (tab, row, cell) = fixture(&["center"], &[], &[]);
        let definition = effective_cell_style(&registry, &defaults, &tab, &row, &cell)
            .unwrap()
            .unwrap();
        assert_eq!(definition.name, "center");
    }

    #[test]
    fn test_cell_style_skips_row_family_entries() {
        // A row-family name at tab level styles the rows, not the cells
        let registry = StyleRegistry::with_builtins();
        let defaults = DefaultBindings::default();
        let (tab, row, cell) = fixture(&["table_row_1cm"], &[], &[]);
        let definition = effective_cell_style(&registry, &defaults, &tab, &row, &cell)
            .unwrap()
            .unwrap();
        assert_eq!(definition.name, "left"); // str default
    }

    #[test]
    fn test_cell_default_by_scalar_kind() {
        let registry = StyleRegistry::with_builtins();
        let defaults = DefaultBindings::default();
        let tab = Tab::new("t");
        let row = Row::new();

        let definition =
            effective_cell_style(&registry, &defaults, &tab, &row, &Cell::new(10i64))
                .unwrap()
                .unwrap();
        assert_eq!(definition.name, "right");

        let definition =
            effective_cell_style(&registry, &defaults, &tab, &row, &Cell::new("a"))
                .unwrap()
                .unwrap();
        assert_eq!(definition.name, "left");
    }

    #[test]
    fn test_cell_binding_overrides_scalar_kind() {
        let registry = StyleRegistry::with_builtins();
        let mut defaults = DefaultBindings::default();
        defaults.cell = "grid_06pt".into();
        let tab = Tab::new("t");
        let row = Row::new();
        let definition =
            effective_cell_style(&registry, &defaults, &tab, &row, &Cell::new(10i64))
                .unwrap()
                .unwrap();
        assert_eq!(definition.name, "grid_06pt");
    }

    #[test]
    fn test_row_style_default() {
        let registry = StyleRegistry::with_builtins();
        let defaults = DefaultBindings::default();
        let (tab, row, _) = fixture(&[], &["bold_center_bg_gray_grid_06pt"], &[]);
        // The row lists only a cell-family style; the row element itself
        // falls back to the default row binding.
        let definition = effective_row_style(&registry, &defaults, &tab, &row)
            .unwrap()
            .unwrap();
        assert_eq!(definition.name, "default_table_row");
    }

    #[test]
    fn test_row_style_own_family_wins() {
        let registry = StyleRegistry::with_builtins();
        let defaults = DefaultBindings::default();
        let (tab, row, _) = fixture(&[], &["bold", "table_row_1cm"], &[]);
        let definition = effective_row_style(&registry, &defaults, &tab, &row)
            .unwrap()
            .unwrap();
        assert_eq!(definition.name, "table_row_1cm");
    }

    #[test]
    fn test_unknown_style_is_an_error() {
        let registry = StyleRegistry::with_builtins();
        let defaults = DefaultBindings::default();
        let (tab, row, cell) = fixture(&[], &[], &["no_such_style"]);
        let result = effective_cell_style(&registry, &defaults, &tab, &row, &cell);
        assert!(matches!(result, Err(Error::UnknownStyle(_))));
    }

    #[test]
    fn test_validate_defaults_wrong_family() {
        let registry = StyleRegistry::with_builtins();
        let mut defaults = DefaultBindings::default();
        defaults.row = "bold".into(); // cell style bound as row default
        let result = validate_defaults(&registry, &defaults);
        assert!(matches!(result, Err(Error::StyleConflict(_))));
    }

    #[test]
    fn test_validate_defaults_unknown_name() {
        let registry = StyleRegistry::with_builtins();
        let mut defaults = DefaultBindings::default();
        defaults.string = "missing".into();
        let result = validate_defaults(&registry, &defaults);
        assert!(matches!(result, Err(Error::UnknownStyle(_))));
    }

    #[test]
    fn test_empty_everything_yields_no_style() {
        let registry = StyleRegistry::with_builtins();
        let mut defaults = DefaultBindings::default();
        defaults.string = String::new();
        let tab = Tab::new("t");
        let row = Row::new();
        let mut cell = Cell::new("x");
        cell.value = CellValue::String("x".into());
        let definition = effective_cell_style(&registry, &defaults, &tab, &row, &cell).unwrap();
        assert!(definition.is_none());
    }
}
