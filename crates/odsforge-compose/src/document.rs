//! Document assembly

use crate::shape;
use crate::span::resolve_spans;
use crate::tab::normalize_tab;
use odsforge_core::{DefaultBindings, Document, Error, Result};
use serde_json::{Map, Value};

/// Assemble a raw description into a normalized [`Document`]
///
/// The top level is a sequence of tabs, or a map with at least a `body` key
/// plus optional `styles` and `defaults`. User styles are registered into
/// the document's registry copy before any tab is normalized, so tabs may
/// reference them; spans are resolved per tab as soon as its rows exist.
pub fn assemble_document(raw: &Value) -> Result<Document> {
    let (body, annotations) = match raw {
        Value::Array(_) => (raw, None),
        Value::Object(map) => (
            map.get("body").ok_or_else(|| {
                Error::shape("top-level map has no 'body' key".to_string())
            })?,
            Some(map),
        ),
        other => {
            return Err(Error::shape(format!(
                "a document must be a sequence of tabs or a map with a 'body' key, got {}",
                shape::kind_of(other)
            )))
        }
    };
    let Value::Array(raw_tabs) = body else {
        return Err(Error::shape(format!(
            "'body' must be a sequence of tabs, got {}",
            shape::kind_of(body)
        )));
    };

    let mut document = Document::new();
    if let Some(map) = annotations {
        register_user_styles(&mut document, map)?;
        apply_defaults(&mut document.defaults, map)?;
    }

    for (position, raw_tab) in raw_tabs.iter().enumerate() {
        let mut tab = normalize_tab(raw_tab, position)?;
        resolve_spans(&mut tab)?;
        document.tabs.push(tab);
    }
    Ok(document)
}

fn register_user_styles(document: &mut Document, map: &Map<String, Value>) -> Result<()> {
    let entries = match map.get("styles") {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(Error::shape(format!(
                "'styles' must be a sequence of definitions, got {}",
                shape::kind_of(other)
            )))
        }
    };
    for item in entries {
        let Value::Object(entry) = item else {
            return Err(Error::shape(format!(
                "style definition must be a map, got {}",
                shape::kind_of(item)
            )));
        };
        let definition = entry
            .get("definition")
            .ok_or_else(|| Error::missing("style", "definition"))?;
        let Value::String(xml) = definition else {
            return Err(Error::shape(format!(
                "style 'definition' must be an XML string, got {}",
                shape::kind_of(definition)
            )));
        };
        let name = shape::opt_string(entry, "name", "style")?;
        let registered = document.registry.register_xml(name.as_deref(), xml)?;
        document.user_styles.push(registered);
    }
    Ok(())
}

fn apply_defaults(defaults: &mut DefaultBindings, map: &Map<String, Value>) -> Result<()> {
    let entries = match map.get("defaults") {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Object(entries)) => entries,
        Some(other) => {
            return Err(Error::shape(format!(
                "'defaults' must be a map of bindings, got {}",
                shape::kind_of(other)
            )))
        }
    };
    for (key, value) in entries {
        let Value::String(name) = value else {
            return Err(Error::shape(format!(
                "default binding '{}' must be a style name, got {}",
                key,
                shape::kind_of(value)
            )));
        };
        defaults.set(key, name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use odsforge_core::{CellValue, StyleFamily};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_bare_nested_lists() {
        let document =
            assemble_document(&json!([[["a", "b", "c"], [10, 20, 30]], [["x"]]])).unwrap();
        assert_eq!(document.tabs.len(), 2);
        assert_eq!(document.tabs[0].name, "Tab 1");
        assert_eq!(document.tabs[1].name, "Tab 2");
        assert_eq!(document.tabs[0].rows.len(), 2);
        assert_eq!(
            document.tabs[0].rows[1].cells[2].value,
            CellValue::Integer(30)
        );
        assert!(document.user_styles.is_empty());
    }

    #[test]
    fn test_map_form_with_styles_and_defaults() {
        let document = assemble_document(&json!({
            "body": [[["a"]]],
            "styles": [
                {
                    "name": "team_header",
                    "definition": "<style:style style:family=\"table-cell\"><style:text-properties fo:font-weight=\"bold\"/></style:style>",
                },
                {
                    "definition": "<style:style style:name=\"self_named\" style:family=\"table-row\"/>",
                },
            ],
            "defaults": {"style_table_cell": "team_header", "unknown_kind": "bold"},
        }))
        .unwrap();
        assert_eq!(
            document.user_styles,
            vec!["team_header".to_string(), "self_named".to_string()]
        );
        assert_eq!(
            document.registry.get("team_header").unwrap().family,
            StyleFamily::TableCell
        );
        assert_eq!(
            document.registry.get("self_named").unwrap().family,
            StyleFamily::TableRow
        );
        assert_eq!(document.defaults.cell, "team_header");
    }

    #[test]
    fn test_top_level_shape_errors() {
        for bad in [json!("text"), json!(42), json!({"no_body": []})] {
            let result = assemble_document(&bad);
            assert!(
                matches!(result, Err(Error::InvalidDocumentShape(_))),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_style_definition_mandatory() {
        let result = assemble_document(&json!({
            "body": [],
            "styles": [{"name": "incomplete"}],
        }));
        assert!(matches!(
            result,
            Err(Error::MissingField {
                context: "style",
                field: "definition"
            })
        ));
    }

    #[test]
    fn test_first_error_aborts_assembly() {
        // The second tab is malformed; nothing of the document survives
        let result = assemble_document(&json!([[["ok"]], "not a tab"]));
        assert!(matches!(result, Err(Error::InvalidDocumentShape(_))));
    }

    #[test]
    fn test_tabs_may_reference_user_styles() {
        let document = assemble_document(&json!({
            "body": [{"style": "team_header", "table": [["a"]]}],
            "styles": [{
                "name": "team_header",
                "definition": "<style:style style:family=\"table-cell\"/>",
            }],
        }))
        .unwrap();
        assert_eq!(document.tabs[0].styles, vec!["team_header".to_string()]);
        assert!(document.registry.contains("team_header"));
    }
}
