//! Used-style collection for content.xml
//!
//! The writer only emits styles the document actually uses. Styles are
//! inserted in first-use order; inserting a style pulls in the styles its
//! fragment references (data styles, parent styles) right behind it.
//! References to names the registry does not know (such as the format's
//! own "Default" parent style) are skipped.

use crate::error::OdsResult;
use crate::xml;
use ahash::{AHashMap, AHashSet};
use odsforge_core::{resolve, Document, StyleRegistry};

/// Automatic styles used by a document, plus the per-tab resolved style
/// names the writer attaches to rows, cells, and columns
#[derive(Debug)]
pub struct OdsStyleTable {
    /// Name-rewritten style fragments in insertion order
    entries: Vec<String>,
    inserted: AHashSet<String>,
    /// Column width -> generated table-column style name
    column_styles: AHashMap<String, String>,
    resolved: Vec<ResolvedTab>,
}

/// Style names resolved for one tab
#[derive(Debug, Default)]
pub struct ResolvedTab {
    /// Effective row style per row
    pub row_styles: Vec<Option<String>>,
    /// Effective cell style per row, per cell
    pub cell_styles: Vec<Vec<Option<String>>>,
    /// Generated width style per column
    pub column_styles: Vec<Option<String>>,
}

impl OdsStyleTable {
    /// Resolve every style the document uses and collect the fragments to
    /// emit, in deterministic order
    pub fn build(document: &Document) -> OdsResult<Self> {
        resolve::validate_defaults(&document.registry, &document.defaults)?;

        let mut table = Self {
            entries: Vec::new(),
            inserted: AHashSet::new(),
            column_styles: AHashMap::new(),
            resolved: Vec::with_capacity(document.tabs.len()),
        };

        // Document-supplied styles are always emitted, used or not
        for name in &document.user_styles {
            table.insert(&document.registry, name)?;
        }

        for tab in &document.tabs {
            let mut resolved = ResolvedTab::default();

            for row in &tab.rows {
                let row_style = resolve::effective_row_style(
                    &document.registry,
                    &document.defaults,
                    tab,
                    row,
                )?;
                if let Some(definition) = row_style {
                    table.insert(&document.registry, &definition.name)?;
                }
                resolved
                    .row_styles
                    .push(row_style.map(|definition| definition.name.clone()));

                let mut cell_names = Vec::with_capacity(row.cells.len());
                for cell in &row.cells {
                    let cell_style = resolve::effective_cell_style(
                        &document.registry,
                        &document.defaults,
                        tab,
                        row,
                        cell,
                    )?;
                    if let Some(definition) = cell_style {
                        table.insert(&document.registry, &definition.name)?;
                    }
                    cell_names.push(cell_style.map(|definition| definition.name.clone()));
                }
                resolved.cell_styles.push(cell_names);
            }

            resolved.column_styles = tab
                .column_widths
                .iter()
                .map(|width| width.as_ref().map(|w| table.column_style(w)))
                .collect();

            table.resolved.push(resolved);
        }
        Ok(table)
    }

    /// The automatic-style fragments to emit, in order
    pub fn automatic_styles(&self) -> &[String] {
        &self.entries
    }

    /// Resolved style names for the tab at `index`
    pub fn resolved_tab(&self, index: usize) -> &ResolvedTab {
        &self.resolved[index]
    }

    fn insert(&mut self, registry: &StyleRegistry, name: &str) -> OdsResult<()> {
        if name.is_empty() || self.inserted.contains(name) {
            return Ok(());
        }
        // Unregistered names only reach here through fragment references;
        // they belong to the consuming application (e.g. "Default")
        let Some(definition) = registry.get(name) else {
            return Ok(());
        };
        self.inserted.insert(name.to_string());

        let fragment = xml::set_fragment_name(&definition.xml, name)?;
        let references = xml::referenced_style_names(&fragment)?;
        self.entries.push(fragment);
        for referenced in references {
            self.insert(registry, &referenced)?;
        }
        Ok(())
    }

    fn column_style(&mut self, width: &str) -> String {
        if let Some(name) = self.column_styles.get(width) {
            return name.clone();
        }
        let name = format!("co{}", self.column_styles.len() + 1);
        self.entries.push(format!(
            r#"<style:style style:name="{}" style:family="table-column"><style:table-column-properties fo:break-before="auto" style:column-width="{}"/></style:style>"#,
            name,
            xml::escape_xml(width)
        ));
        self.column_styles.insert(width.to_string(), name.clone());
        name
    }
}
