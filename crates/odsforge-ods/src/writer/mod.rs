//! ODS writer

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use ahash::AHashMap;
use zip::write::SimpleFileOptions;

use crate::error::OdsResult;
use crate::styles::{OdsStyleTable, ResolvedTab};
use crate::xml::escape_xml;
use odsforge_core::{Cell, CellAddress, CellValue, Document, Tab};

/// Media type stored as the container's first entry
const MIMETYPE: &str = "application/vnd.oasis.opendocument.spreadsheet";

/// Merge standing of a grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GridSlot {
    /// Top-left corner of a merge area
    Start { cols: u32, rows: u32 },
    /// Hidden beneath a merge area
    Covered,
}

/// ODS file writer
///
/// Emits a canonical document as an OpenDocument spreadsheet container:
/// `mimetype`, `META-INF/manifest.xml`, `meta.xml`, `styles.xml`, and
/// `content.xml` holding the used automatic styles and one `table:table`
/// per tab, in order.
pub struct OdsWriter;

impl OdsWriter {
    /// Write a document to a file path
    pub fn write_file<P: AsRef<Path>>(document: &Document, path: P) -> OdsResult<()> {
        let file = File::create(path)?;
        Self::write(document, file)
    }

    /// Write a document to a writer
    pub fn write<W: Write + Seek>(document: &Document, writer: W) -> OdsResult<()> {
        let style_table = OdsStyleTable::build(document)?;
        let mut zip = zip::ZipWriter::new(writer);

        // The mimetype entry comes first and stays uncompressed so ODF
        // consumers can sniff it at a fixed offset
        let stored =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        zip.start_file("mimetype", stored)?;
        zip.write_all(MIMETYPE.as_bytes())?;

        Self::write_manifest(&mut zip)?;
        Self::write_meta(&mut zip)?;
        Self::write_styles(&mut zip)?;
        Self::write_content(&mut zip, document, &style_table)?;

        zip.finish()?;
        Ok(())
    }

    fn write_manifest<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> OdsResult<()> {
        zip.start_file("META-INF/manifest.xml", SimpleFileOptions::default())?;
        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.2">
    <manifest:file-entry manifest:full-path="/" manifest:media-type="{}"/>
    <manifest:file-entry manifest:full-path="content.xml" manifest:media-type="text/xml"/>
    <manifest:file-entry manifest:full-path="styles.xml" manifest:media-type="text/xml"/>
    <manifest:file-entry manifest:full-path="meta.xml" manifest:media-type="text/xml"/>
</manifest:manifest>"#,
            MIMETYPE
        );
        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_meta<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> OdsResult<()> {
        zip.start_file("meta.xml", SimpleFileOptions::default())?;
        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-meta xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:meta="urn:oasis:names:tc:opendocument:xmlns:meta:1.0" office:version="1.2">
    <office:meta>
        <meta:generator>odsforge/{}</meta:generator>
    </office:meta>
</office:document-meta>"#,
            env!("CARGO_PKG_VERSION")
        );
        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_styles<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> OdsResult<()> {
        zip.start_file("styles.xml", SimpleFileOptions::default())?;
        let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-styles xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0" xmlns:fo="urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0" office:version="1.2">
    <office:styles/>
    <office:automatic-styles/>
    <office:master-styles/>
</office:document-styles>"#;
        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_content<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        document: &Document,
        style_table: &OdsStyleTable,
    ) -> OdsResult<()> {
        zip.start_file("content.xml", SimpleFileOptions::default())?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0" xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" xmlns:fo="urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0" xmlns:number="urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0" xmlns:loext="urn:org:documentfoundation:names:experimental:office:xmlns:loext:1.0" xmlns:of="urn:oasis:names:tc:opendocument:xmlns:of:1.2" office:version="1.2">
    <office:automatic-styles>"#,
        );

        for fragment in style_table.automatic_styles() {
            content.push_str("\n        ");
            content.push_str(fragment);
        }

        content.push_str(
            "\n    </office:automatic-styles>\n    <office:body>\n        <office:spreadsheet>",
        );

        for (index, tab) in document.tabs.iter().enumerate() {
            Self::write_table(&mut content, tab, style_table.resolved_tab(index));
        }

        content.push_str(
            "\n        </office:spreadsheet>\n    </office:body>\n</office:document-content>",
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_table(content: &mut String, tab: &Tab, resolved: &ResolvedTab) {
        content.push_str(&format!(
            "\n            <table:table table:name=\"{}\">",
            escape_xml(&tab.name)
        ));

        // A width list may reach past the widest row; those columns exist
        // only to carry their width style
        let column_count = tab.column_count().max(tab.column_widths.len());
        for idx in 0..column_count {
            match resolved.column_styles.get(idx).and_then(|s| s.as_deref()) {
                Some(name) => content.push_str(&format!(
                    "\n                <table:table-column table:style-name=\"{}\"/>",
                    escape_xml(name)
                )),
                None => content.push_str("\n                <table:table-column/>"),
            }
        }

        let slots = merge_slots(tab);
        for (y, row) in tab.rows.iter().enumerate() {
            match resolved.row_styles[y].as_deref() {
                Some(name) => content.push_str(&format!(
                    "\n                <table:table-row table:style-name=\"{}\">",
                    escape_xml(name)
                )),
                None => content.push_str("\n                <table:table-row>"),
            }

            for x in 0..row_extent(row.cells.len(), y as u32, &slots) {
                let slot = slots.get(&(y as u32, x as u32)).copied();
                let cell = row.cells.get(x);
                let style = resolved.cell_styles[y].get(x).and_then(|s| s.as_deref());
                content.push_str("\n                    ");
                content.push_str(&Self::cell_xml(cell, style, slot));
            }

            content.push_str("\n                </table:table-row>");
        }

        content.push_str("\n            </table:table>");
    }

    fn cell_xml(cell: Option<&Cell>, style: Option<&str>, slot: Option<GridSlot>) -> String {
        // Covered cells keep their tag distinct but retain value and style,
        // matching how ODF represents cells hidden beneath a merge
        let tag = match slot {
            Some(GridSlot::Covered) => "table:covered-table-cell",
            _ => "table:table-cell",
        };

        let mut attrs = String::new();
        if let Some(name) = style {
            attrs.push_str(&format!(" table:style-name=\"{}\"", escape_xml(name)));
        }
        if let Some(GridSlot::Start { cols, rows }) = slot {
            attrs.push_str(&format!(
                " table:number-columns-spanned=\"{}\" table:number-rows-spanned=\"{}\"",
                cols, rows
            ));
        }

        // A merge may reach past the end of a short row; those positions
        // have no backing record
        let Some(cell) = cell else {
            return format!("<{}{}/>", tag, attrs);
        };

        if let Some(formula) = &cell.formula {
            attrs.push_str(&format!(" table:formula=\"{}\"", escape_xml(formula)));
        }
        match &cell.value {
            CellValue::Empty => {}
            CellValue::Integer(n) => attrs.push_str(&format!(
                " office:value-type=\"float\" office:value=\"{}\"",
                n
            )),
            CellValue::Float(n) => attrs.push_str(&format!(
                " office:value-type=\"float\" office:value=\"{}\"",
                n
            )),
            CellValue::Boolean(b) => attrs.push_str(&format!(
                " office:value-type=\"boolean\" office:boolean-value=\"{}\"",
                b
            )),
            CellValue::String(_) => attrs.push_str(" office:value-type=\"string\""),
        }

        let text = cell
            .text
            .clone()
            .unwrap_or_else(|| cell.value.display_text());
        if text.is_empty() {
            format!("<{}{}/>", tag, attrs)
        } else {
            format!(
                "<{}{}><text:p>{}</text:p></{}>",
                tag,
                attrs,
                escape_xml(&text),
                tag
            )
        }
    }
}

/// Merge standing per grid position; spans are applied in order and a later
/// span silently widens cells an earlier one already claimed
fn merge_slots(tab: &Tab) -> AHashMap<(u32, u32), GridSlot> {
    let mut slots = AHashMap::new();
    for range in &tab.merges {
        for row in range.start.row..=range.end.row {
            for col in range.start.col..=range.end.col {
                let slot = if (row, col) == (range.start.row, range.start.col) {
                    GridSlot::Start {
                        cols: range.col_count(),
                        rows: range.row_count(),
                    }
                } else {
                    GridSlot::Covered
                };
                if slots.insert((row, col), slot).is_some() {
                    log::debug!(
                        "tab '{}': span {} widens already spanned cell {}",
                        tab.name,
                        range,
                        CellAddress::new(row, col)
                    );
                }
            }
        }
    }
    slots
}

/// Cells to emit for a row: its own cells plus any positions a merge claims
fn row_extent(cells: usize, y: u32, slots: &AHashMap<(u32, u32), GridSlot>) -> usize {
    let merged = slots
        .keys()
        .filter(|(row, _)| *row == y)
        .map(|(_, col)| *col as usize + 1)
        .max()
        .unwrap_or(0);
    cells.max(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use odsforge_core::{CellRange, Row};
    use std::io::{Cursor, Read};

    fn write_to_buffer(document: &Document) -> Vec<u8> {
        let mut buf = Vec::new();
        OdsWriter::write(document, Cursor::new(&mut buf)).unwrap();
        buf
    }

    fn read_part(buf: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(buf)).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    fn sample_document() -> Document {
        let mut document = Document::new();
        let mut tab = Tab::new("Tab 1");
        tab.rows.push(Row::from_cells(vec![
            Cell::new("a"),
            Cell::new("b"),
            Cell::new("c"),
        ]));
        tab.rows.push(Row::from_cells(vec![
            Cell::new(10i64),
            Cell::new(20i64),
            Cell::new(30i64),
        ]));
        document.tabs.push(tab);
        document
    }

    #[test]
    fn test_mimetype_first_and_stored() {
        let buf = write_to_buffer(&sample_document());
        let mut archive = zip::ZipArchive::new(Cursor::new(&buf)).unwrap();
        let first = archive.by_index(0).unwrap();
        assert_eq!(first.name(), "mimetype");
        assert_eq!(first.compression(), zip::CompressionMethod::Stored);
    }

    #[test]
    fn test_container_parts_present() {
        let buf = write_to_buffer(&sample_document());
        for part in [
            "mimetype",
            "META-INF/manifest.xml",
            "meta.xml",
            "styles.xml",
            "content.xml",
        ] {
            read_part(&buf, part);
        }
        assert!(read_part(&buf, "mimetype").contains("opendocument.spreadsheet"));
    }

    #[test]
    fn test_content_values() {
        let buf = write_to_buffer(&sample_document());
        let content = read_part(&buf, "content.xml");
        assert!(content.contains(r#"<table:table table:name="Tab 1">"#));
        assert!(content.contains(r#"office:value-type="string""#));
        assert!(content.contains("<text:p>a</text:p>"));
        assert!(content.contains(r#"office:value-type="float" office:value="30""#));
    }

    #[test]
    fn test_merge_emission() {
        let mut document = sample_document();
        document.tabs[0].merges.push(CellRange::from_indices(0, 0, 1, 1));
        let buf = write_to_buffer(&document);
        let content = read_part(&buf, "content.xml");
        assert!(content.contains(
            r#"table:number-columns-spanned="2" table:number-rows-spanned="2""#
        ));
        assert_eq!(content.matches("<table:covered-table-cell").count(), 3);
        // Covered cells keep their content
        assert!(content.contains("<text:p>b</text:p>"));
    }

    #[test]
    fn test_formula_and_text_override() {
        let mut document = Document::new();
        let mut tab = Tab::new("calc");
        let mut cell = Cell::new(3.14159);
        cell.text = Some("pi".into());
        cell.formula = Some("of:=PI()".into());
        tab.rows.push(Row::from_cells(vec![cell]));
        document.tabs.push(tab);
        let content = read_part(&write_to_buffer(&document), "content.xml");
        assert!(content.contains(r#"table:formula="of:=PI()""#));
        assert!(content.contains("<text:p>pi</text:p>"));
    }

    #[test]
    fn test_column_width_styles_attached() {
        let mut document = sample_document();
        document.tabs[0].column_widths =
            vec![Some("2.5cm".to_string()), None, Some("2.5cm".to_string())];
        let content = read_part(&write_to_buffer(&document), "content.xml");
        assert!(content.contains(r#"style:column-width="2.5cm""#));
        assert!(content.contains(r#"<table:table-column table:style-name="co1"/>"#));
        assert!(content.contains("<table:table-column/>"));
    }

    #[test]
    fn test_unknown_style_aborts_write() {
        let mut document = sample_document();
        document.tabs[0].styles = vec!["no_such_style".to_string()];
        let mut buf = Vec::new();
        let result = OdsWriter::write(&document, Cursor::new(&mut buf));
        assert!(result.is_err());
    }
}
