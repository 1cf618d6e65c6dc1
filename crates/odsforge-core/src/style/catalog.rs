//! Built-in style catalog
//!
//! The fragments are ODF automatic-style definitions; cell styles reference
//! the `number:*-style` data formats through `style:data-style-name`.
//! `grid_06pt` draws a 0.6pt black border, `bg_gray` variants fill the cell
//! background, and the `decimalN`/`integer` families control numeric
//! display.

/// (name, ODF fragment) pairs seeded into every registry
pub const BUILTIN_STYLES: &[(&str, &str)] = &[
    (
        "default_table_row",
        r#"<style:style style:family="table-row">
<style:table-row-properties style:row-height="4.52mm" fo:break-before="auto" style:use-optimal-row-height="true"/>
</style:style>"#,
    ),
    (
        "table_row_1cm",
        r#"<style:style style:family="table-row">
<style:table-row-properties style:row-height="1cm" fo:break-before="auto"/>
</style:style>"#,
    ),
    (
        "bold",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default">
<style:text-properties fo:font-weight="bold" style:font-weight-asian="bold" style:font-weight-complex="bold"/>
<style:table-cell-properties style:text-align-source="value-type"/>
<style:paragraph-properties fo:margin-right="1mm"/>
</style:style>"#,
    ),
    (
        "bold_center",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default">
<style:text-properties fo:font-weight="bold" style:font-weight-asian="bold" style:font-weight-complex="bold"/>
<style:table-cell-properties style:text-align-source="fix"/>
<style:paragraph-properties fo:text-align="center"/>
</style:style>"#,
    ),
    (
        "left",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default">
<style:table-cell-properties style:text-align-source="fix"/>
<style:paragraph-properties fo:text-align="start" fo:margin-left="1mm"/>
</style:style>"#,
    ),
    (
        "right",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default">
<style:table-cell-properties style:text-align-source="fix"/>
<style:paragraph-properties fo:text-align="end" fo:margin-right="1mm"/>
</style:style>"#,
    ),
    (
        "center",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default">
<style:table-cell-properties style:text-align-source="fix"/>
<style:paragraph-properties fo:text-align="center"/>
</style:style>"#,
    ),
    (
        "decimal1",
        r#"<number:number-style>
<number:number number:decimal-places="1" loext:min-decimal-places="1" number:min-integer-digits="1" number:grouping="false"/>
</number:number-style>"#,
    ),
    (
        "cell_decimal1",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default" style:data-style-name="decimal1">
<style:paragraph-properties fo:margin-right="1.2mm"/>
</style:style>"#,
    ),
    (
        "decimal2",
        r#"<number:number-style>
<number:number number:decimal-places="2" loext:min-decimal-places="2" number:min-integer-digits="1" number:grouping="false"/>
</number:number-style>"#,
    ),
    (
        "cell_decimal2",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default" style:data-style-name="decimal2">
<style:paragraph-properties fo:margin-right="1.2mm"/>
</style:style>"#,
    ),
    (
        "decimal3",
        r#"<number:number-style>
<number:number number:decimal-places="3" loext:min-decimal-places="3" number:min-integer-digits="1" number:grouping="false"/>
</number:number-style>"#,
    ),
    (
        "cell_decimal3",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default" style:data-style-name="decimal3">
<style:paragraph-properties fo:margin-right="1.2mm"/>
</style:style>"#,
    ),
    (
        "decimal4",
        r#"<number:number-style>
<number:number number:decimal-places="4" loext:min-decimal-places="4" number:min-integer-digits="1" number:grouping="false"/>
</number:number-style>"#,
    ),
    (
        "cell_decimal4",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default" style:data-style-name="decimal4">
<style:paragraph-properties fo:margin-right="1.2mm"/>
</style:style>"#,
    ),
    (
        "decimal6",
        r#"<number:number-style>
<number:number number:decimal-places="6" loext:min-decimal-places="6" number:min-integer-digits="1" number:grouping="false"/>
</number:number-style>"#,
    ),
    (
        "cell_decimal6",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default" style:data-style-name="decimal6">
<style:paragraph-properties fo:margin-right="1.2mm"/>
</style:style>"#,
    ),
    (
        "integer",
        r#"<number:number-style>
<number:number number:decimal-places="0" loext:min-decimal-places="0" number:min-integer-digits="1" number:grouping="false"/>
</number:number-style>"#,
    ),
    (
        "integer_no_zero",
        r#"<number:number-style>
<number:number number:decimal-places="0" loext:min-decimal-places="0" number:min-integer-digits="0" number:grouping="false"/>
</number:number-style>"#,
    ),
    (
        "grid_06pt",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default">
<style:table-cell-properties fo:border="0.06pt solid #000000"/>
<style:paragraph-properties fo:margin-left="1.2mm" fo:margin-right="1.2mm"/>
</style:style>"#,
    ),
    (
        "bold_left_bg_gray_grid_06pt",
        r##"<style:style style:family="table-cell" style:parent-style-name="Default">
<style:table-cell-properties fo:background-color="#dddddd" fo:border="0.06pt solid #000000" style:text-align-source="fix"/>
<style:paragraph-properties fo:text-align="start" fo:margin-left="1.2mm"/>
<style:text-properties fo:font-weight="bold" style:font-weight-asian="bold" style:font-weight-complex="bold"/>
</style:style>"##,
    ),
    (
        "bold_right_bg_gray_grid_06pt",
        r##"<style:style style:family="table-cell" style:parent-style-name="Default">
<style:table-cell-properties fo:background-color="#dddddd" fo:border="0.06pt solid #000000" style:text-align-source="fix"/>
<style:paragraph-properties fo:text-align="end" fo:margin-right="1.2mm"/>
<style:text-properties fo:font-weight="bold" style:font-weight-asian="bold" style:font-weight-complex="bold"/>
</style:style>"##,
    ),
    (
        "bold_center_bg_gray_grid_06pt",
        r##"<style:style style:family="table-cell" style:parent-style-name="Default">
<style:table-cell-properties fo:background-color="#dddddd" fo:border="0.06pt solid #000000" style:text-align-source="fix"/>
<style:paragraph-properties fo:text-align="center"/>
<style:text-properties fo:font-weight="bold" style:font-weight-asian="bold" style:font-weight-complex="bold"/>
</style:style>"##,
    ),
    (
        "bold_left_grid_06pt",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default">
<style:table-cell-properties fo:border="0.06pt solid #000000" style:text-align-source="fix"/>
<style:paragraph-properties fo:text-align="start" fo:margin-left="1.2mm"/>
<style:text-properties fo:font-weight="bold" style:font-weight-asian="bold" style:font-weight-complex="bold"/>
</style:style>"#,
    ),
    (
        "bold_right_grid_06pt",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default">
<style:table-cell-properties fo:border="0.06pt solid #000000" style:text-align-source="fix"/>
<style:paragraph-properties fo:text-align="end" fo:margin-right="1.2mm"/>
<style:text-properties fo:font-weight="bold" style:font-weight-asian="bold" style:font-weight-complex="bold"/>
</style:style>"#,
    ),
    (
        "bold_center_grid_06pt",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default">
<style:table-cell-properties fo:border="0.06pt solid #000000" style:text-align-source="fix"/>
<style:paragraph-properties fo:text-align="center"/>
<style:text-properties fo:font-weight="bold" style:font-weight-asian="bold" style:font-weight-complex="bold"/>
</style:style>"#,
    ),
    (
        "left_grid_06pt",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default">
<style:table-cell-properties style:text-align-source="fix" fo:border="0.06pt solid #000000"/>
<style:paragraph-properties fo:margin-left="1.2mm" fo:text-align="start"/>
</style:style>"#,
    ),
    (
        "right_grid_06pt",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default">
<style:table-cell-properties style:text-align-source="fix" fo:border="0.06pt solid #000000"/>
<style:paragraph-properties fo:margin-right="1.2mm" fo:text-align="end"/>
</style:style>"#,
    ),
    (
        "center_grid_06pt",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default">
<style:table-cell-properties style:text-align-source="fix" fo:border="0.06pt solid #000000"/>
<style:paragraph-properties fo:text-align="center"/>
</style:style>"#,
    ),
    (
        "integer_grid_06pt",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default" style:data-style-name="integer">
<style:table-cell-properties fo:border="0.06pt solid #000000"/>
<style:paragraph-properties fo:margin-left="1.2mm" fo:margin-right="1.2mm"/>
</style:style>"#,
    ),
    (
        "integer_no_zero_grid_06pt",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default" style:data-style-name="integer_no_zero">
<style:table-cell-properties fo:border="0.06pt solid #000000"/>
</style:style>"#,
    ),
    (
        "center_integer_no_zero_grid_06pt",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default" style:data-style-name="integer_no_zero">
<style:table-cell-properties fo:border="0.06pt solid #000000"/>
<style:paragraph-properties fo:text-align="center"/>
</style:style>"#,
    ),
    (
        "decimal1_grid_06pt",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default" style:data-style-name="decimal1">
<style:table-cell-properties fo:border="0.06pt solid #000000"/>
<style:paragraph-properties fo:margin-left="1.2mm" fo:margin-right="1.2mm"/>
</style:style>"#,
    ),
    (
        "decimal2_grid_06pt",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default" style:data-style-name="decimal2">
<style:table-cell-properties fo:border="0.06pt solid #000000"/>
<style:paragraph-properties fo:margin-left="1.2mm" fo:margin-right="1.2mm"/>
</style:style>"#,
    ),
    (
        "decimal3_grid_06pt",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default" style:data-style-name="decimal3">
<style:table-cell-properties fo:border="0.06pt solid #000000"/>
<style:paragraph-properties fo:margin-left="1.2mm" fo:margin-right="1.2mm"/>
</style:style>"#,
    ),
    (
        "decimal4_grid_06pt",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default" style:data-style-name="decimal4">
<style:table-cell-properties fo:border="0.06pt solid #000000"/>
<style:paragraph-properties fo:margin-left="1.2mm" fo:margin-right="1.2mm"/>
</style:style>"#,
    ),
    (
        "decimal6_grid_06pt",
        r#"<style:style style:family="table-cell" style:parent-style-name="Default" style:data-style-name="decimal6">
<style:table-cell-properties fo:border="0.06pt solid #000000"/>
<style:paragraph-properties fo:margin-left="1.2mm" fo:margin-right="1.2mm"/>
</style:style>"#,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(BUILTIN_STYLES.len(), 37);
    }

    #[test]
    fn test_catalog_entries_nonempty() {
        for (name, xml) in BUILTIN_STYLES {
            assert!(!name.is_empty());
            assert!(!xml.is_empty());
        }
    }

    #[test]
    fn test_catalog_names_unique() {
        let mut known = HashSet::new();
        for (name, _) in BUILTIN_STYLES {
            assert!(known.insert(*name), "duplicate built-in style '{}'", name);
        }
    }

    #[test]
    fn test_catalog_definitions_unique() {
        let mut known = HashSet::new();
        for (name, xml) in BUILTIN_STYLES {
            assert!(known.insert(*xml), "duplicate definition for '{}'", name);
        }
    }
}
