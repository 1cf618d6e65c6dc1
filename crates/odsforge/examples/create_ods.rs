//! Example: Create an .ods file from an annotated description

use odsforge::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    let description = json!([
        {
            "name": "inventory",
            "style": "cell_decimal2",
            "width": ["3.2cm", "2cm", "2cm"],
            "table": [
                {
                    "row": ["Part", "Count", "Price"],
                    "style": "bold_center_bg_gray_grid_06pt",
                },
                ["widget", 12, 0.55],
                ["gadget", 3, 12.5],
                [
                    "total",
                    null,
                    {"value": 44.1, "formula": "of:=B2*C2+B3*C3"},
                ],
            ],
            "span": ["A4:B4"],
        }
    ]);

    content_to_ods(&description, "/tmp/inventory.ods")?;
    println!("Created /tmp/inventory.ods");

    // The same description, inspected before writing
    let document = assemble_document(&description)?;
    let tab = &document.tabs[0];
    println!(
        "Tab '{}': {} rows, {} columns, {} merge area(s)",
        tab.name,
        tab.row_count(),
        tab.column_count(),
        tab.merges.len()
    );

    Ok(())
}
