//! odsforge CLI - generate .ods spreadsheets from JSON or YAML descriptions

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "odsforge")]
#[command(
    author,
    version,
    about = "Generate an OpenDocument spreadsheet from a JSON or YAML description",
    long_about = "Generate an OpenDocument spreadsheet from a JSON or YAML description.\n\n\
        The description nests tabs, rows, and cells as plain lists, or as maps\n\
        carrying style names, column widths, merge areas, and formulas.\n\
        Look at the tests folder of the odsforge crate for input examples."
)]
struct Cli {
    /// Input file containing data in json or yaml format
    input_file: PathBuf,

    /// Output file, .ods file generated from input
    output_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    odsforge::file_to_ods(&cli.input_file, &cli.output_file).with_context(|| {
        format!(
            "Failed to convert '{}' to '{}'",
            cli.input_file.display(),
            cli.output_file.display()
        )
    })?;
    Ok(())
}
