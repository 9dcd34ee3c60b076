//! CLI entry point for grid-preview
//!
//! Builds the columns described by a layout file and prints their
//! header rows or rendered cells, for checking layouts without a grid.

use clap::{Parser, Subcommand};
use colored::*;
use grid_column_builders::config::{ColumnDefaults, GridLayout};
use grid_column_builders::core::{
    CellElementFactory, GridColumn, HeaderElementFactory, TextBoxElementFactory,
};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::Level;

#[derive(Parser)]
#[command(name = "grid-preview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print debug logs while building
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the header rows of every column in a layout
    Headers {
        /// Path to the layout file
        layout: PathBuf,

        /// Print header metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// Paint values through every column's renderer
    Render {
        /// Path to the layout file
        layout: PathBuf,

        /// Cell value to paint (repeatable; an empty value shows the placeholder)
        #[arg(short = 'V', long = "value")]
        values: Vec<String>,
    },

    /// Print the built-in column defaults
    Defaults,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Headers { layout, json } => show_headers(&layout, json)?,
        Commands::Render { layout, values } => render_cells(&layout, &values)?,
        Commands::Defaults => {
            println!("{}", serde_json::to_string_pretty(&ColumnDefaults::default())?);
        }
    }

    Ok(())
}

/// Load a layout and build its columns
fn build_layout(layout_path: &Path) -> anyhow::Result<Vec<GridColumn>> {
    // Expand tilde in path
    let expanded_path = shellexpand::tilde(
        layout_path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    let path = Path::new(expanded_path.as_ref());

    let layout = GridLayout::load(path)?;

    let cell_factory: Rc<dyn CellElementFactory> = Rc::new(TextBoxElementFactory::for_cells());
    let header_factory: Rc<dyn HeaderElementFactory> =
        Rc::new(TextBoxElementFactory::for_headers());

    Ok(layout.build_columns(&cell_factory, &header_factory))
}

/// Print the header rows of each column, top row first
fn show_headers(layout_path: &Path, json: bool) -> anyhow::Result<()> {
    let columns = build_layout(layout_path)?;

    if json {
        let headers: Vec<_> = columns.iter().map(|c| c.header_meta_data()).collect();
        println!("{}", serde_json::to_string_pretty(&headers)?);
        return Ok(());
    }

    for (i, column) in columns.iter().enumerate() {
        let mut flags = Vec::new();
        if column.is_movable() {
            flags.push("movable");
        }
        if column.is_read_only() {
            flags.push("read-only");
        }

        println!(
            "{} {} {}",
            format!("Column {}", i + 1).yellow().bold(),
            format!("width {}", column.width()).dimmed(),
            flags.join(", ").magenta()
        );

        for (row, header) in column.header_meta_data().iter().enumerate() {
            let line = format!("{}", header);
            let line = if header.is_information_header() {
                line.dimmed()
            } else {
                line.normal()
            };
            println!("  {} {}", format!("{}.", row + 1).cyan(), line);
        }
        println!();
    }

    println!("{} Total: {} columns", "✓".green(), columns.len());

    Ok(())
}

/// Paint every value through every column
fn render_cells(layout_path: &Path, values: &[String]) -> anyhow::Result<()> {
    let columns = build_layout(layout_path)?;

    for column in &columns {
        let title = column
            .header_meta_data()
            .last()
            .and_then(|h| h.title())
            .unwrap_or("<untitled>");

        println!("{}", title.bold());

        if values.is_empty() {
            println!("  {} {}", "→".cyan(), column.render_cell(None));
        }
        for value in values {
            println!("  {} {}", "→".cyan(), column.render_cell(Some(value.as_str())));
        }
    }

    Ok(())
}
