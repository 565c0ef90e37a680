//! Generate command CLI handler.

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use retail_datagen::config::GeneratorConfig;
use retail_datagen::generator::{GeneratedData, Generator};
use retail_datagen::renderer::render_to_string;
use retail_datagen::schema::Table;
use retail_datagen::writer::write_output;
use schemars::{schema_for, JsonSchema};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// JSON output for a generation run
#[derive(Serialize, JsonSchema)]
pub(crate) struct GenerateJsonOutput {
    output_file: String,
    seed: u64,
    dry_run: bool,
    statistics: GenerateStatistics,
    tables: Vec<TableSummary>,
}

#[derive(Serialize, JsonSchema)]
pub(crate) struct GenerateStatistics {
    tables_generated: usize,
    statements_generated: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes_written: Option<u64>,
    elapsed_secs: f64,
}

#[derive(Serialize, JsonSchema)]
pub(crate) struct TableSummary {
    name: String,
    rows: usize,
    columns: Vec<String>,
    /// Smallest and largest value of the first column
    #[serde(skip_serializing_if = "Option::is_none")]
    first_column_range: Option<[i64; 2]>,
}

fn summarize(data: &GeneratedData) -> Vec<TableSummary> {
    data.tables
        .iter()
        .map(|t| {
            let firsts = t.int_column(0);
            let range = match (firsts.iter().min(), firsts.iter().max()) {
                (Some(&min), Some(&max)) => Some([min, max]),
                _ => None,
            };
            TableSummary {
                name: t.table.sql_name().to_string(),
                rows: t.rows.len(),
                columns: t.table.columns().iter().map(|c| c.to_string()).collect(),
                first_column_range: range,
            }
        })
        .collect()
}

pub fn run(
    output: PathBuf,
    config: Option<PathBuf>,
    seed: Option<u64>,
    no_echo: bool,
    progress: bool,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = match config {
        Some(ref path) => GeneratorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    let start_time = Instant::now();

    let progress_bar = if progress {
        let pb = ProgressBar::new(Table::ALL.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} tables {msg}",
            )?
            .progress_chars("█▓▒░  ")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb.set_message("Generating...");
        Some(pb)
    } else {
        None
    };

    let mut generator = Generator::new(seed.unwrap_or_else(rand::random), config);
    let data = generator.generate_with_progress(|table| {
        if let Some(ref pb) = progress_bar {
            pb.set_message(format!("{} ({} rows)", table.table, table.rows.len()));
            pb.inc(1);
        }
    })?;

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    let sql = render_to_string(&data);

    if !json && !no_echo {
        println!("{}", sql);
    }

    let bytes_written = if dry_run {
        None
    } else {
        Some(write_output(&output, &sql)?)
    };

    let elapsed = start_time.elapsed();

    if json {
        let report = GenerateJsonOutput {
            output_file: output.display().to_string(),
            seed: generator.seed(),
            dry_run,
            statistics: GenerateStatistics {
                tables_generated: data.tables.len(),
                statements_generated: data.total_rows(),
                bytes_written,
                elapsed_secs: elapsed.as_secs_f64(),
            },
            tables: summarize(&data),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if dry_run {
        eprintln!("Dry run: {} not written", output.display());
        eprintln!();
        eprintln!("Per-table breakdown:");
        for summary in summarize(&data) {
            let columns = summary.columns.join(", ");
            match (summary.columns.first(), summary.first_column_range) {
                (Some(first), Some([min, max])) => eprintln!(
                    "  {} ({}): {} rows, {} {}..={}",
                    summary.name, columns, summary.rows, first, min, max
                ),
                _ => eprintln!("  {} ({}): {} rows", summary.name, columns, summary.rows),
            }
        }
        eprintln!();
    }

    eprintln!(
        "✓ Generated {} statements for {} tables in {:.3?} (seed: {})",
        data.total_rows(),
        data.tables.len(),
        elapsed,
        generator.seed()
    );
    if let Some(bytes) = bytes_written {
        eprintln!("  Wrote {} bytes to {}", bytes, output.display());
    }

    Ok(())
}

pub fn print_schema() -> anyhow::Result<()> {
    let schema = schema_for!(GenerateJsonOutput);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
