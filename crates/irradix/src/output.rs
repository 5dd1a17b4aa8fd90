use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

use crate::stats::SizeStats;

#[derive(Clone, Debug, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ConversionOutput<'a> {
    value: u64,
    digits: &'a str,
    digit_count: usize,
}

/// Print a single integer next to its base-phi digits.
pub fn print_conversion(value: u64, digits: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = ConversionOutput {
                value,
                digits,
                digit_count: digits.len(),
            };
            println!("{}", to_json(&out));
        }
        OutputFormat::Table => {
            let mut table = new_table();
            table
                .set_header(vec!["VALUE", "DIGITS", "COUNT"])
                .add_row(vec![
                    value.to_string(),
                    digits.to_string(),
                    digits.len().to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("{value} = {digits} (base phi)"),
        OutputFormat::Raw => println!("{digits}"),
    }
}

/// Print the integer for a digit string given on the command line.
pub fn print_value(digits: &str, value: u64, format: OutputFormat) {
    match format {
        OutputFormat::Raw => println!("{value}"),
        other => print_conversion(value, digits, other),
    }
}

#[derive(Serialize)]
struct ValuesOutput<'a> {
    count: usize,
    values: &'a [u64],
}

/// Print a decoded sequence.
pub fn print_values(values: &[u64], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = ValuesOutput {
                count: values.len(),
                values,
            };
            println!("{}", to_json(&out));
        }
        OutputFormat::Table => {
            let mut table = new_table();
            table.set_header(vec!["INDEX", "VALUE"]);
            for (index, value) in values.iter().enumerate() {
                table.add_row(vec![index.to_string(), value.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => println!("{}", join_csv(values)),
    }
}

/// Report size statistics on stderr so stdout stays a clean byte stream.
pub fn print_stats(stats: &SizeStats, format: OutputFormat) {
    match format {
        OutputFormat::Json => eprintln!("{}", to_json(stats)),
        _ => {
            let mut table = new_table();
            table
                .set_header(vec!["METRIC", "BYTES", "ENCODED / METRIC"])
                .add_row(vec![
                    "baseline (fixed width)".to_string(),
                    stats.baseline_bytes.to_string(),
                    percent(stats.vs_baseline_pct),
                ])
                .add_row(vec![
                    "theoretical minimum".to_string(),
                    stats.theoretical_bytes.to_string(),
                    percent(stats.vs_theoretical_pct),
                ])
                .add_row(vec![
                    "encoded".to_string(),
                    stats.encoded_bytes.to_string(),
                    String::new(),
                ]);
            eprintln!("{table}");
        }
    }
}

pub fn print_raw(data: &[u8]) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(data)?;
    out.flush()
}

pub fn join_csv(values: &[u64]) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn percent(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| "n/a".to_string(), |r| format!("{r:.2}%"))
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}
