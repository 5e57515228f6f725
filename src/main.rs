//! ipq demo driver - Entry Point
//!
//! Sorts integers by feeding them through the indexed priority queue and
//! draining the minimum.

use clap::Parser;
use serde::Serialize;
use std::io::Read;
use tracing::info;

/// ipq demo - sort integers through an indexed min-priority queue
#[derive(Parser, Debug)]
#[command(name = "ipq")]
#[command(version)]
#[command(about = "Sorts integers through an indexed min-priority queue")]
pub struct Args {
    /// Integers to sort (reads whitespace-separated integers from stdin if not provided)
    pub values: Vec<i64>,

    /// Emit the result as a JSON report instead of plain lines
    #[arg(long)]
    pub json: bool,
}

/// Report emitted by `--json`.
#[derive(Debug, Serialize)]
struct SortReport {
    /// Number of values sorted.
    count: usize,
    /// The values in non-decreasing order.
    sorted: Vec<i64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    ipq::logging::init()?;

    // Detect input source (arguments or stdin)
    let values = if args.values.is_empty() {
        read_stdin_values()?
    } else {
        args.values
    };

    info!(count = values.len(), "sorting input through the queue");

    let sorted = ipq::pq_sort(values);

    if args.json {
        let report = SortReport {
            count: sorted.len(),
            sorted,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        for value in &sorted {
            println!("{value}");
        }
    }

    Ok(())
}

/// Reads whitespace-separated integers from stdin until EOF.
fn read_stdin_values() -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let values = input
        .split_whitespace()
        .map(str::parse::<i64>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(values)
}
