//! ledgerview demo CLI
//!
//! Renders an audit-record JSON file the way the dashboard views do: as a
//! chain of numbered blocks, as a filtered search, or as dashboard figures.
//! `sample` prints a fictional record file to feed the other commands.
//!
//! Usage:
//!   cargo run -p demo -- sample --count 10 > logs.json
//!   cargo run -p demo -- blocks --input logs.json
//!   cargo run -p demo -- search --input logs.json create_patient
//!   cargo run -p demo -- dashboard --input logs.json --today 2024-03-01

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, TimeZone, Utc};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ledgerview_config::ViewConfig;
use ledgerview_contracts::{is_missing, Block, LedgerError, LedgerResult};
use ledgerview_core::{
    display::{abbreviate_action, preview_data_hash, preview_user},
    filter_blocks, sort_newest_first, summarize, ActionCategory,
};
use ledgerview_dashboard::{daily_activity, mock_data, recent_activity, DashboardStats};
use ledgerview_source::{fetch_or_empty, JsonFileSource};

// ── CLI definition ────────────────────────────────────────────────────────────

/// ledgerview: audit log block visualizer.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "ledgerview audit visualizer demo",
    long_about = "Groups audit records into numbered display blocks, repairs\n\
                  swapped action/resource fields, and prints dashboard figures."
)]
struct Cli {
    /// TOML view configuration.  Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the records as a chain of blocks.
    Blocks {
        /// JSON array of audit records.
        #[arg(long)]
        input: PathBuf,
        /// Override the configured block size.
        #[arg(long)]
        block_size: Option<usize>,
        /// Sort newest first before grouping.
        #[arg(long)]
        newest_first: bool,
    },
    /// Print only the blocks and records matching a search term.
    Search {
        #[arg(long)]
        input: PathBuf,
        /// Case-insensitive substring of a hash, action, resource, or user.
        term: String,
    },
    /// Print dashboard counts, recent activity, and the daily chart.
    Dashboard {
        #[arg(long)]
        input: PathBuf,
        /// Last day of the activity chart (defaults to today, UTC).
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Print a fictional audit-record file as JSON.
    Sample {
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Command::Blocks {
            input,
            block_size,
            newest_first,
        } => run_blocks(&config, &input, block_size, newest_first),
        Command::Search { input, term } => run_search(&config, &input, &term),
        Command::Dashboard { input, today } => run_dashboard(&config, &input, today),
        Command::Sample { count } => run_sample(count),
    });

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> LedgerResult<ViewConfig> {
    match path {
        Some(path) => ViewConfig::from_file(path),
        None => Ok(ViewConfig::default()),
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_blocks(
    config: &ViewConfig,
    input: &Path,
    block_size: Option<usize>,
    newest_first: bool,
) -> LedgerResult<()> {
    let mut config = config.clone();
    if let Some(size) = block_size {
        config.block_size = size;
    }

    let mut records = fetch_or_empty(&JsonFileSource::new(input));
    if newest_first {
        sort_newest_first(&mut records);
    }

    let blocks = config.grouper()?.group(&records);
    let summary = summarize(&blocks);

    println!("Total Blocks:       {}", summary.block_count);
    println!("Total Transactions: {}", summary.transaction_count);
    println!();
    print_blocks(&blocks);
    Ok(())
}

fn run_search(config: &ViewConfig, input: &Path, term: &str) -> LedgerResult<()> {
    let records = fetch_or_empty(&JsonFileSource::new(input));
    let blocks = config.grouper()?.group(&records);
    let hits = filter_blocks(&blocks, term);

    debug!(term = %term, matched_blocks = hits.len(), "search applied");

    let summary = summarize(&hits);
    println!(
        "{} of {} records match '{}'",
        summary.transaction_count,
        records.len(),
        term
    );
    println!();
    print_blocks(&hits);
    Ok(())
}

fn run_dashboard(config: &ViewConfig, input: &Path, today: Option<NaiveDate>) -> LedgerResult<()> {
    let records = fetch_or_empty(&JsonFileSource::new(input));
    let today = today.unwrap_or_else(|| Utc::now().date_naive());

    let stats = DashboardStats::from_records(&records);
    println!("Total Transactions: {}", stats.total);
    println!("Active Users:       {}", stats.distinct_users);
    println!("Resources Touched:  {}", stats.distinct_resources);
    println!();

    println!("Recent activity");
    println!("---------------");
    for row in recent_activity(&records, config.recent_limit, &config.repair_policy()) {
        let time = row
            .record
            .timestamp
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {}  {:<22}  {:<24}  {}",
            time,
            render_action(&row.repaired.display_action),
            row.repaired.display_resource,
            preview_user(&row.record.user_id),
        );
    }
    println!();

    println!("Activity, last {} days", config.activity_days);
    println!("----------------------");
    for day in daily_activity(&records, today, config.activity_days)? {
        println!(
            "  {} {}  {:>4}  {}",
            day.weekday,
            day.date,
            day.count,
            "#".repeat(day.count.min(60))
        );
    }
    Ok(())
}

fn run_sample(count: usize) -> LedgerResult<()> {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).single().ok_or_else(|| {
        LedgerError::InvalidArgument {
            reason: "sample start time is not representable".to_string(),
        }
    })?;
    let records = mock_data::sample_records(count, start);
    let json = serde_json::to_string_pretty(&records).map_err(|e| LedgerError::MalformedRecords {
        reason: format!("failed to encode sample records: {}", e),
    })?;
    println!("{}", json);
    Ok(())
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn render_action(action: &str) -> String {
    if is_missing(action) {
        "-".to_string()
    } else {
        abbreviate_action(action)
    }
}

fn print_blocks(blocks: &[Block]) {
    for block in blocks {
        println!(
            "Block #{}  {}  hash {}  ({} TX)",
            block.block_number,
            block.timestamp.format("%Y-%m-%d %H:%M:%S"),
            block.hash,
            block.len()
        );
        for tx in &block.transactions {
            let category = ActionCategory::of(&tx.repaired.display_action);
            let swapped = if tx.repaired.was_swapped { " (repaired)" } else { "" };
            println!(
                "    [{:<6}] {:<22} {:<24} user {}  data {}{}",
                category.label(),
                render_action(&tx.repaired.display_action),
                tx.repaired.display_resource,
                preview_user(&tx.record.user_id),
                preview_data_hash(&tx.record),
                swapped,
            );
        }
    }
}
