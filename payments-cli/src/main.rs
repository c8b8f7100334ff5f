//! Payments Query CLI
//!
//! Loads a JSON payment snapshot and prints the result of one query as JSON.

mod config;

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use payments_query::PaymentQueryService;
use payments_repo::load_snapshot;
use payments_types::{DateTimeProvider, Payment, PaymentRepository, YearMonth};

#[derive(Parser)]
#[command(name = "payments-query")]
#[command(author, version, about = "Query a payment snapshot", long_about = None)]
struct Cli {
    /// Path to the JSON payment snapshot
    #[arg(long, env = "PAYMENTS_SNAPSHOT")]
    snapshot: PathBuf,

    /// Pin "now" to an RFC 3339 timestamp instead of the system clock
    #[arg(long, env = "PAYMENTS_NOW")]
    now: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, env = "PAYMENTS_JSON_LOGS")]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// All payments, newest first
    Sorted,
    /// Payments made in the current month
    CurrentMonth,
    /// Payments made in the given month
    Month {
        /// Month as YYYY-MM
        month: YearMonth,
    },
    /// Payments made within the last N days
    LastDays {
        days: u32,
    },
    /// Payments with exactly one item
    SingleItem,
    /// Distinct products sold in the current month
    Products,
    /// Sum of final prices for a month
    Total {
        /// Month as YYYY-MM
        month: YearMonth,
    },
    /// Sum of discounts for a month
    Discount {
        /// Month as YYYY-MM
        month: YearMonth,
    },
    /// Counts and totals for a month
    Summary {
        /// Month as YYYY-MM
        month: YearMonth,
    },
    /// Every item bought by the user with this exact email
    UserItems {
        email: String,
    },
    /// Payments whose total is strictly above VALUE
    Over {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
}

/// Used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn,payments_cli=info,payments_repo=info";

fn init_tracing(json_logs: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries query results, so logs go to stderr.
    if json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Set results printed newest first, ties broken by id.
fn sorted_payments(payments: HashSet<Payment>) -> Vec<Payment> {
    let mut payments: Vec<Payment> = payments.into_iter().collect();
    payments.sort_by(|a, b| {
        b.payment_date
            .cmp(&a.payment_date)
            .then_with(|| a.id.cmp(&b.id))
    });
    payments
}

fn sorted_names(names: HashSet<String>) -> Vec<String> {
    let mut names: Vec<String> = names.into_iter().collect();
    names.sort();
    names
}

fn run<R: PaymentRepository, C: DateTimeProvider>(
    service: &PaymentQueryService<R, C>,
    command: Commands,
) -> Result<Value> {
    let value = match command {
        Commands::Sorted => serde_json::to_value(service.find_payments_sorted_by_date_desc())?,
        Commands::CurrentMonth => {
            serde_json::to_value(service.find_payments_for_current_month())?
        }
        Commands::Month { month } => {
            serde_json::to_value(service.find_payments_for_given_month(month))?
        }
        Commands::LastDays { days } => {
            serde_json::to_value(service.find_payments_for_last_days(days))?
        }
        Commands::SingleItem => {
            serde_json::to_value(sorted_payments(service.find_payments_with_one_item()))?
        }
        Commands::Products => serde_json::to_value(sorted_names(
            service.find_products_sold_in_current_month(),
        ))?,
        Commands::Total { month } => json!({
            "month": month,
            "total": service.sum_total_for_given_month(month),
        }),
        Commands::Discount { month } => json!({
            "month": month,
            "discount": service.sum_discount_for_given_month(month),
        }),
        Commands::Summary { month } => serde_json::to_value(service.monthly_summary(month))?,
        Commands::UserItems { email } => {
            serde_json::to_value(service.find_items_for_user_with_email(&email))?
        }
        Commands::Over { value } => {
            serde_json::to_value(sorted_payments(service.find_payments_with_value_over(value)))?
        }
    };
    Ok(value)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::Config::new(cli.snapshot, cli.now.as_deref(), cli.json_logs)?;

    init_tracing(config.json_logs);
    tracing::debug!(?config, command = ?cli.command, "resolved configuration");

    let repo = load_snapshot(&config.snapshot)
        .with_context(|| format!("loading snapshot {}", config.snapshot.display()))?;
    let service = PaymentQueryService::new(repo, config.clock);

    let output = run(&service, cli.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
