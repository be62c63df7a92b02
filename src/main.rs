//! Main entry point for the followsweep binary
//!
//! Wires the real GitHub directory binding into the engine, plans the
//! sweep, asks for confirmation, and reports the tally. Process exit
//! codes live only here: configuration and fetch failures exit 1, while
//! a completed batch exits 0 even when some individual unfollows failed.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::{error, info, warn};

use followsweep::services::config::ENV_GUIDANCE;
use followsweep::services::{load_config, GithubDirectory};
use followsweep::{SweepEngine, SweepPlan};

const TARGET_PREVIEW_LIMIT: usize = 10;

/// Unfollow GitHub accounts that do not follow you back
#[derive(Parser)]
#[command(name = "followsweep")]
#[command(about = "Reconciles your GitHub following list against your followers")]
struct Args {
    /// Compute and show targets without unfollowing anyone
    #[arg(long)]
    dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    yes: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("followsweep={log_level},reqwest=warn")));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Ask for y/N confirmation on stdin; anything but an explicit yes is a no
fn confirm(count: usize) -> bool {
    print!("Unfollow {count} users? [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => matches!(line.trim(), "y" | "Y" | "yes"),
        Err(_) => false,
    }
}

fn log_plan(plan: &SweepPlan, whitelist_len: usize) {
    info!(
        "fetched {} following, {} followers",
        plan.following_count, plan.followers_count
    );

    if whitelist_len > 0 {
        info!(
            "found {} users to unfollow ({} whitelisted)",
            plan.targets.len(),
            plan.whitelisted_count
        );
    } else {
        info!("found {} users to unfollow", plan.targets.len());
    }

    for username in plan.targets.iter().take(TARGET_PREVIEW_LIMIT) {
        info!("  {username}");
    }
    if plan.targets.len() > TARGET_PREVIEW_LIMIT {
        info!("  ... and {} more", plan.targets.len() - TARGET_PREVIEW_LIMIT);
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            eprintln!("{ENV_GUIDANCE}");
            std::process::exit(1);
        }
    };

    let whitelist_len = config.whitelist.len();
    let directory = GithubDirectory::new(config.token.clone());
    let engine = SweepEngine::new(directory, config);

    let plan = match engine.plan().await {
        Ok(plan) => plan,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    log_plan(&plan, whitelist_len);

    if plan.is_empty() {
        info!("no users to unfollow, nothing to do");
        return;
    }

    if args.dry_run {
        info!("dry run, no users were unfollowed");
        return;
    }

    if !args.yes && !confirm(plan.targets.len()) {
        info!("cancelled, no users were unfollowed");
        return;
    }

    let outcome = engine.execute(&plan.targets).await;
    if outcome.failures.is_empty() {
        info!("unfollowed {} users", outcome.success_count);
    } else {
        // A completed batch is still a successful run; the per-item
        // failures are in the tally for the caller to weigh
        warn!(
            "unfollowed {} users, {} failed",
            outcome.success_count,
            outcome.failures.len()
        );
    }
}
