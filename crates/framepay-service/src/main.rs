//! Main entry point for the framepay service.
//!
//! This binary serves the pay-to-play and claim-reward frame flows:
//! it authenticates frame actions, builds wallet transaction
//! descriptors, verifies on-chain receipts, and keeps an in-memory
//! leaderboard.

use clap::Parser;
use framepay_config::Config;
use std::path::PathBuf;

mod apis;
mod server;

use server::AppState;

/// Command-line arguments for the framepay service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, default_value = "config.toml")]
	config: PathBuf,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};

	let default_directive = args.log_level.to_string();
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	fmt()
		.with_env_filter(env_filter)
		.with_thread_ids(true)
		.with_target(true)
		.init();

	tracing::info!("Started framepay");

	let config = Config::from_file(&args.config)?;
	tracing::info!(
		chain_id = config.chain.chain_id,
		claim_enabled = config.claim.is_some(),
		"Loaded configuration"
	);

	let state = AppState::from_config(config)?;
	server::start_server(state).await?;

	tracing::info!("Stopped framepay");
	Ok(())
}
