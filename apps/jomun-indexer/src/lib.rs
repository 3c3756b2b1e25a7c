pub mod error;
pub mod indexer;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
	version = jomun_cli::VERSION,
	rename_all = "kebab",
	styles = jomun_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: std::path::PathBuf,
	/// Restrict the run to a single law, e.g. CIVIL_CODE.
	#[arg(long, value_name = "LAW_CODE")]
	pub law: Option<String>,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = jomun_config::load(&args.config)?;
	let filter = EnvFilter::new(config.service.log_level.clone());

	tracing_subscriber::fmt().with_env_filter(filter).init();

	let db = jomun_storage::db::Db::connect(&config.storage.postgres).await?;
	let targets = indexer::resolve_targets(args.law.as_deref())?;

	indexer::run_reindex(&config, &db, &targets).await?;

	Ok(())
}
