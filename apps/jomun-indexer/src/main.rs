use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = jomun_indexer::Args::parse();

	jomun_indexer::run(args).await
}
