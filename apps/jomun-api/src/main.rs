use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = jomun_api::Args::parse();

	jomun_api::run(args).await
}
