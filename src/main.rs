use anyhow::Result;
use log::info;

use solana_token_dataset::{
    config::PipelineConfig,
    pipeline::TokenPipeline,
    provider::MoralisProvider,
    utils::setup_logger,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    setup_logger()?;

    let config = PipelineConfig::from_env()?;
    config.validate_all()?;
    info!(
        "collecting token data for {} (label {:?})",
        config.token_mint, config.label
    );

    let provider = MoralisProvider::new(&config)?;
    let pipeline = TokenPipeline::new(provider, config);

    let path = pipeline.run().await?;
    println!("Token data successfully exported to: {}", path.display());

    Ok(())
}
