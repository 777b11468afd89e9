use std::path::PathBuf;

use log::info;
use thiserror::Error;

use crate::aggregate::aggregate;
use crate::config::PipelineConfig;
use crate::emit::{emit, existing_record_for_mint, EmitError};
use crate::normalize::{normalize_metadata, normalize_price, normalize_trades};
use crate::provider::{FetchError, TokenDataProvider};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Emit(#[from] EmitError),
    #[error("mint {mint} already captured in {path}")]
    DuplicateMint { mint: String, path: PathBuf },
}

/// One-shot fetch/normalize/aggregate/emit run for a single token. Strictly
/// sequential and fail-fast: the first error at any stage ends the run and
/// no file is written.
pub struct TokenPipeline<P: TokenDataProvider> {
    provider: P,
    config: PipelineConfig,
}

impl<P: TokenDataProvider> TokenPipeline<P> {
    pub fn new(provider: P, config: PipelineConfig) -> Self {
        Self { provider, config }
    }

    pub async fn run(&self) -> Result<PathBuf, PipelineError> {
        let mint = &self.config.token_mint;

        if let Some(path) = existing_record_for_mint(&self.config.output_dir, mint) {
            return Err(PipelineError::DuplicateMint {
                mint: mint.clone(),
                path,
            });
        }

        info!("fetching metadata for {}", mint);
        let raw_metadata = self.provider.fetch_metadata(mint).await?;

        info!("fetching price for {}", mint);
        let raw_price = self.provider.fetch_price(mint).await?;

        info!("fetching earliest swap for {}", mint);
        let raw_swaps = self.provider.fetch_swaps(mint).await?;

        let metadata = normalize_metadata(raw_metadata);
        let price = normalize_price(raw_price);
        let first_trade = normalize_trades(raw_swaps);
        if first_trade.is_none() {
            info!("no swaps recorded for {}, trade fields default", mint);
        }

        let record = aggregate(metadata, price, first_trade, self.config.label);
        let path = emit(&record, mint, &self.config.output_dir)?;

        info!("unified record written to {}", path.display());
        Ok(path)
    }
}
