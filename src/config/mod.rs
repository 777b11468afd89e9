use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use url::Url;

use crate::types::Label;

pub const DEFAULT_BASE_URL: &str = "https://solana-gateway.moralis.io";
pub const DEFAULT_OUTPUT_DIR: &str = "json_output";

/// Run parameters for one pipeline invocation. Built once and passed in, so
/// switching token, label or environment never needs a code edit.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    // Provider configuration
    pub api_key: String,
    pub base_url: String,

    // Run parameters
    pub token_mint: String,
    pub label: Label,

    // Output location
    pub output_dir: PathBuf,
}

impl PipelineConfig {
    /// Load from the environment. `MORALIS_API_KEY` and `TOKEN_MINT` are
    /// required; the rest have defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("MORALIS_API_KEY").context("MORALIS_API_KEY must be set")?;
        let token_mint = env::var("TOKEN_MINT").context("TOKEN_MINT must be set")?;
        let base_url =
            env::var("MORALIS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let output_dir = env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let label_raw: u8 = env::var("FRAUD_LABEL")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .context("FRAUD_LABEL must be an integer")?;
        let label = Label::try_from(label_raw).map_err(|e| anyhow!(e))?;

        Ok(Self {
            api_key,
            base_url,
            token_mint,
            label,
            output_dir,
        })
    }

    pub fn validate_all(&self) -> Result<()> {
        validate_api_key(&self.api_key)?;
        validate_base_url(&self.base_url)?;
        validate_mint(&self.token_mint)?;
        Ok(())
    }
}

fn validate_api_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(anyhow!("API key is empty"));
    }
    Ok(())
}

fn validate_base_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url).with_context(|| format!("invalid base URL: {}", url))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(anyhow!("base URL must be http(s): {}", url));
    }
    Ok(())
}

fn validate_mint(mint: &str) -> Result<()> {
    if mint.trim().is_empty() {
        return Err(anyhow!("token mint is empty"));
    }
    Ok(())
}
