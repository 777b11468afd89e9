use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Zero value for trade timestamps. Kept as a real instant so the field
/// stays total and serializes as RFC3339 like every other timestamp.
pub fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

// ---------------------------------------------------------------------------
// Raw provider shapes. These mirror the gateway JSON one-to-one; every field
// is defaulted so a sparse response decodes instead of failing.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMetadata {
    pub mint: String,
    pub name: String,
    pub symbol: String,
    pub decimals: String,
    pub total_supply: String,
    pub total_supply_formatted: String,
    pub metaplex: Option<RawMetaplex>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMetaplex {
    pub seller_fee_basis_points: u32,
    pub is_mutable: bool,
    // The gateway reports this as 0/1, not a bool.
    pub primary_sale_happened: u8,
    pub update_authority: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPrice {
    pub usd_price: f64,
    pub native_price: Option<RawNativePrice>,
    pub exchange_name: String,
    pub exchange_address: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawNativePrice {
    pub value: String,
}

/// One page of swap history, ordered ascending by block time when requested
/// with `order=ASC`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSwapsPage {
    pub result: Vec<RawSwap>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSwap {
    pub transaction_type: String,
    pub block_timestamp: Option<DateTime<Utc>>,
    pub wallet_address: String,
    pub total_value_usd: f64,
}

// ---------------------------------------------------------------------------
// Normalized records handed to the aggregator.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    pub mint: String,
    pub name: String,
    pub symbol: String,
    pub decimals: String,
    pub total_supply: String,
    pub total_supply_formatted: String,
    pub seller_fee_basis_points: u32,
    pub is_mutable: bool,
    pub primary_sale_happened: bool,
    pub update_authority: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub usd_price: f64,
    pub native_price_value: String,
    pub exchange_name: String,
    pub exchange_address: String,
}

/// The earliest swap observed for a token.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub transaction_type: String,
    pub block_timestamp: DateTime<Utc>,
    pub wallet_address: String,
    pub total_value_usd: f64,
}

/// Supervised-learning ground truth, supplied by the caller and passed
/// through unchanged. Serialized as the bare integer the training code
/// expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Label {
    Legit,
    Fraud,
}

impl TryFrom<u8> for Label {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Legit),
            1 => Ok(Label::Fraud),
            other => Err(format!("label must be 0 or 1, got {}", other)),
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        match label {
            Label::Legit => 0,
            Label::Fraud => 1,
        }
    }
}

/// The flat merged entity persisted per run. Field names match the dataset
/// files already on disk, so existing training data stays readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedTokenRecord {
    pub mint: String,
    pub name: String,
    pub symbol: String,
    pub decimals: String,
    pub total_supply: String,
    pub total_supply_formatted: String,
    pub seller_fee_basis_points: u32,
    pub is_mutable: bool,
    pub primary_sale_happened: bool,
    pub update_authority: String,

    pub usd_price: f64,
    pub native_price_value: String,
    pub exchange_name: String,
    pub exchange_address: String,

    pub first_swap_timestamp: DateTime<Utc>,
    pub first_swap_type: String,
    pub first_buyer_or_seller: String,
    pub first_trade_value_usd: f64,

    pub label: Label,
}
