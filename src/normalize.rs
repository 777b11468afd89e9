use crate::types::{
    epoch, MetadataRecord, PriceRecord, RawMetadata, RawPrice, RawSwapsPage, TradeRecord,
};

/// Flatten token metadata. The metaplex sub-object is frequently absent for
/// fresh pump.fun mints; its fields then take zero values instead of
/// aborting the run.
pub fn normalize_metadata(raw: RawMetadata) -> MetadataRecord {
    let metaplex = raw.metaplex.unwrap_or_default();
    MetadataRecord {
        mint: raw.mint,
        name: raw.name,
        symbol: raw.symbol,
        decimals: raw.decimals,
        total_supply: raw.total_supply,
        total_supply_formatted: raw.total_supply_formatted,
        seller_fee_basis_points: metaplex.seller_fee_basis_points,
        is_mutable: metaplex.is_mutable,
        primary_sale_happened: metaplex.primary_sale_happened == 1,
        update_authority: metaplex.update_authority,
    }
}

/// Flatten the price quote. The native price stays a string to preserve the
/// provider's arbitrary precision.
pub fn normalize_price(raw: RawPrice) -> PriceRecord {
    PriceRecord {
        usd_price: raw.usd_price,
        native_price_value: raw.native_price.unwrap_or_default().value,
        exchange_name: raw.exchange_name,
        exchange_address: raw.exchange_address,
    }
}

/// Pick the earliest swap. The page is requested with `order=ASC&limit=1`,
/// so index 0 is the oldest trade the provider knows about. An empty page
/// means the token has never traded, which is data, not an error.
pub fn normalize_trades(raw: RawSwapsPage) -> Option<TradeRecord> {
    let first = raw.result.into_iter().next()?;
    Some(TradeRecord {
        transaction_type: first.transaction_type,
        block_timestamp: first.block_timestamp.unwrap_or_else(epoch),
        wallet_address: first.wallet_address,
        total_value_usd: first.total_value_usd,
    })
}
