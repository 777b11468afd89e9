use crate::types::{epoch, Label, MetadataRecord, PriceRecord, TradeRecord, UnifiedTokenRecord};

/// Merge the three normalized records and the caller-supplied label into the
/// flat persisted schema. Pure and infallible: every output field maps from
/// exactly one input, and an absent first trade collapses to zero values
/// (empty strings, epoch timestamp, 0.0 USD).
pub fn aggregate(
    meta: MetadataRecord,
    price: PriceRecord,
    first_trade: Option<TradeRecord>,
    label: Label,
) -> UnifiedTokenRecord {
    let trade = first_trade.unwrap_or_else(|| TradeRecord {
        transaction_type: String::new(),
        block_timestamp: epoch(),
        wallet_address: String::new(),
        total_value_usd: 0.0,
    });

    UnifiedTokenRecord {
        mint: meta.mint,
        name: meta.name,
        symbol: meta.symbol,
        decimals: meta.decimals,
        total_supply: meta.total_supply,
        total_supply_formatted: meta.total_supply_formatted,
        seller_fee_basis_points: meta.seller_fee_basis_points,
        is_mutable: meta.is_mutable,
        primary_sale_happened: meta.primary_sale_happened,
        update_authority: meta.update_authority,

        usd_price: price.usd_price,
        native_price_value: price.native_price_value,
        exchange_name: price.exchange_name,
        exchange_address: price.exchange_address,

        first_swap_timestamp: trade.block_timestamp,
        first_swap_type: trade.transaction_type,
        first_buyer_or_seller: trade.wallet_address,
        first_trade_value_usd: trade.total_value_usd,

        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_meta() -> MetadataRecord {
        MetadataRecord {
            mint: "M1".to_string(),
            name: "Foo".to_string(),
            symbol: "FOO".to_string(),
            decimals: "6".to_string(),
            total_supply: "1000000000".to_string(),
            total_supply_formatted: "1000".to_string(),
            seller_fee_basis_points: 0,
            is_mutable: true,
            primary_sale_happened: false,
            update_authority: "AUTH".to_string(),
        }
    }

    fn sample_price() -> PriceRecord {
        PriceRecord {
            usd_price: 0.0042,
            native_price_value: "1000".to_string(),
            exchange_name: "Raydium".to_string(),
            exchange_address: "EX".to_string(),
        }
    }

    #[test]
    fn merges_all_three_sources_and_label() {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let trade = TradeRecord {
            transaction_type: "buy".to_string(),
            block_timestamp: t0,
            wallet_address: "W1".to_string(),
            total_value_usd: 50.0,
        };

        let record = aggregate(sample_meta(), sample_price(), Some(trade), Label::Legit);

        assert_eq!(record.mint, "M1");
        assert_eq!(record.usd_price, 0.0042);
        assert_eq!(record.first_swap_type, "buy");
        assert_eq!(record.first_buyer_or_seller, "W1");
        assert_eq!(record.first_swap_timestamp, t0);
        assert_eq!(record.label, Label::Legit);
    }

    #[test]
    fn missing_trade_takes_zero_values() {
        let record = aggregate(sample_meta(), sample_price(), None, Label::Fraud);

        assert_eq!(record.first_swap_type, "");
        assert_eq!(record.first_buyer_or_seller, "");
        assert_eq!(record.first_trade_value_usd, 0.0);
        assert_eq!(record.first_swap_timestamp, epoch());
        assert_eq!(record.label, Label::Fraud);
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let a = aggregate(sample_meta(), sample_price(), None, Label::Legit);
        let b = aggregate(sample_meta(), sample_price(), None, Label::Legit);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_vec(&a).unwrap(),
            serde_json::to_vec(&b).unwrap()
        );
    }

    #[test]
    fn label_passes_through_unchanged() {
        let legit = aggregate(sample_meta(), sample_price(), None, Label::Legit);
        let fraud = aggregate(sample_meta(), sample_price(), None, Label::Fraud);
        assert_eq!(u8::from(legit.label), 0);
        assert_eq!(u8::from(fraud.label), 1);
    }
}
