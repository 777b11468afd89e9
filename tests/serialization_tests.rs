use chrono::{TimeZone, Utc};

use solana_token_dataset::aggregate::aggregate;
use solana_token_dataset::types::{
    Label, MetadataRecord, PriceRecord, TradeRecord, UnifiedTokenRecord,
};

fn meta() -> MetadataRecord {
    MetadataRecord {
        mint: "CzLSujWBLFsSjncfkh59rUFqvafWcY5tzedWJSuypump".to_string(),
        name: "Foo".to_string(),
        symbol: "FOO".to_string(),
        decimals: "6".to_string(),
        total_supply: "998926392635483".to_string(),
        total_supply_formatted: "998926392.635483".to_string(),
        seller_fee_basis_points: 500,
        is_mutable: true,
        primary_sale_happened: true,
        update_authority: "TSLvdd1pWpHVjahSpsvCXUbgwsL3JAcvokwaKt1eokM".to_string(),
    }
}

fn price() -> PriceRecord {
    PriceRecord {
        usd_price: 0.0042,
        native_price_value: "1000".to_string(),
        exchange_name: "Raydium".to_string(),
        exchange_address: "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8".to_string(),
    }
}

fn trade() -> TradeRecord {
    TradeRecord {
        transaction_type: "buy".to_string(),
        block_timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        wallet_address: "W1".to_string(),
        total_value_usd: 50.0,
    }
}

#[test]
fn unified_record_round_trips_through_json() {
    let record = aggregate(meta(), price(), Some(trade()), Label::Fraud);

    let json = serde_json::to_string_pretty(&record).unwrap();
    let decoded: UnifiedTokenRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, record);
}

#[test]
fn serialized_field_names_match_the_dataset_schema() {
    let record = aggregate(meta(), price(), Some(trade()), Label::Legit);
    let value: serde_json::Value = serde_json::to_value(&record).unwrap();

    for key in [
        "mint",
        "name",
        "symbol",
        "decimals",
        "totalSupply",
        "totalSupplyFormatted",
        "sellerFeeBasisPoints",
        "isMutable",
        "primarySaleHappened",
        "updateAuthority",
        "usdPrice",
        "nativePriceValue",
        "exchangeName",
        "exchangeAddress",
        "firstSwapTimestamp",
        "firstSwapType",
        "firstBuyerOrSeller",
        "firstTradeValueUsd",
        "label",
    ] {
        assert!(value.get(key).is_some(), "missing field {}", key);
    }

    assert_eq!(value["label"], serde_json::json!(0));
    assert_eq!(value["firstSwapType"], serde_json::json!("buy"));
}

#[test]
fn identical_inputs_produce_byte_identical_output() {
    let a = aggregate(meta(), price(), Some(trade()), Label::Fraud);
    let b = aggregate(meta(), price(), Some(trade()), Label::Fraud);

    assert_eq!(
        serde_json::to_vec_pretty(&a).unwrap(),
        serde_json::to_vec_pretty(&b).unwrap()
    );
}
