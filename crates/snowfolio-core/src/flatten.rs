use snowfolio_zapper::types::RawAsset;

use crate::types::CanonicalAsset;

/// Normalize one provider asset into a canonical chain.
///
/// The chain mirrors the nesting depth exactly, one node per layer, and
/// terminates at the first layer with no nested `tokens`. The provider only
/// ever nests a single token per layer; should it ever send more, the first
/// entry wins and the rest are ignored.
pub fn flatten_asset(raw: &RawAsset) -> CanonicalAsset {
    CanonicalAsset {
        token: raw.symbol.clone(),
        price: raw.price,
        balance: raw.balance,
        price_per_share: raw.price_per_share,
        base_asset: raw
            .tokens
            .first()
            .map(|base| Box::new(flatten_asset(base))),
    }
}

/// Flatten a list of top-level assets independently, preserving upstream order.
pub fn flatten_assets(raw: &[RawAsset]) -> Vec<CanonicalAsset> {
    raw.iter().map(flatten_asset).collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    fn raw(symbol: &str, price: &str, balance: &str, tokens: Vec<RawAsset>) -> RawAsset {
        RawAsset {
            app_id: "wonderland".to_string(),
            position_type: "claimable".to_string(),
            symbol: symbol.to_string(),
            price: price.parse().unwrap(),
            balance: balance.parse().unwrap(),
            price_per_share: dec!(1),
            tokens,
        }
    }

    #[test]
    fn flat_asset_yields_single_node_without_base() {
        let flat = flatten_asset(&raw("TIME", "980.5", "2", Vec::new()));

        assert_eq!(flat.token, "TIME");
        assert_eq!(flat.price, dec!(980.5));
        assert_eq!(flat.balance, dec!(2));
        assert!(flat.base_asset.is_none());
    }

    #[test]
    fn three_deep_nesting_yields_three_node_chain_in_order() {
        let nested = raw(
            "wMEMO",
            "32000",
            "0.5",
            vec![raw(
                "MEMO",
                "640",
                "25",
                vec![raw("TIME", "640", "25", Vec::new())],
            )],
        );

        let chain = flatten_asset(&nested);

        assert_eq!(chain.token, "wMEMO");
        assert_eq!(chain.price, dec!(32000));
        let memo = chain.base_asset.as_deref().unwrap();
        assert_eq!(memo.token, "MEMO");
        assert_eq!(memo.balance, dec!(25));
        let time = memo.base_asset.as_deref().unwrap();
        assert_eq!(time.token, "TIME");
        assert!(time.base_asset.is_none());
    }

    #[test]
    fn multiple_nested_tokens_follow_first_entry_only() {
        let ambiguous = raw(
            "wMEMO",
            "32000",
            "0.5",
            vec![
                raw("MEMO", "640", "25", Vec::new()),
                raw("TIME", "640", "25", Vec::new()),
            ],
        );

        let chain = flatten_asset(&ambiguous);

        let base = chain.base_asset.as_deref().unwrap();
        assert_eq!(base.token, "MEMO");
        assert!(base.base_asset.is_none());
    }

    #[test]
    fn top_level_assets_keep_upstream_order() {
        let assets = vec![
            raw("wMEMO", "32000", "0.5", Vec::new()),
            raw("TIME", "980", "1", Vec::new()),
        ];

        let flattened = flatten_assets(&assets);

        assert_eq!(flattened.len(), 2);
        assert_eq!(flattened[0].token, "wMEMO");
        assert_eq!(flattened[1].token, "TIME");
    }
}
