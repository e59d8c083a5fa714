use rust_decimal::Decimal;

use crate::types::{AccountSummary, CanonicalAsset, ProtocolPosition};

/// USD net worth of a set of holdings.
///
/// Only top-level nodes are summed: a base-asset chain re-states the same
/// economic value at each wrap layer, so descending would double-count it.
pub fn net_worth(assets: &[CanonicalAsset]) -> Decimal {
    assets
        .iter()
        .map(|asset| asset.balance * asset.price)
        .sum()
}

/// Combine both protocols' holdings into one account summary.
pub fn build_summary(
    staked: Vec<CanonicalAsset>,
    leveraged: Vec<CanonicalAsset>,
) -> AccountSummary {
    let staked_balance_usd = net_worth(&staked);
    let leveraged_balance_usd = net_worth(&leveraged);

    AccountSummary {
        staked: ProtocolPosition {
            assets: staked,
            balance_usd: staked_balance_usd,
        },
        leveraged: ProtocolPosition {
            assets: leveraged,
            balance_usd: leveraged_balance_usd,
        },
        total_balance_usd: staked_balance_usd + leveraged_balance_usd,
    }
}
