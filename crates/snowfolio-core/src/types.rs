use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One layer of a wrapped token position, normalized.
///
/// Wrapped positions form a singly-linked chain: each layer wraps at most
/// one underlying token, so `base_asset` points one nesting level down and
/// the chain ends at the innermost unwrapped token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalAsset {
    pub token: String,
    pub price: Decimal,
    pub balance: Decimal,
    pub price_per_share: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(no_recursion)]
    pub base_asset: Option<Box<CanonicalAsset>>,
}

/// A wallet's holdings within one protocol, with their USD value.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProtocolPosition {
    pub assets: Vec<CanonicalAsset>,
    #[serde(rename = "balanceUSD")]
    pub balance_usd: Decimal,
}

/// Account-wide position report across both tracked protocols.
///
/// Recomputed on every request; only `total_balance_usd` is ever persisted,
/// as a history snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountSummary {
    pub staked: ProtocolPosition,
    pub leveraged: ProtocolPosition,
    #[serde(rename = "totalBalanceUSD")]
    pub total_balance_usd: Decimal,
}

/// One net-worth snapshot in an account's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Epoch milliseconds, captured once per snapshot batch.
    pub timestamp: i64,
    pub value: Decimal,
}
