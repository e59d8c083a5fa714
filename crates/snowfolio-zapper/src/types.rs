use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Zapper protocol-balances response, keyed by the queried address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalancesResponse(pub HashMap<String, AddressBalances>);

impl BalancesResponse {
    pub fn account(&self, address: &str) -> Option<&AddressBalances> {
        self.0.get(address)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressBalances {
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub assets: Vec<RawAsset>,
}

/// One asset as the provider shapes it. Missing fields deserialize to
/// defaults rather than rejecting the document; a wrapped position nests
/// its underlying layer under `tokens`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAsset {
    #[serde(default)]
    pub app_id: String,
    #[serde(default, rename = "type")]
    pub position_type: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub price_per_share: Decimal,
    #[serde(default)]
    pub tokens: Vec<RawAsset>,
}
