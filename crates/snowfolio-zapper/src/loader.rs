use std::sync::Arc;

use crate::{
    error::ProtocolError,
    traits::BalanceSource,
    types::RawAsset,
};

/// Everything that distinguishes one tracked protocol from another.
///
/// Both products live behind the same provider endpoint shape, so a single
/// loader parameterized by this struct replaces per-protocol copies.
#[derive(Debug, Clone, Copy)]
pub struct ProtocolSpec {
    /// Provider slug, used both in the balances URL and as the `appId` tag.
    pub id: &'static str,
    /// Product label to locate inside the provider response.
    pub product_label: &'static str,
    /// Extra position-type filter, when the product mixes position kinds.
    pub position_type: Option<&'static str>,
}

impl ProtocolSpec {
    /// Wonderland staking positions.
    pub const WONDERLAND: Self = Self {
        id: "wonderland",
        product_label: "Wonderland",
        position_type: None,
    };

    /// Abracadabra leveraged positions.
    pub const ABRACADABRA: Self = Self {
        id: "abracadabra",
        product_label: "Abracadabra",
        position_type: Some("leveraged-position"),
    };
}

#[derive(Clone)]
pub struct ProtocolLoader {
    source: Arc<dyn BalanceSource>,
    spec: ProtocolSpec,
}

impl ProtocolLoader {
    pub fn new(source: Arc<dyn BalanceSource>, spec: ProtocolSpec) -> Self {
        Self { source, spec }
    }

    pub const fn spec(&self) -> &ProtocolSpec {
        &self.spec
    }

    /// Fetch the wallet's raw holdings for this protocol.
    ///
    /// Returns the provider-shaped assets pre-flattening; `NotFound` when the
    /// wallet holds nothing matching the spec's product and tags.
    pub async fn load(&self, address: &str) -> Result<Vec<RawAsset>, ProtocolError> {
        let balances = self.source.protocol_balances(self.spec.id, address).await?;

        let product = balances
            .account(address)
            .and_then(|account| {
                account
                    .products
                    .iter()
                    .find(|product| product.label == self.spec.product_label)
            })
            .ok_or_else(|| ProtocolError::not_found(self.spec.product_label))?;

        if product.assets.is_empty() {
            return Err(ProtocolError::not_found(self.spec.product_label));
        }

        let assets: Vec<RawAsset> = product
            .assets
            .iter()
            .filter(|asset| asset.app_id == self.spec.id)
            .filter(|asset| {
                self.spec
                    .position_type
                    .is_none_or(|wanted| asset.position_type == wanted)
            })
            .cloned()
            .collect();

        if assets.is_empty() {
            return Err(ProtocolError::not_found(self.spec.product_label));
        }

        Ok(assets)
    }
}
