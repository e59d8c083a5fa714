use std::sync::Arc;

use snowfolio_zapper::{
    error::ProtocolError,
    loader::{ProtocolLoader, ProtocolSpec},
    traits::BalanceSource,
};

use crate::{flatten::flatten_assets, types::AccountSummary, valuation::build_summary};

/// Orchestrates both protocol loaders into one account report.
#[derive(Clone)]
pub struct AccountInfoService {
    staking: ProtocolLoader,
    leverage: ProtocolLoader,
}

impl AccountInfoService {
    pub fn new(source: Arc<dyn BalanceSource>) -> Self {
        Self {
            staking: ProtocolLoader::new(Arc::clone(&source), ProtocolSpec::WONDERLAND),
            leverage: ProtocolLoader::new(source, ProtocolSpec::ABRACADABRA),
        }
    }

    /// Resolve the wallet's position across both protocols.
    ///
    /// The loaders run concurrently and a failure on one side degrades that
    /// side to empty holdings rather than failing the request. When both
    /// sides come back empty the staking loader's outcome is surfaced; the
    /// leverage diagnostic is discarded.
    pub async fn account_info(&self, address: &str) -> Result<AccountSummary, ProtocolError> {
        let (staked_result, leveraged_result) =
            tokio::join!(self.staking.load(address), self.leverage.load(address));

        let (staked, staking_outcome) = match staked_result {
            Ok(raw) => (flatten_assets(&raw), None),
            Err(err) => (Vec::new(), Some(err)),
        };

        let leveraged = match leveraged_result {
            Ok(raw) => flatten_assets(&raw),
            Err(err) => {
                tracing::debug!(%address, error = %err, "leverage protocol yielded no assets");
                Vec::new()
            }
        };

        if staked.is_empty() && leveraged.is_empty() {
            return Err(staking_outcome.unwrap_or_else(|| {
                ProtocolError::not_found(self.staking.spec().product_label)
            }));
        }

        Ok(build_summary(staked, leveraged))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rust_decimal::dec;
    use snowfolio_zapper::types::{AddressBalances, BalancesResponse, Product, RawAsset};

    use super::*;

    /// Serves a canned response per protocol slug; unknown slugs get an
    /// empty balances document, which the loader reports as not-found.
    struct StubSource {
        responses: HashMap<&'static str, BalancesResponse>,
    }

    #[async_trait::async_trait]
    impl BalanceSource for StubSource {
        async fn protocol_balances(
            &self,
            protocol: &str,
            _address: &str,
        ) -> Result<BalancesResponse, ProtocolError> {
            Ok(self
                .responses
                .get(protocol)
                .cloned()
                .unwrap_or_else(|| BalancesResponse(HashMap::new())))
        }
    }

    fn product(label: &str, app_id: &str, position_type: &str, price: &str) -> BalancesResponse {
        let asset = RawAsset {
            app_id: app_id.to_string(),
            position_type: position_type.to_string(),
            symbol: "wMEMO".to_string(),
            price: price.parse().unwrap(),
            balance: dec!(1),
            price_per_share: dec!(1),
            tokens: Vec::new(),
        };
        let mut accounts = HashMap::new();
        accounts.insert(
            "0xabc".to_string(),
            AddressBalances {
                products: vec![Product {
                    label: label.to_string(),
                    assets: vec![asset],
                }],
            },
        );
        BalancesResponse(accounts)
    }

    fn service(responses: HashMap<&'static str, BalancesResponse>) -> AccountInfoService {
        AccountInfoService::new(Arc::new(StubSource { responses }))
    }

    #[tokio::test]
    async fn one_sided_holdings_still_produce_a_summary() {
        let mut responses = HashMap::new();
        responses.insert(
            "abracadabra",
            product("Abracadabra", "abracadabra", "leveraged-position", "100"),
        );

        let summary = service(responses).account_info("0xabc").await.unwrap();

        assert_eq!(summary.staked.balance_usd, dec!(0));
        assert!(summary.staked.assets.is_empty());
        assert_eq!(summary.leveraged.balance_usd, dec!(100));
        assert_eq!(summary.total_balance_usd, dec!(100));
    }

    #[tokio::test]
    async fn both_empty_surfaces_staking_outcome_verbatim() {
        let err = service(HashMap::new())
            .account_info("0xabc")
            .await
            .unwrap_err();

        match err {
            ProtocolError::NotFound(message) => {
                assert_eq!(message, "Account does not hold Wonderland assets");
            }
            other => panic!("expected not-found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn both_sides_sum_into_total() {
        let mut responses = HashMap::new();
        responses.insert("wonderland", product("Wonderland", "wonderland", "claimable", "60"));
        responses.insert(
            "abracadabra",
            product("Abracadabra", "abracadabra", "leveraged-position", "40"),
        );

        let summary = service(responses).account_info("0xabc").await.unwrap();

        assert_eq!(summary.total_balance_usd, dec!(100));
    }
}
