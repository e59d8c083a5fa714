use std::sync::Arc;

use chrono::Utc;
use snowfolio_core::{AccountInfoService, HistoryEntry};
use snowfolio_store::{HistoryStore, StoreError};
use tokio::sync::{Mutex, Semaphore};
use tokio::task::JoinSet;

/// Upstream lookups in flight at once during a tick.
const MAX_CONCURRENT_LOOKUPS: usize = 8;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub snapshots: usize,
    pub failures: usize,
}

/// Periodic net-worth snapshotting over every tracked account.
#[derive(Clone)]
pub struct SnapshotService {
    accounts: AccountInfoService,
    store: Arc<dyn HistoryStore>,
    tick_guard: Arc<Mutex<()>>,
}

impl SnapshotService {
    pub fn new(accounts: AccountInfoService, store: Arc<dyn HistoryStore>) -> Self {
        Self {
            accounts,
            store,
            tick_guard: Arc::new(Mutex::new(())),
        }
    }

    /// Run one snapshot batch.
    ///
    /// One timestamp is captured for the whole batch; accounts are valued
    /// through a bounded task group and each success appends one history
    /// entry. A failing account never aborts the batch, it is only counted
    /// and logged. Returns `None` when the previous tick is still in flight
    /// (ticks never overlap).
    pub async fn run_tick(&self) -> Result<Option<TickReport>, StoreError> {
        let Ok(_guard) = self.tick_guard.try_lock() else {
            tracing::warn!("📸 previous snapshot tick still running, skipping this one");
            return Ok(None);
        };

        let addresses = self.store.tracked_addresses().await?;
        let timestamp = Utc::now().timestamp_millis();
        tracing::info!(accounts = addresses.len(), "📸 Starting snapshot tick...");

        let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENT_LOOKUPS));
        let mut tasks = JoinSet::new();

        for address in addresses {
            let accounts = self.accounts.clone();
            let store = Arc::clone(&self.store);
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    // The semaphore is never closed while tasks run.
                    Err(_) => return false,
                };

                Self::snapshot_account(&accounts, store.as_ref(), &address, timestamp).await
            });
        }

        let mut report = TickReport::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(true) => report.snapshots += 1,
                Ok(false) => report.failures += 1,
                Err(e) => {
                    tracing::error!(error = %e, "🔴 snapshot task panicked");
                    report.failures += 1;
                }
            }
        }

        tracing::info!(
            snapshots = report.snapshots,
            failures = report.failures,
            "📸 Snapshot tick completed"
        );

        Ok(Some(report))
    }

    async fn snapshot_account(
        accounts: &AccountInfoService,
        store: &dyn HistoryStore,
        address: &str,
        timestamp: i64,
    ) -> bool {
        let summary = match accounts.account_info(address).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!(%address, error = %e, "skipping account in snapshot tick");
                return false;
            }
        };

        let entry = HistoryEntry {
            timestamp,
            value: summary.total_balance_usd,
        };

        match store.append_history(address, &entry).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(%address, error = %e, "🔴 failed to append snapshot");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rust_decimal::dec;
    use snowfolio_store::MemoryHistoryStore;
    use snowfolio_zapper::{
        error::ProtocolError,
        traits::BalanceSource,
        types::{AddressBalances, BalancesResponse, Product, RawAsset},
    };

    use super::*;

    /// Yields holdings for one good address and upstream errors for the rest.
    struct OneGoodAddress {
        good: &'static str,
    }

    #[async_trait::async_trait]
    impl BalanceSource for OneGoodAddress {
        async fn protocol_balances(
            &self,
            protocol: &str,
            address: &str,
        ) -> Result<BalancesResponse, ProtocolError> {
            if address != self.good {
                return Err(ProtocolError::upstream(400));
            }

            let mut accounts = HashMap::new();
            if protocol == "wonderland" {
                accounts.insert(
                    address.to_string(),
                    AddressBalances {
                        products: vec![Product {
                            label: "Wonderland".to_string(),
                            assets: vec![RawAsset {
                                app_id: "wonderland".to_string(),
                                position_type: "claimable".to_string(),
                                symbol: "wMEMO".to_string(),
                                price: dec!(100),
                                balance: dec!(2),
                                price_per_share: dec!(1),
                                tokens: Vec::new(),
                            }],
                        }],
                    },
                );
            }
            Ok(BalancesResponse(accounts))
        }
    }

    #[tokio::test]
    async fn failing_account_does_not_abort_the_batch() {
        let store = Arc::new(MemoryHistoryStore::new());
        store.add_tracked("0xbad").await.unwrap();
        store.add_tracked("0xgood").await.unwrap();

        let accounts = AccountInfoService::new(Arc::new(OneGoodAddress { good: "0xgood" }));
        let service = SnapshotService::new(accounts, Arc::clone(&store) as Arc<dyn HistoryStore>);

        let report = service.run_tick().await.unwrap().unwrap();

        assert_eq!(report, TickReport { snapshots: 1, failures: 1 });

        let good_history = store.read_history("0xgood").await.unwrap();
        assert_eq!(good_history.len(), 1);
        assert_eq!(good_history[0].value, dec!(200));
        assert!(store.read_history("0xbad").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn batch_shares_one_timestamp() {
        let store = Arc::new(MemoryHistoryStore::new());
        store.add_tracked("0xgood").await.unwrap();

        let accounts = AccountInfoService::new(Arc::new(OneGoodAddress { good: "0xgood" }));
        let service = SnapshotService::new(accounts, Arc::clone(&store) as Arc<dyn HistoryStore>);

        service.run_tick().await.unwrap().unwrap();
        service.run_tick().await.unwrap().unwrap();

        let history = store.read_history("0xgood").await.unwrap();
        assert_eq!(history.len(), 2);
        // Append order holds across ticks.
        assert!(history[0].timestamp <= history[1].timestamp);
    }
}
