use crate::{error::ProtocolError, types::BalancesResponse};

/// Upstream balance provider, scoped to one protocol per query.
#[async_trait::async_trait]
pub trait BalanceSource: Send + Sync {
    async fn protocol_balances(
        &self,
        protocol: &str,
        address: &str,
    ) -> Result<BalancesResponse, ProtocolError>;
}
