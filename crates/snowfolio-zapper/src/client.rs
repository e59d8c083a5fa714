use std::time::Duration;

use reqwest::Client;

use crate::{error::ProtocolError, traits::BalanceSource, types::BalancesResponse};

/// The only network this deployment tracks.
const NETWORK: &str = "avalanche";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ZapperClient {
    http_client: Client,
    api_endpoint: String,
    api_key: String,
}

impl ZapperClient {
    pub fn new(api_endpoint: &str, api_key: &str) -> Result<Self, ProtocolError> {
        let http_client = http_client()?;

        Ok(Self {
            http_client,
            api_endpoint: api_endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl BalanceSource for ZapperClient {
    async fn protocol_balances(
        &self,
        protocol: &str,
        address: &str,
    ) -> Result<BalancesResponse, ProtocolError> {
        let url = format!("{}/v1/protocols/{protocol}/balances", self.api_endpoint);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("network", NETWORK),
                ("api_key", self.api_key.as_str()),
                ("newBalances", "true"),
                ("addresses[]", address),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtocolError::upstream(status.as_u16()));
        }

        let body = response.json::<BalancesResponse>().await?;
        Ok(body)
    }
}

pub fn http_client() -> Result<Client, ProtocolError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            ProtocolError::Transport(e)
        })
}
