use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::Utc;

use crate::{AppState, dto::AccountQuery, errors::ApiError};
use snowfolio_core::{AccountSummary, HistoryEntry};

#[utoipa::path(
    post,
    path = "/users",
    tag = "User",
    params(
        ("accountPubKey" = String, Query, description = "Wallet address")
    ),
    responses(
        (status = 200, description = "Position report; account is now tracked", body = AccountSummary),
        (status = 404, description = "Account holds no tracked assets"),
        (status = 502, description = "Balance provider unreachable")
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    Query(query): Query<AccountQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let address = query.address();
    let summary = state.accounts.account_info(&address).await?;

    // First successful lookup starts tracking and seeds the history.
    if !state.store.is_tracked(&address).await? {
        state.store.add_tracked(&address).await?;

        let entry = HistoryEntry {
            timestamp: Utc::now().timestamp_millis(),
            value: summary.total_balance_usd,
        };
        state.store.append_history(&address, &entry).await?;

        tracing::info!(%address, "now tracking account");
    }

    Ok(Json(summary))
}
