use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{AppState, dto::DeleteQuery, errors::ApiError};

#[utoipa::path(
    post,
    path = "/users/delete",
    tag = "User",
    params(
        ("accountPubKey" = Option<String>, Query, description = "Wallet address; omit to clear every tracked account")
    ),
    responses(
        (status = 200, description = "History and tracking removed")
    )
)]
pub async fn delete_users(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<impl IntoResponse, ApiError> {
    match query.account_pub_key {
        Some(raw) => {
            let address = raw.to_lowercase();
            state.store.delete_history(&address).await?;
            state.store.remove_tracked(&address).await?;
            tracing::info!(%address, "stopped tracking account");
        }
        None => {
            let addresses = state.store.tracked_addresses().await?;
            for address in &addresses {
                state.store.delete_history(address).await?;
                state.store.remove_tracked(address).await?;
            }
            tracing::info!(accounts = addresses.len(), "cleared all tracked accounts");
        }
    }

    Ok(StatusCode::OK)
}
