use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::{AppState, dto::AccountQuery, errors::ApiError};
use snowfolio_core::HistoryEntry;

#[utoipa::path(
    get,
    path = "/user/history",
    tag = "User",
    params(
        ("accountPubKey" = String, Query, description = "Wallet address")
    ),
    responses(
        (status = 200, description = "Snapshot history in append order", body = [HistoryEntry]),
        (status = 400, description = "Account is not tracked")
    )
)]
pub async fn get_user_history(
    State(state): State<AppState>,
    Query(query): Query<AccountQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let address = query.address();

    // Membership is checked before touching the history log.
    if !state.store.is_tracked(&address).await? {
        return Err(ApiError::BadRequest("User does not exist".to_string()));
    }

    let history = state.store.read_history(&address).await?;
    Ok(Json(history))
}
