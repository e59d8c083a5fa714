use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::{AppState, dto::AccountQuery, errors::ApiError};
use snowfolio_core::AccountSummary;

#[utoipa::path(
    get,
    path = "/user/assets",
    tag = "User",
    params(
        ("accountPubKey" = String, Query, description = "Wallet address")
    ),
    responses(
        (status = 200, description = "Current position across both protocols", body = AccountSummary),
        (status = 404, description = "Account holds no tracked assets"),
        (status = 502, description = "Balance provider unreachable")
    )
)]
pub async fn get_user_assets(
    State(state): State<AppState>,
    Query(query): Query<AccountQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state.accounts.account_info(&query.address()).await?;

    Ok(Json(summary))
}
