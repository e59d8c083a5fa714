use axum::{Json, extract::State, response::IntoResponse};

use crate::{AppState, errors::ApiError};

#[utoipa::path(
    get,
    path = "/users",
    tag = "User",
    responses(
        (status = 200, description = "All tracked wallet addresses", body = [String])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let addresses = state.store.tracked_addresses().await?;

    Ok(Json(addresses))
}
