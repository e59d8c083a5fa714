use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};

use utoipa::OpenApi as OpenApiT;
use utoipa_swagger_ui::SwaggerUi;

use crate::{AppState, handlers};

pub fn api_router<T: OpenApiT>(_state: AppState) -> Router<AppState> {
    let open_api = T::openapi();

    Router::new()
        .route("/health", get(health))
        .route("/user/assets", get(handlers::get_user_assets))
        .route("/user/history", get(handlers::get_user_history))
        .route(
            "/users",
            get(handlers::list_users).post(handlers::register_user),
        )
        .route("/users/delete", post(handlers::delete_users))
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", open_api))
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
