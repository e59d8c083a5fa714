use snowfolio_core::{AccountSummary, CanonicalAsset, HistoryEntry, ProtocolPosition};
use utoipa::OpenApi;

use crate::dto::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::users::assets::get_user_assets,
        crate::handlers::users::history::get_user_history,
        crate::handlers::users::register::register_user,
        crate::handlers::users::delete::delete_users,
        crate::handlers::users::list::list_users,
    ),
    components(schemas(
        AccountSummary,
        ProtocolPosition,
        CanonicalAsset,
        HistoryEntry,
        ErrorResponse
    )),
    tags(
        (name = "User", description = "Wallet position and snapshot history endpoints"),
    )
)]
pub struct ApiDoc;
