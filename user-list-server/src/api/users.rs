use crate::openapi::USERS_TAG;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use log::debug;
use std::collections::HashMap;
use user_list::{Page, PageParams};

/// Lists one page of users.
///
/// Query values are read leniently: anything missing or unparsable falls back
/// to the defaults instead of rejecting the request.
#[utoipa::path(
    get,
    path = "/api/1.0/users",
    tag = USERS_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page index (default: 0)"),
        ("size" = Option<u64>, Query, description = "Users per page (default: 5)"),
    ),
    responses(
        (status = 200, description = "Requested page of users", body = Page)
    )
)]
pub(crate) async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Page> {
    let params = PageParams::from_query(
        query.get("page").map(String::as_str),
        query.get("size").map(String::as_str),
        state.settings.default_page_size,
    )
    .clamp_size(state.settings.max_page_size);
    debug!("Serving users page {} (size {})", params.page, params.size);

    Json(state.users.page(params))
}

pub(super) fn router() -> Router<AppState> {
    Router::new().route("/api/1.0/users", get(list_users))
}
