use crate::error::{ApiError, ErrorResponse};
use crate::models::ItemResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /items handler - List all items
///
/// Returns every item as an `{id, name}` pair in the store's natural order.
/// An empty collection yields an empty array.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items", body = Vec<ItemResponse>),
        (status = 500, description = "Document store error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<ItemResponse>>), ApiError> {
    let items = state.store.list().await?;

    let data: Vec<ItemResponse> = items.into_iter().map(ItemResponse::from).collect();

    tracing::debug!("Listed {} items", data.len());
    Ok((StatusCode::OK, Json(data)))
}
