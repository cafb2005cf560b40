use crate::error::{ApiError, ErrorResponse};
use crate::models::DeleteAllResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// DELETE /items handler - Delete every item
///
/// Always succeeds; deleting from an empty collection reports zero.
#[utoipa::path(
    delete,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items deleted", body = DeleteAllResponse),
        (status = 500, description = "Document store error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_all_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<DeleteAllResponse>), ApiError> {
    let deleted = state.store.delete_all().await?;

    tracing::info!("Deleted all {} items", deleted);
    Ok((StatusCode::OK, Json(DeleteAllResponse { ok: true, deleted })))
}
