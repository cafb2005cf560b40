use crate::error::{ApiError, ErrorResponse};
use crate::models::DeleteByNameResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /items/name/{name} handler - Delete every item with a given name
///
/// The name is taken from the path as-is (percent-decoded, not trimmed) and
/// matched exactly. Matching zero items is a 404, not an empty success.
#[utoipa::path(
    delete,
    path = routes::ITEMS_BY_NAME,
    params(
        ("name" = String, Path, description = "Exact name to delete")
    ),
    responses(
        (status = 200, description = "Matching items deleted", body = DeleteByNameResponse),
        (status = 404, description = "No items with that name", body = ErrorResponse),
        (status = 500, description = "Document store error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_by_name_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<DeleteByNameResponse>), ApiError> {
    let deleted = state.store.delete_by_name(&name).await?;

    if deleted == 0 {
        tracing::info!("No items named {:?} to delete", name);
        return Err(ApiError::NameNotFound(name));
    }

    tracing::info!("Deleted {} items named {:?}", deleted, name);
    Ok((
        StatusCode::OK,
        Json(DeleteByNameResponse {
            ok: true,
            deleted,
            name,
        }),
    ))
}
