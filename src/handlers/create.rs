use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreateResponse, ItemResponse, NewItem};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// POST /items handler - Create an item
///
/// The body must be a JSON object with a text `name` that is non-empty after
/// trimming. The name is stored exactly as submitted. Validation failures
/// return 400 with no store mutation.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Item created", body = CreateResponse),
        (status = 400, description = "Missing, blank, or non-text name", body = ErrorResponse),
        (status = 500, description = "Document store error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<JsonValue>,
) -> Result<(StatusCode, Json<CreateResponse>), ApiError> {
    let new_item = NewItem::parse(&payload)?;

    let id = state.store.insert(&new_item.name).await?;

    tracing::info!("Created item {} with name {:?}", id, new_item.name);
    Ok((
        StatusCode::CREATED,
        Json(CreateResponse {
            ok: true,
            item: ItemResponse {
                id: id.to_string(),
                name: new_item.name,
            },
        }),
    ))
}
