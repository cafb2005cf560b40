use crate::error::{ApiError, ErrorResponse};
use crate::models::DeleteByIdResponse;
use crate::routes;
use crate::state::AppState;
use crate::store::ItemId;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /items/id/{id} handler - Delete a single item by identifier
///
/// A malformed identifier is a 400 before any store call; a well-formed but
/// absent identifier is a 404. At most one document is ever removed.
#[utoipa::path(
    delete,
    path = routes::ITEMS_BY_ID,
    params(
        ("id" = String, Path, description = "Item identifier (24 character hex string)")
    ),
    responses(
        (status = 200, description = "Item deleted", body = DeleteByIdResponse),
        (status = 400, description = "Invalid id format", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Document store error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_by_id_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<DeleteByIdResponse>), ApiError> {
    let id = ItemId::parse(&id_str)?;

    let deleted = state.store.delete_by_id(id).await?;

    if deleted == 0 {
        tracing::info!("Item not found for deletion: {}", id);
        return Err(ApiError::ItemNotFound(id));
    }

    tracing::info!("Deleted item {}", id);
    Ok((
        StatusCode::OK,
        Json(DeleteByIdResponse {
            ok: true,
            deleted,
            id: id_str,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::{ItemStore, MemoryItemStore};
    use axum::{body::Body, http::Request, routing::delete, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup_test_app() -> (Router, Arc<MemoryItemStore>) {
        let store = MemoryItemStore::new_shared();
        let state = AppState {
            store: store.clone(),
            config: Arc::new(Config {
                mongo_uri: "mongodb://localhost:27017".to_string(),
                db_name: "test_db".to_string(),
                service_port: 3000,
                service_host: "0.0.0.0".to_string(),
            }),
        };

        let app = Router::new()
            .route(crate::routes::ITEMS_BY_ID, delete(delete_by_id_handler))
            .with_state(state);

        (app, store)
    }

    fn delete_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_delete_by_id_success() {
        let (app, store) = setup_test_app();

        let id = store.insert("target").await.unwrap();
        store.insert("bystander").await.unwrap();

        let response = app
            .oneshot(delete_request(&format!("/items/id/{}", id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: DeleteByIdResponse = serde_json::from_slice(&body).unwrap();
        assert!(response_json.ok);
        assert_eq!(response_json.deleted, 1);
        assert_eq!(response_json.id, id.to_string());

        let items = store.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "bystander");
    }

    #[tokio::test]
    async fn test_delete_by_id_invalid_format() {
        let (app, store) = setup_test_app();

        store.insert("untouched").await.unwrap();

        let response = app
            .oneshot(delete_request("/items/id/not-a-valid-id"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("invalid id format"));

        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_by_id_not_found() {
        let (app, store) = setup_test_app();

        store.insert("untouched").await.unwrap();

        // Well-formed id that no document has
        let absent = "507f1f77bcf86cd799439011";
        let response = app
            .oneshot(delete_request(&format!("/items/id/{}", absent)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("item not found"));

        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
