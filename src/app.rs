use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{
    create_handler, delete_all_handler, delete_by_id_handler, delete_by_name_handler,
    health_handler, home_handler, list_handler,
};
use crate::routes;
use crate::state::AppState;

/// Assemble the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(routes::HOME, get(home_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(
            routes::ITEMS,
            get(list_handler)
                .post(create_handler)
                .delete(delete_all_handler),
        )
        .route(routes::ITEMS_BY_NAME, delete(delete_by_name_handler))
        .route(routes::ITEMS_BY_ID, delete(delete_by_id_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
