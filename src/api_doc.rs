use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{
    CreateResponse, DeleteAllResponse, DeleteByIdResponse, DeleteByNameResponse, ItemResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "item-service API",
        version = "1.0.0",
        description = "A minimal named-record collection backed by a document store"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::delete_by_name::delete_by_name_handler,
        handlers::delete_by_id::delete_by_id_handler,
        handlers::delete_all::delete_all_handler
    ),
    components(
        schemas(
            ItemResponse,
            CreateResponse,
            DeleteByNameResponse,
            DeleteByIdResponse,
            DeleteAllResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item collection operations")
    )
)]
pub struct ApiDoc;
