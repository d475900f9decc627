use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{RouteEntry, SitemapResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "course-site",
        version = "1.0.0",
        description = "A six-page marketing site served from a declarative route table"
    ),
    paths(
        handlers::page::page_handler,
        handlers::health::health_handler,
        handlers::sitemap::sitemap_handler
    ),
    components(
        schemas(
            RouteEntry,
            SitemapResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "pages", description = "Marketing pages"),
        (name = "health", description = "Health check operations"),
        (name = "sitemap", description = "Route table introspection")
    )
)]
pub struct ApiDoc;
