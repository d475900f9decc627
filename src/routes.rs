// Route paths and the page table - single source of truth for everything the site serves

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

pub const HOME: &str = "/";
pub const ABOUT: &str = "/about";
pub const TEACHER: &str = "/teacher";
pub const COURSE: &str = "/course";
pub const PRICING: &str = "/pricing";
pub const CONTACT: &str = "/contact";

pub const HEALTH: &str = "/health";
pub const SITEMAP: &str = "/sitemap";

/// One entry of the page table: a literal path (no parameters, no wildcards)
/// and the unique symbolic name used to generate links to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRoute {
    pub path: &'static str,
    pub name: &'static str,
}

/// The page table. Ordered, built once, immutable for the life of the process.
/// Every entry dispatches to the same shared page handler.
pub const PAGES: [PageRoute; 6] = [
    PageRoute { path: HOME, name: "home" },
    PageRoute { path: ABOUT, name: "about" },
    PageRoute { path: TEACHER, name: "teacher" },
    PageRoute { path: COURSE, name: "course" },
    PageRoute { path: PRICING, name: "pricing" },
    PageRoute { path: CONTACT, name: "contact" },
];

/// Look up a request path in the page table.
///
/// Exact string match only; the first matching entry in table order wins.
/// Anything not listed returns `None` and is left to the router's default
/// not-found handling.
pub fn resolve(path: &str) -> Option<&'static PageRoute> {
    PAGES.iter().find(|route| route.path == path)
}

/// Reverse lookup: symbolic name back to its literal path, unchanged.
pub fn reverse(name: &str) -> Option<&'static str> {
    PAGES
        .iter()
        .find(|route| route.name == name)
        .map(|route| route.path)
}

/// The URL a table path is served at under an optional mount prefix.
///
/// The prefix is expected in its normalized form (leading slash, no trailing
/// slash), so concatenation never produces a double slash. The root path
/// collapses onto the prefix itself.
pub fn page_href(prefix: Option<&str>, path: &str) -> String {
    match prefix {
        None => path.to_string(),
        Some(prefix) if path == HOME => prefix.to_string(),
        Some(prefix) => format!("{}{}", prefix, path),
    }
}

/// Build the page router from the table. Every path gets the same handler;
/// the table, not this function, decides what the site serves.
pub fn pages_router() -> Router<AppState> {
    PAGES.iter().fold(Router::new(), |router, page| {
        router.route(page.path, get(handlers::page::page_handler))
    })
}

/// Assemble the full application: pages (nested under the configured mount
/// prefix when one is set), health, sitemap, and the OpenAPI UI.
pub fn app(state: AppState) -> Router {
    let pages = match state.config.mount_prefix.as_deref() {
        Some(prefix) => Router::new().nest(prefix, pages_router()),
        None => pages_router(),
    };

    pages
        .route(HEALTH, get(handlers::health::health_handler))
        .route(SITEMAP, get(handlers::sitemap::sitemap_handler))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
