use crate::models::{RouteEntry, SitemapResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /sitemap handler - List the page table
///
/// Returns every route with its symbolic name and the path it is actually
/// served at, mount prefix included.
#[utoipa::path(
    get,
    path = routes::SITEMAP,
    responses(
        (status = 200, description = "The page table", body = SitemapResponse)
    ),
    tag = "sitemap"
)]
pub async fn sitemap_handler(State(state): State<AppState>) -> Json<SitemapResponse> {
    let prefix = state.config.mount_prefix.as_deref();

    let entries: Vec<RouteEntry> = routes::PAGES
        .iter()
        .map(|page| RouteEntry {
            name: page.name.to_string(),
            path: routes::page_href(prefix, page.path),
        })
        .collect();

    let count = entries.len();
    tracing::debug!("Listed {} routes (prefix: {:?})", count, prefix);

    Json(SitemapResponse {
        routes: entries,
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    fn test_app(mount_prefix: Option<&str>) -> Router {
        let state = AppState::new(Config {
            service_host: "127.0.0.1".to_string(),
            service_port: 0,
            site_title: "Test Site".to_string(),
            mount_prefix: mount_prefix.map(str::to_string),
        });

        Router::new()
            .route(crate::routes::SITEMAP, get(sitemap_handler))
            .with_state(state)
    }

    async fn fetch_sitemap(app: Router) -> SitemapResponse {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/sitemap")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_sitemap_lists_every_route() {
        let sitemap = fetch_sitemap(test_app(None)).await;

        assert_eq!(sitemap.count, routes::PAGES.len());
        assert_eq!(sitemap.routes.len(), routes::PAGES.len());

        for (entry, page) in sitemap.routes.iter().zip(routes::PAGES.iter()) {
            assert_eq!(entry.name, page.name);
            assert_eq!(entry.path, page.path);
        }
    }

    #[tokio::test]
    async fn test_sitemap_paths_carry_the_mount_prefix() {
        let sitemap = fetch_sitemap(test_app(Some("/p"))).await;

        assert_eq!(sitemap.count, routes::PAGES.len());
        for entry in &sitemap.routes {
            assert!(
                entry.path == "/p" || entry.path.starts_with("/p/"),
                "path {} should be under the prefix",
                entry.path
            );
            assert!(!entry.path.contains("//"), "path {} has a double slash", entry.path);
        }
    }
}
