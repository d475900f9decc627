use serde::{Deserialize, Serialize};

/// One route in the sitemap response, with its served path
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteEntry {
    pub name: String,
    pub path: String,
}

/// Response type for the sitemap endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SitemapResponse {
    pub routes: Vec<RouteEntry>,
    pub count: usize,
}
