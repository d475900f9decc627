use crate::error::{ErrorResponse, SiteError};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{MatchedPath, State},
    response::Html,
};

/// GET handler shared by every page route.
///
/// The matched path is looked up in the page table to recover the symbolic
/// name, which drives the active entry in the rendered nav. All nav links are
/// generated from the table, never hard-coded.
#[utoipa::path(
    get,
    path = routes::HOME,
    responses(
        (status = 200, description = "Rendered marketing page", body = String, content_type = "text/html"),
        (status = 500, description = "Matched path missing from the page table", body = ErrorResponse)
    ),
    tag = "pages"
)]
pub async fn page_handler(
    State(state): State<AppState>,
    matched: MatchedPath,
) -> Result<Html<String>, SiteError> {
    let page = resolve_matched(&state, matched.as_str())
        .ok_or_else(|| SiteError::RouteNotInTable(matched.as_str().to_string()))?;

    tracing::debug!("Serving page '{}' for matched path {}", page.name, matched.as_str());
    Ok(Html(render_page(&state, page)))
}

/// Strip the mount prefix from a matched path, then look it up in the table.
/// Nested routers report the full path including the prefix; the table holds
/// the unprefixed form.
fn resolve_matched(state: &AppState, matched: &str) -> Option<&'static routes::PageRoute> {
    let path = match state.config.mount_prefix.as_deref() {
        Some(prefix) => match matched.strip_prefix(prefix) {
            Some("") | Some("/") => routes::HOME,
            Some(rest) => rest,
            None => matched,
        },
        None => matched,
    };
    routes::resolve(path)
}

fn render_page(state: &AppState, active: &routes::PageRoute) -> String {
    let prefix = state.config.mount_prefix.as_deref();
    let title = &state.config.site_title;

    let mut nav = String::new();
    for page in &routes::PAGES {
        let class = if page.name == active.name {
            " class=\"active\""
        } else {
            ""
        };
        nav.push_str(&format!(
            "<li><a{} href=\"{}\">{}</a></li>",
            class,
            routes::page_href(prefix, page.path),
            page.name
        ));
    }

    // Link built from the symbolic name, not the literal path
    let cta = routes::reverse("contact")
        .map(|path| {
            format!(
                "<a class=\"cta\" href=\"{}\">Get in touch</a>",
                routes::page_href(prefix, path)
            )
        })
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body data-page=\"{name}\">\n\
         <header><h1>{title}</h1></header>\n\
         <nav><ul>{nav}</ul></nav>\n\
         <main>\n\
         <p>Learn with us: browse the course, meet the teacher, check the pricing.</p>\n\
         {cta}\n\
         </main>\n\
         </body>\n\
         </html>\n",
        title = title,
        name = active.name,
        nav = nav,
        cta = cta,
    )
}
