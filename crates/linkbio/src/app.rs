use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{health::livez, pages::index},
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(index))
        .route("/livez", get(livez));

    // Theme stylesheets and the document itself are served next to the page
    // so relative hrefs resolve.
    if let Some(site_dir) = &state.site_dir {
        router = router
            .nest_service("/styles", ServeDir::new(site_dir.join("styles")))
            .nest_service("/content", ServeDir::new(site_dir.join("content")));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
