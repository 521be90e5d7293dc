use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{handlers::AppError, render::render_page, state::AppState};

/// Handler for the link-in-bio page (GET /).
///
/// Runs the whole pipeline for every request. A page that settled on its
/// error surface is still returned as HTML, with a 503 status.
pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let page = state.pipeline.run().await;
    let html = render_page(&page)?;

    let status = if page.presentation.visibility().error {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    Ok((status, Html(html)).into_response())
}
