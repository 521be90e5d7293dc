//! Renders a settled [`PageContext`] to its output surface.

use askama::Template;
use linkbio_core::page::{DisplayTree, Visibility, LINK_REL, LINK_TARGET};
use thiserror::Error;

use crate::pipeline::PageContext;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    Template(#[from] askama::Error),

    #[error("Failed to serialize page: {0}")]
    Json(#[from] serde_json::Error),
}

/// The link-in-bio HTML document.
#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    stylesheets: Vec<&'a str>,
    visibility: Visibility,
    tree: Option<&'a DisplayTree>,
    error_message: &'a str,
    root_style: Option<String>,
    body_style: Option<String>,
    link_target: &'static str,
    link_rel: &'static str,
}

impl<'a> PageTemplate<'a> {
    fn new(page: &'a PageContext) -> Self {
        let tree = page.presentation.tree();
        Self {
            stylesheets: page.stylesheets.iter().collect(),
            visibility: page.presentation.visibility(),
            tree,
            error_message: page.presentation.error_message().unwrap_or_default(),
            root_style: tree.and_then(|tree| tree.style.root_style()),
            body_style: tree.and_then(|tree| tree.style.body_style()),
            link_target: LINK_TARGET,
            link_rel: LINK_REL,
        }
    }
}

/// Renders the page as an HTML document.
pub fn render_page(page: &PageContext) -> Result<String, RenderError> {
    Ok(PageTemplate::new(page).render()?)
}

/// Renders the page's presentation state as JSON.
pub fn render_json(page: &PageContext) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(&page.presentation)?)
}
