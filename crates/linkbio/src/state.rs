use std::path::PathBuf;
use std::sync::Arc;

use crate::pipeline::Pipeline;

/// Shared state for the page server.
#[derive(Clone)]
pub struct AppState {
    /// Pipeline run afresh for every page request.
    pub pipeline: Arc<Pipeline>,
    /// Site directory whose `styles/` and `content/` are served, if local.
    pub site_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(pipeline: Pipeline, site_dir: Option<PathBuf>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            site_dir,
        }
    }
}
