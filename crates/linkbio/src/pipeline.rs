//! The page pipeline: load configuration, resolve the theme, project content.
//!
//! Each run works on its own [`PageContext`]; nothing is cached between runs.

use std::sync::Arc;

use linkbio_core::config::{ConfigError, ValidationPolicy};
use linkbio_core::page::{project, DisplayTree, Presentation, StylesheetSet};
use thiserror::Error;

use crate::config::Config;
use crate::fetch::Fetcher;
use crate::loader::load_configuration;
use crate::theme::{ThemeOutcome, ThemeResolver};

/// Errors that send a page to its error surface.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Everything one pipeline run produces for the surface.
#[derive(Debug, Default)]
pub struct PageContext {
    pub stylesheets: StylesheetSet,
    pub presentation: Presentation,
    /// How the theme request settled; `None` until the configuration loads.
    pub theme: Option<ThemeOutcome>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Runs the page pipeline against one site.
#[derive(Clone)]
pub struct Pipeline {
    fetcher: Arc<dyn Fetcher>,
    config_path: String,
    validation: ValidationPolicy,
    themes: ThemeResolver,
}

impl Pipeline {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &Config) -> Self {
        Self {
            themes: ThemeResolver::new(fetcher.clone(), config.default_theme.clone()),
            fetcher,
            config_path: config.config_path.clone(),
            validation: config.validation,
        }
    }

    /// Runs the pipeline on a fresh page.
    pub async fn run(&self) -> PageContext {
        let mut page = PageContext::new();
        self.run_into(&mut page).await;
        page
    }

    /// Runs the pipeline on `page` and settles its presentation.
    ///
    /// A page that already settled keeps its first outcome.
    pub async fn run_into(&self, page: &mut PageContext) {
        let settled = match self.build(page).await {
            Ok(tree) => page.presentation.show_content(tree),
            Err(error) => {
                tracing::error!(error = %error, "Failed to initialize link-in-bio page");
                page.presentation.show_error(error.to_string())
            }
        };

        if let Err(error) = settled {
            tracing::warn!(error = %error, "Discarding pipeline result");
        }
    }

    async fn build(&self, page: &mut PageContext) -> Result<DisplayTree, PipelineError> {
        let config =
            load_configuration(self.fetcher.as_ref(), &self.config_path, self.validation).await?;

        let outcome = self
            .themes
            .resolve(config.theme.as_deref(), &mut page.stylesheets)
            .await;
        match &outcome {
            ThemeOutcome::Applied { theme, href } => {
                tracing::info!(%theme, %href, "Theme applied");
            }
            ThemeOutcome::AlreadyAttached { theme, href } => {
                tracing::debug!(%theme, %href, "Theme already attached");
            }
            ThemeOutcome::Fallback { theme, reason } => {
                tracing::debug!(%theme, %reason, "Rendering with baseline styling");
            }
        }
        page.theme = Some(outcome);

        Ok(project(&config))
    }
}
