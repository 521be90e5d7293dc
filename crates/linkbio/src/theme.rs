//! Theme stylesheet resolution.
//!
//! Resolving a theme never fails from the caller's point of view: a theme
//! that cannot be loaded is logged and the page keeps its baseline style.

use std::sync::Arc;

use linkbio_core::page::{theme_href, theme_name, validate_theme_name, StylesheetSet, ThemeNameError};
use thiserror::Error;

use crate::fetch::{FetchError, Fetcher};

/// Why a theme stylesheet could not be attached. Never leaves this module.
#[derive(Error, Debug)]
enum ThemeLoadError {
    #[error("{0}")]
    InvalidName(#[from] ThemeNameError),

    #[error("stylesheet returned {status} {reason}")]
    Status { status: u16, reason: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// How a theme request was settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeOutcome {
    /// The stylesheet was loaded and attached.
    Applied { theme: String, href: String },
    /// The stylesheet was already attached; nothing was fetched.
    AlreadyAttached { theme: String, href: String },
    /// The stylesheet could not be loaded; baseline styling stays in effect.
    Fallback { theme: String, reason: String },
}

/// Attaches theme stylesheets to a page.
#[derive(Clone)]
pub struct ThemeResolver {
    fetcher: Arc<dyn Fetcher>,
    default_theme: String,
}

impl ThemeResolver {
    pub fn new(fetcher: Arc<dyn Fetcher>, default_theme: impl Into<String>) -> Self {
        Self {
            fetcher,
            default_theme: default_theme.into(),
        }
    }

    /// Resolves `requested` (or the default theme) against `stylesheets`.
    ///
    /// Returns once the stylesheet is attached or known to be unavailable.
    pub async fn resolve(
        &self,
        requested: Option<&str>,
        stylesheets: &mut StylesheetSet,
    ) -> ThemeOutcome {
        let theme = theme_name(requested, &self.default_theme).to_string();

        match self.attach(&theme, stylesheets).await {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!(
                    theme = %theme,
                    error = %error,
                    "Theme {theme} not found, using default styling"
                );
                ThemeOutcome::Fallback {
                    theme,
                    reason: error.to_string(),
                }
            }
        }
    }

    async fn attach(
        &self,
        theme: &str,
        stylesheets: &mut StylesheetSet,
    ) -> Result<ThemeOutcome, ThemeLoadError> {
        validate_theme_name(theme)?;
        let href = theme_href(theme);

        if stylesheets.contains(&href) {
            tracing::debug!(%href, "Theme already attached");
            return Ok(ThemeOutcome::AlreadyAttached {
                theme: theme.to_string(),
                href,
            });
        }

        let response = self.fetcher.fetch(&href).await?;
        if !response.is_success() {
            return Err(ThemeLoadError::Status {
                status: response.status,
                reason: response.reason,
            });
        }

        stylesheets.attach(href.clone());
        tracing::debug!(%href, "Theme attached");
        Ok(ThemeOutcome::Applied {
            theme: theme.to_string(),
            href,
        })
    }
}
