use serde::Serialize;

use super::error::ThemeNameError;

/// Theme used when the configuration names none.
pub const DEFAULT_THEME: &str = "technicallyweb3";

/// The theme a configuration asks for, or the fallback.
pub fn theme_name<'a>(requested: Option<&'a str>, fallback: &'a str) -> &'a str {
    requested
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(fallback)
}

/// Rejects names that would escape the styles directory.
pub fn validate_theme_name(name: &str) -> Result<(), ThemeNameError> {
    if name.trim().is_empty() {
        return Err(ThemeNameError::Empty);
    }
    if name.contains(['/', '\\']) || name.contains("..") {
        return Err(ThemeNameError::PathComponent(name.to_string()));
    }
    Ok(())
}

/// Relative stylesheet path for a theme.
pub fn theme_href(name: &str) -> String {
    format!("./styles/{name}.css")
}

/// Stylesheets attached to one page, in attach order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StylesheetSet {
    hrefs: Vec<String>,
}

impl StylesheetSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, href: &str) -> bool {
        self.hrefs.iter().any(|attached| attached == href)
    }

    /// Attaches a stylesheet. Returns `false` if it was already attached.
    pub fn attach(&mut self, href: impl Into<String>) -> bool {
        let href = href.into();
        if self.contains(&href) {
            return false;
        }
        self.hrefs.push(href);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.hrefs.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.hrefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hrefs.is_empty()
    }
}
