use thiserror::Error;

use super::presentation::PresentationState;

/// Errors raised by the presentation state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PresentationError {
    #[error("Page already settled in {0} state")]
    AlreadySettled(&'static str),
}

impl PresentationError {
    pub(crate) fn settled(state: &PresentationState) -> Self {
        PresentationError::AlreadySettled(state.name())
    }
}

/// Reasons a theme name cannot be turned into a stylesheet path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeNameError {
    #[error("Theme name cannot be empty")]
    Empty,
    #[error("Theme name contains a path component: {0}")]
    PathComponent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_error_display() {
        assert_eq!(
            PresentationError::AlreadySettled("error").to_string(),
            "Page already settled in error state"
        );
    }

    #[test]
    fn test_theme_name_error_display() {
        assert_eq!(
            ThemeNameError::PathComponent("../x".to_string()).to_string(),
            "Theme name contains a path component: ../x"
        );
    }
}
