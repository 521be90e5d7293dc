use serde::Serialize;

use super::display::DisplayTree;
use super::error::PresentationError;

/// Which surface a page shows.
///
/// `Content` and `Error` are terminal: once settled, a page never returns
/// to `Loading` and never switches between the two.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PresentationState {
    #[default]
    Loading,
    Content { tree: DisplayTree },
    Error { message: String },
}

impl PresentationState {
    pub fn name(&self) -> &'static str {
        match self {
            PresentationState::Loading => "loading",
            PresentationState::Content { .. } => "content",
            PresentationState::Error { .. } => "error",
        }
    }
}

/// Visibility of the three page surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub loading: bool,
    pub content: bool,
    pub error: bool,
}

/// State machine driving the loading / content / error surfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Presentation {
    state: PresentationState,
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PresentationState::Loading)
    }

    /// Reveals the content surface with the projected tree.
    pub fn show_content(&mut self, tree: DisplayTree) -> Result<(), PresentationError> {
        self.settle(PresentationState::Content { tree })
    }

    /// Reveals the error surface with `message` shown verbatim.
    pub fn show_error(&mut self, message: impl Into<String>) -> Result<(), PresentationError> {
        self.settle(PresentationState::Error {
            message: message.into(),
        })
    }

    pub fn visibility(&self) -> Visibility {
        Visibility {
            loading: matches!(self.state, PresentationState::Loading),
            content: matches!(self.state, PresentationState::Content { .. }),
            error: matches!(self.state, PresentationState::Error { .. }),
        }
    }

    /// Tree being displayed, once the page reached `Content`.
    pub fn tree(&self) -> Option<&DisplayTree> {
        match &self.state {
            PresentationState::Content { tree } => Some(tree),
            _ => None,
        }
    }

    /// Message being displayed, once the page reached `Error`.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            PresentationState::Error { message } => Some(message),
            _ => None,
        }
    }

    fn settle(&mut self, next: PresentationState) -> Result<(), PresentationError> {
        if !self.is_loading() {
            return Err(PresentationError::settled(&self.state));
        }
        self.state = next;
        Ok(())
    }
}
