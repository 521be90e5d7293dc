mod display;
mod error;
mod presentation;
mod projection;
mod theme;

pub use display::{
    Avatar, CssVariable, DisplayTree, LinkItem, ProfileSection, SocialLink, StyleOverrides,
    DEFAULT_LINK_ICON, GENERIC_AVATAR_ALT, LINK_REL, LINK_TARGET, REVEAL_DELAY_STEP_MS,
};
pub use error::{PresentationError, ThemeNameError};
pub use presentation::{Presentation, PresentationState, Visibility};
pub use projection::{
    css_variable_name, project, project_customization, project_links, project_profile,
    project_social,
};
pub use theme::{theme_href, theme_name, validate_theme_name, StylesheetSet, DEFAULT_THEME};
