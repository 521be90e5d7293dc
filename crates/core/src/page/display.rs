use serde::Serialize;

use crate::config::SocialPlatform;

/// Glyph used for links that do not name their own icon.
pub const DEFAULT_LINK_ICON: &str = "🔗";

/// Avatar alt text used when the profile has no name.
pub const GENERIC_AVATAR_ALT: &str = "Profile avatar";

/// Extra reveal delay added per link position, in milliseconds.
pub const REVEAL_DELAY_STEP_MS: u32 = 100;

/// Outbound links open in a new browsing context.
pub const LINK_TARGET: &str = "_blank";

/// Outbound links carry no opener or referrer.
pub const LINK_REL: &str = "noopener noreferrer";

/// Everything the surface renders for a successfully loaded configuration.
///
/// Absent configuration fields are absent here too; nothing is rendered as
/// an empty placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayTree {
    pub profile: ProfileSection,
    pub links: Vec<LinkItem>,
    pub social: Vec<SocialLink>,
    pub style: StyleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Avatar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl ProfileSection {
    /// True when no profile field will be displayed.
    pub fn is_empty(&self) -> bool {
        self.avatar.is_none() && self.name.is_none() && self.title.is_none() && self.bio.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Avatar {
    pub src: String,
    pub alt: String,
}

/// One outbound link card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkItem {
    pub href: String,
    pub aria_label: String,
    pub icon: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Animation delay; cosmetic only.
    pub reveal_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub href: String,
    pub icon: &'static str,
    pub aria_label: String,
}

/// A custom property set on the document root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssVariable {
    pub name: String,
    pub value: String,
}

/// Visual overrides coming from the `customization` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleOverrides {
    pub variables: Vec<CssVariable>,
    /// Applied directly to the page body in addition to its variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl StyleOverrides {
    /// Value of a variable by its full name (e.g. `--accent-color`).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|variable| variable.name == name)
            .map(|variable| variable.value.as_str())
    }

    /// Variables as an inline `style` attribute value, if any are set.
    pub fn root_style(&self) -> Option<String> {
        if self.variables.is_empty() {
            return None;
        }
        let declarations: Vec<String> = self
            .variables
            .iter()
            .map(|variable| format!("{}: {}", variable.name, variable.value))
            .collect();
        Some(declarations.join("; "))
    }

    /// Direct background declaration for the body, if set.
    pub fn body_style(&self) -> Option<String> {
        self.background
            .as_ref()
            .map(|background| format!("background: {background}"))
    }
}
