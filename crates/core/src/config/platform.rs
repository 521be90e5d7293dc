use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Social platforms a profile can link to.
///
/// The declaration order is the display order of the social section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Twitter,
    Github,
    Linkedin,
    Youtube,
    Discord,
    Instagram,
    Tiktok,
    Twitch,
}

impl SocialPlatform {
    /// All platforms, in display order.
    pub const ALL: [SocialPlatform; 8] = [
        SocialPlatform::Twitter,
        SocialPlatform::Github,
        SocialPlatform::Linkedin,
        SocialPlatform::Youtube,
        SocialPlatform::Discord,
        SocialPlatform::Instagram,
        SocialPlatform::Tiktok,
        SocialPlatform::Twitch,
    ];

    /// Key used for this platform in the `social` mapping.
    pub fn key(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Github => "github",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Discord => "discord",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Tiktok => "tiktok",
            SocialPlatform::Twitch => "twitch",
        }
    }

    /// Glyph shown for the platform's link.
    pub fn icon(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "🐦",
            SocialPlatform::Github => "🐙",
            SocialPlatform::Linkedin => "💼",
            SocialPlatform::Youtube => "📺",
            SocialPlatform::Discord => "💬",
            SocialPlatform::Instagram => "📷",
            SocialPlatform::Tiktok => "🎵",
            SocialPlatform::Twitch => "🎮",
        }
    }

    /// Profile URL prefix; the handle is appended verbatim.
    pub fn base_url(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "https://twitter.com/",
            SocialPlatform::Github => "https://github.com/",
            SocialPlatform::Linkedin => "https://linkedin.com/in/",
            SocialPlatform::Youtube => "https://youtube.com/@",
            SocialPlatform::Discord => "https://discord.gg/",
            SocialPlatform::Instagram => "https://instagram.com/",
            SocialPlatform::Tiktok => "https://tiktok.com/@",
            SocialPlatform::Twitch => "https://twitch.tv/",
        }
    }

    /// Full profile URL for a handle.
    pub fn profile_url(&self, handle: &str) -> String {
        format!("{}{}", self.base_url(), handle)
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SocialPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.key() == s)
            .ok_or_else(|| format!("unknown social platform: {s}"))
    }
}
