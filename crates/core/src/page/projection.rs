use std::collections::BTreeMap;

use serde_json::Value;

use crate::config::{Configuration, Link, Profile, SocialPlatform};

use super::display::{
    Avatar, CssVariable, DisplayTree, LinkItem, ProfileSection, SocialLink, StyleOverrides,
    DEFAULT_LINK_ICON, GENERIC_AVATAR_ALT, REVEAL_DELAY_STEP_MS,
};

/// Projects a validated configuration into the tree the surface renders.
///
/// Each section is projected independently and is empty when its source
/// field is absent.
pub fn project(config: &Configuration) -> DisplayTree {
    DisplayTree {
        profile: config
            .profile
            .as_ref()
            .map(project_profile)
            .unwrap_or_default(),
        links: config
            .links
            .as_deref()
            .map(project_links)
            .unwrap_or_default(),
        social: config
            .social
            .as_ref()
            .map(project_social)
            .unwrap_or_default(),
        style: config
            .customization
            .as_ref()
            .map(project_customization)
            .unwrap_or_default(),
    }
}

pub fn project_profile(profile: &Profile) -> ProfileSection {
    let name = present(&profile.name);

    let avatar = present(&profile.avatar).map(|src| Avatar {
        alt: name
            .as_ref()
            .map(|name| format!("{name} avatar"))
            .unwrap_or_else(|| GENERIC_AVATAR_ALT.to_string()),
        src,
    });

    ProfileSection {
        avatar,
        name,
        title: present(&profile.title),
        bio: present(&profile.bio),
    }
}

/// One item per link, in document order, with a reveal delay growing by a
/// fixed step per position.
pub fn project_links(links: &[Link]) -> Vec<LinkItem> {
    links
        .iter()
        .zip((0u32..).map(|index| index.saturating_mul(REVEAL_DELAY_STEP_MS)))
        .map(|(link, reveal_delay_ms)| LinkItem {
            href: link.url.clone(),
            aria_label: format!("Visit {}", link.title),
            icon: present(&link.icon).unwrap_or_else(|| DEFAULT_LINK_ICON.to_string()),
            title: link.title.clone(),
            description: present(&link.description),
            reveal_delay_ms,
        })
        .collect()
}

/// Social links in platform order, skipping unknown platforms and handles
/// that are empty or not scalar.
pub fn project_social(social: &BTreeMap<String, Value>) -> Vec<SocialLink> {
    SocialPlatform::ALL
        .into_iter()
        .filter_map(|platform| {
            let handle = social.get(platform.key()).and_then(scalar_text)?;
            Some(SocialLink {
                platform,
                href: platform.profile_url(&handle),
                icon: platform.icon(),
                aria_label: format!("Visit {platform} profile"),
            })
        })
        .collect()
}

/// One CSS variable per non-empty customization entry.
///
/// `background` is also applied directly as the page background. Keys that
/// cannot form a custom property name are skipped, as are values that would
/// break out of a single declaration.
pub fn project_customization(customization: &BTreeMap<String, Value>) -> StyleOverrides {
    let mut style = StyleOverrides::default();

    for (key, value) in customization {
        let Some(value) = scalar_text(value).filter(|value| is_declaration_value(value)) else {
            continue;
        };
        let Some(name) = css_variable_name(key) else {
            continue;
        };
        if key == "background" {
            style.background = Some(value.clone());
        }
        style.variables.push(CssVariable { name, value });
    }

    style
}

/// Converts a camelCase customization key into a custom property name.
///
/// `accentColor` becomes `--accent-color`. Returns `None` for keys with
/// characters outside `[A-Za-z0-9_-]`.
pub fn css_variable_name(key: &str) -> Option<String> {
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return None;
    }

    let mut name = String::with_capacity(key.len() + 4);
    name.push_str("--");
    for (i, c) in key.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                name.push('-');
            }
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    Some(name)
}

/// True when `value` stays inside one `name: value` declaration.
fn is_declaration_value(value: &str) -> bool {
    !value.contains([';', '{', '}', '\n', '\r'])
}

/// A field counts as present when it is set and not blank.
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .filter(|value| !value.trim().is_empty())
        .cloned()
}

/// Text of a non-blank string or a number; anything else is absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(value: serde_json::Value) -> Configuration {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_configuration_projects_nothing() {
        let tree = project(&Configuration::default());
        assert_eq!(tree, DisplayTree::default());
    }

    #[test]
    fn test_profile_subset() {
        let tree = project(&config(json!({ "profile": { "title": "Engineer" } })));

        assert_eq!(tree.profile.title.as_deref(), Some("Engineer"));
        assert!(tree.profile.name.is_none());
        assert!(tree.profile.bio.is_none());
        assert!(tree.profile.avatar.is_none());
    }

    #[test]
    fn test_avatar_alt_uses_name() {
        let section = project_profile(&Profile {
            name: Some("Ada".to_string()),
            avatar: Some("https://example.com/ada.png".to_string()),
            ..Default::default()
        });

        let avatar = section.avatar.unwrap();
        assert_eq!(avatar.src, "https://example.com/ada.png");
        assert_eq!(avatar.alt, "Ada avatar");
    }

    #[test]
    fn test_avatar_alt_without_name() {
        let section = project_profile(&Profile {
            avatar: Some("https://example.com/me.png".to_string()),
            name: Some("   ".to_string()),
            ..Default::default()
        });

        assert_eq!(section.avatar.unwrap().alt, GENERIC_AVATAR_ALT);
        assert!(section.name.is_none());
    }

    #[test]
    fn test_links_preserve_order_and_stagger() {
        let links = vec![
            Link::new("https://c.example", "C"),
            Link::new("https://a.example", "A"),
            Link::new("https://b.example", "B"),
        ];

        let items = project_links(&links);

        let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, ["C", "A", "B"]);
        let delays: Vec<u32> = items.iter().map(|item| item.reveal_delay_ms).collect();
        assert_eq!(delays, [0, 100, 200]);
        for pair in items.windows(2) {
            assert_eq!(
                pair[1].reveal_delay_ms - pair[0].reveal_delay_ms,
                REVEAL_DELAY_STEP_MS
            );
        }
    }

    #[test]
    fn test_link_defaults_and_optional_description() {
        let items = project_links(&[
            Link::new("https://example.com", "Plain"),
            Link::new("https://example.org", "Rich")
                .with_icon("⭐")
                .with_description("Stars"),
            Link::new("https://example.net", "Blank").with_description(""),
        ]);

        assert_eq!(items[0].icon, DEFAULT_LINK_ICON);
        assert_eq!(items[0].aria_label, "Visit Plain");
        assert!(items[0].description.is_none());
        assert_eq!(items[1].icon, "⭐");
        assert_eq!(items[1].description.as_deref(), Some("Stars"));
        assert!(items[2].description.is_none());
    }

    #[test]
    fn test_social_follows_platform_order() {
        let tree = project(&config(json!({
            "social": {
                "twitch": "streamer",
                "github": "ada",
                "myspace": "tom",
                "twitter": "",
                "youtube": null
            }
        })));

        let platforms: Vec<SocialPlatform> =
            tree.social.iter().map(|link| link.platform).collect();
        assert_eq!(platforms, [SocialPlatform::Github, SocialPlatform::Twitch]);

        assert_eq!(tree.social[0].href, "https://github.com/ada");
        assert_eq!(tree.social[0].icon, "🐙");
        assert_eq!(tree.social[0].aria_label, "Visit github profile");
        assert_eq!(tree.social[1].href, "https://twitch.tv/streamer");
    }

    #[test]
    fn test_customization_sets_only_named_variable() {
        let tree = project(&config(json!({
            "customization": { "accentColor": "#ff0000" }
        })));

        assert_eq!(tree.style.variables.len(), 1);
        assert_eq!(tree.style.get("--accent-color"), Some("#ff0000"));
        assert!(tree.style.background.is_none());
    }

    #[test]
    fn test_customization_background_has_two_targets() {
        let tree = project(&config(json!({
            "customization": { "background": "linear-gradient(#000, #333)", "textColor": "" }
        })));

        assert_eq!(
            tree.style.get("--background"),
            Some("linear-gradient(#000, #333)")
        );
        assert_eq!(
            tree.style.background.as_deref(),
            Some("linear-gradient(#000, #333)")
        );
        assert_eq!(tree.style.variables.len(), 1);
    }

    #[test]
    fn test_social_skips_structured_and_unknown_entries() {
        let tree = project(&config(json!({
            "social": {
                "mastodon": { "server": "x", "user": "ada" },
                "github": { "user": "ada" },
                "twitter": 1234,
                "youtube": false
            }
        })));

        assert_eq!(tree.social.len(), 1);
        assert_eq!(tree.social[0].platform, SocialPlatform::Twitter);
        assert_eq!(tree.social[0].href, "https://twitter.com/1234");
    }

    #[test]
    fn test_customization_rejects_values_that_leave_the_declaration() {
        let tree = project(&config(json!({
            "customization": {
                "accentColor": "#ff0000; --text-color: black",
                "background": "red } body { color: blue",
                "linkColor": "blue\n--x: 1",
                "borderRadius": 8,
                "textColor": "#222"
            }
        })));

        assert_eq!(tree.style.get("--accent-color"), None);
        assert_eq!(tree.style.get("--background"), None);
        assert!(tree.style.background.is_none());
        assert_eq!(tree.style.get("--link-color"), None);
        assert_eq!(tree.style.get("--border-radius"), Some("8"));
        assert_eq!(
            tree.style.root_style().as_deref(),
            Some("--border-radius: 8; --text-color: #222")
        );
    }

    #[test]
    fn test_css_variable_name() {
        assert_eq!(css_variable_name("accentColor").as_deref(), Some("--accent-color"));
        assert_eq!(css_variable_name("background").as_deref(), Some("--background"));
        assert_eq!(css_variable_name("link-color").as_deref(), Some("--link-color"));
        assert_eq!(css_variable_name("Primary").as_deref(), Some("--primary"));
        assert_eq!(css_variable_name(""), None);
        assert_eq!(css_variable_name("x;color"), None);
    }
}
