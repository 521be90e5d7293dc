use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{ConfigError, ValidationError};
use super::types::Configuration;

/// Which top-level sections a document must carry to be accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// `profile` and `links` are required.
    #[default]
    Strict,
    /// Any non-empty object is accepted.
    Lenient,
}

impl ValidationPolicy {
    /// Top-level sections that must be present and non-null.
    pub fn required_sections(&self) -> &'static [&'static str] {
        match self {
            ValidationPolicy::Strict => &["profile", "links"],
            ValidationPolicy::Lenient => &[],
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationPolicy::Strict => f.write_str("strict"),
            ValidationPolicy::Lenient => f.write_str("lenient"),
        }
    }
}

impl FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ValidationPolicy::Strict),
            "lenient" => Ok(ValidationPolicy::Lenient),
            other => Err(format!("unknown validation policy: {other}")),
        }
    }
}

/// Shallow structural check of a parsed document.
///
/// Only emptiness and the policy's required sections are checked here;
/// field shapes are checked when the document is converted to a
/// [`Configuration`].
pub fn validate_document(document: &Value, policy: ValidationPolicy) -> Result<(), ValidationError> {
    let object = match document {
        Value::Null => return Err(ValidationError::Empty),
        Value::Object(map) if map.is_empty() => return Err(ValidationError::Empty),
        Value::Object(map) => map,
        _ => return Err(ValidationError::NotAnObject),
    };

    let missing: Vec<&'static str> = policy
        .required_sections()
        .iter()
        .copied()
        .filter(|section| object.get(*section).is_none_or(Value::is_null))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingRequiredFields(missing))
    }
}

/// Parses and validates a raw configuration body.
///
/// This is the only place a document is rejected. The returned
/// configuration is the document as written, with no defaults filled in.
pub fn parse_configuration(
    body: &[u8],
    policy: ValidationPolicy,
) -> Result<Configuration, ConfigError> {
    let document: Value =
        serde_json::from_slice(body).map_err(|e| ConfigError::Parse(e.to_string()))?;

    validate_document(&document, policy)?;

    serde_json::from_value(document)
        .map_err(|e| ConfigError::Validation(ValidationError::Malformed(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_document_is_empty() {
        assert_eq!(
            validate_document(&Value::Null, ValidationPolicy::Lenient),
            Err(ValidationError::Empty)
        );
    }

    #[test]
    fn test_empty_object_is_empty_under_both_policies() {
        for policy in [ValidationPolicy::Strict, ValidationPolicy::Lenient] {
            assert_eq!(
                validate_document(&json!({}), policy),
                Err(ValidationError::Empty)
            );
        }
    }

    #[test]
    fn test_array_document_is_rejected() {
        assert_eq!(
            validate_document(&json!([1, 2]), ValidationPolicy::Lenient),
            Err(ValidationError::NotAnObject)
        );
    }

    #[test]
    fn test_strict_requires_profile_and_links() {
        assert_eq!(
            validate_document(&json!({ "theme": "dark" }), ValidationPolicy::Strict),
            Err(ValidationError::MissingRequiredFields(vec![
                "profile", "links"
            ]))
        );
        assert_eq!(
            validate_document(&json!({ "profile": {}, "links": null }), ValidationPolicy::Strict),
            Err(ValidationError::MissingRequiredFields(vec!["links"]))
        );
    }

    #[test]
    fn test_lenient_accepts_missing_links() {
        assert!(validate_document(&json!({ "profile": {} }), ValidationPolicy::Lenient).is_ok());
    }

    #[test]
    fn test_parse_configuration_syntax_error() {
        let result = parse_configuration(b"{ not json", ValidationPolicy::Strict);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parse_configuration_malformed_section() {
        let body = br#"{ "profile": {}, "links": "https://example.com" }"#;
        let result = parse_configuration(body, ValidationPolicy::Strict);
        assert!(matches!(
            result,
            Err(ConfigError::Validation(ValidationError::Malformed(_)))
        ));
    }

    #[test]
    fn test_parse_configuration_returns_document_unmodified() {
        let body = br#"{
            "profile": { "name": "Ada" },
            "links": [{ "url": "https://example.com", "title": "Example" }],
            "extra": true
        }"#;

        let config = parse_configuration(body, ValidationPolicy::Strict).unwrap();

        assert_eq!(config.links.as_ref().map(Vec::len), Some(1));
        assert!(config.theme.is_none());
        assert!(config.customization.is_none());
    }

    #[test]
    fn test_parse_configuration_tolerates_odd_social_entries() {
        let body = br#"{
            "profile": { "name": "Ada" },
            "links": [],
            "social": { "github": "ada", "mastodon": { "server": "x", "user": "ada" }, "twitter": 7 }
        }"#;

        let config = parse_configuration(body, ValidationPolicy::Strict).unwrap();

        assert_eq!(config.social.map(|social| social.len()), Some(3));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Strict".parse::<ValidationPolicy>(), Ok(ValidationPolicy::Strict));
        assert_eq!(" lenient ".parse::<ValidationPolicy>(), Ok(ValidationPolicy::Lenient));
        assert!("loose".parse::<ValidationPolicy>().is_err());
    }
}
