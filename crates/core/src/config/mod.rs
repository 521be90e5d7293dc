mod error;
mod platform;
mod types;
mod validation;

pub use error::{ConfigError, ValidationError};
pub use platform::SocialPlatform;
pub use types::{Configuration, Link, Profile};
pub use validation::{parse_configuration, validate_document, ValidationPolicy};

/// Relative path of the configuration document inside a site.
pub const DEFAULT_CONFIG_PATH: &str = "./content/data.json";
