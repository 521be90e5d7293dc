//! Pure link-in-bio logic - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - The configuration document model and its validation
//! - Theme naming and the per-page stylesheet set
//! - The configuration to display-tree projection
//! - The presentation state machine (loading / content / error)
//!
//! # Example
//!
//! ```
//! use linkbio_core::config::{parse_configuration, ValidationPolicy};
//! use linkbio_core::page::{project, Presentation};
//!
//! let body = br#"{
//!     "profile": { "name": "Ada" },
//!     "links": [{ "url": "https://example.com", "title": "Example" }]
//! }"#;
//!
//! let config = parse_configuration(body, ValidationPolicy::Strict).unwrap();
//! let tree = project(&config);
//! assert_eq!(tree.links.len(), 1);
//!
//! let mut presentation = Presentation::default();
//! presentation.show_content(tree).unwrap();
//! assert!(presentation.visibility().content);
//! ```

pub mod config;
pub mod page;
