//! Page renderer for the XS-Labs project website
//!
//! This crate renders the site's page fragments, starting with the
//! XSFoundation download page: a GitHub badge, an instructional paragraph
//! with an internal documentation link, and the repository's latest
//! commits fetched from the GitHub API.

/// Core types (errors).
pub mod core;

pub use crate::core::{XswebError, XswebResult};

/// Configuration management.
pub mod config;

/// GitHub integration for commit lists.
pub mod github;

/// Internal site navigation.
pub mod menu;

/// HTML escaping helpers.
pub mod html;

/// Dependency injection infrastructure.
pub mod di;

/// Site pages.
pub mod pages;
