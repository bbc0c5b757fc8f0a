//! GitHub integration for the project site
//!
//! This module provides functionality for interacting with GitHub to:
//! - List recent commits for a repository
//! - Retrieve repository metadata
//!
//! The client returns structured records; turning them into markup is the
//! job of the page layer.

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{GitHubRepo, RepoCommit, RepoId};
