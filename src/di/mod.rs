//! Dependency injection infrastructure
//!
//! This module provides trait-based dependency injection so pages receive
//! their collaborators explicitly instead of reaching for process-wide
//! singletons, and so tests can substitute stubs.
//!
//! # Example (Production)
//! ```no_run
//! use xsweb::di::ServiceContainer;
//!
//! # fn example() -> xsweb::core::XswebResult<()> {
//! let container = ServiceContainer::new()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example (Testing)
//! ```
//! use xsweb::di::{mocks::*, ServiceContainer};
//! use std::sync::Arc;
//!
//! let config = Arc::new(MockConfigProvider::default());
//! let menu = Arc::new(MockMenuProvider::new());
//! let commits = Arc::new(MockCommitProvider::new());
//!
//! let container = ServiceContainer::with_providers(config, menu, commits);
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::{CommitProvider, ConfigProvider, MenuProvider};
