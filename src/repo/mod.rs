//! Source-control adapters.
//!
//! The mining core consumes a repository through the narrow
//! [RepositorySource] trait: a tag list and a commit list, nothing else.
//! Concrete implementations:
//!
//! - [git2_source::Git2Source]: reads a real repository via the `git2` crate
//! - [mock::MockSource]: in-memory graphs for tests

pub mod git2_source;
pub mod mock;

pub use git2_source::Git2Source;
pub use mock::MockSource;

use crate::domain::{Commit, Tag};
use crate::error::Result;

/// Read-only view of a repository, materialized once per mining run.
pub trait RepositorySource {
    /// All tags/references that may denote releases.
    fn tags(&self) -> Result<Vec<Tag>>;

    /// Every commit reachable from the tags, with parent ids resolved.
    fn commits(&self) -> Result<Vec<Commit>>;
}
