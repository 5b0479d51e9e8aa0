//! Domain types - pure data shapes independent of git operations

pub mod commit;
pub mod release;
pub mod tag;
pub mod version;

pub use commit::Commit;
pub use release::Release;
pub use tag::Tag;
pub use version::ReleaseVersion;
