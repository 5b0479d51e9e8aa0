use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use super::version::ReleaseVersion;

/// A named, versioned point in history derived from a tag.
///
/// Created once by the release miner; the commit miner fills `commits`,
/// `shared_commits` and the raw boundary, the base resolver fills
/// `base_releases` and `main_base_release`. Read-only afterwards.
#[derive(Debug, Clone)]
pub struct Release {
    /// Unique key within the release set
    pub name: String,
    pub version: ReleaseVersion,
    /// Commit id the originating tag points to
    pub head: String,
    pub time: DateTime<Utc>,
    /// Commits first reached from this release's head (first-claim-wins)
    pub commits: BTreeSet<String>,
    /// Direct, non-redundant ancestor releases, by name
    pub base_releases: BTreeSet<String>,
    /// Already-claimed commits this release's walk ran into (diagnostic)
    pub shared_commits: BTreeSet<String>,
    /// Most advanced base release, used by delay metrics
    pub main_base_release: Option<String>,
}

impl Release {
    pub fn new(
        name: impl Into<String>,
        version: ReleaseVersion,
        head: impl Into<String>,
        time: DateTime<Utc>,
    ) -> Self {
        Release {
            name: name.into(),
            version,
            head: head.into(),
            time,
            commits: BTreeSet::new(),
            base_releases: BTreeSet::new(),
            shared_commits: BTreeSet::new(),
            main_base_release: None,
        }
    }

    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    /// Releases naming the same head commit are aliases of one another.
    pub fn is_alias_of(&self, other: &Release) -> bool {
        self.head == other.head && self.name != other.name
    }
}
