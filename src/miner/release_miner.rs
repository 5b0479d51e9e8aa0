use crate::domain::{Release, Tag};
use crate::matcher::MatcherConfig;
use crate::registry::ReleaseSet;

/// Final iteration/position order of the mined release set.
///
/// Chronological order doubles as the dependency order the commit miner
/// relies on: a release is always processed after the releases its
/// history can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleaseSorter {
    #[default]
    Chronological,
    ByVersion,
}

impl ReleaseSorter {
    pub fn sort(&self, releases: &mut ReleaseSet) {
        match self {
            ReleaseSorter::Chronological => {
                releases.sort_by(|a, b| a.time.cmp(&b.time).then_with(|| a.name.cmp(&b.name)));
            }
            ReleaseSorter::ByVersion => {
                releases.sort_by(|a, b| {
                    a.version
                        .cmp(&b.version)
                        .then_with(|| a.time.cmp(&b.time))
                        .then_with(|| a.name.cmp(&b.name))
                });
            }
        }
    }
}

/// Builds the release registry from the repository's tag list.
pub struct ReleaseMiner {
    matcher: MatcherConfig,
    sorter: ReleaseSorter,
}

impl ReleaseMiner {
    pub fn new(matcher: MatcherConfig, sorter: ReleaseSorter) -> Self {
        ReleaseMiner { matcher, sorter }
    }

    /// Apply the matcher to every tag and collect the accepted ones into
    /// a sorted release set.
    ///
    /// Tags with no resolvable commit target are skipped, not raised.
    /// Two tags pointing at the same commit both become releases; the
    /// commit miner treats them as aliases later.
    pub fn mine(&self, tags: &[Tag]) -> ReleaseSet {
        let mut releases = ReleaseSet::new();

        for tag in tags {
            let Some(target) = tag.target.as_deref() else {
                continue;
            };
            let Some(identity) = self.matcher.parse(&tag.name) else {
                continue;
            };
            releases.insert(Release::new(identity.name, identity.version, target, tag.time));
        }

        self.sorter.sort(&mut releases);
        releases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn tag(name: &str, target: &str, secs: i64) -> Tag {
        Tag::new(name, target, Utc.timestamp_opt(secs, 0).unwrap())
    }

    fn miner() -> ReleaseMiner {
        ReleaseMiner::new(MatcherConfig::version_gated(), ReleaseSorter::Chronological)
    }

    #[test]
    fn test_mine_builds_one_release_per_matching_tag() {
        let tags = vec![
            tag("v1.0.0", "c1", 100),
            tag("v1.1.0", "c5", 300),
            tag("not-a-release", "c3", 200),
        ];

        let releases = miner().mine(&tags);
        assert_eq!(releases.len(), 2);
        assert!(releases.contains("v1.0.0"));
        assert!(releases.contains("v1.1.0"));
        assert!(!releases.contains("not-a-release"));
    }

    #[test]
    fn test_mine_skips_tags_without_target() {
        let mut broken = tag("v2.0.0", "unused", 100);
        broken.target = None;

        let releases = miner().mine(&[broken, tag("v1.0.0", "c1", 50)]);
        assert_eq!(releases.len(), 1);
        assert!(releases.contains("v1.0.0"));
    }

    #[test]
    fn test_mine_sorts_chronologically_by_default() {
        let tags = vec![tag("v2.0.0", "c9", 300), tag("v1.0.0", "c1", 100)];
        let releases = miner().mine(&tags);
        assert_eq!(releases.get_index(0).unwrap().name, "v1.0.0");
        assert_eq!(releases.get_index(1).unwrap().name, "v2.0.0");
    }

    #[test]
    fn test_mine_version_sorter() {
        let miner = ReleaseMiner::new(MatcherConfig::version_gated(), ReleaseSorter::ByVersion);
        // v9 tagged after v10 in wall-clock time
        let tags = vec![tag("v10.0.0", "c2", 100), tag("v9.0.0", "c1", 200)];
        let releases = miner.mine(&tags);
        assert_eq!(releases.get_index(0).unwrap().name, "v9.0.0");
        assert_eq!(releases.get_index(1).unwrap().name, "v10.0.0");
    }

    #[test]
    fn test_mine_keeps_aliasing_tags_as_separate_releases() {
        let tags = vec![tag("v2.0.0", "c14", 100), tag("v2.0.1", "c14", 110)];
        let releases = miner().mine(&tags);
        assert_eq!(releases.len(), 2);
        assert_eq!(
            releases.get("v2.0.0").unwrap().head,
            releases.get("v2.0.1").unwrap().head
        );
    }
}
