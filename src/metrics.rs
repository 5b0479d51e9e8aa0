use chrono::Duration;

use crate::domain::Release;
use crate::error::{MiningError, Result};
use crate::graph::CommitGraph;
use crate::registry::ReleaseSet;

/// Time from the main base release to this release.
///
/// `None` when the release has no main base (an initial release).
/// A negative span means the tag timestamps are provably inconsistent
/// (clock skew placed the release before its own base) and is raised as
/// `MisplacedTime`; mining results themselves are unaffected since
/// assignment follows graph order, not wall-clock order.
pub fn release_delay(release: &Release, releases: &ReleaseSet) -> Result<Option<Duration>> {
    let Some(base_name) = release.main_base_release.as_deref() else {
        return Ok(None);
    };
    let Some(base) = releases.get(base_name) else {
        return Ok(None);
    };

    let delay = release.time - base.time;
    if delay < Duration::zero() {
        return Err(MiningError::misplaced_time(format!(
            "release '{}' ({}) predates its base release '{}' ({})",
            release.name, release.time, base.name, base.time
        )));
    }
    Ok(Some(delay))
}

/// Time from the earliest owned commit to the release.
///
/// `None` when the release carries no commits (its history is entirely
/// subsumed). Raises `MisplacedTime` when the tag provably precedes
/// one of its own commits.
pub fn release_duration(release: &Release, graph: &CommitGraph) -> Result<Option<Duration>> {
    let earliest = release
        .commits
        .iter()
        .filter_map(|id| graph.get(id))
        .map(|commit| commit.committer_time)
        .min();

    let Some(earliest) = earliest else {
        return Ok(None);
    };

    let duration = release.time - earliest;
    if duration < Duration::zero() {
        return Err(MiningError::misplaced_time(format!(
            "release '{}' ({}) predates its own commit history ({})",
            release.name, release.time, earliest
        )));
    }
    Ok(Some(duration))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Commit, ReleaseVersion};
    use chrono::{TimeZone, Utc};

    fn release(name: &str, head: &str, secs: i64) -> Release {
        Release::new(
            name,
            ReleaseVersion::parse(name).unwrap(),
            head,
            Utc.timestamp_opt(secs, 0).unwrap(),
        )
    }

    fn commit(id: &str, secs: i64) -> Commit {
        let t = Utc.timestamp_opt(secs, 0).unwrap();
        Commit {
            id: id.to_string(),
            parents: Vec::new(),
            author: "a".to_string(),
            committer: "c".to_string(),
            author_time: t,
            committer_time: t,
            message: String::new(),
        }
    }

    #[test]
    fn test_delay_between_releases() {
        let mut releases = ReleaseSet::new();
        releases.insert(release("v1.0.0", "c1", 100));
        let mut second = release("v1.0.1", "c3", 400);
        second.main_base_release = Some("v1.0.0".to_string());
        releases.insert(second);

        let delay = release_delay(releases.get("v1.0.1").unwrap(), &releases)
            .unwrap()
            .unwrap();
        assert_eq!(delay, Duration::seconds(300));
    }

    #[test]
    fn test_delay_none_for_initial_release() {
        let mut releases = ReleaseSet::new();
        releases.insert(release("v1.0.0", "c1", 100));
        let delay = release_delay(releases.get("v1.0.0").unwrap(), &releases).unwrap();
        assert!(delay.is_none());
    }

    #[test]
    fn test_delay_clock_skew_is_misplaced_time() {
        let mut releases = ReleaseSet::new();
        releases.insert(release("v1.0.0", "c1", 500));
        let mut second = release("v1.0.1", "c3", 400);
        second.main_base_release = Some("v1.0.0".to_string());
        releases.insert(second);

        let err = release_delay(releases.get("v1.0.1").unwrap(), &releases).unwrap_err();
        assert!(matches!(err, MiningError::MisplacedTime(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_duration_spans_owned_commits() {
        let mut graph = CommitGraph::new();
        graph.insert(commit("c0", 100));
        graph.insert(commit("c1", 150));

        let mut rel = release("v1.0.0", "c1", 200);
        rel.commits.insert("c0".to_string());
        rel.commits.insert("c1".to_string());

        let duration = release_duration(&rel, &graph).unwrap().unwrap();
        assert_eq!(duration, Duration::seconds(100));
    }

    #[test]
    fn test_duration_none_without_commits() {
        let graph = CommitGraph::new();
        let rel = release("v1.0.0", "c1", 200);
        assert!(release_duration(&rel, &graph).unwrap().is_none());
    }

    #[test]
    fn test_duration_tag_before_commit_is_misplaced_time() {
        let mut graph = CommitGraph::new();
        graph.insert(commit("c0", 300));

        let mut rel = release("v1.0.0", "c0", 200);
        rel.commits.insert("c0".to_string());

        let err = release_duration(&rel, &graph).unwrap_err();
        assert!(matches!(err, MiningError::MisplacedTime(_)));
    }
}
