use chrono::{TimeZone, Utc};

use crate::domain::{Commit, Tag};
use crate::error::Result;
use crate::repo::RepositorySource;

/// In-memory repository source for tests.
///
/// Commits and tags are added explicitly; timestamps are plain epoch
/// seconds so test graphs read chronologically.
#[derive(Debug, Default)]
pub struct MockSource {
    commits: Vec<Commit>,
    tags: Vec<Tag>,
}

impl MockSource {
    pub fn new() -> Self {
        MockSource {
            commits: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Add a commit with the given parents at `secs` epoch seconds.
    pub fn add_commit(&mut self, id: &str, parents: &[&str], secs: i64) {
        let time = Utc.timestamp_opt(secs, 0).unwrap();
        self.commits.push(Commit {
            id: id.to_string(),
            parents: parents.iter().map(|p| p.to_string()).collect(),
            author: "Author".to_string(),
            committer: "Committer".to_string(),
            author_time: time,
            committer_time: time,
            message: format!("commit {}", id),
        });
    }

    /// Add a tag on `target` at `secs` epoch seconds.
    pub fn add_tag(&mut self, name: &str, target: &str, secs: i64) {
        self.tags
            .push(Tag::new(name, target, Utc.timestamp_opt(secs, 0).unwrap()));
    }

    /// Add a tag whose target never resolved (malformed input).
    pub fn add_broken_tag(&mut self, name: &str, secs: i64) {
        self.tags.push(Tag {
            name: name.to_string(),
            target: None,
            time: Utc.timestamp_opt(secs, 0).unwrap(),
            message: None,
        });
    }

    /// Convenience: a linear chain c0 -> c1 -> ... -> c{n-1}, one commit
    /// per second starting at `start_secs`.
    pub fn add_linear_chain(&mut self, n: usize, start_secs: i64) {
        for i in 0..n {
            let id = format!("c{}", i);
            if i == 0 {
                self.add_commit(&id, &[], start_secs);
            } else {
                let parent = format!("c{}", i - 1);
                self.add_commit(&id, &[parent.as_str()], start_secs + i as i64);
            }
        }
    }
}

impl RepositorySource for MockSource {
    fn tags(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.clone())
    }

    fn commits(&self) -> Result<Vec<Commit>> {
        Ok(self.commits.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_source_basic() {
        let mut source = MockSource::new();
        source.add_commit("c0", &[], 100);
        source.add_commit("c1", &["c0"], 110);
        source.add_tag("v1.0.0", "c1", 120);

        assert_eq!(source.commits().unwrap().len(), 2);
        let tags = source.tags().unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].target.as_deref(), Some("c1"));
    }

    #[test]
    fn test_linear_chain_builder() {
        let mut source = MockSource::new();
        source.add_linear_chain(3, 100);
        let commits = source.commits().unwrap();
        assert_eq!(commits.len(), 3);
        assert!(commits[0].parents.is_empty());
        assert_eq!(commits[2].parents, vec!["c1".to_string()]);
    }

    #[test]
    fn test_broken_tag_has_no_target() {
        let mut source = MockSource::new();
        source.add_broken_tag("v1.0.0", 100);
        assert!(source.tags().unwrap()[0].target.is_none());
    }
}
