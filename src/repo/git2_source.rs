use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use git2::{ObjectType, Repository};

use crate::domain::{Commit, Tag};
use crate::error::{MiningError, Result};
use crate::repo::RepositorySource;

/// Repository source backed by a real git repository.
pub struct Git2Source {
    repo: Repository,
}

impl Git2Source {
    /// Open or discover a git repository at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Git2Source { repo })
    }

    /// Create from an existing git2::Repository
    pub fn from_git2(repo: Repository) -> Self {
        Git2Source { repo }
    }

    fn convert_time(time: git2::Time) -> DateTime<Utc> {
        Utc.timestamp_opt(time.seconds(), 0)
            .single()
            .unwrap_or_default()
    }

    fn convert_commit(commit: &git2::Commit) -> Commit {
        Commit {
            id: commit.id().to_string(),
            parents: commit.parent_ids().map(|id| id.to_string()).collect(),
            author: commit.author().name().unwrap_or("unknown").to_string(),
            committer: commit.committer().name().unwrap_or("unknown").to_string(),
            author_time: Self::convert_time(commit.author().when()),
            committer_time: Self::convert_time(commit.time()),
            message: commit.message().unwrap_or("").to_string(),
        }
    }
}

impl RepositorySource for Git2Source {
    /// Enumerate all tags. The tag time is the annotated tag's tagger
    /// time when one exists, otherwise the target commit's committer
    /// time. Tags that do not peel to a commit come back with no target
    /// and are skipped downstream.
    fn tags(&self) -> Result<Vec<Tag>> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::new();

        for name in names.iter().flatten() {
            let reference_name = format!("refs/tags/{}", name);
            let reference = match self.repo.find_reference(&reference_name) {
                Ok(reference) => reference,
                Err(e) if e.code() == git2::ErrorCode::NotFound => continue,
                Err(e) => {
                    return Err(MiningError::tag(format!(
                        "Cannot resolve tag '{}': {}",
                        name, e
                    )))
                }
            };

            let commit = reference.peel(ObjectType::Commit).ok();
            let target = commit.as_ref().map(|obj| obj.id().to_string());

            let annotated = reference.peel(ObjectType::Tag).ok();
            let annotated_tag = annotated.as_ref().and_then(|obj| obj.as_tag());

            let time = annotated_tag
                .and_then(|t| t.tagger().map(|sig| Self::convert_time(sig.when())))
                .or_else(|| {
                    commit
                        .as_ref()
                        .and_then(|obj| obj.as_commit())
                        .map(|c| Self::convert_time(c.time()))
                })
                .unwrap_or_default();

            tags.push(Tag {
                name: name.to_string(),
                target,
                time,
                message: annotated_tag.and_then(|t| t.message().map(|m| m.to_string())),
            });
        }

        Ok(tags)
    }

    /// Load every commit reachable from any tag, one revwalk over the
    /// union of tag heads. Parent lookups happen here once; the mining
    /// core never goes back to the repository.
    fn commits(&self) -> Result<Vec<Commit>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_glob("refs/tags/*")?;

        let mut seen: HashSet<String> = HashSet::new();
        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            if !seen.insert(oid.to_string()) {
                continue;
            }
            let commit = self.repo.find_commit(oid)?;
            commits.push(Self::convert_commit(&commit));
        }

        Ok(commits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_discovers_or_fails_gracefully() {
        // No repository fixture here; either outcome is acceptable
        let _ = Git2Source::open(".");
    }
}
