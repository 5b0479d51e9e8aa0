use chrono::{DateTime, Utc};

/// Immutable commit node as consumed from the repository adapter.
///
/// Identity fields are set once at construction; the mining run only ever
/// associates a commit with a release through external maps, never by
/// mutating the commit itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    /// Stable unique hash within one mining run
    pub id: String,
    /// Parent commit ids, ordered; empty for a root, two or more for a merge
    pub parents: Vec<String>,
    pub author: String,
    pub committer: String,
    pub author_time: DateTime<Utc>,
    pub committer_time: DateTime<Utc>,
    pub message: String,
}

impl Commit {
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() >= 2
    }

    /// Shortened hash for display
    pub fn short_id(&self) -> &str {
        if self.id.len() > 7 {
            &self.id[..7]
        } else {
            &self.id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn commit(id: &str, parents: &[&str]) -> Commit {
        let t = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        Commit {
            id: id.to_string(),
            parents: parents.iter().map(|p| p.to_string()).collect(),
            author: "Author".to_string(),
            committer: "Committer".to_string(),
            author_time: t,
            committer_time: t,
            message: "message".to_string(),
        }
    }

    #[test]
    fn test_root_and_merge_predicates() {
        assert!(commit("a", &[]).is_root());
        assert!(!commit("b", &["a"]).is_root());
        assert!(commit("c", &["a", "b"]).is_merge());
        assert!(!commit("b", &["a"]).is_merge());
    }

    #[test]
    fn test_short_id() {
        let c = commit("abc1234def5678", &[]);
        assert_eq!(c.short_id(), "abc1234");

        let c = commit("ab12", &[]);
        assert_eq!(c.short_id(), "ab12");
    }
}
