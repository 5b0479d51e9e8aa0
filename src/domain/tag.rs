use chrono::{DateTime, Utc};

/// A reference name bound to a commit.
///
/// `time` is the annotated tag time when one exists, otherwise the target
/// commit's committer time. A tag with no resolvable target is malformed
/// and is skipped by the release miner rather than raised.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub target: Option<String>,
    pub time: DateTime<Utc>,
    pub message: Option<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>, target: impl Into<String>, time: DateTime<Utc>) -> Self {
        Tag {
            name: name.into(),
            target: Some(target.into()),
            time,
            message: None,
        }
    }
}
