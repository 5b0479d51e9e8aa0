use indexmap::IndexMap;

use crate::domain::Release;

/// Ordered registry of releases keyed by name.
///
/// Insertion assigns position; sorting reassigns it once after mining.
/// Names are unique: a second insert under an existing name is rejected
/// and the first entry wins.
#[derive(Debug, Default)]
pub struct ReleaseSet {
    releases: IndexMap<String, Release>,
}

impl ReleaseSet {
    pub fn new() -> Self {
        ReleaseSet {
            releases: IndexMap::new(),
        }
    }

    /// Insert a release. Returns false (and keeps the existing entry)
    /// when the name is already present.
    pub fn insert(&mut self, release: Release) -> bool {
        if self.releases.contains_key(&release.name) {
            return false;
        }
        self.releases.insert(release.name.clone(), release);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Release> {
        self.releases.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Release> {
        self.releases.get_mut(name)
    }

    /// Positional lookup reflecting current sort order
    pub fn get_index(&self, index: usize) -> Option<&Release> {
        self.releases.get_index(index).map(|(_, r)| r)
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.releases.get_index_of(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.releases.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Release> {
        self.releases.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.releases.keys().map(|s| s.as_str())
    }

    /// Fix iteration/position order with the given comparator.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Release, &Release) -> std::cmp::Ordering,
    {
        self.releases.sort_by(|_, a, _, b| compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReleaseVersion;
    use chrono::{TimeZone, Utc};

    fn release(name: &str, secs: i64) -> Release {
        Release::new(
            name,
            ReleaseVersion::parse(name).unwrap(),
            format!("head-{}", name),
            Utc.timestamp_opt(secs, 0).unwrap(),
        )
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut set = ReleaseSet::new();
        assert!(set.insert(release("v1.0.0", 100)));
        assert!(set.insert(release("v1.1.0", 200)));

        assert_eq!(set.len(), 2);
        assert!(set.contains("v1.0.0"));
        assert_eq!(set.get("v1.1.0").unwrap().name, "v1.1.0");
        assert!(set.get("v9.9.9").is_none());
    }

    #[test]
    fn test_duplicate_name_keeps_first() {
        let mut set = ReleaseSet::new();
        assert!(set.insert(release("v1.0.0", 100)));
        let mut dup = release("v1.0.0", 999);
        dup.head = "other-head".to_string();
        assert!(!set.insert(dup));
        assert_eq!(set.get("v1.0.0").unwrap().head, "head-v1.0.0");
    }

    #[test]
    fn test_positional_lookup_follows_insertion() {
        let mut set = ReleaseSet::new();
        set.insert(release("v2.0.0", 300));
        set.insert(release("v1.0.0", 100));

        assert_eq!(set.get_index(0).unwrap().name, "v2.0.0");
        assert_eq!(set.position_of("v1.0.0"), Some(1));
    }

    #[test]
    fn test_sort_reassigns_positions() {
        let mut set = ReleaseSet::new();
        set.insert(release("v2.0.0", 300));
        set.insert(release("v1.0.0", 100));

        set.sort_by(|a, b| a.time.cmp(&b.time));
        assert_eq!(set.get_index(0).unwrap().name, "v1.0.0");
        assert_eq!(set.position_of("v2.0.0"), Some(1));
    }
}
