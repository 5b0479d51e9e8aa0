use std::collections::{BTreeSet, HashMap};

use crate::miner::commit_miner::RawBoundaries;
use crate::registry::ReleaseSet;

/// Finalizes `base_releases` from the raw boundary sets by transitive
/// reduction, and picks each release's `main_base_release`.
///
/// Releases are processed in registry order, which the chronological
/// mining order makes topological: by the time a release is reduced, the
/// reachable set of every release it can name is already memoized. That
/// keeps the whole pass iterative, with no recursion over release chains.
pub struct BaseResolver {
    reachable: HashMap<String, BTreeSet<String>>,
}

impl Default for BaseResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseResolver {
    pub fn new() -> Self {
        BaseResolver {
            reachable: HashMap::new(),
        }
    }

    pub fn resolve(&mut self, releases: &mut ReleaseSet, raw_boundaries: &RawBoundaries) {
        let order: Vec<String> = releases.names().map(|n| n.to_string()).collect();

        for name in order {
            let boundary = raw_boundaries.get(&name).cloned().unwrap_or_default();

            // Drop any boundary release already implied by another one.
            let mut kept: BTreeSet<String> = BTreeSet::new();
            for candidate in &boundary {
                let redundant = boundary.iter().any(|other| {
                    other != candidate
                        && self
                            .reachable
                            .get(other)
                            .is_some_and(|set| set.contains(candidate))
                });
                if !redundant {
                    kept.insert(candidate.clone());
                }
            }

            let mut reachable = kept.clone();
            for base in &kept {
                if let Some(transitive) = self.reachable.get(base) {
                    reachable.extend(transitive.iter().cloned());
                }
            }
            self.reachable.insert(name.clone(), reachable);

            let main_base = self.pick_main_base(&kept, releases);
            if let Some(release) = releases.get_mut(&name) {
                release.base_releases = kept;
                release.main_base_release = main_base;
            }
        }
    }

    /// The releases transitively reachable from `name` through base
    /// links, as finalized so far.
    pub fn reachable_of(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.reachable.get(name)
    }

    /// Most advanced base by version order; latest time breaks ties.
    fn pick_main_base(&self, bases: &BTreeSet<String>, releases: &ReleaseSet) -> Option<String> {
        bases
            .iter()
            .filter_map(|name| releases.get(name))
            .max_by(|a, b| a.version.cmp(&b.version).then_with(|| a.time.cmp(&b.time)))
            .map(|release| release.name.clone())
    }
}
