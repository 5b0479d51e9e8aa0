use std::collections::{BTreeSet, HashMap};

use crate::error::Result;
use crate::graph::CommitGraph;
use crate::registry::ReleaseSet;

/// Raw boundary-release names recorded per release during assignment,
/// before transitive reduction.
pub type RawBoundaries = HashMap<String, BTreeSet<String>>;

/// Assigns every reachable commit to the release that first claims it.
///
/// Releases are processed in registry order (chronological after the
/// release miner), so ownership is first-claim-wins and each release's
/// walk stops where an earlier release's territory begins. The global
/// claimed map bounds total work to one visit per commit.
pub struct CommitMiner;

impl CommitMiner {
    /// Walk every release head and fill `commits`/`shared_commits` on the
    /// registry entries. Returns the raw boundary sets for the base
    /// resolver.
    pub fn assign(graph: &CommitGraph, releases: &mut ReleaseSet) -> Result<RawBoundaries> {
        let mut claimed: HashMap<String, String> = HashMap::new();
        let mut raw_boundaries: RawBoundaries = HashMap::new();

        let order: Vec<String> = releases.names().map(|n| n.to_string()).collect();

        for name in order {
            let Some(head) = releases.get(&name).map(|r| r.head.clone()) else {
                continue;
            };

            if let Some(owner) = claimed.get(&head).cloned() {
                let owner_head = releases.get(&owner).map(|r| r.head.clone());

                if owner_head.as_deref() == Some(head.as_str()) {
                    // Pure alias: two tags naming the same commit. The
                    // alias entry shares the owner's computed results
                    // instead of owning anything itself.
                    let commits = releases
                        .get(&owner)
                        .map(|r| r.commits.clone())
                        .unwrap_or_default();
                    let boundary = raw_boundaries.get(&owner).cloned().unwrap_or_default();

                    if let Some(release) = releases.get_mut(&name) {
                        release.shared_commits = commits.clone();
                        release.commits = commits;
                    }
                    raw_boundaries.insert(name, boundary);
                } else {
                    // Head sits inside an earlier release's territory:
                    // nothing new to claim, the owner is the sole base.
                    if let Some(release) = releases.get_mut(&name) {
                        release.shared_commits.insert(head.clone());
                    }
                    raw_boundaries.insert(name, BTreeSet::from([owner]));
                }
                continue;
            }

            let walk = graph.walk_from(&head, &claimed)?;

            let mut boundary: BTreeSet<String> = BTreeSet::new();
            for commit in &walk.boundary_commits {
                if let Some(owner) = claimed.get(commit) {
                    boundary.insert(owner.clone());
                }
            }

            for commit in &walk.claimed {
                claimed.insert(commit.clone(), name.clone());
            }

            if let Some(release) = releases.get_mut(&name) {
                release.commits.extend(walk.claimed.iter().cloned());
                release.shared_commits.extend(walk.boundary_commits);
            }
            raw_boundaries.insert(name, boundary);
        }

        Ok(raw_boundaries)
    }
}
