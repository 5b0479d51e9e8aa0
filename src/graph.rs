use std::collections::{BTreeSet, HashMap, HashSet};

use crate::domain::Commit;
use crate::error::{MiningError, Result};

/// Fully-materialized commit DAG for one mining run.
///
/// Owned by the run and discarded afterwards; commits are never mutated
/// once inserted.
#[derive(Debug, Default)]
pub struct CommitGraph {
    commits: HashMap<String, Commit>,
}

/// Result of one backward walk from a release head.
#[derive(Debug, Default)]
pub struct Walk {
    /// Previously unclaimed commits reached by this walk, in visit order
    pub claimed: Vec<String>,
    /// Already-claimed commits the walk stopped at
    pub boundary_commits: BTreeSet<String>,
}

impl CommitGraph {
    pub fn new() -> Self {
        CommitGraph {
            commits: HashMap::new(),
        }
    }

    pub fn insert(&mut self, commit: Commit) {
        self.commits.insert(commit.id.clone(), commit);
    }

    pub fn get(&self, id: &str) -> Option<&Commit> {
        self.commits.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.commits.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Commit> {
        self.commits.values()
    }

    /// Check the DAG invariants the walker relies on: every parent
    /// reference resolves, and no parent chain forms a cycle. Violations
    /// are fatal; mining must not start on a broken graph.
    pub fn validate(&self) -> Result<()> {
        for commit in self.commits.values() {
            for parent in &commit.parents {
                if !self.commits.contains_key(parent) {
                    return Err(MiningError::graph(format!(
                        "commit {} references missing parent {}",
                        commit.id, parent
                    )));
                }
            }
        }

        // Iterative three-color DFS over parent edges.
        let mut state: HashMap<&str, u8> = HashMap::new();
        for start in self.commits.keys() {
            if state.contains_key(start.as_str()) {
                continue;
            }
            let mut stack: Vec<(&str, usize)> = vec![(start.as_str(), 0)];
            state.insert(start.as_str(), 1);

            while let Some((id, next_parent)) = stack.pop() {
                let commit = &self.commits[id];
                if next_parent < commit.parents.len() {
                    stack.push((id, next_parent + 1));
                    let parent = commit.parents[next_parent].as_str();
                    match state.get(parent).copied() {
                        None => {
                            state.insert(parent, 1);
                            stack.push((parent, 0));
                        }
                        Some(1) => {
                            return Err(MiningError::graph(format!(
                                "cycle detected through commit {}",
                                parent
                            )));
                        }
                        Some(_) => {}
                    }
                } else {
                    state.insert(id, 2);
                }
            }
        }

        Ok(())
    }

    /// Walk backward from `head`, collecting every reachable commit that
    /// is not in `claimed`. Paths are cut at claimed commits, which are
    /// reported as boundary commits instead; their ancestry is already
    /// covered by the owning release's earlier walk. Uses an explicit
    /// work stack, so arbitrarily long linear histories are fine.
    pub fn walk_from(&self, head: &str, claimed: &HashMap<String, String>) -> Result<Walk> {
        let mut walk = Walk::default();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![head];

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                // Diamond ancestry: same commit reached along two paths.
                continue;
            }

            if claimed.contains_key(id) {
                walk.boundary_commits.insert(id.to_string());
                continue;
            }

            let commit = self.commits.get(id).ok_or_else(|| {
                MiningError::graph(format!("walk reached unknown commit {}", id))
            })?;

            walk.claimed.push(id.to_string());
            for parent in &commit.parents {
                stack.push(parent.as_str());
            }
        }

        Ok(walk)
    }
}
