//! The mining pipeline: tags to releases, releases to commit ownership,
//! commit ownership to base-release links.

pub mod base_resolver;
pub mod commit_miner;
pub mod release_miner;

pub use base_resolver::BaseResolver;
pub use commit_miner::CommitMiner;
pub use release_miner::{ReleaseMiner, ReleaseSorter};

use crate::config::MiningConfig;
use crate::error::Result;
use crate::graph::CommitGraph;
use crate::registry::ReleaseSet;
use crate::repo::RepositorySource;

/// Run the full mining pipeline against one repository source.
///
/// Reads tags and commits once, validates the graph, then mines releases,
/// assigns commits and resolves base releases. The returned registry is
/// fully enriched; all per-run state (graph, claimed map, reachable memo)
/// is dropped here.
pub fn mine_repository<S: RepositorySource>(
    source: &S,
    config: &MiningConfig,
) -> Result<ReleaseSet> {
    let tags = source.tags()?;

    let miner = ReleaseMiner::new(config.matcher_config()?, config.sorter());
    let mut releases = miner.mine(&tags);

    let mut graph = CommitGraph::new();
    for commit in source.commits()? {
        graph.insert(commit);
    }
    graph.validate()?;

    let raw_boundaries = CommitMiner::assign(&graph, &mut releases)?;
    BaseResolver::new().resolve(&mut releases, &raw_boundaries);

    Ok(releases)
}
