use anyhow::Result;
use clap::Parser;

use release_mine::classifier;
use release_mine::config;
use release_mine::graph::CommitGraph;
use release_mine::metrics;
use release_mine::miner;
use release_mine::repo::{Git2Source, RepositorySource};
use release_mine::report;

#[derive(clap::Parser)]
#[command(
    name = "release-mine",
    about = "Reconstruct structured release history from a git commit graph"
)]
struct Args {
    #[arg(default_value = ".", help = "Path to the repository to mine")]
    path: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Treat every reference as a release")]
    accept_all: bool,

    #[arg(long, help = "Reject pre-release tags unless allow-listed")]
    stable_only: bool,

    #[arg(long, help = "Order releases by version instead of time")]
    sort_by_version: bool,

    #[arg(long, help = "Show main/patch/pre-release classification")]
    classify: bool,

    #[arg(long, help = "Show release delay and duration metrics")]
    metrics: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            report::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    // CLI flags override the config file.
    if args.accept_all {
        config.matcher.variant = "accept-all".to_string();
    } else if args.stable_only {
        config.matcher.variant = "stable-only".to_string();
    }
    if args.sort_by_version {
        config.sorting.order = "version".to_string();
    }

    let source = match Git2Source::open(&args.path) {
        Ok(source) => source,
        Err(e) => {
            report::display_error(&format!("Cannot open repository: {}", e));
            std::process::exit(1);
        }
    };

    report::display_status(&format!("Mining release history in {}", args.path));
    let releases = miner::mine_repository(&source, &config)?;
    report::display_release_summary(&releases);

    if args.classify {
        let mut typology = classifier::classify(&releases);
        if config.classify.repair_orphans {
            classifier::repair_orphans(&mut typology);
        }
        report::display_typology(&typology);
    }

    if args.metrics {
        let mut graph = CommitGraph::new();
        for commit in source.commits()? {
            graph.insert(commit);
        }
        display_metrics(&releases, &graph);
    }

    Ok(())
}

fn display_metrics(releases: &release_mine::registry::ReleaseSet, graph: &CommitGraph) {
    println!();
    for release in releases.iter() {
        let delay = match metrics::release_delay(release, releases) {
            Ok(Some(d)) => format!("delay {}d", d.num_days()),
            Ok(None) => "initial".to_string(),
            Err(e) => format!("({})", e),
        };
        let duration = match metrics::release_duration(release, graph) {
            Ok(Some(d)) => format!("span {}d", d.num_days()),
            Ok(None) => "no new commits".to_string(),
            Err(e) => format!("({})", e),
        };
        println!("  {}  {}  {}", release.name, delay, duration);
    }
}
