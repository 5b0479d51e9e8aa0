//! Console report formatting for mined release history.
//!
//! Pure printing; the mining core defines no wire format, so this module
//! is the only place output shape lives.

use console::style;

use crate::classifier::ReleaseTypology;
use crate::domain::Release;
use crate::registry::ReleaseSet;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a status message.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

fn format_base_list(release: &Release) -> String {
    if release.base_releases.is_empty() {
        return style("(initial release)").dim().to_string();
    }
    release
        .base_releases
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print one line per release: name, time, commit count and bases.
pub fn display_release_summary(releases: &ReleaseSet) {
    println!(
        "{}",
        style(format!("Mined {} releases", releases.len())).bold()
    );

    for release in releases.iter() {
        let mut line = format!(
            "  {}  {}  {} commits  bases: {}",
            style(&release.name).green(),
            release.time.format("%Y-%m-%d"),
            release.commit_count(),
            format_base_list(release)
        );
        if let Some(main_base) = &release.main_base_release {
            line.push_str(&format!("  main base: {}", main_base));
        }
        if !release.shared_commits.is_empty() {
            line.push_str(
                &style(format!("  ({} shared)", release.shared_commits.len()))
                    .dim()
                    .to_string(),
            );
        }
        println!("{}", line);
    }
}

/// Print the classification breakdown: main releases with their owned
/// patches and pre-releases, then any remaining orphans.
pub fn display_typology(typology: &ReleaseTypology) {
    println!(
        "\n{}",
        style(format!(
            "{} main releases, {} patches, {} pre-releases",
            typology.main_releases.len(),
            typology.patches.len(),
            typology.pre_releases.len()
        ))
        .bold()
    );

    for main in typology.main_releases.values() {
        println!("  {}", style(&main.name).green().bold());
        for patch in &main.patches {
            println!("    patch: {}", patch);
        }
        for pre in &main.pre_releases {
            println!("    pre-release: {}", pre);
        }
    }

    let orphan_patches: Vec<_> = typology.orphan_patches().collect();
    let orphan_pres: Vec<_> = typology.orphan_pre_releases().collect();
    for patch in orphan_patches {
        println!(
            "  {} {}",
            style("orphan patch:").yellow(),
            patch.name
        );
    }
    for pre in orphan_pres {
        println!(
            "  {} {}",
            style("orphan pre-release:").yellow(),
            pre.name
        );
    }
}
