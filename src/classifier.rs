use std::collections::HashMap;

use indexmap::IndexMap;

use crate::domain::ReleaseVersion;
use crate::registry::ReleaseSet;

/// A release with no patch component and no pre-release suffix
/// (major or minor), owning the patches and pre-releases that share its
/// `major.minor` line.
#[derive(Debug, Clone)]
pub struct MainRelease {
    pub name: String,
    pub version: ReleaseVersion,
    pub patches: Vec<String>,
    pub pre_releases: Vec<String>,
}

/// A release with a nonzero patch component, linked to its owning main
/// release when one exists.
#[derive(Debug, Clone)]
pub struct Patch {
    pub name: String,
    pub version: ReleaseVersion,
    pub main_release: Option<String>,
}

/// A release with a non-empty suffix, linked like a patch. Pre-release
/// status takes precedence over the numeric shape: "2.0.0-alpha1" lands
/// here, never among the main releases.
#[derive(Debug, Clone)]
pub struct PreRelease {
    pub name: String,
    pub version: ReleaseVersion,
    pub main_release: Option<String>,
}

/// Derived, cross-indexed view over a mined release set.
#[derive(Debug, Default)]
pub struct ReleaseTypology {
    pub main_releases: IndexMap<String, MainRelease>,
    pub patches: Vec<Patch>,
    pub pre_releases: Vec<PreRelease>,
    /// major.minor -> main release name; first release wins on collision
    main_index: HashMap<(u64, u64), String>,
}

impl ReleaseTypology {
    pub fn main_for_version(&self, version: &ReleaseVersion) -> Option<&str> {
        self.main_index
            .get(&version.main_key())
            .map(|name| name.as_str())
    }

    pub fn orphan_patches(&self) -> impl Iterator<Item = &Patch> {
        self.patches.iter().filter(|p| p.main_release.is_none())
    }

    pub fn orphan_pre_releases(&self) -> impl Iterator<Item = &PreRelease> {
        self.pre_releases
            .iter()
            .filter(|p| p.main_release.is_none())
    }
}

/// Split a mined release set into main releases, patches and
/// pre-releases, and link the latter two to their `major.minor.0` main
/// release. Does not touch `commits` or `base_releases`.
pub fn classify(releases: &ReleaseSet) -> ReleaseTypology {
    let mut typology = ReleaseTypology::default();

    // Main releases first, so the index is complete before linking.
    for release in releases.iter() {
        if release.version.is_pre_release() || release.version.is_patch() {
            continue;
        }
        typology
            .main_index
            .entry(release.version.main_key())
            .or_insert_with(|| release.name.clone());
        typology.main_releases.insert(
            release.name.clone(),
            MainRelease {
                name: release.name.clone(),
                version: release.version.clone(),
                patches: Vec::new(),
                pre_releases: Vec::new(),
            },
        );
    }

    for release in releases.iter() {
        if release.version.is_pre_release() {
            let owner = typology
                .main_index
                .get(&release.version.main_key())
                .cloned();
            if let Some(owner_name) = &owner {
                if let Some(main) = typology.main_releases.get_mut(owner_name) {
                    main.pre_releases.push(release.name.clone());
                }
            }
            typology.pre_releases.push(PreRelease {
                name: release.name.clone(),
                version: release.version.clone(),
                main_release: owner,
            });
        } else if release.version.is_patch() {
            let owner = typology
                .main_index
                .get(&release.version.main_key())
                .cloned();
            if let Some(owner_name) = &owner {
                if let Some(main) = typology.main_releases.get_mut(owner_name) {
                    main.patches.push(release.name.clone());
                }
            }
            typology.patches.push(Patch {
                name: release.name.clone(),
                version: release.version.clone(),
                main_release: owner,
            });
        }
    }

    typology
}

/// Repair orphan entries in place.
///
/// An orphan patch becomes the reference point for its own line: it is
/// promoted to a main release and removed from the patch set. An orphan
/// pre-release instead attaches to the nearest main release that follows
/// it in version order; with no such release it stays orphan.
pub fn repair_orphans(typology: &mut ReleaseTypology) {
    let mut remaining: Vec<Patch> = Vec::new();
    for patch in typology.patches.drain(..) {
        if patch.main_release.is_some() {
            remaining.push(patch);
            continue;
        }
        // A previously promoted orphan may now cover this line.
        if let Some(owner) = typology.main_index.get(&patch.version.main_key()).cloned() {
            if let Some(main) = typology.main_releases.get_mut(&owner) {
                main.patches.push(patch.name.clone());
            }
            remaining.push(Patch {
                main_release: Some(owner),
                ..patch
            });
            continue;
        }

        typology
            .main_index
            .insert(patch.version.main_key(), patch.name.clone());
        typology.main_releases.insert(
            patch.name.clone(),
            MainRelease {
                name: patch.name,
                version: patch.version,
                patches: Vec::new(),
                pre_releases: Vec::new(),
            },
        );
    }
    typology.patches = remaining;

    // Forward-scan in version order for the first main release after the
    // orphan pre-release.
    let mut mains: Vec<(ReleaseVersion, String)> = typology
        .main_releases
        .values()
        .map(|m| (m.version.clone(), m.name.clone()))
        .collect();
    mains.sort_by(|a, b| a.0.cmp(&b.0));

    for pre in &mut typology.pre_releases {
        if pre.main_release.is_some() {
            continue;
        }
        let owner = mains
            .iter()
            .find(|(version, _)| *version > pre.version)
            .map(|(_, name)| name.clone());
        if let Some(owner_name) = &owner {
            if let Some(main) = typology.main_releases.get_mut(owner_name) {
                main.pre_releases.push(pre.name.clone());
            }
        }
        pre.main_release = owner;
    }
}
