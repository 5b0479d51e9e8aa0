use regex::Regex;

use crate::domain::ReleaseVersion;

/// Parsed identity of a reference name accepted as a release.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseIdentity {
    pub name: String,
    pub version: ReleaseVersion,
}

/// Decides whether a reference name denotes a release.
///
/// Pure function of the name and static configuration; composed into the
/// release miner at configuration time.
#[derive(Debug, Clone, Default)]
pub enum ReleaseMatcher {
    /// Every reference name is a release. Names without a digit run get
    /// a fallback all-zero version.
    AcceptAll,
    /// A name is a release when a version can be parsed from it and it is
    /// not on the exception list.
    #[default]
    VersionGated,
    /// As `VersionGated`, but pre-release suffixes are rejected unless
    /// one of the allow-patterns matches them.
    StableOnly,
}

/// Matcher plus its static configuration.
#[derive(Debug, Clone, Default)]
pub struct MatcherConfig {
    pub matcher: ReleaseMatcher,
    /// Names never treated as releases, regardless of parseability
    pub exceptions: Vec<String>,
    /// Suffix allow-patterns consulted by `StableOnly`
    pub allowed_suffixes: Vec<Regex>,
}

impl MatcherConfig {
    pub fn accept_all() -> Self {
        MatcherConfig {
            matcher: ReleaseMatcher::AcceptAll,
            ..Default::default()
        }
    }

    pub fn version_gated() -> Self {
        MatcherConfig::default()
    }

    pub fn stable_only() -> Self {
        MatcherConfig {
            matcher: ReleaseMatcher::StableOnly,
            ..Default::default()
        }
    }

    pub fn with_exceptions(mut self, exceptions: Vec<String>) -> Self {
        self.exceptions = exceptions;
        self
    }

    pub fn with_allowed_suffixes(mut self, patterns: Vec<Regex>) -> Self {
        self.allowed_suffixes = patterns;
        self
    }

    /// Parse a reference name into a release identity, or `None` when the
    /// name does not denote a release under this matcher.
    pub fn parse(&self, name: &str) -> Option<ReleaseIdentity> {
        if self.exceptions.iter().any(|e| e == name) {
            return None;
        }

        match self.matcher {
            ReleaseMatcher::AcceptAll => {
                let version = ReleaseVersion::parse(name)
                    .unwrap_or_else(|| ReleaseVersion::fallback(name));
                Some(ReleaseIdentity {
                    name: name.to_string(),
                    version,
                })
            }
            ReleaseMatcher::VersionGated => {
                let version = ReleaseVersion::parse(name)?;
                Some(ReleaseIdentity {
                    name: name.to_string(),
                    version,
                })
            }
            ReleaseMatcher::StableOnly => {
                let version = ReleaseVersion::parse(name)?;
                if version.is_pre_release()
                    && !self
                        .allowed_suffixes
                        .iter()
                        .any(|re| re.is_match(&version.suffix))
                {
                    return None;
                }
                Some(ReleaseIdentity {
                    name: name.to_string(),
                    version,
                })
            }
        }
    }
}
