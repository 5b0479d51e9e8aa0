use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

/// Structured version parsed from a reference name.
///
/// A name splits into an optional non-numeric `prefix`, a run of
/// `.`/`_`-separated digit groups, and an optional trailing `suffix`.
/// Numeric components are right-padded with zeros to at least three
/// (major, minor, patch), so "1" parses as 1.0.0.
///
/// A non-empty suffix marks a pre-release ("2.0.0-alpha1").
#[derive(Debug, Clone, Eq)]
pub struct ReleaseVersion {
    pub prefix: String,
    pub numbers: Vec<u64>,
    pub suffix: String,
}

impl ReleaseVersion {
    /// Parse a reference name into a version.
    ///
    /// Returns `None` when the name contains no digit run at all
    /// ("latest", "stable").
    pub fn parse(name: &str) -> Option<Self> {
        let captures = Regex::new(r"^(.*?)(\d+(?:[._]\d+)*)(.*)$")
            .ok()
            .and_then(|re| re.captures(name))?;

        let prefix = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        let digits = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
        let rest = captures.get(3).map(|m| m.as_str()).unwrap_or_default();

        let mut numbers: Vec<u64> = digits
            .split(['.', '_'])
            .filter_map(|part| part.parse::<u64>().ok())
            .collect();
        if numbers.is_empty() {
            return None;
        }
        while numbers.len() < 3 {
            numbers.push(0);
        }

        Some(ReleaseVersion {
            prefix: prefix.to_string(),
            numbers,
            suffix: rest.trim_start_matches(['-', '.', '_']).to_string(),
        })
    }

    /// Fallback identity for names with no digit run, used by the
    /// accept-all matcher so every release still carries a version.
    pub fn fallback(name: &str) -> Self {
        ReleaseVersion {
            prefix: name.to_string(),
            numbers: vec![0, 0, 0],
            suffix: String::new(),
        }
    }

    pub fn major(&self) -> u64 {
        self.numbers.first().copied().unwrap_or(0)
    }

    pub fn minor(&self) -> u64 {
        self.numbers.get(1).copied().unwrap_or(0)
    }

    pub fn patch(&self) -> u64 {
        self.numbers.get(2).copied().unwrap_or(0)
    }

    /// Patch release: nonzero patch component.
    pub fn is_patch(&self) -> bool {
        self.patch() > 0
    }

    /// Minor release: zero patch, nonzero minor.
    pub fn is_minor(&self) -> bool {
        self.patch() == 0 && self.minor() > 0
    }

    /// Major release: only the major component is nonzero.
    pub fn is_major(&self) -> bool {
        self.patch() == 0 && self.minor() == 0 && self.major() > 0
    }

    /// Pre-release: any non-empty suffix, independent of the numeric
    /// shape. Classification checks this before the numeric predicates.
    pub fn is_pre_release(&self) -> bool {
        !self.suffix.is_empty()
    }

    /// The `major.minor.0` version this release would belong to,
    /// used to link patches and pre-releases to their main release.
    pub fn main_version(&self) -> ReleaseVersion {
        ReleaseVersion {
            prefix: String::new(),
            numbers: vec![self.major(), self.minor(), 0],
            suffix: String::new(),
        }
    }

    /// Key for main-release lookup tables.
    pub fn main_key(&self) -> (u64, u64) {
        (self.major(), self.minor())
    }
}

// Prefix carries no ordering weight: "v1.2.0" and "release-1.2.0" are the
// same version. Distinctness of releases is by name, not version.
impl PartialEq for ReleaseVersion {
    fn eq(&self, other: &Self) -> bool {
        self.numbers == other.numbers && self.suffix == other.suffix
    }
}

impl Ord for ReleaseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.numbers.cmp(&other.numbers) {
            Ordering::Equal => {}
            ordering => return ordering,
        }
        // Pre-release sorts before the final release of the same number.
        match (self.suffix.is_empty(), other.suffix.is_empty()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => self.suffix.cmp(&other.suffix),
        }
    }
}

impl PartialOrd for ReleaseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{}{}", self.prefix, joined)?;
        if !self.suffix.is_empty() {
            write!(f, "-{}", self.suffix)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let v = ReleaseVersion::parse("1.2.3").unwrap();
        assert_eq!(v.numbers, vec![1, 2, 3]);
        assert_eq!(v.prefix, "");
        assert_eq!(v.suffix, "");
    }

    #[test]
    fn test_parse_with_prefix() {
        let v = ReleaseVersion::parse("v1.2.3").unwrap();
        assert_eq!(v.prefix, "v");
        assert_eq!(v.numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_release_prefix() {
        let v = ReleaseVersion::parse("release-2.0.0").unwrap();
        assert_eq!(v.prefix, "release-");
        assert_eq!(v.numbers, vec![2, 0, 0]);
    }

    #[test]
    fn test_parse_pads_to_three_components() {
        let v = ReleaseVersion::parse("1").unwrap();
        assert_eq!(v.numbers, vec![1, 0, 0]);

        let v = ReleaseVersion::parse("1.2").unwrap();
        assert_eq!(v.numbers, vec![1, 2, 0]);
    }

    #[test]
    fn test_parse_underscore_separators() {
        let v = ReleaseVersion::parse("REL_1_2_3").unwrap();
        assert_eq!(v.numbers, vec![1, 2, 3]);
        assert_eq!(v.prefix, "REL_");
    }

    #[test]
    fn test_parse_pre_release_suffix() {
        let v = ReleaseVersion::parse("2.0.0-alpha1").unwrap();
        assert_eq!(v.numbers, vec![2, 0, 0]);
        assert_eq!(v.suffix, "alpha1");
        assert!(v.is_pre_release());
    }

    #[test]
    fn test_parse_no_digits() {
        assert!(ReleaseVersion::parse("latest").is_none());
        assert!(ReleaseVersion::parse("").is_none());
    }

    #[test]
    fn test_numeric_ordering_not_lexical() {
        let nine = ReleaseVersion::parse("9.0.0").unwrap();
        let ten = ReleaseVersion::parse("10.0.0").unwrap();
        assert!(nine < ten);
    }

    #[test]
    fn test_pre_release_sorts_before_final() {
        let alpha = ReleaseVersion::parse("2.0.0-alpha1").unwrap();
        let fin = ReleaseVersion::parse("2.0.0").unwrap();
        assert!(alpha < fin);
    }

    #[test]
    fn test_suffixes_compare_lexically() {
        let alpha = ReleaseVersion::parse("2.0.0-alpha").unwrap();
        let beta = ReleaseVersion::parse("2.0.0-beta").unwrap();
        assert!(alpha < beta);
    }

    #[test]
    fn test_prefix_ignored_in_comparison() {
        let a = ReleaseVersion::parse("v1.2.0").unwrap();
        let b = ReleaseVersion::parse("release-1.2.0").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_type_predicates() {
        assert!(ReleaseVersion::parse("1.0.1").unwrap().is_patch());
        assert!(ReleaseVersion::parse("1.1.0").unwrap().is_minor());
        assert!(ReleaseVersion::parse("2.0.0").unwrap().is_major());

        let alpha = ReleaseVersion::parse("2.0.0-alpha1").unwrap();
        assert!(alpha.is_major());
        assert!(alpha.is_pre_release());
    }

    #[test]
    fn test_main_version() {
        let v = ReleaseVersion::parse("v1.2.5").unwrap();
        let main = v.main_version();
        assert_eq!(main.numbers, vec![1, 2, 0]);
        assert!(!main.is_pre_release());
        assert_eq!(v.main_key(), (1, 2));
    }

    #[test]
    fn test_fallback_version() {
        let v = ReleaseVersion::fallback("production");
        assert_eq!(v.numbers, vec![0, 0, 0]);
        assert_eq!(v.prefix, "production");
        assert!(!v.is_pre_release());
    }

    #[test]
    fn test_display() {
        let v = ReleaseVersion::parse("v1.2.3").unwrap();
        assert_eq!(v.to_string(), "v1.2.3");

        let v = ReleaseVersion::parse("2.0.0-alpha1").unwrap();
        assert_eq!(v.to_string(), "2.0.0-alpha1");
    }

    #[test]
    fn test_sorting_mixed_sample() {
        let names = vec!["2.0.0", "1.0.0", "10.0.0", "2.0.0-alpha1", "1.0.1", "9.1.0"];
        let mut versions: Vec<_> = names
            .iter()
            .filter_map(|n| ReleaseVersion::parse(n))
            .collect();
        versions.sort();
        let sorted: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
        assert_eq!(
            sorted,
            vec!["1.0.0", "1.0.1", "2.0.0-alpha1", "2.0.0", "9.1.0", "10.0.0"]
        );
    }
}
