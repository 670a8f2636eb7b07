//! Section to navigation-slot mapping.
//!
//! Each page ships a hand-authored table that says which primary and
//! secondary navigation items light up for a given section. Some sections
//! are intermediate slides ("1a", "2c3", ...) that keep the highlight of the
//! chapter they belong to, so rules can match by sub-identifier as well as
//! by position.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sub-identifier of a section, e.g. `"3"` or `"2a"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier used when a section carries no explicit one.
    pub fn from_position(index: usize) -> Self {
        Self(index.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which sections a [`NavRule`] applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionMatch {
    /// A single section position.
    Index(usize),
    /// Inclusive range of section positions.
    Range { from: usize, to: usize },
    /// Sections carrying any of these sub-identifiers.
    Ids(Vec<SectionId>),
}

impl SectionMatch {
    pub fn matches(&self, index: usize, id: &SectionId) -> bool {
        match self {
            Self::Index(i) => *i == index,
            Self::Range { from, to } => (*from..=*to).contains(&index),
            Self::Ids(ids) => ids.contains(id),
        }
    }
}

/// One row of a page's navigation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavRule {
    pub matches: SectionMatch,
    #[serde(default)]
    pub primary: Option<usize>,
    #[serde(default)]
    pub secondary: Option<usize>,
}

impl NavRule {
    pub fn new(matches: SectionMatch, primary: Option<usize>, secondary: Option<usize>) -> Self {
        Self {
            matches,
            primary,
            secondary,
        }
    }
}

/// Navigation slots to highlight.
///
/// Everything not named here is rendered inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
}

impl Highlight {
    pub fn is_primary(&self, slot: usize) -> bool {
        self.primary == Some(slot)
    }

    pub fn is_secondary(&self, slot: usize) -> bool {
        self.secondary == Some(slot)
    }
}

/// Ordered rule table; the first matching rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavMap {
    rules: Vec<NavRule>,
}

impl NavMap {
    pub fn new(rules: Vec<NavRule>) -> Self {
        Self { rules }
    }

    /// Section `i` highlights primary slot `i`.
    pub fn linear(sections: usize) -> Self {
        Self::new(
            (0..sections)
                .map(|i| NavRule::new(SectionMatch::Index(i), Some(i), None))
                .collect(),
        )
    }

    pub fn rules(&self) -> &[NavRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Highlight for the section at `index` carrying `id`.
    pub fn highlight(&self, index: usize, id: &SectionId) -> Highlight {
        self.rules
            .iter()
            .find(|rule| rule.matches.matches(index, id))
            .map(|rule| Highlight {
                primary: rule.primary,
                secondary: rule.secondary,
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Chapter layout with intermediate slides: overview, chapter one
    /// (1, 1a, 1b, 2, 2a, 3), chapter two (4..=7), chapter three (8, 9).
    fn chapter_map() -> NavMap {
        serde_json::from_str(
            r#"[
                { "matches": ["1a", "1b"], "primary": 1, "secondary": 0 },
                { "matches": ["2a"], "primary": 1, "secondary": 1 },
                { "matches": 0, "primary": 0 },
                { "matches": 1, "primary": 1, "secondary": 0 },
                { "matches": 2, "primary": 1, "secondary": 1 },
                { "matches": 3, "primary": 1, "secondary": 2 },
                { "matches": { "from": 4, "to": 7 }, "primary": 2 },
                { "matches": { "from": 8, "to": 9 }, "primary": 3 }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_linear_map() {
        let map = NavMap::linear(3);
        let hl = map.highlight(0, &SectionId::from_position(0));
        assert!(hl.is_primary(0));
        assert!(!hl.is_primary(1));
        assert!(!hl.is_primary(2));
        assert_eq!(hl.secondary, None);

        assert_eq!(
            map.highlight(2, &SectionId::from_position(2)).primary,
            Some(2)
        );
    }

    #[test]
    fn test_sub_identifiers_win_over_positions() {
        let map = chapter_map();
        // "1a" sits at position 2 but keeps chapter one / first sub-item lit.
        let hl = map.highlight(2, &SectionId::new("1a"));
        assert_eq!(hl.primary, Some(1));
        assert_eq!(hl.secondary, Some(0));
    }

    #[test]
    fn test_ranges() {
        let map = chapter_map();
        for i in 4..=7 {
            let hl = map.highlight(i, &SectionId::from_position(i));
            assert_eq!(hl.primary, Some(2));
            assert_eq!(hl.secondary, None);
        }
        assert_eq!(map.highlight(9, &SectionId::from_position(9)).primary, Some(3));
    }

    #[test]
    fn test_unmatched_section_clears_everything() {
        let map = chapter_map();
        assert_eq!(
            map.highlight(42, &SectionId::from_position(42)),
            Highlight::default()
        );
        assert_eq!(NavMap::default().highlight(0, &SectionId::new("0")), Highlight::default());
    }
}
