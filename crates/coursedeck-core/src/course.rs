//! Course definition: pages, their sections and navigation tables.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::navigation::{NavMap, SectionId};
use crate::scroller::ScrollerConfig;

/// Errors raised while loading a course definition.
#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    #[error("Invalid course JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Course has no pages")]
    NoPages,
    #[error("Duplicate page id: '{0}'")]
    DuplicatePage(String),
    #[error("Duplicate section id '{id}' on page '{page}'")]
    DuplicateSection { page: String, id: SectionId },
    #[error("Nav item '{label}' on page '{page}' targets section {section}, page has {len}")]
    NavTargetOutOfRange {
        page: String,
        label: String,
        section: usize,
        len: usize,
    },
}

/// Level of a side-navigation item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavLevel {
    #[default]
    Primary,
    Secondary,
}

/// Side-navigation entry. Its slot is its position among items of the same level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    /// Section jumped to on click.
    pub section: usize,
    #[serde(default)]
    pub level: NavLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepConfig {
    pub label: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    pub src: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// One full-viewport slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Sub-identifier such as `"2a"`; defaults to the position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SectionId>,
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageConfig>,
}

/// Top-level page of the deck, reachable from the navbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub id: String,
    /// Navbar label.
    pub label: String,
    /// Hero title, typed out on activation.
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default = "default_true")]
    pub scroll_hint: bool,
    #[serde(default)]
    pub nav: NavMap,
    #[serde(default)]
    pub nav_items: Vec<NavItem>,
    pub sections: Vec<SectionConfig>,
}

fn default_true() -> bool {
    true
}

impl PageConfig {
    /// Section identifiers in display order.
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, s)| s.id.clone().unwrap_or_else(|| SectionId::from_position(i)))
            .collect()
    }

    /// Items of `level`, paired with their slot number.
    pub fn nav_slots(&self, level: NavLevel) -> impl Iterator<Item = (usize, &NavItem)> {
        self.nav_items
            .iter()
            .filter(move |item| item.level == level)
            .enumerate()
    }

    fn validate(&self) -> Result<(), CourseError> {
        let mut seen = HashSet::new();
        for id in self.section_ids() {
            if !seen.insert(id.clone()) {
                return Err(CourseError::DuplicateSection {
                    page: self.id.clone(),
                    id,
                });
            }
        }

        let len = self.sections.len();
        if let Some(item) = self.nav_items.iter().find(|item| item.section >= len) {
            return Err(CourseError::NavTargetOutOfRange {
                page: self.id.clone(),
                label: item.label.clone(),
                section: item.section,
                len,
            });
        }
        Ok(())
    }
}

/// Whole deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseConfig {
    pub title: String,
    pub pages: Vec<PageConfig>,
    #[serde(default)]
    pub scroller: ScrollerConfig,
}

impl CourseConfig {
    /// Loads and validates a course from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CourseError> {
        let course: Self = serde_json::from_str(json)?;
        course.validate()?;
        Ok(course)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Course shipped with the client.
    /// Loaded from courses/default.json at compile time.
    pub fn bundled() -> Result<Self, CourseError> {
        const DEFAULT_COURSE_JSON: &str = include_str!("../courses/default.json");
        Self::from_json(DEFAULT_COURSE_JSON)
    }

    pub fn page(&self, id: &str) -> Option<&PageConfig> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Navbar slot of page `id`.
    pub fn page_position(&self, id: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    pub fn first_page(&self) -> Option<&PageConfig> {
        self.pages.first()
    }

    fn validate(&self) -> Result<(), CourseError> {
        if self.pages.is_empty() {
            return Err(CourseError::NoPages);
        }

        let mut seen = HashSet::new();
        for page in &self.pages {
            if !seen.insert(page.id.as_str()) {
                return Err(CourseError::DuplicatePage(page.id.clone()));
            }
            page.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(pages: &str) -> String {
        format!(r#"{{ "title": "Test", "pages": {pages} }}"#)
    }

    #[test]
    fn test_bundled_course() {
        let course = CourseConfig::bundled().expect("bundled course must load");
        assert!(!course.pages.is_empty());
        assert_eq!(course.page_position("overview"), Some(0));

        let chapters = course.page("course").expect("course page");
        let ids = chapters.section_ids();
        assert!(ids.contains(&SectionId::new("1a")));
        assert!(chapters.nav_slots(NavLevel::Secondary).count() > 0);

        // Intermediate slides keep their chapter lit.
        let hl = chapters.nav.highlight(2, &ids[2]);
        assert_eq!(ids[2], SectionId::new("1a"));
        assert_eq!((hl.primary, hl.secondary), (Some(1), Some(0)));
    }

    #[test]
    fn test_section_ids_default_to_position() {
        let json = minimal(
            r#"[{
                "id": "p", "label": "P", "title": "T",
                "sections": [
                    { "heading": "zero" },
                    { "id": "0a", "heading": "intermediate" },
                    { "heading": "two" }
                ]
            }]"#,
        );
        let course = CourseConfig::from_json(&json).unwrap();
        let page = course.first_page().unwrap();
        assert_eq!(
            page.section_ids(),
            vec![SectionId::new("0"), SectionId::new("0a"), SectionId::new("2")]
        );
        assert!(page.scroll_hint);
        assert_eq!(course.scroller, ScrollerConfig::default());
    }

    #[test]
    fn test_nav_slots_are_numbered_per_level() {
        let json = minimal(
            r#"[{
                "id": "p", "label": "P", "title": "T",
                "nav_items": [
                    { "label": "Overview", "section": 0 },
                    { "label": "Chapter", "section": 1 },
                    { "label": "Part A", "section": 1, "level": "secondary" },
                    { "label": "Part B", "section": 2, "level": "secondary" }
                ],
                "sections": [{ "heading": "a" }, { "heading": "b" }, { "heading": "c" }]
            }]"#,
        );
        let course = CourseConfig::from_json(&json).unwrap();
        let page = course.first_page().unwrap();

        let secondary: Vec<_> = page
            .nav_slots(NavLevel::Secondary)
            .map(|(slot, item)| (slot, item.label.as_str()))
            .collect();
        assert_eq!(secondary, vec![(0, "Part A"), (1, "Part B")]);
        assert_eq!(page.nav_slots(NavLevel::Primary).count(), 2);
    }

    #[test]
    fn test_rejects_empty_course() {
        let err = CourseConfig::from_json(&minimal("[]")).unwrap_err();
        assert!(matches!(err, CourseError::NoPages));
    }

    #[test]
    fn test_rejects_duplicate_pages() {
        let json = minimal(
            r#"[
                { "id": "p", "label": "P", "title": "T", "sections": [] },
                { "id": "p", "label": "Q", "title": "T", "sections": [] }
            ]"#,
        );
        let err = CourseConfig::from_json(&json).unwrap_err();
        assert!(matches!(err, CourseError::DuplicatePage(id) if id == "p"));
    }

    #[test]
    fn test_rejects_duplicate_section_ids() {
        let json = minimal(
            r#"[{
                "id": "p", "label": "P", "title": "T",
                "sections": [{ "heading": "a" }, { "id": "0", "heading": "b" }]
            }]"#,
        );
        let err = CourseConfig::from_json(&json).unwrap_err();
        assert!(matches!(err, CourseError::DuplicateSection { .. }));
    }

    #[test]
    fn test_rejects_nav_item_past_last_section() {
        let json = minimal(
            r#"[{
                "id": "p", "label": "P", "title": "T",
                "nav_items": [{ "label": "Ghost", "section": 5 }],
                "sections": [{ "heading": "a" }]
            }]"#,
        );
        let err = CourseConfig::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            CourseError::NavTargetOutOfRange { section: 5, len: 1, .. }
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = CourseConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CourseError::Parse(_)));
    }
}
