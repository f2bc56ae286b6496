//! Site copy, compiled in from `content/site.json`.

use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site content: {0}")]
    Invalid(String),
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Link {
    pub name: String,
    pub link: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Stat {
    pub from: i64,
    pub to: i64,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Project {
    pub kind: MediaKind,
    pub title: String,
    pub description: String,
    pub src: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ProcessStep {
    pub name: String,
    pub description: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Testimonial {
    pub name: String,
    pub title: String,
    pub quote: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SiteContent {
    pub brand: String,
    pub studio: String,
    pub contact_email: String,
    pub nav: Vec<Link>,
    pub stats: Vec<Stat>,
    pub projects: Vec<Project>,
    pub process: Vec<ProcessStep>,
    pub testimonials: Vec<Testimonial>,
    pub socials: Vec<Link>,
    pub footer_sections: Vec<Link>,
}

impl SiteContent {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if let Some(stat) = self.stats.iter().find(|stat| stat.to < stat.from) {
            return Err(ContentError::Invalid(format!(
                "stat '{}' counts down from {} to {}",
                stat.label, stat.from, stat.to
            )));
        }
        if self.testimonials.is_empty() {
            return Err(ContentError::Invalid("no testimonials for the marquee".to_string()));
        }
        Ok(())
    }
}

pub fn load() -> Result<SiteContent, ContentError> {
    SiteContent::from_json(SITE_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_loads() {
        let content = load().expect("bundled content should be valid");
        assert_eq!(content.nav.len(), 3);
        assert_eq!(content.stats[0].to, 30);
        assert_eq!(content.testimonials.len(), 6);
        assert_eq!(content.process.len(), 5);
        assert!(content.projects.iter().all(|p| p.kind == MediaKind::Image));
    }

    #[test]
    fn test_project_media_ships_with_the_site() {
        let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let content = load().expect("bundled content should be valid");
        for project in &content.projects {
            let name = project
                .src
                .strip_prefix("/assets/")
                .unwrap_or_else(|| panic!("{} is not served from /assets", project.src));
            assert!(assets.join(name).is_file(), "missing asset {}", project.src);
        }
    }

    fn minimal(stats: &str, testimonials: &str) -> String {
        format!(
            r#"{{
                "brand": "b", "studio": "s", "contact_email": "e@x",
                "nav": [], "stats": {stats}, "projects": [], "process": [],
                "testimonials": {testimonials}, "socials": [], "footer_sections": []
            }}"#
        )
    }

    #[test]
    fn test_countdown_stat_is_rejected() {
        let json = minimal(
            r#"[{"from": 10, "to": 1, "label": "Down"}]"#,
            r#"[{"name": "n", "title": "t", "quote": "q"}]"#,
        );
        match SiteContent::from_json(&json) {
            Err(ContentError::Invalid(msg)) => assert!(msg.contains("Down")),
            other => panic!("expected invalid content, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_marquee_is_rejected() {
        let json = minimal("[]", "[]");
        assert!(matches!(SiteContent::from_json(&json), Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(SiteContent::from_json("{"), Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_missing_suffix_defaults_to_empty() {
        let json = minimal(
            r#"[{"from": 0, "to": 5, "label": "Plain"}]"#,
            r#"[{"name": "n", "title": "t", "quote": "q"}]"#,
        );
        let content = SiteContent::from_json(&json).unwrap();
        assert_eq!(content.stats[0].suffix, "");
    }
}
