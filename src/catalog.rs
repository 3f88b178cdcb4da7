use std::collections::HashSet;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

pub use crate::blog::{Author, BlogPost};
use crate::blog::{get_posts, BlogError};

/// Project filter buttons, in display order.
pub const PROJECT_FILTERS: [&str; 5] = ["All", "Web", "Mobile", "AI", "FinTech"];

static CATALOG: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::load().expect("embedded catalog should parse"));

#[derive(Embed)]
#[folder = "content"]
struct Content;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub brand: String,
    pub brand_accent: String,
    pub monogram: String,
    pub availability: String,
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
    pub github: String,
    pub live: String,
}

impl Project {
    /// `All` matches everything; any other filter matches a tag containing it,
    /// ignoring case.
    pub fn matches_filter(&self, filter: &str) -> bool {
        if filter == PROJECT_FILTERS[0] {
            return true;
        }
        let filter = filter.to_lowercase();
        self.tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&filter))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArchiveRepo {
    pub name: String,
    pub stars: u32,
    pub forks: u32,
    pub tech: String,
    pub version: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub avatar: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    profile: Profile,
    nav_links: Vec<NavLink>,
    stats: Vec<Stat>,
    skill_categories: Vec<SkillCategory>,
    process: Vec<ProcessStep>,
    projects: Vec<Project>,
    archive: Vec<ArchiveRepo>,
    experience: Vec<Experience>,
    testimonials: Vec<Testimonial>,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog asset not found: {0}")]
    NotFound(String),
    #[error("Catalog asset {0} is not valid UTF-8")]
    Encoding(String),
    #[error("Couldn't parse catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Blog(#[from] BlogError),
    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },
}

/// All site content. Read-only after load.
#[derive(Debug)]
pub struct Catalog {
    pub profile: Profile,
    pub nav_links: Vec<NavLink>,
    pub stats: Vec<Stat>,
    pub skill_categories: Vec<SkillCategory>,
    pub process: Vec<ProcessStep>,
    pub projects: Vec<Project>,
    pub archive: Vec<ArchiveRepo>,
    pub experience: Vec<Experience>,
    pub testimonials: Vec<Testimonial>,
    pub posts: Vec<BlogPost>,
}

impl Catalog {
    pub fn load() -> Result<Self, CatalogError> {
        let name = "catalog.json";
        let file = Content::get(name).ok_or_else(|| CatalogError::NotFound(name.to_string()))?;
        let json = std::str::from_utf8(&file.data)
            .map_err(|_| CatalogError::Encoding(name.to_string()))?;
        let catalog = Self::from_parts(json, get_posts()?)?;
        log::debug!(
            "loaded catalog: {} projects, {} posts",
            catalog.projects.len(),
            catalog.posts.len()
        );
        Ok(catalog)
    }

    pub fn from_parts(json: &str, posts: Vec<BlogPost>) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        check_unique("project", file.projects.iter().map(|p| p.id))?;
        check_unique("post", posts.iter().map(|p| p.id))?;
        Ok(Self {
            profile: file.profile,
            nav_links: file.nav_links,
            stats: file.stats,
            skill_categories: file.skill_categories,
            process: file.process,
            projects: file.projects,
            archive: file.archive,
            experience: file.experience,
            testimonials: file.testimonials,
            posts,
        })
    }

    pub fn filtered_projects(&self, filter: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.matches_filter(filter))
            .collect()
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The project after `id` in display order, wrapping to the first.
    pub fn next_project(&self, id: u32) -> Option<&Project> {
        let index = self.projects.iter().position(|p| p.id == id)?;
        self.projects.get((index + 1) % self.projects.len())
    }

    pub fn post(&self, id: u32) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.id == id)
    }
}

fn check_unique(kind: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

/// The embedded site content, parsed on first use.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::load().expect("embedded catalog should parse");
        assert_eq!(catalog.projects.len(), 6);
        assert_eq!(catalog.skill_categories.len(), 4);
        assert_eq!(catalog.experience.len(), 3);
        assert_eq!(catalog.testimonials.len(), 3);
        assert_eq!(catalog.posts.len(), 3);
        assert_eq!(catalog.nav_links[0].href, "#about");
    }

    #[test]
    fn test_nav_links_are_in_page_anchors() {
        assert!(catalog()
            .nav_links
            .iter()
            .all(|link| link.href.starts_with('#')));
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let catalog = catalog();
        assert_eq!(
            ids(&catalog.filtered_projects("All")),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn test_filter_matches_tag_substring_ignoring_case() {
        let catalog = catalog();
        // WebGL, WebContainers
        assert_eq!(ids(&catalog.filtered_projects("Web")), vec![1, 6]);
        // "Tailwind", "WebContainers"
        assert_eq!(ids(&catalog.filtered_projects("AI")), vec![2, 6]);
        assert!(catalog.filtered_projects("FinTech").is_empty());
        assert!(catalog.filtered_projects("Mobile").is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.project(3).map(|p| p.title.as_str()), Some("Stripe-Level Gateway"));
        assert!(catalog.project(99).is_none());
        assert_eq!(catalog.post(2).map(|p| p.read_time.as_str()), Some("8 min read"));
    }

    #[test]
    fn test_next_project_wraps() {
        let catalog = catalog();
        assert_eq!(catalog.next_project(1).map(|p| p.id), Some(2));
        assert_eq!(catalog.next_project(6).map(|p| p.id), Some(1));
        assert!(catalog.next_project(42).is_none());
    }

    #[test]
    fn test_duplicate_project_ids_rejected() {
        let json = r##"{
            "profile": {"brand": "b", "brand_accent": "a", "monogram": "m", "availability": "x",
                        "github": "g", "linkedin": "l", "twitter": "t"},
            "nav_links": [], "stats": [], "skill_categories": [], "process": [],
            "projects": [
                {"id": 1, "title": "a", "description": "", "tags": [], "image": "", "github": "#", "live": "#"},
                {"id": 1, "title": "b", "description": "", "tags": [], "image": "", "github": "#", "live": "#"}
            ],
            "archive": [], "experience": [], "testimonials": []
        }"##;
        let err = Catalog::from_parts(json, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateId {
                kind: "project",
                id: 1
            }
        ));
    }

    #[test]
    fn test_malformed_catalog_is_json_error() {
        let err = Catalog::from_parts("{", Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
