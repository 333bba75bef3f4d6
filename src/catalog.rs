//! The portfolio catalog: static, read-only data backing the whole UI.
//!
//! A [`Catalog`] is loaded exactly once at startup, either from the JSON
//! document embedded in the binary or from a user-supplied file, and is never
//! mutated afterwards. Everything the interface shows (the profile header,
//! pitch lines, the project gallery, the experience timeline, and the skills
//! grid) comes out of this one structure. Facet enumerations for the filter
//! chips are derived here as well.

use std::path::{Path, PathBuf};

/// Project domain. A closed set: entries carrying any other label are
/// rejected at load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Category {
    /// Machine learning and computer vision work.
    #[serde(rename = "AI/ML")]
    AiMl,
    /// Data collection, cleaning, and analysis.
    #[serde(rename = "Data")]
    Data,
    /// Application backends and desktop apps.
    #[serde(rename = "Backend/Apps")]
    BackendApps,
    /// Relational, document, and graph database projects.
    #[serde(rename = "Databases")]
    Databases,
    /// Linux tooling and automation.
    #[serde(rename = "DevOps/Linux")]
    DevOpsLinux,
}

impl Category {
    /// Display label, identical to the serialized form.
    pub const fn label(self) -> &'static str {
        match self {
            Category::AiMl => "AI/ML",
            Category::Data => "Data",
            Category::BackendApps => "Backend/Apps",
            Category::Databases => "Databases",
            Category::DevOpsLinux => "DevOps/Linux",
        }
    }

    /// Parse a label back into a category; `None` for anything outside the
    /// closed set.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "AI/ML" => Some(Category::AiMl),
            "Data" => Some(Category::Data),
            "Backend/Apps" => Some(Category::BackendApps),
            "Databases" => Some(Category::Databases),
            "DevOps/Linux" => Some(Category::DevOpsLinux),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Optional external links attached to a project.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Links {
    /// Source repository URL, when published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Live demo URL, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

/// One showcased project.
///
/// `name` is unique across the catalog; ordering of `bullets` is significant
/// for display, and `tech` ordering is preserved for display even though the
/// filter treats it as a set.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CatalogItem {
    /// Unique display identifier.
    pub name: String,
    /// Project domain from the closed [`Category`] set.
    pub category: Category,
    /// Short descriptive subtitle.
    pub tag: String,
    /// Achievement statements, in rendering order.
    pub bullets: Vec<String>,
    /// Technology labels associated with the project.
    pub tech: Vec<String>,
    /// External links, each independently optional.
    #[serde(default)]
    pub links: Links,
    /// One-line "so what" summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
}

/// Profile header data.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    /// Full name.
    pub name: String,
    /// Professional headline.
    pub title: String,
    /// Location line.
    pub location: String,
    /// Contact email, also the copy-to-clipboard payload.
    pub email: String,
    /// GitHub profile URL.
    pub github: String,
    /// LinkedIn profile URL.
    pub linkedin: String,
    /// Resume document URL.
    #[serde(default)]
    pub resume_url: String,
}

/// One entry of the experience timeline.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ExperienceEntry {
    /// Role or engagement title.
    pub title: String,
    /// Organization or context.
    pub org: String,
    /// Date range, free text.
    pub date: String,
    /// Outcome-oriented bullets, in rendering order.
    pub bullets: Vec<String>,
}

/// Named group of skill labels for the skills grid.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SkillGroup {
    /// Group heading.
    pub group: String,
    /// Skill labels within the group.
    pub items: Vec<String>,
}

/// Raw project record as authored in JSON. The category is a plain string
/// here so a single bad entry can be dropped without failing the whole file.
#[derive(Debug, serde::Deserialize)]
struct RawItem {
    #[serde(default)]
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    tag: String,
    #[serde(default)]
    bullets: Vec<String>,
    #[serde(default)]
    tech: Vec<String>,
    #[serde(default)]
    links: Links,
    #[serde(default)]
    impact: Option<String>,
}

/// Raw portfolio document as authored in JSON.
#[derive(Debug, serde::Deserialize)]
struct RawCatalog {
    profile: Profile,
    #[serde(default)]
    pitch: Vec<String>,
    #[serde(default)]
    badges: Vec<String>,
    #[serde(default)]
    projects: Vec<RawItem>,
    #[serde(default)]
    experience: Vec<ExperienceEntry>,
    #[serde(default)]
    skills: Vec<SkillGroup>,
}

/// The full portfolio: profile, hero content, projects, and the side panes.
///
/// Constructed once at startup and treated as immutable for the process
/// lifetime.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Profile header data.
    pub profile: Profile,
    /// Quick-pitch lines for the hero section.
    pub pitch: Vec<String>,
    /// Badge labels shown under the pitch.
    pub badges: Vec<String>,
    /// Ordered, validated project list.
    pub projects: Vec<CatalogItem>,
    /// Experience timeline entries.
    pub experience: Vec<ExperienceEntry>,
    /// Skills grid groups.
    pub skills: Vec<SkillGroup>,
}

/// How many leading projects are rendered with a featured marker.
pub const FEATURED_COUNT: usize = 4;

/// Default portfolio document compiled into the binary.
const DEFAULT_PORTFOLIO: &str = include_str!("catalog/portfolio.json");

impl Catalog {
    /// Parse and validate a JSON document into a catalog.
    ///
    /// Malformed project entries (empty name, unknown category, no bullets,
    /// duplicate name) are excluded with a warning rather than failing the
    /// whole document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let raw: RawCatalog = serde_json::from_str(text)?;
        let mut projects: Vec<CatalogItem> = Vec::with_capacity(raw.projects.len());
        for item in raw.projects {
            if item.name.trim().is_empty() {
                tracing::warn!("skipping project with empty name");
                continue;
            }
            let Some(category) = Category::from_label(&item.category) else {
                tracing::warn!(name = %item.name, category = %item.category, "skipping project with unknown category");
                continue;
            };
            if item.bullets.is_empty() {
                tracing::warn!(name = %item.name, "skipping project without bullets");
                continue;
            }
            if projects.iter().any(|p: &CatalogItem| p.name == item.name) {
                tracing::warn!(name = %item.name, "skipping duplicate project name");
                continue;
            }
            projects.push(CatalogItem {
                name: item.name,
                category,
                tag: item.tag,
                bullets: item.bullets,
                tech: item.tech,
                links: item.links,
                impact: item.impact,
            });
        }
        Ok(Catalog {
            profile: raw.profile,
            pitch: raw.pitch,
            badges: raw.badges,
            projects,
            experience: raw.experience,
            skills: raw.skills,
        })
    }

    /// The portfolio compiled into the binary.
    pub fn embedded() -> Self {
        match Self::from_json(DEFAULT_PORTFOLIO) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "embedded portfolio failed to parse");
                Catalog::default()
            }
        }
    }

    /// Distinct categories present in the catalog, in first-seen order,
    /// preceded by the all-categories sentinel. Deterministic across calls.
    pub fn categories(&self) -> Vec<crate::filter::CategoryFilter> {
        let mut seen: Vec<Category> = Vec::new();
        for p in &self.projects {
            if !seen.contains(&p.category) {
                seen.push(p.category);
            }
        }
        let mut out = vec![crate::filter::CategoryFilter::All];
        out.extend(seen.into_iter().map(crate::filter::CategoryFilter::Only));
        out
    }

    /// Distinct technology labels across all projects, sorted with ordinal
    /// (case-sensitive) collation, preceded by the all-technologies sentinel.
    pub fn tech_options(&self) -> Vec<crate::filter::TechFilter> {
        let mut labels: Vec<String> = Vec::new();
        for p in &self.projects {
            for t in &p.tech {
                if !labels.iter().any(|l| l == t) {
                    labels.push(t.clone());
                }
            }
        }
        labels.sort();
        let mut out = vec![crate::filter::TechFilter::All];
        out.extend(labels.into_iter().map(crate::filter::TechFilter::Only));
        out
    }
}

/// Path of the optional user-supplied portfolio document.
pub fn user_data_path() -> PathBuf {
    crate::theme::config_dir().join("portfolio.json")
}

/// Load the catalog, preferring an explicit `--data` path, then the user's
/// config-dir document, then the embedded default. A file that cannot be
/// read or parsed logs a warning and falls through to the next source.
pub fn load(data_override: Option<&Path>) -> Catalog {
    let candidates: Vec<PathBuf> = match data_override {
        Some(p) => vec![p.to_path_buf()],
        None => vec![user_data_path()],
    };
    for path in candidates {
        if !path.is_file() {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(text) => match Catalog::from_json(&text) {
                Ok(c) => {
                    tracing::info!(path = %path.display(), projects = c.projects.len(), "loaded portfolio");
                    return c;
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "portfolio file invalid; using embedded data");
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "portfolio file unreadable; using embedded data");
            }
        }
    }
    Catalog::embedded()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{CategoryFilter, TechFilter};

    fn mini(json_projects: &str) -> Catalog {
        let doc = format!(
            r#"{{"profile":{{"name":"n","title":"t","location":"l","email":"e","github":"g","linkedin":"li"}},"projects":{json_projects}}}"#
        );
        Catalog::from_json(&doc).expect("valid document")
    }

    /// What: Embedded default portfolio parses, is non-empty, and keeps names unique.
    ///
    /// - Input: the compiled-in JSON document
    /// - Output: all entries survive validation with distinct names
    #[test]
    fn embedded_catalog_is_valid() {
        let c = Catalog::embedded();
        assert!(!c.projects.is_empty());
        assert!(!c.profile.name.is_empty());
        for (i, p) in c.projects.iter().enumerate() {
            assert!(!p.name.trim().is_empty());
            assert!(!p.bullets.is_empty());
            assert!(!p.tech.is_empty());
            assert!(c.projects[i + 1..].iter().all(|q| q.name != p.name));
        }
    }

    #[test]
    fn validation_excludes_malformed_entries() {
        let c = mini(
            r#"[
                {"name":"","category":"Data","tag":"","bullets":["b"],"tech":["T"]},
                {"name":"Bad Cat","category":"Quantum","tag":"","bullets":["b"],"tech":["T"]},
                {"name":"No Bullets","category":"Data","tag":"","bullets":[],"tech":["T"]},
                {"name":"Keeper","category":"Data","tag":"ok","bullets":["b"],"tech":["T"]},
                {"name":"Keeper","category":"Data","tag":"dup","bullets":["b"],"tech":["T"]}
            ]"#,
        );
        assert_eq!(c.projects.len(), 1);
        assert_eq!(c.projects[0].name, "Keeper");
        assert_eq!(c.projects[0].tag, "ok");
    }

    #[test]
    fn categories_first_seen_order_with_sentinel() {
        let c = mini(
            r#"[
                {"name":"A","category":"Databases","tag":"","bullets":["b"],"tech":["X"]},
                {"name":"B","category":"AI/ML","tag":"","bullets":["b"],"tech":["X"]},
                {"name":"C","category":"Databases","tag":"","bullets":["b"],"tech":["X"]}
            ]"#,
        );
        let cats = c.categories();
        assert_eq!(cats[0], CategoryFilter::All);
        assert_eq!(cats[1], CategoryFilter::Only(Category::Databases));
        assert_eq!(cats[2], CategoryFilter::Only(Category::AiMl));
        assert_eq!(cats.len(), 3);
        // Deterministic across calls
        assert_eq!(c.categories(), cats);
    }

    #[test]
    fn tech_options_sorted_unique_with_sentinel() {
        let c = mini(
            r#"[
                {"name":"A","category":"Data","tag":"","bullets":["b"],"tech":["Python","SQL"]},
                {"name":"B","category":"Data","tag":"","bullets":["b"],"tech":["Bash","Python"]}
            ]"#,
        );
        let opts = c.tech_options();
        assert_eq!(opts[0], TechFilter::All);
        let labels: Vec<&str> = opts[1..]
            .iter()
            .map(|t| match t {
                TechFilter::Only(s) => s.as_str(),
                TechFilter::All => unreachable!(),
            })
            .collect();
        assert_eq!(labels, ["Bash", "Python", "SQL"]);
    }

    #[test]
    fn category_labels_round_trip() {
        for c in [
            Category::AiMl,
            Category::Data,
            Category::BackendApps,
            Category::Databases,
            Category::DevOpsLinux,
        ] {
            assert_eq!(Category::from_label(c.label()), Some(c));
        }
        assert_eq!(Category::from_label("Quantum"), None);
    }
}
