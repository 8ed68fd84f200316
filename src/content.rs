use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};
#[cfg(feature = "ssr")]
use rust_embed::Embed;
#[cfg(feature = "ssr")]
use std::{collections::HashSet, sync::LazyLock};

pub const DEFAULT_CARD_COLOR: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";
pub const DEFAULT_TILE_COLOR: &str = "#F5E6D3";
pub const DEFAULT_IMAGE_POSITION: &str = "center 20%";

#[cfg(feature = "ssr")]
#[derive(Embed)]
#[folder = "content/projects"]
struct ProjectFiles;

#[cfg(feature = "ssr")]
#[derive(Embed)]
#[folder = "content/about"]
struct AboutFiles;

#[cfg(feature = "ssr")]
static PROJECTS: LazyLock<Result<Vec<Project>, ContentError>> = LazyLock::new(load_projects);
#[cfg(feature = "ssr")]
static ABOUT: LazyLock<Result<Vec<AboutSection>, ContentError>> = LazyLock::new(load_about);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("couldn't parse front matter of {file}")]
    Parse { file: String },
    #[error("{file} is not valid UTF-8")]
    Encoding { file: String },
    #[error("project id {id} is used more than once")]
    DuplicateId { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledLink {
    pub url: String,
    pub label: String,
}

/// A project points either at one page or at several labelled ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectLinks {
    Single(String),
    Labeled(Vec<LabeledLink>),
}

impl ProjectLinks {
    pub fn labeled(&self, default_label: &str) -> Vec<LabeledLink> {
        match self {
            ProjectLinks::Single(url) => vec![LabeledLink {
                url: url.clone(),
                label: default_label.to_string(),
            }],
            ProjectLinks::Labeled(links) => links.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub image_position: Option<String>,
    pub color: Option<String>,
    pub video: Option<String>,
    pub links: Option<ProjectLinks>,
    pub year: Option<u16>,
    pub tags: Vec<String>,
    /// The biography card that opens the stack.
    pub intro: bool,
    pub order: i32,
}

impl Project {
    /// Description on a single line, for clamped previews.
    pub fn summary(&self) -> String {
        self.description
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn links(&self, default_label: &str) -> Vec<LabeledLink> {
        self.links
            .as_ref()
            .map(|l| l.labeled(default_label))
            .unwrap_or_default()
    }

    pub fn image_position(&self) -> &str {
        self.image_position
            .as_deref()
            .unwrap_or(DEFAULT_IMAGE_POSITION)
    }
}

/// Everything except the biography card.
pub fn showcase(projects: Vec<Project>) -> Vec<Project> {
    projects.into_iter().filter(|p| !p.intro).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    pub title: String,
    pub order: i32,
    pub html: String,
}

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
struct ProjectFrontMatter {
    id: String,
    title: String,
    order: i32,
    image: Option<String>,
    image_position: Option<String>,
    color: Option<String>,
    video: Option<String>,
    links: Option<ProjectLinks>,
    year: Option<u16>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    intro: bool,
}

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
struct AboutFrontMatter {
    title: String,
    order: i32,
}

#[cfg(feature = "ssr")]
pub fn get_projects() -> Result<Vec<Project>, ContentError> {
    PROJECTS.clone()
}

#[cfg(feature = "ssr")]
pub fn get_about() -> Result<Vec<AboutSection>, ContentError> {
    ABOUT.clone()
}

#[cfg(feature = "ssr")]
fn read<E: Embed>(file: &str) -> Result<String, ContentError> {
    let content = E::get(file).ok_or_else(|| ContentError::Parse {
        file: file.to_string(),
    })?;
    decode(file, content.data.into())
}

#[cfg(feature = "ssr")]
fn decode(file: &str, data: Vec<u8>) -> Result<String, ContentError> {
    String::from_utf8(data).map_err(|_| ContentError::Encoding {
        file: file.to_string(),
    })
}

#[cfg(feature = "ssr")]
fn load_projects() -> Result<Vec<Project>, ContentError> {
    let projects = ProjectFiles::iter()
        .filter(|f| f.ends_with(".md"))
        .map(|f| parse_project(&f, &read::<ProjectFiles>(&f)?))
        .collect::<Result<Vec<_>, _>>()?;
    let projects = validate(projects)?;
    tracing::info!(count = projects.len(), "loaded projects");
    Ok(projects)
}

#[cfg(feature = "ssr")]
fn load_about() -> Result<Vec<AboutSection>, ContentError> {
    let mut sections = AboutFiles::iter()
        .filter(|f| f.ends_with(".md"))
        .map(|f| parse_about(&f, &read::<AboutFiles>(&f)?))
        .collect::<Result<Vec<_>, _>>()?;
    sections.sort_by_key(|s| s.order);
    tracing::info!(count = sections.len(), "loaded about sections");
    Ok(sections)
}

#[cfg(feature = "ssr")]
fn parse_project(file: &str, text: &str) -> Result<Project, ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<ProjectFrontMatter>(text)
        .ok_or_else(|| ContentError::Parse {
            file: file.to_string(),
        })?;
    let fm = parsed.data;
    Ok(Project {
        id: fm.id,
        title: fm.title,
        description: parsed.content.trim().to_string(),
        image: fm.image,
        image_position: fm.image_position,
        color: fm.color,
        video: fm.video,
        links: fm.links,
        year: fm.year,
        tags: fm.tags,
        intro: fm.intro,
        order: fm.order,
    })
}

#[cfg(feature = "ssr")]
fn parse_about(file: &str, text: &str) -> Result<AboutSection, ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<AboutFrontMatter>(text)
        .ok_or_else(|| ContentError::Parse {
            file: file.to_string(),
        })?;

    let parser = Parser::new_ext(&parsed.content, Options::all());
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);

    Ok(AboutSection {
        title: parsed.data.title,
        order: parsed.data.order,
        html,
    })
}

/// Sort by `order` and reject duplicate ids; ids key the rendered lists.
#[cfg(feature = "ssr")]
fn validate(mut projects: Vec<Project>) -> Result<Vec<Project>, ContentError> {
    let mut seen = HashSet::new();
    for p in &projects {
        if !seen.insert(p.id.as_str()) {
            return Err(ContentError::DuplicateId { id: p.id.clone() });
        }
    }
    projects.sort_by_key(|p| p.order);
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, order: i32, intro: bool) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: "First line.\n\nSecond   line.".to_string(),
            image: None,
            image_position: None,
            color: None,
            video: None,
            links: None,
            year: None,
            tags: vec![],
            intro,
            order,
        }
    }

    #[test]
    fn test_summary_folds_whitespace() {
        assert_eq!(project("a", 1, false).summary(), "First line. Second line.");
    }

    #[test]
    fn test_links_labels() {
        let mut p = project("a", 1, false);
        assert!(p.links("See more").is_empty());

        p.links = Some(ProjectLinks::Single("https://example.org".to_string()));
        assert_eq!(
            p.links("See more"),
            vec![LabeledLink {
                url: "https://example.org".to_string(),
                label: "See more".to_string(),
            }]
        );

        let labeled = vec![
            LabeledLink {
                url: "/a".to_string(),
                label: "Voir le design".to_string(),
            },
            LabeledLink {
                url: "/b".to_string(),
                label: "Voir le document".to_string(),
            },
        ];
        p.links = Some(ProjectLinks::Labeled(labeled.clone()));
        assert_eq!(p.links("See more"), labeled);
    }

    #[test]
    fn test_showcase_drops_intro() {
        let all = vec![project("1", 1, true), project("2", 2, false)];
        let shown = showcase(all);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "2");
    }

    #[test]
    fn test_image_position_default() {
        let mut p = project("a", 1, false);
        assert_eq!(p.image_position(), "center 20%");
        p.image_position = Some("25% center".to_string());
        assert_eq!(p.image_position(), "25% center");
    }

    #[test]
    fn test_links_deserialize_both_shapes() {
        let single: ProjectLinks = serde_json::from_str(r#""https://example.org""#).unwrap();
        assert_eq!(single, ProjectLinks::Single("https://example.org".to_string()));

        let many: ProjectLinks =
            serde_json::from_str(r#"[{"url": "/demo.mp4", "label": "Voir la démo vidéo"}]"#)
                .unwrap();
        assert_eq!(many.labeled("ignored")[0].label, "Voir la démo vidéo");
    }

    #[cfg(feature = "ssr")]
    mod ssr {
        use super::super::*;
        use super::project;

        const BEITEA: &str = r##"---
id: "2"
title: Beitea
order: 2
image: /media/beitea-capture.png
color: "#A8D5BA"
links: https://example.org/beitea
---
Stratégie marketing pour BEITEA.
"##;

        const NEOGEN: &str = r#"---
id: "4"
title: Neogen-IA
order: 4
links:
  - url: https://example.org/design
    label: Voir le design
  - url: https://example.org/doc
    label: Voir le document
tags: [IA, Contenu]
---
NeogenIA, agence de contenu.
"#;

        #[test]
        fn test_parse_project_single_link() {
            let p = parse_project("beitea.md", BEITEA).unwrap();
            assert_eq!(p.id, "2");
            assert_eq!(p.title, "Beitea");
            assert_eq!(p.description, "Stratégie marketing pour BEITEA.");
            assert_eq!(p.color.as_deref(), Some("#A8D5BA"));
            assert_eq!(
                p.links,
                Some(ProjectLinks::Single("https://example.org/beitea".to_string()))
            );
            assert!(!p.intro);
            assert!(p.tags.is_empty());
        }

        #[test]
        fn test_parse_project_labeled_links() {
            let p = parse_project("neogen.md", NEOGEN).unwrap();
            let links = p.links("See more");
            assert_eq!(links.len(), 2);
            assert_eq!(links[1].label, "Voir le document");
            assert_eq!(p.tags, vec!["IA".to_string(), "Contenu".to_string()]);
            assert_eq!(p.image, None);
        }

        #[test]
        fn test_parse_project_missing_fields() {
            let broken = "---\ntitle: No id\n---\nbody\n";
            assert_eq!(
                parse_project("broken.md", broken),
                Err(ContentError::Parse {
                    file: "broken.md".to_string()
                })
            );
        }

        #[test]
        fn test_parse_about_renders_markdown() {
            let text = "---\ntitle: Compétences techniques\norder: 2\n---\nJe maîtrise **SQL**.\n";
            let section = parse_about("skills.md", text).unwrap();
            assert_eq!(section.title, "Compétences techniques");
            assert_eq!(section.order, 2);
            assert!(section.html.contains("<strong>SQL</strong>"));
        }

        #[test]
        fn test_decode_rejects_invalid_utf8() {
            assert_eq!(decode("ok.md", "é".as_bytes().to_vec()).as_deref(), Ok("é"));
            assert_eq!(
                decode("latin1.md", vec![b'c', 0xe9, b'!']),
                Err(ContentError::Encoding {
                    file: "latin1.md".to_string()
                })
            );
        }

        #[test]
        fn test_validate_sorts_and_rejects_duplicates() {
            let sorted = validate(vec![project("b", 2, false), project("a", 1, true)]).unwrap();
            assert_eq!(sorted[0].id, "a");

            let dup = validate(vec![project("a", 1, false), project("a", 2, false)]);
            assert_eq!(
                dup,
                Err(ContentError::DuplicateId {
                    id: "a".to_string()
                })
            );
        }

        #[test]
        fn test_embedded_content_loads() {
            let projects = get_projects().unwrap();
            assert!(projects.len() >= 2);
            assert!(projects[0].intro);
            assert!(projects.windows(2).all(|w| w[0].order <= w[1].order));

            let about = get_about().unwrap();
            assert!(!about.is_empty());
        }
    }
}
