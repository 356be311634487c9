//! Project cards for the featured grid and the full project list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both lists read `data/projects.json` and share one card template. They
//! differ only in container, card count, and call-to-action label. Card
//! models are computed from the data up front so path and CTA rules stay
//! testable without a DOM; the Leptos view only lays them out.
//!
//! ERROR HANDLING
//! ==============
//! Missing container: nothing happens. Fetch or parse failure: a warning is
//! logged and the container stays empty.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::net::types::Project;
use crate::util::page::PageDepth;

const IMAGE_STYLE: &str = "width:100%;height:160px;object-fit:cover;border-radius:8px";
const TITLE_STYLE: &str = "margin:.6rem 0 .2rem";
const EXCERPT_STYLE: &str = "color:var(--muted);margin:0 0 .6rem";
const CHIPS_STYLE: &str = "display:flex;gap:.5rem;flex-wrap:wrap";
const CTA_ROW_STYLE: &str = "margin-top:.8rem";

/// Which project list a page hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectList {
    /// Home page highlight grid.
    Featured,
    /// Every project, on the projects index.
    FullList,
}

impl ProjectList {
    #[must_use]
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Featured => "featuredGrid",
            Self::FullList => "project-list",
        }
    }

    #[must_use]
    pub fn cta_label(self) -> &'static str {
        match self {
            Self::Featured => "Case study",
            Self::FullList => "Read more",
        }
    }

    /// Maximum number of cards, `None` for all.
    #[must_use]
    pub fn limit(self, config: &SiteConfig) -> Option<usize> {
        match self {
            Self::Featured => Some(config.featured_limit),
            Self::FullList => None,
        }
    }
}

/// Render-ready card contents with every path resolved for the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardModel {
    pub title: String,
    pub excerpt: String,
    pub image_src: String,
    pub href: String,
    pub cta_label: &'static str,
    /// Empty means no chip row.
    pub chips: Vec<String>,
}

impl CardModel {
    #[must_use]
    pub fn new(project: &Project, list: ProjectList, depth: PageDepth) -> Self {
        Self {
            title: project.title.clone(),
            excerpt: project.excerpt.clone(),
            image_src: depth.resolve_asset(&project.image),
            href: depth.resolve_asset(&project.url),
            cta_label: list.cta_label(),
            chips: project.stack.clone(),
        }
    }
}

/// Cards for `list` in data order, truncated to the list's limit.
#[must_use]
pub fn card_models(projects: &[Project], list: ProjectList, depth: PageDepth, config: &SiteConfig) -> Vec<CardModel> {
    let limit = list.limit(config).unwrap_or(projects.len());
    projects
        .iter()
        .take(limit)
        .map(|project| CardModel::new(project, list, depth))
        .collect()
}

/// Data file URL for this page.
#[must_use]
pub fn data_url(config: &SiteConfig, depth: PageDepth) -> String {
    depth.resolve_asset(&config.projects_data_path)
}

/// A single project card.
#[component]
pub fn ProjectCard(card: CardModel) -> impl IntoView {
    let CardModel { title, excerpt, image_src, href, cta_label, chips } = card;
    let chip_row = (!chips.is_empty()).then(|| {
        view! {
            <div style=CHIPS_STYLE>
                {chips.into_iter().map(|chip| view! { <span class="chip">{chip}</span> }).collect_view()}
            </div>
        }
    });

    view! {
        <article class="card">
            <img src=image_src alt={title.clone()} style=IMAGE_STYLE loading="lazy" decoding="async"/>
            <h3 style=TITLE_STYLE>{title}</h3>
            <p style=EXCERPT_STYLE>{excerpt}</p>
            {chip_row}
            <div style=CTA_ROW_STYLE>
                <a class="btn btn-ghost" href=href>{cta_label}</a>
            </div>
        </article>
    }
}

/// Fetch the project data and append the cards for `list` to its container.
pub async fn render(list: ProjectList, config: &SiteConfig) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(container) = crate::util::dom::document()
            .and_then(|d| d.get_element_by_id(list.container_id()))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let depth = PageDepth::current();
        let url = data_url(config, depth);
        let projects = match crate::net::api::fetch_projects(&url).await {
            Ok(projects) => projects,
            Err(e) => {
                log::warn!("could not load projects for {}: {e}", list.container_id());
                return;
            }
        };
        let cards = card_models(&projects, list, depth, config);
        let count = cards.len();
        leptos::mount::mount_to(container, move || {
            cards.into_iter().map(|card| view! { <ProjectCard card=card/> }).collect_view()
        })
        .forget();
        log::debug!("rendered {count} project cards into #{}", list.container_id());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (list, config);
    }
}
