use super::*;

fn project(n: usize) -> Project {
    Project {
        title: format!("Project {n}"),
        excerpt: format!("Excerpt {n}"),
        image: format!("assets/img/p{n}.png"),
        url: format!("projects/p{n}.html"),
        stack: vec!["Rust".to_owned()],
    }
}

fn ten_projects() -> Vec<Project> {
    (0..10).map(project).collect()
}

// =============================================================
// Card counts and order
// =============================================================

#[test]
fn featured_renders_first_four_in_order() {
    let cards = card_models(&ten_projects(), ProjectList::Featured, PageDepth::Root, &SiteConfig::default());
    let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Project 0", "Project 1", "Project 2", "Project 3"]);
}

#[test]
fn full_list_renders_every_project() {
    let cards = card_models(&ten_projects(), ProjectList::FullList, PageDepth::Nested, &SiteConfig::default());
    assert_eq!(cards.len(), 10);
    assert_eq!(cards[9].title, "Project 9");
}

#[test]
fn featured_with_fewer_projects_renders_all() {
    let projects: Vec<Project> = (0..2).map(project).collect();
    let cards = card_models(&projects, ProjectList::Featured, PageDepth::Root, &SiteConfig::default());
    assert_eq!(cards.len(), 2);
}

#[test]
fn empty_data_renders_nothing() {
    assert!(card_models(&[], ProjectList::FullList, PageDepth::Root, &SiteConfig::default()).is_empty());
}

// =============================================================
// Links, images, chips
// =============================================================

#[test]
fn absolute_project_url_is_used_verbatim() {
    let mut p = project(1);
    p.url = "https://github.com/someone/thing".to_owned();
    let card = CardModel::new(&p, ProjectList::FullList, PageDepth::Nested);
    assert_eq!(card.href, "https://github.com/someone/thing");
}

#[test]
fn relative_project_url_follows_depth() {
    let p = project(1);
    assert_eq!(CardModel::new(&p, ProjectList::FullList, PageDepth::Nested).href, "../projects/p1.html");
    assert_eq!(CardModel::new(&p, ProjectList::Featured, PageDepth::Root).href, "projects/p1.html");
}

#[test]
fn image_path_follows_depth() {
    let p = project(3);
    assert_eq!(CardModel::new(&p, ProjectList::FullList, PageDepth::Nested).image_src, "../assets/img/p3.png");
}

#[test]
fn cta_label_depends_on_list() {
    let p = project(0);
    assert_eq!(CardModel::new(&p, ProjectList::Featured, PageDepth::Root).cta_label, "Case study");
    assert_eq!(CardModel::new(&p, ProjectList::FullList, PageDepth::Root).cta_label, "Read more");
}

#[test]
fn empty_stack_means_no_chips() {
    let mut p = project(0);
    p.stack.clear();
    assert!(CardModel::new(&p, ProjectList::FullList, PageDepth::Root).chips.is_empty());
}

// =============================================================
// Containers and data location
// =============================================================

#[test]
fn lists_target_their_containers() {
    assert_eq!(ProjectList::Featured.container_id(), "featuredGrid");
    assert_eq!(ProjectList::FullList.container_id(), "project-list");
}

#[test]
fn data_url_follows_depth() {
    let config = SiteConfig::default();
    assert_eq!(data_url(&config, PageDepth::Root), "data/projects.json");
    assert_eq!(data_url(&config, PageDepth::Nested), "../data/projects.json");
}

#[cfg(not(feature = "csr"))]
#[test]
fn render_is_a_noop_without_browser() {
    futures::executor::block_on(render(ProjectList::Featured, &SiteConfig::default()));
}
