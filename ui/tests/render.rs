use leptos::prelude::*;
use portfolio_ui::components::footer::SiteFooter;
use portfolio_ui::components::menu::MenuState;
use portfolio_ui::components::nav::{PANEL_ID, SiteNav, toggle_icon};
use portfolio_ui::content::{About, Contact, Project, SkillGroup};
use portfolio_ui::pages::portfolio::{AboutSection, ContactSection, Hero, ProjectsSection, SkillsSection};
use portfolio_ui::SiteContent;

fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
    Owner::new().with(|| f().to_html())
}

fn project(title: &str, tags: &[&str]) -> Project {
    Project {
        title: title.into(),
        description: format!("{title} description"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        live_url: format!("https://{}.example.com/", title.to_lowercase()),
        repo_url: "https://github.com/someone/repo".into(),
    }
}

#[test]
fn empty_project_list_renders_no_cards() {
    let html = render(|| view! { <ProjectsSection projects=Vec::new()/> });
    assert!(html.contains(r#"id="projects""#));
    assert_eq!(html.matches("<article").count(), 0);
}

#[test]
fn one_card_per_project() {
    let projects = vec![project("Alpha", &["Rust"]), project("Beta", &["Leptos", "Wasm"])];
    let html = render(move || view! { <ProjectsSection projects/> });

    assert_eq!(html.matches("<article").count(), 2);
    assert!(html.contains("Alpha"));
    assert!(html.contains("https://beta.example.com/"));
    assert_eq!(html.matches("<li").count(), 3);
}

#[test]
fn project_without_tags_renders_empty_tag_list() {
    let src = r#"{
        "profile": { "name": "N", "shortName": "N", "role": "r", "headline": "h",
                     "intro": "i", "githubUrl": "https://github.com/n" },
        "projects": [{ "title": "Bare", "description": "d",
                       "liveUrl": "https://l", "repoUrl": "https://r" }],
        "contact": { "email": "n@example.com", "linkedinUrl": "https://li" }
    }"#;
    let content = SiteContent::from_json(src).unwrap();
    let projects = content.projects;

    let html = render(move || view! { <ProjectsSection projects/> });
    assert_eq!(html.matches("<article").count(), 1);
    assert!(html.contains("Bare"));
    assert!(!html.contains("<li"));
}

#[test]
fn external_links_open_in_new_tab() {
    let html = render(|| view! { <ProjectsSection projects=vec![project("Gamma", &[])]/> });
    assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
    assert_eq!(html.matches(r#"rel="noreferrer""#).count(), 2);
}

#[test]
fn skills_render_each_group() {
    let groups = vec![
        SkillGroup { name: "Frontend".into(), items: vec!["Leptos".into(), "Tailwind".into()] },
        SkillGroup { name: "Empty".into(), items: Vec::new() },
    ];
    let html = render(move || view! { <SkillsSection groups/> });

    assert!(html.contains(r#"id="skills""#));
    assert!(html.contains("Frontend"));
    assert!(html.contains("Empty"));
    assert_eq!(html.matches("<li").count(), 2);
}

#[test]
fn contact_links() {
    let contact = Contact {
        email: "me@example.com".into(),
        linkedin_url: "https://www.linkedin.com/in/me".into(),
    };
    let html = render(move || view! { <ContactSection contact/> });

    assert!(html.contains(r#"href="mailto:me@example.com""#));
    assert!(html.contains(r#"href="https://www.linkedin.com/in/me""#));
}

#[test]
fn footer_has_year_owner_and_nav() {
    let html = render(|| view! { <SiteFooter owner="Devone Charles".to_string() year=2025/> });

    assert!(html.contains("© 2025 Devone Charles"));
    for anchor in ["#projects", "#about", "#skills", "#contact"] {
        assert!(html.contains(&format!(r##"href="{anchor}""##)), "{anchor}");
    }
    assert_eq!(html.matches("•").count(), 3);
}

#[test]
fn hero_from_builtin_content() {
    let profile = SiteContent::builtin().unwrap().profile;
    let html = render(move || view! { <Hero profile/> });

    assert!(html.contains(r#"id="home""#));
    assert!(html.contains("linear-gradient(to right, #002f4b, #005c97)"));
    assert!(html.contains("Breezy"));
    assert!(html.contains(r#"href="https://github.com/your-username""#));
}

#[test]
fn about_lists_highlights() {
    let about = About {
        summary: "Builds things.".into(),
        highlights: vec!["Testing".into(), "Shipping".into()],
    };
    let html = render(move || view! { <AboutSection about/> });

    assert!(html.contains(r#"id="about""#));
    assert!(html.contains("Builds things."));
    assert_eq!(html.matches("<li").count(), 2);
}

#[test]
fn projects_sharing_a_title_both_render() {
    let projects = vec![project("Same", &["A"]), project("Same", &["B"])];
    let html = render(move || view! { <ProjectsSection projects/> });
    assert_eq!(html.matches("<article").count(), 2);
}

#[test]
fn nav_mounts_closed() {
    let html = render(|| view! { <SiteNav brand="Devone".to_string()/> });

    assert!(html.contains("Devone • Portfolio"));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains(toggle_icon(MenuState::Closed)));
    assert!(!html.contains(&format!(r#"id="{PANEL_ID}""#)));
    // desktop links only, the panel copies aren't rendered
    assert_eq!(html.matches(r##"href="#projects""##).count(), 1);
}
