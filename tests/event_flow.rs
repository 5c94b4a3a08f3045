use std::sync::Arc;

use portfolio_viewer::cache::{CachePolicy, ContentLoader};
use portfolio_viewer::events::{self, UiEvent};
use portfolio_viewer::page::PageName;
use portfolio_viewer::source::{DirSource, StaticSource};
use portfolio_viewer::tabs::TabChange;
use portfolio_viewer::view::{render_content_pane, render_tabs};
use portfolio_viewer::workbench::Workbench;

const HOME: &str = r#"{
  "title": "Jane Doe",
  "sections": [
    {"type": "about", "heading": "About", "content": "Engineer."},
    {"type": "list", "heading": "Currently", "items": [
      {"text": "X", "highlights": ["Y"], "suffix": "Z"}
    ]}
  ]
}"#;

const BACKGROUND: &str = r#"{
  "title": "Background",
  "experience": {"heading": "Experience", "positions": [
    {"company": "ACME", "period": "2020", "location": "Bern", "role": "Dev",
     "highlights": ["Shipped **v2**"]}
  ]},
  "education": {"heading": "Education", "degrees": []},
  "certifications": {"heading": "Certifications", "items": []},
  "initiatives": {"heading": "Initiatives", "items": []}
}"#;

fn static_workbench(policy: CachePolicy) -> (Arc<StaticSource>, Workbench) {
    let source = Arc::new(StaticSource::new()
                          .with("content/home.json", HOME)
                          .with("content/background.json", BACKGROUND));
    (source.clone(), Workbench::new(ContentLoader::new(Box::new(source), policy)))
}

#[test]
fn t_browse_and_close() {
    let (source, mut wb) = static_workbench(CachePolicy::default());
    events::init(&mut wb);
    let html = render_content_pane(wb.pane());
    assert!(html.contains("<li>X <strong>Y</strong> Z</li>"), "{html}");

    let r = events::handle(&mut wb, UiEvent::FileClick { name: "background".into(),
                                                          viewport_width: None });
    assert_eq!(r.tabs, TabChange::Strip);
    assert!(render_content_pane(wb.pane()).contains("<li>Shipped <strong>v2</strong></li>"));

    let r = events::handle(&mut wb, UiEvent::TabClick(PageName::home()));
    assert_eq!(r.tabs, TabChange::Highlight);
    let tabs = render_tabs(wb.tabs());
    assert!(tabs.contains("class=\"tab active\" data-file=\"home\""));
    assert!(tabs.contains("class=\"tab\" data-file=\"background\""));

    // Second visit of each page came from the cache
    assert_eq!(source.requests(), vec!["content/home.json", "content/background.json"]);

    events::handle(&mut wb, UiEvent::TabCloseClick(PageName::home()));
    assert_eq!(wb.active().as_str(), "background");
    assert_eq!(wb.tabs().len(), 1);
}

#[test]
fn t_failed_fetch_keeps_cache() {
    let (_source, mut wb) = static_workbench(CachePolicy::default());
    events::init(&mut wb);
    let cached_before = wb.loader().cache().len();
    events::handle(&mut wb, UiEvent::TabClick("blogs".into()));
    assert!(render_content_pane(wb.pane()).starts_with("<p>Error loading content:"));
    assert_eq!(wb.loader().cache().len(), cached_before);
    assert!(!wb.loader().cache().contains(&"blogs".into()));
}

#[test]
fn t_unknown_page() {
    let source = StaticSource::new().with("content/projects.json", r#"{"title": "P"}"#);
    let mut wb = Workbench::new(ContentLoader::new(Box::new(source), CachePolicy::default()));
    events::handle(&mut wb, UiEvent::TabClick("projects".into()));
    assert_eq!(render_content_pane(wb.pane()), "<p>Unknown page</p>");
}

#[test]
fn t_dir_source_with_bypass() {
    let dir = std::env::temp_dir().join(
        format!("portfolio_viewer_t_event_flow_{}", std::process::id()));
    std::fs::create_dir_all(dir.join("content")).unwrap();
    std::fs::write(dir.join("content/home.json"), HOME).unwrap();

    let loader = ContentLoader::new(Box::new(DirSource::new(&dir)),
                                    CachePolicy { bypass: true });
    let mut wb = Workbench::new(loader);
    events::init(&mut wb);
    assert!(render_content_pane(wb.pane()).starts_with("<h1>Jane Doe</h1>"));

    // Edits show up on the next load
    std::fs::write(dir.join("content/home.json"),
                   r#"{"title": "Jane D.", "sections": []}"#).unwrap();
    events::handle(&mut wb, UiEvent::TabClick(PageName::home()));
    assert_eq!(render_content_pane(wb.pane()), "<h1>Jane D.</h1>");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn t_shipped_content_renders() {
    let loader = ContentLoader::new(Box::new(DirSource::new(env!("CARGO_MANIFEST_DIR"))),
                                    CachePolicy::default());
    let mut wb = Workbench::new(loader);
    for name in ["home", "background", "blogs"] {
        events::handle(&mut wb, UiEvent::TabClick(name.into()));
        let html = render_content_pane(wb.pane());
        assert!(html.starts_with("<h1>"), "{name}: {html}");
    }
    assert_eq!(wb.loader().cache().len(), 3);
}
