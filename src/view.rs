//! Markup for the editor regions, computed from `Workbench` state
//! only. Links carry the UI events for the HTTP host (see `server`).

use itertools::Itertools;

use crate::{markup::escape_html,
            page::{PageKind, PageName},
            tabs::{TabChange, TabList},
            workbench::{ContentPane, Redraw, Workbench}};

const FILE_ICON: &str = "<svg class=\"tab-icon\" width=\"16\" height=\"16\" \
    viewBox=\"0 0 16 16\" fill=\"currentColor\"><path d=\"M14 4.5V14a2 2 0 01-2 2H4a2 \
    2 0 01-2-2V2a2 2 0 012-2h5.5L14 4.5zm-3 0A1.5 1.5 0 019.5 3V1H4a1 1 0 00-1 \
    1v12a1 1 0 001 1h8a1 1 0 001-1V4.5h-2z\"/></svg>";

const STYLE: &str = "
body { margin: 0; font-family: system-ui, sans-serif; background: #1e1e1e; color: #d4d4d4; }
a { color: #4fc1ff; }
.editor { display: flex; min-height: 100vh; }
.activity-bar { width: 48px; background: #333; }
#explorer-icon { display: block; padding: 12px; color: #ccc; text-decoration: none; }
.sidebar { width: 220px; background: #252526; }
.sidebar-title { padding: 8px 12px; font-size: 11px; text-transform: uppercase; }
.file-item { display: block; padding: 4px 20px; color: #ccc; text-decoration: none; }
.file-item.active { background: #37373d; }
.main { flex: 1; display: flex; flex-direction: column; position: relative; }
.tabs-container { display: flex; background: #252526; }
.tab { display: flex; align-items: center; gap: 6px; padding: 8px 12px; background: #2d2d2d; }
.tab.active { background: #1e1e1e; }
.tab a { color: inherit; text-decoration: none; }
#content-area { padding: 16px 32px; max-width: 60em; }
#overlay-dismiss { display: none; }
.skill-tag { display: inline-block; margin: 2px; padding: 2px 8px; background: #333; }
@media (max-width: 768px) {
  .sidebar { display: none; position: absolute; left: 48px; top: 0; bottom: 0; }
  .sidebar.open { display: block; }
  #overlay-dismiss { display: block; position: absolute; top: 0; right: 0; bottom: 0; left: 0; }
}
";

/// Links marked `data-viewport` tell the server the window width, for
/// the narrow-viewport rules in `events`.
const SCRIPT: &str = "
document.addEventListener('click', function (e) {
  var a = e.target.closest('a[data-viewport]');
  if (a) { a.href = a.pathname + '?w=' + window.innerWidth; }
});
";

fn class_if(base: &str, cond: bool, extra: &str) -> String {
    if cond {
        format!("{base} {extra}")
    } else {
        base.into()
    }
}

pub fn render_tab(name: &PageName, active: bool) -> String {
    let file = escape_html(name.as_str());
    format!("<div class=\"{}\" data-file=\"{file}\">{FILE_ICON}\
             <a href=\"/tab/{file}\"><span>{}</span></a>\
             <a class=\"tab-close\" data-file=\"{file}\" href=\"/close/{file}\">&times;</a>\
             </div>",
            class_if("tab", active, "active"),
            escape_html(&name.file_label()))
}

pub fn render_tabs(tabs: &TabList) -> String {
    tabs.tabs().iter()
        .map(|name| render_tab(name, tabs.is_active(name)))
        .join("")
}

/// The explorer's file list; one entry per page we have a template
/// for.
pub fn render_files(active: &PageName) -> String {
    PageKind::members()
        .map(|kind| {
            let name = PageName::from(kind);
            format!("<a class=\"{}\" data-file=\"{}\" data-viewport href=\"/open/{}\">{}</a>",
                    class_if("file-item", &name == active, "active"),
                    kind.as_str(),
                    kind.as_str(),
                    escape_html(&name.file_label()))
        })
        .join("")
}

pub fn render_sidebar(active: &PageName, open: bool) -> String {
    format!("<nav class=\"{}\"><div class=\"sidebar-title\">Explorer</div>{}</nav>",
            class_if("sidebar", open, "open"),
            render_files(active))
}

pub fn render_content_pane(pane: &ContentPane) -> String {
    match pane {
        ContentPane::Loading => "<p>Loading...</p>".into(),
        ContentPane::Ready(html) => html.clone(),
        ContentPane::Failed(msg) => format!("<p>Error loading content: {}</p>", escape_html(msg)),
    }
}

/// While the explorer overlay is open, a click anywhere on the main
/// area closes it on narrow viewports.
pub fn render_dismiss(sidebar_open: bool) -> &'static str {
    if sidebar_open {
        "<a id=\"overlay-dismiss\" data-viewport href=\"/dismiss\"></a>"
    } else {
        ""
    }
}

/// The complete document for the current state.
pub fn render_page(wb: &Workbench, site_title: &str) -> String {
    format!("<!DOCTYPE html>\n\
             <html><head><meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
             <title>{} | {}</title><style>{STYLE}</style></head>\
             <body><div class=\"editor\">\
             <div class=\"activity-bar\"><a id=\"explorer-icon\" data-viewport \
             href=\"/explorer\" title=\"Explorer\">&#9776;</a></div>\
             {}\
             <div class=\"main\"><div class=\"tabs-container\">{}</div>\
             <main id=\"content-area\">{}</main>{}</div>\
             </div><script>{SCRIPT}</script></body></html>\n",
            escape_html(&wb.active().file_label()),
            escape_html(site_title),
            render_sidebar(wb.active(), wb.sidebar_open()),
            render_tabs(wb.tabs()),
            render_content_pane(wb.pane()),
            render_dismiss(wb.sidebar_open()))
}


/// A host that keeps the editor regions as separately updatable
/// parts (a DOM, a terminal, a test recorder).
pub trait Surface {
    fn set_tabs(&mut self, html: &str);
    fn highlight_tab(&mut self, active: &PageName);
    fn set_files(&mut self, html: &str);
    fn set_content(&mut self, html: &str);
    fn set_sidebar_open(&mut self, open: bool);
}

/// Push the regions named in `redraw` to `surface`.
pub fn apply(wb: &Workbench, redraw: Redraw, surface: &mut dyn Surface) {
    match redraw.tabs {
        TabChange::None => (),
        TabChange::Highlight => surface.highlight_tab(wb.active()),
        TabChange::Strip => surface.set_tabs(&render_tabs(wb.tabs())),
    }
    if redraw.files {
        surface.set_files(&render_files(wb.active()));
    }
    if redraw.content {
        surface.set_content(&render_content_pane(wb.pane()));
    }
    if redraw.sidebar {
        surface.set_sidebar_open(wb.sidebar_open());
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_tabs() {
        let mut tabs = TabList::new(PageName::home());
        tabs.open("blogs".into());
        let html = render_tabs(&tabs);
        assert_eq!(html.matches("class=\"tab\"").count(), 1);
        assert_eq!(html.matches("class=\"tab active\" data-file=\"blogs\"").count(), 1);
        assert!(html.contains("<span>home.md</span>"));
        assert!(html.contains("href=\"/close/blogs\">&times;</a>"));
    }

    #[test]
    fn t_tab_name_escaped() {
        let html = render_tab(&"<x>".into(), false);
        assert!(!html.contains("<x>"));
        assert!(html.contains("&lt;x&gt;.md"));
    }

    #[test]
    fn t_files() {
        let html = render_files(&"background".into());
        assert!(html.starts_with("<a class=\"file-item\" data-file=\"home\" data-viewport \
                                  href=\"/open/home\">home.md</a>"));
        assert!(html.contains("<a class=\"file-item active\" data-file=\"background\""));
        assert!(html.contains("blogs.md"));
        assert!(render_sidebar(&PageName::home(), true).starts_with("<nav class=\"sidebar open\">"));
        assert!(render_sidebar(&PageName::home(), false).starts_with("<nav class=\"sidebar\">"));
    }

    #[test]
    fn t_dismiss() {
        assert_eq!(render_dismiss(false), "");
        assert!(render_dismiss(true).contains("href=\"/dismiss\""));
    }

    #[test]
    fn t_content_pane() {
        assert_eq!(render_content_pane(&ContentPane::Loading), "<p>Loading...</p>");
        assert_eq!(render_content_pane(&ContentPane::Failed("bad <thing>".into())),
                   "<p>Error loading content: bad &lt;thing&gt;</p>");
        assert_eq!(render_content_pane(&ContentPane::Ready("<h1>x</h1>".into())),
                   "<h1>x</h1>");
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Surface for Recorder {
        fn set_tabs(&mut self, html: &str) {
            self.calls.push(format!("tabs {}", html.matches("<span>").count()));
        }
        fn highlight_tab(&mut self, active: &PageName) {
            self.calls.push(format!("highlight {active}"));
        }
        fn set_files(&mut self, _html: &str) {
            self.calls.push("files".into());
        }
        fn set_content(&mut self, html: &str) {
            self.calls.push(format!("content {html}"));
        }
        fn set_sidebar_open(&mut self, open: bool) {
            self.calls.push(format!("sidebar {open}"));
        }
    }

    #[test]
    fn t_apply() {
        use crate::{cache::{CachePolicy, ContentLoader},
                    events::{self, UiEvent},
                    source::StaticSource};

        let source = StaticSource::new()
            .with("content/home.json", r#"{"title": "Home", "sections": []}"#)
            .with("content/blogs.json", r#"{"title": "Blogs"}"#);
        let mut wb = Workbench::new(ContentLoader::new(Box::new(source),
                                                       CachePolicy::default()));
        let mut surface = Recorder::default();
        let redraw = events::init(&mut wb);
        apply(&wb, redraw, &mut surface);
        assert!(surface.calls.contains(&"content <h1>Home</h1>".to_string()),
                "{:?}", surface.calls);

        surface.calls.clear();
        let redraw = events::handle(&mut wb, UiEvent::TabClick("blogs".into()));
        apply(&wb, redraw, &mut surface);
        assert_eq!(surface.calls[0], "tabs 2");
        assert!(surface.calls.iter().any(|c| c.starts_with("content <h1>Blogs</h1>")));

        surface.calls.clear();
        let redraw = events::handle(&mut wb, UiEvent::TabClick(PageName::home()));
        apply(&wb, redraw, &mut surface);
        assert_eq!(surface.calls[0], "highlight home");

        surface.calls.clear();
        let redraw = events::handle(&mut wb, UiEvent::ExplorerClick);
        apply(&wb, redraw, &mut surface);
        assert_eq!(surface.calls, vec!["sidebar true".to_string()]);
    }
}
