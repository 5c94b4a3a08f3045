//! Editor state: open tabs, what the content area shows, whether the
//! explorer overlay is open. Transitions return a `Redraw` telling the
//! host which regions to re-render via the functions in `view`.

use std::sync::Arc;

use crate::{cache::ContentLoader,
            document::PageDocument,
            error::LoadError,
            page::PageName,
            tabs::{CloseOutcome, TabChange, TabList},
            templates::render_content,
            warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPane {
    Loading,
    /// Rendered HTML fragment
    Ready(String),
    /// Error message (plain text)
    Failed(String),
}

/// Regions of the editor a host needs to update after a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Redraw {
    pub tabs: TabChange,
    /// Active marker in the explorer file list
    pub files: bool,
    pub content: bool,
    pub sidebar: bool,
}

impl Redraw {
    pub fn merge(self, other: Redraw) -> Redraw {
        Redraw {
            tabs: self.tabs.merge(other.tabs),
            files: self.files || other.files,
            content: self.content || other.content,
            sidebar: self.sidebar || other.sidebar,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Redraw::default()
    }
}

/// Identifies one load; only the result for the most recent ticket
/// is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    token: u64,
    name: PageName,
}

impl LoadTicket {
    pub fn name(&self) -> &PageName { &self.name }
}

pub struct Workbench {
    tabs: TabList,
    pane: ContentPane,
    sidebar_open: bool,
    loader: ContentLoader,
    last_token: u64,
    // None until the first load was started
    current_token: Option<u64>,
}

impl Workbench {
    pub fn new(loader: ContentLoader) -> Self {
        Workbench {
            tabs: TabList::new(PageName::home()),
            pane: ContentPane::Loading,
            sidebar_open: false,
            loader,
            last_token: 0,
            current_token: None,
        }
    }

    pub fn tabs(&self) -> &TabList { &self.tabs }
    pub fn active(&self) -> &PageName { self.tabs.active() }
    pub fn pane(&self) -> &ContentPane { &self.pane }
    pub fn sidebar_open(&self) -> bool { self.sidebar_open }
    pub fn loader(&self) -> &ContentLoader { &self.loader }
    pub fn loader_mut(&mut self) -> &mut ContentLoader { &mut self.loader }

    /// Whether no load has been started yet.
    pub fn is_fresh(&self) -> bool {
        self.current_token.is_none()
    }

    /// Activate `name` (opening a tab for it if needed) and put the
    /// content area into the loading state. The caller obtains the
    /// document (e.g. via `loader_mut().load`) and passes the result
    /// to `finish_load`.
    pub fn begin_load(&mut self, name: PageName) -> (LoadTicket, Redraw) {
        let tabs = self.tabs.open(name.clone());
        self.pane = ContentPane::Loading;
        self.last_token += 1;
        self.current_token = Some(self.last_token);
        (LoadTicket { token: self.last_token, name },
         Redraw { tabs, files: true, content: true, sidebar: false })
    }

    /// Show the result of a load, unless a newer load was started in
    /// the meantime.
    pub fn finish_load(
        &mut self,
        ticket: &LoadTicket,
        result: Result<Arc<PageDocument>, LoadError>
    ) -> Redraw {
        if self.current_token != Some(ticket.token) {
            warn!("discarding stale content for {:?} (load {} superseded by {:?})",
                  ticket.name.as_str(), ticket.token, self.current_token);
            return Redraw::default()
        }
        self.pane = match result {
            Ok(doc) => ContentPane::Ready(render_content(&doc)),
            Err(e) => {
                warn!("loading {:?} from {}: {e}",
                      ticket.name.as_str(), self.loader.source().describe());
                ContentPane::Failed(e.to_string())
            }
        };
        Redraw { content: true, ..Redraw::default() }
    }

    /// `begin_load`, load, `finish_load`, all in one go.
    pub fn show(&mut self, name: PageName) -> Redraw {
        let (ticket, redraw) = self.begin_load(name);
        let result = self.loader.load(ticket.name());
        redraw.merge(self.finish_load(&ticket, result))
    }

    pub fn close_tab(&mut self, name: &PageName) -> Redraw {
        let outcome = self.tabs.close(name);
        let redraw = Redraw { tabs: outcome.change(), ..Redraw::default() };
        match outcome {
            CloseOutcome::ClosedActive(newactive) =>
                redraw.merge(self.show(newactive)),
            _ => redraw
        }
    }

    pub fn set_sidebar_open(&mut self, open: bool) -> Redraw {
        if self.sidebar_open == open {
            return Redraw::default()
        }
        self.sidebar_open = open;
        Redraw { sidebar: true, ..Redraw::default() }
    }

    pub fn toggle_sidebar(&mut self) -> Redraw {
        self.set_sidebar_open(!self.sidebar_open)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cache::CachePolicy, source::StaticSource};

    fn workbench() -> Workbench {
        let source = StaticSource::new()
            .with("content/home.json", r#"{"title": "Home", "sections": []}"#)
            .with("content/background.json", r#"{"title": "Background"}"#);
        Workbench::new(ContentLoader::new(Box::new(source), CachePolicy::default()))
    }

    #[test]
    fn t_show() {
        let mut wb = workbench();
        assert!(wb.is_fresh());
        let r = wb.show(PageName::home());
        assert_eq!(r, Redraw { tabs: TabChange::Highlight, files: true, content: true,
                               sidebar: false });
        assert_eq!(wb.pane(), &ContentPane::Ready("<h1>Home</h1>".into()));

        let r = wb.show("background".into());
        assert_eq!(r.tabs, TabChange::Strip);
        assert!(matches!(wb.pane(), ContentPane::Ready(html)
                         if html.starts_with("<h1>Background</h1>")));
        assert_eq!(wb.active().as_str(), "background");
    }

    #[test]
    fn t_failed_load() {
        let mut wb = workbench();
        wb.show("blogs".into());
        match wb.pane() {
            ContentPane::Failed(msg) => assert!(msg.contains("content/blogs.json"), "{msg}"),
            other => panic!("expected failure, got {other:?}")
        }
        assert!(!wb.loader().cache().contains(&"blogs".into()));
        // The tab is open regardless
        assert!(wb.tabs().contains(&"blogs".into()));
    }

    #[test]
    fn t_stale_result_discarded() {
        let mut wb = workbench();
        let (first, _) = wb.begin_load("background".into());
        let (second, _) = wb.begin_load(PageName::home());
        let first_result = wb.loader_mut().load(first.name());
        let second_result = wb.loader_mut().load(second.name());

        assert_eq!(wb.finish_load(&second, second_result), Redraw {
            content: true, ..Redraw::default() });
        assert!(wb.finish_load(&first, first_result).is_empty());
        assert_eq!(wb.pane(), &ContentPane::Ready("<h1>Home</h1>".into()));
        // The superseded load still filled the cache
        assert!(wb.loader().cache().contains(&"background".into()));
    }

    #[test]
    fn t_close_active_shows_neighbour() {
        let mut wb = workbench();
        wb.show(PageName::home());
        wb.show("background".into());
        wb.show(PageName::home());
        let r = wb.close_tab(&PageName::home());
        assert_eq!(r.tabs, TabChange::Strip);
        assert!(r.content);
        assert_eq!(wb.active().as_str(), "background");
        assert!(matches!(wb.pane(), ContentPane::Ready(html)
                         if html.starts_with("<h1>Background</h1>")));

        assert!(wb.close_tab(&"background".into()).is_empty());
    }

    #[test]
    fn t_sidebar() {
        let mut wb = workbench();
        assert_eq!(wb.toggle_sidebar().sidebar, true);
        assert!(wb.sidebar_open());
        assert!(wb.set_sidebar_open(true).is_empty());
        wb.toggle_sidebar();
        assert!(!wb.sidebar_open());
    }
}
