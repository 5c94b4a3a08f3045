//! HTTP host for the editor: renders the whole page server-side, UI
//! events arrive as GET requests on the links `view` generates. Each
//! visitor (session cookie) gets a workbench of their own.

use std::{collections::HashMap,
          sync::{Arc, Mutex},
          time::{Duration, Instant}};

use rouille::{Request, Response};

use crate::{error::LoadError,
            events::{self, ClickTarget, UiEvent},
            note,
            page::PageName,
            source::{ContentSource, DirSource},
            view::render_page,
            warn,
            workbench::Workbench};

pub const SESSION_COOKIE: &str = "viewer_session";
/// Seconds without a request after which a session is forgotten.
pub const SESSION_TIMEOUT: u64 = 24 * 3600;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Route {
    Page,
    /// `content/<file>`, raw JSON
    Content(String),
    Open(PageName),
    Tab(PageName),
    Close(PageName),
    Explorer,
    Dismiss,
}

impl Route {
    /// The UI event for the routes that are one.
    fn event(self, viewport_width: Option<u32>) -> Option<UiEvent> {
        Some(match self {
            Route::Page | Route::Content(_) => return None,
            Route::Open(name) => UiEvent::FileClick { name, viewport_width },
            Route::Tab(name) => UiEvent::TabClick(name),
            Route::Close(name) => UiEvent::TabCloseClick(name),
            Route::Explorer => UiEvent::ExplorerClick,
            Route::Dismiss => UiEvent::DocumentClick {
                target: ClickTarget::Elsewhere,
                viewport_width
            },
        })
    }
}

fn route(path: &str) -> Option<Route> {
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    Some(match segments.as_slice() {
        [""] => Route::Page,
        ["content", file] if file.ends_with(".json") => Route::Content((*file).into()),
        ["open", name] => Route::Open(PageName::parse(name)?),
        ["tab", name] => Route::Tab(PageName::parse(name)?),
        ["close", name] => Route::Close(PageName::parse(name)?),
        ["explorer"] => Route::Explorer,
        ["dismiss"] => Route::Dismiss,
        _ => return None
    })
}

fn errorpage(status: u16, title: &str) -> Response {
    Response::html(format!("<html><head><title>{title}</title></head><body>\
                            <h1>{title}</h1></body></html>\n"))
        .with_status_code(status)
}

/// Per-visitor state.
pub struct Session {
    pub workbench: Workbench,
    /// Last window width the browser told us about; events without a
    /// `w` parameter use this one.
    pub viewport_width: Option<u32>,
}

struct SessionEntry {
    session: Arc<Mutex<Session>>,
    last_seen: Instant,
}

pub struct ViewerService {
    sessions: Mutex<HashMap<String, SessionEntry>>,
    new_workbench: Box<dyn Fn() -> Workbench + Send + Sync>,
    session_timeout: Duration,
    /// For serving `content/*.json`; None when documents come from
    /// elsewhere
    files: Option<DirSource>,
    site_title: String,
}

impl ViewerService {
    pub fn new(
        new_workbench: impl Fn() -> Workbench + Send + Sync + 'static,
        files: Option<DirSource>,
        site_title: &str
    ) -> Self {
        ViewerService {
            sessions: Mutex::new(HashMap::new()),
            new_workbench: Box::new(new_workbench),
            session_timeout: Duration::from_secs(SESSION_TIMEOUT),
            files,
            site_title: site_title.into(),
        }
    }

    /// The session for `session_id`, created if new. Drops sessions
    /// that have been idle for too long.
    fn session(&self, session_id: &str) -> Arc<Mutex<Session>> {
        let mut sessions = self.sessions.lock().expect("never poisoned");
        let now = Instant::now();
        let timeout = self.session_timeout;
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < timeout);
        let entry = sessions.entry(session_id.into()).or_insert_with(|| SessionEntry {
            session: Arc::new(Mutex::new(Session {
                workbench: (self.new_workbench)(),
                viewport_width: None,
            })),
            last_seen: now,
        });
        entry.last_seen = now;
        entry.session.clone()
    }

    pub fn with_session<R>(&self, session_id: &str, f: impl FnOnce(&mut Session) -> R) -> R {
        let session = self.session(session_id);
        let mut session = session.lock().expect("never poisoned");
        f(&mut session)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().expect("never poisoned").len()
    }

    /// Answer a request given the session id, method, (decoded) path
    /// and the optional `w` (viewport width) parameter.
    pub fn respond(
        &self,
        session_id: &str,
        method: &str,
        path: &str,
        viewport_width: Option<u32>
    ) -> Response {
        let is_head = match method {
            "GET" => false,
            "HEAD" => true,
            _ => {
                warn!("method {method:?} not implemented");
                return errorpage(405, "Method Not Allowed")
            }
        };
        match route(path) {
            None => errorpage(404, "Not Found"),
            Some(Route::Content(file)) => self.content_file(&file),
            Some(Route::Page) => self.with_session(session_id, |session| {
                if viewport_width.is_some() {
                    session.viewport_width = viewport_width;
                }
                let wb = &mut session.workbench;
                if wb.is_fresh() && !is_head {
                    events::init(wb);
                }
                Response::html(render_page(wb, &self.site_title))
            }),
            Some(route) => {
                if !is_head {
                    self.with_session(session_id, |session| {
                        if viewport_width.is_some() {
                            session.viewport_width = viewport_width;
                        }
                        if let Some(event) = route.event(session.viewport_width) {
                            events::handle(&mut session.workbench, event);
                        }
                    });
                }
                Response::redirect_303("/")
            }
        }
    }

    fn content_file(&self, file: &str) -> Response {
        let Some(files) = &self.files else {
            return errorpage(404, "Not Found")
        };
        match files.fetch(&format!("content/{file}")) {
            Ok(bytes) => Response::from_data("application/json", bytes),
            Err(LoadError::Status { status: 404, .. }) | Err(LoadError::InvalidPath(_)) =>
                errorpage(404, "Not Found"),
            Err(e) => {
                warn!("serving content/{file}: {e}");
                errorpage(500, "Internal Server Error")
            }
        }
    }

    pub fn handle(&self, request: &Request) -> Response {
        let viewport_width = request.get_param("w").and_then(|w| w.parse().ok());
        let response = rouille::session::session(
            request, SESSION_COOKIE, SESSION_TIMEOUT,
            |session| self.respond(session.id(), request.method(), &request.url(),
                                   viewport_width));
        note!("{} \"{} {}\" {}",
              request.remote_addr(), request.method(), request.raw_url(),
              response.status_code);
        response
    }
}

/// Make a handler for `rouille::Server::new`.
pub fn server_handler(
    service: Arc<ViewerService>
) -> impl Fn(&Request) -> Response + Send + Sync + 'static
{
    move |request: &Request| -> Response {
        service.handle(request)
    }
}
