//! Page templates: pure functions from a content document to an HTML
//! fragment for the content area.

pub mod home;
pub mod background;
pub mod blogs;

use itertools::Itertools;

use crate::{document::{Link, PageDocument},
            markup::Text};

pub const UNKNOWN_PAGE: &str = "<p>Unknown page</p>";

pub fn render_content(doc: &PageDocument) -> String {
    match doc {
        PageDocument::Home(d) => home::render_home(d),
        PageDocument::Background(d) => background::render_background(d),
        PageDocument::Blogs(d) => blogs::render_blogs(d),
        PageDocument::Other(_) => UNKNOWN_PAGE.into(),
    }
}

// Small pieces shared by the page templates.

fn h1(text: &Text) -> String {
    format!("<h1>{}</h1>", text.escaped())
}

fn h2(text: &Text) -> String {
    format!("<h2>{}</h2>", text.escaped())
}

/// External link, opened in a new browser tab.
fn anchor(url: &Text, content_html: &str) -> String {
    format!("<a href=\"{}\" target=\"_blank\">{}</a>", url.escaped(), content_html)
}

fn link(link: &Link) -> String {
    anchor(&link.url, &link.text.escaped())
}

fn strong_list(items: &[Text]) -> String {
    items.iter()
        .map(|t| format!("<strong>{}</strong>", t.escaped()))
        .join(", ")
}

fn ul<I: IntoIterator<Item = String>>(items: I) -> String {
    format!("<ul>{}</ul>", items.into_iter().join(""))
}
