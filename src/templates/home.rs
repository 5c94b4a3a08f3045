use itertools::Itertools;

use crate::{document::{HomeDoc, ListItem, RichItem, Section},
            markup::escape_html};
use super::{anchor, h1, h2, link, strong_list, ul};

pub fn render_home(doc: &HomeDoc) -> String {
    let mut html = h1(&doc.title);
    for section in &doc.sections {
        html.push_str(&render_section(section));
    }
    html
}

pub fn render_section(section: &Section) -> String {
    match section {
        Section::About { heading, content } =>
            format!("{}<p>{}</p>", h2(heading), content.escaped()),
        Section::List { heading, items } =>
            format!("{}{}", h2(heading), ul(items.iter().map(render_list_item))),
        Section::Skills { heading, skills } =>
            format!("{}<div class=\"skills-container\">{}</div>",
                    h2(heading),
                    skills.iter()
                    .map(|s| format!("<span class=\"skill-tag\">{}</span>", s.escaped()))
                    .join("")),
        Section::Competencies { heading, items } =>
            format!("{}<p>{}</p>",
                    h2(heading),
                    items.iter().map(|i| i.escaped()).join(" | ")),
        Section::Connect { heading, links } =>
            format!("{}{}",
                    h2(heading),
                    ul(links.iter().map(
                        |l| format!("<li>{}</li>", anchor(&l.url, &l.platform.escaped()))))),
        Section::Unsupported => String::new(),
    }
}

pub fn render_list_item(item: &ListItem) -> String {
    match item {
        ListItem::Plain(s) => format!("<li>{}</li>", escape_html(s)),
        ListItem::Rich(item) => format!("<li>{}</li>", rich_item_parts(item).join(" ")),
        ListItem::Other(_) => "<li></li>".into(),
    }
}

fn rich_item_parts(item: &RichItem) -> Vec<String> {
    let mut parts = Vec::new();
    if item.text.is_present() {
        parts.push(item.text.escaped());
    }
    if let Some(l) = &item.link {
        parts.push(link(l));
    }
    if !item.highlights.is_empty() {
        parts.push(strong_list(&item.highlights));
    }
    if item.suffix.is_present() {
        parts.push(item.suffix.escaped());
    }
    if !item.highlights2.is_empty() {
        parts.push(strong_list(&item.highlights2));
    }
    if item.suffix2.is_present() {
        parts.push(item.suffix2.escaped());
    }
    parts
}
