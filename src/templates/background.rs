use crate::document::{BackgroundDoc, Degree, Initiative, Position};
use super::{h1, h2, ul};

pub fn render_background(doc: &BackgroundDoc) -> String {
    let mut html = h1(&doc.title);

    html.push_str(&h2(&doc.experience.heading));
    for pos in &doc.experience.positions {
        html.push_str(&render_position(pos));
    }
    html.push_str("<hr>");

    html.push_str(&h2(&doc.education.heading));
    for deg in &doc.education.degrees {
        html.push_str(&render_degree(deg));
    }
    html.push_str("<hr>");

    html.push_str(&h2(&doc.certifications.heading));
    html.push_str(&ul(doc.certifications.items.iter().map(
        |cert| format!("<li>{} - {} ({})</li>",
                       cert.name.escaped(),
                       cert.issuer.escaped(),
                       cert.period.escaped()))));
    html.push_str("<hr>");

    html.push_str(&h2(&doc.initiatives.heading));
    html.push_str(&ul(doc.initiatives.items.iter().map(render_initiative)));

    html
}

/// Highlights are the one place where `**bold**` is honoured.
pub fn render_position(pos: &Position) -> String {
    format!("<div class=\"experience-item\">\
             <h3><span class=\"company\">{}</span></h3>\
             <p class=\"period\">{} | {}</p>\
             <p class=\"role\">{}</p>\
             {}</div>",
            pos.company.escaped(),
            pos.period.escaped(),
            pos.location.escaped(),
            pos.role.escaped(),
            ul(pos.highlights.iter().map(|h| format!("<li>{}</li>", h.bold_parsed()))))
}

pub fn render_degree(deg: &Degree) -> String {
    let mut html = format!("<h3>{}</h3><p><strong>{}</strong> | {}",
                           deg.title.escaped(),
                           deg.institution.escaped(),
                           deg.year.escaped());
    if deg.gpa.is_present() {
        html.push_str(&format!(" | GPA: {}", deg.gpa.escaped()));
    }
    html.push_str("</p>");
    if deg.specialization.is_present() {
        html.push_str(&format!("<p>Specialization: {}</p>", deg.specialization.escaped()));
    }
    html
}

pub fn render_initiative(item: &Initiative) -> String {
    let mut html = format!("<li><strong>{}", item.category.escaped());
    if item.period.is_present() {
        html.push_str(&format!(" ({})", item.period.escaped()));
    }
    html.push_str(&format!(":</strong> {}</li>", item.details.escaped()));
    html
}
