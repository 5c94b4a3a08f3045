use crate::document::BlogsDoc;
use super::{h1, h2, link, ul};

pub fn render_blogs(doc: &BlogsDoc) -> String {
    let mut html = h1(&doc.title);
    html.push_str(&format!("<p>{}</p>", doc.intro.escaped()));

    let featured = &doc.featured_link;
    html.push_str(&format!("<a href=\"{}\" target=\"_blank\" class=\"blog-link-card\">\
                            <h3>{}</h3><p>{}</p></a>",
                           featured.url.escaped(),
                           featured.title.escaped(),
                           featured.description.escaped()));

    html.push_str(&h2(&doc.topics.heading));
    html.push_str(&ul(doc.topics.items.iter().map(
        |topic| format!("<li><strong>{}:</strong> {}</li>",
                        topic.category.escaped(),
                        topic.description.escaped()))));

    html.push_str(&h2(&doc.speaking_topics.heading));
    html.push_str(&ul(doc.speaking_topics.items.iter().map(
        |talk| format!("<li><strong>{}:</strong> {}</li>",
                       talk.event.escaped(),
                       talk.topic.escaped()))));

    html.push_str("<hr>");

    let footer = &doc.footer;
    html.push_str(&format!("<p>{} {} {}</p>",
                           footer.text.escaped(),
                           link(&footer.link),
                           footer.suffix.escaped()));
    html
}
