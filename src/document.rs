//! The JSON documents behind the pages. Each page has its own shape;
//! only `title` is common to all of them.
//!
//! All record types default missing fields: documents are edited by
//! hand, and a missing field just renders as empty. Single entries
//! that don't fit (a section without `type`, a list item that is a
//! number, a link that isn't an object) are dropped to their empty
//! form instead of failing the page. Wrongly typed containers
//! (e.g. `sections` not being an array) are parse errors.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use crate::{markup::Text,
            page::{PageKind, PageName},
            warn};

/// Deserialize `T` if the value fits, else use `T::default()`.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where D: Deserializer<'de>,
      T: DeserializeOwned + Default
{
    let value = Value::deserialize(deserializer)?;
    Ok(from_value_or_default(value))
}

/// Like `or_default`, but for every element of an array separately.
fn each_or_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where D: Deserializer<'de>,
      T: DeserializeOwned + Default
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values.into_iter().map(from_value_or_default).collect())
}

fn from_value_or_default<T: DeserializeOwned + Default>(value: Value) -> T {
    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!("ignoring malformed entry in content document: {e}");
        T::default()
    })
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Link {
    pub url: Text,
    pub text: Text,
}

// ------------------------------------------------------------------
// home

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HomeDoc {
    pub title: Text,
    #[serde(deserialize_with = "each_or_default")]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section {
    About {
        #[serde(default)]
        heading: Text,
        #[serde(default)]
        content: Text,
    },
    List {
        #[serde(default)]
        heading: Text,
        #[serde(default)]
        items: Vec<ListItem>,
    },
    Skills {
        #[serde(default)]
        heading: Text,
        #[serde(default)]
        skills: Vec<Text>,
    },
    Competencies {
        #[serde(default)]
        heading: Text,
        #[serde(default)]
        items: Vec<Text>,
    },
    Connect {
        #[serde(default)]
        heading: Text,
        #[serde(default)]
        links: Vec<SocialLink>,
    },
    /// Section types we have no template for, and sections without
    /// a usable `type`
    #[default]
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub platform: Text,
    pub url: Text,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListItem {
    Plain(String),
    Rich(RichItem),
    /// Anything else (numbers, arrays, ...); renders as an empty entry
    Other(Value),
}

/// A list entry assembled from optional parts, rendered in field
/// order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RichItem {
    pub text: Text,
    /// Absent unless it's an object
    #[serde(deserialize_with = "or_default")]
    pub link: Option<Link>,
    pub highlights: Vec<Text>,
    pub suffix: Text,
    pub highlights2: Vec<Text>,
    pub suffix2: Text,
}

// ------------------------------------------------------------------
// background

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackgroundDoc {
    pub title: Text,
    pub experience: Experience,
    pub education: Education,
    pub certifications: Certifications,
    pub initiatives: Initiatives,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub heading: Text,
    pub positions: Vec<Position>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Position {
    pub company: Text,
    pub period: Text,
    pub location: Text,
    pub role: Text,
    /// May contain `**bold**` markup
    pub highlights: Vec<Text>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Education {
    pub heading: Text,
    pub degrees: Vec<Degree>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Degree {
    pub title: Text,
    pub institution: Text,
    pub year: Text,
    pub gpa: Text,
    pub specialization: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Certifications {
    pub heading: Text,
    pub items: Vec<Certification>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: Text,
    pub issuer: Text,
    pub period: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Initiatives {
    pub heading: Text,
    pub items: Vec<Initiative>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Initiative {
    pub category: Text,
    pub period: Text,
    pub details: Text,
}

// ------------------------------------------------------------------
// blogs

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogsDoc {
    pub title: Text,
    pub intro: Text,
    pub featured_link: FeaturedLink,
    pub topics: Topics,
    pub speaking_topics: SpeakingTopics,
    pub footer: Footer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeaturedLink {
    pub url: Text,
    pub title: Text,
    pub description: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Topics {
    pub heading: Text,
    pub items: Vec<Topic>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Topic {
    pub category: Text,
    pub description: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeakingTopics {
    pub heading: Text,
    pub items: Vec<Talk>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Talk {
    pub event: Text,
    pub topic: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub text: Text,
    #[serde(deserialize_with = "or_default")]
    pub link: Link,
    pub suffix: Text,
}

// ------------------------------------------------------------------

/// A parsed content document. Which variant is chosen is decided by
/// the page name, not by the document contents.
#[derive(Debug, Clone, PartialEq)]
pub enum PageDocument {
    Home(HomeDoc),
    Background(BackgroundDoc),
    Blogs(BlogsDoc),
    /// Document for a page name without a template; kept as is.
    Other(Value),
}

impl PageDocument {
    pub fn from_slice(name: &PageName, bytes: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(match name.kind() {
            Some(PageKind::Home) => PageDocument::Home(serde_json::from_slice(bytes)?),
            Some(PageKind::Background) =>
                PageDocument::Background(serde_json::from_slice(bytes)?),
            Some(PageKind::Blogs) => PageDocument::Blogs(serde_json::from_slice(bytes)?),
            None => PageDocument::Other(serde_json::from_slice(bytes)?),
        })
    }

    pub fn title(&self) -> &str {
        match self {
            PageDocument::Home(d) => d.title.as_str(),
            PageDocument::Background(d) => d.title.as_str(),
            PageDocument::Blogs(d) => d.title.as_str(),
            PageDocument::Other(v) => v.get("title").and_then(Value::as_str).unwrap_or(""),
        }
    }
}
