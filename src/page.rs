use std::{fmt, str::FromStr};

use kstring::KString;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

/// The pages we have templates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter)]
pub enum PageKind {
    #[strum(serialize = "home")]
    Home,
    #[strum(serialize = "background")]
    Background,
    #[strum(serialize = "blogs")]
    Blogs,
}

impl PageKind {
    pub fn maybe_from(s: &str) -> Option<Self> {
        PageKind::from_str(s).ok()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Background => "background",
            PageKind::Blogs => "blogs",
        }
    }

    /// In the order in which they are listed in the explorer.
    pub fn members() -> impl Iterator<Item = Self> {
        PageKind::iter()
    }
}


/// Name of a page as it appears in tabs and resource paths. Any
/// string is accepted here; names without a `PageKind` just don't
/// have a template, and names that aren't a plain file stem (see
/// `is_file_stem`) are never fetched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageName(KString);

impl PageName {
    pub fn new(s: &str) -> Self {
        PageName(KString::from_ref(s))
    }

    /// For names coming from outside (URLs): only plain file stems.
    pub fn parse(s: &str) -> Option<Self> {
        let name = PageName::new(s);
        if name.is_file_stem() { Some(name) } else { None }
    }

    pub fn home() -> Self {
        PageKind::Home.into()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn kind(&self) -> Option<PageKind> {
        PageKind::maybe_from(self.as_str())
    }

    /// Non-empty and only `[A-Za-z0-9_-]`, i.e. safe to put into a
    /// path or URL as is.
    pub fn is_file_stem(&self) -> bool {
        let s = self.as_str();
        !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    }

    /// Relative path of the JSON document for this page.
    pub fn resource_path(&self) -> String {
        format!("content/{}.json", self.as_str())
    }

    /// What the editor shows as the file name.
    pub fn file_label(&self) -> String {
        format!("{}.md", self.as_str())
    }
}

impl From<PageKind> for PageName {
    fn from(kind: PageKind) -> Self {
        PageName(KString::from_static(kind.as_str()))
    }
}

impl From<&str> for PageName {
    fn from(s: &str) -> Self {
        PageName::new(s)
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
