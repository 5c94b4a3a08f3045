//! The open tabs and which one is active.

use crate::page::PageName;

/// What a host has to redraw of the tab strip after a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum TabChange {
    #[default]
    None,
    /// Same tabs, only the active marker moved (or was re-set)
    Highlight,
    /// Tabs were added or removed
    Strip,
}

impl TabChange {
    pub fn merge(self, other: TabChange) -> TabChange {
        self.max(other)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Not open, or the last remaining tab
    Refused,
    Closed,
    /// The active tab was closed; the given page is active now and
    /// needs to be shown.
    ClosedActive(PageName),
}

impl CloseOutcome {
    pub fn change(&self) -> TabChange {
        match self {
            CloseOutcome::Refused => TabChange::None,
            CloseOutcome::Closed | CloseOutcome::ClosedActive(_) => TabChange::Strip,
        }
    }
}

/// Ordered (by opening) list of open pages, never empty, without
/// duplicates; `active` is always one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabList {
    tabs: Vec<PageName>,
    active: PageName,
}

impl TabList {
    pub fn new(first: PageName) -> Self {
        TabList {
            tabs: vec![first.clone()],
            active: first,
        }
    }

    pub fn tabs(&self) -> &[PageName] { &self.tabs }
    pub fn active(&self) -> &PageName { &self.active }
    pub fn len(&self) -> usize { self.tabs.len() }

    pub fn contains(&self, name: &PageName) -> bool {
        self.tabs.contains(name)
    }

    pub fn is_active(&self, name: &PageName) -> bool {
        &self.active == name
    }

    /// Make `name` the active tab, appending it if it's not open yet.
    pub fn open(&mut self, name: PageName) -> TabChange {
        if self.contains(&name) {
            self.active = name;
            TabChange::Highlight
        } else {
            self.tabs.push(name.clone());
            self.active = name;
            TabChange::Strip
        }
    }

    /// Close `name` unless it is the only tab. If it was active, the
    /// tab that moves into its slot (or the new last one) becomes
    /// active.
    pub fn close(&mut self, name: &PageName) -> CloseOutcome {
        if self.tabs.len() <= 1 {
            return CloseOutcome::Refused
        }
        let Some(index) = self.tabs.iter().position(|t| t == name) else {
            return CloseOutcome::Refused
        };
        self.tabs.remove(index);
        if &self.active == name {
            let newindex = index.min(self.tabs.len() - 1);
            self.active = self.tabs[newindex].clone();
            CloseOutcome::ClosedActive(self.active.clone())
        } else {
            CloseOutcome::Closed
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn names(tabs: &TabList) -> Vec<&str> {
        tabs.tabs().iter().map(PageName::as_str).collect()
    }

    fn abc() -> TabList {
        let mut tabs = TabList::new("a".into());
        tabs.open("b".into());
        tabs.open("c".into());
        tabs
    }

    #[test]
    fn t_open() {
        let mut tabs = TabList::new(PageName::home());
        assert_eq!(tabs.open("background".into()), TabChange::Strip);
        assert_eq!(tabs.open("home".into()), TabChange::Highlight);
        assert_eq!(names(&tabs), vec!["home", "background"]);
        assert_eq!(tabs.active().as_str(), "home");
    }

    #[test]
    fn t_close_active_middle() {
        let mut tabs = abc();
        tabs.open("b".into());
        assert_eq!(tabs.close(&"b".into()), CloseOutcome::ClosedActive("c".into()));
        assert_eq!(names(&tabs), vec!["a", "c"]);
        assert_eq!(tabs.active().as_str(), "c");
    }

    #[test]
    fn t_close_active_last() {
        let mut tabs = abc();
        assert_eq!(tabs.close(&"c".into()), CloseOutcome::ClosedActive("b".into()));
        assert_eq!(names(&tabs), vec!["a", "b"]);
    }

    #[test]
    fn t_close_inactive() {
        let mut tabs = abc();
        assert_eq!(tabs.close(&"a".into()), CloseOutcome::Closed);
        assert_eq!(names(&tabs), vec!["b", "c"]);
        assert_eq!(tabs.active().as_str(), "c");
        assert_eq!(tabs.close(&"zzz".into()), CloseOutcome::Refused);
    }

    #[test]
    fn t_close_sole() {
        let mut tabs = TabList::new(PageName::home());
        assert_eq!(tabs.close(&PageName::home()), CloseOutcome::Refused);
        assert_eq!(tabs.close(&PageName::home()).change(), TabChange::None);
        assert_eq!(names(&tabs), vec!["home"]);
        assert_eq!(tabs.active(), &PageName::home());
    }

    #[test]
    fn t_invariants_hold() {
        let mut tabs = TabList::new("a".into());
        let ops: &[(bool, &str)] = &[
            (true, "b"), (true, "c"), (false, "a"), (true, "a"), (false, "c"),
            (false, "b"), (false, "a"), (true, "d"), (true, "b"), (false, "d"),
        ];
        for (is_open, name) in ops {
            if *is_open {
                tabs.open((*name).into());
            } else {
                tabs.close(&(*name).into());
            }
            assert!(tabs.len() >= 1);
            assert!(tabs.contains(tabs.active()));
            let mut sorted = names(&tabs);
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), tabs.len());
        }
    }

    #[test]
    fn t_merge() {
        assert_eq!(TabChange::Highlight.merge(TabChange::Strip), TabChange::Strip);
        assert_eq!(TabChange::None.merge(TabChange::Highlight), TabChange::Highlight);
    }
}
