//! User interaction: what a click does to the workbench.

use crate::{page::PageName,
            workbench::{Redraw, Workbench}};

/// Viewports up to this width (in CSS pixels) show the explorer as an
/// overlay that closes after use.
pub const NARROW_VIEWPORT_MAX: u32 = 768;

/// Unknown width (host can't tell) counts as wide.
pub fn is_narrow(viewport_width: Option<u32>) -> bool {
    viewport_width.map_or(false, |w| w <= NARROW_VIEWPORT_MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Sidebar,
    ExplorerIcon,
    Elsewhere,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Entry in the explorer's file list
    FileClick { name: PageName, viewport_width: Option<u32> },
    TabClick(PageName),
    TabCloseClick(PageName),
    ExplorerClick,
    /// Any click; only matters for closing the overlay
    DocumentClick { target: ClickTarget, viewport_width: Option<u32> },
}

/// Initial state: show the home page.
pub fn init(wb: &mut Workbench) -> Redraw {
    wb.show(PageName::home())
}

pub fn handle(wb: &mut Workbench, event: UiEvent) -> Redraw {
    match event {
        UiEvent::FileClick { name, viewport_width } => {
            let redraw = wb.show(name);
            if is_narrow(viewport_width) {
                redraw.merge(wb.set_sidebar_open(false))
            } else {
                redraw
            }
        }
        UiEvent::TabClick(name) => wb.show(name),
        UiEvent::TabCloseClick(name) => wb.close_tab(&name),
        UiEvent::ExplorerClick => wb.toggle_sidebar(),
        UiEvent::DocumentClick { target, viewport_width } => {
            if is_narrow(viewport_width) && target == ClickTarget::Elsewhere {
                wb.set_sidebar_open(false)
            } else {
                Redraw::default()
            }
        }
    }
}
