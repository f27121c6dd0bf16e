use log::{debug, info};

use crate::dom;
use crate::section::Section;

/// Height of the fixed header; scrolling stops this far above a section.
pub const HEADER_OFFSET: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Navigation always leaves the menu closed.
    pub fn navigated(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

pub fn scroll_target(section_offset_top: f64) -> f64 {
    section_offset_top - HEADER_OFFSET
}

/// Smooth-scrolls the window so `section` sits just below the header.
/// Returns the target offset, or `None` when the section is not on the page.
pub fn scroll_to_section(section: Section) -> Option<f64> {
    let Some(offset_top) = dom::section_offset_top(section) else {
        debug!("section #{} not in document, skipping scroll", section.id());
        return None;
    };
    let top = scroll_target(offset_top);
    info!("navigating to #{} (top {})", section.id(), top);
    dom::smooth_scroll_to(top);
    Some(top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn double_toggle_returns_to_start() {
        let open = MenuState::Open;
        let closed = open.toggle();
        assert_eq!(closed, MenuState::Closed);
        assert_eq!(closed.toggle(), open);
    }

    #[test]
    fn navigation_closes_from_any_state() {
        assert_eq!(MenuState::Open.navigated(), MenuState::Closed);
        assert_eq!(MenuState::Closed.navigated(), MenuState::Closed);
    }

    #[test]
    fn target_leaves_room_for_header() {
        assert_eq!(scroll_target(2400.0), 2320.0);
        assert_eq!(scroll_target(0.0), -80.0);
    }
}
