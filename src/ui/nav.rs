//! Mobile navigation shell (menu or sidebar with overlay).

use super::state::{Disclosure, Transition};

/// Where a document click landed, relative to the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavClick {
    /// Inside the sidebar / menu itself.
    Panel,
    /// On the button that toggles the panel.
    ToggleButton,
    /// On the dimming overlay behind the panel.
    Overlay,
    /// On a navigation link inside the panel.
    Link,
    Elsewhere,
}

/// Host-visible flags derived from the shell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavFlags {
    pub panel_active: bool,
    pub overlay_active: bool,
    pub body_no_scroll: bool,
}

/// The menu/sidebar toggle.
///
/// The panel, overlay and body scroll lock always move together, so one
/// [`Disclosure`] drives all three flags.
#[derive(Debug, Clone, Default)]
pub struct NavigationShell {
    state: Disclosure,
}

impl NavigationShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub const fn flags(&self) -> NavFlags {
        let open = self.state.is_open();
        NavFlags {
            panel_active: open,
            overlay_active: open,
            body_no_scroll: open,
        }
    }

    pub fn toggle(&mut self) -> Transition {
        let transition = self.state.toggle();
        tracing::trace!("Navigation toggled, open={}", self.is_open());
        transition
    }

    pub fn close(&mut self) -> Transition {
        self.state.close()
    }

    /// Handle a click anywhere in the document.
    ///
    /// The toggle button flips the panel; overlay and link clicks close it;
    /// a click outside both the panel and its button closes an open panel.
    /// Clicks inside the panel leave it alone.
    pub fn on_click(&mut self, target: NavClick) -> Transition {
        match target {
            NavClick::ToggleButton => self.toggle(),
            NavClick::Overlay | NavClick::Link | NavClick::Elsewhere => self.close(),
            NavClick::Panel => Transition::Unchanged,
        }
    }

    /// Handle a key press; Escape closes an open panel.
    pub fn on_key(&mut self, key: &str) -> Transition {
        if key == "Escape" {
            self.close()
        } else {
            Transition::Unchanged
        }
    }
}
