//! Scroll-driven state: back-to-top button, active section, anchor jumps.

use super::nav::NavigationShell;
use super::state::{Transition, Visibility};
use crate::config::ScrollConfig;
use crate::content::Page;

/// Vertical extent of a named section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// What changed after a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub back_to_top: Transition,
    pub active_section_changed: bool,
}

/// Tracks the back-to-top button and the highlighted section link.
///
/// Both are recomputed from the scroll offset alone; neither remembers
/// anything about earlier scroll events.
#[derive(Debug, Clone)]
pub struct ScrollObserver {
    config: ScrollConfig,
    sections: Vec<SectionBounds>,
    back_to_top: Visibility,
    active: Option<String>,
}

impl ScrollObserver {
    pub fn new(config: ScrollConfig, sections: Vec<SectionBounds>) -> Self {
        Self {
            config,
            sections,
            back_to_top: Visibility::Hidden,
            active: None,
        }
    }

    /// Build an observer over the section layout of a page snapshot.
    pub fn for_page(config: ScrollConfig, page: &Page) -> Self {
        let sections = page
            .sections
            .iter()
            .map(|s| SectionBounds {
                id: s.id.clone(),
                top: s.top,
                height: s.height,
            })
            .collect();
        Self::new(config, sections)
    }

    pub const fn back_to_top_visible(&self) -> bool {
        self.back_to_top.is_shown()
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The nav link href that should carry the active class.
    pub fn active_href(&self) -> Option<String> {
        self.active.as_ref().map(|id| format!("#{}", id))
    }

    /// Recompute state for the scroll offset `y`.
    pub fn on_scroll(&mut self, y: f64) -> ScrollUpdate {
        let back_to_top = self
            .back_to_top
            .set(y > self.config.back_to_top_threshold);

        // Later sections win when bounds overlap.
        let offset = self.config.section_offset;
        let current = self
            .sections
            .iter()
            .rev()
            .find(|s| {
                let top = s.top - offset;
                y >= top && y < top + s.height
            })
            .map(|s| s.id.clone());

        let active_section_changed = current != self.active;
        if active_section_changed {
            tracing::trace!("Active section: {:?} -> {:?}", self.active, current);
            self.active = current;
        }

        ScrollUpdate {
            back_to_top,
            active_section_changed,
        }
    }

    /// Scroll offset an in-page anchor click should move to.
    ///
    /// `#` alone and unknown ids produce no scroll.
    pub fn anchor_target(&self, href: &str) -> Option<f64> {
        let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.top - self.config.anchor_offset)
    }

    /// Follow an in-page anchor: resolve its scroll offset and, when the
    /// target exists, close the navigation shell. Unresolvable anchors leave
    /// the shell untouched.
    pub fn activate_anchor(&self, href: &str, nav: &mut NavigationShell) -> Option<f64> {
        let target = self.anchor_target(href)?;
        nav.close();
        Some(target)
    }

    /// Scroll offset for the back-to-top button.
    pub const fn back_to_top_target(&self) -> f64 {
        0.0
    }
}
