//! Two-state machines behind the page's class toggles.
//!
//! Each interactive surface is either open/closed or shown/hidden. The
//! transition functions report whether the state actually changed, so callers
//! only touch the host's class list when something moved.

/// Result of applying a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged,
}

impl Transition {
    const fn from_change(before: bool, after: bool) -> Self {
        if before == after {
            Self::Unchanged
        } else {
            Self::Changed
        }
    }

    pub const fn changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Open/closed state of a menu or sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Disclosure {
    Open,
    #[default]
    Closed,
}

impl Disclosure {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn open(&mut self) -> Transition {
        self.set(true)
    }

    pub fn close(&mut self) -> Transition {
        self.set(false)
    }

    pub fn toggle(&mut self) -> Transition {
        self.set(!self.is_open())
    }

    fn set(&mut self, open: bool) -> Transition {
        let before = self.is_open();
        *self = if open { Self::Open } else { Self::Closed };
        Transition::from_change(before, open)
    }
}

/// Shown/hidden state of a floating element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    #[default]
    Hidden,
}

impl Visibility {
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }

    pub fn show(&mut self) -> Transition {
        self.set(true)
    }

    pub fn hide(&mut self) -> Transition {
        self.set(false)
    }

    /// Show iff `shown`; used by observers that recompute state from input.
    pub fn set(&mut self, shown: bool) -> Transition {
        let before = self.is_shown();
        *self = if shown { Self::Shown } else { Self::Hidden };
        Transition::from_change(before, shown)
    }
}
