//! Page UI state: navigation shell, results surface, theme and scroll.
//!
//! Each piece models one host element's class toggles as an explicit state
//! machine. They share no state with each other.

pub(crate) mod nav;
pub(crate) mod scroll;
pub(crate) mod state;
pub(crate) mod surface;
pub(crate) mod theme;

pub use nav::{NavClick, NavFlags, NavigationShell};
pub use scroll::{ScrollObserver, ScrollUpdate, SectionBounds};
pub use state::{Disclosure, Transition, Visibility};
pub use surface::{ResultsSurface, SearchClick, SurfaceEntry};
pub use theme::{FileStore, KeyValueStore, MemoryStore, Theme, ThemeSwitch};
