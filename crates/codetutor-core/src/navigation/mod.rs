//! Navigation shell module.
//!
//! A fixed sidebar menu of application pages. Rendering compares each entry
//! route with the current location and marks the single match as active;
//! icons are resolved through [`IconRenderer`].
//!
//! # Usage
//!
//! ```
//! use codetutor_core::navigation::{NavigationMenu, TagIconRenderer};
//!
//! let menu = NavigationMenu::default();
//! let views = menu.render("/Debugger");
//! let active: Vec<_> = views.iter().filter(|v| v.active).collect();
//! assert_eq!(active.len(), 1);
//! assert_eq!(active[0].item.label, "Code Debugger");
//! assert_eq!(active[0].icon(&TagIconRenderer), "[code]");
//! ```

mod icon;
mod menu;
mod model;

// Re-export public API
pub use icon::{IconRenderer, TagIconRenderer};
pub use menu::{
    BRAND_TAGLINE, BRAND_TITLE, FEATURES_GROUP_LABEL, FOOTER_TAGLINE, FOOTER_TITLE,
    MENU_GROUP_LABEL, NavEntryView, NavigationMenu, default_nav_items, feature_highlights,
};
pub use model::{Capability, FeatureHighlight, NavItem, Page, page_url};
